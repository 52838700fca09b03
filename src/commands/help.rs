use async_trait::async_trait;

use super::{reply, Command, CommandHandler, CommandResult};

pub struct HelpCommand {
    text: String,
}

impl HelpCommand {
    /// Snapshot of everything registered so far, plus help itself.
    pub fn new(handler: &CommandHandler) -> Self {
        let mut usages = handler.usages();
        usages.push(format!("{}help", handler.prefix()));
        HelpCommand {
            text: format!("Commands: {}", usages.join(" | ")),
        }
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn trigger(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        ""
    }

    async fn on_command(&self, _message: &str) -> CommandResult {
        Ok(reply(self.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandResponse;
    use std::sync::Arc;

    struct Ping;

    #[async_trait]
    impl Command for Ping {
        fn trigger(&self) -> &'static str {
            "ping"
        }
        fn usage(&self) -> &'static str {
            ""
        }
        async fn on_command(&self, _message: &str) -> CommandResult {
            Ok(reply("pong"))
        }
    }

    #[tokio::test]
    async fn lists_registered_commands() {
        let mut handler = CommandHandler::new(".");
        handler.register(Arc::new(Ping));
        let help = HelpCommand::new(&handler);
        handler.register(Arc::new(help));

        let (command, message) = handler.parse(".help").unwrap();
        let responses = command.on_command(&message).await.unwrap();
        assert_eq!(
            responses,
            vec![CommandResponse::Reply("Commands: .ping | .help".to_owned())]
        );
    }
}
