pub mod help;
pub mod players;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::colors::strip_colors;


#[derive(Debug, Clone, PartialEq)]
pub enum CommandResponse {
    /// Goes back to wherever the command came from, addressed to the caller.
    Reply(String),
    /// Sent privately to the caller.
    Notice(String),
}

#[derive(Debug, Error)]
pub enum CommandError {
    /// The command gave up waiting on something remote.
    #[error("command was cancelled")]
    Cancelled,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type CommandResult = Result<Vec<CommandResponse>, CommandError>;

pub fn reply<S: Into<String>>(text: S) -> Vec<CommandResponse> {
    vec![CommandResponse::Reply(text.into())]
}

#[async_trait]
pub trait Command: Send + Sync {
    fn trigger(&self) -> &'static str;
    fn usage(&self) -> &'static str;
    /// `message` is everything after the trigger, colors stripped and trimmed.
    async fn on_command(&self, message: &str) -> CommandResult;
}

pub struct CommandHandler {
    prefix: String,
    commands: Vec<Arc<dyn Command>>,
}

impl CommandHandler {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        CommandHandler {
            prefix: prefix.into(),
            commands: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    pub fn usages(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|command| format!("{}{} {}", self.prefix, command.trigger(), command.usage()))
            .map(|usage| usage.trim_end().to_owned())
            .collect()
    }

    /// Finds the command a chat line is addressed to, along with its argument text.
    pub fn parse(&self, line: &str) -> Option<(Arc<dyn Command>, String)> {
        let line = strip_colors(line);
        let rest = line.trim_start().strip_prefix(self.prefix.as_str())?;
        let (trigger, message) = match rest.find(char::is_whitespace) {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };
        if trigger.is_empty() {
            return None;
        }

        self.commands
            .iter()
            .find(|command| command.trigger().eq_ignore_ascii_case(trigger))
            .map(|command| (Arc::clone(command), message.trim().to_owned()))
    }
}
