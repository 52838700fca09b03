//! The IRC side: connects, feeds chat lines to the command handler and sends the answers back.

use futures::StreamExt;
use irc::client::prelude::{Client, Command as IrcCommand, Config, Sender};
use log::*;
use std::sync::Arc;
use tokio::task;

use crate::colors::Palette;
use crate::commands::{Command, CommandError, CommandHandler, CommandResponse};
use crate::config::IrcSettings;


const CANCELLED_NOTICE: &str = "Your command took too long to complete, try again later.";

/// Where a command came from, which decides where its responses go.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    pub nickname: String,
    /// The channel for channel messages, the caller's nick for private ones.
    pub reply_target: String,
}

impl Origin {
    pub fn in_channel(&self) -> bool {
        self.reply_target.starts_with(&['#', '&', '+', '!'][..])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outgoing {
    Privmsg { target: String, text: String },
    Notice { target: String, text: String },
}

pub fn address(response: CommandResponse, origin: &Origin, palette: &Palette) -> Outgoing {
    match response {
        CommandResponse::Reply(text) if origin.in_channel() => Outgoing::Privmsg {
            target: origin.reply_target.clone(),
            text: palette.render(&format!("{}: {}", origin.nickname, text)),
        },
        CommandResponse::Reply(text) => Outgoing::Privmsg {
            target: origin.reply_target.clone(),
            text: palette.render(&text),
        },
        CommandResponse::Notice(text) => Outgoing::Notice {
            target: origin.nickname.clone(),
            text: palette.render(&text),
        },
    }
}

/// What the caller sees for a command that did not finish.
pub fn responses_for_error(error: &CommandError) -> Vec<CommandResponse> {
    match error {
        CommandError::Cancelled => vec![CommandResponse::Notice(CANCELLED_NOTICE.to_owned())],
        CommandError::Unexpected(_) => Vec::new(),
    }
}

pub fn irc_config(settings: &IrcSettings) -> Config {
    let mut config = Config::default();
    config.nickname = Some(settings.nickname.clone());
    config.server = Some(settings.server.clone());
    config.port = Some(settings.port);
    config.use_tls = Some(settings.use_tls);
    config.password = settings.password.clone();
    config.channels = settings.channels.clone();
    config
}

pub async fn run(
    settings: &IrcSettings,
    handler: Arc<CommandHandler>,
    palette: Palette,
) -> anyhow::Result<()> {
    let mut client = Client::from_config(irc_config(settings)).await?;
    client.identify()?;
    info!("Connected to {}:{} as {}", settings.server, settings.port, settings.nickname);

    let mut stream = client.stream()?;
    let sender = client.sender();

    while let Some(message) = stream.next().await.transpose()? {
        let text = match message.command {
            IrcCommand::PRIVMSG(_, ref text) => text,
            _ => continue,
        };
        let (nickname, reply_target) = match (message.source_nickname(), message.response_target()) {
            (Some(nickname), Some(reply_target)) => (nickname.to_owned(), reply_target.to_owned()),
            _ => continue,
        };
        let (command, args) = match handler.parse(text) {
            Some(parsed) => parsed,
            None => continue,
        };

        let origin = Origin {
            nickname,
            reply_target,
        };
        info!(
            "{} in {} ran {} '{}'",
            origin.nickname,
            origin.reply_target,
            command.trigger(),
            args
        );
        task::spawn(run_command(
            command,
            args,
            origin,
            sender.clone(),
            palette.clone(),
        ));
    }

    warn!("IRC stream ended");
    Ok(())
}

async fn run_command(
    command: Arc<dyn Command>,
    args: String,
    origin: Origin,
    sender: Sender,
    palette: Palette,
) {
    let responses = match command.on_command(&args).await {
        Ok(responses) => responses,
        Err(e) => {
            match e {
                CommandError::Cancelled => warn!("{} from {} was cancelled", command.trigger(), origin.nickname),
                CommandError::Unexpected(ref err) => error!("{} failed: {:?}", command.trigger(), err),
            }
            responses_for_error(&e)
        }
    };

    for response in responses {
        let result = match address(response, &origin, &palette) {
            Outgoing::Privmsg { target, text } => sender.send_privmsg(target, text),
            Outgoing::Notice { target, text } => sender.send_notice(target, text),
        };
        if let Err(e) = result {
            error!("Could not send response to {}: {}", origin.nickname, e);
        }
    }
}
