use anyhow::Context;
use async_trait::async_trait;
use log::*;
use tokio::task;

use super::{reply, Command, CommandError, CommandResponse, CommandResult};
use crate::colors::{Palette, NORMAL};
use crate::db::DbConnection;
use crate::search::to_sql_search;
use crate::web_api::{ApiError, PlayerCountApi};


/// Asking for app 0 gets the Steam-wide count, which is shown as the Steam app.
const STEAM_APP_ID: u32 = 753;

pub struct PlayersCommand<A> {
    db_conn: DbConnection,
    api: A,
    palette: Palette,
    prefix: String,
    steamdb_url: String,
}

impl<A: PlayerCountApi> PlayersCommand<A> {
    pub fn new(
        db_conn: DbConnection,
        api: A,
        palette: Palette,
        prefix: &str,
        steamdb_url: &str,
    ) -> Self {
        let mut steamdb_url = steamdb_url.to_owned();
        if !steamdb_url.ends_with('/') {
            steamdb_url.push('/');
        }
        PlayersCommand {
            db_conn,
            api,
            palette,
            prefix: prefix.to_owned(),
            steamdb_url,
        }
    }

    fn usage_responses(&self) -> Vec<CommandResponse> {
        let palette = &self.palette;
        vec![
            CommandResponse::Reply(format!(
                "Usage:{} players <appid or partial game name>",
                palette.usage
            )),
            CommandResponse::Notice(format!(
                "Use {}^{} and {}${} just like in regex to narrow down your match, e.g:{} {}players Portal$",
                palette.syntax, NORMAL, palette.syntax, NORMAL, palette.usage, self.prefix
            )),
        ]
    }

    async fn find_app_id(&self, pattern: String) -> anyhow::Result<Option<u32>> {
        let db_conn = self.db_conn.clone();
        task::spawn_blocking(move || db_conn.find_app_id_by_name(&pattern))
            .await
            .context("app search task failed")?
    }

    fn graphs_url(&self, app_id: u32) -> String {
        format!("{}app/{}/graphs/", self.steamdb_url, app_id)
    }
}

#[async_trait]
impl<A: PlayerCountApi> Command for PlayersCommand<A> {
    fn trigger(&self) -> &'static str {
        "players"
    }

    fn usage(&self) -> &'static str {
        "<appid or partial game name>"
    }

    async fn on_command(&self, message: &str) -> CommandResult {
        if message.is_empty() {
            return Ok(self.usage_responses());
        }

        let app_id = match message.parse::<u32>() {
            Ok(app_id) => app_id,
            Err(_) => {
                let pattern = match to_sql_search(message) {
                    Some(pattern) => pattern,
                    None => return Ok(reply("Your request is invalid or too short.")),
                };
                match self.find_app_id(pattern).await? {
                    Some(app_id) if app_id != 0 => app_id,
                    _ => return Ok(reply("Nothing was found matching your request.")),
                }
            }
        };

        let palette = &self.palette;
        let player_count = match self.api.current_players(app_id).await {
            Ok(player_count) => player_count,
            Err(ApiError::Timeout(timeout)) => {
                warn!("player count for {} timed out after {:?}", app_id, timeout);
                return Err(CommandError::Cancelled);
            }
            Err(e) => {
                warn!("player count for {} failed: {}", app_id, e);
                return Ok(reply(format!(
                    "Unable to request player count: {}{}",
                    palette.error,
                    e.public_reason()
                )));
            }
        };

        if !player_count.result.is_ok() {
            return Ok(reply(format!(
                "Unable to request player count: {}{}",
                palette.error, player_count.result
            )));
        }

        let app_id = if app_id == 0 { STEAM_APP_ID } else { app_id };

        let db_conn = self.db_conn.clone();
        let option_app_info = task::spawn_blocking(move || db_conn.app_name_and_type(app_id))
            .await
            .context("app name task failed")??;
        let (name, verb) = match option_app_info {
            Some(app_info) => (app_info.name, app_info.app_type.verb()),
            None => (format!("AppID {}", app_id), "playing"),
        };

        Ok(reply(format!(
            "People {} {}{}{} right now: {}{}{} -{} {}",
            verb,
            palette.name,
            name,
            NORMAL,
            palette.value,
            format_thousands(player_count.player_count),
            NORMAL,
            palette.link,
            self.graphs_url(app_id)
        )))
    }
}

/// `1234567` -> `1,234,567`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}
