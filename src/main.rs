mod colors;
mod commands;
mod config;
mod db;
mod irc_client;
mod model;
mod search;
mod web_api;

use anyhow::Context;
use log::*;
use simplelog::{Config, SimpleLogger};
use std::env;
use std::path::Path;
use std::sync::Arc;

use crate::commands::{help::HelpCommand, players::PlayersCommand, CommandHandler};
use crate::config::BotConfig;
use crate::db::DbConnection;
use crate::web_api::SteamWebApi;

const DEFAULT_CONFIG_PATH: &str = "resources/config.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = do_main().await {
        error!("bot crashed with error {:?}", e);
        eprintln!("bot crashed with error {:?}", e);
        std::process::exit(1);
    }
}

async fn do_main() -> anyhow::Result<()> {
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let config = if Path::new(&config_path).is_file() {
        BotConfig::from_file(&config_path)?
    } else {
        BotConfig::default()
    };

    SimpleLogger::init(config.log_level()?, Config::default())?;
    info!("Logger initialised");
    info!("Using config from {}", config_path);

    let db_conn = DbConnection::new(&config.database_path)
        .with_context(|| format!("cannot open {}", config.database_path.display()))?;
    info!("Opened database connection");

    let api = SteamWebApi::new(&config.web_api)?;

    let mut handler = CommandHandler::new(config.command_prefix.clone());
    handler.register(Arc::new(PlayersCommand::new(
        db_conn,
        api,
        config.colors.clone(),
        &config.command_prefix,
        &config.steamdb_url,
    )));
    let help = HelpCommand::new(&handler);
    handler.register(Arc::new(help));
    info!("Registered commands: {:?}", handler.usages());

    irc_client::run(&config.irc, Arc::new(handler), config.colors.clone()).await
}
