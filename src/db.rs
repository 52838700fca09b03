use anyhow::{anyhow, Context};
use lazy_static::lazy_static;
use log::*;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension};
use std::convert::TryFrom;
use std::path::Path;

use crate::model::{app_info::AppInfo, enums::AppType};
use migrant_lib::{list, Config, EmbeddedMigration, Migratable, Migrator, Settings};

#[cfg(test)]
pub mod test_helpers;


const MIGRATION_SCRIPTS: [(&str, &str); 1] = [(
    "001-baseline",
    include_str!("db/sql/migrations/001_baseline.sql"),
)];

lazy_static! {
    static ref MIGRATIONS: Vec<EmbeddedMigration> = MIGRATION_SCRIPTS
        .iter()
        .map(|&(tag, up)| {
            let mut migration = EmbeddedMigration::with_tag(tag);
            migration.up(up);
            migration
        })
        .collect();
}

/// Read-only access to the app catalog.
#[derive(Clone)]
pub struct DbConnection(Pool<SqliteConnectionManager>);
impl DbConnection {
    pub fn new<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let manager = SqliteConnectionManager::file(&path);
        let pool = Pool::new(manager)?;
        let db_conn = DbConnection(pool);
        db_conn.initialise(&path)?;
        Ok(db_conn)
    }

    fn initialise<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        info!("db::initialise");
        let settings = Settings::configure_sqlite()
            .database_path(path)
            .map_err(|e| anyhow!("bad database path: {}", e))?
            .build()
            .map_err(|e| anyhow!("cannot build migration settings: {}", e))?;
        let mut config = Config::with_settings(&settings);
        config
            .setup()
            .map_err(|e| anyhow!("cannot set up migration table: {}", e))?;

        config
            .use_migrations(
                MIGRATIONS[..]
                    .iter()
                    .cloned()
                    .map(|migration| -> Box<dyn Migratable + 'static> { Box::new(migration) })
                    .collect::<Vec<_>>(),
            )
            .map_err(|e| anyhow!("cannot register migrations: {}", e))?;

        let config = config
            .reload()
            .map_err(|e| anyhow!("cannot reload migration config: {}", e))?;

        Migrator::with_config(&config)
            .all(true)
            .show_output(false)
            .swallow_completion(true)
            .apply()
            .map_err(|e| anyhow!("cannot apply migrations: {}", e))?;

        let config = config
            .reload()
            .map_err(|e| anyhow!("cannot reload migration config: {}", e))?;
        list(&config).map_err(|e| anyhow!("cannot list migrations: {}", e))?;

        Ok(())
    }

    /// Most recently updated app whose name matches the `LIKE` pattern.
    pub fn find_app_id_by_name(&self, pattern: &str) -> anyhow::Result<Option<u32>> {
        info!("db::find_app_id_by_name: {}", pattern);
        let conn = &*self.0.clone().get()?;
        let option_app_id: Option<i64> = conn
            .query_row(
                include_str!("db/sql/select_app_id_by_name.sql"),
                params![pattern],
                |row| row.get(0),
            )
            .optional()
            .context("select_app_id_by_name")?;

        option_app_id
            .map(|app_id| {
                u32::try_from(app_id).map_err(|_| anyhow!("app id {} out of range", app_id))
            })
            .transpose()
    }

    pub fn app_name_and_type(&self, app_id: u32) -> anyhow::Result<Option<AppInfo>> {
        info!("db::app_name_and_type: {}", app_id);
        let conn = &*self.0.clone().get()?;
        let option_row: Option<(Option<String>, Option<String>)> = conn
            .query_row(
                include_str!("db/sql/select_app_name_and_type.sql"),
                params![app_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .context("select_app_name_and_type")?;

        Ok(option_row.map(|(option_name, option_type)| AppInfo {
            name: option_name.unwrap_or_else(|| format!("AppID {}", app_id)),
            app_type: AppType::from_display_name(option_type.as_deref().unwrap_or_default()),
        }))
    }
}
