use super::*;
use std::error::Error;

pub struct TestApp<'a> {
    pub app_id: u32,
    pub type_name: &'a str,
    pub name: &'a str,
    pub store_name: &'a str,
    pub last_known_name: &'a str,
    pub last_updated: &'a str,
}

impl DbConnection {
    fn test_initialise(&mut self) -> Result<(), Box<dyn Error>> {
        let conn = &mut *self.0.clone().get()?;
        let tx = conn.transaction()?;
        for &(_, up) in MIGRATION_SCRIPTS.iter() {
            tx.execute_batch(up)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// In-memory catalog with the schema applied and no apps.
    pub fn test() -> Self {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder().max_size(1).build(manager).unwrap();
        let mut db_conn = DbConnection(pool);
        let result = db_conn.test_initialise();
        println!("TEST DB INITIALISATION: {:?}", result);
        result.unwrap();
        db_conn
    }

    pub fn insert_test_app(&self, app: &TestApp) {
        let conn = &*self.0.clone().get().unwrap();
        let rows = conn
            .execute(
                include_str!("sql/insert_app.sql"),
                params![
                    app.app_id,
                    app.type_name,
                    app.name,
                    app.store_name,
                    app.last_known_name,
                    app.last_updated,
                ],
            )
            .unwrap();
        assert_eq!(rows, 1, "unknown app type {}", app.type_name);
    }

    pub fn insert_game(&self, app_id: u32, name: &str, last_updated: &str) {
        self.insert_test_app(&TestApp {
            app_id,
            type_name: "game",
            name,
            store_name: name,
            last_known_name: name,
            last_updated,
        });
    }

    pub fn count_apps(&self) -> i32 {
        let conn = &*self.0.clone().get().unwrap();
        conn.query_row("SELECT COUNT(*) FROM apps", params![], |r| r.get(0))
            .unwrap()
    }
}
