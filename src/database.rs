// [[file:../menu.note::*base][base:1]]
use gut::prelude::*;

use diesel::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::*;
use crate::store;

/// Shared handle to the menu cache database.
#[derive(Clone)]
pub struct MenuDb {
    database_url: String,
    connection: Arc<Mutex<SqliteConnection>>,
}

impl MenuDb {
    /// Establish connection to database specified using env var
    /// `MENU_DATABASE_URL`.
    pub fn establish() -> Result<MenuDb> {
        let db_var = "MENU_DATABASE_URL";

        // read vars from .env file
        dotenv::dotenv().ok();
        let database_url =
            std::env::var(db_var).with_context(|| format!("{} var not set", db_var))?;
        debug!("DATABASE URL: {}", database_url);

        Self::connect(&database_url)
    }

    /// Connect to database specified using `database_url`, creating the
    /// `menu_items` table when missing.
    pub fn connect(database_url: &str) -> Result<MenuDb> {
        // diesel accept &str, not Path
        let conn = SqliteConnection::establish(database_url)
            .with_context(|| format!("connect to {}", database_url))?;
        store::create_table(&conn)?;

        let db = MenuDb {
            database_url: database_url.into(),
            connection: Arc::new(Mutex::new(conn)),
        };

        Ok(db)
    }

    /// Show database url.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Lock the underlying connection, e.g. to run several store calls in
    /// one transaction.
    pub fn get(&self) -> Result<MutexGuard<'_, SqliteConnection>> {
        self.connection
            .lock()
            .map_err(|_| Error::msg("cannot lock db connection!"))
    }
}
// base:1 ends here

// [[file:../menu.note::*core][core:1]]
impl MenuDb {
    pub fn save_menu_item(&self, item: &MenuItem) -> Result<()> {
        store::save_menu_item(&*self.get()?, item)
    }

    pub fn save_menu_items(&self, items: &[MenuItem]) -> Result<usize> {
        store::save_menu_items(&*self.get()?, items)
    }

    pub fn delete_menu_item(&self, item_id: i64) -> Result<()> {
        store::delete_menu_item(&*self.get()?, item_id)
    }

    pub fn delete_all_menu_items(&self) -> Result<()> {
        store::delete_all_menu_items(&*self.get()?)
    }

    pub fn get_menu_item(&self, item_id: i64) -> Result<Option<MenuItem>> {
        store::get_menu_item(&*self.get()?, item_id)
    }

    pub fn get_all_menu_items(&self) -> Result<Vec<MenuItem>> {
        store::get_all_menu_items(&*self.get()?)
    }

    pub fn drop_table(&self) -> Result<()> {
        store::drop_table(&*self.get()?)
    }
}

#[test]
fn test_menu_db() -> Result<()> {
    let db = MenuDb::connect(":memory:")?;
    assert_eq!(db.database_url(), ":memory:");

    let item = MenuItem {
        item_id: 3,
        name: "Blog".into(),
        children: vec![4, 5],
        ..Default::default()
    };
    db.save_menu_item(&item)?;

    // clones share the same connection
    let other = db.clone();
    assert_eq!(other.get_menu_item(3)?, Some(item));

    other.delete_menu_item(3)?;
    assert!(db.get_all_menu_items()?.is_empty());

    Ok(())
}

#[test]
fn test_establish_without_env() {
    dotenv::dotenv().ok();
    if std::env::var("MENU_DATABASE_URL").is_ok() {
        return;
    }
    assert!(MenuDb::establish().is_err());
}
// core:1 ends here
