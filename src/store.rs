// [[file:../menu.note::*imports][imports:1]]
use gut::prelude::*;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::models::*;
use crate::schema::*;
// imports:1 ends here

// [[file:../menu.note::*table][table:1]]
/// Create the `menu_items` table unless it already exists.
pub fn create_table(conn: &SqliteConnection) -> Result<()> {
    conn.batch_execute(CREATE_MENU_ITEMS_TABLE_SQL)
        .context("create menu_items table")?;
    info!("table {} is ready", MENU_ITEMS_TABLE_NAME);
    Ok(())
}

/// Drop the `menu_items` table. Fails if the table does not exist.
pub fn drop_table(conn: &SqliteConnection) -> Result<()> {
    conn.batch_execute(DROP_MENU_ITEMS_TABLE_SQL)
        .context("drop menu_items table")?;
    info!("table {} dropped", MENU_ITEMS_TABLE_NAME);
    Ok(())
}
// table:1 ends here

// [[file:../menu.note::*save][save:1]]
/// Insert `item`, replacing any row with the same item id. Items with a
/// negative id are skipped.
pub fn save_menu_item(conn: &SqliteConnection, item: &MenuItem) -> Result<()> {
    if item.item_id < 0 {
        debug!("skipped menu item with negative id {}", item.item_id);
        return Ok(());
    }

    diesel::replace_into(menu_items::table)
        .values(&item.to_row())
        .execute(conn)
        .with_context(|| format!("save menu item {}", item.item_id))?;
    debug!("saved menu item {}", item.item_id);
    Ok(())
}

/// Save all `items` in one transaction. Return the number of rows written.
pub fn save_menu_items(conn: &SqliteConnection, items: &[MenuItem]) -> Result<usize> {
    conn.transaction::<_, Error, _>(|| {
        let mut n = 0;
        for item in items.iter().filter(|x| x.item_id >= 0) {
            save_menu_item(conn, item)?;
            n += 1;
        }
        Ok(n)
    })
}
// save:1 ends here

// [[file:../menu.note::*delete][delete:1]]
/// Remove the row for `item_id`. Negative or unknown ids are ignored.
pub fn delete_menu_item(conn: &SqliteConnection, item_id: i64) -> Result<()> {
    if item_id < 0 {
        return Ok(());
    }

    let n = diesel::delete(menu_items::table.find(item_id))
        .execute(conn)
        .with_context(|| format!("delete menu item {}", item_id))?;
    debug!("deleted {} row(s) for menu item {}", n, item_id);
    Ok(())
}

/// Remove every menu item.
pub fn delete_all_menu_items(conn: &SqliteConnection) -> Result<()> {
    let n = diesel::delete(menu_items::table)
        .execute(conn)
        .context("delete all menu items")?;
    info!("deleted all {} menu items", n);
    Ok(())
}
// delete:1 ends here

// [[file:../menu.note::*get][get:1]]
/// Return the menu item stored under `item_id`, if any.
pub fn get_menu_item(conn: &SqliteConnection, item_id: i64) -> Result<Option<MenuItem>> {
    if item_id < 0 {
        return Ok(None);
    }

    let row = menu_items::table
        .find(item_id)
        .first::<MenuItemRow>(conn)
        .optional()
        .with_context(|| format!("load menu item {}", item_id))?;
    Ok(row.map(MenuItem::from_row))
}

/// Return all stored menu items. No ordering is applied.
pub fn get_all_menu_items(conn: &SqliteConnection) -> Result<Vec<MenuItem>> {
    let rows = menu_items::table
        .load::<MenuItemRow>(conn)
        .context("load menu items")?;
    debug!("loaded {} menu items", rows.len());

    Ok(rows.into_iter().map(MenuItem::from_row).collect_vec())
}
// get:1 ends here

// test:1 ends here
