// [[file:../menu.note::*imports][imports:1]]
#[macro_use]
extern crate diesel;
// imports:1 ends here

// [[file:../menu.note::*mods][mods:1]]
pub mod models;
pub mod schema;
pub mod store;

mod database;
mod db;
// mods:1 ends here

// [[file:../menu.note::*pub][pub:1]]
pub use crate::database::MenuDb;
pub use crate::db::MenuCache;
pub use crate::models::{MenuItem, MenuItemRow};
// pub:1 ends here
