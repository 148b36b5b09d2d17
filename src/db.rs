// [[file:../menu.note::*imports][imports:1]]
use gut::prelude::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::models::*;
use crate::schema::*;
// imports:1 ends here

// [[file:../menu.note::*base][base:1]]
mod base {
    use super::*;

    /// Menu item store for async callers, backed by a sqlx pool.
    pub struct MenuCache {
        // https://docs.rs/sqlx/0.5.7/sqlx/pool/struct.Pool.html#why-use-a-pool
        pool: SqlitePool,
    }

    impl MenuCache {
        /// Connect to `uri` and make sure the `menu_items` table exists. A
        /// missing database file is created.
        pub async fn connect(uri: &str) -> Result<Self> {
            let options = uri
                .parse::<SqliteConnectOptions>()
                .with_context(|| format!("invalid sqlite uri: {}", uri))?
                .create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .connect_with(options)
                .await
                .with_context(|| format!("connect to {}", uri))?;
            Self::from_pool(pool).await
        }

        /// A private in-memory cache. The pool is limited to one connection,
        /// since every sqlite memory connection is a separate database.
        pub async fn in_memory() -> Result<Self> {
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect("sqlite::memory:")
                .await?;
            Self::from_pool(pool).await
        }

        async fn from_pool(pool: SqlitePool) -> Result<Self> {
            sqlx::query(CREATE_MENU_ITEMS_TABLE_SQL)
                .execute(&pool)
                .await
                .context("create menu_items table")?;
            Ok(Self { pool })
        }

        pub fn pool(&self) -> &SqlitePool {
            &self.pool
        }
    }
}
pub use base::MenuCache;
// base:1 ends here

// [[file:../menu.note::*core][core:1]]
impl MenuCache {
    /// Insert or replace `item`. Negative ids are skipped.
    pub async fn save_menu_item(&self, item: &MenuItem) -> Result<()> {
        if item.item_id < 0 {
            return Ok(());
        }

        let row = item.to_row();
        sqlx::query(
            r#"
INSERT OR REPLACE INTO menu_items
       (itemId, itemMenu, itemParent, itemContentId, itemUrl, itemName, itemDetails,
        itemLinkTarget, itemLinkTitle, itemType, itemTypeFamily, itemTypeLabel, itemChildren)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#,
        )
        .bind(row.item_id)
        .bind(row.menu_id)
        .bind(row.parent_id)
        .bind(row.content_id)
        .bind(row.url)
        .bind(row.name)
        .bind(row.details)
        .bind(row.link_target)
        .bind(row.link_title)
        .bind(row.item_type)
        .bind(row.type_family)
        .bind(row.type_label)
        .bind(row.children)
        .execute(self.pool())
        .await
        .with_context(|| format!("save menu item {}", item.item_id))?;

        debug!("saved menu item {}", item.item_id);
        Ok(())
    }

    /// Remove the row for `item_id`. Negative or unknown ids are ignored.
    pub async fn delete_menu_item(&self, item_id: i64) -> Result<()> {
        if item_id < 0 {
            return Ok(());
        }

        sqlx::query("DELETE FROM menu_items WHERE itemId = ?")
            .bind(item_id)
            .execute(self.pool())
            .await
            .with_context(|| format!("delete menu item {}", item_id))?;
        Ok(())
    }

    /// Remove every menu item.
    pub async fn delete_all_menu_items(&self) -> Result<()> {
        let done = sqlx::query("DELETE FROM menu_items")
            .execute(self.pool())
            .await
            .context("delete all menu items")?;
        info!("deleted all {} menu items", done.rows_affected());
        Ok(())
    }

    /// Return the menu item stored under `item_id`, if any.
    pub async fn get_menu_item(&self, item_id: i64) -> Result<Option<MenuItem>> {
        if item_id < 0 {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, MenuItemRow>("SELECT * FROM menu_items WHERE itemId = ?")
            .bind(item_id)
            .fetch_optional(self.pool())
            .await
            .with_context(|| format!("load menu item {}", item_id))?;
        Ok(row.map(MenuItem::from_row))
    }

    /// Return all stored menu items, in no particular order.
    pub async fn get_all_menu_items(&self) -> Result<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemRow>("SELECT * FROM menu_items")
            .fetch_all(self.pool())
            .await
            .context("load menu items")?;

        Ok(rows.into_iter().map(MenuItem::from_row).collect_vec())
    }
}
// core:1 ends here

// [[file:../menu.note::*test][test:1]]
#[cfg(test)]
mod tests {
    use super::*;

    fn nav_item(item_id: i64, children: Vec<i64>) -> MenuItem {
        MenuItem {
            item_id,
            menu_id: 1,
            name: format!("item {}", item_id),
            url: format!("https://example.com/{}", item_id),
            item_type: "custom".into(),
            children,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_menu_cache() -> Result<()> {
        let cache = MenuCache::in_memory().await?;

        let item = nav_item(10, vec![3, 17, 9]);
        cache.save_menu_item(&item).await?;
        cache.save_menu_item(&nav_item(-2, vec![])).await?;
        assert_eq!(cache.get_menu_item(10).await?, Some(item));
        assert_eq!(cache.get_menu_item(-2).await?, None);
        assert_eq!(cache.get_menu_item(11).await?, None);

        // replace keeps a single row
        let mut item = nav_item(10, vec![]);
        item.name = "renamed".into();
        cache.save_menu_item(&item).await?;
        let all = cache.get_all_menu_items().await?;
        assert_eq!(all, vec![item]);

        cache.save_menu_item(&nav_item(11, vec![])).await?;
        cache.delete_menu_item(99).await?;
        cache.delete_menu_item(10).await?;
        assert_eq!(cache.get_all_menu_items().await?.len(), 1);

        cache.delete_all_menu_items().await?;
        assert!(cache.get_all_menu_items().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_connect_new_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("menu.db");
        assert!(!path.exists());

        let uri = format!("sqlite://{}", path.display());
        let cache = MenuCache::connect(&uri).await?;
        assert!(path.exists());

        let item = nav_item(21, vec![22, 23]);
        cache.save_menu_item(&item).await?;
        assert_eq!(cache.get_menu_item(21).await?, Some(item.clone()));

        // reopening sees the saved row
        drop(cache);
        let cache = MenuCache::connect(&uri).await?;
        assert_eq!(cache.get_all_menu_items().await?, vec![item]);
        Ok(())
    }

    #[tokio::test]
    async fn test_null_columns() -> Result<()> {
        let cache = MenuCache::in_memory().await?;
        sqlx::query("INSERT INTO menu_items (itemId) VALUES (1)")
            .execute(cache.pool())
            .await?;

        let item = cache.get_menu_item(1).await?.expect("menu item 1");
        assert_eq!(item, MenuItem { item_id: 1, ..Default::default() });
        Ok(())
    }
}
// test:1 ends here
