// [[file:../menu.note::*imports][imports:1]]
use gut::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::menu_items;
// imports:1 ends here

// [[file:../menu.note::*item][item:1]]
/// A navigation menu entry as received from the site API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    /// Primary key. Items with negative ids are never persisted.
    pub item_id: i64,
    pub menu_id: i64,
    /// 0 for a root item
    pub parent_id: i64,
    pub content_id: i64,
    pub url: String,
    pub name: String,
    pub details: String,
    pub link_target: String,
    pub link_title: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub type_family: String,
    pub type_label: String,
    /// Ordered child item ids.
    pub children: Vec<i64>,
}
// item:1 ends here

// [[file:../menu.note::*row][row:1]]
/// Column values of one `menu_items` row, in table order.
#[derive(Queryable, Insertable, sqlx::FromRow, Debug, Clone, Default, PartialEq)]
#[table_name = "menu_items"]
pub struct MenuItemRow {
    #[column_name = "itemId"]
    #[sqlx(rename = "itemId")]
    pub item_id: i64,
    #[column_name = "itemMenu"]
    #[sqlx(rename = "itemMenu")]
    pub menu_id: Option<i64>,
    #[column_name = "itemParent"]
    #[sqlx(rename = "itemParent")]
    pub parent_id: Option<i64>,
    #[column_name = "itemContentId"]
    #[sqlx(rename = "itemContentId")]
    pub content_id: Option<i64>,
    #[column_name = "itemUrl"]
    #[sqlx(rename = "itemUrl")]
    pub url: Option<String>,
    #[column_name = "itemName"]
    #[sqlx(rename = "itemName")]
    pub name: Option<String>,
    #[column_name = "itemDetails"]
    #[sqlx(rename = "itemDetails")]
    pub details: Option<String>,
    #[column_name = "itemLinkTarget"]
    #[sqlx(rename = "itemLinkTarget")]
    pub link_target: Option<String>,
    #[column_name = "itemLinkTitle"]
    #[sqlx(rename = "itemLinkTitle")]
    pub link_title: Option<String>,
    #[column_name = "itemType"]
    #[sqlx(rename = "itemType")]
    pub item_type: Option<String>,
    #[column_name = "itemTypeFamily"]
    #[sqlx(rename = "itemTypeFamily")]
    pub type_family: Option<String>,
    #[column_name = "itemTypeLabel"]
    #[sqlx(rename = "itemTypeLabel")]
    pub type_label: Option<String>,
    #[column_name = "itemChildren"]
    #[sqlx(rename = "itemChildren")]
    pub children: Option<String>,
}

impl MenuItem {
    /// Map a stored row back into a menu item. NULL integers become 0, NULL
    /// text becomes an empty string, and NULL children an empty list.
    pub fn from_row(row: MenuItemRow) -> Self {
        Self {
            item_id: row.item_id,
            menu_id: row.menu_id.unwrap_or(0),
            parent_id: row.parent_id.unwrap_or(0),
            content_id: row.content_id.unwrap_or(0),
            url: row.url.unwrap_or_default(),
            name: row.name.unwrap_or_default(),
            details: row.details.unwrap_or_default(),
            link_target: row.link_target.unwrap_or_default(),
            link_title: row.link_title.unwrap_or_default(),
            item_type: row.item_type.unwrap_or_default(),
            type_family: row.type_family.unwrap_or_default(),
            type_label: row.type_label.unwrap_or_default(),
            children: row.children.as_deref().map(parse_children).unwrap_or_default(),
        }
    }

    /// Column values for writing this item.
    pub fn to_row(&self) -> MenuItemRow {
        MenuItemRow {
            item_id: self.item_id,
            menu_id: Some(self.menu_id),
            parent_id: Some(self.parent_id),
            content_id: Some(self.content_id),
            url: Some(self.url.clone()),
            name: Some(self.name.clone()),
            details: Some(self.details.clone()),
            link_target: Some(self.link_target.clone()),
            link_title: Some(self.link_title.clone()),
            item_type: Some(self.item_type.clone()),
            type_family: Some(self.type_family.clone()),
            type_label: Some(self.type_label.clone()),
            children: Some(serialize_children(&self.children)),
        }
    }
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        Self::from_row(row)
    }
}
// row:1 ends here

// [[file:../menu.note::*children][children:1]]
// ids are integers, so a comma can never appear inside one
const CHILDREN_SEPARATOR: &str = ",";

/// Join child ids for the `itemChildren` column: [3, 17, 9] => "3,17,9"
pub fn serialize_children(children: &[i64]) -> String {
    children.iter().join(CHILDREN_SEPARATOR)
}

/// Parse the `itemChildren` column. Empty tokens are ignored; anything that
/// is not an integer is dropped with a warning.
pub fn parse_children(s: &str) -> Vec<i64> {
    s.split(CHILDREN_SEPARATOR)
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .filter_map(|x| match x.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("ignored invalid child id: {:?}", x);
                None
            }
        })
        .collect()
}
// children:1 ends here

// [[file:../menu.note::*alignment str][alignment str:1]]
// Pad or truncate `s` to `max_width` display columns, counting wide (CJK)
// chars as two.
fn get_aligned_string(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut aligned = String::new();
    let mut width = 0;
    for c in s.chars().map(|c| if c.is_control() { ' ' } else { c }) {
        let w = c.width_cjk().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        aligned.push(c);
    }
    aligned.extend(std::iter::repeat(' ').take(max_width - width));
    aligned
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = get_aligned_string(&self.name, 30);
        let kind = get_aligned_string(&self.item_type, 12);
        write!(
            f,
            "{:>8} | {:>6} | {:>8} | {} | {} | {}",
            self.item_id, self.menu_id, self.parent_id, name, kind, self.url
        )
    }
}
// alignment str:1 ends here

// [[file:../menu.note::*test][test:1]]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_codec() {
        assert_eq!(serialize_children(&[3, 17, 9]), "3,17,9");
        assert_eq!(parse_children("3,17,9"), vec![3, 17, 9]);
        assert_eq!(serialize_children(&[]), "");
        assert!(parse_children("").is_empty());
        assert_eq!(parse_children("5"), vec![5]);
        assert_eq!(parse_children(" 1, 2 ,,3,"), vec![1, 2, 3]);
        assert_eq!(parse_children("1,x,2"), vec![1, 2]);
    }

    #[test]
    fn test_row_mapping() {
        let item = MenuItem {
            item_id: 42,
            menu_id: 7,
            parent_id: 3,
            content_id: 1001,
            url: "https://example.com/about".into(),
            name: "About".into(),
            item_type: "page".into(),
            children: vec![43, 44],
            ..Default::default()
        };
        let row = item.to_row();
        assert_eq!(row.children.as_deref(), Some("43,44"));
        assert_eq!(row.details.as_deref(), Some(""));
        assert_eq!(MenuItem::from_row(row), item);

        // all nullable columns missing
        let row = MenuItemRow {
            item_id: 9,
            ..Default::default()
        };
        let item = MenuItem::from(row);
        assert_eq!(item.item_id, 9);
        assert_eq!(item.menu_id, 0);
        assert_eq!(item.name, "");
        assert!(item.children.is_empty());
    }

    #[test]
    fn test_item_json() {
        let json = r#"{"itemId": 5, "menuId": 2, "name": "Home", "type": "custom", "typeFamily": "custom", "children": [6, 7]}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_id, 5);
        assert_eq!(item.item_type, "custom");
        assert_eq!(item.children, vec![6, 7]);
        assert_eq!(item.url, "");
    }

    #[test]
    fn test_aligned_display() {
        assert_eq!(get_aligned_string("abcdef", 3), "abc");
        assert_eq!(get_aligned_string("ab", 4), "ab  ");
        assert_eq!(get_aligned_string("菜单", 6), "菜单  ");
        assert_eq!(get_aligned_string("菜单", 3), "菜 ");

        let item = MenuItem {
            item_id: 1,
            name: "Home".into(),
            ..Default::default()
        };
        let line = item.to_string();
        assert!(line.contains("Home"));
        assert!(line.trim_start().starts_with('1'));
    }
}
// test:1 ends here
