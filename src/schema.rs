// [[file:../menu.note::*schema][schema:1]]
table! {
    menu_items(itemId) {
        itemId -> BigInt,
        itemMenu -> Nullable<BigInt>,
        itemParent -> Nullable<BigInt>,
        itemContentId -> Nullable<BigInt>,
        itemUrl -> Nullable<Text>,
        itemName -> Nullable<Text>,
        itemDetails -> Nullable<Text>,
        itemLinkTarget -> Nullable<Text>,
        itemLinkTitle -> Nullable<Text>,
        itemType -> Nullable<Text>,
        itemTypeFamily -> Nullable<Text>,
        itemTypeLabel -> Nullable<Text>,
        itemChildren -> Nullable<Text>,
    }
}
// schema:1 ends here

// [[file:../menu.note::*columns][columns:1]]
pub const MENU_ITEMS_TABLE_NAME: &str = "menu_items";

/// INTEGER PRIMARY KEY
pub const ID_COLUMN: &str = "itemId";
pub const MENU_ID_COLUMN: &str = "itemMenu";
pub const PARENT_ID_COLUMN: &str = "itemParent";
pub const CONTENT_ID_COLUMN: &str = "itemContentId";
pub const URL_COLUMN: &str = "itemUrl";
pub const NAME_COLUMN: &str = "itemName";
pub const DETAILS_COLUMN: &str = "itemDetails";
pub const LINK_TARGET_COLUMN: &str = "itemLinkTarget";
pub const LINK_TITLE_COLUMN: &str = "itemLinkTitle";
pub const TYPE_COLUMN: &str = "itemType";
pub const TYPE_FAMILY_COLUMN: &str = "itemTypeFamily";
pub const TYPE_LABEL_COLUMN: &str = "itemTypeLabel";
/// Child item ids, comma separated
pub const CHILDREN_COLUMN: &str = "itemChildren";

pub const CREATE_MENU_ITEMS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS menu_items (
  itemId INTEGER PRIMARY KEY,
  itemMenu INTEGER,
  itemParent INTEGER,
  itemContentId INTEGER,
  itemUrl TEXT,
  itemName TEXT,
  itemDetails TEXT,
  itemLinkTarget TEXT,
  itemLinkTitle TEXT,
  itemType TEXT,
  itemTypeFamily TEXT,
  itemTypeLabel TEXT,
  itemChildren TEXT
);
"#;

pub const DROP_MENU_ITEMS_TABLE_SQL: &str = "DROP TABLE menu_items;";
// columns:1 ends here

// [[file:../menu.note::*test][test:1]]
#[test]
fn test_ddl_columns() {
    let columns = [
        ID_COLUMN,
        MENU_ID_COLUMN,
        PARENT_ID_COLUMN,
        CONTENT_ID_COLUMN,
        URL_COLUMN,
        NAME_COLUMN,
        DETAILS_COLUMN,
        LINK_TARGET_COLUMN,
        LINK_TITLE_COLUMN,
        TYPE_COLUMN,
        TYPE_FAMILY_COLUMN,
        TYPE_LABEL_COLUMN,
        CHILDREN_COLUMN,
    ];
    for col in columns.iter() {
        assert!(CREATE_MENU_ITEMS_TABLE_SQL.contains(&format!("  {} ", col)), "{}", col);
    }
    assert!(CREATE_MENU_ITEMS_TABLE_SQL.contains(MENU_ITEMS_TABLE_NAME));
    assert!(DROP_MENU_ITEMS_TABLE_SQL.contains(MENU_ITEMS_TABLE_NAME));
}
// test:1 ends here
