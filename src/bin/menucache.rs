// [[file:../../menu.note::*imports][imports:1]]
use gut::prelude::*;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

use libmenu::{MenuDb, MenuItem};
// imports:1 ends here

// [[file:../../menu.note::*cli][cli:1]]
/// Inspect and maintain the offline menu item cache.
#[derive(Debug, StructOpt)]
#[structopt(name = "menucache")]
struct Cli {
    /// Database url. Defaults to the `MENU_DATABASE_URL` env var (or .env file).
    #[structopt(long = "db")]
    database_url: Option<String>,

    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    /// Create the menu_items table if missing.
    Init,
    /// List all cached menu items.
    List,
    /// Print one menu item as JSON.
    Show { item_id: i64 },
    /// Save menu items from a JSON array file, replacing existing ones.
    Import {
        #[structopt(parse(from_os_str))]
        file: PathBuf,
    },
    /// Delete one menu item.
    Delete { item_id: i64 },
    /// Delete all menu items.
    Clear,
    /// Drop the menu_items table.
    Drop,
}

fn read_menu_items(file: &Path) -> Result<Vec<MenuItem>> {
    let s = std::fs::read_to_string(file).with_context(|| format!("read {:?}", file))?;
    let items: Vec<MenuItem> = match serde_json::from_str(&s) {
        Ok(items) => items,
        Err(err) => bail!("invalid menu items in {:?}: {}", file, err),
    };
    Ok(items)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::from_args();
    let db = match &args.database_url {
        Some(url) => MenuDb::connect(url)?,
        None => MenuDb::establish()?,
    };
    debug!("using menu cache {}", db.database_url());

    match args.cmd {
        // the table is created on connect
        Cmd::Init => println!("menu_items table ready in {}", db.database_url()),
        Cmd::List => {
            let items = db.get_all_menu_items()?;
            for item in &items {
                println!("{}", item);
            }
            println!("{} menu items", items.len());
        }
        Cmd::Show { item_id } => match db.get_menu_item(item_id)? {
            Some(item) => println!("{}", serde_json::to_string_pretty(&item)?),
            None => eprintln!("menu item {} not found", item_id),
        },
        Cmd::Import { file } => {
            let items = read_menu_items(&file)?;
            let n = db.save_menu_items(&items)?;
            println!("saved {} of {} menu items", n, items.len());
        }
        Cmd::Delete { item_id } => db.delete_menu_item(item_id)?,
        Cmd::Clear => db.delete_all_menu_items()?,
        Cmd::Drop => db.drop_table()?,
    }

    Ok(())
}
// cli:1 ends here

// [[file:../../menu.note::*test][test:1]]
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn json_file(body: &str) -> Result<tempfile::NamedTempFile> {
        let mut f = tempfile::Builder::new().suffix(".json").tempfile()?;
        f.write_all(body.as_bytes())?;
        Ok(f)
    }

    #[test]
    fn test_read_menu_items() -> Result<()> {
        let f = json_file(r#"[{"itemId": 1, "name": "Home", "children": [2]}, {"itemId": 2, "parentId": 1}]"#)?;
        let items = read_menu_items(f.path())?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Home");
        assert_eq!(items[0].children, vec![2]);
        assert_eq!(items[1].parent_id, 1);

        let f = json_file(r#"{"itemId": 1}"#)?;
        let err = read_menu_items(f.path()).unwrap_err();
        assert!(err.to_string().starts_with("invalid menu items"));

        assert!(read_menu_items(Path::new("/nonexistent/menu.json")).is_err());
        Ok(())
    }
}
// test:1 ends here
