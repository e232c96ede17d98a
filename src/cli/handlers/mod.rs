mod init;
pub use init::cmd_init;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, CONFIG_FILE_NAME, ConfigError};
use crate::io::lock::BoardLock;
use crate::model::config::BoardConfig;
use crate::ops::check;
use crate::ops::navigator::{Navigator, Resolution};
use crate::ops::view;

/// Board file used when neither `--board` nor the config names one
pub const DEFAULT_BOARD_FILE: &str = "board.txt";

/// Token accepted by `select` to go back to home
pub const HOME_TOKEN: &str = "..";

/// Resolved paths and config for one invocation
#[derive(Debug, Clone)]
pub struct Session {
    pub board_path: PathBuf,
    pub config_path: PathBuf,
    pub config: BoardConfig,
}

/// Work out which board and config this invocation uses, and load the config.
///
/// The config is `--config`, else `aac.toml` beside `--board`, else
/// `./aac.toml`. The board is `--board`, else the config's `board.file`,
/// else `./board.txt`.
pub fn open_session(cli: &Cli) -> Result<Session, ConfigError> {
    let config_path = match (&cli.config, &cli.board) {
        (Some(config), _) => PathBuf::from(config),
        (None, Some(board)) => Path::new(board)
            .parent()
            .unwrap_or(Path::new(""))
            .join(CONFIG_FILE_NAME),
        (None, None) => PathBuf::from(CONFIG_FILE_NAME),
    };
    let config = config_io::read_config(&config_path)?;

    let board_path = match &cli.board {
        Some(board) => PathBuf::from(board),
        None => config_io::configured_board_path(&config_path, &config)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOARD_FILE)),
    };

    Ok(Session {
        board_path,
        config_path,
        config,
    })
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, session: Session) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command {
        Commands::Init(args) => cmd_init(args, &session),
        Commands::Show(args) => cmd_show(args, &session, json),
        Commands::Select(args) => cmd_select(args, &session, json),
        Commands::AddCategory(args) => cmd_add_category(args, &session),
        Commands::AddItem(args) => cmd_add_item(args, &session),
        Commands::Remove(args) => cmd_remove(args, &session),
        Commands::Export(args) => cmd_export(args, &session),
        Commands::Check(args) => cmd_check(args, &session, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_navigator(session: &Session) -> Result<Navigator, Box<dyn std::error::Error>> {
    Ok(Navigator::load(&session.board_path)?)
}

/// Move into `category`, failing if it is not a category key.
fn enter_category(nav: &mut Navigator, category: &str) -> Result<(), String> {
    match nav.select(category) {
        Resolution::Entered { .. } => Ok(()),
        _ => Err(format!("no category with key '{}'", category)),
    }
}

/// Load the board under its lock, apply `edit`, and write the whole board
/// back.
fn edit_board<F>(session: &Session, edit: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut Navigator) -> Result<(), String>,
{
    let _lock = BoardLock::acquire_default(&session.board_path)?;
    let mut nav = load_navigator(session)?;
    edit(&mut nav)?;
    nav.save_full_board(&session.board_path)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_show(args: ShowArgs, session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut nav = load_navigator(session)?;
    if let Some(ref category) = args.category {
        enter_category(&mut nav, category)?;
    }
    let entries = view::current_view(&nav, &session.config.catalog);

    if json {
        let out = ViewJson {
            category: nav.current_category_name().to_string(),
            entries,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for line in format_view(nav.current_category_name(), &entries) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_select(
    args: SelectArgs,
    session: &Session,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut nav = load_navigator(session)?;
    let mut steps = Vec::new();

    for key in &args.keys {
        if key == HOME_TOKEN {
            nav.reset();
            if !json {
                println!("home");
            }
            continue;
        }
        let res = nav.select(key);
        if !json {
            println!("{}", format_resolution(&res));
        }
        steps.push(res);
    }

    if json {
        let out = SelectJson {
            steps,
            category: nav.current_category_name().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("now at: {}", location_label(nav.current_category_name()));
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let nav = load_navigator(session)?;
    let result = check::check_board(nav.board(), &session.config.catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in format_check(&result) {
            println!("{}", line);
        }
    }

    if args.strict && !result.valid {
        return Err(format!("{} warning(s)", result.warnings.len()).into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add_category(args: AddCategoryArgs, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.name.join(" ");
    edit_board(session, |nav| {
        nav.add_category(&args.key, &name).map_err(|e| e.to_string())
    })?;
    info!(key = %args.key, "added category");
    println!("Added category {} ({})", args.key, name);
    Ok(())
}

fn cmd_add_item(args: AddItemArgs, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    edit_board(session, |nav| {
        if let Some(ref category) = args.category {
            enter_category(nav, category)?;
        }
        nav.add(&args.key, &text).map_err(|e| e.to_string())
    })?;
    println!(
        "Added {} to {}",
        args.key,
        args.category.as_deref().unwrap_or("home")
    );
    Ok(())
}

fn cmd_remove(args: RemoveArgs, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    edit_board(session, |nav| {
        if let Some(ref category) = args.category {
            enter_category(nav, category)?;
        }
        if nav.remove_item(&args.key) {
            Ok(())
        } else {
            Err(format!(
                "no item '{}' in {}",
                args.key,
                args.category.as_deref().unwrap_or("home")
            ))
        }
    })?;
    println!("Removed {}", args.key);
    Ok(())
}

fn cmd_export(args: ExportArgs, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let mut nav = load_navigator(session)?;
    if args.full {
        nav.save_full_board(&args.output)?;
    } else {
        if let Some(ref category) = args.category {
            enter_category(&mut nav, category)?;
        }
        nav.save_current_view(&args.output)?;
    }
    println!("Wrote {}", args.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_session_config_beside_board() {
        let tmp = TempDir::new().unwrap();
        let board = tmp.path().join("main.txt");
        let cli = Cli::parse_from(["aac", "--board", board.to_str().unwrap(), "show"]);

        let session = open_session(&cli).unwrap();
        assert_eq!(session.board_path, board);
        assert_eq!(session.config_path, tmp.path().join(CONFIG_FILE_NAME));
        assert_eq!(session.config, BoardConfig::default());
    }

    #[test]
    fn test_session_board_from_config() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom.toml");
        fs::write(&config_path, "[board]\nfile = \"boards/main.txt\"\n").unwrap();

        let cli = Cli::parse_from(["aac", "--config", config_path.to_str().unwrap(), "show"]);
        let session = open_session(&cli).unwrap();
        assert_eq!(session.board_path, tmp.path().join("boards/main.txt"));
    }

    #[test]
    fn test_edit_board_rejects_unknown_category() {
        let tmp = TempDir::new().unwrap();
        let board_path = tmp.path().join("board.txt");
        fs::write(&board_path, "food Food\n>a.png apple\n").unwrap();
        let session = Session {
            board_path: board_path.clone(),
            config_path: tmp.path().join(CONFIG_FILE_NAME),
            config: BoardConfig::default(),
        };

        let result = edit_board(&session, |nav| enter_category(nav, "drinks"));
        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(&board_path).unwrap(),
            "food Food\n>a.png apple\n"
        );
    }

    #[test]
    fn test_edit_board_rejects_nameless_category() {
        let tmp = TempDir::new().unwrap();
        let board_path = tmp.path().join("board.txt");
        fs::write(&board_path, "food Food\n").unwrap();
        let session = Session {
            board_path: board_path.clone(),
            config_path: tmp.path().join(CONFIG_FILE_NAME),
            config: BoardConfig::default(),
        };

        let args = AddCategoryArgs {
            key: "misc".into(),
            name: vec![String::new()],
        };
        let err = cmd_add_category(args, &session).unwrap_err();
        assert_eq!(err.to_string(), "category 'misc' needs a name");
        assert_eq!(fs::read_to_string(&board_path).unwrap(), "food Food\n");
        assert!(Navigator::load(&board_path).is_ok());
    }
}
