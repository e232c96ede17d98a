use std::path::Path;

use tracing::info;

use crate::cli::commands::InitArgs;
use crate::cli::handlers::Session;
use crate::io::board_io;

const BOARD_TEMPLATE: &str = "\
food food
>img/food/icons8-french-fries-96.png french fries
>img/food/icons8-watermelon-96.png watermelon
>img/food/icons8-apple-96.png apple
>img/food/icons8-cookies-96.png cookies
>img/food/icons8-strawberry-96.png strawberry
>img/food/icons8-pizza-96.png pizza
>img/food/icons8-hamburger-96.png hamburger
clothing clothing
>img/clothing/collaredshirt.png collared shirt
>img/clothing/sweater.png sweater
>img/clothing/skirt.png skirt
>img/clothing/rainboots.png rain boots
>img/clothing/cap.png cap
>img/clothing/swimsuit.png swimsuit
>img/clothing/tshirt.png t-shirt
>img/clothing/flipflops.png flip flops
";

const CONFIG_TEMPLATE: &str = r##"[board]
file = {board}

[log]
# Overridden by the AAC_LOG environment variable
level = "warn"

# --- Catalog ---
# Fixed image lists shown instead of a category's own keys.
# Keyed by category name.

[catalog]
food = [
    "img/food/plate.png",
    "img/food/icons8-french-fries-96.png",
    "img/food/icons8-watermelon-96.png",
    "img/food/icons8-apple-96.png",
    "img/food/icons8-cookies-96.png",
    "img/food/icons8-strawberry-96.png",
    "img/food/icons8-pizza-96.png",
    "img/food/icons8-hamburger-96.png",
]
clothing = [
    "img/clothing/hanger.png",
    "img/clothing/collaredshirt.png",
    "img/clothing/sweater.png",
    "img/clothing/skirt.png",
    "img/clothing/rainboots.png",
    "img/clothing/cap.png",
    "img/clothing/swimsuit.png",
    "img/clothing/tshirt.png",
    "img/clothing/flipflops.png",
]
"##;

/// Board file name written into the config, relative to the config's directory
fn relative_board_name(session: &Session) -> String {
    let config_dir = session.config_path.parent().unwrap_or(Path::new(""));
    session
        .board_path
        .strip_prefix(config_dir)
        .unwrap_or(&session.board_path)
        .display()
        .to_string()
}

/// Config file text pointing at `board_name`, quoted as a TOML string
fn render_config(board_name: &str) -> String {
    let quoted = toml::Value::String(board_name.to_string()).to_string();
    CONFIG_TEMPLATE.replace("{board}", &quoted)
}

pub fn cmd_init(args: InitArgs, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    if !args.force {
        for path in [&session.board_path, &session.config_path] {
            if path.exists() {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
        }
    }

    board_io::write_board_text(&session.board_path, BOARD_TEMPLATE)?;
    let config = render_config(&relative_board_name(session));
    board_io::atomic_write(&session.config_path, config.as_bytes())?;
    info!(board = %session.board_path.display(), "initialized board");

    println!("Created {}", session.board_path.display());
    println!("Created {}", session.config_path.display());
    Ok(())
}
