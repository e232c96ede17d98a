use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aac", about = concat!("aac v", env!("CARGO_PKG_VERSION"), " - plain-text communication boards"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Board file (default: from aac.toml, else ./board.txt)
    #[arg(short = 'b', long = "board", global = true)]
    pub board: Option<String>,

    /// Config file (default: aac.toml next to the board, else ./aac.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug events to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample board and aac.toml
    Init(InitArgs),
    /// Show the items of home or of a category
    Show(ShowArgs),
    /// Select keys in order, starting from home
    Select(SelectArgs),
    /// Declare a top-level category
    AddCategory(AddCategoryArgs),
    /// Add an item to home or to a category
    AddItem(AddItemArgs),
    /// Remove an item, or a whole category from home
    Remove(RemoveArgs),
    /// Write the board (or one view of it) to another file
    Export(ExportArgs),
    /// Lint the board and catalog
    Check(CheckArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Category key to show (default: home)
    pub category: Option<String>,
}

#[derive(Args)]
pub struct SelectArgs {
    /// Keys to select; `..` goes back to home
    #[arg(required = true)]
    pub keys: Vec<String>,
}

#[derive(Args)]
pub struct AddCategoryArgs {
    /// Category key (no spaces)
    pub key: String,
    /// Display name
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

#[derive(Args)]
pub struct AddItemArgs {
    /// Category to add to (default: home)
    #[arg(long)]
    pub category: Option<String>,
    /// Item key, usually an image location (no spaces)
    pub key: String,
    /// Text to speak or display
    #[arg(num_args = 0..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Category to remove from (default: home)
    #[arg(long)]
    pub category: Option<String>,
    /// Item or category key
    pub key: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Category whose view to export (default: home)
    pub category: Option<String>,
    /// Destination file
    #[arg(short = 'o', long)]
    pub output: String,
    /// Export the whole board instead of one view
    #[arg(long, conflicts_with = "category")]
    pub full: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Exit with an error when there are warnings
    #[arg(long)]
    pub strict: bool,
}
