use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "copiloto",
    bin_name = "copiloto",
    version,
    about = "Curated course and funding catalogs for entrepreneurs",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (default: platform data dir, or $COPILOTO_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print the raw JSON response instead of a formatted listing
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the starter catalogs into an empty data directory
    Init,
    /// List courses, optionally filtered
    Courses {
        /// Exact category, or "Todas" for all
        #[arg(long)]
        category: Option<String>,
        /// Exact level, or "Todas" for all
        #[arg(long)]
        level: Option<String>,
        /// Case-insensitive search over title, description and instructor
        #[arg(long)]
        search: Option<String>,
    },
    /// List funding resources, optionally filtered
    Resources {
        /// Exact category, or "Todas" for all
        #[arg(long)]
        category: Option<String>,
        /// Exact sector; resources tagged "Todos" match any sector
        #[arg(long)]
        sector: Option<String>,
        /// Exact stage (Idea, Temprana, Crecimiento)
        #[arg(long)]
        stage: Option<String>,
        /// Case-insensitive search over title and description
        #[arg(long)]
        search: Option<String>,
    },
    /// Add an item to a catalog
    Add {
        /// Target catalog: courses or resources
        kind: String,
        /// Item title
        title: String,
        /// Item description
        #[arg(long, default_value = "")]
        description: String,
        /// Instructor name (courses)
        #[arg(long)]
        instructor: Option<String>,
        /// Axis value as KEY=VALUE (e.g. category=Finanzas), repeatable
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    /// Manage favorites
    Fav {
        #[command(subcommand)]
        action: FavCommands,
    },
    /// Show or change configuration
    Config {
        /// Config key (include-inactive, list-limit)
        key: Option<String>,
        /// New value for the key
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavCommands {
    /// Mark an item as favorite
    Add { kind: String, id: u64 },
    /// Remove an item from favorites
    Rm { kind: String, id: u64 },
    /// Flip an item's favorite state
    Toggle { kind: String, id: u64 },
    /// List favorite items
    List { kind: String },
}
