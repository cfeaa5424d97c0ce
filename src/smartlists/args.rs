use clap::{Parser, Subcommand};
use smartlists::filters::Source;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smartlists", version)]
#[command(about = "Inspect, validate and convert smart list filters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a saved smart list (API JSON) into its form JSON
    Load {
        /// Path to the JSON file, or "-" for stdin
        file: String,
    },

    /// Validate a form and convert it into API JSON
    Submit {
        /// Path to the JSON file, or "-" for stdin
        file: String,

        #[command(flatten)]
        names: NameArgs,
    },

    /// Validate a form without converting it
    #[command(alias = "check")]
    Validate {
        /// Path to the JSON file, or "-" for stdin
        file: String,

        #[command(flatten)]
        names: NameArgs,
    },

    /// List filterable fields with their domain and operators
    Fields {
        /// Only show this source (book, book_meta, series, series_meta, library)
        #[arg(short, long)]
        source: Option<Source>,
    },

    /// Show the operators a field may use
    #[command(alias = "ops")]
    Operations { field: String },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., legacy-book-fallback)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct NameArgs {
    /// Name of another list owned by the same user (repeatable)
    #[arg(long = "existing", value_name = "NAME")]
    pub existing: Vec<String>,

    /// Current name of the list being edited
    #[arg(long, value_name = "NAME")]
    pub current: Option<String>,
}
