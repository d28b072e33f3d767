use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum KindArg {
    Url,
    Keyword,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum HistoryAction {
    /// Delete the entire search history
    Clear {
        /// Auto confirm
        #[clap(short, long, default_value = "false")]
        yes: bool,
    },
    /// Print history as CSV or JSON
    Export {
        #[clap(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesAction {
    /// Remove one favorite by its list position
    Remove {
        /// 0-based index as shown by `gsq favorites`
        index: usize,
    },
    /// Delete all favorites
    Clear {
        /// Auto confirm
        #[clap(short, long, default_value = "false")]
        yes: bool,
    },
    /// Print favorites as CSV or JSON
    Export {
        #[clap(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a search URL and record it in history
    Search {
        /// Operator token, e.g. "site:" or "OR"
        operator: String,

        /// Search term or URL, depending on the operator
        term: String,

        /// Date (YYYY-MM-DD) for before:/after:/daterange:
        #[clap(short, long)]
        date: Option<String>,

        /// Free-text category label recorded with the entry
        #[clap(short, long)]
        category: Option<String>,

        /// Also save the search to favorites
        #[clap(short, long, default_value = "false")]
        favorite: bool,
    },

    /// List known operators
    Operators {
        /// Only show operators taking this input kind
        #[clap(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Show one operator with its examples and input suggestions
    Show {
        /// Operator token
        operator: String,
    },

    /// List operators grouped by category
    Categories {},

    /// Show recorded searches, newest last
    History {
        /// Only show the most recent N entries
        #[clap(short, long)]
        limit: Option<usize>,

        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Manage favorite searches
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },

    /// Build URLs for a whole list of queries at once
    Batch {
        /// Operator token applied to every query
        #[clap(short, long)]
        operator: String,

        /// File with one query per line; "-" reads stdin
        #[clap(default_value = "-")]
        file: String,

        /// Randomize run order
        #[clap(short, long, default_value = "false")]
        shuffle: bool,
    },
}
