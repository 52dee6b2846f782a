pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "A paginated reading client for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a URL, following "next page" links, and store what it yields
    Fetch {
        /// URL of the page to read
        url: String,
    },
    /// List stored pages
    List {
        /// Show the recent-search log instead of stored pages
        #[arg(long)]
        recent: bool,
    },
    /// Print a stored page
    Show {
        /// Index of the page, as shown by `list`
        index: usize,
    },
    /// Emit a stored page as a plain-text payload for sharing or playback
    Share {
        /// Index of the page, as shown by `list`
        index: usize,
    },
    /// Delete a stored page
    Delete {
        /// Index of the page, as shown by `list`
        index: usize,
    },
}
