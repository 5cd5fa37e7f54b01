use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Search comics and read their chapters")]
pub struct Cli {
    #[arg(short, long, default_value = "comics")]
    pub config_file: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the catalog by title
    Search { query: String },

    /// Search, open one result and read a chapter of it
    Browse {
        query: String,
        /// Position of the search result to open
        #[arg(long, default_value_t = 0)]
        pick: usize,
        /// Chapter number to read; the first listed chapter otherwise
        #[arg(long)]
        chapter: Option<String>,
    },

    /// Read a chapter by its link
    Read {
        #[arg(long)]
        slug: String,
        #[arg(long)]
        link: Option<String>,
        #[arg(long)]
        chapter: Option<String>,
        #[arg(long, default_value = "")]
        title: String,
    },
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
