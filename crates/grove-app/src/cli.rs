use std::path::PathBuf;

use clap::Parser;

/// Grove: search a document tree and step through the matches.
#[derive(Parser, Debug)]
#[command(name = "grove", version, about)]
pub struct Args {
    /// JSON document to search.
    pub document: PathBuf,

    /// Text to search for.
    pub query: String,

    /// How many times to step the cursor after the search.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub steps: usize,

    /// Step backward instead of forward.
    #[arg(short = 'b', long)]
    pub backward: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Match case exactly.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Only match whole words.
    #[arg(long)]
    pub exact: bool,

    /// Search each whitespace-separated word on its own.
    #[arg(long)]
    pub separate_words: bool,

    /// Deliver highlight results late and out of order.
    #[arg(long)]
    pub deferred: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
