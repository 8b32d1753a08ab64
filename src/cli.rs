//! CLI interface for the palindrome checker

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "palindrome-checker")]
#[command(about = "Check whether a sentence is a palindrome")]
#[command(long_about = "Reads one line from standard input, ignores everything but letters \
and case, and reports whether it reads the same backwards")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
