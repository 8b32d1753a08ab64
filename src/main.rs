//! Palindrome checker: reports whether a sentence reads the same backwards

use clap::Parser;
use log::error;
use palindrome_checker::cli::Cli;
use palindrome_checker::{run, Config};
use std::io;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level())
    ).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&mut stdin.lock(), &mut stdout.lock(), &config) {
        error!("Palindrome check failed: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
