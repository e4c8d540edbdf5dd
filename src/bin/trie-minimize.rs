//! trie-minimize - minimize word-list tries into compact automata
//!
//! Builds a trie from a word list, minimizes it and saves or inspects the
//! result.

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use std::process;

use trie_minimize::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
