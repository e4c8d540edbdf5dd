//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

use crate::storage::StorageMode;

#[derive(Parser, Debug)]
#[command(name = "trie-minimize")]
#[command(about = "Minimize word-list tries into compact automata")]
#[command(version)]
pub struct Cli {
    /// Minimization options file (JSON)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a trie from a word list and minimize it
    Minimize {
        /// Word list, one word per line
        input: PathBuf,

        /// Where to save the minimized trie
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Transition storage of the minimized trie
        #[arg(short, long)]
        storage: Option<StorageMode>,

        /// Output format (from the output extension if not specified)
        #[arg(short = 'f', long)]
        format: Option<SerializationFormat>,

        /// Accept words containing spaces
        #[arg(long)]
        allow_spaces: bool,

        /// Precompute look-ahead symbols up to this depth
        #[arg(long)]
        precompute_symbols: Option<usize>,

        /// Print the state every original node was merged into
        #[arg(long)]
        groups: bool,
    },

    /// Compare node counts and memory use across storage modes
    Stats {
        /// Word list, one word per line
        input: PathBuf,

        /// Accept words containing spaces
        #[arg(long)]
        allow_spaces: bool,
    },

    /// Check whether a saved trie accepts words
    Query {
        /// Saved trie
        trie: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        /// Trie format (auto-detected if not specified)
        #[arg(short = 'f', long)]
        format: Option<SerializationFormat>,
    },

    /// Print every word a saved trie accepts
    Words {
        /// Saved trie
        trie: PathBuf,

        /// Trie format (auto-detected if not specified)
        #[arg(short = 'f', long)]
        format: Option<SerializationFormat>,
    },
}

/// On-disk format of a saved trie
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SerializationFormat {
    /// Compact binary
    Bincode,
    /// Pretty-printed JSON
    Json,
}

impl SerializationFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            SerializationFormat::Bincode => "bin",
            SerializationFormat::Json => "json",
        }
    }
}

impl fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationFormat::Bincode => write!(f, "bincode"),
            SerializationFormat::Json => write!(f, "json"),
        }
    }
}
