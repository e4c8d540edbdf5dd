//! CLI interface for trie-minimize
//!
//! Builds tries from word lists, minimizes them and inspects saved tries.

pub mod args;
pub mod commands;
pub mod config;
pub mod detect;

pub use args::{Cli, Commands, SerializationFormat};
pub use config::load_options;
pub use detect::detect_format;
