//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::minimize::{minimize, MinimizeOptions};
use crate::serialization::{BincodeSerializer, JsonSerializer, PlainTextSerializer, TrieSerializer};
use crate::storage::{StorageMode, TransitionTable};
use crate::trie::{Trie, TrieConfig};

use super::args::{Cli, Commands, SerializationFormat};
use super::config::load_options;
use super::detect::{detect_format, format_from_extension};

/// Execute a parsed command line
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Minimize {
            input,
            output,
            storage,
            format,
            allow_spaces,
            precompute_symbols,
            groups,
        } => {
            let mut options = load_options(cli.config.as_deref())?;
            if let Some(mode) = storage {
                options = options.with_storage(mode);
            }
            if allow_spaces {
                options.allow_spaces = true;
            }
            if precompute_symbols.is_some() {
                options.precompute_symbols = precompute_symbols;
            }
            if groups {
                options.return_groups = true;
            }
            cmd_minimize(&input, output, format, &options)
        }
        Commands::Stats {
            input,
            allow_spaces,
        } => cmd_stats(&input, allow_spaces),
        Commands::Query {
            trie,
            words,
            format,
        } => cmd_query(&trie, &words, format),
        Commands::Words { trie, format } => cmd_words(&trie, format),
    }
}

/// Build a trie from a word list file
pub fn read_word_list(path: &Path, allow_spaces: bool) -> Result<Trie> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open word list: {}", path.display()))?;
    let trie: Trie =
        PlainTextSerializer::read_trie(file, TrieConfig::default().allow_spaces(allow_spaces))
            .with_context(|| format!("Failed to build trie from {}", path.display()))?;
    log::info!("built trie with {} nodes from {}", trie.len(), path.display());
    Ok(trie)
}

/// Save a trie in the given format
pub fn save_trie(trie: &Trie, path: &Path, format: SerializationFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        SerializationFormat::Bincode => BincodeSerializer::serialize(trie, &mut writer)?,
        SerializationFormat::Json => JsonSerializer::serialize(trie, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Load a saved trie, detecting its format unless given
pub fn load_trie(path: &Path, format: Option<SerializationFormat>) -> Result<Trie> {
    let format = detect_format(path, format)?;
    let file = File::open(path)
        .with_context(|| format!("Failed to open trie: {}", path.display()))?;
    let trie: Trie = match format {
        SerializationFormat::Bincode => BincodeSerializer::deserialize(file),
        SerializationFormat::Json => JsonSerializer::deserialize(file),
    }
    .with_context(|| format!("Failed to load {} trie: {}", format, path.display()))?;
    Ok(trie)
}

fn cmd_minimize(
    input: &Path,
    output: Option<PathBuf>,
    format: Option<SerializationFormat>,
    options: &MinimizeOptions,
) -> Result<()> {
    let trie = read_word_list(input, options.allow_spaces)?;
    let minimized = minimize(&trie, options)?;

    println!("{} {}", "Minimized".green().bold(), minimized.stats());

    if let Some(node_classes) = &minimized.node_classes {
        println!("{}", "node\tstate".bold());
        for (node, state) in node_classes.iter().enumerate() {
            println!("{}\t{}", node, state);
        }
    }

    if let Some(output) = output {
        let format = format
            .or_else(|| format_from_extension(&output))
            .unwrap_or(SerializationFormat::Bincode);
        save_trie(&minimized.trie, &output, format)?;
        println!(
            "{} {} ({})",
            "Saved".green().bold(),
            output.display(),
            format
        );
    }
    Ok(())
}

fn cmd_stats(input: &Path, allow_spaces: bool) -> Result<()> {
    let trie = read_word_list(input, allow_spaces)?;
    println!("{}", "Trie".bold());
    println!("  Words:       {}", trie.words().len());
    println!("  Nodes:       {}", trie.len());
    println!("  Alphabet:    {} symbols", trie.alphabet().len());
    println!();

    for mode in StorageMode::all() {
        let options = MinimizeOptions::default()
            .with_storage(mode)
            .allow_spaces(allow_spaces);
        let minimized = minimize(&trie, &options)?;
        let stats = minimized.stats();
        println!("{}", mode.to_string().bold());
        println!("  States:      {}", stats.minimized_nodes);
        println!("  Merged:      {}", stats.merged_nodes);
        println!("  Transitions: {}", stats.transitions);
        println!("  Kept:        {:.1}%", stats.compression_ratio() * 100.0);
        println!("  Memory:      {} bytes", minimized.trie.graph().memory_usage());
    }
    Ok(())
}

fn cmd_query(path: &Path, words: &[String], format: Option<SerializationFormat>) -> Result<()> {
    let trie = load_trie(path, format)?;
    for word in words {
        if trie.contains(word) {
            println!("{}: {}", word, "accepted".green());
        } else {
            println!("{}: {}", word, "rejected".red());
        }
    }
    Ok(())
}

fn cmd_words(path: &Path, format: Option<SerializationFormat>) -> Result<()> {
    let trie = load_trie(path, format)?;
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for word in trie.words() {
        writeln!(out, "{}", word)?;
    }
    out.flush()?;
    Ok(())
}
