//! Minimization options files

use crate::minimize::MinimizeOptions;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}",
            ext
        )),
        None => Err(anyhow::anyhow!("Config file must have .json extension")),
    }
}

/// Load [`MinimizeOptions`] from a JSON file, or the defaults without one.
///
/// Missing fields take their default values.
pub fn load_options(path: Option<&Path>) -> Result<MinimizeOptions> {
    let Some(path) = path else {
        return Ok(MinimizeOptions::default());
    };
    validate_config_path(path)?;
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let options = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    log::info!("loaded options from {}", path.display());
    Ok(options)
}
