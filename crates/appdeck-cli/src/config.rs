use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CliConfig {
    pub manifest: Option<String>,
}

fn config_dir() -> Result<PathBuf> {
    let dir = dirs::home_dir()
        .context("Cannot determine home directory")?
        .join(".appdeck");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn load() -> Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let cfg: CliConfig = toml::from_str(&content)?;
    Ok(cfg)
}

pub fn save(config: &CliConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(config_path()?, content)?;
    Ok(())
}

/// Resolve the manifest path.
///
/// Priority order:
/// 1. --manifest flag / APPDECK_MANIFEST env
/// 2. config.toml
pub fn resolve_manifest(cli_manifest: &Option<String>) -> Result<String> {
    if let Some(m) = cli_manifest {
        return Ok(m.clone());
    }
    let cfg = load()?;
    if let Some(m) = cfg.manifest {
        return Ok(m);
    }
    anyhow::bail!(
        "No manifest path configured. Use --manifest, set APPDECK_MANIFEST env var, or run: appdeck config set manifest <path>"
    )
}
