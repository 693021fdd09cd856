use anyhow::{Context, Result};
use log::{debug, info};
use multipay_cli::planner::validate_roster;
use multipay_cli::{CliError, Config};
use std::path::{Path, PathBuf};
use tokio::fs;

fn expand_tilde(config_path: &Path) -> Result<PathBuf, CliError> {
    match config_path.strip_prefix("~") {
        Ok(rest) => Ok(dirs::home_dir().ok_or(CliError::NoHomeDir)?.join(rest)),
        Err(_) => Ok(config_path.to_path_buf()),
    }
}

pub async fn load_config(config_path: &Path) -> Result<Config> {
    let expanded_path = expand_tilde(config_path)?;

    if !expanded_path.exists() {
        let default_config = Config::default();
        create_config_file(&expanded_path, &default_config).await?;
        return Ok(default_config);
    }

    debug!("Reading config from {}", expanded_path.display());
    let config_content = fs::read_to_string(&expanded_path)
        .await
        .with_context(|| format!("Failed to read {}", expanded_path.display()))?;
    let config: Config = toml::from_str(&config_content)
        .with_context(|| format!("Failed to parse {}", expanded_path.display()))?;
    validate_roster(&config)?;

    Ok(config)
}

async fn create_config_file(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let config_content = toml::to_string_pretty(config)?;
    fs::write(path, config_content).await?;

    info!("Created default config file at: {}", path.display());
    Ok(())
}
