use authdns_domain::{CliOverrides, Config};
use tracing::info;

/// Loads the configuration, applies CLI overrides and validates the result.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Writes the effective configuration to `path` as TOML.
pub fn write_config(config: &Config, path: &str) -> anyhow::Result<()> {
    config.save(path)?;
    info!(path, "Configuration written");
    Ok(())
}
