use literal_dns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged after the subscriber is up, so the source shows in the output.
pub fn log_config_source(path: Option<&str>) {
    match path.map(str::to_string).or_else(Config::get_config_path) {
        Some(path) => info!(path = %path, "Loaded configuration file"),
        None => info!("No configuration file found, using defaults"),
    }
}
