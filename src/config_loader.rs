use crate::config::GraphConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs;
use std::path::Path;

/// Load and parse graph settings from a YAML file
pub fn load_config(config_path: &Path) -> Result<GraphConfig> {
    let content = fs::read_to_string(config_path)
        .wrap_err_with(|| format!("Failed to read configuration '{}'", config_path.display()))?;

    // An empty document means "all defaults"
    let config: GraphConfig = if content.trim().is_empty() {
        GraphConfig::default()
    } else {
        serde_yaml::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?
    };

    config.validate()?;

    Ok(config)
}

/// Load the configuration if a path was given, otherwise use defaults
pub fn load_config_or_default(config_path: Option<&Path>) -> Result<GraphConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => Ok(GraphConfig::default()),
    }
}
