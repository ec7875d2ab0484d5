use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tags::IgnoreTagsConfig;

/// Top-level configuration loaded from `.rsinfo.yaml` or an explicit path.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
  /// Tags to leave out of the `tags` attribute
  #[serde(default)]
  pub ignore_tags: IgnoreTagsConfig,
}

impl Config {
  /// Extend the configured ignore lists with values given on the command line
  pub fn with_ignore_tags(mut self, keys: &[String], key_prefixes: &[String]) -> Self {
    self.ignore_tags.keys.extend(keys.iter().cloned());
    self.ignore_tags.key_prefixes.extend(key_prefixes.iter().cloned());
    self
  }
}

const DEFAULT_CONFIG_FILE: &str = ".rsinfo.yaml";

/// Load configuration from an explicit path, the default `.rsinfo.yaml` in the
/// current working directory, or fall back to `Config::default()`.
pub fn load(path: Option<&str>) -> Result<Config> {
  load_from(path, std::env::current_dir().ok().as_deref())
}

fn load_from(path: Option<&str>, base_dir: Option<&std::path::Path>) -> Result<Config> {
  if let Some(p) = path {
    let contents = std::fs::read_to_string(p).with_context(|| format!("Failed to read config file: {p}"))?;
    let config: Config =
      serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse config file: {p}"))?;
    return Ok(config);
  }

  if let Some(dir) = base_dir {
    let default_path = dir.join(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
      let contents = std::fs::read_to_string(&default_path)
        .with_context(|| format!("Failed to read config file: {}", default_path.display()))?;
      let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", default_path.display()))?;
      return Ok(config);
    }
  }

  Ok(Config::default())
}
