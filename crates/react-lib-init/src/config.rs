use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use toml::Table as TomlTable;

use crate::log_warn;
use crate::utils::error_messages;
use crate::utils::log::t;

/// Known top-level config keys.
const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["default_name", "package_manager"];

/// Environment variable overriding the package manager command line.
pub const PACKAGE_MANAGER_ENV: &str = "REACT_LIB_INIT_PACKAGE_MANAGER";

pub const DEFAULT_PROJECT_NAME: &str = "my-react-ts-library";

#[cfg(windows)]
const DEFAULT_PACKAGE_MANAGER: &str = "npm.cmd";
#[cfg(not(windows))]
const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Embedded config template with all options commented out for documentation.
const CONFIG_TEMPLATE: &str = include_str!(concat!(
  env!("CARGO_MANIFEST_DIR"),
  "/defaults/config.template.toml"
));

/// Returns the config template with all options commented out.
#[must_use]
pub fn config_template() -> &'static str {
  CONFIG_TEMPLATE
}

/// Resolve the global config file path.
///
/// # Errors
/// Returns an error if the XDG config home cannot be resolved.
pub fn global_config_path() -> Result<PathBuf> {
  let xdg = xdg::BaseDirectories::with_prefix("react-lib-init");
  let config_home = xdg
    .get_config_home()
    .ok_or_else(|| anyhow::anyhow!("unable to resolve XDG config home"))?;
  Ok(config_home.join("config.toml"))
}

/// Contents of the optional global config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
  #[serde(default)]
  pub default_name: Option<String>,
  #[serde(default)]
  pub package_manager: Option<Vec<String>>,
}

/// Effective settings for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitConfig {
  pub default_name: String,
  /// Package manager argv; the first element is the program.
  pub package_manager: Vec<String>,
}

impl Default for InitConfig {
  fn default() -> Self {
    Self {
      default_name: DEFAULT_PROJECT_NAME.to_string(),
      package_manager: vec![DEFAULT_PACKAGE_MANAGER.to_string()],
    }
  }
}

impl InitConfig {
  /// Build the effective config from the global file, the environment and the CLI flag.
  ///
  /// Precedence for the package manager: flag, then environment, then file, then default.
  pub fn resolve(package_manager_flag: Option<&str>) -> Result<Self> {
    let file = load_file_config(&global_config_path()?)?;
    Self::from_layers(file, package_manager_flag)
  }

  fn from_layers(file: FileConfig, package_manager_flag: Option<&str>) -> Result<Self> {
    let mut cfg = Self::default();

    if let Some(name) = file.default_name.as_deref().map(str::trim)
      && !name.is_empty()
    {
      cfg.default_name = name.to_string();
    }
    if let Some(argv) = file.package_manager
      && !argv.is_empty()
    {
      cfg.package_manager = argv;
    }
    if let Some(argv) = package_manager_env_argv()? {
      cfg.package_manager = argv;
    }
    if let Some(raw) = package_manager_flag
      && let Some(argv) = split_command(raw, "--package-manager")?
    {
      cfg.package_manager = argv;
    }
    Ok(cfg)
  }

  /// Program to execute for package manager commands.
  #[must_use]
  pub fn program(&self) -> &str {
    self
      .package_manager
      .first()
      .map_or(DEFAULT_PACKAGE_MANAGER, String::as_str)
  }

  /// Build argv after the program: configured extra args followed by `args`.
  #[must_use]
  pub fn args_with(&self, args: &[&str]) -> Vec<String> {
    self
      .package_manager
      .iter()
      .skip(1)
      .cloned()
      .chain(args.iter().map(|a| (*a).to_string()))
      .collect()
  }
}

/// Read the global config file. A missing file yields the defaults.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
  if !path.exists() {
    return Ok(FileConfig::default());
  }
  let raw =
    fs::read_to_string(path).with_context(|| error_messages::failed_to_read(path.display()))?;
  let table: TomlTable = toml::from_str(&raw)
    .with_context(|| format!("invalid config file {}", path.display()))?;
  for key in table.keys() {
    if !KNOWN_TOP_LEVEL_KEYS.contains(&key.as_str()) {
      log_warn!(
        "Ignoring unknown config key '{}' in {}",
        key,
        t::path(path.display())
      );
    }
  }
  let cfg: FileConfig = toml::Value::Table(table)
    .try_into()
    .with_context(|| format!("invalid config file {}", path.display()))?;
  log::debug!("loaded config from {}", path.display());
  Ok(cfg)
}

fn package_manager_env_argv() -> Result<Option<Vec<String>>> {
  let Ok(raw) = std::env::var(PACKAGE_MANAGER_ENV) else {
    return Ok(None);
  };
  split_command(&raw, PACKAGE_MANAGER_ENV)
}

/// Split a command line with shell-word rules. Blank input yields `None`.
fn split_command(raw: &str, source: &str) -> Result<Option<Vec<String>>> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(None);
  }
  let tokens = shell_words::split(trimmed)
    .with_context(|| format!("invalid shell command in {source}: {trimmed}"))?;
  if tokens.is_empty() {
    return Ok(None);
  }
  Ok(Some(tokens))
}
