//! Files that make up a freshly scaffolded component library.

pub mod manifest;
pub mod templates;
pub mod tsconfig;

use std::path::{Component, Path};

use anyhow::{Result, bail};

use crate::utils::error_messages;

/// Runtime dependencies installed into every new library.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["react", "react-dom", "tslib"];

/// Build tooling installed as development dependencies.
pub const DEV_DEPENDENCIES: &[&str] = &[
  "typescript",
  "@types/react",
  "@types/react-dom",
  "rollup",
  "@rollup/plugin-node-resolve",
  "@rollup/plugin-commonjs",
  "@rollup/plugin-typescript",
  "rollup-plugin-peer-deps-external",
  "rollup-plugin-postcss",
];

/// Trim the user's answer and fall back to `default` when it is empty.
///
/// The result is used verbatim as a directory name, so it must be a single
/// plain path component.
pub fn resolve_project_name(input: Option<&str>, default: &str) -> Result<String> {
  let trimmed = input.map(str::trim).unwrap_or_default();
  let name = if trimmed.is_empty() {
    default.trim()
  } else {
    trimmed
  };
  validate_project_name(name)?;
  Ok(name.to_string())
}

fn validate_project_name(name: &str) -> Result<()> {
  if name.is_empty() || name.contains(['/', '\\']) {
    bail!(error_messages::invalid_project_name(name));
  }
  let mut components = Path::new(name).components();
  match (components.next(), components.next()) {
    (Some(Component::Normal(_)), None) => Ok(()),
    _ => bail!(error_messages::invalid_project_name(name)),
  }
}
