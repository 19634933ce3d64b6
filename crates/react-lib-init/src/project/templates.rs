use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::error_messages;

const ROLLUP_CONFIG: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/rollup.config.js"));
const BUTTON_COMPONENT: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/Button.tsx"));
const INDEX_MODULE: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/index.tsx"));

/// A static file written verbatim (surrounding whitespace trimmed) into the project.
#[derive(Debug, Clone, Copy)]
pub struct Template {
  pub path: &'static str,
  pub body: &'static str,
}

pub const ROLLUP: Template = Template {
  path: "rollup.config.js",
  body: ROLLUP_CONFIG,
};

pub const SOURCES: [Template; 2] = [
  Template {
    path: "src/Button.tsx",
    body: BUTTON_COMPONENT,
  },
  Template {
    path: "src/index.tsx",
    body: INDEX_MODULE,
  },
];

impl Template {
  #[must_use]
  pub fn contents(&self) -> &'static str {
    self.body.trim()
  }

  pub fn write_into(&self, root: &Path) -> Result<()> {
    write_file(&root.join(self.path), self.contents())
  }
}

pub fn write_file(path: &Path, contents: &str) -> Result<()> {
  log::debug!("writing {}", path.display());
  fs::write(path, contents).with_context(|| error_messages::failed_to_write(path.display()))
}
