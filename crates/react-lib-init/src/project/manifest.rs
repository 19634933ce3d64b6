//! Amendments applied to the `package.json` generated by the package manager.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value, json};

use crate::utils::error_messages;

pub const MANIFEST_FILE: &str = "package.json";

pub const MAIN_ENTRY: &str = "dist/cjs/index.js";
pub const MODULE_ENTRY: &str = "dist/esm/index.js";
pub const TYPES_ENTRY: &str = "dist/index.d.ts";
pub const BUILD_SCRIPT: &str = "rollup -c";
pub const REACT_PEER_RANGE: &str = "^18.0.0";

/// Set entry points, published files, the build script and peer dependency ranges.
///
/// Other fields keep their values and position. `scripts` is replaced as a whole.
pub fn amend(manifest: &mut Map<String, Value>) {
  manifest.insert("main".into(), json!(MAIN_ENTRY));
  manifest.insert("module".into(), json!(MODULE_ENTRY));
  manifest.insert("types".into(), json!(TYPES_ENTRY));
  manifest.insert("files".into(), json!(["dist"]));
  manifest.insert("scripts".into(), json!({ "build": BUILD_SCRIPT }));
  manifest.insert(
    "peerDependencies".into(),
    json!({ "react": REACT_PEER_RANGE, "react-dom": REACT_PEER_RANGE }),
  );
}

/// Parse manifest text into a JSON object.
pub fn parse(raw: &str) -> Result<Map<String, Value>> {
  match serde_json::from_str::<Value>(raw)? {
    Value::Object(map) => Ok(map),
    _ => bail!(error_messages::MANIFEST_NOT_AN_OBJECT),
  }
}

/// Read `package.json` in `dir`, amend it and write it back.
pub fn amend_file(dir: &Path) -> Result<()> {
  let path = dir.join(MANIFEST_FILE);
  let raw =
    fs::read_to_string(&path).with_context(|| error_messages::failed_to_read(path.display()))?;
  let mut manifest =
    parse(&raw).with_context(|| format!("invalid manifest {}", path.display()))?;
  amend(&mut manifest);
  let text = serde_json::to_string_pretty(&Value::Object(manifest))?;
  log::debug!("rewriting {}", path.display());
  fs::write(&path, text).with_context(|| error_messages::failed_to_write(path.display()))?;
  Ok(())
}
