use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
  pub target: &'static str,
  pub module: &'static str,
  pub jsx: &'static str,
  pub declaration: bool,
  pub out_dir: &'static str,
  pub strict: bool,
}

/// `tsconfig.json` for a library compiled to ES6 modules with declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
  pub compiler_options: CompilerOptions,
  pub include: Vec<&'static str>,
}

impl Default for TsConfig {
  fn default() -> Self {
    Self {
      compiler_options: CompilerOptions {
        target: "ES6",
        module: "ESNext",
        jsx: "react",
        declaration: true,
        out_dir: "./dist",
        strict: true,
      },
      include: vec!["src/**/*"],
    }
  }
}

impl TsConfig {
  /// Pretty JSON with two-space indentation.
  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}
