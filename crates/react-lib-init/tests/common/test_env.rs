use anyhow::{Context, Result};
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};

/// Fake package manager: records each invocation in `pm.log` next to itself.
/// `init` writes the manifest npm would generate; `FAKE_PM_FAIL=<subcommand>` makes
/// that subcommand exit with status 1. Leading flags are skipped when finding the subcommand.
const FAKE_PM: &str = r#"#!/bin/sh
log="$(dirname "$0")/pm.log"
echo "$(basename "$PWD"): $*" >> "$log"
sub=""
for arg in "$@"; do
  case "$arg" in
    -*) ;;
    *) sub="$arg"; break ;;
  esac
done
if [ -n "$FAKE_PM_FAIL" ] && [ "$sub" = "$FAKE_PM_FAIL" ]; then
  echo "fake-pm: $sub failed" 1>&2
  exit 1
fi
case "$sub" in
  init)
    cat > package.json <<JSON
{
  "name": "$(basename "$PWD")",
  "version": "1.0.0",
  "description": "",
  "main": "index.js",
  "scripts": {
    "test": "echo no test specified && exit 1"
  },
  "keywords": [],
  "author": "",
  "license": "ISC"
}
JSON
    ;;
esac
exit 0
"#;

#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
  tools: TempDir,
  xdg_home: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let root = tmp_root();
    let temp = Builder::new()
      .prefix("react-lib-init-test-")
      .tempdir_in(&root)
      .expect("temp dir");
    let tools = Builder::new()
      .prefix("tools-")
      .tempdir_in(&root)
      .expect("tools dir");
    let xdg_home = Builder::new()
      .prefix("xdg-")
      .tempdir_in(&root)
      .expect("xdg dir");
    let env = Self {
      temp,
      tools,
      xdg_home,
    };
    if let Err(err) = env.write_executable_script(&env.fake_pm_path(), FAKE_PM) {
      panic!("prepare fake package manager failed: {err}");
    }
    env
  }

  /// Working directory the binary runs in; projects are created below it.
  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn project_dir(&self, name: &str) -> PathBuf {
    self.path().join(name)
  }

  pub fn fake_pm_path(&self) -> PathBuf {
    self.tools.path().join("fake-pm")
  }

  /// Invocations seen by the fake package manager, one per line.
  pub fn pm_calls(&self) -> Result<Vec<String>> {
    let log = self.tools.path().join("pm.log");
    if !log.exists() {
      return Ok(Vec::new());
    }
    let body = std::fs::read_to_string(&log).context("read pm.log")?;
    Ok(body.lines().map(str::to_string).collect())
  }

  pub fn config_path(&self) -> PathBuf {
    self.xdg_home.path().join("react-lib-init").join("config.toml")
  }

  pub fn write_config(&self, body: &str) -> Result<()> {
    let path = self.config_path();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).context("create config dir")?;
    }
    std::fs::write(&path, body).context("write config")?;
    Ok(())
  }

  /// The binary wired to the fake package manager and an isolated config home.
  pub fn bin(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("react-lib-init")?;
    cmd.current_dir(self.path());
    cmd.env("XDG_CONFIG_HOME", self.xdg_home.path());
    cmd.env(
      "REACT_LIB_INIT_PACKAGE_MANAGER",
      format!("'{}'", self.fake_pm_path().display()),
    );
    cmd.env_remove("FAKE_PM_FAIL");
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
  }

  pub fn write_executable_script(&self, path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("create parent dir for {}", path.display()))?;
    }
    std::fs::write(path, body).with_context(|| format!("write script {}", path.display()))?;
    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt as _;
      let mut perms = std::fs::metadata(path)?.permissions();
      perms.set_mode(0o755);
      std::fs::set_permissions(path, perms)?;
    }
    Ok(())
  }
}

/// Returns a workspace-local temp root for tests under `./target/test-tmp` at the workspace root.
/// Ensures the directory exists to satisfy sandboxed filesystems that forbid `/tmp`.
pub fn tmp_root() -> PathBuf {
  let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  // Walk two parents up: crates/react-lib-init -> crates -> workspace root
  let workspace_root = manifest_dir
    .parent()
    .and_then(|p| p.parent())
    .unwrap_or(&manifest_dir)
    .to_path_buf();
  let root = workspace_root.join("target").join("test-tmp");
  let _ = std::fs::create_dir_all(&root);
  root
}
