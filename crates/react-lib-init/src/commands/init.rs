use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::InitConfig;
use crate::project::templates::{self, ROLLUP, SOURCES};
use crate::project::tsconfig::TsConfig;
use crate::project::{self, DEV_DEPENDENCIES, RUNTIME_DEPENDENCIES, manifest};
use crate::texts;
use crate::utils::child::run_checked;
use crate::utils::error_messages;
use crate::utils::wizard::Wizard;
use crate::{log_info, log_success};

/// Ask for a project name (unless given), scaffold it under the current directory
/// and print the next steps.
pub fn run(cfg: &InitConfig, name: Option<&str>) -> Result<PathBuf> {
  let answer = match name {
    Some(given) => given.to_string(),
    None => Wizard::new().text(&texts::init::name_prompt(), &cfg.default_name)?,
  };
  let name = project::resolve_project_name(Some(answer.as_str()), &cfg.default_name)?;

  log_info!("{}", texts::init::banner(&name));
  log_info!("");

  let cwd = std::env::current_dir().context(error_messages::FAILED_TO_READ_CWD)?;
  let root = scaffold(cfg, &cwd, &name)?;

  log_info!("");
  log_success!("{}", texts::init::success_line());
  for line in texts::init::next_steps_lines(&name, cfg.program()) {
    log_info!("{}", line);
  }
  Ok(root)
}

/// Create `<parent>/<name>` and populate it. Stops at the first failing step
/// and leaves whatever was created so far in place.
pub fn scaffold(cfg: &InitConfig, parent: &Path, name: &str) -> Result<PathBuf> {
  let root = parent.join(name);
  log::debug!("creating project directory {}", root.display());
  fs::create_dir(&root).with_context(|| error_messages::failed_to_create(root.display()))?;

  package_manager(cfg, &root, &["init", "-y"])?;

  let mut install = vec!["install"];
  install.extend_from_slice(RUNTIME_DEPENDENCIES);
  package_manager(cfg, &root, &install)?;

  let mut install_dev = vec!["install"];
  install_dev.extend_from_slice(DEV_DEPENDENCIES);
  install_dev.push("--save-dev");
  package_manager(cfg, &root, &install_dev)?;

  templates::write_file(&root.join("tsconfig.json"), &TsConfig::default().to_json()?)?;
  ROLLUP.write_into(&root)?;

  let src = root.join("src");
  fs::create_dir(&src).with_context(|| error_messages::failed_to_create(src.display()))?;
  for template in &SOURCES {
    template.write_into(&root)?;
  }

  manifest::amend_file(&root)?;
  Ok(root)
}

fn package_manager(cfg: &InitConfig, root: &Path, args: &[&str]) -> Result<()> {
  run_checked(cfg.program(), &cfg.args_with(args), root)
}
