use anyhow::Result;
use clap::Parser;

pub mod commands;
pub mod config;
pub mod project;
mod texts;
pub mod utils;

use crate::config::InitConfig;
use crate::utils::error_messages::INIT_FAILED_PREFIX;

/// Scaffold a React + TypeScript component library bundled with Rollup.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Project (and directory) name. Prompted for when omitted.
  name: Option<String>,

  /// Package manager command line, e.g. "pnpm" or "/usr/local/bin/npm".
  #[arg(long, value_name = "CMD")]
  package_manager: Option<String>,

  /// Print a commented config file template and exit.
  #[arg(long, conflicts_with_all = ["name", "package_manager"])]
  print_config_template: bool,
}

pub fn parse() -> Cli {
  Cli::parse()
}

pub fn run() -> Result<()> {
  let cli = parse();
  utils::log::init_diagnostics();

  if cli.print_config_template {
    anstream::print!("{}", config::config_template());
    return Ok(());
  }

  let cfg = InitConfig::resolve(cli.package_manager.as_deref())?;
  log::debug!("effective config: {cfg:?}");
  commands::init::run(&cfg, cli.name.as_deref())?;
  Ok(())
}

/// Print the single failure line shown for any setup step that went wrong.
pub fn report_failure(err: &anyhow::Error) {
  crate::log_error!("{} {:#}", INIT_FAILED_PREFIX, err);
}
