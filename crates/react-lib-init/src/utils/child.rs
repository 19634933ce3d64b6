use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result, bail};

use crate::utils::error_messages;

/// Spawn a child process with inherited stdio and wait for it.
///
/// Output of the child streams directly to the console.
pub fn run_child_process(program: &str, args: &[String], cwd: &Path) -> Result<ExitStatus> {
  log::debug!(
    "running {} in {}",
    display_cmdline(program, args),
    cwd.display()
  );
  let mut cmd = Command::new(program);
  cmd
    .current_dir(cwd)
    .args(args)
    .stdin(Stdio::inherit())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit());
  cmd
    .status()
    .with_context(|| error_messages::failed_to_run(display_cmdline(program, args)))
}

/// Like [`run_child_process`] but fails when the child exits unsuccessfully.
pub fn run_checked(program: &str, args: &[String], cwd: &Path) -> Result<()> {
  let status = run_child_process(program, args, cwd)?;
  if !status.success() {
    bail!(error_messages::non_zero_exit(
      display_cmdline(program, args),
      status
    ));
  }
  Ok(())
}

/// Render argv for messages, quoting tokens where a shell would need it.
pub fn display_cmdline(program: &str, args: &[String]) -> String {
  let mut argv = Vec::with_capacity(args.len() + 1);
  argv.push(program);
  argv.extend(args.iter().map(String::as_str));
  shell_words::join(argv)
}
