//! Common error messages used across the codebase.

// Process errors
pub(crate) fn failed_to_run(cmdline: impl std::fmt::Display) -> String {
  format!("failed to run {cmdline}")
}

pub(crate) fn non_zero_exit(
  cmdline: impl std::fmt::Display,
  status: impl std::fmt::Display,
) -> String {
  format!("{cmdline} exited with non-zero status: {status}")
}

// Filesystem errors
pub(crate) fn failed_to_create(path: impl std::fmt::Display) -> String {
  format!("failed to create {path}")
}

pub(crate) fn failed_to_write(path: impl std::fmt::Display) -> String {
  format!("failed to write {path}")
}

pub(crate) fn failed_to_read(path: impl std::fmt::Display) -> String {
  format!("failed to read {path}")
}

pub(crate) const FAILED_TO_READ_CWD: &str = "failed to read current directory";

// Input errors
pub(crate) fn invalid_project_name(name: impl std::fmt::Display) -> String {
  format!("invalid project name: {name}")
}

pub(crate) const MANIFEST_NOT_AN_OBJECT: &str = "package.json does not contain a JSON object";

pub(crate) const INIT_FAILED_PREFIX: &str = "❌ Error during project initialization:";
