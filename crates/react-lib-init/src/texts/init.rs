use owo_colors::OwoColorize as _;

use crate::utils::log::t;

fn highlight_name() -> String {
  "React TypeScript Component Library".bright_cyan().bold().to_string()
}

pub fn name_prompt() -> String {
  "Enter the project name".to_string()
}

pub fn banner(project: &str) -> String {
  format!("🚀 Initializing {}: {}...", highlight_name(), t::name(project))
}

pub fn success_line() -> String {
  "✅ React TypeScript Component Library initialized successfully!".to_string()
}

pub fn next_steps_lines(project: &str, package_manager: &str) -> Vec<String> {
  vec![
    "👉 Run the following commands to build your project:".to_string(),
    format!("   {}", t::cmd(format!("cd {}", shell_words::quote(project)))),
    format!("   {}", t::cmd(format!("{package_manager} run build"))),
  ]
}
