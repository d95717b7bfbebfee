//! Progress and error reporting.

use colored::Colorize;

/// Reports a task.
pub fn task(name: &str) {
   eprintln!("{}", name.bold());
}

/// Reports an error that ends the run, along with everything that led to it.
pub fn error(error: &anyhow::Error) {
   eprintln!("{} {:#}", "error:".red().bold(), error);
}
