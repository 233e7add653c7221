//! Output formatting utilities for the CLI

use crate::{Error, Result};
use std::io::{self, Write};
use std::path::Path;

/// Format error message for display
pub fn format_error(operation: &str, details: &str) -> String {
    format!("ERROR: {} - {}", operation, details)
}

/// Operation name shown in front of an error.
pub fn error_operation(error: &Error) -> &'static str {
    match error {
        Error::Config(_) => "load config",
        Error::Dataset(_) | Error::Io(_) => "read input",
        Error::Parse(_) | Error::Json(_) => "parse input",
        Error::MalformedLabel(_) => "score direction",
        Error::InvalidInput(_) => "write output",
        Error::NoTasks => "evaluate",
    }
}

/// Log info message (respects quiet flag)
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", msg);
    }
}

/// Write content to stdout, newline-terminated.
pub fn print_stdout(content: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", content)?;
    stdout.flush()?;
    Ok(())
}

/// Write the report to `path`, creating parent directories as needed.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::invalid_input(format!("failed to create {}: {}", parent.display(), e))
        })?;
    }
    std::fs::write(path, format!("{}\n", content))
        .map_err(|e| Error::invalid_input(format!("failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        assert_eq!(
            format_error("evaluate", &Error::NoTasks.to_string()),
            "ERROR: evaluate - No tasks evaluated. Provide at least one (gold, pred) pair."
        );
    }

    #[test]
    fn test_error_operation() {
        assert_eq!(error_operation(&Error::config("x")), "load config");
        assert_eq!(error_operation(&Error::malformed_label("5")), "score direction");
        assert_eq!(error_operation(&Error::NoTasks), "evaluate");
    }

    #[test]
    fn test_write_report_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/results.json");
        write_report("{}", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }
}
