use colored::{ColoredString, Colorize};

use crate::{
    core::parser::{AliasRecord, Diagnostic},
    error::SetupError,
};

pub fn term_width() -> usize {
    term_size::dimensions().map_or(80, |(w, _)| w)
}

/// Horizontal rule sized to the terminal, capped so logs stay readable
pub fn rule() -> ColoredString {
    "─".repeat(term_width().min(60)).dimmed()
}

pub fn format_record(record: &AliasRecord) -> String {
    format!(
        "{} {} {} {}",
        "✔".green(),
        record.name.bright_green(),
        "=".dimmed(),
        record.command
    )
}

pub fn format_planned(record: &AliasRecord) -> String {
    format!(
        "{} {} {} {}",
        "•".blue(),
        record.config_key().bright_blue(),
        "=".dimmed(),
        record.command
    )
}

pub fn format_failure(record: &AliasRecord, error: &SetupError) -> String {
    format!("{} {} {}", "✘".red(), record.name.red().bold(), error)
}

pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!("{} {}", "warning:".yellow().bold(), diagnostic)
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", "error:".red().bold(), message)
}
