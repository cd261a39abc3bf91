//! Line-oriented parser for alias definition files.
//!
//! Each logical line has the form `name = command`. A physical line ending
//! in a backslash continues onto the next non-blank line; the pieces are
//! joined with a single space before the line is matched. Lines that do not
//! match are dropped and reported through a diagnostic sink, never as errors.

use std::fmt;

use tracing::warn;

/// A single `alias.<name>` entry parsed from the definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub name: String,
    pub command: String,
}

impl AliasRecord {
    /// Key under which the alias is stored in Git configuration.
    pub fn config_key(&self) -> String {
        format!("alias.{}", self.name)
    }
}

impl fmt::Display for AliasRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.command)
    }
}

/// Something the parser skipped. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A logical line that does not match `name = command`.
    InvalidLine { line: usize, text: String },
    /// The input ended while a continuation was still pending.
    UnterminatedContinuation { line: usize, text: String },
}

impl Diagnostic {
    /// 1-based physical line on which the offending logical line began.
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::InvalidLine { line, .. } | Diagnostic::UnterminatedContinuation { line, .. } => {
                *line
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidLine { line, text } => {
                write!(f, "line {}: skipping invalid line: {}", line, text)
            }
            Diagnostic::UnterminatedContinuation { line, text } => {
                write!(f, "line {}: dropping unterminated continuation: {}", line, text)
            }
        }
    }
}

/// Pending-buffer state carried between physical lines.
enum State {
    Idle,
    Accumulating { start_line: usize, buffer: String },
}

impl State {
    /// Appends a trimmed fragment, entering `Accumulating` if needed.
    fn push(self, line_no: usize, fragment: &str) -> (usize, String) {
        match self {
            State::Idle => (line_no, fragment.to_string()),
            State::Accumulating {
                start_line,
                mut buffer,
            } => {
                buffer.push_str(fragment);
                (start_line, buffer)
            }
        }
    }
}

/// Parses alias definitions, logging skipped lines as warnings.
pub fn parse(content: &str) -> Vec<AliasRecord> {
    parse_with(content, |diagnostic| warn!(line = diagnostic.line(), "{}", diagnostic))
}

/// Parses alias definitions, handing every skipped line to `sink`.
///
/// The returned records keep the order in which they appear in `content`.
/// Duplicate names are kept as-is.
pub fn parse_with<F>(content: &str, mut sink: F) -> Vec<AliasRecord>
where
    F: FnMut(Diagnostic),
{
    let mut records = Vec::new();
    let mut state = State::Idle;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;

        // Blank lines never touch the pending buffer, even mid-continuation.
        if raw.trim().is_empty() {
            continue;
        }

        let trimmed_end = raw.trim_end();
        if let Some(head) = trimmed_end.strip_suffix('\\') {
            let (start_line, mut buffer) = state.push(line_no, head.trim());
            buffer.push(' ');
            state = State::Accumulating { start_line, buffer };
            continue;
        }

        let (start_line, buffer) = state.push(line_no, raw.trim());
        state = State::Idle;

        match match_definition(&buffer) {
            Some(record) => records.push(record),
            None if !buffer.trim().is_empty() => sink(Diagnostic::InvalidLine {
                line: start_line,
                text: buffer,
            }),
            None => {}
        }
    }

    if let State::Accumulating { start_line, buffer } = state {
        if !buffer.trim().is_empty() {
            sink(Diagnostic::UnterminatedContinuation {
                line: start_line,
                text: buffer.trim_end().to_string(),
            });
        }
    }

    records
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Matches `^([A-Za-z0-9_-]+)\s*=\s*(.+)$` against one logical line.
fn match_definition(logical: &str) -> Option<AliasRecord> {
    let (lhs, rhs) = logical.split_once('=')?;

    let name = lhs.trim_end();
    if name.is_empty() || !name.chars().all(is_name_char) {
        return None;
    }

    let command = rhs.trim();
    if command.is_empty() {
        return None;
    }

    Some(AliasRecord {
        name: name.to_string(),
        command: command.to_string(),
    })
}
