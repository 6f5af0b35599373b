use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a split run can fail.
///
/// None of these are recovered from: the first one raised ends the run.
#[derive(Debug, Error)]
pub enum SplitError {
    /// A required flag is missing or a value could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("input file not found or unreadable: {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Header missing, a row with the wrong field count, or bytes the
    /// reader could not decode.
    #[error("malformed input in {origin}{}: {detail}", line_suffix(.line))]
    MalformedInput {
        origin: String,
        line: Option<u64>,
        detail: String,
    },

    #[error("invalid gene column index: {requested} (valid range: 1 to {columns})")]
    InvalidColumnIndex { requested: i64, columns: usize },

    #[error("invalid output directory {}: {reason}", .path.display())]
    InvalidOutputTarget { path: PathBuf, reason: String },

    #[error("failed to write {}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" at line {}", line),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
