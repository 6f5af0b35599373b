use crate::error::{Result, SplitError};
use crate::table::Table;
use csv;
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Loads a delimited file with a header line into a `Table`.
///
/// Rows must have exactly as many fields as the header. Blank lines are
/// skipped and quoted fields may contain the delimiter.
pub struct TableBuilder {
    delimiter: u8,
}

impl TableBuilder {
    /// Construct a new comma-delimited table builder
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Reads the whole file at `path` into memory.
    pub fn from_path(&self, path: &Path) -> Result<Table> {
        let not_found = |source: io::Error| SplitError::FileNotFound {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(not_found)?;
        if !file.metadata().map_err(not_found)?.is_file() {
            return Err(not_found(io::Error::new(
                io::ErrorKind::Other,
                "not a regular file",
            )));
        }
        self.read_table(file, &path.display().to_string())
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Table> {
        self.read_table(reader, "input")
    }

    fn read_table<R: Read>(&self, reader: R, origin: &str) -> Result<Table> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let columns = rdr
            .headers()
            .map_err(|err| load_error(err, origin))?
            .clone();
        if columns.is_empty() {
            return Err(SplitError::MalformedInput {
                origin: origin.to_owned(),
                line: None,
                detail: "missing header line".into(),
            });
        }

        let rows = rdr
            .into_records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|err| load_error(err, origin))?;
        debug!(
            "loaded {} rows of {} columns from {}",
            rows.len(),
            columns.len(),
            origin
        );
        Table::new(columns, rows)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn load_error(err: csv::Error, origin: &str) -> SplitError {
    let line = err.position().map(|pos| pos.line());
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => SplitError::FileNotFound {
            path: PathBuf::from(origin),
            source,
        },
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => SplitError::MalformedInput {
            origin: origin.to_owned(),
            line,
            detail: format!("expected {} fields, found {}", expected_len, len),
        },
        csv::ErrorKind::Utf8 { err, .. } => SplitError::MalformedInput {
            origin: origin.to_owned(),
            line,
            detail: format!("invalid UTF-8 in field {}", err.field() + 1),
        },
        _ => SplitError::MalformedInput {
            origin: origin.to_owned(),
            line,
            detail: message,
        },
    }
}
