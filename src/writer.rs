use crate::config::OUTPUT_EXTENSION;
use crate::error::{Result, SplitError};
use crate::group::GroupKey;
use csv::StringRecord;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Makes sure `dir` exists and is a directory, creating missing parents.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(SplitError::InvalidOutputTarget {
            path: dir.to_path_buf(),
            reason: "path exists and is not a directory".into(),
        });
    }
    fs::create_dir_all(dir).map_err(|err| SplitError::InvalidOutputTarget {
        path: dir.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Writes one group per file into an output directory.
///
/// Each file holds the header followed by the group's rows in input order.
/// An existing file with the same name is truncated.
pub struct GroupWriter {
    dir: PathBuf,
    delimiter: u8,
    extension: String,
}

impl GroupWriter {
    /// Construct a new tab-delimited writer into `dir`
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            delimiter: b'\t',
            extension: OUTPUT_EXTENSION.to_owned(),
        }
    }

    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    pub fn extension(&mut self, extension: &str) -> &mut Self {
        self.extension = extension.to_owned();
        self
    }

    /// Where the group with `key` is written.
    pub fn path_for(&self, key: &GroupKey) -> PathBuf {
        self.dir.join(key.file_name(&self.extension))
    }

    /// Writes `header` and `rows` to the file for `key` and returns its path.
    pub fn write(
        &self,
        key: &GroupKey,
        header: &StringRecord,
        rows: &[&StringRecord],
    ) -> Result<PathBuf> {
        let path = self.path_for(key);
        self.write_records(&path, header, rows)
            .map_err(|source| SplitError::WriteFailure {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    fn write_records(
        &self,
        path: &Path,
        header: &StringRecord,
        rows: &[&StringRecord],
    ) -> io::Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(File::create(path)?);
        wtr.write_record(header)?;
        for row in rows {
            wtr.write_record(*row)?;
        }
        wtr.flush()
    }
}
