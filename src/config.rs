use crate::error::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension given to every group file.
pub const OUTPUT_EXTENSION: &str = "tsv";

/// Split eQTL data by gene.
///
/// Reads a comma-separated table and writes one tab-separated file per
/// distinct value of the gene column.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct SplitConfig {
    /// Path to the input CSV file
    #[arg(long = "input", value_name = "PATH")]
    input: PathBuf,

    /// Path to the output directory, created if missing
    #[arg(long = "output_dir", value_name = "DIR")]
    output_dir: PathBuf,

    /// Index of the column containing gene names (1-based)
    #[arg(long = "gene_col", value_name = "N", allow_hyphen_values = true)]
    gene_col: i64,
}

impl SplitConfig {
    pub fn new<I, O>(input: I, output_dir: O, gene_col: i64) -> Self
    where
        I: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            gene_col,
        }
    }

    /// Resolves a configuration from command line tokens.
    ///
    /// The first token is the program name, as with `std::env::args_os()`.
    /// Only presence and integer syntax are checked here; `gene_col` is
    /// range checked once the table is loaded.
    pub fn try_from_tokens<I, T>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(tokens)?)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The gene column as given by the caller, 1-based and unchecked.
    pub fn gene_col(&self) -> i64 {
        self.gene_col
    }
}
