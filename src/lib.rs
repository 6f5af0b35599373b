#![crate_name = "eqtl_split"]
use csv::StringRecord;
use log::info;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod prelude;

pub mod config;
pub mod error;
pub mod group;
pub mod loader;
pub mod table;
pub mod writer;

use crate::prelude::*;

/// Rows of a table keyed by their gene column value, in key order.
pub type Groups<'t> = BTreeMap<GroupKey, Vec<&'t StringRecord>>;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// Name of the column the rows were grouped on
    pub gene_column: String,
    /// Every file written, in group order
    pub files: Vec<PathBuf>,
}

/// Splits the input named by `config` into one file per gene.
///
/// Stages run in order: load the whole input, resolve the gene column,
/// prepare the output directory, then write each group. The first failure
/// ends the run; files already written are left in place.
pub fn run(config: &SplitConfig) -> Result<SplitSummary> {
    let table = TableBuilder::new().from_path(config.input())?;
    let column = table.resolve_column(config.gene_col())?;
    info!("using column '{}' as the gene column", column.name());

    prepare_output_dir(config.output_dir())?;

    let groups = partition(&table, &column);
    let writer = GroupWriter::new(config.output_dir());
    let mut files = Vec::with_capacity(groups.len());
    for (key, rows) in &groups {
        let path = writer.write(key, table.columns(), rows)?;
        info!("saved gene data to file: {}", path.display());
        files.push(path);
    }

    info!(
        "all {} genes processed, files are saved in {}",
        files.len(),
        config.output_dir().display()
    );
    Ok(SplitSummary {
        gene_column: column.name().to_owned(),
        files,
    })
}
