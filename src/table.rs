use crate::error::{Result, SplitError};
use csv::StringRecord;

/// An in-memory table: ordered column names and rows aligned to them.
///
/// Built once by the loader and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Constructs a `Table`, rejecting any row whose length differs
    /// from the header's.
    pub fn new(columns: StringRecord, rows: Vec<StringRecord>) -> Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(SplitError::MalformedInput {
                    origin: "table".into(),
                    line: Some(idx as u64 + 2),
                    detail: format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        row.len()
                    ),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &StringRecord {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolves a caller supplied 1-based position to a column.
    ///
    /// Fails with `InvalidColumnIndex` unless `1 <= position <= column_count`.
    pub fn resolve_column(&self, position: i64) -> Result<GeneColumn> {
        let count = self.column_count();
        if position < 1 || position as u64 > count as u64 {
            return Err(SplitError::InvalidColumnIndex {
                requested: position,
                columns: count,
            });
        }
        let index = (position - 1) as usize;
        Ok(GeneColumn {
            index,
            name: self.columns[index].to_owned(),
        })
    }
}

/// A column position resolved against a loaded `Table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneColumn {
    index: usize,
    name: String,
}

impl GeneColumn {
    /// 0-based offset into each row.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of this column in `row`.
    pub fn value<'r>(&self, row: &'r StringRecord) -> &'r str {
        &row[self.index]
    }
}
