pub use crate::config::{SplitConfig, OUTPUT_EXTENSION};
pub use crate::error::{Result, SplitError};
pub use crate::group::{partition, GroupKey};
pub use crate::loader::TableBuilder;
pub use crate::table::{GeneColumn, Table};
pub use crate::writer::{prepare_output_dir, GroupWriter};
pub use crate::{run, Groups, SplitSummary};
