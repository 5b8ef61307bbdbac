pub mod fissiles;
pub mod lookup;
pub mod run;

use anyhow::{Context, Result};
use fission_core::reference::ReferenceTable;
use std::path::Path;

/// Bundled table unless a dataset path is given.
pub fn load_table(reference: Option<&Path>) -> Result<ReferenceTable> {
    match reference {
        Some(path) => ReferenceTable::from_file(path)
            .with_context(|| format!("Failed to load reference table {}", path.display())),
        None => ReferenceTable::bundled().context("Failed to load bundled reference table"),
    }
}
