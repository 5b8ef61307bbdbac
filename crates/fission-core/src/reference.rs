// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Reference Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Known-isotope lookup keyed by (Z, A).
//!
//! Built once by the caller and shared read-only with every simulator.
//! The bundled dataset is embedded at compile time from `data/isotopes.json`.

use fission_types::error::{FissionError, FissionResult};
use fission_types::isotope::Isotope;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Bundled nuclide list: `[{symbol, atomic_number, mass_number}, ...]`.
const BUNDLED_ISOTOPES: &str = include_str!("../data/isotopes.json");

/// Immutable (Z, A) → element symbol map.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    symbols: HashMap<(u32, u32), String>,
}

impl ReferenceTable {
    /// Parse the dataset shipped with the crate.
    pub fn bundled() -> FissionResult<Self> {
        Self::from_json(BUNDLED_ISOTOPES)
    }

    /// Load a dataset with the bundled schema from disk.
    pub fn from_file(path: impl AsRef<Path>) -> FissionResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FissionError::ReferenceLoad(format!("{}: {e}", path.display())))?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> FissionResult<Self> {
        let records: Vec<Isotope> =
            serde_json::from_str(json).map_err(|e| FissionError::ReferenceLoad(e.to_string()))?;
        Self::from_records(records)
    }

    /// Build from records. A repeated (Z, A) keeps the last symbol seen.
    pub fn from_records<I>(records: I) -> FissionResult<Self>
    where
        I: IntoIterator<Item = Isotope>,
    {
        let mut symbols = HashMap::new();
        for record in records {
            if !record.is_resolved() {
                return Err(FissionError::ReferenceLoad(format!(
                    "record {record} has no symbol"
                )));
            }
            if record.mass_number == 0 || record.mass_number < record.atomic_number {
                return Err(FissionError::ReferenceLoad(format!(
                    "record {} has A={} < Z={}",
                    record.symbol, record.mass_number, record.atomic_number
                )));
            }
            symbols.insert((record.atomic_number, record.mass_number), record.symbol);
        }
        log::debug!("reference table loaded: {} isotopes", symbols.len());
        Ok(ReferenceTable { symbols })
    }

    pub fn lookup(&self, atomic_number: u32, mass_number: u32) -> Option<&str> {
        self.symbols
            .get(&(atomic_number, mass_number))
            .map(String::as_str)
    }

    /// Attach the known symbol to a fragment, or `None` if (Z, A) is unknown.
    pub fn resolve(&self, fragment: &Isotope) -> Option<Isotope> {
        self.lookup(fragment.atomic_number, fragment.mass_number)
            .map(|symbol| fragment.clone().with_symbol(symbol))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Distinct element symbols present in the table.
    pub fn symbols(&self) -> BTreeSet<&str> {
        self.symbols.values().map(String::as_str).collect()
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.symbols.values().any(|s| s == symbol)
    }

    /// All isotopes of one element, ascending in A.
    pub fn isotopes_of(&self, symbol: &str) -> Vec<Isotope> {
        let mut isotopes: Vec<Isotope> = self
            .symbols
            .iter()
            .filter(|(_, s)| s.as_str() == symbol)
            .map(|(&(z, a), s)| Isotope::new(s.clone(), z, a))
            .collect();
        isotopes.sort_by_key(|iso| iso.mass_number);
        isotopes
    }
}
