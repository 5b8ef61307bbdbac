// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Run Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! JSON persistence and plain-text summary of a trial run.

use fission_types::error::FissionResult;
use fission_types::isotope::Isotope;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::aggregate::{
    mean_neutrons, neutron_histogram, IsotopeGroups, NeutronHistogram, Products, SymbolCounts,
    SymbolProbabilities,
};
use crate::trials::TrialRun;

pub const SYMBOLS_FILE: &str = "symbols-count.json";
pub const ISOTOPES_FILE: &str = "isotopes-count.json";
pub const PROBABILITIES_FILE: &str = "probs.json";
pub const NEUTRONS_FILE: &str = "neutrons-count.json";
pub const SUMMARY_FILE: &str = "summary.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// Width of the bar column in [`format_ranked`] at 100 %.
const BAR_WIDTH: usize = 40;

/// Trial bookkeeping for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub target: Isotope,
    pub attempted: usize,
    pub succeeded: usize,
    pub unresolved: usize,
    /// Mean neutrons per attempted trial. Absent for an empty run.
    pub mean_neutrons: Option<f64>,
}

/// All aggregate views of a run, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub summary: RunSummary,
    pub symbols: SymbolCounts,
    pub groups: IsotopeGroups,
    pub probabilities: SymbolProbabilities,
    pub neutrons: NeutronHistogram,
}

impl RunReport {
    pub fn from_run(target: &Isotope, run: &TrialRun) -> Self {
        RunReport {
            summary: RunSummary {
                target: target.clone(),
                attempted: run.attempted(),
                succeeded: run.succeeded(),
                unresolved: run.unresolved,
                mean_neutrons: mean_neutrons(&run.neutrons),
            },
            symbols: run.products.count_symbols(),
            groups: run.products.count_isotope_groups(),
            probabilities: run.products.count_probabilities(),
            neutrons: neutron_histogram(&run.neutrons),
        }
    }

    /// Write every view as pretty JSON into `dir`. Returns the written paths.
    pub fn write_json(&self, dir: impl AsRef<Path>) -> FissionResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let written = vec![
            write_pretty(dir.join(SYMBOLS_FILE), &self.symbols)?,
            write_pretty(dir.join(ISOTOPES_FILE), &self.groups)?,
            write_pretty(dir.join(PROBABILITIES_FILE), &self.probabilities)?,
            write_pretty(dir.join(NEUTRONS_FILE), &self.neutrons)?,
            write_pretty(dir.join(SUMMARY_FILE), &self.summary)?,
        ];
        log::info!("wrote {} report files to {}", written.len(), dir.display());
        Ok(written)
    }
}

/// Write the raw product list as a JSON array of isotopes.
pub fn write_products(products: &Products, path: impl AsRef<Path>) -> FissionResult<PathBuf> {
    write_pretty(path.as_ref().to_path_buf(), products)
}

fn write_pretty<T: Serialize>(path: PathBuf, value: &T) -> FissionResult<PathBuf> {
    let data = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, data)?;
    Ok(path)
}

/// Ranked probability table with proportional bars, `top` rows at most.
pub fn format_ranked(probabilities: &SymbolProbabilities, top: usize) -> String {
    let mut out = String::new();
    let ranked = probabilities.ranked();
    for (rank, (symbol, pct)) in ranked.iter().take(top).enumerate() {
        let bar = "#".repeat(((pct / 100.0) * BAR_WIDTH as f64).round() as usize);
        let _ = writeln!(out, "{:>3}. {:<3} {:>7.3}%  {}", rank + 1, symbol, pct, bar);
    }
    if ranked.len() > top {
        let rest: f64 = ranked[top..].iter().map(|(_, p)| p).sum();
        let _ = writeln!(
            out,
            "     ... {} more elements, {:.3}%",
            ranked.len() - top,
            rest
        );
    }
    out
}
