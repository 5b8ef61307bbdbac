// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_TRIALS, NEUTRON_WEIGHTS};
use crate::error::{FissionError, FissionResult};
use crate::isotope::FissileChoice;

/// Mass number used to apportion charge between the two fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeBasis {
    /// Target A before the inducing neutron is absorbed.
    #[default]
    PreCapture,
    /// Compound nucleus A + 1.
    PostCapture,
}

/// Integer arithmetic of the heavy fragment's charge share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeTruncation {
    /// `Z · A_heavy / A_basis`, one truncating division.
    #[default]
    Exact,
    /// `Z · ⌊100 · A_heavy / A_basis⌋ / 100`, mass fraction cut to whole percent first.
    Percent,
}

/// Top-level run configuration.
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Target: "U-235", "U-233", "Pu-239" or "random".
    #[serde(default)]
    pub isotope: FissileChoice,
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// RNG seed. When absent the run is seeded from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Worker threads. 1 runs trials sequentially.
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default)]
    pub charge_basis: ChargeBasis,
    #[serde(default)]
    pub charge_truncation: ChargeTruncation,
    /// Neutron multiplicity table as [neutrons, weight] pairs.
    #[serde(default = "default_neutron_weights")]
    pub neutron_weights: Vec<(u32, u32)>,
    /// Directory receiving the JSON reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Alternative reference dataset. Bundled table when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<PathBuf>,
}

fn default_trials() -> usize {
    DEFAULT_TRIALS
}
fn default_workers() -> usize {
    1
}
fn default_neutron_weights() -> Vec<(u32, u32)> {
    NEUTRON_WEIGHTS.to_vec()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            isotope: FissileChoice::default(),
            trials: default_trials(),
            seed: None,
            workers: default_workers(),
            charge_basis: ChargeBasis::default(),
            charge_truncation: ChargeTruncation::default(),
            neutron_weights: default_neutron_weights(),
            output_dir: default_output_dir(),
            reference: None,
        }
    }
}

impl RunConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: impl AsRef<Path>) -> FissionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FissionResult<()> {
        if self.workers == 0 {
            return Err(FissionError::ConfigError(
                "workers must be >= 1".to_string(),
            ));
        }
        if self.neutron_weights.is_empty() {
            return Err(FissionError::ConfigError(
                "neutron_weights must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
