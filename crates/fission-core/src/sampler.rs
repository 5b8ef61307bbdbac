// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Neutron Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Prompt neutron multiplicity per fission event.
//!
//! Discrete weighted draw, default P(1)=0.6, P(2)=0.3, P(3)=0.1.

use fission_types::constants::NEUTRON_WEIGHTS;
use fission_types::error::{FissionError, FissionResult};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Weighted neutron-count distribution.
#[derive(Debug, Clone)]
pub struct NeutronSampler {
    counts: Vec<u32>,
    weights: Vec<u32>,
    index: WeightedIndex<u32>,
}

impl NeutronSampler {
    /// Default 60/30/10 table.
    pub fn new() -> FissionResult<Self> {
        Self::with_weights(&NEUTRON_WEIGHTS)
    }

    /// Custom table of (neutrons, weight) pairs.
    pub fn with_weights(table: &[(u32, u32)]) -> FissionResult<Self> {
        if table.is_empty() {
            return Err(FissionError::InvalidSampler(
                "weight table is empty".to_string(),
            ));
        }
        if let Some(&(count, _)) = table.iter().find(|(count, _)| *count == 0) {
            return Err(FissionError::InvalidSampler(format!(
                "neutron count must be >= 1, got {count}"
            )));
        }
        if table
            .iter()
            .try_fold(0u32, |total, &(_, weight)| total.checked_add(weight))
            .is_none()
        {
            return Err(FissionError::InvalidSampler(
                "total weight overflows u32".to_string(),
            ));
        }
        let counts: Vec<u32> = table.iter().map(|&(count, _)| count).collect();
        let weights: Vec<u32> = table.iter().map(|&(_, weight)| weight).collect();
        let index = WeightedIndex::new(&weights)
            .map_err(|e| FissionError::InvalidSampler(e.to_string()))?;
        Ok(NeutronSampler {
            counts,
            weights,
            index,
        })
    }

    /// One i.i.d. draw.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.counts[self.index.sample(rng)]
    }

    /// Largest neutron count with non-zero weight.
    pub fn max_neutrons(&self) -> u32 {
        self.counts
            .iter()
            .zip(&self.weights)
            .filter(|(_, &w)| w > 0)
            .map(|(&c, _)| c)
            .max()
            .unwrap_or(0)
    }

    /// P(neutrons == count).
    pub fn probability(&self, count: u32) -> f64 {
        let total: u64 = self.weights.iter().map(|&w| u64::from(w)).sum();
        let hits: u64 = self
            .counts
            .iter()
            .zip(&self.weights)
            .filter(|(&c, _)| c == count)
            .map(|(_, &w)| u64::from(w))
            .sum();
        hits as f64 / total as f64
    }

    /// Expected neutrons per event.
    pub fn mean(&self) -> f64 {
        let total: u64 = self.weights.iter().map(|&w| u64::from(w)).sum();
        let weighted: u64 = self
            .counts
            .iter()
            .zip(&self.weights)
            .map(|(&c, &w)| u64::from(c) * u64::from(w))
            .sum();
        weighted as f64 / total as f64
    }
}
