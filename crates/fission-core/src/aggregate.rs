// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Aggregation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Derived views over collected fission products.
//!
//! Every view is recomputed from the full product list. Maps are ordered so
//! iteration and JSON output are stable across runs.

use fission_types::constants::PERCENT;
use fission_types::isotope::Isotope;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;

use crate::simulator::FissionEvent;

/// Fragments of all successful trials, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Products(Vec<Isotope>);

impl Products {
    pub fn new() -> Self {
        Products(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Products(Vec::with_capacity(capacity))
    }

    /// Append heavier then lighter fragment.
    pub fn push_event(&mut self, event: FissionEvent) {
        self.0.push(event.heavier);
        self.0.push(event.lighter);
    }

    pub fn count_symbols(&self) -> SymbolCounts {
        count_symbols(&self.0)
    }

    pub fn count_isotope_groups(&self) -> IsotopeGroups {
        count_isotope_groups(&self.0)
    }

    pub fn count_probabilities(&self) -> SymbolProbabilities {
        count_probabilities(&self.0)
    }
}

impl Deref for Products {
    type Target = [Isotope];

    fn deref(&self) -> &[Isotope] {
        &self.0
    }
}

impl From<Vec<Isotope>> for Products {
    fn from(isotopes: Vec<Isotope>) -> Self {
        Products(isotopes)
    }
}

impl FromIterator<Isotope> for Products {
    fn from_iter<I: IntoIterator<Item = Isotope>>(iter: I) -> Self {
        Products(iter.into_iter().collect())
    }
}

impl Extend<Isotope> for Products {
    fn extend<I: IntoIterator<Item = Isotope>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Products {
    type Item = Isotope;
    type IntoIter = std::vec::IntoIter<Isotope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Products {
    type Item = &'a Isotope;
    type IntoIter = std::slice::Iter<'a, Isotope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Element symbol → occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolCounts(pub BTreeMap<String, usize>);

impl SymbolCounts {
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

impl Deref for SymbolCounts {
    type Target = BTreeMap<String, usize>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Element symbol → (isotope name → occurrences).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsotopeGroups(pub BTreeMap<String, BTreeMap<String, usize>>);

impl IsotopeGroups {
    pub fn total(&self) -> usize {
        self.0.values().flat_map(|group| group.values()).sum()
    }

    /// Most frequent isotope of each element; ties go to the lower name.
    pub fn dominant(&self) -> BTreeMap<&str, (&str, usize)> {
        self.0
            .iter()
            .filter_map(|(symbol, group)| {
                group
                    .iter()
                    .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
                    .map(|(name, &count)| (symbol.as_str(), (name.as_str(), count)))
            })
            .collect()
    }
}

impl Deref for IsotopeGroups {
    type Target = BTreeMap<String, BTreeMap<String, usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Element symbol → share of all products [%].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolProbabilities(pub BTreeMap<String, f64>);

impl SymbolProbabilities {
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Descending by probability, ties by symbol.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> =
            self.0.iter().map(|(s, &p)| (s.as_str(), p)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

impl Deref for SymbolProbabilities {
    type Target = BTreeMap<String, f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Neutrons released → number of trials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeutronHistogram(pub BTreeMap<u32, usize>);

impl Deref for NeutronHistogram {
    type Target = BTreeMap<u32, usize>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub fn count_symbols(products: &[Isotope]) -> SymbolCounts {
    let mut counts = BTreeMap::new();
    for iso in products {
        *counts.entry(iso.symbol.clone()).or_insert(0) += 1;
    }
    SymbolCounts(counts)
}

pub fn count_isotope_groups(products: &[Isotope]) -> IsotopeGroups {
    let mut groups: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for iso in products {
        *groups
            .entry(iso.symbol.clone())
            .or_default()
            .entry(iso.name())
            .or_insert(0) += 1;
    }
    IsotopeGroups(groups)
}

/// Percentage of each symbol. Empty when there are no products.
pub fn count_probabilities(products: &[Isotope]) -> SymbolProbabilities {
    let counts = count_symbols(products);
    let total = counts.total();
    if total == 0 {
        return SymbolProbabilities::default();
    }
    SymbolProbabilities(
        counts
            .0
            .into_iter()
            .map(|(symbol, count)| (symbol, PERCENT * count as f64 / total as f64))
            .collect(),
    )
}

pub fn neutron_histogram(neutrons: &[u32]) -> NeutronHistogram {
    let mut hist = BTreeMap::new();
    for &n in neutrons {
        *hist.entry(n).or_insert(0) += 1;
    }
    NeutronHistogram(hist)
}

pub fn mean_neutrons(neutrons: &[u32]) -> Option<f64> {
    if neutrons.is_empty() {
        return None;
    }
    let sum: u64 = neutrons.iter().map(|&n| u64::from(n)).sum();
    Some(sum as f64 / neutrons.len() as f64)
}
