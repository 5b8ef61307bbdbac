// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Fission Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stochastic neutron-induced fission.
//!
//! Reference isotope lookup, prompt neutron sampling, fragment splitting
//! under Z/A conservation, trial driving and product aggregation.

pub mod aggregate;
pub mod reference;
pub mod report;
pub mod sampler;
pub mod simulator;
pub mod trials;

