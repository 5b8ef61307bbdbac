// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Prompt neutron multiplicity table as (neutrons, weight).
/// P(1)=0.6, P(2)=0.3, P(3)=0.1.
pub const NEUTRON_WEIGHTS: [(u32, u32); 3] = [(1, 60), (2, 30), (3, 10)];

/// Neutrons absorbed by the target nucleus before it splits.
pub const INDUCING_NEUTRONS: u32 = 1;

/// Fixed-point scale of the heavy fragment's mass fraction under
/// percent charge truncation.
pub const CHARGE_FRACTION_SCALE: u32 = 100;

/// Default number of fission trials per run.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Percentage scale for symbol probabilities.
pub const PERCENT: f64 = 100.0;
