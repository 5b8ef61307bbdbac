// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Fission Simulator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single neutron-induced fission event.
//!
//! The target absorbs one neutron (A' = A + 1), releases `ν` prompt
//! neutrons and splits into two fragments:
//!
//! ```text
//! A_heavy ~ U[A'/2, A' - ν)
//! Z_heavy = ⌊Z · A_heavy / A_basis⌋
//! Z_light = Z - Z_heavy,   A_light = A' - ν - A_heavy
//! ```
//!
//! Charge follows the mass fraction, not a yield curve.
//! `A_basis` is the target A unless [`ChargeBasis::PostCapture`] is set.
//! [`ChargeTruncation::Percent`] cuts the mass fraction to whole percent
//! before scaling Z. Integer truncation decides which (Z, A) pairs get
//! looked up, so it must not be replaced by rounding.

use fission_types::config::{ChargeBasis, ChargeTruncation};
use fission_types::constants::{CHARGE_FRACTION_SCALE, INDUCING_NEUTRONS};
use fission_types::error::{FissionError, FissionResult};
use fission_types::isotope::Isotope;
use rand::Rng;
use std::ops::Range;

use crate::reference::ReferenceTable;
use crate::sampler::NeutronSampler;

/// Resolved products of one fission event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FissionEvent {
    pub heavier: Isotope,
    pub lighter: Isotope,
    pub neutrons: u32,
}

impl FissionEvent {
    /// Z and A balance against the target plus the inducing neutron.
    pub fn conserves(&self, target: &Isotope) -> bool {
        let mass = u64::from(self.heavier.mass_number)
            + u64::from(self.lighter.mass_number)
            + u64::from(self.neutrons);
        self.heavier.atomic_number + self.lighter.atomic_number == target.atomic_number
            && mass == u64::from(target.mass_number) + u64::from(INDUCING_NEUTRONS)
    }
}

/// Outcome of one attempted fission.
///
/// An unknown fragment is a normal result of the sampling, not an error:
/// the trial is discarded by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FissionOutcome {
    Split(FissionEvent),
    Unresolved {
        heavier: Isotope,
        lighter: Isotope,
        neutrons: u32,
    },
}

impl FissionOutcome {
    pub fn neutrons(&self) -> u32 {
        match self {
            FissionOutcome::Split(event) => event.neutrons,
            FissionOutcome::Unresolved { neutrons, .. } => *neutrons,
        }
    }

    pub fn into_result(self) -> FissionResult<FissionEvent> {
        match self {
            FissionOutcome::Split(event) => Ok(event),
            FissionOutcome::Unresolved {
                heavier, lighter, ..
            } => Err(FissionError::UnresolvedFragment { heavier, lighter }),
        }
    }
}

/// Fission event generator bound to a reference table.
#[derive(Debug, Clone)]
pub struct FissionSimulator<'a> {
    table: &'a ReferenceTable,
    sampler: NeutronSampler,
    charge_basis: ChargeBasis,
    charge_truncation: ChargeTruncation,
}

impl<'a> FissionSimulator<'a> {
    pub fn new(table: &'a ReferenceTable, sampler: NeutronSampler) -> Self {
        FissionSimulator {
            table,
            sampler,
            charge_basis: ChargeBasis::default(),
            charge_truncation: ChargeTruncation::default(),
        }
    }

    pub fn with_charge_basis(mut self, charge_basis: ChargeBasis) -> Self {
        self.charge_basis = charge_basis;
        self
    }

    pub fn with_charge_truncation(mut self, charge_truncation: ChargeTruncation) -> Self {
        self.charge_truncation = charge_truncation;
        self
    }

    /// Fails unless `target` can split for every neutron count the sampler draws.
    pub fn check_target(&self, target: &Isotope) -> FissionResult<()> {
        let max_neutrons = self.sampler.max_neutrons();
        heavy_mass_range(compound_mass(target, max_neutrons)?, max_neutrons).map(|_| ())
    }

    /// Attempt one fission of `target`. The caller's isotope is not modified.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        target: &Isotope,
        rng: &mut R,
    ) -> FissionResult<FissionOutcome> {
        let neutrons = self.sampler.sample(rng);
        let compound = compound_mass(target, neutrons)?;
        let amu = rng.gen_range(heavy_mass_range(compound, neutrons)?);

        let (heavier, lighter) = self.fragments(target, amu, neutrons);

        match (self.table.resolve(&heavier), self.table.resolve(&lighter)) {
            (Some(heavier), Some(lighter)) => Ok(FissionOutcome::Split(FissionEvent {
                heavier,
                lighter,
                neutrons,
            })),
            _ => Ok(FissionOutcome::Unresolved {
                heavier,
                lighter,
                neutrons,
            }),
        }
    }

    /// Unresolved fragments for a given heavy mass and neutron count.
    ///
    /// Masses saturate at the `u32` bounds; `simulate` only passes values
    /// inside the heavy mass range.
    pub fn fragments(&self, target: &Isotope, amu: u32, neutrons: u32) -> (Isotope, Isotope) {
        let compound = target.mass_number.saturating_add(INDUCING_NEUTRONS);
        let basis = match self.charge_basis {
            ChargeBasis::PreCapture => target.mass_number,
            ChargeBasis::PostCapture => compound,
        };
        let z_heavy = heavy_charge(target.atomic_number, amu, basis, self.charge_truncation);
        let heavier = Isotope::fragment(z_heavy, amu);
        let lighter = Isotope::fragment(
            target.atomic_number - z_heavy,
            compound.saturating_sub(neutrons).saturating_sub(amu),
        );
        (heavier, lighter)
    }
}

/// Compound nucleus mass A + 1, or `DegenerateSplit` if it overflows.
fn compound_mass(target: &Isotope, neutrons: u32) -> FissionResult<u32> {
    target
        .mass_number
        .checked_add(INDUCING_NEUTRONS)
        .ok_or(FissionError::DegenerateSplit {
            mass_number: target.mass_number,
            neutrons,
        })
}

/// Heavy fragment mass range `[A'/2, A' - ν)`.
fn heavy_mass_range(compound: u32, neutrons: u32) -> FissionResult<Range<u32>> {
    let lo = compound / 2;
    let hi = compound.saturating_sub(neutrons);
    if hi <= lo {
        return Err(FissionError::DegenerateSplit {
            mass_number: compound,
            neutrons,
        });
    }
    Ok(lo..hi)
}

/// Heavy fragment charge, capped at Z.
fn heavy_charge(atomic_number: u32, amu: u32, basis: u32, truncation: ChargeTruncation) -> u32 {
    let z = u64::from(atomic_number);
    let amu = u64::from(amu);
    let basis = u64::from(basis.max(1));
    let heavy = match truncation {
        ChargeTruncation::Exact => z * amu / basis,
        ChargeTruncation::Percent => {
            let scale = u64::from(CHARGE_FRACTION_SCALE);
            z * (amu * scale / basis) / scale
        }
    };
    heavy.min(z) as u32
}

/// One fission with the default neutron distribution.
pub fn simulate_fission<R: Rng + ?Sized>(
    table: &ReferenceTable,
    target: &Isotope,
    rng: &mut R,
) -> FissionResult<FissionEvent> {
    let simulator = FissionSimulator::new(table, NeutronSampler::new()?);
    simulator.simulate(target, rng)?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fission_types::isotope::Fissile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_heavy_charge_exact() {
        use ChargeTruncation::Exact;
        // ⌊92 · 118 / 235⌋ = ⌊46.19⌋
        assert_eq!(heavy_charge(92, 118, 235, Exact), 46);
        // ⌊92 · 121 / 235⌋ = ⌊47.37⌋
        assert_eq!(heavy_charge(92, 121, 235, Exact), 47);
        assert_eq!(heavy_charge(92, 123, 235, Exact), 48);
        assert_eq!(heavy_charge(92, 200, 235, Exact), 78);
        // Post-capture basis: ⌊18400 / 236⌋ = 77
        assert_eq!(heavy_charge(92, 200, 236, Exact), 77);
        assert_eq!(heavy_charge(10, 50, 10, Exact), 10);
    }

    #[test]
    fn test_heavy_charge_percent() {
        use ChargeTruncation::Percent;
        // 92 · ⌊12100/235⌋ / 100 = 92 · 51 / 100
        assert_eq!(heavy_charge(92, 121, 235, Percent), 46);
        assert_eq!(heavy_charge(92, 123, 235, Percent), 47);
        assert_eq!(heavy_charge(92, 200, 235, Percent), 78);
    }

    #[test]
    fn test_default_charge_is_single_division() {
        let table = ReferenceTable::default();
        let sim = FissionSimulator::new(&table, NeutronSampler::new().unwrap());
        let u235 = Fissile::U235.isotope();
        for amu in 118..235 {
            let (heavier, _) = sim.fragments(&u235, amu, 1);
            assert_eq!(heavier.atomic_number, 92 * amu / 235, "amu = {amu}");
        }
    }

    #[test]
    fn test_percent_truncation_changes_lookups() {
        let table = ReferenceTable::default();
        let u235 = Fissile::U235.isotope();
        let exact = FissionSimulator::new(&table, NeutronSampler::new().unwrap());
        let percent = exact.clone().with_charge_truncation(ChargeTruncation::Percent);
        assert_eq!(exact.fragments(&u235, 121, 1).0.atomic_number, 47);
        assert_eq!(percent.fragments(&u235, 121, 1).0.atomic_number, 46);
    }

    #[test]
    fn test_mass_overflow_is_degenerate() {
        let table = ReferenceTable::default();
        let sim = FissionSimulator::new(&table, NeutronSampler::new().unwrap());
        let huge = Isotope::new("Xx", 92, u32::MAX);
        assert!(matches!(
            sim.check_target(&huge),
            Err(FissionError::DegenerateSplit { mass_number: u32::MAX, .. })
        ));
        let mut rng = StdRng::seed_from_u64(2);
        assert!(matches!(
            sim.simulate(&huge, &mut rng),
            Err(FissionError::DegenerateSplit { .. })
        ));
        let (heavier, lighter) = sim.fragments(&huge, u32::MAX, 3);
        assert_eq!(heavier.atomic_number + lighter.atomic_number, 92);
        assert_eq!(lighter.mass_number, 0);
    }

    #[test]
    fn test_heavy_mass_range() {
        assert_eq!(heavy_mass_range(236, 1).unwrap(), 118..235);
        assert_eq!(heavy_mass_range(236, 3).unwrap(), 118..233);
        assert!(matches!(
            heavy_mass_range(2, 1),
            Err(FissionError::DegenerateSplit { mass_number: 2, neutrons: 1 })
        ));
    }

    #[test]
    fn test_fragments_conserve() {
        let table = ReferenceTable::default();
        let sim = FissionSimulator::new(&table, NeutronSampler::new().unwrap());
        let u235 = Fissile::U235.isotope();
        let (heavier, lighter) = sim.fragments(&u235, 140, 2);
        assert_eq!(heavier.atomic_number + lighter.atomic_number, 92);
        assert_eq!(heavier.mass_number + lighter.mass_number + 2, 236);
        assert_eq!(lighter.mass_number, 94);
    }

    #[test]
    fn test_simulate_conserves_charge_and_mass() {
        let table = ReferenceTable::bundled().unwrap();
        let sim = FissionSimulator::new(&table, NeutronSampler::new().unwrap());
        let mut rng = StdRng::seed_from_u64(42);
        for fissile in Fissile::ALL {
            let target = fissile.isotope();
            for _ in 0..2000 {
                if let FissionOutcome::Split(event) = sim.simulate(&target, &mut rng).unwrap() {
                    assert!(event.conserves(&target), "{fissile}: {event:?}");
                    assert!(event.heavier.mass_number >= event.lighter.mass_number);
                    assert!(event.heavier.is_resolved() && event.lighter.is_resolved());
                }
            }
        }
    }

    #[test]
    fn test_target_not_mutated() {
        let table = ReferenceTable::bundled().unwrap();
        let sim = FissionSimulator::new(&table, NeutronSampler::new().unwrap());
        let target = Fissile::U235.isotope();
        let mut rng = StdRng::seed_from_u64(5);
        let _ = sim.simulate(&target, &mut rng).unwrap();
        assert_eq!(target, Isotope::new("U", 92, 235));
    }

    #[test]
    fn test_empty_table_is_unresolved() {
        let table = ReferenceTable::default();
        let mut rng = StdRng::seed_from_u64(9);
        let target = Fissile::U235.isotope();
        let result = simulate_fission(&table, &target, &mut rng);
        assert!(matches!(
            result,
            Err(FissionError::UnresolvedFragment { .. })
        ));
    }

    #[test]
    fn test_unresolved_keeps_fragments() {
        // Table knows only the heavy partner: the light one cannot resolve.
        let table = ReferenceTable::from_records((118..236).map(|a| {
            Isotope::new("X", heavy_charge(92, a, 235, ChargeTruncation::Exact), a)
        }))
        .unwrap();
        let sim = FissionSimulator::new(&table, NeutronSampler::with_weights(&[(2, 1)]).unwrap());
        let target = Fissile::U235.isotope();
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..100 {
            match sim.simulate(&target, &mut rng).unwrap() {
                FissionOutcome::Unresolved {
                    heavier,
                    lighter,
                    neutrons,
                } => {
                    assert_eq!(neutrons, 2);
                    assert!(!lighter.is_resolved());
                    assert_eq!(heavier.mass_number + lighter.mass_number + 2, 236);
                }
                FissionOutcome::Split(event) => {
                    panic!("light fragment should not resolve: {event:?}")
                }
            }
        }
    }

    #[test]
    fn test_degenerate_target() {
        let table = ReferenceTable::bundled().unwrap();
        let sim = FissionSimulator::new(&table, NeutronSampler::new().unwrap());
        let hydrogen = Isotope::new("H", 1, 1);
        assert!(sim.check_target(&hydrogen).is_err());
        assert!(sim.check_target(&Fissile::Pu239.isotope()).is_ok());

        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sim.simulate(&hydrogen, &mut rng),
            Err(FissionError::DegenerateSplit { .. })
        ));
    }

    #[test]
    fn test_post_capture_basis_shifts_charge() {
        let table = ReferenceTable::default();
        let target = Fissile::U235.isotope();
        let pre = FissionSimulator::new(&table, NeutronSampler::new().unwrap());
        let post = pre.clone().with_charge_basis(ChargeBasis::PostCapture);
        let (h_pre, _) = pre.fragments(&target, 200, 1);
        let (h_post, _) = post.fragments(&target, 200, 1);
        assert_eq!(h_pre.atomic_number, 78);
        assert_eq!(h_post.atomic_number, 77);
    }
}
