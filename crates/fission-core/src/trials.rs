// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Trial Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Repeated fission trials of one target.
//!
//! Every attempted trial records its neutron count. Only trials whose two
//! fragments both resolve add products (heavier, then lighter).

use fission_types::error::FissionResult;
use fission_types::isotope::Isotope;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::aggregate::Products;
use crate::reference::ReferenceTable;
use crate::sampler::NeutronSampler;
use crate::simulator::{FissionOutcome, FissionSimulator};

/// Collected output of a batch of trials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialRun {
    /// Fragments of successful trials, two per trial.
    pub products: Products,
    /// Neutrons released, one entry per attempted trial.
    pub neutrons: Vec<u32>,
    /// Trials discarded because a fragment did not resolve.
    pub unresolved: usize,
}

impl TrialRun {
    pub fn attempted(&self) -> usize {
        self.neutrons.len()
    }

    pub fn succeeded(&self) -> usize {
        self.attempted() - self.unresolved
    }

    /// Fraction of attempted trials that produced products.
    pub fn success_rate(&self) -> Option<f64> {
        if self.attempted() == 0 {
            return None;
        }
        Some(self.succeeded() as f64 / self.attempted() as f64)
    }

    /// Append another run's results after this one.
    pub fn merge(&mut self, other: TrialRun) {
        self.products.extend(other.products);
        self.neutrons.extend(other.neutrons);
        self.unresolved += other.unresolved;
    }
}

/// Runs a simulator repeatedly against one target.
#[derive(Debug, Clone)]
pub struct TrialDriver<'a> {
    simulator: FissionSimulator<'a>,
}

impl<'a> TrialDriver<'a> {
    pub fn new(simulator: FissionSimulator<'a>) -> Self {
        TrialDriver { simulator }
    }

    /// Sequential run of exactly `trials` attempts.
    pub fn run<R: Rng + ?Sized>(
        &self,
        target: &Isotope,
        trials: usize,
        rng: &mut R,
    ) -> FissionResult<TrialRun> {
        self.simulator.check_target(target)?;
        let run = self.run_batch(target, trials, rng)?;
        log::info!(
            "{target}: {} trials, {} split, {} unresolved",
            run.attempted(),
            run.succeeded(),
            run.unresolved
        );
        Ok(run)
    }

    /// Parallel run over `workers` contiguous chunks.
    ///
    /// Worker `i` draws from its own `StdRng` seeded with `seed + i`, and the
    /// chunks are merged in worker order, so equal arguments give equal runs.
    pub fn run_parallel(
        &self,
        target: &Isotope,
        trials: usize,
        workers: usize,
        seed: u64,
    ) -> FissionResult<TrialRun> {
        self.simulator.check_target(target)?;
        let chunks = chunk_sizes(trials, workers.max(1));
        log::debug!("{target}: splitting {trials} trials into chunks {chunks:?}");

        let partials: Vec<TrialRun> = chunks
            .into_par_iter()
            .enumerate()
            .map(|(worker, size)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(worker as u64));
                self.run_batch(target, size, &mut rng)
            })
            .collect::<FissionResult<Vec<_>>>()?;

        let mut run = TrialRun::default();
        for partial in partials {
            run.merge(partial);
        }
        log::info!(
            "{target}: {} trials on {workers} workers, {} split, {} unresolved",
            run.attempted(),
            run.succeeded(),
            run.unresolved
        );
        Ok(run)
    }

    fn run_batch<R: Rng + ?Sized>(
        &self,
        target: &Isotope,
        trials: usize,
        rng: &mut R,
    ) -> FissionResult<TrialRun> {
        let mut run = TrialRun {
            products: Products::with_capacity(2 * trials),
            neutrons: Vec::with_capacity(trials),
            unresolved: 0,
        };
        for trial in 0..trials {
            let outcome = self.simulator.simulate(target, rng)?;
            run.neutrons.push(outcome.neutrons());
            match outcome {
                FissionOutcome::Split(event) => run.products.push_event(event),
                FissionOutcome::Unresolved {
                    heavier, lighter, ..
                } => {
                    log::debug!("trial {trial}: no isotope for {heavier} + {lighter}");
                    run.unresolved += 1;
                }
            }
        }
        Ok(run)
    }
}

/// Split `trials` into `workers` sizes differing by at most one.
fn chunk_sizes(trials: usize, workers: usize) -> Vec<usize> {
    let base = trials / workers;
    let extra = trials % workers;
    (0..workers).map(|i| base + usize::from(i < extra)).collect()
}

/// Sequential run with the default neutron distribution.
pub fn run_trials<R: Rng + ?Sized>(
    table: &ReferenceTable,
    target: &Isotope,
    trials: usize,
    rng: &mut R,
) -> FissionResult<TrialRun> {
    let simulator = FissionSimulator::new(table, NeutronSampler::new()?);
    TrialDriver::new(simulator).run(target, trials, rng)
}
