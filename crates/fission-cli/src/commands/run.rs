// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Run Command
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use anyhow::{Context, Result};
use fission_core::report::{format_ranked, write_products, RunReport, PRODUCTS_FILE};
use fission_core::sampler::NeutronSampler;
use fission_core::simulator::FissionSimulator;
use fission_core::trials::TrialDriver;
use fission_types::config::{ChargeBasis, ChargeTruncation, RunConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::RunArgs;

pub fn run(args: RunArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let table = super::load_table(config.reference.as_deref())?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let fissile = config.isotope.resolve(&mut rng);
    let target = fissile.isotope();

    let sampler = NeutronSampler::with_weights(&config.neutron_weights)
        .context("Invalid neutron weights")?;
    let simulator = FissionSimulator::new(&table, sampler)
        .with_charge_basis(config.charge_basis)
        .with_charge_truncation(config.charge_truncation);
    let driver = TrialDriver::new(simulator);

    if config.trials == 0 {
        log::warn!("trials = 0, reports will be empty");
    }
    log::info!(
        "{target}: {} trials, {} worker(s), {:?} charge basis, {:?} charge truncation",
        config.trials,
        config.workers,
        config.charge_basis,
        config.charge_truncation
    );

    let run = if config.workers > 1 {
        let base_seed = config.seed.unwrap_or_else(|| rng.gen());
        driver.run_parallel(&target, config.trials, config.workers, base_seed)
    } else {
        driver.run(&target, config.trials, &mut rng)
    }
    .with_context(|| format!("Fission run for {target} failed"))?;

    let report = RunReport::from_run(&target, &run);
    report
        .write_json(&config.output_dir)
        .with_context(|| format!("Failed to write reports to {}", config.output_dir.display()))?;
    if args.products {
        let path = write_products(&run.products, config.output_dir.join(PRODUCTS_FILE))
            .context("Failed to write product list")?;
        log::info!("wrote {}", path.display());
    }

    let summary = &report.summary;
    println!("Target:      {target}");
    println!("Trials:      {}", summary.attempted);
    println!(
        "Resolved:    {} ({} unresolved)",
        summary.succeeded, summary.unresolved
    );
    if let Some(rate) = run.success_rate() {
        println!("Success:     {:.2}%", rate * 100.0);
    }
    if let Some(mean) = summary.mean_neutrons {
        println!("Neutrons:    {mean:.3} per trial");
    }
    println!("Products:    {}", run.products.len());
    println!();
    print!("{}", format_ranked(&report.probabilities, args.top));
    Ok(())
}

/// Config file (or defaults), then command-line overrides, then validation.
fn resolve_config(args: &RunArgs) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RunConfig::default(),
    };

    if let Some(isotope) = args.isotope {
        config.isotope = isotope;
    }
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if args.reference.is_some() {
        config.reference = args.reference.clone();
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if args.post_capture_charge {
        config.charge_basis = ChargeBasis::PostCapture;
    }
    if args.percent_charge {
        config.charge_truncation = ChargeTruncation::Percent;
    }

    config.validate().context("Invalid run configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fission_types::isotope::{Fissile, FissileChoice};
    use std::io::Write;

    #[test]
    fn test_defaults_without_config() {
        let config = resolve_config(&RunArgs::default()).unwrap();
        assert_eq!(config.isotope, FissileChoice::Fixed(Fissile::U235));
        assert_eq!(config.workers, 1);
        assert_eq!(config.charge_basis, ChargeBasis::PreCapture);
        assert_eq!(config.charge_truncation, ChargeTruncation::Exact);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"isotope": "U-233", "trials": 50, "workers": 2}}"#).unwrap();

        let args = RunArgs {
            config: Some(file.path().to_path_buf()),
            trials: Some(70),
            post_capture_charge: true,
            percent_charge: true,
            ..Default::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.isotope, FissileChoice::Fixed(Fissile::U233));
        assert_eq!(config.trials, 70);
        assert_eq!(config.workers, 2);
        assert_eq!(config.charge_basis, ChargeBasis::PostCapture);
        assert_eq!(config.charge_truncation, ChargeTruncation::Percent);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let args = RunArgs {
            workers: Some(0),
            ..Default::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_run_writes_reports() {
        let dir = tempfile::tempdir().unwrap();
        let args = RunArgs {
            trials: Some(200),
            seed: Some(9),
            output: Some(dir.path().to_path_buf()),
            products: true,
            top: 5,
            ..Default::default()
        };
        run(args).unwrap();
        assert!(dir.path().join("probs.json").exists());
        assert!(dir.path().join("symbols-count.json").exists());
        assert!(dir.path().join(PRODUCTS_FILE).exists());
    }
}
