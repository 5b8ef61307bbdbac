// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Command-Line Interface
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use clap::{Args, Parser, Subcommand};
use fission_types::isotope::FissileChoice;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fission")]
#[command(author, version, about = "Stochastic neutron-induced fission product simulator")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run fission trials and write product reports
    Run(RunArgs),

    /// List the fissile targets
    Fissiles,

    /// Look up the element symbol of a (Z, A) pair
    Lookup {
        /// Atomic number Z
        atomic_number: u32,

        /// Mass number A
        mass_number: u32,

        /// Reference dataset (JSON) instead of the bundled table
        #[arg(long, env = "FISSION_REFERENCE")]
        reference: Option<PathBuf>,
    },
}

/// Flags override values from `--config`.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Run configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target isotope: U-235, U-233, Pu-239 or random
    #[arg(short, long)]
    pub isotope: Option<FissileChoice>,

    /// Number of fission trials
    #[arg(short = 'n', long)]
    pub trials: Option<usize>,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Worker threads (1 = sequential)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Reference dataset (JSON) instead of the bundled table
    #[arg(long, env = "FISSION_REFERENCE")]
    pub reference: Option<PathBuf>,

    /// Directory for the JSON reports
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Apportion fragment charge by A + 1 instead of the target A
    #[arg(long)]
    pub post_capture_charge: bool,

    /// Cut the heavy mass fraction to whole percent before scaling Z
    #[arg(long)]
    pub percent_charge: bool,

    /// Also write the raw product list
    #[arg(long)]
    pub products: bool,

    /// Rows in the printed probability table
    #[arg(long, default_value_t = 15)]
    pub top: usize,
}
