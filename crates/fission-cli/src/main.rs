// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Fission CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Fissiles => commands::fissiles::run(),
        Commands::Lookup {
            atomic_number,
            mass_number,
            reference,
        } => commands::lookup::run(atomic_number, mass_number, reference.as_deref()),
    }
}
