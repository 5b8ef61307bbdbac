use thiserror::Error;

use crate::isotope::Isotope;

#[derive(Error, Debug)]
pub enum FissionError {
    #[error("Reference table load failed: {0}")]
    ReferenceLoad(String),

    #[error("Fission fragment has no known isotope: heavier={heavier}, lighter={lighter}")]
    UnresolvedFragment { heavier: Isotope, lighter: Isotope },

    #[error("Nucleus with A={mass_number} cannot split after releasing {neutrons} neutron(s)")]
    DegenerateSplit { mass_number: u32, neutrons: u32 },

    #[error("Invalid neutron distribution: {0}")]
    InvalidSampler(String),

    #[error("Unknown fissile isotope: {0}")]
    UnknownFissile(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FissionResult<T> = Result<T, FissionError>;
