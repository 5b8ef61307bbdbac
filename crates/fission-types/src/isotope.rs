// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Isotope
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nuclide identifiers and the fixed set of fissile targets.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FissionError;

/// A variant of a chemical element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Isotope {
    /// Element symbol ("X"). Empty while a fragment is unresolved.
    #[serde(default)]
    pub symbol: String,
    /// Proton count ("Z").
    pub atomic_number: u32,
    /// Proton + neutron count ("A").
    pub mass_number: u32,
}

impl Isotope {
    pub fn new(symbol: impl Into<String>, atomic_number: u32, mass_number: u32) -> Self {
        Isotope {
            symbol: symbol.into(),
            atomic_number,
            mass_number,
        }
    }

    /// Fission fragment with known Z and A but no element symbol yet.
    pub fn fragment(atomic_number: u32, mass_number: u32) -> Self {
        Isotope {
            symbol: String::new(),
            atomic_number,
            mass_number,
        }
    }

    /// Same nuclide carrying the given symbol.
    pub fn with_symbol(self, symbol: impl Into<String>) -> Self {
        Isotope {
            symbol: symbol.into(),
            ..self
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.symbol.is_empty()
    }

    /// N = A - Z.
    pub fn neutron_number(&self) -> u32 {
        self.mass_number.saturating_sub(self.atomic_number)
    }

    /// Display name used for grouping, e.g. `"Kr-92"`.
    pub fn name(&self) -> String {
        format!("{}-{}", self.symbol, self.mass_number)
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_resolved() {
            write!(f, "{}-{}", self.symbol, self.mass_number)
        } else {
            write!(f, "(Z={}, A={})", self.atomic_number, self.mass_number)
        }
    }
}

/// Heavy isotopes that sustain neutron-induced fission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Fissile {
    U233,
    U235,
    Pu239,
}

impl Fissile {
    pub const ALL: [Fissile; 3] = [Fissile::U233, Fissile::U235, Fissile::Pu239];

    pub fn isotope(self) -> Isotope {
        match self {
            Fissile::U233 => Isotope::new("U", 92, 233),
            Fissile::U235 => Isotope::new("U", 92, 235),
            Fissile::Pu239 => Isotope::new("Pu", 94, 239),
        }
    }

    /// Uniform pick from [`Fissile::ALL`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Fissile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.isotope().name())
    }
}

/// Accepts `U-235`, `u235`, `U_235`, `Pu-239` and the legacy `P-239`.
impl FromStr for Fissile {
    type Err = FissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "u233" => Ok(Fissile::U233),
            "u235" => Ok(Fissile::U235),
            "pu239" | "p239" => Ok(Fissile::Pu239),
            _ => Err(FissionError::UnknownFissile(s.to_string())),
        }
    }
}

impl TryFrom<String> for Fissile {
    type Error = FissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Fissile> for String {
    fn from(value: Fissile) -> Self {
        value.to_string()
    }
}

/// Target selection: a fixed fissile or a fresh random pick per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FissileChoice {
    Fixed(Fissile),
    Random,
}

impl FissileChoice {
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Fissile {
        match self {
            FissileChoice::Fixed(fissile) => fissile,
            FissileChoice::Random => Fissile::random(rng),
        }
    }
}

impl Default for FissileChoice {
    fn default() -> Self {
        FissileChoice::Fixed(Fissile::U235)
    }
}

impl fmt::Display for FissileChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FissileChoice::Fixed(fissile) => write!(f, "{fissile}"),
            FissileChoice::Random => f.write_str("random"),
        }
    }
}

impl FromStr for FissileChoice {
    type Err = FissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            Ok(FissileChoice::Random)
        } else {
            s.parse().map(FissileChoice::Fixed)
        }
    }
}

impl TryFrom<String> for FissileChoice {
    type Error = FissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FissileChoice> for String {
    fn from(value: FissileChoice) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fragment_is_unresolved() {
        let frag = Isotope::fragment(36, 92);
        assert!(!frag.is_resolved());
        assert_eq!(frag.to_string(), "(Z=36, A=92)");

        let kr = frag.with_symbol("Kr");
        assert!(kr.is_resolved());
        assert_eq!(kr.name(), "Kr-92");
        assert_eq!(kr.neutron_number(), 56);
    }

    #[test]
    fn test_fissile_isotopes() {
        let u235 = Fissile::U235.isotope();
        assert_eq!(u235, Isotope::new("U", 92, 235));
        assert_eq!(Fissile::U233.isotope().mass_number, 233);
        assert_eq!(Fissile::Pu239.isotope().atomic_number, 94);
        assert!(Fissile::ALL.iter().all(|f| f.isotope().is_resolved()));
    }

    #[test]
    fn test_fissile_parse_aliases() {
        assert_eq!("U-235".parse::<Fissile>().unwrap(), Fissile::U235);
        assert_eq!("u233".parse::<Fissile>().unwrap(), Fissile::U233);
        assert_eq!("Pu_239".parse::<Fissile>().unwrap(), Fissile::Pu239);
        assert_eq!("P-239".parse::<Fissile>().unwrap(), Fissile::Pu239);
        assert!(matches!(
            "Th-232".parse::<Fissile>(),
            Err(FissionError::UnknownFissile(_))
        ));
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(
            "random".parse::<FissileChoice>().unwrap(),
            FissileChoice::Random
        );
        assert_eq!(
            "Pu-239".parse::<FissileChoice>().unwrap(),
            FissileChoice::Fixed(Fissile::Pu239)
        );
        assert_eq!(FissileChoice::default().to_string(), "U-235");
    }

    #[test]
    fn test_random_fissile_covers_set() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let f = FissileChoice::Random.resolve(&mut rng);
            let idx = Fissile::ALL.iter().position(|&x| x == f).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "All fissiles should be drawn: {seen:?}");
    }

    #[test]
    fn test_isotope_json_keys() {
        let json = serde_json::to_string(&Isotope::new("Ba", 56, 141)).unwrap();
        assert_eq!(json, r#"{"symbol":"Ba","atomic_number":56,"mass_number":141}"#);
        let fissile: Fissile = serde_json::from_str("\"U-233\"").unwrap();
        assert_eq!(fissile, Fissile::U233);
    }
}
