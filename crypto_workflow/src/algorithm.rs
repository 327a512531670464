// crypto_demo/crypto_workflow/src/algorithm.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Asymmetric algorithms offered by the remote service.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "RSA")]
    Rsa,
    #[serde(rename = "ECC")]
    Ecc,
    #[serde(rename = "ElGamal")]
    ElGamal,
}

impl Algorithm {
    /// Menu order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Rsa, Algorithm::Ecc, Algorithm::ElGamal];

    /// Identifier sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Rsa => "RSA",
            Algorithm::Ecc => "ECC",
            Algorithm::ElGamal => "ElGamal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier outside {RSA, ECC, ElGamal}.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}', expected one of RSA, ECC, ElGamal")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    // The service upper-cases the identifier before dispatching, so casing is not significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// The algorithm currently chosen in a view. Read at each trigger, never locked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlgorithmSelector {
    current: Algorithm,
}

impl AlgorithmSelector {
    pub fn new(initial: Algorithm) -> Self {
        AlgorithmSelector { current: initial }
    }

    pub fn select(&mut self, algorithm: Algorithm) {
        self.current = algorithm;
    }

    pub fn current(&self) -> Algorithm {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_defaults_to_rsa() {
        assert_eq!(AlgorithmSelector::default().current(), Algorithm::Rsa);
    }

    #[test]
    fn test_selector_select_replaces_current() {
        let mut selector = AlgorithmSelector::default();
        selector.select(Algorithm::ElGamal);
        assert_eq!(selector.current(), Algorithm::ElGamal);
        selector.select(Algorithm::Ecc);
        assert_eq!(selector.current(), Algorithm::Ecc);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("rsa".parse::<Algorithm>(), Ok(Algorithm::Rsa));
        assert_eq!("ELGAMAL".parse::<Algorithm>(), Ok(Algorithm::ElGamal));
        assert_eq!(" ecc ".parse::<Algorithm>(), Ok(Algorithm::Ecc));
    }

    #[test]
    fn test_parse_rejects_unknown_identifier() {
        let err = "DSA".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, ParseAlgorithmError("DSA".to_string()));
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_wire_identifiers() {
        assert_eq!(serde_json::to_string(&Algorithm::Rsa).unwrap(), "\"RSA\"");
        assert_eq!(serde_json::to_string(&Algorithm::Ecc).unwrap(), "\"ECC\"");
        assert_eq!(serde_json::to_string(&Algorithm::ElGamal).unwrap(), "\"ElGamal\"");
        assert_eq!(Algorithm::ElGamal.to_string(), "ElGamal");
    }
}
