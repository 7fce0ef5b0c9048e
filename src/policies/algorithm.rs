//! Closed set of supported policies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rules::{CLook, CScan, Fcfs, Look, Scan, Sstf};
use super::SeekPolicy;
use crate::error::UnknownAlgorithm;
use crate::models::{HeadPath, SchedulingContext, SchedulingRequest};

/// One of the six supported head scheduling policies.
///
/// Declaration order is the canonical order used to break ties when
/// ranking results, so `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "FCFS")]
    Fcfs,
    #[serde(rename = "SSTF")]
    Sstf,
    #[serde(rename = "SCAN")]
    Scan,
    #[serde(rename = "LOOK")]
    Look,
    #[serde(rename = "C-SCAN")]
    CScan,
    #[serde(rename = "C-LOOK")]
    CLook,
}

impl Algorithm {
    /// All policies in canonical order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::Look,
        Algorithm::CScan,
        Algorithm::CLook,
    ];

    /// Canonical name (e.g., "C-SCAN").
    pub fn name(self) -> &'static str {
        self.policy().name()
    }

    /// The policy implementation behind this variant.
    pub fn policy(self) -> &'static dyn SeekPolicy {
        match self {
            Algorithm::Fcfs => &Fcfs,
            Algorithm::Sstf => &Sstf,
            Algorithm::Scan => &Scan,
            Algorithm::Look => &Look,
            Algorithm::CScan => &CScan,
            Algorithm::CLook => &CLook,
        }
    }

    /// Plans the head trajectory with this policy.
    pub fn plan(self, context: &SchedulingContext, requests: &SchedulingRequest) -> HeadPath {
        self.policy().plan(context, requests)
    }

    /// Position in the canonical order (0 = FCFS).
    pub fn canonical_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses a canonical name. Surrounding whitespace and letter case are
    /// ignored; anything else must match exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownAlgorithm { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>().unwrap(), algo);
            assert_eq!(algo.to_string(), algo.name());
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(" c-look ".parse::<Algorithm>().unwrap(), Algorithm::CLook);
        assert_eq!("sstf".parse::<Algorithm>().unwrap(), Algorithm::Sstf);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "ELEVATOR".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.name, "ELEVATOR");
        assert!("CSCAN".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["FCFS", "SSTF", "SCAN", "LOOK", "C-SCAN", "C-LOOK"]);
        assert!(Algorithm::Fcfs < Algorithm::CLook);
        assert_eq!(Algorithm::CScan.canonical_index(), 4);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Algorithm::CScan).unwrap();
        assert_eq!(json, "\"C-SCAN\"");
        let algo: Algorithm = serde_json::from_str("\"LOOK\"").unwrap();
        assert_eq!(algo, Algorithm::Look);
    }
}
