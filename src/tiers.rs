use crate::models::ClassificationResult;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Risk tier derived deterministically from a classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// Good risk with probability below 0.10.
    Excellent,
    /// Good risk with probability in [0.10, 0.30).
    Good,
    /// Good risk with probability at or above 0.30.
    Fair,
    /// Bad risk, regardless of probability.
    Poor,
}

/// Map a classification result to its risk tier.
///
/// The bands are exhaustive and mutually exclusive, inclusive on the lower
/// edge: probability exactly 0.10 is Good, exactly 0.30 is Fair.
pub fn tier(result: &ClassificationResult) -> RiskTier {
    if result.bad_risk {
        return RiskTier::Poor;
    }
    if result.probability < 0.10 {
        RiskTier::Excellent
    } else if result.probability < 0.30 {
        RiskTier::Good
    } else {
        RiskTier::Fair
    }
}

impl RiskTier {
    /// Tier name as shown to callers.
    pub fn name(&self) -> &'static str {
        match self {
            RiskTier::Excellent => "Excellent",
            RiskTier::Good => "Good",
            RiskTier::Fair => "Fair",
            RiskTier::Poor => "Poor",
        }
    }

    /// Human-readable result label combining risk tier and eligibility.
    pub fn result_text(&self) -> &'static str {
        match self {
            RiskTier::Excellent => "EXCELLENT CREDIT RISK — Eligible for Premium Credit Cards",
            RiskTier::Good => "GOOD CREDIT RISK — Eligible for Standard Credit Cards",
            RiskTier::Fair => "FAIR CREDIT RISK — Eligible for Basic Credit Cards",
            RiskTier::Poor => "BAD CREDIT RISK — Not Eligible for Credit Card",
        }
    }

    /// CSS-style result class: "good" for eligible tiers, "bad" otherwise.
    pub fn result_class(&self) -> &'static str {
        match self {
            RiskTier::Poor => "bad",
            _ => "good",
        }
    }
}

impl FromStr for RiskTier {
    type Err = ();

    /// Case-insensitive tier name parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "excellent" => Ok(RiskTier::Excellent),
            "good" => Ok(RiskTier::Good),
            "fair" => Ok(RiskTier::Fair),
            "poor" => Ok(RiskTier::Poor),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(probability: f64, bad_risk: bool) -> ClassificationResult {
        ClassificationResult {
            probability,
            bad_risk,
        }
    }

    #[test]
    fn test_bad_risk_always_poor() {
        assert_eq!(tier(&result(0.05, true)), RiskTier::Poor);
        assert_eq!(tier(&result(0.95, true)), RiskTier::Poor);
    }

    #[test]
    fn test_band_boundaries_lower_edge_inclusive() {
        assert_eq!(tier(&result(0.10, false)), RiskTier::Good);
        assert_eq!(tier(&result(0.30, false)), RiskTier::Fair);
    }

    #[test]
    fn test_just_below_boundaries() {
        assert_eq!(tier(&result(0.0999, false)), RiskTier::Excellent);
        assert_eq!(tier(&result(0.2999, false)), RiskTier::Good);
    }

    #[test]
    fn test_band_extremes() {
        assert_eq!(tier(&result(0.0, false)), RiskTier::Excellent);
        assert_eq!(tier(&result(0.999, false)), RiskTier::Fair);
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("excellent".parse(), Ok(RiskTier::Excellent));
        assert_eq!("Poor".parse(), Ok(RiskTier::Poor));
        assert_eq!("GOOD".parse(), Ok(RiskTier::Good));
        assert!("platinum".parse::<RiskTier>().is_err());
    }
}
