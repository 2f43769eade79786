//! Maps a suitability score onto one of three fixed tiers.

use serde::Serialize;
use std::fmt;

/// Suitability tier. Thresholds are inclusive on the lower bound of each
/// tier: >= 80 highly, >= 50 moderately, everything below not suitable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suitability {
    #[serde(rename = "Highly Suitable")]
    HighlySuitable,
    #[serde(rename = "Moderately Suitable")]
    ModeratelySuitable,
    #[serde(rename = "Not Suitable")]
    NotSuitable,
}

impl Suitability {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Suitability::HighlySuitable
        } else if score >= 50.0 {
            Suitability::ModeratelySuitable
        } else {
            Suitability::NotSuitable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::HighlySuitable => "Highly Suitable",
            Suitability::ModeratelySuitable => "Moderately Suitable",
            Suitability::NotSuitable => "Not Suitable",
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_inclusive_on_lower_bound() {
        assert_eq!(Suitability::from_score(80.0), Suitability::HighlySuitable);
        assert_eq!(Suitability::from_score(50.0), Suitability::ModeratelySuitable);
    }

    #[test]
    fn test_just_below_thresholds() {
        assert_eq!(
            Suitability::from_score(79.99),
            Suitability::ModeratelySuitable
        );
        assert_eq!(Suitability::from_score(49.99), Suitability::NotSuitable);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Suitability::from_score(0.0), Suitability::NotSuitable);
        assert_eq!(Suitability::from_score(100.0), Suitability::HighlySuitable);
    }

    #[test]
    fn test_serializes_to_tier_strings() {
        let json = serde_json::to_string(&Suitability::HighlySuitable).unwrap();
        assert_eq!(json, r#""Highly Suitable""#);
        let json = serde_json::to_string(&Suitability::NotSuitable).unwrap();
        assert_eq!(json, r#""Not Suitable""#);
    }

    #[test]
    fn test_display_matches_serialization() {
        assert_eq!(
            Suitability::ModeratelySuitable.to_string(),
            "Moderately Suitable"
        );
    }
}
