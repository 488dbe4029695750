//! Recommendation levels derived from a vendor's rounded total score.
//!
//! # Examples
//! ```
//! use scorecard_core::{RecommendationThresholds, Recommendation, classify};
//!
//! let thresholds = RecommendationThresholds::default();
//! assert_eq!(classify(85.0, &thresholds), Recommendation::Expand);
//! assert_eq!(classify(84.99, &thresholds), Recommendation::Maintain);
//! ```

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RecommendationThresholds;

/// Sourcing action suggested for a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    /// Grow the share of business placed with the vendor.
    Expand,
    /// Keep the relationship as it stands.
    Maintain,
    /// Keep the vendor but watch the weak components.
    Monitor,
    /// Source a replacement.
    Replace,
}

impl Recommendation {
    /// Return the level as its canonical `&str` form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expand => "Expand",
            Self::Maintain => "Maintain",
            Self::Monitor => "Monitor",
            Self::Replace => "Replace",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Recommendation {
    type Err = UnknownRecommendation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Expand" => Ok(Self::Expand),
            "Maintain" => Ok(Self::Maintain),
            "Monitor" => Ok(Self::Monitor),
            "Replace" => Ok(Self::Replace),
            other => Err(UnknownRecommendation {
                value: other.to_owned(),
            }),
        }
    }
}

/// Error raised when text does not name a known recommendation level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown recommendation {value:?} (expected Expand, Maintain, Monitor, or Replace)")]
pub struct UnknownRecommendation {
    /// The unrecognised input text.
    pub value: String,
}

/// Map a rounded total score onto a [`Recommendation`].
///
/// Cut-offs are inclusive on their lower bound: a total exactly at
/// `thresholds.expand` earns `Expand`. The comparison uses the already
/// rounded total, so 84.999 never sneaks into `Expand` territory. A NaN
/// total satisfies no cut-off and falls through to `Replace`; validated
/// scoring input never produces one.
#[must_use]
pub const fn classify(total_score: f64, thresholds: &RecommendationThresholds) -> Recommendation {
    if total_score >= thresholds.expand {
        Recommendation::Expand
    } else if total_score >= thresholds.maintain {
        Recommendation::Maintain
    } else if total_score >= thresholds.monitor {
        Recommendation::Monitor
    } else {
        Recommendation::Replace
    }
}
