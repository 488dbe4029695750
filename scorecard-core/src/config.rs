//! Scoring weights and recommendation thresholds.
//!
//! The original scorecard hard-coded its weighting inline; here the numbers
//! live in a [`ScoringConfig`] that callers construct, deserialise, and
//! validate once, then pass into the scoring pipeline. Each weight group must
//! sum to 1.0 and the recommendation cut-offs must descend strictly, so an
//! invalid configuration is rejected before any vendor is scored.
//!
//! # Examples
//! ```
//! use scorecard_core::ScoringConfig;
//!
//! let config = ScoringConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.total.cost, 0.25);
//! ```

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Absolute slack allowed when checking that a weight group sums to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights blending the reliability inputs into one component score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReliabilityWeights {
    /// Weight on the on-time delivery percentage.
    pub on_time: f64,
    /// Weight on the fill-rate percentage.
    pub fill_rate: f64,
    /// Weight on the normalised lead-time score.
    pub lead_time: f64,
}

impl Default for ReliabilityWeights {
    fn default() -> Self {
        Self {
            on_time: 0.50,
            fill_rate: 0.30,
            lead_time: 0.20,
        }
    }
}

impl ReliabilityWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_group(
            "reliability",
            &[
                ("on_time", self.on_time),
                ("fill_rate", self.fill_rate),
                ("lead_time", self.lead_time),
            ],
        )
    }
}

/// Weights blending the risk inputs into one component score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskWeights {
    /// Weight on the fixed geo risk band score.
    pub geo: f64,
    /// Weight on the normalised FX volatility score.
    pub fx: f64,
    /// Weight on the normalised minimum-order-quantity score.
    pub moq: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            geo: 0.40,
            fx: 0.30,
            moq: 0.30,
        }
    }
}

impl RiskWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_group(
            "risk",
            &[("geo", self.geo), ("fx", self.fx), ("moq", self.moq)],
        )
    }
}

/// Weights blending the component scores into the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TotalWeights {
    /// Weight on the cost score.
    pub cost: f64,
    /// Weight on the reliability score.
    pub reliability: f64,
    /// Weight on the quality score.
    pub quality: f64,
    /// Weight on the risk score.
    pub risk: f64,
}

impl Default for TotalWeights {
    fn default() -> Self {
        Self {
            cost: 0.25,
            reliability: 0.35,
            quality: 0.20,
            risk: 0.20,
        }
    }
}

impl TotalWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_group(
            "total",
            &[
                ("cost", self.cost),
                ("reliability", self.reliability),
                ("quality", self.quality),
                ("risk", self.risk),
            ],
        )
    }
}

/// Total-score cut-offs for the four recommendation levels.
///
/// A rounded total at or above `expand` earns `Expand`, at or above
/// `maintain` earns `Maintain`, at or above `monitor` earns `Monitor`, and
/// anything below that earns `Replace`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecommendationThresholds {
    /// Minimum rounded total for an `Expand` recommendation.
    pub expand: f64,
    /// Minimum rounded total for a `Maintain` recommendation.
    pub maintain: f64,
    /// Minimum rounded total for a `Monitor` recommendation.
    pub monitor: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            expand: 85.0,
            maintain: 70.0,
            monitor: 50.0,
        }
    }
}

impl RecommendationThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        let ordered = self.expand > self.maintain && self.maintain > self.monitor;
        let finite =
            self.expand.is_finite() && self.maintain.is_finite() && self.monitor.is_finite();
        if finite && ordered {
            Ok(())
        } else {
            Err(ConfigError::ThresholdOrder {
                expand: self.expand,
                maintain: self.maintain,
                monitor: self.monitor,
            })
        }
    }
}

/// Complete scoring configuration: three weight groups plus the
/// recommendation thresholds.
///
/// Deserialises from JSON with struct-level defaults, so a partial document
/// overrides only the groups it names. Unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weights for the reliability component.
    pub reliability: ReliabilityWeights,
    /// Weights for the risk component.
    pub risk: RiskWeights,
    /// Weights for the total score.
    pub total: TotalWeights,
    /// Recommendation cut-offs applied to the rounded total.
    pub thresholds: RecommendationThresholds,
}

impl ScoringConfig {
    /// Check every weight group and the threshold ordering.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered: a weight that is
    /// negative or not finite, a group that does not sum to 1.0 within
    /// `1e-9`, or thresholds that do not descend strictly.
    ///
    /// # Examples
    /// ```
    /// use scorecard_core::ScoringConfig;
    ///
    /// let mut config = ScoringConfig::default();
    /// config.total.cost = 0.5;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reliability.validate()?;
        self.risk.validate()?;
        self.total.validate()?;
        self.thresholds.validate()
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "validation sums the group weights and measures drift from 1.0"
)]
fn validate_group(
    group: &'static str,
    weights: &[(&'static str, f64)],
) -> Result<(), ConfigError> {
    for &(field, value) in weights {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidWeight {
                group,
                field,
                value,
            });
        }
    }
    let sum: f64 = weights.iter().map(|&(_, value)| value).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::WeightSum { group, sum });
    }
    Ok(())
}

/// Rejection raised by [`ScoringConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A weight is negative, NaN, or infinite.
    #[error("{group} weight {field} must be a finite non-negative number, got {value}")]
    InvalidWeight {
        /// Weight group containing the bad value.
        group: &'static str,
        /// Field within the group.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A weight group does not sum to 1.0.
    #[error("{group} weights must sum to 1.0, got {sum}")]
    WeightSum {
        /// Weight group whose sum is off.
        group: &'static str,
        /// The actual sum.
        sum: f64,
    },
    /// The recommendation cut-offs are not strictly descending finite values.
    #[error(
        "recommendation thresholds must be finite and strictly descending \
         (expand > maintain > monitor), got {expand}, {maintain}, {monitor}"
    )]
    ThresholdOrder {
        /// Configured expand cut-off.
        expand: f64,
        /// Configured maintain cut-off.
        maintain: f64,
        /// Configured monitor cut-off.
        monitor: f64,
    },
}
