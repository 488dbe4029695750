//! Core scoring domain for the vendor scorecard.
//!
//! The crate turns a table of raw vendor attributes into ranked, classified
//! scores:
//! - **Records and validation**: [`VendorRecord`] carries the commercial
//!   attributes for one supplier; validation rejects malformed rows before
//!   any arithmetic runs.
//! - **Normalisation**: relative metrics are min-max scaled onto 0–100
//!   against the whole table via [`ColumnStats`].
//! - **Weighting and classification**: a validated [`ScoringConfig`] blends
//!   the component scores into a total, and the rounded total maps onto a
//!   [`Recommendation`].
//!
//! Every score is rounded to two decimals as soon as it is derived, so
//! downstream stages and printed output agree exactly.
//!
//! # Examples
//!
//! ```
//! use scorecard_core::{ScoringConfig, rank_vendors, sample_vendors, score_vendors};
//!
//! let config = ScoringConfig::default();
//! let mut scored = score_vendors(&sample_vendors(), &config)?;
//! rank_vendors(&mut scored);
//! let best = scored.first().expect("eight vendors");
//! assert_eq!(best.record.name, "Vendor A");
//! assert_eq!(best.recommendation.as_str(), "Maintain");
//! # Ok::<(), scorecard_core::ScoreError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod dataset;
mod recommendation;
mod score;
mod stats;
mod vendor;

pub use config::{
    ConfigError, RecommendationThresholds, ReliabilityWeights, RiskWeights, ScoringConfig,
    TotalWeights,
};
pub use dataset::sample_vendors;
pub use recommendation::{Recommendation, UnknownRecommendation, classify};
pub use score::{ScoreError, ScoredVendor, rank_vendors, round2, score_vendors};
pub use stats::{ColumnStats, normalise_direct, normalise_inverse};
pub use vendor::{GeoRisk, UnknownGeoRisk, VendorRecord, VendorRecordError};
