//! Facade crate for the vendor scorecard engine.
//!
//! This crate re-exports the scoring pipeline from `scorecard-core` and the
//! reporting surfaces from `scorecard-report`, so a single dependency covers
//! scoring, ranking, persistence, and chart rendering.

#![forbid(unsafe_code)]

pub use scorecard_core::{
    ColumnStats, ConfigError, GeoRisk, Recommendation, RecommendationThresholds,
    ReliabilityWeights, RiskWeights, ScoreError, ScoredVendor, ScoringConfig, TotalWeights,
    UnknownGeoRisk, UnknownRecommendation, VendorRecord, VendorRecordError, classify,
    normalise_direct, normalise_inverse, rank_vendors, round2, sample_vendors, score_vendors,
};

pub use scorecard_report::{
    BAR_CHART_FILE_NAME, ReportError, SCATTER_CHART_FILE_NAME, SCORECARD_FILE_NAME,
    read_scorecard, render_bar_chart, render_scatter_chart, render_table, write_chart,
    write_scorecard,
};
