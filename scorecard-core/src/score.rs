//! The scoring pipeline: normalise, weight, round, classify.
//!
//! [`score_vendors`] turns a validated vendor table and a
//! [`ScoringConfig`] into one [`ScoredVendor`] per record. The pass is
//! re-entrant and owns no state; callers decide where the table comes from
//! and what happens to the scores. Every intermediate score is rounded to
//! two decimals as soon as it is produced, and later stages consume the
//! rounded values, so results match what a reader reconciles by hand from
//! the printed table.
//!
//! # Examples
//! ```
//! use scorecard_core::{ScoringConfig, rank_vendors, sample_vendors, score_vendors};
//!
//! let mut scored = score_vendors(&sample_vendors(), &ScoringConfig::default())?;
//! rank_vendors(&mut scored);
//! assert_eq!(scored.first().map(|v| v.record.name.as_str()), Some("Vendor A"));
//! # Ok::<(), scorecard_core::ScoreError>(())
//! ```

#![forbid(unsafe_code)]

use thiserror::Error;

use crate::config::{ConfigError, ScoringConfig};
use crate::recommendation::{Recommendation, classify};
use crate::stats::{ColumnStats, normalise_inverse};
use crate::vendor::{VendorRecord, VendorRecordError};

/// Defects weigh one and a half times returns in the quality deduction.
const DEFECT_PENALTY: f64 = 1.5;

/// A vendor record together with its derived scores.
///
/// Score fields hold two-decimal values; `geo_score` is one of the fixed
/// band scores. All lie within 0–100.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVendor {
    /// The raw record the scores were derived from.
    pub record: VendorRecord,
    /// Inverse-normalised unit cost.
    pub cost_score: f64,
    /// Inverse-normalised lead time.
    pub lead_time_score: f64,
    /// Weighted blend of on-time, fill-rate, and the lead-time score.
    pub reliability_score: f64,
    /// 100 minus the weighted defect and return deduction, clamped to 0–100.
    pub quality_score: f64,
    /// Fixed score for the geo risk band.
    pub geo_score: f64,
    /// Inverse-normalised FX volatility.
    pub fx_score: f64,
    /// Inverse-normalised minimum order quantity.
    pub moq_score: f64,
    /// Weighted blend of the geo, FX, and MOQ scores.
    pub risk_score: f64,
    /// Weighted blend of the four component scores.
    pub total_score: f64,
    /// Level derived from the rounded total.
    pub recommendation: Recommendation,
}

/// Round to two decimal places, half away from zero.
///
/// Applied eagerly after every scoring step; downstream stages consume the
/// rounded value, never the raw one.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by one hundred and back"
)]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score every record in the table against the configuration.
///
/// Runs two passes: the first collects [`ColumnStats`] for each relative
/// metric, the second derives the component and total scores per vendor.
/// Output order matches input order; call [`rank_vendors`] to sort.
///
/// # Errors
/// Returns [`ScoreError::Config`] for an invalid configuration,
/// [`ScoreError::EmptyTable`] for an empty slice, and
/// [`ScoreError::Record`] for the first record failing validation. No
/// partial output is produced.
pub fn score_vendors(
    records: &[VendorRecord],
    config: &ScoringConfig,
) -> Result<Vec<ScoredVendor>, ScoreError> {
    config.validate()?;
    if records.is_empty() {
        return Err(ScoreError::EmptyTable);
    }
    for record in records {
        record.validate()?;
    }

    let stats = TableStats::collect(records)?;
    let scored: Vec<ScoredVendor> = records
        .iter()
        .map(|record| score_vendor(record, &stats, config))
        .collect();
    let count = scored.len();
    log::info!("Scored {count} vendors");
    Ok(scored)
}

/// Sort scored vendors by total score, highest first.
///
/// The sort is stable, so equal totals keep their input order, and
/// comparisons use [`f64::total_cmp`]. Sorting an already ranked slice is a
/// no-op.
pub fn rank_vendors(vendors: &mut [ScoredVendor]) {
    vendors.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
}

/// Column extremes for the four relative metrics.
struct TableStats {
    cost: ColumnStats,
    lead_time: ColumnStats,
    fx: ColumnStats,
    moq: ColumnStats,
}

impl TableStats {
    fn collect(records: &[VendorRecord]) -> Result<Self, ScoreError> {
        Ok(Self {
            cost: column_stats("cost_per_unit", records.iter().map(|r| r.cost_per_unit))?,
            lead_time: column_stats(
                "lead_time_days",
                records.iter().map(|r| f64::from(r.lead_time_days)),
            )?,
            fx: column_stats(
                "fx_volatility_pct",
                records.iter().map(|r| r.fx_volatility_pct),
            )?,
            moq: column_stats("MOQ", records.iter().map(|r| f64::from(r.moq)))?,
        })
    }
}

fn column_stats<I>(name: &'static str, values: I) -> Result<ColumnStats, ScoreError>
where
    I: IntoIterator<Item = f64>,
{
    let stats = ColumnStats::from_values(values).ok_or(ScoreError::EmptyTable)?;
    if stats.is_degenerate() {
        log::warn!("Column {name} has no spread; scoring every vendor at 100");
    }
    Ok(stats)
}

#[expect(
    clippy::float_arithmetic,
    reason = "component scores are weighted sums of the normalised inputs"
)]
fn score_vendor(record: &VendorRecord, stats: &TableStats, config: &ScoringConfig) -> ScoredVendor {
    let cost_score = round2(normalise_inverse(record.cost_per_unit, &stats.cost));
    let lead_time_score = round2(normalise_inverse(
        f64::from(record.lead_time_days),
        &stats.lead_time,
    ));

    let reliability = config.reliability;
    let reliability_score = round2(
        reliability.on_time * record.on_time_pct
            + reliability.fill_rate * record.fill_rate_pct
            + reliability.lead_time * lead_time_score,
    );

    let quality_score = round2(
        (100.0 - (DEFECT_PENALTY * record.defect_rate_pct + record.return_rate_pct))
            .clamp(0.0, 100.0),
    );

    let geo_score = record.geo_risk.score();
    let fx_score = round2(normalise_inverse(record.fx_volatility_pct, &stats.fx));
    let moq_score = round2(normalise_inverse(f64::from(record.moq), &stats.moq));

    let risk = config.risk;
    let risk_score = round2(risk.geo * geo_score + risk.fx * fx_score + risk.moq * moq_score);

    let total = config.total;
    let total_score = round2(
        total.cost * cost_score
            + total.reliability * reliability_score
            + total.quality * quality_score
            + total.risk * risk_score,
    );

    let recommendation = classify(total_score, &config.thresholds);

    ScoredVendor {
        record: record.clone(),
        cost_score,
        lead_time_score,
        reliability_score,
        quality_score,
        geo_score,
        fx_score,
        moq_score,
        risk_score,
        total_score,
        recommendation,
    }
}

/// Failure raised by [`score_vendors`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// The vendor table held no records.
    #[error("cannot score an empty vendor table")]
    EmptyTable,
    /// The scoring configuration failed validation.
    #[error("invalid scoring configuration: {0}")]
    Config(#[from] ConfigError),
    /// A vendor record failed validation.
    #[error(transparent)]
    Record(#[from] VendorRecordError),
}
