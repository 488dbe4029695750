//! Persisting the scorecard as a CSV file and reading it back.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::artefact::{read_text_artefact, write_text_artefact};
use crate::error::ReportError;
use scorecard_core::{GeoRisk, Recommendation, ScoredVendor, VendorRecord};

/// Default file name for the persisted scorecard.
pub const SCORECARD_FILE_NAME: &str = "vendor_scorecard.csv";

/// One scorecard row, flattened to the 21 persisted columns.
///
/// The `csv` crate cannot serialise nested structs, so the record fields
/// and derived scores are spelled out side by side. The minimum order
/// quantity column keeps its upper-case `MOQ` header.
#[derive(Debug, Serialize, Deserialize)]
struct ScorecardRow {
    vendor: String,
    cost_per_unit: f64,
    lead_time_days: u32,
    on_time_pct: f64,
    fill_rate_pct: f64,
    defect_rate_pct: f64,
    return_rate_pct: f64,
    payment_terms_days: u32,
    #[serde(rename = "MOQ")]
    moq: u32,
    geo_risk: GeoRisk,
    fx_volatility_pct: f64,
    cost_score: f64,
    lead_time_score: f64,
    reliability_score: f64,
    quality_score: f64,
    geo_score: f64,
    fx_score: f64,
    moq_score: f64,
    risk_score: f64,
    total_score: f64,
    recommendation: Recommendation,
}

impl From<&ScoredVendor> for ScorecardRow {
    fn from(vendor: &ScoredVendor) -> Self {
        let record = &vendor.record;
        Self {
            vendor: record.name.clone(),
            cost_per_unit: record.cost_per_unit,
            lead_time_days: record.lead_time_days,
            on_time_pct: record.on_time_pct,
            fill_rate_pct: record.fill_rate_pct,
            defect_rate_pct: record.defect_rate_pct,
            return_rate_pct: record.return_rate_pct,
            payment_terms_days: record.payment_terms_days,
            moq: record.moq,
            geo_risk: record.geo_risk,
            fx_volatility_pct: record.fx_volatility_pct,
            cost_score: vendor.cost_score,
            lead_time_score: vendor.lead_time_score,
            reliability_score: vendor.reliability_score,
            quality_score: vendor.quality_score,
            geo_score: vendor.geo_score,
            fx_score: vendor.fx_score,
            moq_score: vendor.moq_score,
            risk_score: vendor.risk_score,
            total_score: vendor.total_score,
            recommendation: vendor.recommendation,
        }
    }
}

impl From<ScorecardRow> for ScoredVendor {
    fn from(row: ScorecardRow) -> Self {
        Self {
            record: VendorRecord {
                name: row.vendor,
                cost_per_unit: row.cost_per_unit,
                lead_time_days: row.lead_time_days,
                on_time_pct: row.on_time_pct,
                fill_rate_pct: row.fill_rate_pct,
                defect_rate_pct: row.defect_rate_pct,
                return_rate_pct: row.return_rate_pct,
                payment_terms_days: row.payment_terms_days,
                moq: row.moq,
                geo_risk: row.geo_risk,
                fx_volatility_pct: row.fx_volatility_pct,
            },
            cost_score: row.cost_score,
            lead_time_score: row.lead_time_score,
            reliability_score: row.reliability_score,
            quality_score: row.quality_score,
            geo_score: row.geo_score,
            fx_score: row.fx_score,
            moq_score: row.moq_score,
            risk_score: row.risk_score,
            total_score: row.total_score,
            recommendation: row.recommendation,
        }
    }
}

/// Persist the scorecard to `path` as CSV, replacing any existing file.
///
/// Rows are written in slice order with a single header line. Numeric
/// fields use the shortest decimal text that parses back to the exact
/// same value, so a write/read round trip is lossless.
///
/// # Errors
/// Returns [`ReportError::EmptyScorecard`] when `vendors` is empty, and
/// serialisation or IO variants when the file cannot be produced.
pub fn write_scorecard(path: &Utf8Path, vendors: &[ScoredVendor]) -> Result<(), ReportError> {
    if vendors.is_empty() {
        return Err(ReportError::EmptyScorecard);
    }
    let mut writer = csv::Writer::from_writer(Vec::new());
    for vendor in vendors {
        writer
            .serialize(ScorecardRow::from(vendor))
            .map_err(|source| ReportError::SerialiseRow {
                vendor: vendor.record.name.clone(),
                source,
            })?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|source| ReportError::AssembleCsv {
            message: source.to_string(),
        })?;
    let contents = String::from_utf8(buffer).map_err(|source| ReportError::AssembleCsv {
        message: source.to_string(),
    })?;
    write_text_artefact(path, &contents)?;
    log::info!("Wrote scorecard with {count} vendors to {path}", count = vendors.len());
    Ok(())
}

/// Read a previously persisted scorecard back from `path`.
///
/// # Errors
/// Returns [`ReportError::OpenScorecard`] when the file cannot be read,
/// [`ReportError::ParseScorecard`] when a row does not match the
/// scorecard layout, and [`ReportError::EmptyScorecard`] when the file
/// holds a header but no rows.
pub fn read_scorecard(path: &Utf8Path) -> Result<Vec<ScoredVendor>, ReportError> {
    let contents = read_text_artefact(path).map_err(|source| ReportError::OpenScorecard {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let mut vendors = Vec::new();
    for result in reader.deserialize::<ScorecardRow>() {
        let row = result.map_err(|source| ReportError::ParseScorecard {
            path: path.to_path_buf(),
            source,
        })?;
        vendors.push(row.into());
    }
    if vendors.is_empty() {
        return Err(ReportError::EmptyScorecard);
    }
    Ok(vendors)
}
