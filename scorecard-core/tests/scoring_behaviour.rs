//! Behavioural coverage for scoring and ranking vendor tables.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use scorecard_core::{
    GeoRisk, Recommendation, ScoreError, ScoredVendor, ScoringConfig, VendorRecord, rank_vendors,
    sample_vendors, score_vendors,
};

/// Vendor table under test, filled by the given steps.
#[fixture]
pub fn table() -> RefCell<Vec<VendorRecord>> {
    RefCell::new(Vec::new())
}

/// Captures the scoring outcome for assertions.
#[fixture]
pub fn outcome() -> RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>> {
    RefCell::new(None)
}

fn flat_cost_vendor(name: &str, lead_time_days: u32, moq: u32) -> VendorRecord {
    VendorRecord {
        name: name.to_owned(),
        cost_per_unit: 5.0,
        lead_time_days,
        on_time_pct: 90.0,
        fill_rate_pct: 90.0,
        defect_rate_pct: 1.0,
        return_rate_pct: 1.0,
        payment_terms_days: 30,
        moq,
        geo_risk: GeoRisk::Medium,
        fx_volatility_pct: 2.0,
    }
}

#[given("the embedded vendor table")]
fn embedded_table(table: &RefCell<Vec<VendorRecord>>) {
    *table.borrow_mut() = sample_vendors();
}

#[given("a vendor table where every unit cost is identical")]
fn flat_cost_table(table: &RefCell<Vec<VendorRecord>>) {
    *table.borrow_mut() = vec![
        flat_cost_vendor("Vendor X", 10, 1000),
        flat_cost_vendor("Vendor Y", 20, 2000),
        flat_cost_vendor("Vendor Z", 30, 3000),
    ];
}

#[given("a vendor table containing an impossible on-time percentage")]
fn malformed_table(table: &RefCell<Vec<VendorRecord>>) {
    let mut records = sample_vendors();
    if let Some(first) = records.first_mut() {
        first.on_time_pct = 150.0;
    }
    *table.borrow_mut() = records;
}

#[when("the table is scored and ranked with default weights")]
fn score_with_defaults(
    table: &RefCell<Vec<VendorRecord>>,
    outcome: &RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>,
) {
    let result = score_vendors(&table.borrow(), &ScoringConfig::default()).map(|mut scored| {
        rank_vendors(&mut scored);
        scored
    });
    *outcome.borrow_mut() = Some(result);
}

#[when("the table is scored with weights that do not sum to one")]
fn score_with_unbalanced_weights(
    table: &RefCell<Vec<VendorRecord>>,
    outcome: &RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>,
) {
    let mut config = ScoringConfig::default();
    config.total.cost = 0.9;
    let result = score_vendors(&table.borrow(), &config);
    *outcome.borrow_mut() = Some(result);
}

#[then("the ranking runs from Vendor A down to Vendor H")]
fn ranking_matches_expectation(
    outcome: &RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>,
) {
    let binding = outcome.borrow();
    let result = binding
        .as_ref()
        .unwrap_or_else(|| panic!("scoring outcome must be recorded"));
    match result {
        Ok(scored) => {
            let names: Vec<&str> = scored.iter().map(|v| v.record.name.as_str()).collect();
            assert_eq!(
                names,
                [
                    "Vendor A", "Vendor F", "Vendor E", "Vendor C", "Vendor G", "Vendor B",
                    "Vendor D", "Vendor H",
                ]
            );
            let best = scored.first().unwrap_or_else(|| panic!("eight vendors"));
            assert_eq!(best.total_score, 81.93);
            assert_eq!(best.recommendation, Recommendation::Maintain);
            let worst = scored.last().unwrap_or_else(|| panic!("eight vendors"));
            assert_eq!(worst.total_score, 64.23);
            assert_eq!(worst.recommendation, Recommendation::Monitor);
            let c_rank = names
                .iter()
                .position(|name| *name == "Vendor C")
                .unwrap_or_else(|| panic!("Vendor C present"));
            assert!(c_rank < 4, "Vendor C should land in the top half");
        }
        Err(err) => panic!("scoring should succeed, got {err}"),
    }
}

#[then("every vendor earns a cost score of 100")]
#[expect(clippy::float_cmp, reason = "degenerate columns score an exact 100")]
fn cost_scores_are_flat(outcome: &RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>) {
    let binding = outcome.borrow();
    let result = binding
        .as_ref()
        .unwrap_or_else(|| panic!("scoring outcome must be recorded"));
    match result {
        Ok(scored) => {
            assert!(scored.iter().all(|v| v.cost_score == 100.0));
        }
        Err(err) => panic!("scoring should succeed, got {err}"),
    }
}

#[then("scoring fails naming the offending vendor")]
fn scoring_failed_with_vendor_name(
    outcome: &RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>,
) {
    let binding = outcome.borrow();
    let result = binding
        .as_ref()
        .unwrap_or_else(|| panic!("scoring outcome must be recorded"));
    match result {
        Ok(_) => panic!("expected scoring to fail"),
        Err(err) => {
            let message = err.to_string();
            assert!(message.contains("Vendor A"), "got {message}");
            assert!(message.contains("on_time_pct"), "got {message}");
        }
    }
}

#[then("scoring fails because the configuration is invalid")]
fn scoring_failed_on_configuration(
    outcome: &RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>,
) {
    let binding = outcome.borrow();
    let result = binding
        .as_ref()
        .unwrap_or_else(|| panic!("scoring outcome must be recorded"));
    match result {
        Ok(_) => panic!("expected scoring to fail"),
        Err(err) => assert!(matches!(err, ScoreError::Config(_)), "got {err}"),
    }
}

#[scenario(path = "tests/features/vendor_scoring.feature", index = 0)]
fn embedded_table_ranks_as_published(
    table: RefCell<Vec<VendorRecord>>,
    outcome: RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>,
) {
    let _ = (table, outcome);
}

#[scenario(path = "tests/features/vendor_scoring.feature", index = 1)]
fn flat_column_scores_everyone_at_hundred(
    table: RefCell<Vec<VendorRecord>>,
    outcome: RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>,
) {
    let _ = (table, outcome);
}

#[scenario(path = "tests/features/vendor_scoring.feature", index = 2)]
fn malformed_record_aborts_scoring(
    table: RefCell<Vec<VendorRecord>>,
    outcome: RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>,
) {
    let _ = (table, outcome);
}

#[scenario(path = "tests/features/vendor_scoring.feature", index = 3)]
fn unbalanced_configuration_aborts_scoring(
    table: RefCell<Vec<VendorRecord>>,
    outcome: RefCell<Option<Result<Vec<ScoredVendor>, ScoreError>>>,
) {
    let _ = (table, outcome);
}
