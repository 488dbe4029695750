//! Fixed-width text rendering of a scored vendor table.

use scorecard_core::ScoredVendor;

/// Column headers, in the order rows are printed and persisted.
const COLUMNS: [&str; COLUMN_COUNT] = [
    "vendor",
    "cost_per_unit",
    "lead_time_days",
    "on_time_pct",
    "fill_rate_pct",
    "defect_rate_pct",
    "return_rate_pct",
    "payment_terms_days",
    "MOQ",
    "geo_risk",
    "fx_volatility_pct",
    "cost_score",
    "lead_time_score",
    "reliability_score",
    "quality_score",
    "geo_score",
    "fx_score",
    "moq_score",
    "risk_score",
    "total_score",
    "recommendation",
];

const COLUMN_COUNT: usize = 21;

/// Render the scorecard as a fixed-width text table.
///
/// Rows appear in slice order, so rank the scorecard first when a
/// best-to-worst listing is wanted. Floating-point cells print with two
/// decimal places; text cells are left-aligned and numeric cells are
/// right-aligned. The rendered table ends with a trailing newline.
#[must_use]
pub fn render_table(vendors: &[ScoredVendor]) -> String {
    let rows: Vec<[String; COLUMN_COUNT]> = vendors.iter().map(row_cells).collect();
    let widths = column_widths(&rows);
    let mut out = String::new();
    push_line(&mut out, &COLUMNS.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn row_cells(vendor: &ScoredVendor) -> [String; COLUMN_COUNT] {
    let record = &vendor.record;
    [
        record.name.clone(),
        format!("{:.2}", record.cost_per_unit),
        record.lead_time_days.to_string(),
        format!("{:.2}", record.on_time_pct),
        format!("{:.2}", record.fill_rate_pct),
        format!("{:.2}", record.defect_rate_pct),
        format!("{:.2}", record.return_rate_pct),
        record.payment_terms_days.to_string(),
        record.moq.to_string(),
        record.geo_risk.to_string(),
        format!("{:.2}", record.fx_volatility_pct),
        format!("{:.2}", vendor.cost_score),
        format!("{:.2}", vendor.lead_time_score),
        format!("{:.2}", vendor.reliability_score),
        format!("{:.2}", vendor.quality_score),
        format!("{:.2}", vendor.geo_score),
        format!("{:.2}", vendor.fx_score),
        format!("{:.2}", vendor.moq_score),
        format!("{:.2}", vendor.risk_score),
        format!("{:.2}", vendor.total_score),
        vendor.recommendation.to_string(),
    ]
}

fn column_widths(rows: &[[String; COLUMN_COUNT]]) -> [usize; COLUMN_COUNT] {
    let mut widths = COLUMNS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }
    widths
}

fn push_line(out: &mut String, cells: &[String; COLUMN_COUNT], widths: &[usize; COLUMN_COUNT]) {
    let mut line = String::new();
    for ((cell, &width), name) in cells.iter().zip(widths.iter()).zip(COLUMNS) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        if left_aligned(name) {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(&format!("{cell:>width$}"));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn left_aligned(name: &str) -> bool {
    matches!(name, "vendor" | "geo_risk" | "recommendation")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use scorecard_core::{ScoringConfig, rank_vendors, sample_vendors, score_vendors};

    use super::*;

    fn ranked_sample() -> Vec<ScoredVendor> {
        let mut scored = score_vendors(&sample_vendors(), &ScoringConfig::default())
            .expect("sample dataset must score");
        rank_vendors(&mut scored);
        scored
    }

    #[rstest]
    fn renders_a_header_and_one_line_per_vendor() {
        let table = render_table(&ranked_sample());

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 9);
        let header = lines.first().expect("header line");
        assert_eq!(header.split_whitespace().count(), COLUMN_COUNT);
        assert!(header.contains("MOQ"));
        assert!(header.contains("total_score"));
        assert!(header.contains("recommendation"));
    }

    #[rstest]
    fn lists_vendors_in_slice_order() {
        let table = render_table(&ranked_sample());

        let lines: Vec<&str> = table.lines().collect();
        let first = lines.get(1).expect("first data line");
        let last = lines.last().expect("last data line");
        assert!(first.starts_with("Vendor A"));
        assert!(last.starts_with("Vendor H"));
    }

    #[rstest]
    fn prints_floats_with_two_decimals() {
        let table = render_table(&ranked_sample());

        assert!(table.contains("5.25"));
        assert!(table.contains("81.93"));
        assert!(table.contains("100.00"));
        assert!(table.contains("Maintain"));
    }

    #[rstest]
    fn renders_only_the_header_for_an_empty_scorecard() {
        let table = render_table(&[]);

        assert_eq!(table.lines().count(), 1);
        assert!(table.starts_with("vendor"));
    }
}
