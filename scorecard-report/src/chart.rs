//! Hand-rendered SVG charts for the scored vendor table.
//!
//! Both charts are emitted as standalone SVG documents with no external
//! dependencies, so they open directly in a browser. The bar chart ranks
//! vendors by total score; the scatter chart plots unit cost against
//! reliability with bubble area tracking the total score.

use camino::Utf8Path;

use crate::artefact::write_text_artefact;
use crate::error::ReportError;
use scorecard_core::ScoredVendor;

/// Default file name for the total-score ranking bar chart.
pub const BAR_CHART_FILE_NAME: &str = "total_score_ranking.svg";

/// Default file name for the cost-versus-reliability scatter chart.
pub const SCATTER_CHART_FILE_NAME: &str = "cost_vs_reliability.svg";

/// Fill colour shared by both chart marks.
const MARK_COLOUR: &str = "#1f77b4";

/// Extra total-score units added before bubble areas are scaled.
const BUBBLE_BASE_OFFSET: f64 = 5.0;

/// Multiplier from offset total score to bubble area.
const BUBBLE_AREA_SCALE: f64 = 20.0;

/// Data-unit offset that lifts a bubble label above its point.
const LABEL_LIFT: f64 = 0.5;

/// Plot-area bounds of a chart canvas, in SVG user units.
#[derive(Debug, Clone, Copy)]
struct Frame {
    width: f64,
    height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

const BAR_FRAME: Frame = Frame {
    width: 1000.0,
    height: 500.0,
    left: 140.0,
    right: 960.0,
    top: 60.0,
    bottom: 440.0,
};

const SCATTER_FRAME: Frame = Frame {
    width: 800.0,
    height: 600.0,
    left: 80.0,
    right: 760.0,
    top: 60.0,
    bottom: 530.0,
};

/// Linear projection from a data domain onto a pixel range.
///
/// A degenerate domain projects every value onto the range midpoint so
/// single-vendor charts stay finite.
#[derive(Debug, Clone, Copy)]
struct LinearScale {
    domain_min: f64,
    domain_span: f64,
    range_min: f64,
    range_span: f64,
}

impl LinearScale {
    #[expect(
        clippy::float_arithmetic,
        reason = "scale construction subtracts interval endpoints"
    )]
    const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_min: domain.0,
            domain_span: domain.1 - domain.0,
            range_min: range.0,
            range_span: range.1 - range.0,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "projection interpolates between range endpoints"
    )]
    #[expect(
        clippy::float_cmp,
        reason = "a degenerate domain is exact equality of the endpoints"
    )]
    const fn project(&self, value: f64) -> f64 {
        if self.domain_span == 0.0 {
            return self.range_min + self.range_span / 2.0;
        }
        self.range_min + (value - self.domain_min) / self.domain_span * self.range_span
    }
}

/// Render the total-score ranking as a horizontal bar chart.
///
/// Bars run along a fixed 0 to 100 score axis and appear in slice order
/// from top to bottom, so rank the scorecard first to put the strongest
/// vendor on top.
///
/// # Errors
/// Returns [`ReportError::EmptyScorecard`] when `vendors` is empty.
#[expect(
    clippy::float_arithmetic,
    reason = "chart geometry interpolates pixel positions"
)]
pub fn render_bar_chart(vendors: &[ScoredVendor]) -> Result<String, ReportError> {
    if vendors.is_empty() {
        return Err(ReportError::EmptyScorecard);
    }
    let frame = BAR_FRAME;
    let scale = LinearScale::new((0.0, 100.0), (frame.left, frame.right));
    let band = (frame.bottom - frame.top) / as_f64(vendors.len());

    let mut svg = svg_open(frame, "Vendor Total Score Ranking");
    push_score_axis(&mut svg, frame, &scale);
    for (index, vendor) in vendors.iter().enumerate() {
        let bar_top = frame.top + as_f64(index) * band + band * 0.2;
        let bar_height = band * 0.6;
        let bar_width = scale.project(vendor.total_score) - frame.left;
        svg.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"{bar_top:.2}\" width=\"{bar_width:.2}\" \
             height=\"{bar_height:.2}\" fill=\"{MARK_COLOUR}\"/>\n",
            x = frame.left,
        ));
        let label_y = bar_top + bar_height / 2.0 + 4.0;
        svg.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{label_y:.2}\" text-anchor=\"end\" \
             font-size=\"12\" fill=\"#333333\">{name}</text>\n",
            x = frame.left - 8.0,
            name = xml_escape(&vendor.record.name),
        ));
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render unit cost against reliability as a bubble scatter chart.
///
/// Bubble area grows linearly with the vendor's total score above the
/// chart minimum, and each point carries the vendor name slightly above
/// it.
///
/// # Errors
/// Returns [`ReportError::EmptyScorecard`] when `vendors` is empty.
#[expect(
    clippy::float_arithmetic,
    reason = "chart geometry interpolates pixel positions"
)]
pub fn render_scatter_chart(vendors: &[ScoredVendor]) -> Result<String, ReportError> {
    if vendors.is_empty() {
        return Err(ReportError::EmptyScorecard);
    }
    let frame = SCATTER_FRAME;
    let cost_bounds = value_bounds(vendors.iter().map(|vendor| vendor.record.cost_per_unit));
    let reliability_bounds = value_bounds(vendors.iter().map(|vendor| vendor.reliability_score));
    let min_total = vendors
        .iter()
        .map(|vendor| vendor.total_score)
        .fold(f64::INFINITY, f64::min);
    let cost_domain = padded_domain(cost_bounds, 0.08);
    let reliability_domain = padded_domain(reliability_bounds, 0.10);
    let scale_x = LinearScale::new(cost_domain, (frame.left, frame.right));
    let scale_y = LinearScale::new(reliability_domain, (frame.bottom, frame.top));

    let mut svg = svg_open(frame, "Cost vs Reliability (bubble shows Total Score)");
    push_scatter_axes(&mut svg, frame, cost_domain, reliability_domain);
    for vendor in vendors {
        let cx = scale_x.project(vendor.record.cost_per_unit);
        let cy = scale_y.project(vendor.reliability_score);
        let area = (vendor.total_score - min_total + BUBBLE_BASE_OFFSET) * BUBBLE_AREA_SCALE;
        let radius = (area / std::f64::consts::PI).sqrt();
        svg.push_str(&format!(
            "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{radius:.2}\" \
             fill=\"{MARK_COLOUR}\" fill-opacity=\"0.6\" stroke=\"#ffffff\" \
             stroke-width=\"1\"/>\n"
        ));
        let label_y = scale_y.project(vendor.reliability_score + LABEL_LIFT);
        svg.push_str(&format!(
            "<text x=\"{cx:.2}\" y=\"{label_y:.2}\" font-size=\"11\" \
             fill=\"#333333\">{name}</text>\n",
            name = xml_escape(&vendor.record.name),
        ));
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Write a rendered chart to `path`, replacing any existing file.
///
/// # Errors
/// Returns the IO variants of [`ReportError`] when the file cannot be
/// written.
pub fn write_chart(path: &Utf8Path, svg: &str) -> Result<(), ReportError> {
    write_text_artefact(path, svg)?;
    log::info!("Wrote chart to {path}");
    Ok(())
}

fn svg_open(frame: Frame, title: &str) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" \
         height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\" \
         font-family=\"sans-serif\">\n",
        width = frame.width,
        height = frame.height,
    );
    svg.push_str(&format!(
        "<rect width=\"{width:.0}\" height=\"{height:.0}\" fill=\"#ffffff\"/>\n",
        width = frame.width,
        height = frame.height,
    ));
    #[expect(
        clippy::float_arithmetic,
        reason = "title is centred over the canvas"
    )]
    let centre = frame.width / 2.0;
    svg.push_str(&format!(
        "<text x=\"{centre:.2}\" y=\"32\" text-anchor=\"middle\" \
         font-size=\"18\">{title}</text>\n",
        title = xml_escape(title),
    ));
    svg
}

/// Gridlines, ticks, and the axis label for the fixed 0 to 100 score axis.
#[expect(
    clippy::float_arithmetic,
    reason = "axis layout interpolates pixel positions"
)]
fn push_score_axis(svg: &mut String, frame: Frame, scale: &LinearScale) {
    for score in [0.0, 20.0, 40.0, 60.0, 80.0, 100.0] {
        let x = scale.project(score);
        svg.push_str(&format!(
            "<line x1=\"{x:.2}\" y1=\"{top:.2}\" x2=\"{x:.2}\" y2=\"{bottom:.2}\" \
             stroke=\"#dddddd\" stroke-width=\"1\"/>\n",
            top = frame.top,
            bottom = frame.bottom,
        ));
        svg.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-size=\"12\" \
             fill=\"#333333\">{score:.0}</text>\n",
            y = frame.bottom + 22.0,
        ));
    }
    svg.push_str(&format!(
        "<line x1=\"{left:.2}\" y1=\"{bottom:.2}\" x2=\"{right:.2}\" y2=\"{bottom:.2}\" \
         stroke=\"#333333\" stroke-width=\"1\"/>\n",
        left = frame.left,
        right = frame.right,
        bottom = frame.bottom,
    ));
    svg.push_str(&format!(
        "<text x=\"{centre:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" \
         font-size=\"13\">Total Score</text>\n",
        centre = (frame.left + frame.right) / 2.0,
        y = frame.bottom + 48.0,
    ));
}

/// Ticks, axis lines, and axis labels for the scatter chart.
#[expect(
    clippy::float_arithmetic,
    reason = "axis layout interpolates pixel positions"
)]
fn push_scatter_axes(
    svg: &mut String,
    frame: Frame,
    cost_domain: (f64, f64),
    reliability_domain: (f64, f64),
) {
    const TICK_STEPS: usize = 4;
    let scale_x = LinearScale::new(cost_domain, (frame.left, frame.right));
    let scale_y = LinearScale::new(reliability_domain, (frame.bottom, frame.top));
    for step in 0..=TICK_STEPS {
        let fraction = as_f64(step) / as_f64(TICK_STEPS);
        let cost = cost_domain.0 + fraction * (cost_domain.1 - cost_domain.0);
        let x = scale_x.project(cost);
        svg.push_str(&format!(
            "<line x1=\"{x:.2}\" y1=\"{top:.2}\" x2=\"{x:.2}\" y2=\"{bottom:.2}\" \
             stroke=\"#dddddd\" stroke-width=\"1\"/>\n",
            top = frame.top,
            bottom = frame.bottom,
        ));
        svg.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-size=\"12\" \
             fill=\"#333333\">{cost:.1}</text>\n",
            y = frame.bottom + 22.0,
        ));
        let reliability =
            reliability_domain.0 + fraction * (reliability_domain.1 - reliability_domain.0);
        let tick_y = scale_y.project(reliability);
        svg.push_str(&format!(
            "<line x1=\"{left:.2}\" y1=\"{tick_y:.2}\" x2=\"{right:.2}\" y2=\"{tick_y:.2}\" \
             stroke=\"#dddddd\" stroke-width=\"1\"/>\n",
            left = frame.left,
            right = frame.right,
        ));
        svg.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"end\" font-size=\"12\" \
             fill=\"#333333\">{reliability:.1}</text>\n",
            x = frame.left - 8.0,
            y = tick_y + 4.0,
        ));
    }
    svg.push_str(&format!(
        "<line x1=\"{left:.2}\" y1=\"{bottom:.2}\" x2=\"{right:.2}\" y2=\"{bottom:.2}\" \
         stroke=\"#333333\" stroke-width=\"1\"/>\n",
        left = frame.left,
        right = frame.right,
        bottom = frame.bottom,
    ));
    svg.push_str(&format!(
        "<line x1=\"{left:.2}\" y1=\"{top:.2}\" x2=\"{left:.2}\" y2=\"{bottom:.2}\" \
         stroke=\"#333333\" stroke-width=\"1\"/>\n",
        left = frame.left,
        top = frame.top,
        bottom = frame.bottom,
    ));
    svg.push_str(&format!(
        "<text x=\"{centre:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" \
         font-size=\"13\">Cost per Unit</text>\n",
        centre = (frame.left + frame.right) / 2.0,
        y = frame.bottom + 52.0,
    ));
    svg.push_str(&format!(
        "<text x=\"24\" y=\"{middle:.2}\" text-anchor=\"middle\" font-size=\"13\" \
         transform=\"rotate(-90 24 {middle:.2})\">Reliability Score</text>\n",
        middle = (frame.top + frame.bottom) / 2.0,
    ));
}

fn value_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}

/// Widen a closed interval by `fraction` of its span on each side.
///
/// A zero-span interval widens by one unit on each side instead.
#[expect(
    clippy::float_arithmetic,
    reason = "padding widens the interval by a fraction of its span"
)]
#[expect(
    clippy::float_cmp,
    reason = "a zero span is exact equality of the bounds"
)]
const fn padded_domain(bounds: (f64, f64), fraction: f64) -> (f64, f64) {
    let span = bounds.1 - bounds.0;
    let pad = if span == 0.0 { 1.0 } else { span * fraction };
    (bounds.0 - pad, bounds.1 + pad)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "vendor and tick counts stay far below 2^52"
)]
#[expect(clippy::as_conversions, reason = "usize to f64 has no fallible conversion")]
const fn as_f64(value: usize) -> f64 {
    value as f64
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
