//! Reporting surfaces for scored vendor tables.
//!
//! This crate turns a ranked scorecard from `scorecard-core` into the
//! three artefacts a sourcing review works from:
//!
//! - a fixed-width text table for the console, via [`render_table`];
//! - a persisted CSV scorecard, via [`write_scorecard`] and
//!   [`read_scorecard`];
//! - two SVG charts, via [`render_bar_chart`], [`render_scatter_chart`],
//!   and [`write_chart`].
//!
//! All file IO goes through capability-scoped UTF-8 paths, and writes
//! replace whatever was at the target path before.
//!
//! # Examples
//! ```no_run
//! use camino::Utf8Path;
//! use scorecard_core::{ScoringConfig, rank_vendors, sample_vendors, score_vendors};
//! use scorecard_report::{SCORECARD_FILE_NAME, render_table, write_scorecard};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scored = score_vendors(&sample_vendors(), &ScoringConfig::default())?;
//! rank_vendors(&mut scored);
//! print!("{}", render_table(&scored));
//! write_scorecard(Utf8Path::new(SCORECARD_FILE_NAME), &scored)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod artefact;
mod chart;
mod error;
mod persist;
mod table;

pub use chart::{
    BAR_CHART_FILE_NAME, SCATTER_CHART_FILE_NAME, render_bar_chart, render_scatter_chart,
    write_chart,
};
pub use error::ReportError;
pub use persist::{SCORECARD_FILE_NAME, read_scorecard, write_scorecard};
pub use table::render_table;
