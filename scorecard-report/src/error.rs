//! Error types for scorecard reporting.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors produced while rendering or persisting scorecard artefacts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The caller supplied a scorecard with no vendors.
    #[error("cannot report an empty scorecard")]
    EmptyScorecard,
    /// A scored vendor could not be serialised as a CSV row.
    #[error("failed to serialise the scorecard row for vendor {vendor:?}")]
    SerialiseRow {
        /// Name of the vendor whose row failed to serialise.
        vendor: String,
        /// Underlying CSV serialisation failure.
        #[source]
        source: csv::Error,
    },
    /// The in-memory CSV buffer could not be assembled into text.
    #[error("failed to assemble the CSV scorecard: {message}")]
    AssembleCsv {
        /// Description of the buffer failure.
        message: String,
    },
    /// The parent directory for an artefact could not be created.
    #[error("failed to create parent directory {path}")]
    CreateParent {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An artefact file could not be written.
    #[error("failed to write artefact {path}")]
    WriteArtefact {
        /// Path of the artefact that failed to write.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A persisted scorecard could not be opened for reading.
    #[error("failed to open scorecard {path}")]
    OpenScorecard {
        /// Path of the scorecard that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A persisted scorecard held rows that could not be parsed.
    #[error("failed to parse scorecard {path}")]
    ParseScorecard {
        /// Path of the scorecard that failed to parse.
        path: Utf8PathBuf,
        /// Underlying CSV parse failure.
        #[source]
        source: csv::Error,
    },
}
