//! Vendor records and the geopolitical risk banding attached to them.
//!
//! A [`VendorRecord`] holds the raw commercial attributes for one supplier.
//! Records are plain data; [`VendorRecord::validate`] enforces the numeric
//! contract before any scoring pass so a malformed row aborts the run with a
//! diagnostic naming the vendor and field.
//!
//! # Examples
//! ```
//! use scorecard_core::GeoRisk;
//!
//! assert_eq!(GeoRisk::Low.score(), 100.0);
//! assert_eq!("High".parse::<GeoRisk>(), Ok(GeoRisk::High));
//! ```

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geopolitical risk band assigned to a vendor's main sourcing region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoRisk {
    /// Stable sourcing region.
    Low,
    /// Some exposure to regional disruption.
    Medium,
    /// Concentrated exposure to regional disruption.
    High,
}

impl GeoRisk {
    /// Fixed score contribution for the band: 100, 70, or 40.
    ///
    /// # Examples
    /// ```
    /// use scorecard_core::GeoRisk;
    ///
    /// assert_eq!(GeoRisk::Medium.score(), 70.0);
    /// ```
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Low => 100.0,
            Self::Medium => 70.0,
            Self::High => 40.0,
        }
    }

    /// Return the band as its canonical `&str` form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for GeoRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GeoRisk {
    type Err = UnknownGeoRisk;

    /// Parse the canonical band names. Matching is exact; anything else is an
    /// error rather than a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(UnknownGeoRisk {
                value: other.to_owned(),
            }),
        }
    }
}

/// Error raised when text does not name a known geo risk band.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown geo risk category {value:?} (expected Low, Medium, or High)")]
pub struct UnknownGeoRisk {
    /// The unrecognised input text.
    pub value: String,
}

/// Raw commercial attributes for a single vendor.
///
/// Percentages are expressed on a 0–100 scale, matching how procurement data
/// is usually exported. Fields are public so a record can be written as a
/// plain literal; call [`VendorRecord::validate`] before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorRecord {
    /// Display name, unique within a table.
    pub name: String,
    /// Unit cost in the purchasing currency.
    pub cost_per_unit: f64,
    /// Quoted lead time in days.
    pub lead_time_days: u32,
    /// Orders delivered on time, percent.
    pub on_time_pct: f64,
    /// Order lines filled complete, percent.
    pub fill_rate_pct: f64,
    /// Defective units as a share of shipped units, percent.
    pub defect_rate_pct: f64,
    /// Returned units as a share of shipped units, percent.
    pub return_rate_pct: f64,
    /// Agreed payment terms in days. Carried through to output, never scored.
    pub payment_terms_days: u32,
    /// Minimum order quantity in units.
    pub moq: u32,
    /// Geopolitical risk band for the sourcing region.
    pub geo_risk: GeoRisk,
    /// Exchange-rate volatility of the invoicing currency, percent.
    pub fx_volatility_pct: f64,
}

impl VendorRecord {
    /// Check the record against the numeric contract.
    ///
    /// Requires a non-blank name, a positive finite unit cost, every
    /// percentage field (on-time, fill rate, defect, return, and FX
    /// volatility) within 0–100, and an MOQ of at least one unit.
    ///
    /// # Errors
    /// Returns a [`VendorRecordError`] naming the vendor and the first field
    /// that fails.
    ///
    /// # Examples
    /// ```
    /// use scorecard_core::sample_vendors;
    ///
    /// for record in sample_vendors() {
    ///     assert!(record.validate().is_ok());
    /// }
    /// ```
    pub fn validate(&self) -> Result<(), VendorRecordError> {
        if self.name.trim().is_empty() {
            return Err(VendorRecordError::BlankName);
        }
        self.require_positive("cost_per_unit", self.cost_per_unit)?;
        self.require_percentage("on_time_pct", self.on_time_pct)?;
        self.require_percentage("fill_rate_pct", self.fill_rate_pct)?;
        self.require_percentage("defect_rate_pct", self.defect_rate_pct)?;
        self.require_percentage("return_rate_pct", self.return_rate_pct)?;
        self.require_percentage("fx_volatility_pct", self.fx_volatility_pct)?;
        if self.moq == 0 {
            return Err(VendorRecordError::ZeroMoq {
                vendor: self.name.clone(),
            });
        }
        Ok(())
    }

    fn require_finite(&self, field: &'static str, value: f64) -> Result<(), VendorRecordError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(VendorRecordError::NonFinite {
                vendor: self.name.clone(),
                field,
                value,
            })
        }
    }

    fn require_positive(&self, field: &'static str, value: f64) -> Result<(), VendorRecordError> {
        self.require_finite(field, value)?;
        if value > 0.0 {
            Ok(())
        } else {
            Err(VendorRecordError::NotPositive {
                vendor: self.name.clone(),
                field,
                value,
            })
        }
    }

    fn require_percentage(&self, field: &'static str, value: f64) -> Result<(), VendorRecordError> {
        self.require_finite(field, value)?;
        if (0.0..=100.0).contains(&value) {
            Ok(())
        } else {
            Err(VendorRecordError::OutOfRange {
                vendor: self.name.clone(),
                field,
                value,
            })
        }
    }
}

/// Validation failure for a [`VendorRecord`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VendorRecordError {
    /// The vendor name is empty or whitespace.
    #[error("vendor name must not be blank")]
    BlankName,
    /// A numeric field holds NaN or an infinity.
    #[error("vendor {vendor:?}: {field} must be a finite number, got {value}")]
    NonFinite {
        /// Name of the offending vendor.
        vendor: String,
        /// Field that failed the check.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A field that must be strictly positive is zero or below.
    #[error("vendor {vendor:?}: {field} must be greater than zero, got {value}")]
    NotPositive {
        /// Name of the offending vendor.
        vendor: String,
        /// Field that failed the check.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A percentage field lies outside 0–100.
    #[error("vendor {vendor:?}: {field} must lie within 0 to 100, got {value}")]
    OutOfRange {
        /// Name of the offending vendor.
        vendor: String,
        /// Field that failed the check.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The minimum order quantity is zero.
    #[error("vendor {vendor:?}: MOQ must be at least one unit")]
    ZeroMoq {
        /// Name of the offending vendor.
        vendor: String,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::sample_vendors;

    fn record() -> VendorRecord {
        VendorRecord {
            name: "Vendor T".to_owned(),
            cost_per_unit: 5.0,
            lead_time_days: 10,
            on_time_pct: 95.0,
            fill_rate_pct: 93.0,
            defect_rate_pct: 1.0,
            return_rate_pct: 0.5,
            payment_terms_days: 30,
            moq: 500,
            geo_risk: GeoRisk::Medium,
            fx_volatility_pct: 2.0,
        }
    }

    #[rstest]
    fn accepts_a_well_formed_record() {
        assert_eq!(record().validate(), Ok(()));
    }

    #[rstest]
    fn accepts_the_sample_dataset() {
        for vendor in sample_vendors() {
            assert_eq!(vendor.validate(), Ok(()), "{} should validate", vendor.name);
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_names(#[case] name: &str) {
        let mut vendor = record();
        vendor.name = name.to_owned();
        assert_eq!(vendor.validate(), Err(VendorRecordError::BlankName));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.25)]
    fn rejects_non_positive_cost(#[case] cost: f64) {
        let mut vendor = record();
        vendor.cost_per_unit = cost;
        assert!(matches!(
            vendor.validate(),
            Err(VendorRecordError::NotPositive {
                field: "cost_per_unit",
                ..
            })
        ));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_non_finite_cost(#[case] cost: f64) {
        let mut vendor = record();
        vendor.cost_per_unit = cost;
        assert!(matches!(
            vendor.validate(),
            Err(VendorRecordError::NonFinite {
                field: "cost_per_unit",
                ..
            })
        ));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(100.5)]
    fn rejects_out_of_range_on_time(#[case] pct: f64) {
        let mut vendor = record();
        vendor.on_time_pct = pct;
        assert!(matches!(
            vendor.validate(),
            Err(VendorRecordError::OutOfRange {
                field: "on_time_pct",
                ..
            })
        ));
    }

    #[rstest]
    #[case(-2.0)]
    #[case(100.01)]
    #[case(250.0)]
    fn rejects_out_of_range_defect_rate(#[case] pct: f64) {
        let mut vendor = record();
        vendor.defect_rate_pct = pct;
        assert!(matches!(
            vendor.validate(),
            Err(VendorRecordError::OutOfRange {
                field: "defect_rate_pct",
                ..
            })
        ));
    }

    #[rstest]
    #[case(-0.5)]
    #[case(150.0)]
    fn rejects_out_of_range_return_rate(#[case] pct: f64) {
        let mut vendor = record();
        vendor.return_rate_pct = pct;
        assert!(matches!(
            vendor.validate(),
            Err(VendorRecordError::OutOfRange {
                field: "return_rate_pct",
                ..
            })
        ));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(120.0)]
    fn rejects_out_of_range_fx_volatility(#[case] pct: f64) {
        let mut vendor = record();
        vendor.fx_volatility_pct = pct;
        assert!(matches!(
            vendor.validate(),
            Err(VendorRecordError::OutOfRange {
                field: "fx_volatility_pct",
                ..
            })
        ));
    }

    #[rstest]
    fn accepts_rates_at_the_range_edges() {
        let mut vendor = record();
        vendor.on_time_pct = 0.0;
        vendor.defect_rate_pct = 100.0;
        vendor.return_rate_pct = 100.0;
        vendor.fx_volatility_pct = 100.0;
        assert_eq!(vendor.validate(), Ok(()));
    }

    #[rstest]
    fn rejects_zero_moq() {
        let mut vendor = record();
        vendor.moq = 0;
        let err = vendor.validate().expect_err("zero MOQ must fail");
        assert_eq!(
            err,
            VendorRecordError::ZeroMoq {
                vendor: "Vendor T".to_owned(),
            }
        );
    }

    #[rstest]
    fn error_message_names_vendor_and_field() {
        let mut vendor = record();
        vendor.fill_rate_pct = 130.0;
        let err = vendor.validate().expect_err("fill rate must fail");
        let message = err.to_string();
        assert!(message.contains("Vendor T"), "got {message}");
        assert!(message.contains("fill_rate_pct"), "got {message}");
    }

    #[rstest]
    #[case("Low", GeoRisk::Low)]
    #[case("Medium", GeoRisk::Medium)]
    #[case("High", GeoRisk::High)]
    fn parses_canonical_bands(#[case] text: &str, #[case] expected: GeoRisk) {
        assert_eq!(text.parse::<GeoRisk>(), Ok(expected));
    }

    #[rstest]
    #[case("low")]
    #[case("HIGH")]
    #[case("Critical")]
    #[case("")]
    fn rejects_unknown_band_text(#[case] text: &str) {
        let err = text.parse::<GeoRisk>().expect_err("unknown band must fail");
        assert_eq!(err.value, text);
        assert!(err.to_string().contains("unknown geo risk category"));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(GeoRisk::High.to_string(), GeoRisk::High.as_str());
    }
}
