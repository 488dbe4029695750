//! Embedded sample vendor table.
//!
//! The scorecard ships with a fixed eight-vendor demonstration table rather
//! than an ingestion layer. Swap the data here, or build records directly,
//! to score a different book of suppliers.

#![forbid(unsafe_code)]

use crate::vendor::{GeoRisk, VendorRecord};

/// The embedded eight-vendor demonstration table.
///
/// Every record passes [`VendorRecord::validate`].
#[must_use]
pub fn sample_vendors() -> Vec<VendorRecord> {
    vec![
        VendorRecord {
            name: "Vendor A".to_owned(),
            cost_per_unit: 5.25,
            lead_time_days: 7,
            on_time_pct: 98.0,
            fill_rate_pct: 96.0,
            defect_rate_pct: 0.5,
            return_rate_pct: 0.8,
            payment_terms_days: 30,
            moq: 1000,
            geo_risk: GeoRisk::Low,
            fx_volatility_pct: 1.0,
        },
        VendorRecord {
            name: "Vendor B".to_owned(),
            cost_per_unit: 4.60,
            lead_time_days: 18,
            on_time_pct: 82.0,
            fill_rate_pct: 85.0,
            defect_rate_pct: 3.5,
            return_rate_pct: 2.0,
            payment_terms_days: 14,
            moq: 5000,
            geo_risk: GeoRisk::High,
            fx_volatility_pct: 6.0,
        },
        VendorRecord {
            name: "Vendor C".to_owned(),
            cost_per_unit: 6.00,
            lead_time_days: 5,
            on_time_pct: 99.0,
            fill_rate_pct: 99.0,
            defect_rate_pct: 0.2,
            return_rate_pct: 0.3,
            payment_terms_days: 45,
            moq: 200,
            geo_risk: GeoRisk::Low,
            fx_volatility_pct: 0.5,
        },
        VendorRecord {
            name: "Vendor D".to_owned(),
            cost_per_unit: 4.20,
            lead_time_days: 25,
            on_time_pct: 75.0,
            fill_rate_pct: 70.0,
            defect_rate_pct: 5.0,
            return_rate_pct: 4.0,
            payment_terms_days: 60,
            moq: 8000,
            geo_risk: GeoRisk::High,
            fx_volatility_pct: 8.0,
        },
        VendorRecord {
            name: "Vendor E".to_owned(),
            cost_per_unit: 5.00,
            lead_time_days: 12,
            on_time_pct: 90.0,
            fill_rate_pct: 92.0,
            defect_rate_pct: 1.2,
            return_rate_pct: 1.0,
            payment_terms_days: 30,
            moq: 1500,
            geo_risk: GeoRisk::Medium,
            fx_volatility_pct: 2.5,
        },
        VendorRecord {
            name: "Vendor F".to_owned(),
            cost_per_unit: 4.80,
            lead_time_days: 10,
            on_time_pct: 88.0,
            fill_rate_pct: 87.0,
            defect_rate_pct: 2.0,
            return_rate_pct: 1.8,
            payment_terms_days: 30,
            moq: 1200,
            geo_risk: GeoRisk::Medium,
            fx_volatility_pct: 3.0,
        },
        VendorRecord {
            name: "Vendor G".to_owned(),
            cost_per_unit: 5.75,
            lead_time_days: 9,
            on_time_pct: 95.0,
            fill_rate_pct: 94.0,
            defect_rate_pct: 0.8,
            return_rate_pct: 0.9,
            payment_terms_days: 30,
            moq: 600,
            geo_risk: GeoRisk::Low,
            fx_volatility_pct: 1.2,
        },
        VendorRecord {
            name: "Vendor H".to_owned(),
            cost_per_unit: 4.00,
            lead_time_days: 30,
            on_time_pct: 70.0,
            fill_rate_pct: 65.0,
            defect_rate_pct: 6.5,
            return_rate_pct: 5.5,
            payment_terms_days: 7,
            moq: 10_000,
            geo_risk: GeoRisk::High,
            fx_volatility_pct: 10.0,
        },
    ]
}
