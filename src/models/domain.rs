use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::geo::GeoPoint;

/// A registered donor
///
/// `location` is absent when geocoding failed at registration; such donors
/// are filtered out of directory snapshots before matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "bloodType", default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(rename = "lastDonation", default)]
    pub last_donation: Option<NaiveDate>,
}

fn default_role() -> String {
    "donor".to_string()
}

/// A hospital that can raise donor alerts; location is mandatory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: i32,
    pub name: String,
    pub location: GeoPoint,
}

/// One entry of the ranked shortlist returned to the hospital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDonor {
    pub donor: Donor,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub score: f64,
}

/// Weights for the baseline scoring policy
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub distance: f64,
    pub recency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.65,
            recency: 0.35,
        }
    }
}
