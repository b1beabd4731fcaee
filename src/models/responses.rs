use serde::{Deserialize, Serialize};

use crate::models::domain::{Donor, Hospital, RankedDonor};

/// Response for a successful alert request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertResponse {
    pub hospital: Hospital,
    #[serde(rename = "bloodTypeNeeded")]
    pub blood_type_needed: String,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
    #[serde(rename = "totalMatched")]
    pub total_matched: usize,
    #[serde(rename = "topMatches")]
    pub top_matches: Vec<RankedDonor>,
}

/// Response after registering a donor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDonorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub donor: Donor,
}

/// Response after updating a donor profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDonorResponse {
    pub message: String,
    pub donor: Donor,
}

/// Donor directory listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorListResponse {
    pub count: usize,
    pub donors: Vec<Donor>,
}

/// Hospital listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalListResponse {
    pub count: usize,
    pub hospitals: Vec<Hospital>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
