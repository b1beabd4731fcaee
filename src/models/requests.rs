use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to raise a donor alert for a hospital
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAlertRequest {
    #[serde(alias = "hospital_id", rename = "hospitalId")]
    pub hospital_id: i32,
    #[validate(length(min = 1))]
    #[serde(alias = "blood_type", rename = "bloodType")]
    pub blood_type: String,
    #[serde(default)]
    #[serde(alias = "radius_km", rename = "radiusKm")]
    pub radius_km: Option<f64>,
}

/// Request to register a new donor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDonorRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "full_name", rename = "fullName")]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    #[serde(alias = "blood_type", rename = "bloodType")]
    pub blood_type: String,
    #[serde(default)]
    #[serde(alias = "last_donation_date", rename = "lastDonationDate")]
    pub last_donation_date: Option<NaiveDate>,
}

/// Partial update of a donor profile; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDonorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    #[serde(alias = "blood_type", rename = "bloodType")]
    pub blood_type: Option<String>,
    #[serde(default)]
    #[serde(alias = "last_donation", rename = "lastDonation")]
    pub last_donation: Option<NaiveDate>,
}
