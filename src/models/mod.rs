// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Donor, Hospital, RankedDonor, ScoringWeights};
pub use requests::{CreateAlertRequest, RegisterDonorRequest, UpdateDonorRequest};
pub use responses::{
    AlertResponse, DonorListResponse, ErrorResponse, HealthResponse, HospitalListResponse,
    RegisterDonorResponse, UpdateDonorResponse,
};
