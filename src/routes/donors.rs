use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    DonorListResponse, ErrorResponse, RegisterDonorRequest, RegisterDonorResponse,
    UpdateDonorRequest, UpdateDonorResponse,
};
use crate::routes::alerts::AppState;
use crate::services::NewDonor;

/// Configure donor-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/donors", web::post().to(register_donor))
        .route("/donors", web::get().to(list_donors))
        .service(
            web::resource("/donors/{id}")
                .route(web::put().to(update_donor))
                .route(web::patch().to(update_donor)),
        );
}

/// Register a new donor
///
/// POST /api/v1/donors
///
/// The address is geocoded on a best-effort basis; a donor whose address
/// cannot be resolved is still registered, flagged with a warning, and
/// excluded from matching until coordinates are known.
async fn register_donor(
    state: web::Data<AppState>,
    req: web::Json<RegisterDonorRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for donor registration: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.store.email_or_phone_taken(&req.email, &req.phone).await {
        Ok(true) => {
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "Already registered".to_string(),
                message: "Email or phone number already registered".to_string(),
                status_code: 409,
            });
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!("Duplicate check failed for {}: {}", req.email, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal processing error".to_string(),
                message: "Unable to register donor".to_string(),
                status_code: 500,
            });
        }
    }

    let location = state.geocoder.geocode(&req.address).await;
    if location.is_none() {
        tracing::info!("No coordinates resolved for address {:?}", req.address);
    }

    let new_donor = NewDonor {
        name: req.full_name.clone(),
        phone: req.phone.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
        address: req.address.clone(),
        blood_type: req.blood_type.clone(),
        location,
        last_donation: req.last_donation_date,
    };

    match state.store.insert_donor(new_donor).await {
        Ok(donor) => {
            let warning = donor.location.is_none().then(|| {
                "Could not resolve the address to coordinates; update the address later to \
                 become matchable"
                    .to_string()
            });

            tracing::info!("Registered donor {} ({})", donor.id, donor.email);

            HttpResponse::Created().json(RegisterDonorResponse {
                message: "Registration successful".to_string(),
                warning,
                donor,
            })
        }
        Err(e) => {
            tracing::error!("Failed to insert donor {}: {}", req.email, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal processing error".to_string(),
                message: "Unable to register donor".to_string(),
                status_code: 500,
            })
        }
    }
}

/// Update a donor profile
///
/// PUT/PATCH /api/v1/donors/{id}
///
/// When the address changes, coordinates are re-derived; an unresolvable
/// new address clears them.
async fn update_donor(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<UpdateDonorRequest>,
) -> impl Responder {
    let donor_id = path.into_inner();

    let mut donor = match state.store.get_donor(donor_id).await {
        Ok(Some(donor)) => donor,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Donor not found".to_string(),
                message: format!("No donor with id {}", donor_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch donor {}: {}", donor_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal processing error".to_string(),
                message: "Unable to update donor".to_string(),
                status_code: 500,
            });
        }
    };

    if let Some(name) = &req.name {
        donor.name = name.clone();
    }
    if let Some(phone) = &req.phone {
        donor.phone = phone.clone();
    }
    if let Some(blood_type) = &req.blood_type {
        donor.blood_type = Some(blood_type.clone());
    }
    if let Some(last_donation) = req.last_donation {
        donor.last_donation = Some(last_donation);
    }

    let address_changed =
        req.address.is_some() && req.address.as_deref() != donor.address.as_deref();
    if let Some(address) = &req.address {
        donor.address = Some(address.clone());
    }

    if address_changed {
        if let Some(address) = donor.address.clone().filter(|a| !a.is_empty()) {
            tracing::info!("Re-deriving coordinates for donor {}", donor_id);
            donor.location = state.geocoder.geocode(&address).await;
        } else {
            donor.location = None;
        }
    }

    match state.store.update_donor(&donor).await {
        Ok(()) => HttpResponse::Ok().json(UpdateDonorResponse {
            message: "Profile updated".to_string(),
            donor,
        }),
        Err(e) => {
            tracing::error!("Failed to update donor {}: {}", donor_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal processing error".to_string(),
                message: "Unable to update donor".to_string(),
                status_code: 500,
            })
        }
    }
}

/// List all registered donors
///
/// GET /api/v1/donors
async fn list_donors(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_donors().await {
        Ok(donors) => HttpResponse::Ok().json(DonorListResponse {
            count: donors.len(),
            donors,
        }),
        Err(e) => {
            tracing::error!("Failed to list donors: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal processing error".to_string(),
                message: "Unable to list donors".to_string(),
                status_code: 500,
            })
        }
    }
}
