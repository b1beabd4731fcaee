use actix_web::{web, HttpResponse, Responder};

use crate::models::{ErrorResponse, HospitalListResponse};
use crate::routes::alerts::AppState;

/// Configure hospital-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/hospitals", web::get().to(list_hospitals));
}

/// List all hospitals
///
/// GET /api/v1/hospitals
async fn list_hospitals(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_hospitals().await {
        Ok(hospitals) => HttpResponse::Ok().json(HospitalListResponse {
            count: hospitals.len(),
            hospitals,
        }),
        Err(e) => {
            tracing::error!("Failed to list hospitals: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal processing error".to_string(),
                message: "Unable to list hospitals".to_string(),
                status_code: 500,
            })
        }
    }
}
