use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::core::{Matcher, ScoringContext};
use crate::models::{AlertResponse, CreateAlertRequest, ErrorResponse, HealthResponse};
use crate::services::{GeocodingClient, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostgresClient>,
    pub geocoder: Arc<GeocodingClient>,
    pub matcher: Matcher,
    pub default_radius_km: f64,
}

/// Configure alert-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/alerts", web::post().to(create_alert));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Raise a donor alert for a hospital
///
/// POST /api/v1/alerts
///
/// Request body:
/// ```json
/// {
///   "hospitalId": 1,
///   "bloodType": "O+",
///   "radiusKm": 10
/// }
/// ```
///
/// Resolves the hospital, takes a snapshot of eligible donors for the
/// requested blood type, and runs the matching pipeline. An empty shortlist
/// is a valid success; it means no eligible donor was within range.
async fn create_alert(
    state: web::Data<AppState>,
    req: web::Json<CreateAlertRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for alert request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let radius_km = req.radius_km.unwrap_or(state.default_radius_km);

    let hospital = match state.store.get_hospital(req.hospital_id).await {
        Ok(Some(hospital)) => hospital,
        Ok(None) => {
            tracing::info!("Alert requested for unknown hospital {}", req.hospital_id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Hospital not found".to_string(),
                message: format!("No hospital with id {}", req.hospital_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch hospital {}: {}", req.hospital_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal processing error".to_string(),
                message: "Unable to process this alert".to_string(),
                status_code: 500,
            });
        }
    };

    let snapshot = match state.store.list_eligible_donors(&req.blood_type).await {
        Ok(donors) => donors,
        Err(e) => {
            tracing::error!(
                "Failed to snapshot donors for blood type {}: {}",
                req.blood_type,
                e
            );
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal processing error".to_string(),
                message: "Unable to process this alert".to_string(),
                status_code: 500,
            });
        }
    };

    let candidate_count = snapshot.len();
    let ctx = ScoringContext {
        blood_type: req.blood_type.clone(),
        radius_km,
        as_of: Utc::now().date_naive(),
    };

    let outcome = match state.matcher.rank(&hospital.location, snapshot, &ctx) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                "Matching pipeline failed for hospital {} (blood type {}, radius {} km, {} candidates): {}",
                hospital.id,
                req.blood_type,
                radius_km,
                candidate_count,
                e
            );
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal processing error".to_string(),
                message: "Unable to match donors for this alert".to_string(),
                status_code: 500,
            });
        }
    };

    tracing::info!(
        "Alert for hospital {}: {} matched, returning top {} (blood type {}, radius {} km)",
        hospital.id,
        outcome.total_matched,
        outcome.matches.len(),
        req.blood_type,
        radius_km
    );

    HttpResponse::Ok().json(AlertResponse {
        hospital,
        blood_type_needed: req.blood_type.clone(),
        radius_km,
        total_matched: outcome.total_matched,
        top_matches: outcome.matches,
    })
}
