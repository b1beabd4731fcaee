// Route exports
pub mod alerts;
pub mod donors;
pub mod hospitals;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(alerts::configure)
            .configure(donors::configure)
            .configure(hospitals::configure),
    );
}
