//! Liveness endpoint for orchestration and load balancers.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Resource, web};

/// Path of the liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Liveness probe. Answers `OK` for any method while the process is serving.
#[utoipa::path(
    method(get, post),
    path = "/health",
    description = "Answers `OK` for any HTTP method.",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = String, content_type = "text/plain")
    )
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}

/// Resource serving [`health`] for every method.
#[must_use]
pub fn health_resource() -> Resource {
    web::resource(HEALTH_PATH).to(health)
}
