//! Users API handlers.
//!
//! ```text
//! GET  /users                                   -> JSON array of users
//! POST /users {"name":"Ann","email":"a@x.com"}  -> "Created user: Ann"
//! *    /users                                   -> 405 "Method not allowed"
//! ```

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, Resource, web};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Path of the users collection.
pub const USERS_PATH: &str = "/users";

/// Methods served by [`users_resource`], advertised in the `Allow` header.
const ALLOWED_METHODS: &str = "GET, POST";

/// List known users.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    debug!(count = users.len(), "listed users");
    Ok(web::Json(users))
}

/// Submit a user.
///
/// Missing fields default to zero values; a body that is not a JSON object
/// of the user shape is rejected with `400`.
#[utoipa::path(
    post,
    path = "/users",
    request_body = User,
    responses(
        (status = 200, description = "User accepted", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not a JSON user", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let submitted: User = serde_json::from_slice(&body).map_err(map_decode_error)?;
    let created = state.users.create_user(submitted).await?;
    info!(user_id = %created.id(), "user created");
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Created user: {}", created.name())))
}

fn map_decode_error(err: serde_json::Error) -> Error {
    debug!(error = %err, "rejected malformed user body");
    Error::invalid_request("request body must be a JSON user").with_details(json!({
        "line": err.line(),
        "column": err.column(),
        "reason": err.to_string(),
    }))
}

/// Fallback for methods other than GET and POST on [`USERS_PATH`].
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), "method not allowed on users resource");
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, ALLOWED_METHODS))
        .content_type(ContentType::plaintext())
        .body("Method not allowed")
}

/// Resource dispatching `/users` by method.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use roster::inbound::http::state::HttpState;
/// use roster::inbound::http::users::users_resource;
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .service(users_resource());
/// ```
#[must_use]
pub fn users_resource() -> Resource {
    web::resource(USERS_PATH)
        .route(web::get().to(list_users))
        .route(web::post().to(create_user))
        .default_service(web::to(method_not_allowed))
}
