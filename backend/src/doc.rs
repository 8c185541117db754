//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users and health endpoints together with the
//! [`User`](crate::domain::User) and [`ErrorBody`] schemas. The document is
//! served next to Swagger UI when the `debug` configuration flag is set.

use crate::domain::{ErrorCode, User};
use crate::inbound::http::ErrorBody;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "In-memory users resource with fixture data and a liveness probe."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::health,
    ),
    components(schemas(User, ErrorBody, ErrorCode)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("id")]
    #[case("name")]
    #[case("email")]
    fn user_schema_has_field(#[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get("User").expect("User schema");

        assert_object_schema_has_field(user_schema, field);
    }

    #[rstest]
    fn error_schema_has_code_and_message() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("ErrorBody").expect("ErrorBody schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[rstest]
    #[case("/users")]
    #[case("/health")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn users_path_documents_get_and_post() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/users").expect("users path");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
    }

    #[rstest]
    fn health_path_documents_get_and_post() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/health").expect("health path");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
    }
}
