use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        application_form::{get_application_form, update_application_form},
        course::{copy_course, get_course, get_course_copyable},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "coursehub",
    description = "Course administration core service"
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_course))
        .routes(routes!(copy_course))
        .routes(routes!(get_course_copyable))
        .routes(routes!(get_application_form, update_application_form))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
}
