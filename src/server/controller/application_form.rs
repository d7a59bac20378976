use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        application::{ApplicationFormDto, UpdateApplicationFormDto},
    },
    server::{
        error::AppError, model::application::ApplicationFormUpdate,
        service::application_form::ApplicationFormService, state::AppState,
    },
};

/// Tag for grouping application form endpoints in OpenAPI documentation
pub static APPLICATION_FORM_TAG: &str = "application_form";

/// Get the application form of a phase.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `course_phase_id` - Application phase to read
///
/// # Returns
/// - `200 OK` - All questions of the form
/// - `400 Bad Request` - The phase is not an application phase
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/course_phases/{course_phase_id}/application_form",
    tag = APPLICATION_FORM_TAG,
    params(
        ("course_phase_id" = Uuid, Path, description = "Application phase ID")
    ),
    responses(
        (status = 200, description = "The form's question set", body = ApplicationFormDto),
        (status = 400, description = "Not an application phase", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application_form(
    State(state): State<AppState>,
    Path(course_phase_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = ApplicationFormService::new(&state.db);

    let form = service.get_form(course_phase_id).await?;

    Ok(Json(form.into_dto()))
}

/// Apply a batch of edits to an application form.
///
/// Deletions run first, then creations, then updates. The same path is used
/// internally when a course copy replicates an application form.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `course_phase_id` - Application phase to edit
/// - `payload` - Questions to delete, create, and update
///
/// # Returns
/// - `200 OK` - All edits applied
/// - `400 Bad Request` - The phase is not an application phase
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/course_phases/{course_phase_id}/application_form",
    tag = APPLICATION_FORM_TAG,
    params(
        ("course_phase_id" = Uuid, Path, description = "Application phase ID")
    ),
    request_body = UpdateApplicationFormDto,
    responses(
        (status = 200, description = "Edits applied"),
        (status = 400, description = "Not an application phase", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application_form(
    State(state): State<AppState>,
    Path(course_phase_id): Path<Uuid>,
    Json(payload): Json<UpdateApplicationFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ApplicationFormService::new(&state.db);

    let update = ApplicationFormUpdate::from_dto(payload);

    service.apply_form_edits(course_phase_id, update).await?;

    Ok(StatusCode::OK)
}
