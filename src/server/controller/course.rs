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
        course::{CopiedCourseDto, CopyCourseDto, CourseCopyableDto, CourseWithPhasesDto},
    },
    server::{
        error::AppError,
        model::course::CopyCourseParams,
        service::{copy::CourseCopyService, course::CourseService},
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Get a course with all of its phases.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `course_id` - Course to fetch
///
/// # Returns
/// - `200 OK` - The course and its phases
/// - `404 Not Found` - No course with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The course and its phases", body = CourseWithPhasesDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service
        .get_by_id(course_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Course {} not found", course_id)))?;

    Ok(Json(course.into_dto()))
}

/// Copy a course.
///
/// Deep-copies the source course under a new name and date range: phases,
/// the phase ordering graph, both data-dependency graphs, and the
/// application form. The core copy is transactional; afterwards each remote
/// phase owner is asked to replicate its own configuration. A remote owner's
/// failure never hides the core copy's success, it is reported through the
/// `propagation_warning` field instead.
///
/// # Arguments
/// - `state` - Application state containing the database connection and HTTP client
/// - `course_id` - Course to copy
/// - `payload` - Name, dates, semester tag, and optional metadata overrides
///
/// # Returns
/// - `201 Created` - The newly created course, possibly with a propagation warning
/// - `404 Not Found` - No course with the given id
/// - `500 Internal Server Error` - The copy failed and was rolled back
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/copy",
    tag = COURSE_TAG,
    params(
        ("course_id" = Uuid, Path, description = "Course ID to copy")
    ),
    request_body = CopyCourseDto,
    responses(
        (status = 201, description = "Successfully copied the course", body = CopiedCourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Copy failed and was rolled back", body = ErrorDto)
    ),
)]
pub async fn copy_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(payload): Json<CopyCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseCopyService::new(
        &state.db,
        &state.http_client,
        &state.core_base_url,
        state.identity_base_url.as_deref(),
    );

    let params = CopyCourseParams::from_dto(payload);

    let copied = service.copy_course(course_id, params).await?;

    Ok((StatusCode::CREATED, Json(copied.into_dto())))
}

/// Check whether a course is fully copyable.
///
/// Sends a side-effect-free dry-run copy request to each distinct remote
/// phase owner of the course and reports the phase types whose owner cannot
/// replicate configuration. An empty list means a copy will replicate
/// everything.
///
/// # Arguments
/// - `state` - Application state containing the database connection and HTTP client
/// - `course_id` - Course to probe
///
/// # Returns
/// - `200 OK` - Copyability flag and the list of missing phase types
/// - `404 Not Found` - No course with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/copyable",
    tag = COURSE_TAG,
    params(
        ("course_id" = Uuid, Path, description = "Course ID to probe")
    ),
    responses(
        (status = 200, description = "Copyability report", body = CourseCopyableDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_copyable(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseCopyService::new(
        &state.db,
        &state.http_client,
        &state.core_base_url,
        state.identity_base_url.as_deref(),
    );

    let missing_phase_types = service.check_copyable(course_id).await?;

    Ok(Json(CourseCopyableDto {
        copyable: missing_phase_types.is_empty(),
        missing_phase_types,
    }))
}
