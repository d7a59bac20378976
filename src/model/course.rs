use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::course_phase::CoursePhaseDto;

/// A course as returned by the API.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester_tag: String,
    pub course_type: String,
    pub ects: i32,
    #[schema(value_type = Object)]
    pub restricted_data: serde_json::Value,
    #[schema(value_type = Object)]
    pub student_readable_data: serde_json::Value,
    pub template: bool,
}

/// A course together with all of its phases.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CourseWithPhasesDto {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester_tag: String,
    pub course_type: String,
    pub ects: i32,
    #[schema(value_type = Object)]
    pub restricted_data: serde_json::Value,
    #[schema(value_type = Object)]
    pub student_readable_data: serde_json::Value,
    pub template: bool,
    pub phases: Vec<CoursePhaseDto>,
}

/// Request body for copying a course.
///
/// Names the new course; everything not listed here (course type, ECTS,
/// phases, graphs, application form) is taken from the source course. The
/// metadata blobs default to the source's blobs when omitted.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CopyCourseDto {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester_tag: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub restricted_data: Option<serde_json::Value>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub student_readable_data: Option<serde_json::Value>,
}

/// Result of a course copy.
///
/// `propagation_warning` is set when the core copy committed but a remote
/// phase owner failed to replicate its configuration afterwards. The copy
/// itself is complete and usable in that case.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CopiedCourseDto {
    pub course: CourseDto,
    pub propagation_warning: Option<String>,
}

/// Result of the pre-flight copyability probe.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CourseCopyableDto {
    pub copyable: bool,
    #[serde(rename = "missingPhaseTypes")]
    pub missing_phase_types: Vec<String>,
}
