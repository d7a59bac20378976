use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A course phase as returned by the API.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CoursePhaseDto {
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub is_initial_phase: bool,
    pub course_phase_type_id: Uuid,
    #[schema(value_type = Object)]
    pub restricted_data: serde_json::Value,
    #[schema(value_type = Object)]
    pub student_readable_data: serde_json::Value,
}
