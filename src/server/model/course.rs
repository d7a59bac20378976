use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::{
    course::{CopiedCourseDto, CopyCourseDto, CourseDto, CourseWithPhasesDto},
    course_phase::CoursePhaseDto,
};

/// Fields an operator chooses when copying a course.
///
/// Everything not carried here is inherited from the source course.
#[derive(Debug, Clone)]
pub struct CopyCourseParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester_tag: String,
    pub restricted_data: Option<serde_json::Value>,
    pub student_readable_data: Option<serde_json::Value>,
}

impl CopyCourseParams {
    pub fn from_dto(dto: CopyCourseDto) -> Self {
        Self {
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            semester_tag: dto.semester_tag,
            restricted_data: dto.restricted_data,
            student_readable_data: dto.student_readable_data,
        }
    }
}

/// Full column set for creating a course row.
#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester_tag: String,
    pub course_type: String,
    pub ects: i32,
    pub restricted_data: serde_json::Value,
    pub student_readable_data: serde_json::Value,
    pub template: bool,
}

impl CreateCourseParams {
    /// Builds the target course of a copy operation.
    ///
    /// The operator-chosen fields come from `params`; course type, ECTS and
    /// (absent an override) the metadata blobs come from the source course.
    /// The copy is always a live course, never a template.
    pub fn for_copy(source: &entity::course::Model, params: CopyCourseParams) -> Self {
        Self {
            name: params.name,
            start_date: params.start_date,
            end_date: params.end_date,
            semester_tag: params.semester_tag,
            course_type: source.course_type.clone(),
            ects: source.ects,
            restricted_data: params
                .restricted_data
                .unwrap_or_else(|| source.restricted_data.clone()),
            student_readable_data: params
                .student_readable_data
                .unwrap_or_else(|| source.student_readable_data.clone()),
            template: false,
        }
    }
}

/// A course together with its phases, as loaded for read endpoints.
pub struct CourseWithPhases {
    pub course: entity::course::Model,
    pub phases: Vec<entity::course_phase::Model>,
}

impl CourseWithPhases {
    pub fn into_dto(self) -> CourseWithPhasesDto {
        CourseWithPhasesDto {
            id: self.course.id,
            name: self.course.name,
            start_date: self.course.start_date,
            end_date: self.course.end_date,
            semester_tag: self.course.semester_tag,
            course_type: self.course.course_type,
            ects: self.course.ects,
            restricted_data: self.course.restricted_data,
            student_readable_data: self.course.student_readable_data,
            template: self.course.template,
            phases: self.phases.into_iter().map(phase_into_dto).collect(),
        }
    }
}

/// Outcome of a completed course copy.
///
/// `propagation_warning` carries the error of a failed post-commit remote
/// configuration propagation; the core copy itself is committed and final.
pub struct CopiedCourse {
    pub course: entity::course::Model,
    pub propagation_warning: Option<String>,
}

impl CopiedCourse {
    pub fn into_dto(self) -> CopiedCourseDto {
        CopiedCourseDto {
            course: course_into_dto(self.course),
            propagation_warning: self.propagation_warning,
        }
    }
}

/// Converts a course entity to its API representation.
pub fn course_into_dto(course: entity::course::Model) -> CourseDto {
    CourseDto {
        id: course.id,
        name: course.name,
        start_date: course.start_date,
        end_date: course.end_date,
        semester_tag: course.semester_tag,
        course_type: course.course_type,
        ects: course.ects,
        restricted_data: course.restricted_data,
        student_readable_data: course.student_readable_data,
        template: course.template,
    }
}

/// Converts a course phase entity to its API representation.
pub fn phase_into_dto(phase: entity::course_phase::Model) -> CoursePhaseDto {
    CoursePhaseDto {
        id: phase.id,
        course_id: phase.course_id,
        name: phase.name,
        is_initial_phase: phase.is_initial_phase,
        course_phase_type_id: phase.course_phase_type_id,
        restricted_data: phase.restricted_data,
        student_readable_data: phase.student_readable_data,
    }
}

/// Column set for creating a course phase row with a pre-minted id.
///
/// The id is chosen by the caller because the replication engine registers
/// phase ids in its id map before inserting the rows.
#[derive(Debug, Clone)]
pub struct CreateCoursePhaseParams {
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub is_initial_phase: bool,
    pub restricted_data: serde_json::Value,
    pub student_readable_data: serde_json::Value,
    pub course_phase_type_id: Uuid,
}
