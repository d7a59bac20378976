//! Course phase factory for creating test phase entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test course phases with customizable fields.
///
/// Provides a builder pattern for creating course phase entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course_phase::CoursePhaseFactory;
///
/// let phase = CoursePhaseFactory::new(&db, course.id, phase_type.id)
///     .name("Intro Course")
///     .is_initial_phase(true)
///     .build()
///     .await?;
/// ```
pub struct CoursePhaseFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: Uuid,
    course_phase_type_id: Uuid,
    name: String,
    is_initial_phase: bool,
    restricted_data: serde_json::Value,
    student_readable_data: serde_json::Value,
}

impl<'a> CoursePhaseFactory<'a> {
    /// Creates a new CoursePhaseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Phase {id}"` where id is auto-incremented
    /// - is_initial_phase: `false`
    /// - metadata blobs: `{}`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `course_id` - Course this phase belongs to
    /// - `course_phase_type_id` - Phase type this phase is bound to
    ///
    /// # Returns
    /// - `CoursePhaseFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, course_id: Uuid, course_phase_type_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            course_id,
            course_phase_type_id,
            name: format!("Phase {}", id),
            is_initial_phase: false,
            restricted_data: serde_json::json!({}),
            student_readable_data: serde_json::json!({}),
        }
    }

    /// Sets the phase name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks this phase as the course's initial phase.
    pub fn is_initial_phase(mut self, is_initial: bool) -> Self {
        self.is_initial_phase = is_initial;
        self
    }

    /// Sets the restricted metadata blob.
    pub fn restricted_data(mut self, data: serde_json::Value) -> Self {
        self.restricted_data = data;
        self
    }

    /// Sets the student-readable metadata blob.
    pub fn student_readable_data(mut self, data: serde_json::Value) -> Self {
        self.student_readable_data = data;
        self
    }

    /// Inserts the course phase into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted course phase entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::course_phase::Model, DbErr> {
        entity::course_phase::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            course_id: ActiveValue::Set(self.course_id),
            name: ActiveValue::Set(self.name),
            is_initial_phase: ActiveValue::Set(self.is_initial_phase),
            restricted_data: ActiveValue::Set(self.restricted_data),
            student_readable_data: ActiveValue::Set(self.student_readable_data),
            course_phase_type_id: ActiveValue::Set(self.course_phase_type_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course phase with default values.
pub async fn create_phase(
    db: &DatabaseConnection,
    course_id: Uuid,
    course_phase_type_id: Uuid,
) -> Result<entity::course_phase::Model, DbErr> {
    CoursePhaseFactory::new(db, course_id, course_phase_type_id)
        .build()
        .await
}
