//! Course factory for creating test course entities.
//!
//! This module provides factory methods for creating course entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test courses with customizable fields.
///
/// Provides a builder pattern for creating course entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db)
///     .name("iPraktikum")
///     .semester_tag("ios2526")
///     .template(true)
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    semester_tag: String,
    template: bool,
    restricted_data: serde_json::Value,
    student_readable_data: serde_json::Value,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course {id}"` where id is auto-incremented
    /// - semester_tag: `"ws2526"`
    /// - template: `false`
    /// - metadata blobs: `{}`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CourseFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Course {}", id),
            semester_tag: "ws2526".to_string(),
            template: false,
            restricted_data: serde_json::json!({}),
            student_readable_data: serde_json::json!({}),
        }
    }

    /// Sets the course name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the semester tag.
    pub fn semester_tag(mut self, semester_tag: impl Into<String>) -> Self {
        self.semester_tag = semester_tag.into();
        self
    }

    /// Marks the course as a template.
    pub fn template(mut self, template: bool) -> Self {
        self.template = template;
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

    /// Inserts the course into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted course entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(
                NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date"),
            ),
            end_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 3, 31).expect("valid date")),
            semester_tag: ActiveValue::Set(self.semester_tag),
            course_type: ActiveValue::Set("practical course".to_string()),
            ects: ActiveValue::Set(10),
            restricted_data: ActiveValue::Set(self.restricted_data),
            student_readable_data: ActiveValue::Set(self.student_readable_data),
            template: ActiveValue::Set(self.template),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
