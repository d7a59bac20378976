use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{course::CourseRepository, course_phase::CoursePhaseRepository},
    error::AppError,
    model::course::CourseWithPhases,
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a course and all of its phases
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<CourseWithPhases>, AppError> {
        let Some(course) = CourseRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let phases = CoursePhaseRepository::new(self.db)
            .get_by_course_id(course.id)
            .await?;

        Ok(Some(CourseWithPhases { course, phases }))
    }
}
