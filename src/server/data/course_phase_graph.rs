use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct CoursePhaseGraphRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoursePhaseGraphRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all ordering edges whose from-endpoint is one of the given phases.
    ///
    /// Both endpoints of an ordering edge always belong to the same course, so
    /// filtering on the from side scopes the result to that course.
    pub async fn get_by_from_phase_ids(
        &self,
        phase_ids: Vec<Uuid>,
    ) -> Result<Vec<entity::course_phase_graph::Model>, DbErr> {
        if phase_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CoursePhaseGraph::find()
            .filter(entity::course_phase_graph::Column::FromCoursePhaseId.is_in(phase_ids))
            .all(self.db)
            .await
    }

    /// Creates one ordering edge
    pub async fn create(&self, from_phase_id: Uuid, to_phase_id: Uuid) -> Result<(), DbErr> {
        let edge = entity::course_phase_graph::ActiveModel {
            from_course_phase_id: ActiveValue::Set(from_phase_id),
            to_course_phase_id: ActiveValue::Set(to_phase_id),
        };

        entity::prelude::CoursePhaseGraph::insert(edge)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
