use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::course::CreateCoursePhaseParams;

/// Phase type name that marks a phase as an application phase.
pub const APPLICATION_PHASE_TYPE: &str = "Application";

pub struct CoursePhaseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoursePhaseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all phases of a course, sequenced and unsequenced alike
    pub async fn get_by_course_id(
        &self,
        course_id: Uuid,
    ) -> Result<Vec<entity::course_phase::Model>, DbErr> {
        entity::prelude::CoursePhase::find()
            .filter(entity::course_phase::Column::CourseId.eq(course_id))
            .all(self.db)
            .await
    }

    /// Gets the initial phase of a course, if one is set
    pub async fn get_initial_phase(
        &self,
        course_id: Uuid,
    ) -> Result<Option<entity::course_phase::Model>, DbErr> {
        entity::prelude::CoursePhase::find()
            .filter(entity::course_phase::Column::CourseId.eq(course_id))
            .filter(entity::course_phase::Column::IsInitialPhase.eq(true))
            .one(self.db)
            .await
    }

    /// Creates a new phase under the caller-chosen id
    pub async fn create(
        &self,
        params: CreateCoursePhaseParams,
    ) -> Result<entity::course_phase::Model, DbErr> {
        entity::course_phase::ActiveModel {
            id: ActiveValue::Set(params.id),
            course_id: ActiveValue::Set(params.course_id),
            name: ActiveValue::Set(params.name),
            is_initial_phase: ActiveValue::Set(params.is_initial_phase),
            restricted_data: ActiveValue::Set(params.restricted_data),
            student_readable_data: ActiveValue::Set(params.student_readable_data),
            course_phase_type_id: ActiveValue::Set(params.course_phase_type_id),
        }
        .insert(self.db)
        .await
    }

    /// Clears the is-initial flag on every phase of a course.
    ///
    /// Run before setting a new initial phase so the at-most-one-initial-phase
    /// invariant holds at every point in between.
    pub async fn clear_initial_phase(&self, course_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::CoursePhase::update_many()
            .col_expr(entity::course_phase::Column::IsInitialPhase, Expr::value(false))
            .filter(entity::course_phase::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks the given phase as its course's initial phase
    pub async fn set_initial_phase(&self, phase_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::CoursePhase::update_many()
            .col_expr(entity::course_phase::Column::IsInitialPhase, Expr::value(true))
            .filter(entity::course_phase::Column::Id.eq(phase_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds the application phase of a course, if the course has one.
    ///
    /// Application phases are recognized by their phase type's name.
    pub async fn get_application_phase(
        &self,
        course_id: Uuid,
    ) -> Result<Option<entity::course_phase::Model>, DbErr> {
        let phases = entity::prelude::CoursePhase::find()
            .filter(entity::course_phase::Column::CourseId.eq(course_id))
            .find_also_related(entity::prelude::CoursePhaseType)
            .all(self.db)
            .await?;

        Ok(phases.into_iter().find_map(|(phase, phase_type)| {
            phase_type
                .is_some_and(|t| t.name == APPLICATION_PHASE_TYPE)
                .then_some(phase)
        }))
    }

    /// Checks whether the given phase is an application phase
    pub async fn is_application_phase(&self, phase_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::CoursePhase::find_by_id(phase_id)
            .find_also_related(entity::prelude::CoursePhaseType)
            .one(self.db)
            .await?;

        Ok(result
            .and_then(|(_, phase_type)| phase_type)
            .is_some_and(|t| t.name == APPLICATION_PHASE_TYPE))
    }
}
