//! Repositories for the two data-dependency graphs.
//!
//! The phase-level and participation-level graphs share one table shape; each
//! gets its own repository so callers never mix the two edge sets up.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Endpoint set of one data-dependency edge.
#[derive(Debug, Clone)]
pub struct DataEdge {
    pub from_course_phase_id: Uuid,
    pub from_dto_id: Uuid,
    pub to_course_phase_id: Uuid,
    pub to_dto_id: Uuid,
}

pub struct PhaseDataGraphRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhaseDataGraphRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all phase-level edges whose from-endpoint is one of the given phases
    pub async fn get_by_from_phase_ids(
        &self,
        phase_ids: Vec<Uuid>,
    ) -> Result<Vec<entity::phase_data_graph::Model>, DbErr> {
        if phase_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PhaseDataGraph::find()
            .filter(entity::phase_data_graph::Column::FromCoursePhaseId.is_in(phase_ids))
            .all(self.db)
            .await
    }

    /// Deletes all phase-level edges originating at the given phases.
    ///
    /// Used to replace a course's edge set wholesale before inserting a new one.
    pub async fn delete_by_from_phase_ids(&self, phase_ids: Vec<Uuid>) -> Result<(), DbErr> {
        if phase_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::PhaseDataGraph::delete_many()
            .filter(entity::phase_data_graph::Column::FromCoursePhaseId.is_in(phase_ids))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Creates one phase-level edge
    pub async fn create(&self, edge: DataEdge) -> Result<(), DbErr> {
        let model = entity::phase_data_graph::ActiveModel {
            from_course_phase_id: ActiveValue::Set(edge.from_course_phase_id),
            from_dto_id: ActiveValue::Set(edge.from_dto_id),
            to_course_phase_id: ActiveValue::Set(edge.to_course_phase_id),
            to_dto_id: ActiveValue::Set(edge.to_dto_id),
        };

        entity::prelude::PhaseDataGraph::insert(model)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}

pub struct ParticipationDataGraphRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipationDataGraphRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all participation-level edges whose from-endpoint is one of the given phases
    pub async fn get_by_from_phase_ids(
        &self,
        phase_ids: Vec<Uuid>,
    ) -> Result<Vec<entity::participation_data_graph::Model>, DbErr> {
        if phase_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ParticipationDataGraph::find()
            .filter(entity::participation_data_graph::Column::FromCoursePhaseId.is_in(phase_ids))
            .all(self.db)
            .await
    }

    /// Deletes all participation-level edges originating at the given phases
    pub async fn delete_by_from_phase_ids(&self, phase_ids: Vec<Uuid>) -> Result<(), DbErr> {
        if phase_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::ParticipationDataGraph::delete_many()
            .filter(entity::participation_data_graph::Column::FromCoursePhaseId.is_in(phase_ids))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Creates one participation-level edge
    pub async fn create(&self, edge: DataEdge) -> Result<(), DbErr> {
        let model = entity::participation_data_graph::ActiveModel {
            from_course_phase_id: ActiveValue::Set(edge.from_course_phase_id),
            from_dto_id: ActiveValue::Set(edge.from_dto_id),
            to_course_phase_id: ActiveValue::Set(edge.to_course_phase_id),
            to_dto_id: ActiveValue::Set(edge.to_dto_id),
        };

        entity::prelude::ParticipationDataGraph::insert(model)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
