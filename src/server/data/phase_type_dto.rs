use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct PhaseTypeDtoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhaseTypeDtoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every DTO descriptor advertised by the given phase types.
    ///
    /// Returns descriptors of both directions and both granularity levels;
    /// dependency-graph edges may reference any of them.
    pub async fn get_by_phase_type_ids(
        &self,
        phase_type_ids: Vec<Uuid>,
    ) -> Result<Vec<entity::phase_type_dto::Model>, DbErr> {
        if phase_type_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PhaseTypeDto::find()
            .filter(entity::phase_type_dto::Column::CoursePhaseTypeId.is_in(phase_type_ids))
            .all(self.db)
            .await
    }
}
