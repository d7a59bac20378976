use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct CoursePhaseTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoursePhaseTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets several phase types at once, keyed by their id
    pub async fn get_by_ids(
        &self,
        ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, entity::course_phase_type::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let types = entity::prelude::CoursePhaseType::find()
            .filter(entity::course_phase_type::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(types.into_iter().map(|t| (t.id, t)).collect())
    }
}
