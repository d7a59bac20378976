//! DTO descriptor collection for the dependency graphs.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{
    data::phase_type_dto::PhaseTypeDtoRepository, error::AppError, service::copy::remap::IdMap,
};

pub struct DtoDescriptorCollector<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DtoDescriptorCollector<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers every descriptor advertised by the given phase types.
    ///
    /// Dependency-graph edges reference descriptors, not just phases, so
    /// graph duplication needs every descriptor the source course's phase
    /// types advertise in the id map. Descriptors are shared infrastructure
    /// of the phase type and are not cloned; each id is registered as an
    /// identity pair.
    ///
    /// # Arguments
    /// - `phase_type_ids` - The distinct phase types used by the source course
    /// - `id_map` - Id map the descriptor ids are registered in
    pub async fn collect(
        &self,
        phase_type_ids: Vec<Uuid>,
        id_map: &mut IdMap,
    ) -> Result<(), AppError> {
        let descriptors = PhaseTypeDtoRepository::new(self.db)
            .get_by_phase_type_ids(phase_type_ids)
            .await?;

        for descriptor in descriptors {
            id_map.register_dto_identity(descriptor.id);
        }

        Ok(())
    }
}
