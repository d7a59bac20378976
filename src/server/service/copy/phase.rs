//! Phase duplication: clones every phase of the source course.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{
    data::course_phase::CoursePhaseRepository,
    error::AppError,
    model::{copy::CopiedPhase, course::CreateCoursePhaseParams},
    service::copy::remap::IdMap,
};

pub struct PhaseDuplicator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhaseDuplicator<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Clones all phases of the source course into the target course.
    ///
    /// Every phase is copied, whether or not it appears in the ordering
    /// graph. Each clone keeps the source's name, metadata blobs, and phase
    /// type, receives a freshly minted id registered in the id map, and is
    /// inserted with the is-initial flag cleared; the graph duplicator
    /// re-establishes the initial phase afterwards.
    ///
    /// A failed insert aborts the whole copy. Partial phase sets never
    /// survive because the caller runs this inside the copy transaction.
    ///
    /// # Arguments
    /// - `source_course_id` - Course whose phases are read
    /// - `target_course_id` - Course the clones are bound to
    /// - `id_map` - Id map the old-to-new phase pairs are registered in
    ///
    /// # Returns
    /// - `Ok(Vec<CopiedPhase>)` - One entry per cloned phase, for the remote propagator
    /// - `Err(AppError::DbErr)` - Reading or inserting a phase failed
    pub async fn duplicate(
        &self,
        source_course_id: Uuid,
        target_course_id: Uuid,
        id_map: &mut IdMap,
    ) -> Result<Vec<CopiedPhase>, AppError> {
        let repo = CoursePhaseRepository::new(self.db);

        let source_phases = repo.get_by_course_id(source_course_id).await?;

        let mut copied = Vec::with_capacity(source_phases.len());

        for phase in source_phases {
            let target_id = id_map.register_phase(phase.id);

            repo.create(CreateCoursePhaseParams {
                id: target_id,
                course_id: target_course_id,
                name: phase.name.clone(),
                is_initial_phase: false,
                restricted_data: phase.restricted_data.clone(),
                student_readable_data: phase.student_readable_data.clone(),
                course_phase_type_id: phase.course_phase_type_id,
            })
            .await?;

            copied.push(CopiedPhase {
                source_id: phase.id,
                target_id,
                course_phase_type_id: phase.course_phase_type_id,
            });
        }

        Ok(copied)
    }
}
