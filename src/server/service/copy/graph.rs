//! Graph duplication: the ordering DAG and the two data-dependency graphs.
//!
//! All three passes share one shape: read the source edges, resolve every
//! endpoint through the id map, insert the translated edges. An endpoint that
//! fails to resolve aborts the whole copy; edges are never silently dropped.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{
    data::{
        course_phase::CoursePhaseRepository,
        course_phase_graph::CoursePhaseGraphRepository,
        data_graph::{DataEdge, ParticipationDataGraphRepository, PhaseDataGraphRepository},
    },
    error::AppError,
    service::copy::remap::IdMap,
};

pub struct GraphDuplicator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GraphDuplicator<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Translates the phase ordering graph into the target course.
    ///
    /// Additive only: the target course is brand new, so there is nothing to
    /// clear first.
    pub async fn duplicate_ordering_graph(&self, id_map: &IdMap) -> Result<(), AppError> {
        let repo = CoursePhaseGraphRepository::new(self.db);

        let edges = repo
            .get_by_from_phase_ids(id_map.source_phase_ids())
            .await?;

        for edge in edges {
            let from = id_map.resolve_phase(edge.from_course_phase_id)?;
            let to = id_map.resolve_phase(edge.to_course_phase_id)?;

            repo.create(from, to).await?;
        }

        Ok(())
    }

    /// Re-establishes the target course's initial phase.
    ///
    /// Clears any set flag on the target first so the at-most-one-initial
    /// invariant never breaks in between. A source course without an initial
    /// phase leaves the target without one as well.
    pub async fn set_initial_phase(
        &self,
        source_course_id: Uuid,
        target_course_id: Uuid,
        id_map: &IdMap,
    ) -> Result<(), AppError> {
        let repo = CoursePhaseRepository::new(self.db);

        let Some(initial) = repo.get_initial_phase(source_course_id).await? else {
            return Ok(());
        };

        let target_initial = id_map.resolve_phase(initial.id)?;

        repo.clear_initial_phase(target_course_id).await?;
        repo.set_initial_phase(target_initial).await?;

        Ok(())
    }

    /// Replaces the target course's phase-level data-dependency graph with
    /// the translated source edge set.
    pub async fn duplicate_phase_data_graph(&self, id_map: &IdMap) -> Result<(), AppError> {
        let repo = PhaseDataGraphRepository::new(self.db);

        // Replace wholesale, matching the semantics of manual graph edits.
        repo.delete_by_from_phase_ids(id_map.target_phase_ids())
            .await?;

        let edges = repo
            .get_by_from_phase_ids(id_map.source_phase_ids())
            .await?;

        for edge in edges {
            repo.create(DataEdge {
                from_course_phase_id: id_map.resolve_phase(edge.from_course_phase_id)?,
                from_dto_id: id_map.resolve_dto(edge.from_dto_id)?,
                to_course_phase_id: id_map.resolve_phase(edge.to_course_phase_id)?,
                to_dto_id: id_map.resolve_dto(edge.to_dto_id)?,
            })
            .await?;
        }

        Ok(())
    }

    /// Replaces the target course's participation-level data-dependency graph
    /// with the translated source edge set.
    pub async fn duplicate_participation_data_graph(&self, id_map: &IdMap) -> Result<(), AppError> {
        let repo = ParticipationDataGraphRepository::new(self.db);

        repo.delete_by_from_phase_ids(id_map.target_phase_ids())
            .await?;

        let edges = repo
            .get_by_from_phase_ids(id_map.source_phase_ids())
            .await?;

        for edge in edges {
            repo.create(DataEdge {
                from_course_phase_id: id_map.resolve_phase(edge.from_course_phase_id)?,
                from_dto_id: id_map.resolve_dto(edge.from_dto_id)?,
                to_course_phase_id: id_map.resolve_phase(edge.to_course_phase_id)?,
                to_dto_id: id_map.resolve_dto(edge.to_dto_id)?,
            })
            .await?;
        }

        Ok(())
    }
}
