//! Course replication engine.
//!
//! Deep-copies a course: its phases (sequenced and unsequenced), the phase
//! ordering DAG, the two data-dependency graphs, and the application form,
//! all inside one database transaction. After the transaction commits, each
//! remote phase owner is asked to replicate its own phase-scoped
//! configuration; failures there degrade the result but never undo the
//! committed core copy.
//!
//! The copy proceeds through fixed stages: load source, create target
//! course, copy phases, collect DTO descriptors, copy the three graphs and
//! re-establish the initial phase, copy the application form (skipped when
//! either side has no application phase), provision groups and roles, commit,
//! propagate remote configuration. Any failure before commit rolls the whole
//! transaction back; the target course is never observable half-created.

pub mod application_form;
pub mod descriptor;
pub mod graph;
pub mod phase;
pub mod probe;
pub mod remap;
pub mod remote;

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::course::CourseRepository,
    error::AppError,
    model::{
        copy::CopiedPhase,
        course::{CopiedCourse, CopyCourseParams, CreateCourseParams},
    },
    service::provisioning::ProvisioningService,
};

use self::{
    application_form::ApplicationFormDuplicator, descriptor::DtoDescriptorCollector,
    graph::GraphDuplicator, phase::PhaseDuplicator, probe::CopyabilityProber, remap::IdMap,
    remote::RemoteConfigPropagator,
};

pub struct CourseCopyService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    core_base_url: &'a str,
    identity_base_url: Option<&'a str>,
}

impl<'a> CourseCopyService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        core_base_url: &'a str,
        identity_base_url: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            http_client,
            core_base_url,
            identity_base_url,
        }
    }

    /// Copies a course under a new name and date range.
    ///
    /// The core copy runs inside one transaction; see the module
    /// documentation for the stage sequence. Remote configuration
    /// propagation runs after commit, and its failure is reported through
    /// `propagation_warning` on an otherwise successful result.
    ///
    /// # Arguments
    /// - `source_course_id` - Course to copy
    /// - `params` - Operator-chosen fields of the new course
    ///
    /// # Returns
    /// - `Ok(CopiedCourse)` - The committed course, with an optional propagation warning
    /// - `Err(AppError::NotFound)` - The source course does not exist
    /// - `Err(AppError)` - Any pre-commit failure; the transaction was rolled back
    pub async fn copy_course(
        &self,
        source_course_id: Uuid,
        params: CopyCourseParams,
    ) -> Result<CopiedCourse, AppError> {
        let txn = self.db.begin().await?;

        let outcome = self.copy_course_core(&txn, source_course_id, params).await;

        let (course, copied_phases) = match outcome {
            Ok(result) => result,
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(
                        "Rollback after failed course copy also failed: {}",
                        rollback_err
                    );
                }
                return Err(err);
            }
        };

        txn.commit().await?;

        // The core copy is final from here on. Remote owners replicate their
        // own configuration best-effort; a failure is surfaced as a warning.
        let propagator =
            RemoteConfigPropagator::new(self.db, self.http_client, self.core_base_url);

        let propagation_warning = match propagator.propagate(&copied_phases).await {
            Ok(()) => None,
            Err(err) => {
                tracing::error!("Remote configuration propagation failed: {}", err);
                Some(err.to_string())
            }
        };

        Ok(CopiedCourse {
            course,
            propagation_warning,
        })
    }

    /// Runs the transactional portion of a copy.
    async fn copy_course_core(
        &self,
        txn: &DatabaseTransaction,
        source_course_id: Uuid,
        params: CopyCourseParams,
    ) -> Result<(entity::course::Model, Vec<CopiedPhase>), AppError> {
        let course_repo = CourseRepository::new(txn);

        let source = course_repo
            .get_by_id(source_course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course {} not found", source_course_id))
            })?;

        let course = course_repo
            .create(CreateCourseParams::for_copy(&source, params))
            .await?;

        let mut id_map = IdMap::new();

        let copied_phases = PhaseDuplicator::new(txn)
            .duplicate(source.id, course.id, &mut id_map)
            .await?;

        let phase_type_ids: Vec<Uuid> = copied_phases
            .iter()
            .map(|p| p.course_phase_type_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        DtoDescriptorCollector::new(txn)
            .collect(phase_type_ids, &mut id_map)
            .await?;

        let graphs = GraphDuplicator::new(txn);
        graphs.duplicate_ordering_graph(&id_map).await?;
        graphs
            .set_initial_phase(source.id, course.id, &id_map)
            .await?;
        graphs.duplicate_phase_data_graph(&id_map).await?;
        graphs.duplicate_participation_data_graph(&id_map).await?;

        ApplicationFormDuplicator::new(txn)
            .duplicate(source.id, course.id)
            .await?;

        match self.identity_base_url {
            Some(identity_url) => {
                ProvisioningService::new(self.http_client, identity_url)
                    .create_course_groups_and_roles(&course.name, &course.semester_tag)
                    .await?;
            }
            None => {
                tracing::debug!("No identity service configured, skipping group provisioning");
            }
        }

        Ok((course, copied_phases))
    }

    /// Runs the read-only copyability probe for a course.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Phase types that cannot replicate their configuration
    /// - `Err(AppError::NotFound)` - The course does not exist
    pub async fn check_copyable(&self, course_id: Uuid) -> Result<Vec<String>, AppError> {
        CourseRepository::new(self.db)
            .get_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", course_id)))?;

        CopyabilityProber::new(self.db, self.http_client, self.core_base_url)
            .probe(course_id)
            .await
    }
}
