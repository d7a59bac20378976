//! Post-commit propagation of phase configuration to remote owners.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::course_phase_type::CoursePhaseTypeRepository,
    error::{copy::CopyError, AppError},
    model::copy::{CopiedPhase, RemoteCopyRequest},
};

pub struct RemoteConfigPropagator<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    core_base_url: &'a str,
}

impl<'a> RemoteConfigPropagator<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        core_base_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            core_base_url,
        }
    }

    /// Asks each remote phase owner to copy its phase-scoped configuration.
    ///
    /// Runs strictly after the core transaction committed; nothing here can
    /// or does roll the core copy back. Requests go out sequentially so a
    /// partial failure has a well-defined position. A 404 means the phase
    /// type does not implement copy, which is expected for some types and
    /// only logged. Any other non-200 answer or a transport failure stops
    /// propagation at that phase type so the operator gets a precise point
    /// to retry from.
    ///
    /// # Arguments
    /// - `copied_phases` - Old/new phase id pairs produced by the phase duplicator
    ///
    /// # Returns
    /// - `Ok(())` - Every reachable owner accepted or does not implement copy
    /// - `Err(AppError::CopyErr)` - The owner of the named phase type failed
    pub async fn propagate(&self, copied_phases: &[CopiedPhase]) -> Result<(), AppError> {
        let type_ids: Vec<Uuid> = copied_phases
            .iter()
            .map(|p| p.course_phase_type_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let phase_types = CoursePhaseTypeRepository::new(self.db)
            .get_by_ids(type_ids)
            .await?;

        for phase in copied_phases {
            let Some(phase_type) = phase_types.get(&phase.course_phase_type_id) else {
                continue;
            };

            if phase_type.base_url == self.core_base_url {
                continue;
            }

            let url = format!("{}/copy", phase_type.base_url.trim_end_matches('/'));

            let request = RemoteCopyRequest {
                source_course_phase_id: phase.source_id,
                target_course_phase_id: phase.target_id,
            };

            let response = self
                .http_client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|err| CopyError::RemoteRequest {
                    url: url.clone(),
                    source: err,
                })?;

            match response.status() {
                reqwest::StatusCode::OK => {}
                reqwest::StatusCode::NOT_FOUND => {
                    tracing::warn!(
                        "Copy not supported for phase type '{}', skipping configuration",
                        phase_type.name
                    );
                }
                status => {
                    return Err(CopyError::RemotePropagation {
                        phase_type: phase_type.name.clone(),
                        status: status.as_u16(),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}
