use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One phase cloned by the phase duplicator.
///
/// Carries the pair of ids the remote configuration propagator forwards to
/// the owning phase service, plus the phase type for owner lookup.
#[derive(Debug, Clone)]
pub struct CopiedPhase {
    pub source_id: Uuid,
    pub target_id: Uuid,
    pub course_phase_type_id: Uuid,
}

/// Body of the remote copy protocol.
///
/// POSTed to `<ownerBaseURL>/copy`. Owners must treat identical source and
/// target ids as a side-effect-free dry run; the copyability prober relies
/// on that contract.
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoteCopyRequest {
    #[serde(rename = "sourceCoursePhaseID")]
    pub source_course_phase_id: Uuid,
    #[serde(rename = "targetCoursePhaseID")]
    pub target_course_phase_id: Uuid,
}
