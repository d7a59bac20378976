use thiserror::Error;
use uuid::Uuid;

/// Failures raised by the course replication engine.
#[derive(Error, Debug)]
pub enum CopyError {
    /// An edge endpoint did not resolve through the id map built for this copy.
    ///
    /// Every phase and DTO descriptor referenced by a graph edge must have been
    /// registered before graph duplication runs. A miss means the source
    /// course's graphs reference an entity outside the course and the whole
    /// copy is aborted rather than dropping the edge.
    #[error("No {kind} mapping for id {id}")]
    MissingMapping {
        /// What kind of endpoint failed to resolve ("course phase" or "dto descriptor")
        kind: &'static str,
        /// The unresolved source-side id
        id: Uuid,
    },

    /// A remote phase owner rejected the configuration copy request.
    ///
    /// Raised after the core transaction has committed; the core copy is kept
    /// and this error is surfaced to the operator as a degraded result. A 404
    /// never produces this error, it means the phase type does not implement
    /// copy and is skipped with a warning instead.
    #[error("Copying phase configuration for type '{phase_type}' failed with status {status}")]
    RemotePropagation {
        /// Name of the phase type whose owner rejected the request
        phase_type: String,
        /// HTTP status returned by the owner
        status: u16,
    },

    /// The copy request to a remote phase owner could not be delivered.
    #[error("Copy request to '{url}' failed: {source}")]
    RemoteRequest {
        /// The copy endpoint that was called
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
