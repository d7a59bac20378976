//! Pre-flight copyability probing of remote phase owners.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{course_phase::CoursePhaseRepository, course_phase_type::CoursePhaseTypeRepository},
    error::AppError,
    model::copy::RemoteCopyRequest,
};

pub struct CopyabilityProber<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    core_base_url: &'a str,
}

impl<'a> CopyabilityProber<'a> {
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

    /// Asks every remote phase owner of a course whether it supports copying.
    ///
    /// Sends a dry-run copy request (identical source and target ids) to each
    /// distinct owner base URL; owners must treat that as side-effect-free.
    /// Core-owned phase types are skipped, they have no remote configuration.
    /// A transport failure or a 404 classifies the owner as missing; any
    /// other status counts as supported. Probing mutates nothing, so two
    /// probes without remote-side changes report the same list.
    ///
    /// # Arguments
    /// - `course_id` - Course whose phases are probed
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - `"name (type)"` per phase type that cannot copy; empty
    ///   means fully copyable
    /// - `Err(AppError::DbErr)` - Reading phases or phase types failed
    pub async fn probe(&self, course_id: Uuid) -> Result<Vec<String>, AppError> {
        let phases = CoursePhaseRepository::new(self.db)
            .get_by_course_id(course_id)
            .await?;

        let type_ids: Vec<Uuid> = phases
            .iter()
            .map(|p| p.course_phase_type_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let phase_types = CoursePhaseTypeRepository::new(self.db)
            .get_by_ids(type_ids)
            .await?;

        // Owners are deduplicated by base URL string. Two phase types sharing
        // a base URL but differing in copy support would be reported as one;
        // the wire protocol cannot tell them apart today.
        let mut probed_urls: HashSet<String> = HashSet::new();
        let mut missing = Vec::new();

        for phase in &phases {
            let Some(phase_type) = phase_types.get(&phase.course_phase_type_id) else {
                continue;
            };

            if phase_type.base_url == self.core_base_url {
                continue;
            }
            if !probed_urls.insert(phase_type.base_url.clone()) {
                continue;
            }

            if !self.probe_owner(&phase_type.base_url, phase.id).await {
                missing.push(format!("{} ({})", phase.name, phase_type.name));
            }
        }

        Ok(missing)
    }

    /// Sends one dry-run copy request and classifies the answer.
    ///
    /// Returns whether the owner supports copying. Identical source and
    /// target ids mark the request as a no-op sentinel.
    async fn probe_owner(&self, base_url: &str, phase_id: Uuid) -> bool {
        let url = format!("{}/copy", base_url.trim_end_matches('/'));

        let request = RemoteCopyRequest {
            source_course_phase_id: phase_id,
            target_course_phase_id: phase_id,
        };

        match self.http_client.post(&url).json(&request).send().await {
            Ok(response) => response.status() != reqwest::StatusCode::NOT_FOUND,
            Err(err) => {
                tracing::warn!("Copyability probe against {} failed: {}", url, err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use axum::{http::StatusCode, routing::post, Router};
    use test_utils::{builder::TestBuilder, factory};

    const CORE_URL: &str = "http://core.local";

    /// Spawns a throwaway phase service that counts `/copy` hits and answers
    /// with a fixed status. Returns the base URL and the hit counter.
    async fn spawn_counting_owner(status: StatusCode) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler_hits = hits.clone();

        let app = Router::new().route(
            "/copy",
            post(move || {
                let hits = handler_hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    status
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), hits)
    }

    /// Tests that an owner answering 200 counts as supported while an owner
    /// answering 404 is reported missing.
    #[tokio::test]
    async fn classifies_owner_responses() {
        let test = TestBuilder::new().with_course_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (supported_url, _) = spawn_counting_owner(StatusCode::OK).await;
        let (missing_url, _) = spawn_counting_owner(StatusCode::NOT_FOUND).await;

        let course = factory::course::create_course(db).await.unwrap();
        let supported_type =
            factory::course_phase_type::create_named_phase_type(db, "Interview", &supported_url)
                .await
                .unwrap();
        let missing_type =
            factory::course_phase_type::create_named_phase_type(db, "TypeB", &missing_url)
                .await
                .unwrap();

        factory::course_phase::CoursePhaseFactory::new(db, course.id, supported_type.id)
            .name("Interview Phase")
            .build()
            .await
            .unwrap();
        factory::course_phase::CoursePhaseFactory::new(db, course.id, missing_type.id)
            .name("B")
            .build()
            .await
            .unwrap();

        let http_client = reqwest::Client::new();
        let prober = CopyabilityProber::new(db, &http_client, CORE_URL);

        let missing = prober.probe(course.id).await.unwrap();

        assert_eq!(missing, vec!["B (TypeB)".to_string()]);
    }

    /// Tests that an unreachable owner is classified as missing, not as an
    /// error of the probe itself.
    #[tokio::test]
    async fn unreachable_owner_is_missing() {
        let test = TestBuilder::new().with_course_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let course = factory::course::create_course(db).await.unwrap();
        // Nothing listens on port 1.
        let dead_type = factory::course_phase_type::create_named_phase_type(
            db,
            "DeadType",
            "http://127.0.0.1:1",
        )
        .await
        .unwrap();
        factory::course_phase::CoursePhaseFactory::new(db, course.id, dead_type.id)
            .name("Dead Phase")
            .build()
            .await
            .unwrap();

        let http_client = reqwest::Client::new();
        let prober = CopyabilityProber::new(db, &http_client, CORE_URL);

        let missing = prober.probe(course.id).await.unwrap();

        assert_eq!(missing, vec!["Dead Phase (DeadType)".to_string()]);
    }

    /// Tests that core-owned phase types are never probed.
    #[tokio::test]
    async fn skips_core_owned_phase_types() {
        let test = TestBuilder::new().with_course_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (course, _, _) = factory::helpers::create_course_with_phase(db, CORE_URL)
            .await
            .unwrap();

        let http_client = reqwest::Client::new();
        let prober = CopyabilityProber::new(db, &http_client, CORE_URL);

        let missing = prober.probe(course.id).await.unwrap();

        assert!(missing.is_empty());
    }

    /// Tests that one owner serving several phases is probed exactly once
    /// and reported at most once.
    #[tokio::test]
    async fn deduplicates_owners_by_base_url() {
        let test = TestBuilder::new().with_course_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (owner_url, hits) = spawn_counting_owner(StatusCode::NOT_FOUND).await;

        let course = factory::course::create_course(db).await.unwrap();
        let phase_type = factory::course_phase_type::create_named_phase_type(
            db,
            "SharedOwner",
            &owner_url,
        )
        .await
        .unwrap();

        for name in ["First", "Second", "Third"] {
            factory::course_phase::CoursePhaseFactory::new(db, course.id, phase_type.id)
                .name(name)
                .build()
                .await
                .unwrap();
        }

        let http_client = reqwest::Client::new();
        let prober = CopyabilityProber::new(db, &http_client, CORE_URL);

        let missing = prober.probe(course.id).await.unwrap();

        assert_eq!(missing.len(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    /// Tests that probing is idempotent: two runs against unchanged remote
    /// state report identical missing lists.
    #[tokio::test]
    async fn probing_twice_reports_the_same_result() {
        let test = TestBuilder::new().with_course_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (owner_url, _) = spawn_counting_owner(StatusCode::NOT_FOUND).await;

        let course = factory::course::create_course(db).await.unwrap();
        let phase_type =
            factory::course_phase_type::create_named_phase_type(db, "TypeB", &owner_url)
                .await
                .unwrap();
        factory::course_phase::CoursePhaseFactory::new(db, course.id, phase_type.id)
            .name("B")
            .build()
            .await
            .unwrap();

        let http_client = reqwest::Client::new();
        let prober = CopyabilityProber::new(db, &http_client, CORE_URL);

        let first = prober.probe(course.id).await.unwrap();
        let second = prober.probe(course.id).await.unwrap();

        assert_eq!(first, second);
    }
}
