//! Application form duplication between two courses.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{
    data::course_phase::CoursePhaseRepository,
    error::AppError,
    model::application::{
        ApplicationFormUpdate, FileUploadQuestionData, MultiSelectQuestionData, TextQuestionData,
    },
    service::application_form::ApplicationFormService,
};

pub struct ApplicationFormDuplicator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationFormDuplicator<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Copies the source course's application questions to the target course.
    ///
    /// The step is skipped entirely when either course has no application
    /// phase; that is a regular situation, not an error. Questions are copied
    /// through the same edit path the form editor uses, as pure creations:
    /// every field except the identifiers carries over, and nothing on the
    /// freshly created target form is updated or deleted.
    ///
    /// # Arguments
    /// - `source_course_id` - Course whose form is read
    /// - `target_course_id` - Course whose application phase receives the copies
    pub async fn duplicate(
        &self,
        source_course_id: Uuid,
        target_course_id: Uuid,
    ) -> Result<(), AppError> {
        let phase_repo = CoursePhaseRepository::new(self.db);

        let Some(source_phase) = phase_repo.get_application_phase(source_course_id).await? else {
            tracing::debug!("Source course has no application phase, skipping form copy");
            return Ok(());
        };
        let Some(target_phase) = phase_repo.get_application_phase(target_course_id).await? else {
            tracing::debug!("Target course has no application phase, skipping form copy");
            return Ok(());
        };

        let form_service = ApplicationFormService::new(self.db);

        let form = form_service.get_form(source_phase.id).await?;

        let update = ApplicationFormUpdate {
            create_text_questions: form
                .text_questions
                .iter()
                .map(TextQuestionData::from_entity)
                .collect(),
            create_multi_select_questions: form
                .multi_select_questions
                .iter()
                .map(MultiSelectQuestionData::from_entity)
                .collect(),
            create_file_upload_questions: form
                .file_upload_questions
                .iter()
                .map(FileUploadQuestionData::from_entity)
                .collect(),
            ..Default::default()
        };

        form_service.apply_form_edits(target_phase.id, update).await
    }
}
