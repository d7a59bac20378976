//! Application form reads and edits.
//!
//! `apply_form_edits` is the single write path for application questions. The
//! form editor endpoint and the replication engine's form duplicator both go
//! through it, so the application-phase guard holds for every caller.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{
    data::{
        application_question::ApplicationQuestionRepository, course_phase::CoursePhaseRepository,
    },
    error::AppError,
    model::application::{ApplicationForm, ApplicationFormUpdate},
};

pub struct ApplicationFormService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationFormService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads the complete question set of an application phase.
    ///
    /// # Arguments
    /// - `phase_id` - The application phase to read
    ///
    /// # Returns
    /// - `Ok(ApplicationForm)` - All three question variant sets
    /// - `Err(AppError::BadRequest)` - The phase is not an application phase
    pub async fn get_form(&self, phase_id: Uuid) -> Result<ApplicationForm, AppError> {
        self.require_application_phase(phase_id).await?;

        let form = ApplicationQuestionRepository::new(self.db)
            .get_by_phase_id(phase_id)
            .await?;

        Ok(form)
    }

    /// Applies one batch of form edits to an application phase.
    ///
    /// Deletions run first, then creations, then updates. The batch is not
    /// atomic by itself; callers needing atomicity run it on a transaction
    /// handle.
    ///
    /// # Arguments
    /// - `phase_id` - The application phase to edit
    /// - `update` - Questions to delete, create, and update
    ///
    /// # Returns
    /// - `Ok(())` - All edits applied
    /// - `Err(AppError::BadRequest)` - The phase is not an application phase
    /// - `Err(AppError::DbErr)` - A question operation failed
    pub async fn apply_form_edits(
        &self,
        phase_id: Uuid,
        update: ApplicationFormUpdate,
    ) -> Result<(), AppError> {
        self.require_application_phase(phase_id).await?;

        let repo = ApplicationQuestionRepository::new(self.db);

        repo.delete_by_ids(update.delete_question_ids).await?;

        for question in update.create_text_questions {
            repo.create_text(phase_id, question).await?;
        }
        for question in update.create_multi_select_questions {
            repo.create_multi_select(phase_id, question).await?;
        }
        for question in update.create_file_upload_questions {
            repo.create_file_upload(phase_id, question).await?;
        }

        for question in update.update_text_questions {
            repo.update_text(question.id, question.data).await?;
        }
        for question in update.update_multi_select_questions {
            repo.update_multi_select(question.id, question.data).await?;
        }
        for question in update.update_file_upload_questions {
            repo.update_file_upload(question.id, question.data).await?;
        }

        Ok(())
    }

    /// Rejects any phase id that does not belong to an application phase.
    ///
    /// Question payloads must never be constructed against another phase type.
    async fn require_application_phase(&self, phase_id: Uuid) -> Result<(), AppError> {
        let is_application = CoursePhaseRepository::new(self.db)
            .is_application_phase(phase_id)
            .await?;

        if !is_application {
            return Err(AppError::BadRequest(format!(
                "Course phase {} is not an application phase",
                phase_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    use crate::server::model::application::{QuestionUpdate, TextQuestionData};

    const CORE_URL: &str = "http://core.local";

    fn text_question(title: &str, order_num: i32) -> TextQuestionData {
        TextQuestionData {
            title: title.to_string(),
            description: "Motivation".to_string(),
            placeholder: "Your answer".to_string(),
            validation_regex: String::new(),
            error_message: "Answer is invalid".to_string(),
            is_required: true,
            allowed_length: 300,
            order_num,
        }
    }

    /// Tests that edits against a non-application phase are rejected before
    /// any question payload is applied.
    #[tokio::test]
    async fn rejects_non_application_phase() {
        let test = TestBuilder::new().with_application_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, phase) = factory::helpers::create_course_with_phase(db, CORE_URL)
            .await
            .unwrap();

        let service = ApplicationFormService::new(db);

        let err = service
            .apply_form_edits(
                phase.id,
                ApplicationFormUpdate {
                    create_text_questions: vec![text_question("Why us?", 1)],
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));

        let question_count = entity::prelude::ApplicationQuestionText::find()
            .count(db)
            .await
            .unwrap();
        assert_eq!(question_count, 0);
    }

    /// Tests a mixed batch: delete one question, create one, update another.
    #[tokio::test]
    async fn applies_deletes_creates_and_updates() {
        let test = TestBuilder::new().with_application_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let course = factory::course::create_course(db).await.unwrap();
        let application_type =
            factory::course_phase_type::create_application_phase_type(db, CORE_URL)
                .await
                .unwrap();
        let phase = factory::course_phase::create_phase(db, course.id, application_type.id)
            .await
            .unwrap();

        let to_delete = factory::application_question::create_text_question(db, phase.id, 1)
            .await
            .unwrap();
        let to_update = factory::application_question::create_multi_select_question(db, phase.id, 2)
            .await
            .unwrap();

        let service = ApplicationFormService::new(db);

        let mut updated = crate::server::model::application::MultiSelectQuestionData::from_entity(
            &to_update,
        );
        updated.title = "Updated Devices".to_string();
        updated.max_select = 2;

        service
            .apply_form_edits(
                phase.id,
                ApplicationFormUpdate {
                    delete_question_ids: vec![to_delete.id],
                    create_text_questions: vec![text_question("Why us?", 3)],
                    update_multi_select_questions: vec![QuestionUpdate {
                        id: to_update.id,
                        data: updated,
                    }],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let form = service.get_form(phase.id).await.unwrap();

        assert_eq!(form.text_questions.len(), 1);
        assert_eq!(form.text_questions[0].title, "Why us?");
        assert!(form.text_questions.iter().all(|q| q.id != to_delete.id));

        assert_eq!(form.multi_select_questions.len(), 1);
        assert_eq!(form.multi_select_questions[0].title, "Updated Devices");
        assert_eq!(form.multi_select_questions[0].max_select, 2);
        // Fields outside the update keep their values.
        assert_eq!(form.multi_select_questions[0].options, to_update.options);
    }

    /// Tests that deletion ids may address any question variant.
    #[tokio::test]
    async fn deletes_across_variants() {
        let test = TestBuilder::new().with_application_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let course = factory::course::create_course(db).await.unwrap();
        let application_type =
            factory::course_phase_type::create_application_phase_type(db, CORE_URL)
                .await
                .unwrap();
        let phase = factory::course_phase::create_phase(db, course.id, application_type.id)
            .await
            .unwrap();

        let text = factory::application_question::create_text_question(db, phase.id, 1)
            .await
            .unwrap();
        let file = factory::application_question::create_file_upload_question(db, phase.id, 2)
            .await
            .unwrap();

        let service = ApplicationFormService::new(db);

        service
            .apply_form_edits(
                phase.id,
                ApplicationFormUpdate {
                    delete_question_ids: vec![text.id, file.id],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let form = service.get_form(phase.id).await.unwrap();
        assert!(form.text_questions.is_empty());
        assert!(form.multi_select_questions.is_empty());
        assert!(form.file_upload_questions.is_empty());
    }
}
