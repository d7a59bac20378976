use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::application::{
    ApplicationForm, FileUploadQuestionData, MultiSelectQuestionData, TextQuestionData,
};

pub struct ApplicationQuestionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationQuestionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all three question variant sets of a phase, ordered by order number
    pub async fn get_by_phase_id(&self, phase_id: Uuid) -> Result<ApplicationForm, DbErr> {
        let text_questions = entity::prelude::ApplicationQuestionText::find()
            .filter(entity::application_question_text::Column::CoursePhaseId.eq(phase_id))
            .order_by_asc(entity::application_question_text::Column::OrderNum)
            .all(self.db)
            .await?;

        let multi_select_questions = entity::prelude::ApplicationQuestionMultiSelect::find()
            .filter(entity::application_question_multi_select::Column::CoursePhaseId.eq(phase_id))
            .order_by_asc(entity::application_question_multi_select::Column::OrderNum)
            .all(self.db)
            .await?;

        let file_upload_questions = entity::prelude::ApplicationQuestionFileUpload::find()
            .filter(entity::application_question_file_upload::Column::CoursePhaseId.eq(phase_id))
            .order_by_asc(entity::application_question_file_upload::Column::OrderNum)
            .all(self.db)
            .await?;

        Ok(ApplicationForm {
            text_questions,
            multi_select_questions,
            file_upload_questions,
        })
    }

    /// Creates a free-text question with a fresh id
    pub async fn create_text(
        &self,
        phase_id: Uuid,
        data: TextQuestionData,
    ) -> Result<entity::application_question_text::Model, DbErr> {
        entity::application_question_text::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            course_phase_id: ActiveValue::Set(phase_id),
            title: ActiveValue::Set(data.title),
            description: ActiveValue::Set(data.description),
            placeholder: ActiveValue::Set(data.placeholder),
            validation_regex: ActiveValue::Set(data.validation_regex),
            error_message: ActiveValue::Set(data.error_message),
            is_required: ActiveValue::Set(data.is_required),
            allowed_length: ActiveValue::Set(data.allowed_length),
            order_num: ActiveValue::Set(data.order_num),
        }
        .insert(self.db)
        .await
    }

    /// Creates a multi-select question with a fresh id
    pub async fn create_multi_select(
        &self,
        phase_id: Uuid,
        data: MultiSelectQuestionData,
    ) -> Result<entity::application_question_multi_select::Model, DbErr> {
        entity::application_question_multi_select::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            course_phase_id: ActiveValue::Set(phase_id),
            title: ActiveValue::Set(data.title),
            description: ActiveValue::Set(data.description),
            placeholder: ActiveValue::Set(data.placeholder),
            error_message: ActiveValue::Set(data.error_message),
            is_required: ActiveValue::Set(data.is_required),
            min_select: ActiveValue::Set(data.min_select),
            max_select: ActiveValue::Set(data.max_select),
            options: ActiveValue::Set(data.options),
            order_num: ActiveValue::Set(data.order_num),
        }
        .insert(self.db)
        .await
    }

    /// Creates a file-upload question with a fresh id
    pub async fn create_file_upload(
        &self,
        phase_id: Uuid,
        data: FileUploadQuestionData,
    ) -> Result<entity::application_question_file_upload::Model, DbErr> {
        entity::application_question_file_upload::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            course_phase_id: ActiveValue::Set(phase_id),
            title: ActiveValue::Set(data.title),
            description: ActiveValue::Set(data.description),
            error_message: ActiveValue::Set(data.error_message),
            is_required: ActiveValue::Set(data.is_required),
            allowed_file_types: ActiveValue::Set(data.allowed_file_types),
            max_file_size_mb: ActiveValue::Set(data.max_file_size_mb),
            order_num: ActiveValue::Set(data.order_num),
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the field set of an existing free-text question
    pub async fn update_text(&self, id: Uuid, data: TextQuestionData) -> Result<(), DbErr> {
        entity::application_question_text::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(data.title),
            description: ActiveValue::Set(data.description),
            placeholder: ActiveValue::Set(data.placeholder),
            validation_regex: ActiveValue::Set(data.validation_regex),
            error_message: ActiveValue::Set(data.error_message),
            is_required: ActiveValue::Set(data.is_required),
            allowed_length: ActiveValue::Set(data.allowed_length),
            order_num: ActiveValue::Set(data.order_num),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Overwrites the field set of an existing multi-select question
    pub async fn update_multi_select(
        &self,
        id: Uuid,
        data: MultiSelectQuestionData,
    ) -> Result<(), DbErr> {
        entity::application_question_multi_select::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(data.title),
            description: ActiveValue::Set(data.description),
            placeholder: ActiveValue::Set(data.placeholder),
            error_message: ActiveValue::Set(data.error_message),
            is_required: ActiveValue::Set(data.is_required),
            min_select: ActiveValue::Set(data.min_select),
            max_select: ActiveValue::Set(data.max_select),
            options: ActiveValue::Set(data.options),
            order_num: ActiveValue::Set(data.order_num),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Overwrites the field set of an existing file-upload question
    pub async fn update_file_upload(
        &self,
        id: Uuid,
        data: FileUploadQuestionData,
    ) -> Result<(), DbErr> {
        entity::application_question_file_upload::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(data.title),
            description: ActiveValue::Set(data.description),
            error_message: ActiveValue::Set(data.error_message),
            is_required: ActiveValue::Set(data.is_required),
            allowed_file_types: ActiveValue::Set(data.allowed_file_types),
            max_file_size_mb: ActiveValue::Set(data.max_file_size_mb),
            order_num: ActiveValue::Set(data.order_num),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes questions of any variant by id.
    ///
    /// Ids that match no row in a variant table are ignored; a delete batch may
    /// mix ids of all three variants.
    pub async fn delete_by_ids(&self, ids: Vec<Uuid>) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::ApplicationQuestionText::delete_many()
            .filter(entity::application_question_text::Column::Id.is_in(ids.clone()))
            .exec(self.db)
            .await?;

        entity::prelude::ApplicationQuestionMultiSelect::delete_many()
            .filter(entity::application_question_multi_select::Column::Id.is_in(ids.clone()))
            .exec(self.db)
            .await?;

        entity::prelude::ApplicationQuestionFileUpload::delete_many()
            .filter(entity::application_question_file_upload::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
