//! Application form domain models and edit parameters.
//!
//! The form editor and the replication engine share one write path,
//! `ApplicationFormService::apply_form_edits`, which consumes the
//! `ApplicationFormUpdate` parameter type defined here.

use uuid::Uuid;

use crate::model::application::{
    ApplicationFormDto, CreateFileUploadQuestionDto, CreateMultiSelectQuestionDto,
    CreateTextQuestionDto, FileUploadQuestionDto, MultiSelectQuestionDto, TextQuestionDto,
    UpdateApplicationFormDto,
};

/// Field set of a free-text question, without identifiers.
#[derive(Debug, Clone)]
pub struct TextQuestionData {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub validation_regex: String,
    pub error_message: String,
    pub is_required: bool,
    pub allowed_length: i32,
    pub order_num: i32,
}

impl TextQuestionData {
    /// Extracts the copyable fields of an existing question.
    pub fn from_entity(entity: &entity::application_question_text::Model) -> Self {
        Self {
            title: entity.title.clone(),
            description: entity.description.clone(),
            placeholder: entity.placeholder.clone(),
            validation_regex: entity.validation_regex.clone(),
            error_message: entity.error_message.clone(),
            is_required: entity.is_required,
            allowed_length: entity.allowed_length,
            order_num: entity.order_num,
        }
    }

    pub fn from_dto(dto: CreateTextQuestionDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            placeholder: dto.placeholder,
            validation_regex: dto.validation_regex,
            error_message: dto.error_message,
            is_required: dto.is_required,
            allowed_length: dto.allowed_length,
            order_num: dto.order_num,
        }
    }
}

/// Field set of a multi-select question, without identifiers.
#[derive(Debug, Clone)]
pub struct MultiSelectQuestionData {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub error_message: String,
    pub is_required: bool,
    pub min_select: i32,
    pub max_select: i32,
    pub options: serde_json::Value,
    pub order_num: i32,
}

impl MultiSelectQuestionData {
    pub fn from_entity(entity: &entity::application_question_multi_select::Model) -> Self {
        Self {
            title: entity.title.clone(),
            description: entity.description.clone(),
            placeholder: entity.placeholder.clone(),
            error_message: entity.error_message.clone(),
            is_required: entity.is_required,
            min_select: entity.min_select,
            max_select: entity.max_select,
            options: entity.options.clone(),
            order_num: entity.order_num,
        }
    }

    pub fn from_dto(dto: CreateMultiSelectQuestionDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            placeholder: dto.placeholder,
            error_message: dto.error_message,
            is_required: dto.is_required,
            min_select: dto.min_select,
            max_select: dto.max_select,
            options: dto.options,
            order_num: dto.order_num,
        }
    }
}

/// Field set of a file-upload question, without identifiers.
#[derive(Debug, Clone)]
pub struct FileUploadQuestionData {
    pub title: String,
    pub description: String,
    pub error_message: String,
    pub is_required: bool,
    pub allowed_file_types: serde_json::Value,
    pub max_file_size_mb: i32,
    pub order_num: i32,
}

impl FileUploadQuestionData {
    pub fn from_entity(entity: &entity::application_question_file_upload::Model) -> Self {
        Self {
            title: entity.title.clone(),
            description: entity.description.clone(),
            error_message: entity.error_message.clone(),
            is_required: entity.is_required,
            allowed_file_types: entity.allowed_file_types.clone(),
            max_file_size_mb: entity.max_file_size_mb,
            order_num: entity.order_num,
        }
    }

    pub fn from_dto(dto: CreateFileUploadQuestionDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            error_message: dto.error_message,
            is_required: dto.is_required,
            allowed_file_types: dto.allowed_file_types,
            max_file_size_mb: dto.max_file_size_mb,
            order_num: dto.order_num,
        }
    }
}

/// Update of an existing question, addressed by id.
#[derive(Debug, Clone)]
pub struct QuestionUpdate<T> {
    pub id: Uuid,
    pub data: T,
}

/// One batch of application form edits.
///
/// Deletions are applied first, then creations, then updates, so a single
/// batch can replace a question under the same ordering number.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFormUpdate {
    pub delete_question_ids: Vec<Uuid>,
    pub create_text_questions: Vec<TextQuestionData>,
    pub update_text_questions: Vec<QuestionUpdate<TextQuestionData>>,
    pub create_multi_select_questions: Vec<MultiSelectQuestionData>,
    pub update_multi_select_questions: Vec<QuestionUpdate<MultiSelectQuestionData>>,
    pub create_file_upload_questions: Vec<FileUploadQuestionData>,
    pub update_file_upload_questions: Vec<QuestionUpdate<FileUploadQuestionData>>,
}

impl ApplicationFormUpdate {
    pub fn from_dto(dto: UpdateApplicationFormDto) -> Self {
        Self {
            delete_question_ids: dto.delete_question_ids,
            create_text_questions: dto
                .create_text_questions
                .into_iter()
                .map(TextQuestionData::from_dto)
                .collect(),
            update_text_questions: dto
                .update_text_questions
                .into_iter()
                .map(|q| QuestionUpdate {
                    id: q.id,
                    data: TextQuestionData {
                        title: q.title,
                        description: q.description,
                        placeholder: q.placeholder,
                        validation_regex: q.validation_regex,
                        error_message: q.error_message,
                        is_required: q.is_required,
                        allowed_length: q.allowed_length,
                        order_num: q.order_num,
                    },
                })
                .collect(),
            create_multi_select_questions: dto
                .create_multi_select_questions
                .into_iter()
                .map(MultiSelectQuestionData::from_dto)
                .collect(),
            update_multi_select_questions: dto
                .update_multi_select_questions
                .into_iter()
                .map(|q| QuestionUpdate {
                    id: q.id,
                    data: MultiSelectQuestionData {
                        title: q.title,
                        description: q.description,
                        placeholder: q.placeholder,
                        error_message: q.error_message,
                        is_required: q.is_required,
                        min_select: q.min_select,
                        max_select: q.max_select,
                        options: q.options,
                        order_num: q.order_num,
                    },
                })
                .collect(),
            create_file_upload_questions: dto
                .create_file_upload_questions
                .into_iter()
                .map(FileUploadQuestionData::from_dto)
                .collect(),
            update_file_upload_questions: dto
                .update_file_upload_questions
                .into_iter()
                .map(|q| QuestionUpdate {
                    id: q.id,
                    data: FileUploadQuestionData {
                        title: q.title,
                        description: q.description,
                        error_message: q.error_message,
                        is_required: q.is_required,
                        allowed_file_types: q.allowed_file_types,
                        max_file_size_mb: q.max_file_size_mb,
                        order_num: q.order_num,
                    },
                })
                .collect(),
        }
    }
}

/// The complete question set of an application phase.
pub struct ApplicationForm {
    pub text_questions: Vec<entity::application_question_text::Model>,
    pub multi_select_questions: Vec<entity::application_question_multi_select::Model>,
    pub file_upload_questions: Vec<entity::application_question_file_upload::Model>,
}

impl ApplicationForm {
    pub fn into_dto(self) -> ApplicationFormDto {
        ApplicationFormDto {
            text_questions: self
                .text_questions
                .into_iter()
                .map(|q| TextQuestionDto {
                    id: q.id,
                    course_phase_id: q.course_phase_id,
                    title: q.title,
                    description: q.description,
                    placeholder: q.placeholder,
                    validation_regex: q.validation_regex,
                    error_message: q.error_message,
                    is_required: q.is_required,
                    allowed_length: q.allowed_length,
                    order_num: q.order_num,
                })
                .collect(),
            multi_select_questions: self
                .multi_select_questions
                .into_iter()
                .map(|q| MultiSelectQuestionDto {
                    id: q.id,
                    course_phase_id: q.course_phase_id,
                    title: q.title,
                    description: q.description,
                    placeholder: q.placeholder,
                    error_message: q.error_message,
                    is_required: q.is_required,
                    min_select: q.min_select,
                    max_select: q.max_select,
                    options: q.options,
                    order_num: q.order_num,
                })
                .collect(),
            file_upload_questions: self
                .file_upload_questions
                .into_iter()
                .map(|q| FileUploadQuestionDto {
                    id: q.id,
                    course_phase_id: q.course_phase_id,
                    title: q.title,
                    description: q.description,
                    error_message: q.error_message,
                    is_required: q.is_required,
                    allowed_file_types: q.allowed_file_types,
                    max_file_size_mb: q.max_file_size_mb,
                    order_num: q.order_num,
                })
                .collect(),
        }
    }
}
