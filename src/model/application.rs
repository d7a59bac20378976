use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Free-text question as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TextQuestionDto {
    pub id: Uuid,
    pub course_phase_id: Uuid,
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub validation_regex: String,
    pub error_message: String,
    pub is_required: bool,
    pub allowed_length: i32,
    pub order_num: i32,
}

/// Free-text question creation payload; the server mints the id.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateTextQuestionDto {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub validation_regex: String,
    pub error_message: String,
    pub is_required: bool,
    pub allowed_length: i32,
    pub order_num: i32,
}

/// Multi-select question as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MultiSelectQuestionDto {
    pub id: Uuid,
    pub course_phase_id: Uuid,
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub error_message: String,
    pub is_required: bool,
    pub min_select: i32,
    pub max_select: i32,
    #[schema(value_type = Vec<String>)]
    pub options: serde_json::Value,
    pub order_num: i32,
}

/// Multi-select question creation payload; the server mints the id.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateMultiSelectQuestionDto {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub error_message: String,
    pub is_required: bool,
    pub min_select: i32,
    pub max_select: i32,
    #[schema(value_type = Vec<String>)]
    pub options: serde_json::Value,
    pub order_num: i32,
}

/// File-upload question as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct FileUploadQuestionDto {
    pub id: Uuid,
    pub course_phase_id: Uuid,
    pub title: String,
    pub description: String,
    pub error_message: String,
    pub is_required: bool,
    #[schema(value_type = Vec<String>)]
    pub allowed_file_types: serde_json::Value,
    pub max_file_size_mb: i32,
    pub order_num: i32,
}

/// File-upload question creation payload; the server mints the id.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateFileUploadQuestionDto {
    pub title: String,
    pub description: String,
    pub error_message: String,
    pub is_required: bool,
    #[schema(value_type = Vec<String>)]
    pub allowed_file_types: serde_json::Value,
    pub max_file_size_mb: i32,
    pub order_num: i32,
}

/// The complete question set of an application phase.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApplicationFormDto {
    pub text_questions: Vec<TextQuestionDto>,
    pub multi_select_questions: Vec<MultiSelectQuestionDto>,
    pub file_upload_questions: Vec<FileUploadQuestionDto>,
}

/// One batch of edits to an application form.
///
/// Deletions are applied first, then creations, then updates. Question ids in
/// `delete_question_ids` may belong to any of the three variants.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateApplicationFormDto {
    #[serde(default)]
    pub delete_question_ids: Vec<Uuid>,
    #[serde(default)]
    pub create_text_questions: Vec<CreateTextQuestionDto>,
    #[serde(default)]
    pub update_text_questions: Vec<TextQuestionDto>,
    #[serde(default)]
    pub create_multi_select_questions: Vec<CreateMultiSelectQuestionDto>,
    #[serde(default)]
    pub update_multi_select_questions: Vec<MultiSelectQuestionDto>,
    #[serde(default)]
    pub create_file_upload_questions: Vec<CreateFileUploadQuestionDto>,
    #[serde(default)]
    pub update_file_upload_questions: Vec<FileUploadQuestionDto>,
}
