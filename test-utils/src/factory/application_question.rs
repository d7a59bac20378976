//! Application question factories for the three question variants.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a free-text question for the given application phase.
pub async fn create_text_question(
    db: &DatabaseConnection,
    course_phase_id: Uuid,
    order_num: i32,
) -> Result<entity::application_question_text::Model, DbErr> {
    let id = next_id();
    entity::application_question_text::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        course_phase_id: ActiveValue::Set(course_phase_id),
        title: ActiveValue::Set(format!("Text Question {}", id)),
        description: ActiveValue::Set("Tell us about yourself".to_string()),
        placeholder: ActiveValue::Set("Your answer".to_string()),
        validation_regex: ActiveValue::Set(String::new()),
        error_message: ActiveValue::Set("Answer is invalid".to_string()),
        is_required: ActiveValue::Set(true),
        allowed_length: ActiveValue::Set(500),
        order_num: ActiveValue::Set(order_num),
    }
    .insert(db)
    .await
}

/// Creates a multi-select question for the given application phase.
pub async fn create_multi_select_question(
    db: &DatabaseConnection,
    course_phase_id: Uuid,
    order_num: i32,
) -> Result<entity::application_question_multi_select::Model, DbErr> {
    let id = next_id();
    entity::application_question_multi_select::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        course_phase_id: ActiveValue::Set(course_phase_id),
        title: ActiveValue::Set(format!("Multi Select Question {}", id)),
        description: ActiveValue::Set("Pick your devices".to_string()),
        placeholder: ActiveValue::Set("Select one or more".to_string()),
        error_message: ActiveValue::Set("Selection is invalid".to_string()),
        is_required: ActiveValue::Set(true),
        min_select: ActiveValue::Set(1),
        max_select: ActiveValue::Set(3),
        options: ActiveValue::Set(serde_json::json!(["iPhone", "iPad", "Mac"])),
        order_num: ActiveValue::Set(order_num),
    }
    .insert(db)
    .await
}

/// Creates a file-upload question for the given application phase.
pub async fn create_file_upload_question(
    db: &DatabaseConnection,
    course_phase_id: Uuid,
    order_num: i32,
) -> Result<entity::application_question_file_upload::Model, DbErr> {
    let id = next_id();
    entity::application_question_file_upload::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        course_phase_id: ActiveValue::Set(course_phase_id),
        title: ActiveValue::Set(format!("File Upload Question {}", id)),
        description: ActiveValue::Set("Upload your CV".to_string()),
        error_message: ActiveValue::Set("File is invalid".to_string()),
        is_required: ActiveValue::Set(false),
        allowed_file_types: ActiveValue::Set(serde_json::json!(["application/pdf"])),
        max_file_size_mb: ActiveValue::Set(10),
        order_num: ActiveValue::Set(order_num),
    }
    .insert(db)
    .await
}
