use crate::server::{
    data::application_question::ApplicationQuestionRepository,
    model::application::TextQuestionData,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_by_phase_id;

const CORE_URL: &str = "http://core.local";

async fn create_application_phase(
    db: &sea_orm::DatabaseConnection,
) -> Result<entity::course_phase::Model, DbErr> {
    let course = factory::course::create_course(db).await?;
    let application_type =
        factory::course_phase_type::create_application_phase_type(db, CORE_URL).await?;
    factory::course_phase::create_phase(db, course.id, application_type.id).await
}
