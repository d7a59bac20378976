use sea_orm_migration::{prelude::*, schema::*};

use super::m20260212_000004_create_course_phase_table::CoursePhase;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationQuestionFileUpload::Table)
                    .if_not_exists()
                    .col(pk_uuid(ApplicationQuestionFileUpload::Id))
                    .col(uuid(ApplicationQuestionFileUpload::CoursePhaseId))
                    .col(string(ApplicationQuestionFileUpload::Title))
                    .col(string(ApplicationQuestionFileUpload::Description))
                    .col(string(ApplicationQuestionFileUpload::ErrorMessage))
                    .col(boolean(ApplicationQuestionFileUpload::IsRequired))
                    .col(json(ApplicationQuestionFileUpload::AllowedFileTypes))
                    .col(integer(ApplicationQuestionFileUpload::MaxFileSizeMb))
                    .col(integer(ApplicationQuestionFileUpload::OrderNum))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_question_file_upload_course_phase_id")
                            .from(
                                ApplicationQuestionFileUpload::Table,
                                ApplicationQuestionFileUpload::CoursePhaseId,
                            )
                            .to(CoursePhase::Table, CoursePhase::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ApplicationQuestionFileUpload::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationQuestionFileUpload {
    Table,
    Id,
    CoursePhaseId,
    Title,
    Description,
    ErrorMessage,
    IsRequired,
    AllowedFileTypes,
    MaxFileSizeMb,
    OrderNum,
}
