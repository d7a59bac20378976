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
                    .table(ApplicationQuestionText::Table)
                    .if_not_exists()
                    .col(pk_uuid(ApplicationQuestionText::Id))
                    .col(uuid(ApplicationQuestionText::CoursePhaseId))
                    .col(string(ApplicationQuestionText::Title))
                    .col(string(ApplicationQuestionText::Description))
                    .col(string(ApplicationQuestionText::Placeholder))
                    .col(string(ApplicationQuestionText::ValidationRegex))
                    .col(string(ApplicationQuestionText::ErrorMessage))
                    .col(boolean(ApplicationQuestionText::IsRequired))
                    .col(integer(ApplicationQuestionText::AllowedLength))
                    .col(integer(ApplicationQuestionText::OrderNum))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_question_text_course_phase_id")
                            .from(
                                ApplicationQuestionText::Table,
                                ApplicationQuestionText::CoursePhaseId,
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
            .drop_table(Table::drop().table(ApplicationQuestionText::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationQuestionText {
    Table,
    Id,
    CoursePhaseId,
    Title,
    Description,
    Placeholder,
    ValidationRegex,
    ErrorMessage,
    IsRequired,
    AllowedLength,
    OrderNum,
}
