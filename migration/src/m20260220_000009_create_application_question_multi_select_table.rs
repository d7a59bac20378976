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
                    .table(ApplicationQuestionMultiSelect::Table)
                    .if_not_exists()
                    .col(pk_uuid(ApplicationQuestionMultiSelect::Id))
                    .col(uuid(ApplicationQuestionMultiSelect::CoursePhaseId))
                    .col(string(ApplicationQuestionMultiSelect::Title))
                    .col(string(ApplicationQuestionMultiSelect::Description))
                    .col(string(ApplicationQuestionMultiSelect::Placeholder))
                    .col(string(ApplicationQuestionMultiSelect::ErrorMessage))
                    .col(boolean(ApplicationQuestionMultiSelect::IsRequired))
                    .col(integer(ApplicationQuestionMultiSelect::MinSelect))
                    .col(integer(ApplicationQuestionMultiSelect::MaxSelect))
                    .col(json(ApplicationQuestionMultiSelect::Options))
                    .col(integer(ApplicationQuestionMultiSelect::OrderNum))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_question_multi_select_course_phase_id")
                            .from(
                                ApplicationQuestionMultiSelect::Table,
                                ApplicationQuestionMultiSelect::CoursePhaseId,
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
                    .table(ApplicationQuestionMultiSelect::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationQuestionMultiSelect {
    Table,
    Id,
    CoursePhaseId,
    Title,
    Description,
    Placeholder,
    ErrorMessage,
    IsRequired,
    MinSelect,
    MaxSelect,
    Options,
    OrderNum,
}
