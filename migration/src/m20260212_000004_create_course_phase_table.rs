use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260212_000001_create_course_table::Course,
    m20260212_000002_create_course_phase_type_table::CoursePhaseType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoursePhase::Table)
                    .if_not_exists()
                    .col(pk_uuid(CoursePhase::Id))
                    .col(uuid(CoursePhase::CourseId))
                    .col(string(CoursePhase::Name))
                    .col(boolean(CoursePhase::IsInitialPhase))
                    .col(json(CoursePhase::RestrictedData))
                    .col(json(CoursePhase::StudentReadableData))
                    .col(uuid(CoursePhase::CoursePhaseTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_phase_course_id")
                            .from(CoursePhase::Table, CoursePhase::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_phase_course_phase_type_id")
                            .from(CoursePhase::Table, CoursePhase::CoursePhaseTypeId)
                            .to(CoursePhaseType::Table, CoursePhaseType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CoursePhase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CoursePhase {
    Table,
    Id,
    CourseId,
    Name,
    IsInitialPhase,
    RestrictedData,
    StudentReadableData,
    CoursePhaseTypeId,
}
