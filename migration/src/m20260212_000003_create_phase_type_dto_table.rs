use sea_orm_migration::{prelude::*, schema::*};

use super::m20260212_000002_create_course_phase_type_table::CoursePhaseType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhaseTypeDto::Table)
                    .if_not_exists()
                    .col(pk_uuid(PhaseTypeDto::Id))
                    .col(uuid(PhaseTypeDto::CoursePhaseTypeId))
                    .col(string(PhaseTypeDto::Name))
                    .col(integer(PhaseTypeDto::Version))
                    .col(string(PhaseTypeDto::EndpointPath))
                    .col(string(PhaseTypeDto::Direction))
                    .col(string(PhaseTypeDto::Level))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phase_type_dto_course_phase_type_id")
                            .from(PhaseTypeDto::Table, PhaseTypeDto::CoursePhaseTypeId)
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
            .drop_table(Table::drop().table(PhaseTypeDto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PhaseTypeDto {
    Table,
    Id,
    CoursePhaseTypeId,
    Name,
    Version,
    EndpointPath,
    Direction,
    Level,
}
