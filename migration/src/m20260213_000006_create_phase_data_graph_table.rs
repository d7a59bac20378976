use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260212_000003_create_phase_type_dto_table::PhaseTypeDto,
    m20260212_000004_create_course_phase_table::CoursePhase,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhaseDataGraph::Table)
                    .if_not_exists()
                    .col(uuid(PhaseDataGraph::FromCoursePhaseId))
                    .col(uuid(PhaseDataGraph::FromDtoId))
                    .col(uuid(PhaseDataGraph::ToCoursePhaseId))
                    .col(uuid(PhaseDataGraph::ToDtoId))
                    .primary_key(
                        Index::create()
                            .col(PhaseDataGraph::FromCoursePhaseId)
                            .col(PhaseDataGraph::FromDtoId)
                            .col(PhaseDataGraph::ToCoursePhaseId)
                            .col(PhaseDataGraph::ToDtoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phase_data_graph_from_course_phase_id")
                            .from(PhaseDataGraph::Table, PhaseDataGraph::FromCoursePhaseId)
                            .to(CoursePhase::Table, CoursePhase::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phase_data_graph_to_course_phase_id")
                            .from(PhaseDataGraph::Table, PhaseDataGraph::ToCoursePhaseId)
                            .to(CoursePhase::Table, CoursePhase::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phase_data_graph_from_dto_id")
                            .from(PhaseDataGraph::Table, PhaseDataGraph::FromDtoId)
                            .to(PhaseTypeDto::Table, PhaseTypeDto::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phase_data_graph_to_dto_id")
                            .from(PhaseDataGraph::Table, PhaseDataGraph::ToDtoId)
                            .to(PhaseTypeDto::Table, PhaseTypeDto::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PhaseDataGraph::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PhaseDataGraph {
    Table,
    FromCoursePhaseId,
    FromDtoId,
    ToCoursePhaseId,
    ToDtoId,
}
