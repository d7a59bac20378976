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
                    .table(ParticipationDataGraph::Table)
                    .if_not_exists()
                    .col(uuid(ParticipationDataGraph::FromCoursePhaseId))
                    .col(uuid(ParticipationDataGraph::FromDtoId))
                    .col(uuid(ParticipationDataGraph::ToCoursePhaseId))
                    .col(uuid(ParticipationDataGraph::ToDtoId))
                    .primary_key(
                        Index::create()
                            .col(ParticipationDataGraph::FromCoursePhaseId)
                            .col(ParticipationDataGraph::FromDtoId)
                            .col(ParticipationDataGraph::ToCoursePhaseId)
                            .col(ParticipationDataGraph::ToDtoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_data_graph_from_course_phase_id")
                            .from(
                                ParticipationDataGraph::Table,
                                ParticipationDataGraph::FromCoursePhaseId,
                            )
                            .to(CoursePhase::Table, CoursePhase::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_data_graph_to_course_phase_id")
                            .from(
                                ParticipationDataGraph::Table,
                                ParticipationDataGraph::ToCoursePhaseId,
                            )
                            .to(CoursePhase::Table, CoursePhase::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_data_graph_from_dto_id")
                            .from(
                                ParticipationDataGraph::Table,
                                ParticipationDataGraph::FromDtoId,
                            )
                            .to(PhaseTypeDto::Table, PhaseTypeDto::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_data_graph_to_dto_id")
                            .from(
                                ParticipationDataGraph::Table,
                                ParticipationDataGraph::ToDtoId,
                            )
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
            .drop_table(Table::drop().table(ParticipationDataGraph::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParticipationDataGraph {
    Table,
    FromCoursePhaseId,
    FromDtoId,
    ToCoursePhaseId,
    ToDtoId,
}
