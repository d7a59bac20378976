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
                    .table(CoursePhaseGraph::Table)
                    .if_not_exists()
                    .col(uuid(CoursePhaseGraph::FromCoursePhaseId))
                    .col(uuid(CoursePhaseGraph::ToCoursePhaseId))
                    .primary_key(
                        Index::create()
                            .col(CoursePhaseGraph::FromCoursePhaseId)
                            .col(CoursePhaseGraph::ToCoursePhaseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_phase_graph_from_course_phase_id")
                            .from(CoursePhaseGraph::Table, CoursePhaseGraph::FromCoursePhaseId)
                            .to(CoursePhase::Table, CoursePhase::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_phase_graph_to_course_phase_id")
                            .from(CoursePhaseGraph::Table, CoursePhaseGraph::ToCoursePhaseId)
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
            .drop_table(Table::drop().table(CoursePhaseGraph::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CoursePhaseGraph {
    Table,
    FromCoursePhaseId,
    ToCoursePhaseId,
}
