use sea_orm::entity::prelude::*;

/// Directed edge of the phase ordering DAG: from-phase precedes to-phase.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_phase_graph")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub from_course_phase_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub to_course_phase_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_phase::Entity",
        from = "Column::FromCoursePhaseId",
        to = "super::course_phase::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FromCoursePhase,
    #[sea_orm(
        belongs_to = "super::course_phase::Entity",
        from = "Column::ToCoursePhaseId",
        to = "super::course_phase::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ToCoursePhase,
}

impl ActiveModelBehavior for ActiveModel {}
