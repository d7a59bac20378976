use sea_orm::entity::prelude::*;

/// Per-participation data-dependency edge.
///
/// Same shape as the phase-level graph but evaluated once per enrolled
/// student participation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "participation_data_graph")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub from_course_phase_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub from_dto_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub to_course_phase_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub to_dto_id: Uuid,
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
    #[sea_orm(
        belongs_to = "super::phase_type_dto::Entity",
        from = "Column::FromDtoId",
        to = "super::phase_type_dto::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FromDto,
    #[sea_orm(
        belongs_to = "super::phase_type_dto::Entity",
        from = "Column::ToDtoId",
        to = "super::phase_type_dto::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ToDto,
}

impl ActiveModelBehavior for ActiveModel {}
