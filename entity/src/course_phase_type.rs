use sea_orm::entity::prelude::*;

/// A reusable phase implementation and the base URL of the service owning it.
///
/// Phase types are shared infrastructure, not per-course instances. A type
/// whose `base_url` equals the core's own base URL is core-owned and has no
/// remote configuration to replicate.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_phase_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub base_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_phase::Entity")]
    CoursePhase,
    #[sea_orm(has_many = "super::phase_type_dto::Entity")]
    PhaseTypeDto,
}

impl Related<super::course_phase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoursePhase.def()
    }
}

impl Related<super::phase_type_dto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PhaseTypeDto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
