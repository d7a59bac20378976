use sea_orm::entity::prelude::*;

/// A named, versioned data contract advertised by a phase type.
///
/// `direction` is `"provided"` or `"required"`, `level` is `"phase"` or
/// `"participation"`; together they model the four descriptor sets a phase
/// type advertises. Dependency-graph edges reference these rows by id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "phase_type_dto")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_phase_type_id: Uuid,
    pub name: String,
    pub version: i32,
    pub endpoint_path: String,
    pub direction: String,
    pub level: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_phase_type::Entity",
        from = "Column::CoursePhaseTypeId",
        to = "super::course_phase_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CoursePhaseType,
}

impl Related<super::course_phase_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoursePhaseType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
