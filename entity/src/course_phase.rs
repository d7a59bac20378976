use sea_orm::entity::prelude::*;

/// One stage of a course's lifecycle, bound to a phase type implementation.
///
/// A phase may or may not appear in the ordering graph; an unsequenced phase
/// is still a full member of the course. At most one phase per course carries
/// `is_initial_phase = true`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_phase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub is_initial_phase: bool,
    pub restricted_data: Json,
    pub student_readable_data: Json,
    pub course_phase_type_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::course_phase_type::Entity",
        from = "Column::CoursePhaseTypeId",
        to = "super::course_phase_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CoursePhaseType,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::course_phase_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoursePhaseType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
