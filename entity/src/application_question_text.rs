use sea_orm::entity::prelude::*;

/// Free-text question of an application form.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "application_question_text")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_phase_id: Uuid,
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub validation_regex: String,
    pub error_message: String,
    pub is_required: bool,
    pub allowed_length: i32,
    pub order_num: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_phase::Entity",
        from = "Column::CoursePhaseId",
        to = "super::course_phase::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CoursePhase,
}

impl Related<super::course_phase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoursePhase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
