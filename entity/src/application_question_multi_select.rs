use sea_orm::entity::prelude::*;

/// Multi-select question of an application form.
///
/// `options` is a JSON array of strings; `min_select`/`max_select` bound how
/// many of them an applicant must pick.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "application_question_multi_select")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_phase_id: Uuid,
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub error_message: String,
    pub is_required: bool,
    pub min_select: i32,
    pub max_select: i32,
    pub options: Json,
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
