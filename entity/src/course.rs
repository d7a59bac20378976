use sea_orm::entity::prelude::*;

/// A course with its lifecycle window and opaque metadata blobs.
///
/// `restricted_data` and `student_readable_data` are free-form JSON documents
/// owned by the instructors and the students respectively. The core never
/// inspects their shape; the replication engine copies them verbatim.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub semester_tag: String,
    pub course_type: String,
    pub ects: i32,
    pub restricted_data: Json,
    pub student_readable_data: Json,
    pub template: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_phase::Entity")]
    CoursePhase,
}

impl Related<super::course_phase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoursePhase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
