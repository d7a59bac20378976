use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::course::CreateCourseParams;

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a course by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    /// Creates a new course with a fresh id
    pub async fn create(&self, params: CreateCourseParams) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            semester_tag: ActiveValue::Set(params.semester_tag),
            course_type: ActiveValue::Set(params.course_type),
            ects: ActiveValue::Set(params.ects),
            restricted_data: ActiveValue::Set(params.restricted_data),
            student_readable_data: ActiveValue::Set(params.student_readable_data),
            template: ActiveValue::Set(params.template),
        }
        .insert(self.db)
        .await
    }
}
