use crate::server::{data::course::CourseRepository, model::course::CreateCourseParams};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
