use crate::server::{
    data::course_phase::CoursePhaseRepository, model::course::CreateCoursePhaseParams,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod application_phase;
mod create;
mod get_by_course_id;
mod initial_phase;

const CORE_URL: &str = "http://core.local";
