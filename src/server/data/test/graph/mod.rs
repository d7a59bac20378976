use crate::server::data::{
    course_phase_graph::CoursePhaseGraphRepository,
    data_graph::{DataEdge, ParticipationDataGraphRepository, PhaseDataGraphRepository},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod ordering;
mod participation_data;
mod phase_data;

const CORE_URL: &str = "http://core.local";
