//! SeaORM entity definitions for all coursehub tables.
//!
//! One module per table. The `prelude` module re-exports every entity under
//! its type name for use with `EntityTrait` queries.

pub mod application_question_file_upload;
pub mod application_question_multi_select;
pub mod application_question_text;
pub mod course;
pub mod course_phase;
pub mod course_phase_graph;
pub mod course_phase_type;
pub mod participation_data_graph;
pub mod phase_data_graph;
pub mod phase_type_dto;

pub mod prelude;
