//! Factory methods for creating test entities.
//!
//! Factories insert rows with sensible defaults into the test database,
//! reducing boilerplate in tests. Builders allow overriding individual
//! fields where a test needs specific values.

pub mod application_question;
pub mod course;
pub mod course_phase;
pub mod course_phase_type;
pub mod helpers;
pub mod phase_type_dto;
