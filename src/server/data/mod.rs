//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! return parameter models to maintain separation between the data layer and business
//! logic layer.
//!
//! Every repository is generic over `sea_orm::ConnectionTrait` so the same
//! operations run against the connection pool or against a transaction handle
//! supplied by a caller; the course replication engine executes all of its
//! writes inside one such transaction.

pub mod application_question;
pub mod course;
pub mod course_phase;
pub mod course_phase_graph;
pub mod course_phase_type;
pub mod data_graph;
pub mod phase_type_dto;

#[cfg(test)]
mod test;
