//! HTTP request handlers.
//!
//! Controllers validate input, convert DTOs to parameter models, call into
//! the service layer, and convert results back to DTOs. Each handler carries
//! its OpenAPI annotation for the generated API documentation.

pub mod application_form;
pub mod course;
