//! Course phase type factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a phase type owned by the service at `base_url`.
///
/// The type name is auto-generated and unique within the test database.
///
/// # Arguments
/// - `db` - Database connection
/// - `base_url` - Base URL of the owning service
///
/// # Returns
/// - `Ok(Model)` - The inserted phase type entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_phase_type(
    db: &DatabaseConnection,
    base_url: &str,
) -> Result<entity::course_phase_type::Model, DbErr> {
    create_named_phase_type(db, &format!("PhaseType {}", next_id()), base_url).await
}

/// Creates a phase type with an explicit name.
pub async fn create_named_phase_type(
    db: &DatabaseConnection,
    name: &str,
    base_url: &str,
) -> Result<entity::course_phase_type::Model, DbErr> {
    entity::course_phase_type::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.to_string()),
        base_url: ActiveValue::Set(base_url.to_string()),
    }
    .insert(db)
    .await
}

/// Creates the core-owned "Application" phase type.
///
/// Application phases are discovered by this type name, so tests that
/// exercise application form behavior must use this factory.
pub async fn create_application_phase_type(
    db: &DatabaseConnection,
    base_url: &str,
) -> Result<entity::course_phase_type::Model, DbErr> {
    create_named_phase_type(db, "Application", base_url).await
}
