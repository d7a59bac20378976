//! Phase type DTO descriptor factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a DTO descriptor advertised by the given phase type.
///
/// `direction` is `"provided"` or `"required"`, `level` is `"phase"` or
/// `"participation"`, matching the descriptor sets stored in the
/// `phase_type_dto` table.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_phase_type_id` - Phase type advertising the descriptor
/// - `direction` - Descriptor direction
/// - `level` - Descriptor granularity
///
/// # Returns
/// - `Ok(Model)` - The inserted descriptor entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_dto(
    db: &DatabaseConnection,
    course_phase_type_id: Uuid,
    direction: &str,
    level: &str,
) -> Result<entity::phase_type_dto::Model, DbErr> {
    let id = next_id();
    entity::phase_type_dto::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        course_phase_type_id: ActiveValue::Set(course_phase_type_id),
        name: ActiveValue::Set(format!("dto-{}", id)),
        version: ActiveValue::Set(1),
        endpoint_path: ActiveValue::Set(format!("/dto/{}", id)),
        direction: ActiveValue::Set(direction.to_string()),
        level: ActiveValue::Set(level.to_string()),
    }
    .insert(db)
    .await
}
