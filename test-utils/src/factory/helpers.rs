//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// display name to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course with one remotely owned phase attached.
///
/// This is a convenience method that creates:
/// 1. Course
/// 2. CoursePhaseType (owned by `base_url`)
/// 3. CoursePhase bound to both
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `base_url` - Base URL of the service owning the phase type
///
/// # Returns
/// - `Ok((course, phase_type, phase))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_phase(
    db: &DatabaseConnection,
    base_url: &str,
) -> Result<
    (
        entity::course::Model,
        entity::course_phase_type::Model,
        entity::course_phase::Model,
    ),
    DbErr,
> {
    let course = crate::factory::course::create_course(db).await?;
    let phase_type = crate::factory::course_phase_type::create_phase_type(db, base_url).await?;
    let phase = crate::factory::course_phase::CoursePhaseFactory::new(db, course.id, phase_type.id)
        .build()
        .await?;

    Ok((course, phase_type, phase))
}
