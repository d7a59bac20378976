use super::*;

/// Tests creating a phase under a caller-chosen id.
///
/// The replication engine mints phase ids before inserting, so the
/// repository must persist exactly the id it is given.
#[tokio::test]
async fn creates_phase_with_given_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let phase_type = factory::course_phase_type::create_phase_type(db, CORE_URL).await?;

    let phase_id = Uuid::new_v4();

    let repo = CoursePhaseRepository::new(db);
    let phase = repo
        .create(CreateCoursePhaseParams {
            id: phase_id,
            course_id: course.id,
            name: "Team Allocation".to_string(),
            is_initial_phase: false,
            restricted_data: serde_json::json!({"teams": 8}),
            student_readable_data: serde_json::json!({}),
            course_phase_type_id: phase_type.id,
        })
        .await?;

    assert_eq!(phase.id, phase_id);
    assert_eq!(phase.name, "Team Allocation");
    assert_eq!(phase.restricted_data, serde_json::json!({"teams": 8}));

    let db_phase = entity::prelude::CoursePhase::find_by_id(phase_id).one(db).await?;
    assert!(db_phase.is_some());

    Ok(())
}
