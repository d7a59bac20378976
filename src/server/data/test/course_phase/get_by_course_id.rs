use super::*;

/// Tests that only the course's own phases are returned.
#[tokio::test]
async fn scopes_phases_to_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let other_course = factory::course::create_course(db).await?;
    let phase_type = factory::course_phase_type::create_phase_type(db, CORE_URL).await?;

    factory::course_phase::create_phase(db, course.id, phase_type.id).await?;
    factory::course_phase::create_phase(db, course.id, phase_type.id).await?;
    factory::course_phase::create_phase(db, other_course.id, phase_type.id).await?;

    let repo = CoursePhaseRepository::new(db);
    let phases = repo.get_by_course_id(course.id).await?;

    assert_eq!(phases.len(), 2);
    assert!(phases.iter().all(|p| p.course_id == course.id));

    Ok(())
}

/// Tests that a course without phases yields an empty list.
#[tokio::test]
async fn returns_empty_for_phaseless_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;

    let repo = CoursePhaseRepository::new(db);
    let phases = repo.get_by_course_id(course.id).await?;

    assert!(phases.is_empty());

    Ok(())
}
