use super::*;

/// Tests reading the flagged initial phase of a course.
#[tokio::test]
async fn finds_initial_phase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let phase_type = factory::course_phase_type::create_phase_type(db, CORE_URL).await?;

    factory::course_phase::create_phase(db, course.id, phase_type.id).await?;
    let initial = factory::course_phase::CoursePhaseFactory::new(db, course.id, phase_type.id)
        .is_initial_phase(true)
        .build()
        .await?;

    let repo = CoursePhaseRepository::new(db);
    let found = repo.get_initial_phase(course.id).await?;

    assert_eq!(found.map(|p| p.id), Some(initial.id));

    Ok(())
}

/// Tests moving the initial flag: clear first, then set, so exactly one
/// phase carries the flag afterwards.
#[tokio::test]
async fn clear_then_set_keeps_single_initial_phase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let phase_type = factory::course_phase_type::create_phase_type(db, CORE_URL).await?;

    let old_initial = factory::course_phase::CoursePhaseFactory::new(db, course.id, phase_type.id)
        .is_initial_phase(true)
        .build()
        .await?;
    let new_initial = factory::course_phase::create_phase(db, course.id, phase_type.id).await?;

    let repo = CoursePhaseRepository::new(db);
    repo.clear_initial_phase(course.id).await?;
    repo.set_initial_phase(new_initial.id).await?;

    let phases = repo.get_by_course_id(course.id).await?;
    let initial_phases: Vec<_> = phases.iter().filter(|p| p.is_initial_phase).collect();

    assert_eq!(initial_phases.len(), 1);
    assert_eq!(initial_phases[0].id, new_initial.id);
    assert_ne!(initial_phases[0].id, old_initial.id);

    Ok(())
}
