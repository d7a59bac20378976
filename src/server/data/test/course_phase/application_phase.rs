use super::*;

/// Tests discovering a course's application phase by phase type name.
#[tokio::test]
async fn finds_application_phase_by_type_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let regular_type = factory::course_phase_type::create_phase_type(db, CORE_URL).await?;
    let application_type =
        factory::course_phase_type::create_application_phase_type(db, CORE_URL).await?;

    factory::course_phase::create_phase(db, course.id, regular_type.id).await?;
    let application_phase =
        factory::course_phase::create_phase(db, course.id, application_type.id).await?;

    let repo = CoursePhaseRepository::new(db);
    let found = repo.get_application_phase(course.id).await?;

    assert_eq!(found.map(|p| p.id), Some(application_phase.id));

    Ok(())
}

/// Tests that a course without an application phase yields None.
#[tokio::test]
async fn returns_none_without_application_phase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _, _) = factory::helpers::create_course_with_phase(db, CORE_URL).await?;

    let repo = CoursePhaseRepository::new(db);
    let found = repo.get_application_phase(course.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the application phase type check on both kinds of phases.
#[tokio::test]
async fn checks_phase_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let regular_type = factory::course_phase_type::create_phase_type(db, CORE_URL).await?;
    let application_type =
        factory::course_phase_type::create_application_phase_type(db, CORE_URL).await?;

    let regular_phase = factory::course_phase::create_phase(db, course.id, regular_type.id).await?;
    let application_phase =
        factory::course_phase::create_phase(db, course.id, application_type.id).await?;

    let repo = CoursePhaseRepository::new(db);

    assert!(repo.is_application_phase(application_phase.id).await?);
    assert!(!repo.is_application_phase(regular_phase.id).await?);
    assert!(!repo.is_application_phase(Uuid::new_v4()).await?);

    Ok(())
}
