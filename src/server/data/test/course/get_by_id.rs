use super::*;

/// Tests fetching an existing course by id.
#[tokio::test]
async fn returns_existing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let found = repo.get_by_id(course.id).await?;

    assert_eq!(found.map(|c| c.id), Some(course.id));

    Ok(())
}

/// Tests that an unknown id yields None rather than an error.
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let found = repo.get_by_id(uuid::Uuid::new_v4()).await?;

    assert!(found.is_none());

    Ok(())
}
