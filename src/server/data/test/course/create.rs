use super::*;

fn params(name: &str) -> CreateCourseParams {
    CreateCourseParams {
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        semester_tag: "ss26".to_string(),
        course_type: "practical course".to_string(),
        ects: 10,
        restricted_data: serde_json::json!({"budget": 4000}),
        student_readable_data: serde_json::json!({"motto": "build things"}),
        template: false,
    }
}

/// Tests creating a course with all fields persisted.
///
/// Expected: Ok with the course row present in the database
#[tokio::test]
async fn creates_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let course = repo.create(params("Interactive Learning")).await?;

    assert_eq!(course.name, "Interactive Learning");
    assert_eq!(course.semester_tag, "ss26");
    assert_eq!(course.ects, 10);
    assert_eq!(course.restricted_data, serde_json::json!({"budget": 4000}));
    assert!(!course.template);

    let db_course = entity::prelude::Course::find_by_id(course.id).one(db).await?;
    assert!(db_course.is_some());
    assert_eq!(db_course.unwrap().name, "Interactive Learning");

    Ok(())
}

/// Tests that two created courses get distinct fresh ids.
#[tokio::test]
async fn creates_courses_with_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let first = repo.create(params("First")).await?;
    let second = repo.create(params("Second")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
