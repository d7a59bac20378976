use super::*;

/// Tests that ordering edges are scoped by their from-endpoints.
#[tokio::test]
async fn scopes_edges_to_given_phases() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let phase_type = factory::course_phase_type::create_phase_type(db, CORE_URL).await?;

    let phase_a = factory::course_phase::create_phase(db, course.id, phase_type.id).await?;
    let phase_b = factory::course_phase::create_phase(db, course.id, phase_type.id).await?;
    let phase_c = factory::course_phase::create_phase(db, course.id, phase_type.id).await?;

    let (_, _, other_phase) = factory::helpers::create_course_with_phase(db, CORE_URL).await?;
    let (_, _, other_target) = factory::helpers::create_course_with_phase(db, CORE_URL).await?;

    let repo = CoursePhaseGraphRepository::new(db);
    repo.create(phase_a.id, phase_b.id).await?;
    repo.create(phase_b.id, phase_c.id).await?;
    repo.create(other_phase.id, other_target.id).await?;

    let edges = repo
        .get_by_from_phase_ids(vec![phase_a.id, phase_b.id, phase_c.id])
        .await?;

    assert_eq!(edges.len(), 2);
    assert!(edges.iter().all(|e| e.from_course_phase_id != other_phase.id));

    Ok(())
}

/// Tests that an empty phase set short-circuits to an empty edge list.
#[tokio::test]
async fn empty_phase_set_yields_no_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CoursePhaseGraphRepository::new(db);
    let edges = repo.get_by_from_phase_ids(vec![]).await?;

    assert!(edges.is_empty());

    Ok(())
}
