use super::*;

/// Tests that the participation-level edge set is independent of the
/// phase-level one.
#[tokio::test]
async fn participation_edges_are_separate_from_phase_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let phase_type = factory::course_phase_type::create_phase_type(db, CORE_URL).await?;

    let phase_a = factory::course_phase::create_phase(db, course.id, phase_type.id).await?;
    let phase_b = factory::course_phase::create_phase(db, course.id, phase_type.id).await?;

    let out_dto =
        factory::phase_type_dto::create_dto(db, phase_type.id, "provided", "participation").await?;
    let in_dto =
        factory::phase_type_dto::create_dto(db, phase_type.id, "required", "participation").await?;

    let participation_repo = ParticipationDataGraphRepository::new(db);
    participation_repo
        .create(DataEdge {
            from_course_phase_id: phase_a.id,
            from_dto_id: out_dto.id,
            to_course_phase_id: phase_b.id,
            to_dto_id: in_dto.id,
        })
        .await?;

    let participation_edges = participation_repo
        .get_by_from_phase_ids(vec![phase_a.id])
        .await?;
    assert_eq!(participation_edges.len(), 1);

    // The phase-level graph stays untouched.
    let phase_edges = PhaseDataGraphRepository::new(db)
        .get_by_from_phase_ids(vec![phase_a.id])
        .await?;
    assert!(phase_edges.is_empty());

    Ok(())
}
