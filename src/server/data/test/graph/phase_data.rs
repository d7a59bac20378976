use super::*;

/// Tests create, scoped read, and wholesale delete of phase-level edges.
#[tokio::test]
async fn creates_reads_and_deletes_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    let phase_type = factory::course_phase_type::create_phase_type(db, CORE_URL).await?;

    let phase_a = factory::course_phase::create_phase(db, course.id, phase_type.id).await?;
    let phase_b = factory::course_phase::create_phase(db, course.id, phase_type.id).await?;

    let out_dto = factory::phase_type_dto::create_dto(db, phase_type.id, "provided", "phase").await?;
    let in_dto = factory::phase_type_dto::create_dto(db, phase_type.id, "required", "phase").await?;

    let repo = PhaseDataGraphRepository::new(db);
    repo.create(DataEdge {
        from_course_phase_id: phase_a.id,
        from_dto_id: out_dto.id,
        to_course_phase_id: phase_b.id,
        to_dto_id: in_dto.id,
    })
    .await?;

    let edges = repo.get_by_from_phase_ids(vec![phase_a.id]).await?;
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].from_dto_id, out_dto.id);
    assert_eq!(edges[0].to_course_phase_id, phase_b.id);

    repo.delete_by_from_phase_ids(vec![phase_a.id]).await?;

    let edges = repo.get_by_from_phase_ids(vec![phase_a.id]).await?;
    assert!(edges.is_empty());

    Ok(())
}
