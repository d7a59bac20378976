use super::*;

/// Tests that questions come back ordered by their order number and scoped
/// to the requested phase.
#[tokio::test]
async fn orders_and_scopes_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let phase = create_application_phase(db).await?;
    let other_phase = create_application_phase(db).await?;

    factory::application_question::create_text_question(db, phase.id, 2).await?;
    factory::application_question::create_text_question(db, phase.id, 1).await?;
    factory::application_question::create_multi_select_question(db, phase.id, 3).await?;
    factory::application_question::create_file_upload_question(db, phase.id, 4).await?;
    factory::application_question::create_text_question(db, other_phase.id, 1).await?;

    let repo = ApplicationQuestionRepository::new(db);
    let form = repo.get_by_phase_id(phase.id).await?;

    assert_eq!(form.text_questions.len(), 2);
    assert!(form.text_questions[0].order_num < form.text_questions[1].order_num);
    assert_eq!(form.multi_select_questions.len(), 1);
    assert_eq!(form.file_upload_questions.len(), 1);
    assert!(form.text_questions.iter().all(|q| q.course_phase_id == phase.id));

    Ok(())
}

/// Tests that a phase without questions yields three empty sets.
#[tokio::test]
async fn returns_empty_form_for_new_phase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let phase = create_application_phase(db).await?;

    let repo = ApplicationQuestionRepository::new(db);
    let form = repo.get_by_phase_id(phase.id).await?;

    assert!(form.text_questions.is_empty());
    assert!(form.multi_select_questions.is_empty());
    assert!(form.file_upload_questions.is_empty());

    Ok(())
}
