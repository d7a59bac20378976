use super::*;

/// Tests creating a text question and minting its id server-side.
#[tokio::test]
async fn creates_text_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let phase = create_application_phase(db).await?;

    let repo = ApplicationQuestionRepository::new(db);
    let question = repo
        .create_text(
            phase.id,
            TextQuestionData {
                title: "Motivation".to_string(),
                description: "Why do you want to join?".to_string(),
                placeholder: "Your answer".to_string(),
                validation_regex: "^.{10,}$".to_string(),
                error_message: "Too short".to_string(),
                is_required: true,
                allowed_length: 400,
                order_num: 1,
            },
        )
        .await?;

    assert_ne!(question.id, Uuid::nil());
    assert_eq!(question.course_phase_id, phase.id);
    assert_eq!(question.title, "Motivation");
    assert_eq!(question.validation_regex, "^.{10,}$");
    assert_eq!(question.allowed_length, 400);

    Ok(())
}

/// Tests the delete batch removing ids across all three variant tables.
#[tokio::test]
async fn deletes_questions_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let phase = create_application_phase(db).await?;

    let text = factory::application_question::create_text_question(db, phase.id, 1).await?;
    let multi = factory::application_question::create_multi_select_question(db, phase.id, 2).await?;
    let kept = factory::application_question::create_text_question(db, phase.id, 3).await?;

    let repo = ApplicationQuestionRepository::new(db);
    repo.delete_by_ids(vec![text.id, multi.id]).await?;

    let form = repo.get_by_phase_id(phase.id).await?;
    assert_eq!(form.text_questions.len(), 1);
    assert_eq!(form.text_questions[0].id, kept.id);
    assert!(form.multi_select_questions.is_empty());

    Ok(())
}
