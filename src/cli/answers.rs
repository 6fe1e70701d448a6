use tabled::Table;

use crate::{
    backend::answers::AnswerRepository,
    cli::{open, with_spinner},
    error, info,
    routes::Route,
    success,
    types::{AnswerDraft, AnswerPatch, AnswerTableRow, RecordId},
    utils,
    views::AnswerList,
};

// Answers have no screen of their own; they need an administrator session
// like the dashboard does.
const ANSWERS_ROUTE: Route = Route::Dashboard;

pub async fn list_answers(question_id: RecordId) {
    let session = open(ANSWERS_ROUTE).await;
    let mut answers = AnswerList::new(session.client(), question_id);

    let list = match with_spinner("Fetching answers...", answers.load()).await {
        Ok(list) => list,
        Err(e) => error!("Failed to load answers. Err: {}", e),
    };

    if list.is_empty() {
        info!("Question #{} has no answers yet.", question_id);
        return;
    }

    let rows: Vec<AnswerTableRow> = list
        .iter()
        .map(|a| AnswerTableRow {
            id: a.id,
            text: utils::truncate(&a.text, 60),
            correct: if a.is_right { "yes" } else { "no" }.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub async fn add_answer(draft: AnswerDraft) {
    let session = open(ANSWERS_ROUTE).await;
    let mut answers = AnswerList::new(session.client(), draft.question);

    match with_spinner("Saving answer...", answers.create(&draft)).await {
        Ok(a) => success!("Created answer #{} for question #{}", a.id, a.question),
        Err(e) => error!("Failed to save answer. Err: {}", e),
    }
}

pub async fn update_answer(id: RecordId, patch: AnswerPatch) {
    let session = open(ANSWERS_ROUTE).await;
    let answers = AnswerRepository::new(session.client());

    match with_spinner("Saving answer...", answers.update(id, &patch)).await {
        Ok(a) => success!("Updated answer #{}", a.id),
        Err(e) => error!("Failed to update answer. Err: {}", e),
    }
}

pub async fn delete_answer(id: RecordId) {
    let session = open(ANSWERS_ROUTE).await;
    let answers = AnswerRepository::new(session.client());

    match with_spinner("Deleting answer...", answers.delete(id)).await {
        Ok(()) => success!("Deleted answer #{}", id),
        Err(e) => error!("Failed to delete answer. Err: {}", e),
    }
}
