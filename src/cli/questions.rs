use colored::Colorize;
use tabled::Table;

use crate::{
    backend::{
        ApiClient,
        questions::{QuestionRepository, Questions},
    },
    cli::{open, with_spinner},
    error, info,
    routes::Route,
    success,
    types::{Level, Question, QuestionDraft, QuestionTableRow, RecordId},
    utils::{self, Segment},
    views::{AnswerList, QuestionBoard, ResourceView},
    warning,
};

/// Lists the questions of a topic, all levels or just one.
///
/// With `full` every question is printed in full, formulas highlighted,
/// followed by its answers.
pub async fn list_questions(topic_id: RecordId, level: Option<Level>, full: bool) {
    let (session, questions) = match level {
        Some(level) => {
            let session = open(Route::Questions { topic_id, level }).await;
            let mut board = QuestionBoard::new(session.client(), topic_id, level);
            if let Err(e) = with_spinner("Fetching questions...", board.load()).await {
                error!("Failed to load questions. Err: {}", e);
            }
            let questions = board.questions().records().as_slice().to_vec();
            (session, questions)
        }
        None => {
            let session = open(Route::Levels { topic_id }).await;
            let mut view = ResourceView::<Questions>::new(session.client(), topic_id);
            let questions = match with_spinner("Fetching questions...", view.load()).await {
                Ok(list) => list.as_slice().to_vec(),
                Err(e) => error!("Failed to load questions. Err: {}", e),
            };
            (session, questions)
        }
    };

    if questions.is_empty() {
        info!("No questions found for topic #{}.", topic_id);
        return;
    }

    if full {
        for question in &questions {
            print_question(session.client(), question).await;
        }
        return;
    }

    let rows: Vec<QuestionTableRow> = questions
        .iter()
        .map(|q| QuestionTableRow {
            id: q.id,
            text: utils::truncate(&q.text, 60),
            duration: q.duration.map(|d| format!("{d}s")).unwrap_or_default(),
            level: q.level.map(|l| l.to_string()).unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub async fn add_question(draft: QuestionDraft) {
    let session = open(Route::Questions {
        topic_id: draft.topic,
        level: draft.level,
    })
    .await;
    let mut board = QuestionBoard::new(session.client(), draft.topic, draft.level);

    match with_spinner("Saving question...", board.create_question(&draft)).await {
        Ok(q) => success!("Created question #{} in topic #{}", q.id, q.topic),
        Err(e) => error!("Failed to save question. Err: {}", e),
    }
}

/// Replaces a question; every field is sent.
pub async fn update_question(id: RecordId, draft: QuestionDraft) {
    let session = open(Route::Questions {
        topic_id: draft.topic,
        level: draft.level,
    })
    .await;
    let questions = QuestionRepository::new(session.client());

    match with_spinner("Saving question...", questions.update(id, &draft)).await {
        Ok(q) => success!("Updated question #{}", q.id),
        Err(e) => error!("Failed to update question. Err: {}", e),
    }
}

pub async fn delete_question(id: RecordId) {
    let session = open(Route::Dashboard).await;
    let questions = QuestionRepository::new(session.client());

    match with_spinner("Deleting question...", questions.delete(id)).await {
        Ok(()) => success!("Deleted question #{}", id),
        Err(e) => error!("Failed to delete question. Err: {}", e),
    }
}

async fn print_question(client: &ApiClient, question: &Question) {
    let level = question.level.map(|l| l.to_string()).unwrap_or_else(|| "-".to_string());
    let duration = question.duration.map(|d| format!(", {d}s")).unwrap_or_default();

    println!(
        "{} {}",
        format!("#{} [{}{}]", question.id, level, duration).bold(),
        highlight(&question.text)
    );

    let mut answers = AnswerList::new(client, question.id);
    match answers.load().await {
        Ok(list) => {
            for answer in list.iter() {
                let mark = if answer.is_right {
                    "✓".green().bold()
                } else {
                    "✗".red()
                };
                println!(
                    "    {} {} {}",
                    mark,
                    format!("#{}", answer.id).dimmed(),
                    highlight(&answer.text)
                );
            }
        }
        Err(e) => warning!("Cannot show answers of question #{}. Err: {}", question.id, e),
    }
    println!();
}

/// Renders formulas in a distinct color, without their delimiters.
fn highlight(text: &str) -> String {
    utils::split_text_with_formulas(text)
        .iter()
        .map(|segment| match segment {
            Segment::Text(t) => t.clone(),
            Segment::Formula(f) => f.cyan().italic().to_string(),
        })
        .collect()
}
