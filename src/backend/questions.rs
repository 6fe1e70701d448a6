use crate::{
    backend::{ApiClient, Resource, UpdateMethod, repository::Repository},
    error::ApiError,
    types::{Level, Question, QuestionDraft, RecordId, TotalResponse},
    utils, warning,
};

/// Questions, listed per topic through the `by_topics` endpoint.
///
/// Updates replace the whole question, so they go out as PUT.
#[derive(Debug, Clone, Copy)]
pub struct Questions;

impl Resource for Questions {
    type Record = Question;
    type Draft = QuestionDraft;
    type Patch = QuestionDraft;
    /// Parent topic.
    type Scope = RecordId;

    const NAME: &'static str = "question";
    const BASE: &'static str = "/api/questions";
    const UPDATE: UpdateMethod = UpdateMethod::Put;

    fn list_path(topic_id: RecordId) -> String {
        format!("{}/by_topics/?topic_id={}", Self::BASE, topic_id)
    }

    fn scope_of(question: &Question) -> RecordId {
        question.topic
    }
}

pub type QuestionRepository = Repository<Questions>;

/// Questions of a topic at one difficulty level.
pub async fn for_level(
    client: &ApiClient,
    topic_id: RecordId,
    level: Level,
) -> Result<Vec<Question>, ApiError> {
    let questions = Repository::<Questions>::new(client).list(topic_id).await?;
    Ok(utils::filter_questions_by_level(questions, level))
}

/// Questions of a topic through the plain filter endpoint.
///
/// Used for counting; the admin screens list through `by_topics`.
pub async fn for_topic(client: &ApiClient, topic_id: RecordId) -> Result<Vec<Question>, ApiError> {
    client
        .get(&format!("{}/?topic_id={}", Questions::BASE, topic_id))
        .await
        .inspect_err(|e| warning!("Failed to fetch questions for topic {}: {}", topic_id, e))
}

/// Total number of questions across all topics.
pub async fn total(client: &ApiClient) -> Result<u64, ApiError> {
    client
        .get::<TotalResponse>(&format!("{}/total/", Questions::BASE))
        .await
        .map(TotalResponse::value)
        .inspect_err(|e| warning!("Failed to fetch total number of questions: {}", e))
}
