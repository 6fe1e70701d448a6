use crate::{
    backend::{ApiClient, Resource, repository::Repository},
    error::ApiError,
    types::{RecordId, Topic, TopicDraft, TopicPatch, TotalResponse},
    warning,
};

/// Topics, listed per course.
#[derive(Debug, Clone, Copy)]
pub struct Topics;

impl Resource for Topics {
    type Record = Topic;
    type Draft = TopicDraft;
    type Patch = TopicPatch;
    /// Parent course.
    type Scope = RecordId;

    const NAME: &'static str = "topic";
    const BASE: &'static str = "/api/topics";

    fn list_path(course_id: RecordId) -> String {
        format!("{}/?course_id={}", Self::BASE, course_id)
    }

    fn scope_of(topic: &Topic) -> RecordId {
        topic.course
    }
}

pub type TopicRepository = Repository<Topics>;

/// Total number of topics across all courses.
pub async fn total(client: &ApiClient) -> Result<u64, ApiError> {
    client
        .get::<TotalResponse>(&format!("{}/total/", Topics::BASE))
        .await
        .map(TotalResponse::value)
        .inspect_err(|e| warning!("Failed to fetch total number of topics: {}", e))
}
