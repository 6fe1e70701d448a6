use futures::future::try_join_all;

use crate::{
    backend::{ApiClient, Resource, questions, repository::Repository, topics::Topics},
    error::ApiError,
    types::{Course, CourseDetails, CourseDraft, CoursePatch, Topic, TopicSummary},
};

#[derive(Debug, Clone, Copy)]
pub struct Courses;

impl Resource for Courses {
    type Record = Course;
    type Draft = CourseDraft;
    type Patch = CoursePatch;
    type Scope = ();

    const NAME: &'static str = "course";
    const BASE: &'static str = "/api/courses";

    fn list_path(_: ()) -> String {
        Self::collection_path()
    }

    fn scope_of(_: &Course) {}
}

pub type CourseRepository = Repository<Courses>;

/// Lists every course with its topics and the number of questions per topic.
///
/// Topic lists and question counts are fetched concurrently. The first
/// failing call fails the whole listing.
pub async fn catalog_details(client: &ApiClient) -> Result<Vec<CourseDetails>, ApiError> {
    let courses = Repository::<Courses>::new(client).list(()).await?;
    try_join_all(courses.into_iter().map(|course| details_for(client, course))).await
}

async fn details_for(client: &ApiClient, course: Course) -> Result<CourseDetails, ApiError> {
    let topics = Repository::<Topics>::new(client).list(course.id).await?;
    let topics = try_join_all(topics.into_iter().map(|topic| summarize(client, topic))).await?;
    Ok(CourseDetails { course, topics })
}

async fn summarize(client: &ApiClient, topic: Topic) -> Result<TopicSummary, ApiError> {
    let question_count = questions::for_topic(client, topic.id).await?.len();
    Ok(TopicSummary {
        topic,
        question_count,
    })
}
