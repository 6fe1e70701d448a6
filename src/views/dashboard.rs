use crate::{
    backend::{ApiClient, Repository, courses::Courses, questions, topics},
    error::ApiError,
};

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardTotals {
    pub courses: u64,
    pub topics: u64,
    pub questions: u64,
}

impl DashboardTotals {
    pub async fn load(client: &ApiClient) -> Result<Self, ApiError> {
        let courses = Repository::<Courses>::new(client);
        let (course_list, topics, questions) =
            futures::try_join!(courses.list(()), topics::total(client), questions::total(client))?;

        Ok(Self {
            courses: course_list.len() as u64,
            topics,
            questions,
        })
    }
}
