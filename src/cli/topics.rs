use tabled::Table;

use crate::{
    backend::topics::TopicRepository,
    cli::{open, with_spinner},
    error, info,
    routes::Route,
    success,
    types::{RecordId, TopicDraft, TopicPatch, TopicTableRow},
    utils,
    views::TopicList,
};

pub async fn list_topics(course_id: RecordId) {
    let session = open(Route::Topics { course_id }).await;
    let mut topics = TopicList::new(session.client(), course_id);

    let list = match with_spinner("Fetching topics...", topics.load()).await {
        Ok(list) => list,
        Err(e) => error!("Failed to load topics. Err: {}", e),
    };

    if list.is_empty() {
        info!("Course #{} has no topics yet.", course_id);
        return;
    }

    let rows: Vec<TopicTableRow> = list
        .iter()
        .map(|t| TopicTableRow {
            id: t.id,
            title: t.title.clone(),
            description: utils::truncate(&t.description, 60),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub async fn add_topic(draft: TopicDraft) {
    let session = open(Route::Topics {
        course_id: draft.course,
    })
    .await;
    let mut topics = TopicList::new(session.client(), draft.course);

    match with_spinner("Saving topic...", topics.create(&draft)).await {
        Ok(t) => success!("Created topic '{}' (#{}) in course #{}", t.title, t.id, t.course),
        Err(e) => error!("Failed to save topic. Err: {}", e),
    }
}

pub async fn update_topic(id: RecordId, patch: TopicPatch) {
    let session = open(Route::TopicContent { topic_id: id }).await;
    let topics = TopicRepository::new(session.client());

    match with_spinner("Saving topic...", topics.update(id, &patch)).await {
        Ok(t) => success!("Updated topic '{}' (#{})", t.title, t.id),
        Err(e) => error!("Failed to update topic. Err: {}", e),
    }
}

pub async fn delete_topic(id: RecordId) {
    let session = open(Route::TopicContent { topic_id: id }).await;
    let topics = TopicRepository::new(session.client());

    match with_spinner("Deleting topic...", topics.delete(id)).await {
        Ok(()) => success!("Deleted topic #{}", id),
        Err(e) => error!("Failed to delete topic. Err: {}", e),
    }
}
