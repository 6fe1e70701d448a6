use std::collections::HashMap;

use tabled::Table;

use crate::{
    cli::{open, with_spinner},
    error, info,
    routes::Route,
    success,
    types::{CourseDraft, CoursePatch, CourseTableRow, RecordId},
    utils,
    views::{CourseCatalog, CourseList},
};

/// Lists courses, optionally narrowed to some categories.
///
/// With `details` every course's topics are fetched too, along with the
/// question count of each topic.
pub async fn list_courses(categories: Vec<RecordId>, details: bool) {
    let session = open(Route::Courses).await;
    let mut catalog = CourseCatalog::new(session.client());

    if let Err(e) = with_spinner("Fetching courses...", catalog.load()).await {
        error!("Failed to load courses. Err: {}", e);
    }
    catalog.select_categories(categories);

    let counts: HashMap<RecordId, (usize, usize)> = if details {
        match with_spinner("Counting topics and questions...", catalog.details()).await {
            Ok(list) => list
                .iter()
                .map(|d| (d.course.id, (d.topic_count(), d.question_count())))
                .collect(),
            Err(e) => error!("Failed to load course details. Err: {}", e),
        }
    } else {
        HashMap::new()
    };

    let visible = catalog.visible();
    if visible.is_empty() {
        info!("No courses found.");
        return;
    }

    let rows: Vec<CourseTableRow> = visible
        .into_iter()
        .map(|c| {
            let (topics, questions) = match counts.get(&c.id) {
                Some((t, q)) => (t.to_string(), q.to_string()),
                None => (String::new(), String::new()),
            };
            CourseTableRow {
                id: c.id,
                title: utils::truncate(&c.title, 40),
                categories: catalog.category_names(c),
                topics,
                questions,
            }
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub async fn add_course(draft: CourseDraft) {
    let session = open(Route::Courses).await;
    let mut courses = CourseList::new(session.client(), ());

    match with_spinner("Saving course...", courses.create(&draft)).await {
        Ok(c) => success!("Created course '{}' (#{})", c.title, c.id),
        Err(e) => error!("Failed to save course. Err: {}", e),
    }
}

pub async fn update_course(id: RecordId, patch: CoursePatch) {
    let session = open(Route::Courses).await;
    let mut courses = CourseList::new(session.client(), ());

    match with_spinner("Saving course...", courses.update(id, &patch)).await {
        Ok(c) => success!("Updated course '{}' (#{})", c.title, c.id),
        Err(e) => error!("Failed to update course. Err: {}", e),
    }
}

pub async fn delete_course(id: RecordId) {
    let session = open(Route::Courses).await;
    let mut courses = CourseList::new(session.client(), ());

    match with_spinner("Deleting course...", courses.delete(id)).await {
        Ok(()) => success!("Deleted course #{}", id),
        Err(e) => error!("Failed to delete course. Err: {}", e),
    }
}
