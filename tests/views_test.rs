mod common;

use std::time::Duration;

use common::MockBackend;
use learnitor_admin::{
    backend::answers::AnswerRepository,
    error::{ApiError, ViewError},
    management::Collection,
    types::{
        Answer, AnswerDraft, AnswerPatch, Level, MaterialDraft, MaterialKind, MaterialPatch,
        QuestionDraft, Topic, TopicDraft, TopicPatch,
    },
    views::{AnswerList, CourseCatalog, MaterialShelf, QuestionBoard, TopicList},
};
use serde_json::json;
use tokio::sync::mpsc;

fn topic(id: u64, title: &str) -> Topic {
    Topic {
        id,
        title: title.to_string(),
        description: String::new(),
        course: 1,
    }
}

#[test]
fn test_collection_upsert_replaces_in_place_or_appends() {
    let mut collection = Collection::from_vec(vec![topic(1, "a"), topic(2, "b")]);

    assert!(collection.upsert(topic(1, "a2")));
    assert!(!collection.upsert(topic(3, "c")));

    let titles: Vec<&str> = collection.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a2", "b", "c"]);
    assert_eq!(collection.ids(), vec![1, 2, 3]);
}

#[test]
fn test_collection_remove_and_duplicates() {
    let mut collection =
        Collection::from_vec(vec![topic(1, "a"), topic(2, "b"), topic(1, "a-again")]);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.get(1).map(|t| t.title.as_str()), Some("a-again"));

    assert_eq!(collection.remove(2).map(|t| t.id), Some(2));
    assert_eq!(collection.remove(2), None);
    assert!(!collection.contains(2));
    assert_eq!(collection.len(), 1);
}

#[tokio::test]
async fn test_view_merges_mutations_without_relisting() {
    let backend = MockBackend::start().await;
    let client = backend.admin_client().await;
    backend.seed("topics", json!({ "title": "Variables", "description": "", "course": 5 }));

    let mut topics = TopicList::new(&client, 5);
    assert!(!topics.is_loaded());
    topics.load().await.unwrap();
    assert!(topics.is_loaded());
    assert_eq!(topics.records().len(), 1);

    let loops = topics
        .create(&TopicDraft {
            title: "Loops".to_string(),
            description: String::new(),
            course: 5,
        })
        .await
        .unwrap();
    assert_eq!(topics.records().len(), 2);
    assert_eq!(topics.get(loops.id).map(|t| t.title.as_str()), Some("Loops"));

    topics.delete(loops.id).await.unwrap();
    assert!(topics.get(loops.id).is_none());

    // local state matches a fresh listing
    let mut fresh = TopicList::new(&client, 5);
    fresh.load().await.unwrap();
    assert_eq!(fresh.records(), topics.records());
}

#[tokio::test]
async fn test_records_moved_to_another_parent_leave_the_view() {
    let backend = MockBackend::start().await;
    let client = backend.admin_client().await;

    let mut topics = TopicList::new(&client, 5);
    topics.load().await.unwrap();

    let loops = topics
        .create(&TopicDraft {
            title: "Loops".to_string(),
            description: String::new(),
            course: 5,
        })
        .await
        .unwrap();
    assert!(topics.get(loops.id).is_some());

    let moved = topics
        .update(
            loops.id,
            &TopicPatch {
                course: Some(6),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.course, 6);
    assert!(topics.get(loops.id).is_none());

    // a draft aimed at another course is created but not shown here
    let elsewhere = topics
        .create(&TopicDraft {
            title: "Recursion".to_string(),
            description: String::new(),
            course: 7,
        })
        .await
        .unwrap();
    assert!(topics.get(elsewhere.id).is_none());

    let mut fresh = TopicList::new(&client, 5);
    fresh.load().await.unwrap();
    assert_eq!(fresh.records(), topics.records());
    assert!(fresh.records().is_empty());
}

#[tokio::test]
async fn test_rescope_lists_another_parent() {
    let backend = MockBackend::start().await;
    let client = backend.admin_client().await;
    backend.seed("topics", json!({ "title": "A", "description": "", "course": 1 }));
    backend.seed("topics", json!({ "title": "B", "description": "", "course": 2 }));

    let mut topics = TopicList::new(&client, 1);
    topics.load().await.unwrap();
    assert_eq!(topics.records().iter().next().map(|t| t.title.as_str()), Some("A"));

    topics.rescope(2).await.unwrap();
    assert_eq!(topics.scope(), 2);
    let titles: Vec<&str> = topics.records().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["B"]);
}

#[tokio::test]
async fn test_deleting_missing_question_leaves_board_untouched() {
    let backend = MockBackend::start().await;
    let client = backend.admin_client().await;
    for text in ["one", "two"] {
        backend.seed(
            "questions",
            json!({ "text": text, "topic": 4, "level": "Beginner", "duration": 20 }),
        );
    }

    let mut board = QuestionBoard::new(&client, 4, Level::Beginner);
    board.load().await.unwrap();
    let before = board.questions().records().clone();

    let err = board.delete_question(9999).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(board.questions().records(), &before);
    assert_eq!(backend.records("questions").len(), 2);
}

#[tokio::test]
async fn test_question_board_keeps_only_its_level() {
    let backend = MockBackend::start().await;
    let client = backend.admin_client().await;
    backend.seed("questions", json!({ "text": "easy", "topic": 4, "level": "Beginner" }));
    backend.seed("questions", json!({ "text": "hard", "topic": 4, "level": "Master" }));

    let mut board = QuestionBoard::new(&client, 4, Level::Beginner);
    board.load().await.unwrap();
    assert_eq!(board.questions().records().len(), 1);

    let draft = |text: &str, level| QuestionDraft {
        text: text.to_string(),
        duration: Some(15),
        topic: 4,
        level,
    };

    let added = board.create_question(&draft("also easy", Level::Beginner)).await.unwrap();
    assert!(board.questions().get(added.id).is_some());

    let elsewhere = board.create_question(&draft("tricky", Level::Advanced)).await.unwrap();
    assert!(board.questions().get(elsewhere.id).is_none());

    // moving a question to another level takes it off the board
    board
        .update_question(added.id, &draft("also easy", Level::Intermediate))
        .await
        .unwrap();
    assert!(board.questions().get(added.id).is_none());
    assert_eq!(board.questions().records().len(), 1);
}

#[tokio::test]
async fn test_question_board_answers() {
    let backend = MockBackend::start().await;
    let client = backend.admin_client().await;
    let question = backend.seed(
        "questions",
        json!({ "text": "2 + 2?", "topic": 4, "level": "Beginner" }),
    );
    backend.seed("answers", json!({ "text": "4", "isRight": true, "question": question }));

    let mut board = QuestionBoard::new(&client, 4, Level::Beginner);
    board.load().await.unwrap();

    let err = board.create_answer("5", false).await.unwrap_err();
    assert!(matches!(err, ViewError::NoQuestionOpen));
    assert_eq!(backend.records("answers").len(), 1);

    board.open_question(question).await.unwrap();
    assert_eq!(board.selected_question(), Some(question));

    let wrong = board.create_answer("5", false).await.unwrap();
    assert_eq!(wrong.question, question);

    let answers = board.answers().unwrap();
    assert_eq!(answers.records().len(), 2);
    assert_eq!(answers.records().iter().filter(|a| a.is_right).count(), 1);

    board
        .update_answer(
            wrong.id,
            &AnswerPatch {
                text: Some("five".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(board.answers().unwrap().get(wrong.id).map(|a| a.text.as_str()), Some("five"));

    board.delete_question(question).await.unwrap();
    assert_eq!(board.selected_question(), None);
    assert!(board.questions().records().is_empty());
}

#[tokio::test]
async fn test_concurrent_answer_updates_last_response_wins() {
    let backend = MockBackend::start().await;
    let client = backend.admin_client().await;

    let mut answers = AnswerList::new(&client, 1);
    let answer = answers
        .create(&AnswerDraft {
            text: "original".to_string(),
            is_right: false,
            question: 1,
        })
        .await
        .unwrap();

    // "A" is sent first but answered last
    backend.delay_updates_with_text("A", Duration::from_millis(300));
    let id = answer.id;

    let (tx, mut rx) = mpsc::unbounded_channel::<Result<Answer, ApiError>>();
    for text in ["A", "B"] {
        let repo = AnswerRepository::new(&client);
        let tx = tx.clone();
        let patch = AnswerPatch {
            text: Some(text.to_string()),
            ..Default::default()
        };
        tokio::spawn(async move {
            let _ = tx.send(repo.update(id, &patch).await);
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    drop(tx);

    let mut resolved = Vec::new();
    while let Some(result) = rx.recv().await {
        let record = result.unwrap();
        resolved.push(record.text.clone());
        answers.apply(record);
    }

    assert_eq!(resolved, vec!["B", "A"]);
    assert_eq!(answers.get(id).map(|a| a.text.as_str()), Some("A"));
    assert_eq!(answers.records().len(), 1);
}

#[tokio::test]
async fn test_material_shelf_stays_sorted_by_kind() {
    let backend = MockBackend::start().await;
    let client = backend.admin_client().await;
    backend.seed("materials", json!({ "name": "clip", "link": "l", "type": "video", "topic": 2 }));
    backend.seed(
        "materials",
        json!({ "name": "paper", "link": "l", "type": "journal", "topic": 2 }),
    );

    let mut shelf = MaterialShelf::new(&client, 2);
    shelf.load().await.unwrap();

    let kinds = |shelf: &MaterialShelf| -> Vec<MaterialKind> {
        shelf.materials().records().iter().map(|m| m.kind).collect()
    };
    assert_eq!(kinds(&shelf), vec![MaterialKind::Journal, MaterialKind::Video]);

    let book = shelf
        .create(&MaterialDraft {
            name: "book".to_string(),
            link: "l".to_string(),
            kind: MaterialKind::Book,
            topic: 2,
        })
        .await
        .unwrap();
    assert_eq!(
        kinds(&shelf),
        vec![MaterialKind::Book, MaterialKind::Journal, MaterialKind::Video]
    );

    shelf
        .update(
            book.id,
            &MaterialPatch {
                kind: Some(MaterialKind::Slides),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        kinds(&shelf),
        vec![MaterialKind::Journal, MaterialKind::Slides, MaterialKind::Video]
    );
}

#[tokio::test]
async fn test_course_catalog_filters_by_category() {
    let backend = MockBackend::start().await;
    let client = backend.admin_client().await;
    let math = backend.seed("categories", json!({ "name": "Math" }));
    let cs = backend.seed("categories", json!({ "name": "CS" }));
    let art = backend.seed("categories", json!({ "name": "Art" }));
    let course = |title: &str, category: Vec<u64>| {
        json!({ "title": title, "description": "", "url": "", "category": category })
    };
    backend.seed("courses", course("Algebra", vec![math]));
    backend.seed("courses", course("Algorithms", vec![math, cs]));
    backend.seed("courses", course("Painting", vec![art]));

    let mut catalog = CourseCatalog::new(&client);
    catalog.load().await.unwrap();

    let titles = |catalog: &CourseCatalog| -> Vec<String> {
        catalog.visible().iter().map(|c| c.title.clone()).collect()
    };

    assert_eq!(titles(&catalog).len(), 3);

    catalog.select_categories([cs]);
    assert_eq!(titles(&catalog), vec!["Algorithms"]);

    catalog.toggle_category(art);
    assert_eq!(titles(&catalog), vec!["Algorithms", "Painting"]);

    catalog.toggle_category(cs);
    catalog.toggle_category(art);
    assert!(catalog.selected_categories().is_empty());
    assert_eq!(titles(&catalog).len(), 3);

    let algorithms = catalog
        .visible()
        .into_iter()
        .find(|c| c.title == "Algorithms")
        .unwrap()
        .clone();
    assert_eq!(catalog.category_names(&algorithms), "Math, CS");
}
