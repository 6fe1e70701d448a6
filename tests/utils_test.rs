use learnitor_admin::types::{
    Course, Level, Material, MaterialKind, Question, TotalResponse, UserProfile,
};
use learnitor_admin::utils::*;

// Helper function to create a test course
fn create_test_course(id: u64, title: &str, category: &[u64]) -> Course {
    Course {
        id,
        title: title.to_string(),
        description: String::new(),
        url: String::new(),
        category: category.to_vec(),
    }
}

fn create_test_question(id: u64, level: Option<Level>) -> Question {
    Question {
        id,
        text: format!("question {id}"),
        duration: None,
        topic: 1,
        level,
    }
}

fn create_test_material(id: u64, kind: MaterialKind) -> Material {
    Material {
        id,
        name: format!("material {id}"),
        link: String::new(),
        kind,
        topic: 1,
    }
}

#[test]
fn test_split_plain_text() {
    assert_eq!(
        split_text_with_formulas("no math here"),
        vec![Segment::Text("no math here".to_string())]
    );
    assert!(split_text_with_formulas("").is_empty());
    assert!(!contains_formula("no math here"));
}

#[test]
fn test_split_each_delimiter_kind() {
    let segments = split_text_with_formulas(r"Solve $$x^2 = 4$$ then \(y\) and \[z + 1\].");

    assert_eq!(
        segments,
        vec![
            Segment::Text("Solve ".to_string()),
            Segment::Formula("x^2 = 4".to_string()),
            Segment::Text(" then ".to_string()),
            Segment::Formula("y".to_string()),
            Segment::Text(" and ".to_string()),
            Segment::Formula("z + 1".to_string()),
            Segment::Text(".".to_string()),
        ]
    );
}

#[test]
fn test_split_formula_only_and_adjacent() {
    assert_eq!(
        split_text_with_formulas(r"$$a$$\(b\)"),
        vec![
            Segment::Formula("a".to_string()),
            Segment::Formula("b".to_string())
        ]
    );
}

#[test]
fn test_split_is_non_greedy() {
    let segments = split_text_with_formulas("$$a$$ + $$b$$");
    let formulas: Vec<&str> = segments
        .iter()
        .filter(|s| s.is_formula())
        .map(Segment::as_str)
        .collect();
    assert_eq!(formulas, vec!["a", "b"]);
}

#[test]
fn test_unclosed_delimiter_stays_text() {
    let text = r"costs $$5 or \(6";
    assert!(!contains_formula(text));
    assert_eq!(split_text_with_formulas(text), vec![Segment::Text(text.to_string())]);
}

#[test]
fn test_segments_rebuild_text_without_delimiters() {
    let joined: String = split_text_with_formulas(r"E = \(mc^2\)!")
        .iter()
        .map(Segment::as_str)
        .collect();
    assert_eq!(joined, "E = mc^2!");
}

#[test]
fn test_filter_courses_by_categories() {
    let courses = vec![
        create_test_course(1, "Algebra", &[1]),
        create_test_course(2, "Algorithms", &[1, 2]),
        create_test_course(3, "Painting", &[3]),
        create_test_course(4, "Uncategorized", &[]),
    ];

    let all = filter_courses_by_categories(&courses, &[]);
    assert_eq!(all.len(), 4);

    let ids: Vec<u64> = filter_courses_by_categories(&courses, &[2, 3])
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![2, 3]);

    assert!(filter_courses_by_categories(&courses, &[99]).is_empty());
}

#[test]
fn test_filter_questions_by_level() {
    let questions = vec![
        create_test_question(1, Some(Level::Beginner)),
        create_test_question(2, Some(Level::Master)),
        create_test_question(3, None),
        create_test_question(4, Some(Level::Beginner)),
    ];

    let ids: Vec<u64> = filter_questions_by_level(questions, Level::Beginner)
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn test_sort_materials_by_kind_is_stable() {
    let mut materials = vec![
        create_test_material(1, MaterialKind::Video),
        create_test_material(2, MaterialKind::Slides),
        create_test_material(3, MaterialKind::Book),
        create_test_material(4, MaterialKind::Video),
        create_test_material(5, MaterialKind::Journal),
        create_test_material(6, MaterialKind::Book),
    ];

    sort_materials_by_kind(&mut materials);

    let ids: Vec<u64> = materials.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3, 6, 5, 2, 1, 4]);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    assert_eq!(truncate("this is too long", 8), "this is…");
    assert_eq!(truncate("äöüäöü", 4), "äöü…");
}

#[test]
fn test_level_parsing() {
    assert_eq!(Level::parse("beginner"), Some(Level::Beginner));
    assert_eq!(Level::parse(" MASTER "), Some(Level::Master));
    assert_eq!(Level::parse("expert"), None);
    assert_eq!(Level::Intermediate.to_string(), "Intermediate");

    let json = serde_json::to_string(&Level::Advanced).unwrap();
    assert_eq!(json, "\"Advanced\"");
}

#[test]
fn test_material_kind_wire_names() {
    let kind: MaterialKind = serde_json::from_str("\"journal\"").unwrap();
    assert_eq!(kind, MaterialKind::Journal);
    assert_eq!(MaterialKind::Slides.to_string(), "slides");
}

#[test]
fn test_total_response_shapes() {
    for body in ["7", r#"{"total": 7}"#, r#"{"count": 7}"#] {
        let total: TotalResponse = serde_json::from_str(body).unwrap();
        assert_eq!(total.value(), 7, "{body}");
    }
}

#[test]
fn test_user_profile_keeps_unknown_fields() {
    let body = r#"{"id": 3, "role": "admin", "username": "ada", "first_name": "Ada"}"#;
    let profile: UserProfile = serde_json::from_str(body).unwrap();

    assert!(profile.has_role("admin"));
    assert_eq!(profile.display_name(), "ada");
    assert_eq!(profile.extra.get("first_name").and_then(|v| v.as_str()), Some("Ada"));

    let json = serde_json::to_string(&profile).unwrap();
    let round: UserProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(round, profile);
}
