use std::{cmp::Ordering, sync::LazyLock};

use regex::Regex;

use crate::types::{Course, Level, Material, Question, RecordId};

/// Display (`$$…$$`, `\[…\]`) and inline (`\(…\)`) math delimiters.
static FORMULA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$(.*?)\$\$|\\\((.*?)\\\)|\\\[(.*?)\\\]").expect("formula pattern is valid")
});

/// A piece of display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Math notation with its delimiters stripped.
    Formula(String),
}

impl Segment {
    pub fn is_formula(&self) -> bool {
        matches!(self, Segment::Formula(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(s) | Segment::Formula(s) => s,
        }
    }
}

pub fn contains_formula(text: &str) -> bool {
    FORMULA.is_match(text)
}

/// Splits text into literal runs and delimiter-marked formulas, in order.
///
/// Delimiters do not span lines. Text without formulas comes back as a single
/// literal segment; empty text yields no segments.
pub fn split_text_with_formulas(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in FORMULA.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if whole.start() > last {
            segments.push(Segment::Text(text[last..whole.start()].to_string()));
        }

        let inner = (1..=3)
            .find_map(|i| caps.get(i))
            .map(|m| m.as_str())
            .unwrap_or_default();
        segments.push(Segment::Formula(inner.to_string()));

        last = whole.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(text[last..].to_string()));
    }

    segments
}

/// Keeps courses tagged with at least one of the selected categories.
///
/// An empty selection keeps everything.
pub fn filter_courses_by_categories<'a>(
    courses: &'a [Course],
    selected: &[RecordId],
) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|c| selected.is_empty() || c.category.iter().any(|id| selected.contains(id)))
        .collect()
}

pub fn filter_questions_by_level(mut questions: Vec<Question>, level: Level) -> Vec<Question> {
    questions.retain(|q| q.level == Some(level));
    questions
}

/// Orders materials alphabetically by kind name, keeping the backend order
/// within a kind.
pub fn sort_materials_by_kind(materials: &mut [Material]) {
    materials.sort_by(compare_material_kinds);
}

pub fn compare_material_kinds(a: &Material, b: &Material) -> Ordering {
    a.kind.as_str().cmp(b.kind.as_str())
}

/// Shortens text for table cells, appending an ellipsis when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
