use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Backend-assigned record identifier.
pub type RecordId = u64;

/// Records that carry a backend identifier.
pub trait Identified {
    fn id(&self) -> RecordId;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> RecordId {
                self.id
            }
        })*
    };
}

identified!(Course, Category, Topic, Question, Answer, Material);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: RecordId,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn has_role(&self, role: &str) -> bool {
        self.role.eq_ignore_ascii_case(role)
    }

    /// Name shown in prompts: email, then username, then the id.
    pub fn display_name(&self) -> String {
        self.email
            .clone()
            .or_else(|| self.username.clone())
            .unwrap_or_else(|| format!("user #{}", self.id))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Count endpoints answer either a bare number or a small object.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum TotalResponse {
    Bare(u64),
    Total { total: u64 },
    Count { count: u64 },
}

impl TotalResponse {
    pub fn value(self) -> u64 {
        match self {
            TotalResponse::Bare(n)
            | TotalResponse::Total { total: n }
            | TotalResponse::Count { count: n } => n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    /// Identifiers of the categories the course belongs to.
    #[serde(default)]
    pub category: Vec<RecordId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: Vec<RecordId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoursePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<RecordId>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub course: RecordId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicDraft {
    pub title: String,
    pub description: String,
    pub course: RecordId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<RecordId>,
}

/// Difficulty tier a question is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
        Level::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Master => "Master",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Level::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: RecordId,
    pub text: String,
    /// Time allowed to answer, in seconds.
    #[serde(default)]
    pub duration: Option<u32>,
    pub topic: RecordId,
    /// `None` when the backend sends no level or one outside [`Level::ALL`].
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: Option<Level>,
}

fn lenient_level<'de, D>(deserializer: D) -> Result<Option<Level>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(Level::parse))
}

/// Questions are updated with PUT, so the draft doubles as the full update body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub duration: Option<u32>,
    pub topic: RecordId,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: RecordId,
    pub text: String,
    #[serde(rename = "isRight", default)]
    pub is_right: bool,
    pub question: RecordId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerDraft {
    pub text: String,
    #[serde(rename = "isRight")]
    pub is_right: bool,
    pub question: RecordId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "isRight", skip_serializing_if = "Option::is_none")]
    pub is_right: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<RecordId>,
}

/// Kind of study material.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    #[default]
    Video,
    Journal,
    Book,
    Slides,
}

impl MaterialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Video => "video",
            MaterialKind::Journal => "journal",
            MaterialKind::Book => "book",
            MaterialKind::Slides => "slides",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: RecordId,
    pub name: String,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    pub topic: RecordId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialDraft {
    pub name: String,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    pub topic: RecordId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MaterialKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<RecordId>,
}

/// A course together with its topics and per-topic question counts.
#[derive(Debug, Clone)]
pub struct CourseDetails {
    pub course: Course,
    pub topics: Vec<TopicSummary>,
}

impl CourseDetails {
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn question_count(&self) -> usize {
        self.topics.iter().map(|t| t.question_count).sum()
    }
}

#[derive(Debug, Clone)]
pub struct TopicSummary {
    pub topic: Topic,
    pub question_count: usize,
}

#[derive(Tabled)]
pub struct CourseTableRow {
    pub id: RecordId,
    pub title: String,
    pub categories: String,
    /// Empty unless details were requested.
    pub topics: String,
    pub questions: String,
}

#[derive(Tabled)]
pub struct CategoryTableRow {
    pub id: RecordId,
    pub name: String,
}

#[derive(Tabled)]
pub struct TopicTableRow {
    pub id: RecordId,
    pub title: String,
    pub description: String,
}

#[derive(Tabled)]
pub struct QuestionTableRow {
    pub id: RecordId,
    pub text: String,
    pub duration: String,
    pub level: String,
}

#[derive(Tabled)]
pub struct AnswerTableRow {
    pub id: RecordId,
    pub text: String,
    pub correct: String,
}

#[derive(Tabled)]
pub struct MaterialTableRow {
    pub id: RecordId,
    pub kind: String,
    pub name: String,
    pub link: String,
}
