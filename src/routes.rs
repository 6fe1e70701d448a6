//! Route table and route guard.
//!
//! Every screen of the admin client has a [`Route`]. Whether a route may be
//! shown is decided by [`guard`], a pure function of the current
//! [`Session`]: it holds no state of its own, so the CLI (or any other
//! front end) asks it before rendering and follows the [`Gate`] it returns.
//!
//! | Route | Path | Protected |
//! |---|---|---|
//! | Login | `/` | no |
//! | Dashboard | `/dashboard` | yes |
//! | Courses | `/courses` | yes |
//! | Topics | `/courses/{course_id}/topics` | yes |
//! | TopicContent | `/topics/{topic_id}/topic-content` | yes |
//! | Levels | `/topic-content/{topic_id}/levels` | yes |
//! | Materials | `/topic-content/{topic_id}/materials` | yes |
//! | Questions | `/topic-content/{topic_id}/levels/{level}/questions-answers` | yes |
//! | NotFound | `/404` | no |
//!
//! Parsing also accepts a display title in front of the identifier, e.g.
//! `/courses/Algebra/5/topics`.

use std::fmt;

use crate::{
    management::Session,
    types::{Level, RecordId, UserProfile},
};

/// Role required by protected routes unless the policy says otherwise.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Courses,
    Topics { course_id: RecordId },
    TopicContent { topic_id: RecordId },
    Levels { topic_id: RecordId },
    Materials { topic_id: RecordId },
    Questions { topic_id: RecordId, level: Level },
    NotFound,
}

impl Route {
    /// Resolves a path. Anything unrecognized is [`Route::NotFound`].
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Some(Route::Login),
            ["dashboard"] => Some(Route::Dashboard),
            ["courses"] => Some(Route::Courses),
            ["courses", rest @ .., "topics"] => {
                trailing_id(rest).map(|course_id| Route::Topics { course_id })
            }
            ["topics", rest @ .., "topic-content"] => {
                trailing_id(rest).map(|topic_id| Route::TopicContent { topic_id })
            }
            ["topic-content", rest @ .., "levels"] => {
                trailing_id(rest).map(|topic_id| Route::Levels { topic_id })
            }
            ["topic-content", rest @ .., "materials"] => {
                trailing_id(rest).map(|topic_id| Route::Materials { topic_id })
            }
            ["topic-content", rest @ .., "levels", level, "questions-answers"] => {
                trailing_id(rest)
                    .zip(Level::parse(level))
                    .map(|(topic_id, level)| Route::Questions { topic_id, level })
            }
            _ => None,
        };

        route.unwrap_or(Route::NotFound)
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Courses => "/courses".to_string(),
            Route::Topics { course_id } => format!("/courses/{course_id}/topics"),
            Route::TopicContent { topic_id } => format!("/topics/{topic_id}/topic-content"),
            Route::Levels { topic_id } => format!("/topic-content/{topic_id}/levels"),
            Route::Materials { topic_id } => format!("/topic-content/{topic_id}/materials"),
            Route::Questions { topic_id, level } => {
                format!("/topic-content/{topic_id}/levels/{level}/questions-answers")
            }
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }

    /// The login screen is pointless for someone already signed in.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// `[id]` or `[title, id]`.
fn trailing_id(segments: &[&str]) -> Option<RecordId> {
    match segments {
        [id] | [_, id] => id.parse().ok(),
        _ => None,
    }
}

/// Outcome of guarding a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// The session is still being restored; show a loading indicator.
    Loading,
    /// Show this route instead of the requested one.
    Redirect(Route),
    Render(Route),
}

/// Who may open protected routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardPolicy {
    /// `None` admits any authenticated profile.
    pub required_role: Option<String>,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            required_role: Some(ADMIN_ROLE.to_string()),
        }
    }
}

impl GuardPolicy {
    pub fn any_user() -> Self {
        Self { required_role: None }
    }

    pub fn permits(&self, profile: &UserProfile) -> bool {
        match &self.required_role {
            Some(role) => profile.has_role(role),
            None => true,
        }
    }
}

/// Decides what to show for `route` in the given session.
pub fn guard(session: &Session, route: Route, policy: &GuardPolicy) -> Gate {
    if session.is_loading() {
        return Gate::Loading;
    }

    let permitted = session.profile().is_some_and(|profile| policy.permits(profile));

    if route.requires_auth() && !permitted {
        return Gate::Redirect(Route::Login);
    }
    if route.should_redirect_when_authenticated() && permitted {
        return Gate::Redirect(Route::Dashboard);
    }

    Gate::Render(route)
}
