#![allow(dead_code)]

//! In-process stand-in for the Learnitor backend.
//!
//! Records are kept as plain JSON per table. Every route except login
//! requires `Authorization: Token <credential>` with a credential the login
//! route handed out.

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Extension, Json, Router,
    extract::{Path as UrlPath, Query, Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use learnitor_admin::{
    backend::{ApiClient, Credentials, auth},
    management::{SessionManager, SessionStore},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const ADMIN_EMAIL: &str = "admin@test.io";
pub const EDITOR_EMAIL: &str = "editor@test.io";
pub const PASSWORD: &str = "secret";

#[derive(Default)]
pub struct Db {
    next_id: u64,
    tables: HashMap<&'static str, BTreeMap<u64, Value>>,
    sessions: HashMap<String, Value>,
    /// Updates carrying one of these texts are answered only after the delay.
    delays: HashMap<String, Duration>,
}

impl Db {
    fn insert(&mut self, table: &'static str, mut record: Value) -> Value {
        self.next_id += 1;
        let id = self.next_id;
        if let Value::Object(map) = &mut record {
            map.insert("id".to_string(), json!(id));
        }
        self.tables.entry(table).or_default().insert(id, record.clone());
        record
    }

    fn count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, BTreeMap::len)
    }
}

type Shared = Arc<Mutex<Db>>;

#[derive(Clone)]
struct CurrentUser(Value);

pub struct MockBackend {
    pub base_url: String,
    db: Shared,
}

impl MockBackend {
    pub async fn start() -> Self {
        let db: Shared = Arc::default();
        let app = router(db.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            db,
        }
    }

    /// Inserts a record and returns its identifier.
    pub fn seed(&self, table: &'static str, record: Value) -> u64 {
        let record = self.db.lock().unwrap().insert(table, record);
        record["id"].as_u64().unwrap()
    }

    pub fn records(&self, table: &str) -> Vec<Value> {
        self.db
            .lock()
            .unwrap()
            .tables
            .get(table)
            .map(|t| t.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn record(&self, table: &str, id: u64) -> Option<Value> {
        self.db.lock().unwrap().tables.get(table)?.get(&id).cloned()
    }

    pub fn delay_updates_with_text(&self, text: &str, delay: Duration) {
        self.db.lock().unwrap().delays.insert(text.to_string(), delay);
    }

    /// Invalidates every credential handed out so far.
    pub fn revoke_all_sessions(&self) {
        self.db.lock().unwrap().sessions.clear();
    }

    pub fn active_sessions(&self) -> usize {
        self.db.lock().unwrap().sessions.len()
    }

    /// Unauthenticated client with its own credential holder.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url, Credentials::default()).unwrap()
    }

    /// Client already carrying an administrator credential.
    pub async fn admin_client(&self) -> ApiClient {
        let response = auth::login(&self.client(), ADMIN_EMAIL, PASSWORD).await.unwrap();
        ApiClient::new(&self.base_url, Credentials::from_token(response.token)).unwrap()
    }

    pub fn session_manager(&self, dir: &Path) -> SessionManager {
        SessionManager::new(self.client(), SessionStore::new(dir))
    }
}

type Params = Query<HashMap<String, String>>;
type Id = UrlPath<u64>;

fn router(db: Shared) -> Router {
    let protected = Router::new()
        .route("/api/user/", get(current_user))
        .route(
            "/api/topics/total/",
            get(|State(db): State<Shared>| async move {
                Json(json!(db.lock().unwrap().count("topics")))
            }),
        )
        .route(
            "/api/questions/total/",
            get(|State(db): State<Shared>| async move {
                Json(json!({ "total": db.lock().unwrap().count("questions") }))
            }),
        )
        .route(
            "/api/questions/by_topics/",
            get(|State(db): State<Shared>, Query(query): Params| async move {
                list(&db, "questions", Some(("topic_id", "topic")), &query)
            }),
        )
        .merge(resource("courses", None, "title"))
        .merge(resource("categories", None, "name"))
        .merge(resource("topics", Some(("course_id", "course")), "title"))
        .merge(resource("questions", Some(("topic_id", "topic")), "text"))
        .merge(resource("answers", Some(("question_id", "question")), "text"))
        .merge(resource("materials", Some(("topic_id", "topic")), "name"))
        .route_layer(middleware::from_fn_with_state(db.clone(), require_token));

    Router::new()
        .route("/api/login/", post(login))
        .merge(protected)
        .with_state(db)
}

fn resource(
    table: &'static str,
    filter: Option<(&'static str, &'static str)>,
    required: &'static str,
) -> Router<Shared> {
    Router::new()
        .route(
            &format!("/api/{table}/"),
            get(move |State(db): State<Shared>, Query(query): Params| async move {
                list(&db, table, filter, &query)
            })
            .post(move |State(db): State<Shared>, Json(body): Json<Value>| async move {
                create(&db, table, required, body)
            }),
        )
        .route(
            &format!("/api/{table}/{{id}}/"),
            patch(
                move |State(db): State<Shared>, UrlPath(id): Id, Json(body): Json<Value>| {
                    update(db, table, id, body, false)
                },
            )
            .put(
                move |State(db): State<Shared>, UrlPath(id): Id, Json(body): Json<Value>| {
                    update(db, table, id, body, true)
                },
            )
            .delete(move |State(db): State<Shared>, UrlPath(id): Id| async move {
                remove(&db, table, id)
            }),
        )
}

async fn login(State(db): State<Shared>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let (id, role) = match (email, password) {
        (ADMIN_EMAIL, PASSWORD) => (1, "admin"),
        (EDITOR_EMAIL, PASSWORD) => (2, "editor"),
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Invalid email or password." })),
            )
                .into_response();
        }
    };

    let mut db = db.lock().unwrap();
    db.next_id += 1;
    let token = format!("token-{}", db.next_id);
    let user = json!({ "id": id, "role": role, "email": email });
    db.sessions.insert(token.clone(), user.clone());

    Json(json!({ "token": token, "user": user })).into_response()
}

async fn current_user(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<Value> {
    Json(user)
}

async fn require_token(State(db): State<Shared>, mut req: Request, next: Next) -> Response {
    let user = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Token "))
        .and_then(|token| db.lock().unwrap().sessions.get(token).cloned());

    match user {
        Some(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            next.run(req).await
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid token." })),
        )
            .into_response(),
    }
}

fn list(
    db: &Shared,
    table: &str,
    filter: Option<(&str, &str)>,
    query: &HashMap<String, String>,
) -> Response {
    let wanted = filter.and_then(|(param, field)| {
        query
            .get(param)
            .map(|value| (field, value.parse::<u64>().ok()))
    });

    let db = db.lock().unwrap();
    let records: Vec<Value> = db
        .tables
        .get(table)
        .map(|t| t.values().cloned().collect())
        .unwrap_or_default();

    let records: Vec<Value> = match wanted {
        Some((field, value)) => records
            .into_iter()
            .filter(|r| r.get(field).and_then(Value::as_u64) == value)
            .collect(),
        None => records,
    };

    Json(records).into_response()
}

fn create(db: &Shared, table: &'static str, required: &str, body: Value) -> Response {
    let present = body
        .get(required)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !present {
        let mut errors = serde_json::Map::new();
        errors.insert(required.to_string(), json!(["This field is required."]));
        return (StatusCode::BAD_REQUEST, Json(Value::Object(errors))).into_response();
    }

    let record = db.lock().unwrap().insert(table, body);
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn update(db: Shared, table: &'static str, id: u64, body: Value, replace: bool) -> Response {
    let delay = {
        let db = db.lock().unwrap();
        body.get("text")
            .and_then(Value::as_str)
            .and_then(|text| db.delays.get(text).copied())
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let mut db = db.lock().unwrap();
    let Some(record) = db.tables.get_mut(table).and_then(|t| t.get_mut(&id)) else {
        return not_found();
    };

    let (Value::Object(target), Value::Object(changes)) = (&mut *record, body) else {
        let detail = json!({ "detail": "Expected an object." });
        return (StatusCode::BAD_REQUEST, Json(detail)).into_response();
    };
    if replace {
        target.retain(|key, _| key == "id");
    }
    for (key, value) in changes {
        if key != "id" {
            target.insert(key, value);
        }
    }

    Json(record.clone()).into_response()
}

fn remove(db: &Shared, table: &str, id: u64) -> Response {
    let removed = db
        .lock()
        .unwrap()
        .tables
        .get_mut(table)
        .and_then(|t| t.remove(&id));

    match removed {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response()
}
