use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

/// Path the Students resource is mounted under.
pub const RESOURCE_PATH: &str = "/api/Students";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateStudent {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    pub email: String,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    students: BTreeMap<i64, Student>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route(RESOURCE_PATH, get(list_students).post(create_student))
        .route(
            "/api/Students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// A 400 carrying a plain-text message, the way the production API reports
/// validation failures.
fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message.to_string(),
    )
        .into_response()
}

async fn list_students(State(db): State<Db>) -> Json<Vec<Student>> {
    let store = db.read().await;
    Json(store.students.values().cloned().collect())
}

async fn create_student(State(db): State<Db>, Json(input): Json<CreateStudent>) -> Response {
    if input.name.trim().is_empty() {
        return bad_request("Name is required.");
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let student = Student {
        id: store.next_id,
        name: input.name,
        age: input.age,
        email: input.email,
    };
    store.students.insert(student.id, student.clone());
    tracing::info!(id = student.id, "student created");
    (StatusCode::CREATED, Json(student)).into_response()
}

async fn get_student(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, StatusCode> {
    let store = db.read().await;
    store.students.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_student(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<Student>,
) -> Response {
    if input.id != id {
        return bad_request("Student id in the body does not match the URL.");
    }
    if input.name.trim().is_empty() {
        return bad_request("Name is required.");
    }
    let mut store = db.write().await;
    match store.students.get_mut(&id) {
        Some(student) => {
            *student = input;
            Json(student.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_student(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.students.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
