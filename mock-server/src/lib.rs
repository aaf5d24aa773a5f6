//! In-process stand-in for the JSONPlaceholder `/users` resource.
//!
//! Reads come from a fixed seed. Writes behave like JSONPlaceholder: the
//! response looks as if the change happened, but nothing is stored.

mod seed;

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tracing::debug;

pub type Db = Arc<BTreeMap<u64, Value>>;

type JsonResponse = (StatusCode, Json<Value>);

pub fn app() -> Router {
    app_with_users(seed::users())
}

/// Router serving `users`. Records without a numeric `id` are skipped.
pub fn app_with_users(users: Vec<Value>) -> Router {
    let db: Db = Arc::new(
        users
            .into_iter()
            .filter_map(|user| user.get("id").and_then(Value::as_u64).map(|id| (id, user)))
            .collect(),
    );
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(replace_user).patch(patch_user).delete(delete_user),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<Value>> {
    Json(db.values().cloned().collect())
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> JsonResponse {
    match db.get(&id) {
        Some(user) => (StatusCode::OK, Json(user.clone())),
        None => not_found(),
    }
}

async fn create_user(State(db): State<Db>, Json(input): Json<Value>) -> JsonResponse {
    let id = db.len() as u64 + 1;
    debug!(id, "pretending to create user");
    (StatusCode::CREATED, Json(with_id(fields(input), id)))
}

async fn replace_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<Value>,
) -> JsonResponse {
    if !db.contains_key(&id) {
        return not_found();
    }
    (StatusCode::OK, Json(with_id(fields(input), id)))
}

async fn patch_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<Value>,
) -> JsonResponse {
    let Some(existing) = db.get(&id) else {
        return not_found();
    };
    let mut merged = fields(existing.clone());
    merged.extend(fields(input));
    (StatusCode::OK, Json(with_id(merged, id)))
}

async fn delete_user(Path(id): Path<u64>) -> JsonResponse {
    debug!(id, "pretending to delete user");
    (StatusCode::OK, Json(json!({})))
}

fn not_found() -> JsonResponse {
    (StatusCode::NOT_FOUND, Json(json!({})))
}

/// Top-level fields of an object payload; anything else contributes none.
fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn with_id(mut fields: Map<String, Value>, id: u64) -> Value {
    fields.insert("id".to_string(), json!(id));
    Value::Object(fields)
}
