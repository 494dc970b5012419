use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const JSON_API: &str = "application/vnd.api+json";

/// A stored JSON:API resource object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub relationships: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamToken {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub description: String,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub group: String,
}

/// Resources keyed by collection path (`organization/{id}/workspace`), in
/// insertion order.
#[derive(Default)]
pub struct Store {
    collections: HashMap<String, Vec<Resource>>,
    tokens: Vec<TeamToken>,
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    token: Option<Arc<str>>,
}

/// Router that accepts any bearer token.
pub fn app() -> Router {
    router(None)
}

/// Router that answers 401 unless `Authorization: Bearer <token>` matches.
pub fn app_with_token(token: &str) -> Router {
    router(Some(Arc::from(token)))
}

fn router(token: Option<Arc<str>>) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(Store::default())),
        token,
    };
    Router::new()
        .route(
            "/api/v1/{*path}",
            get(read).post(create).patch(update).delete(remove),
        )
        .route("/access-token/v1/teams", get(list_tokens).post(create_token))
        .route("/access-token/v1/teams/{id}", delete(delete_token))
        .layer(middleware::from_fn_with_state(state.clone(), authorize))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_token(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_token(token)).await
}

async fn authorize(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Some(expected) = &state.token {
        let presented = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if presented != Some(expected.as_ref()) {
            return error(StatusCode::UNAUTHORIZED, "invalid or missing bearer token");
        }
    }
    next.run(request).await
}

fn error(status: StatusCode, detail: &str) -> Response {
    let body = json!({"errors": [{"status": status.as_str(), "detail": detail}]});
    (status, [(header::CONTENT_TYPE, JSON_API)], body.to_string()).into_response()
}

fn document(status: StatusCode, data: impl Serialize) -> Response {
    let body = serde_json::to_string(&Document { data }).unwrap_or_default();
    (status, [(header::CONTENT_TYPE, JSON_API)], body).into_response()
}

/// Split a resource path into its collection key and, for item paths, the id.
/// Paths alternate `name/id`, so an odd segment count names a collection.
fn locate(path: &str) -> (String, Option<String>) {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() % 2 == 1 {
        (segments.join("/"), None)
    } else {
        match segments.split_last() {
            Some((id, collection)) => (collection.join("/"), Some(id.to_string())),
            None => (String::new(), None),
        }
    }
}

/// The `(collection, id)` of the resource owning `collection`, if nested.
fn parent_of(collection: &str) -> Option<(String, String)> {
    let segments: Vec<&str> = collection.split('/').collect();
    if segments.len() < 3 {
        return None;
    }
    let id = segments[segments.len() - 2].to_string();
    Some((segments[..segments.len() - 2].join("/"), id))
}

fn has_json_api_body(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with(JSON_API))
}

/// `attr==value` filters, compared against the attribute's string form.
fn matches(resource: &Resource, expression: &str) -> bool {
    expression.split(';').all(|clause| {
        let Some((key, expected)) = clause.split_once("==") else {
            return true;
        };
        match resource.attributes.get(key) {
            Some(Value::String(s)) => s == expected,
            Some(other) => other.to_string() == expected,
            None => false,
        }
    })
}

impl Store {
    fn find(&self, collection: &str, id: &str) -> Option<&Resource> {
        self.collections.get(collection)?.iter().find(|r| r.id == id)
    }

    fn find_mut(&mut self, collection: &str, id: &str) -> Option<&mut Resource> {
        self.collections
            .get_mut(collection)?
            .iter_mut()
            .find(|r| r.id == id)
    }
}

async fn read(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let store = state.db.read().await;
    match locate(&path) {
        (collection, Some(id)) => match store.find(&collection, &id) {
            Some(resource) => document(StatusCode::OK, resource),
            None => error(StatusCode::NOT_FOUND, &format!("Unknown identifier {id}")),
        },
        (collection, None) => {
            let filter = query
                .iter()
                .find(|(k, _)| k.starts_with("filter["))
                .map(|(_, v)| v.as_str());
            let items: Vec<&Resource> = store
                .collections
                .get(&collection)
                .into_iter()
                .flatten()
                .filter(|r| filter.map_or(true, |f| matches(r, f)))
                .collect();
            document(StatusCode::OK, items)
        }
    }
}

async fn create(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if !has_json_api_body(&headers) {
        return error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "expected application/vnd.api+json");
    }
    let (collection, id) = locate(&path);
    if id.is_some() {
        return error(StatusCode::METHOD_NOT_ALLOWED, "cannot POST to a resource");
    }
    let mut resource = match serde_json::from_str::<Document<Resource>>(&body) {
        Ok(doc) => doc.data,
        Err(err) => return error(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let mut store = state.db.write().await;
    if let Some((parent, parent_id)) = parent_of(&collection) {
        if store.find(&parent, &parent_id).is_none() {
            return error(StatusCode::NOT_FOUND, &format!("Unknown identifier {parent_id}"));
        }
    }
    resource.id = Uuid::new_v4().to_string();
    store
        .collections
        .entry(collection)
        .or_default()
        .push(resource.clone());
    document(StatusCode::CREATED, resource)
}

async fn update(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if !has_json_api_body(&headers) {
        return error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "expected application/vnd.api+json");
    }
    let (collection, Some(id)) = locate(&path) else {
        return error(StatusCode::METHOD_NOT_ALLOWED, "cannot PATCH a collection");
    };
    let patch = match serde_json::from_str::<Document<Resource>>(&body) {
        Ok(doc) => doc.data,
        Err(err) => return error(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let mut store = state.db.write().await;
    let Some(resource) = store.find_mut(&collection, &id) else {
        return error(StatusCode::NOT_FOUND, &format!("Unknown identifier {id}"));
    };
    if patch.kind != resource.kind {
        return error(StatusCode::CONFLICT, "resource type mismatch");
    }
    resource.attributes.extend(patch.attributes);
    resource.relationships.extend(patch.relationships);
    StatusCode::NO_CONTENT.into_response()
}

async fn remove(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let (collection, Some(id)) = locate(&path) else {
        return error(StatusCode::METHOD_NOT_ALLOWED, "cannot DELETE a collection");
    };
    let mut store = state.db.write().await;
    let removed = store
        .collections
        .get_mut(&collection)
        .and_then(|items| {
            let index = items.iter().position(|r| r.id == id)?;
            Some(items.remove(index))
        });
    match removed {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => error(StatusCode::NOT_FOUND, &format!("Unknown identifier {id}")),
    }
}

async fn list_tokens(State(state): State<AppState>) -> Response {
    let store = state.db.read().await;
    axum::Json(store.tokens.clone()).into_response()
}

async fn create_token(State(state): State<AppState>, body: String) -> Response {
    let mut token: TeamToken = match serde_json::from_str(&body) {
        Ok(token) => token,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };
    if token.group.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }
    token.id = Uuid::new_v4().to_string();
    let secret = format!("tk-{}", Uuid::new_v4().simple());
    state.db.write().await.tokens.push(token);
    (StatusCode::CREATED, axum::Json(json!({ "token": secret }))).into_response()
}

async fn delete_token(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let mut store = state.db.write().await;
    let before = store.tokens.len();
    store.tokens.retain(|t| t.id != id);
    if store.tokens.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
