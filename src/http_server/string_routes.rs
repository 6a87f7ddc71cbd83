//! String HTTP Routes
//!
//! Endpoints for analyzing, querying and deleting strings.
//!
//! Path lookups hash the literal path segment, so `GET /strings/Racecar`
//! and `GET /strings/racecar` address different records.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::analysis::StringRecord;
use crate::query::FilterSet;
use crate::service::StringService;
use crate::store::InMemoryRecordStore;

use super::errors::{RestError, RestResult};
use super::response::{ListResponse, SearchResponse};

// ==================
// Shared State
// ==================

/// String state shared across handlers
pub struct StringsState {
    pub service: StringService<InMemoryRecordStore>,
}

impl StringsState {
    pub fn new() -> Self {
        Self {
            service: StringService::new(InMemoryRecordStore::new()),
        }
    }
}

impl Default for StringsState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Router
// ==================

/// Create string routes, mounted under `/strings`
pub fn string_routes(state: Arc<StringsState>) -> Router {
    Router::new()
        .route("/", get(list_handler).post(create_handler))
        .route("/filter-by-natural-language", get(search_handler))
        .route("/:value", get(get_handler).delete(delete_handler))
        .with_state(state)
}

/// `/strings/` with a trailing slash, served like `/strings`.
/// A nested `/` route only matches the bare prefix.
pub fn string_index_routes(state: Arc<StringsState>) -> Router {
    Router::new()
        .route("/strings/", get(list_handler).post(create_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_handler(
    State(state): State<Arc<StringsState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> RestResult<(StatusCode, Json<StringRecord>)> {
    let Json(body) = payload.map_err(|e| RestError::InvalidBody(e.body_text()))?;
    let value = extract_value(&body)?;

    let record = state.service.create(value)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Missing `value` is a 400, a non-string `value` a 422
fn extract_value(body: &Value) -> RestResult<&str> {
    match body.get("value") {
        None => Err(RestError::MissingParam("value".to_string())),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(RestError::InvalidType("value".to_string())),
    }
}

async fn get_handler(
    State(state): State<Arc<StringsState>>,
    path: Result<Path<String>, PathRejection>,
) -> RestResult<Json<StringRecord>> {
    let Path(value) = path.map_err(|e| RestError::InvalidPath(e.body_text()))?;
    let record = state.service.get(&value)?;
    Ok(Json(record))
}

async fn list_handler(
    State(state): State<Arc<StringsState>>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse>> {
    let filters = FilterSet::from_query(&params)?;
    let records = state.service.list(&filters)?;
    Ok(Json(ListResponse::new(records, filters)))
}

async fn search_handler(
    State(state): State<Arc<StringsState>>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<Json<SearchResponse>> {
    let query = params
        .get("query")
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| RestError::MissingParam("query".to_string()))?;

    let (records, translation) = state.service.search(query)?;
    Ok(Json(SearchResponse::new(records, translation)))
}

async fn delete_handler(
    State(state): State<Arc<StringsState>>,
    path: Result<Path<String>, PathRejection>,
) -> RestResult<StatusCode> {
    let Path(value) = path.map_err(|e| RestError::InvalidPath(e.body_text()))?;
    state.service.delete(&value)?;
    Ok(StatusCode::NO_CONTENT)
}
