//! HTTP front end.
//!
//! Maps the `/list/*` and `/get/*` routes and their query strings onto
//! [`QueryRequest`]s. Bodies are plain text, one report per matched entity.

use crate::errors::QueryError;
use crate::service::{QueryRequest, QueryService};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use schema::{Collection, SortKey, SortTarget};
use serde::Deserialize;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tower_http::trace::TraceLayer;

pub const INVALID_TYPE_MESSAGE: &str = "Is that a valid type ?";
pub const NOT_HANDLED_MESSAGE: &str = "Oops, there is no such a thing :(";

pub type AppState = Arc<QueryService>;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub type_filter: Option<String>,
    pub sortby: Option<String>,
}

impl ListParams {
    /// An empty `type=` means no filter.
    fn type_filter(&self) -> Option<&str> {
        self.type_filter.as_deref().filter(|value| !value.is_empty())
    }

    fn apply_sort(&self, request: QueryRequest) -> QueryRequest {
        match &self.sortby {
            Some(key) => request.with_sort_key(key.to_lowercase()),
            None => request,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NameParams {
    pub name: Option<String>,
}

impl NameParams {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

pub fn create_router(service: AppState) -> Router {
    Router::new()
        .route("/list/types", get(list_types))
        .route("/list/pokemons", get(list_pokemons))
        .route("/list/moves", get(list_moves))
        .route("/get/pokemon", get(get_pokemon))
        .route("/get/move", get(get_move))
        .route("/get/type", get(get_type))
        .route("/help", get(help))
        .fallback(not_handled)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        match self {
            QueryError::InvalidType(name) => {
                tracing::info!(type_name = %name, "rejected invalid type");
                (StatusCode::BAD_REQUEST, INVALID_TYPE_MESSAGE).into_response()
            }
            // An empty result, not a failure.
            QueryError::NotFound(name) => {
                tracing::debug!(name = %name, "no match");
                (StatusCode::OK, String::new()).into_response()
            }
            QueryError::Unsupported { .. } => not_handled_response(),
        }
    }
}

fn run(service: &QueryService, request: QueryRequest) -> Result<String, QueryError> {
    let response = service.execute(&request)?;
    if let Some(key) = response.sort.key() {
        tracing::info!("Sorted by: {}", key);
    }
    Ok(response.to_text())
}

async fn list_types(
    State(service): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<String, QueryError> {
    run(&service, params.apply_sort(QueryRequest::list(Collection::Types)))
}

async fn list_pokemons(
    State(service): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<String, QueryError> {
    let mut request = QueryRequest::list(Collection::Pokemon);
    if let Some(type_name) = params.type_filter() {
        request = request.with_type_filter(type_name);
    }
    run(&service, params.apply_sort(request))
}

async fn list_moves(
    State(service): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<String, QueryError> {
    let request = match params.type_filter() {
        Some(type_name) => QueryRequest::by_type(Collection::Moves, type_name),
        None => QueryRequest::list(Collection::Moves),
    };
    run(&service, params.apply_sort(request))
}

async fn get_pokemon(
    State(service): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<String, QueryError> {
    run(&service, QueryRequest::by_name(Collection::Pokemon, params.name()))
}

async fn get_move(
    State(service): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<String, QueryError> {
    run(&service, QueryRequest::by_name(Collection::Moves, params.name()))
}

async fn get_type(
    State(service): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<String, QueryError> {
    run(&service, QueryRequest::by_name(Collection::Types, params.name()))
}

async fn help() -> String {
    help_text()
}

async fn not_handled() -> Response {
    not_handled_response()
}

fn not_handled_response() -> Response {
    (StatusCode::NOT_FOUND, NOT_HANDLED_MESSAGE).into_response()
}

/// Route listing served at `/help`
pub fn help_text() -> String {
    let sort_keys = |target: SortTarget| {
        SortKey::iter()
            .filter(|key| key.target() == target)
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    [
        "Routes:".to_string(),
        "\t/list/types".to_string(),
        "\t/list/pokemons?type=<type>&sortby=<key>".to_string(),
        "\t/list/moves?type=<type>&sortby=<key>".to_string(),
        "\t/get/pokemon?name=<name>".to_string(),
        "\t/get/move?name=<name>".to_string(),
        "\t/get/type?name=<name>".to_string(),
        "Sort keys:".to_string(),
        format!("\t{}: {}", SortTarget::Pokemon, sort_keys(SortTarget::Pokemon)),
        format!("\t{}: {}", SortTarget::Moves, sort_keys(SortTarget::Moves)),
    ]
    .join("\n")
}
