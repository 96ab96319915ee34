//! MCP interface functions for use in the MCP server
//!
//! Each tool call is turned into a [`QueryRequest`] and the rendered result is
//! returned as plain text. Invalid types come back as `Err` so the server can
//! surface them as tool errors; missing names are ordinary text answers.

use crate::errors::QueryError;
use crate::http::help_text;
use crate::service::{QueryRequest, QueryService};
use schema::Collection;

/// Returns formatted text listing every type
pub fn handle_list_types(service: &QueryService) -> Result<String, String> {
    run_query(service, QueryRequest::list(Collection::Types), "types")
}

/// Lists pokemon, optionally restricted to a primary type and sorted
pub fn handle_list_pokemon(
    service: &QueryService,
    type_name: Option<&str>,
    sort_by: Option<&str>,
) -> Result<String, String> {
    let mut request = QueryRequest::list(Collection::Pokemon);
    if let Some(type_name) = non_empty(type_name) {
        request = request.with_type_filter(type_name);
    }
    if let Some(sort_by) = sort_by {
        request = request.with_sort_key(sort_by);
    }
    run_query(service, request, "pokemon")
}

/// Lists moves, optionally restricted to one type and sorted
pub fn handle_list_moves(
    service: &QueryService,
    type_name: Option<&str>,
    sort_by: Option<&str>,
) -> Result<String, String> {
    let mut request = match non_empty(type_name) {
        Some(type_name) => QueryRequest::by_type(Collection::Moves, type_name),
        None => QueryRequest::list(Collection::Moves),
    };
    if let Some(sort_by) = sort_by {
        request = request.with_sort_key(sort_by);
    }
    run_query(service, request, "moves")
}

/// Handles the "lookup pokemon" tool
pub fn handle_lookup_pokemon_command(service: &QueryService, name: &str) -> Result<String, String> {
    if name.trim().is_empty() {
        return Ok("What Pokemon do you want to look up? (e.g., 'Pikachu')".to_string());
    }
    run_lookup(service, QueryRequest::by_name(Collection::Pokemon, name), "Pokemon", name)
}

/// Handles the "lookup move" tool
pub fn handle_lookup_move_command(service: &QueryService, name: &str) -> Result<String, String> {
    if name.trim().is_empty() {
        return Ok("What move do you want to look up? (e.g., 'Ember')".to_string());
    }
    run_lookup(service, QueryRequest::by_name(Collection::Moves, name), "move", name)
}

/// Handles the "lookup type" tool
pub fn handle_lookup_type_command(service: &QueryService, name: &str) -> Result<String, String> {
    if name.trim().is_empty() {
        return Ok("What type do you want to look up? (e.g., 'Fire')".to_string());
    }
    run_lookup(service, QueryRequest::by_name(Collection::Types, name), "type", name)
}

pub fn get_help_display() -> String {
    help_text()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn run_query(service: &QueryService, request: QueryRequest, what: &str) -> Result<String, String> {
    match service.execute(&request) {
        Ok(response) if response.is_empty() => Ok(format!("No {} matched.", what)),
        Ok(response) => Ok(response.to_text()),
        Err(err) => Err(describe(err)),
    }
}

fn run_lookup(
    service: &QueryService,
    request: QueryRequest,
    what: &str,
    name: &str,
) -> Result<String, String> {
    match service.execute(&request) {
        Ok(response) => Ok(format!("--- {} Details ---\n{}", capitalize(what), response.to_text())),
        Err(QueryError::NotFound(_)) => Ok(format!("The {} '{}' was not found.", what, name)),
        Err(err) => Err(describe(err)),
    }
}

fn describe(err: QueryError) -> String {
    match err {
        QueryError::InvalidType(name) => format!("'{}' is not a valid type.", name),
        other => other.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
