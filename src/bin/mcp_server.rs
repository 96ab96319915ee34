//! Pokedex MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp) that
//! exposes pokedex lookups as tools over stdio.

use std::borrow::Cow;
use std::sync::Arc;

use clap::Parser;
use pokedex::config::McpConfig;
use pokedex::logging::init_tracing;
use pokedex::mcp_interface::*;
use pokedex::{Pokedex, QueryService};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};

#[derive(Debug, Clone)]
pub struct PokedexService {
    tool_router: ToolRouter<PokedexService>,
    queries: Arc<QueryService>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListPokemonRequest {
    #[schemars(description = "Only list pokemon whose primary type is this (e.g. 'Fire')")]
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    #[schemars(description = "Sort descending by: baseattack, basedefense or basestamina")]
    pub sort_by: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListMovesRequest {
    #[schemars(description = "Only list moves of this type (e.g. 'Water')")]
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    #[schemars(description = "Sort descending by: damage, energy, dps or duration")]
    pub sort_by: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupRequest {
    #[schemars(description = "Name to look up, case-insensitive")]
    pub name: String,
}

fn tool_error(message: String) -> McpError {
    McpError {
        code: ErrorCode(-32602),
        message: Cow::from(message),
        data: None,
    }
}

fn text_result(result: Result<String, String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(message) => Err(tool_error(message)),
    }
}

#[tool_router]
impl PokedexService {
    pub fn new(queries: Arc<QueryService>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            queries,
        }
    }

    #[tool(description = "List every Pokemon type with its strengths, weaknesses and example Pokemon")]
    async fn list_types(&self) -> Result<CallToolResult, McpError> {
        text_result(handle_list_types(&self.queries))
    }

    #[tool(description = "List Pokemon, optionally filtered by primary type and sorted by a base stat")]
    async fn list_pokemon(
        &self,
        Parameters(request): Parameters<ListPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_list_pokemon(
            &self.queries,
            request.type_name.as_deref(),
            request.sort_by.as_deref(),
        ))
    }

    #[tool(description = "List moves, optionally filtered by type and sorted by a move stat")]
    async fn list_moves(
        &self,
        Parameters(request): Parameters<ListMovesRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_list_moves(
            &self.queries,
            request.type_name.as_deref(),
            request.sort_by.as_deref(),
        ))
    }

    #[tool(description = "Look up detailed information about a Pokemon")]
    async fn get_pokemon(
        &self,
        Parameters(request): Parameters<LookupRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_lookup_pokemon_command(&self.queries, &request.name))
    }

    #[tool(description = "Look up detailed information about a move")]
    async fn get_move(
        &self,
        Parameters(request): Parameters<LookupRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_lookup_move_command(&self.queries, &request.name))
    }

    #[tool(description = "Look up a Pokemon type")]
    async fn get_type(
        &self,
        Parameters(request): Parameters<LookupRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_lookup_type_command(&self.queries, &request.name))
    }

    #[tool(description = "Show the available queries and sort keys")]
    async fn help(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(get_help_display())]))
    }
}

#[tool_handler]
impl ServerHandler for PokedexService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = McpConfig::parse();
    init_tracing("pokedex=info,rmcp=warn,warn");

    tracing::info!("Pokedex MCP Server starting...");
    let pokedex = match Pokedex::load(&config.data.data_path) {
        Ok(pokedex) => pokedex,
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    };

    let service = PokedexService::new(Arc::new(QueryService::new(pokedex)));
    let transport = (stdin(), stdout());

    tracing::info!("Starting MCP server with transport...");
    let server = service.serve(transport).await?;

    tracing::info!("Server running, waiting for shutdown...");
    let quit_reason = server.waiting().await?;

    tracing::info!("Pokedex MCP Server exiting: {:?}", quit_reason);
    Ok(())
}
