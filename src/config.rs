//! Command-line and environment configuration.

use clap::{Args, Parser};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data.json";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Where the pokedex data comes from. Shared by every binary.
#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// Path to the pokedex JSON document
    #[arg(long = "data", env = "POKEDEX_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data_path: PathBuf,
}

/// Options for the HTTP server
#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex", version, about = "Serve pokedex lookups over HTTP")]
pub struct ServerConfig {
    #[command(flatten)]
    pub data: DataArgs,

    /// Address to listen on
    #[arg(long, env = "POKEDEX_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,
}

/// Options for the MCP stdio server
#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex-mcp", version, about = "Serve pokedex lookups as MCP tools over stdio")]
pub struct McpConfig {
    #[command(flatten)]
    pub data: DataArgs,
}
