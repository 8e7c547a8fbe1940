//! Core module containing shared infrastructure components.
//!
//! This module provides configuration, error handling, the MCP server handler,
//! and the transport that serves it.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError};
