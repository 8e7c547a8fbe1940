//! Transport layer for the MCP server.
//!
//! The registry is served over standard input/output, the default MCP
//! transport. Message processing is delegated to the MCP server handler.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
