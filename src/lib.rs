//! Resource Registry Library
//!
//! This crate provides a registry of URI-addressable resources and
//! parameterized resource templates, served over the Model Context Protocol.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **resources**: Resource/template tables, URI template matching and resolution
//!
//! # Example
//!
//! ```rust,no_run
//! use resource_registry::domains::resources::{
//!     Bindings, Resource, ResourceManager, TemplateFn, TemplateOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut manager = ResourceManager::default();
//!     manager.add_resource(Resource::text("docs://intro", "intro", "Welcome"));
//!     manager.add_template(
//!         TemplateFn::from_sync(["name"], |b: Bindings| {
//!             Ok::<_, anyhow::Error>(format!("Hello, {}!", b.get("name").unwrap_or_default()))
//!         }),
//!         "greet://{name}",
//!         TemplateOptions::new(),
//!     )?;
//!
//!     let resource = manager.get_resource("greet://world").await?;
//!     assert_eq!(resource.read().await?.as_text(), Some("Hello, world!"));
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::resources::{Resource, ResourceError, ResourceManager, ResourceTemplate};
