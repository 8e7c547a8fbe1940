//! Resources domain module.
//!
//! This module handles all resource-related functionality for the MCP server.
//! Resources are URI-addressable units of content; templates produce resources
//! on demand for URIs that match a `{placeholder}` pattern.
//!
//! ## Architecture
//!
//! - `content.rs` - Resource descriptors and content sources
//! - `template.rs` - URI pattern matching and resource templates
//! - `manager.rs` - Resource and template tables, URI resolution
//! - `definitions/` - Built-in definitions (one file per resource/template)
//! - `registry.rs` - Central registration of built-ins
//! - `service.rs` - Adapter to the MCP protocol types
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` or `TemplateDefinition`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify `service.rs`!**

pub mod content;
pub mod definitions;
mod error;
pub mod manager;
mod registry;
mod service;
pub mod template;

pub use content::{
    ContentSource, FileContent, FunctionContent, Meta, Resource, ResourceContent, StaticContent,
};
pub use definitions::{ResourceDefinition, TemplateDefinition};
pub use error::ResourceError;
pub use manager::ResourceManager;
pub use registry::{register_builtin, resource_uris};
pub use service::ResourceService;
pub use template::{Bindings, ResourceTemplate, TemplateFn, TemplateOptions, UriPattern};
