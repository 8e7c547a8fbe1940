//! Documentation readme resource definition.

use super::ResourceDefinition;
use crate::core::Config;
use crate::domains::resources::content::{ResourceContent, StaticContent};

/// Server documentation resource (static Markdown).
pub struct DocsReadmeResource;

impl ResourceDefinition for DocsReadmeResource {
    const URI: &'static str = "mcp://server/docs/readme";
    const NAME: &'static str = "Server Documentation";
    const DESCRIPTION: &'static str = "Documentation for using this MCP server";
    const MIME_TYPE: &'static str = "text/markdown";

    type Source = StaticContent;

    fn source(_config: &Config) -> StaticContent {
        StaticContent(ResourceContent::Text(DOCUMENTATION.to_string()))
    }
}

const DOCUMENTATION: &str = r#"# Resource Registry

Resources are addressed by URI. Exact URIs are looked up first; otherwise
templates are tried in the order they were registered and the first match
produces the resource.

## Available Resources

- `mcp://server/info`: Server information
- `mcp://server/docs/readme`: This documentation

## Available Templates

- `greet://{name}`: A greeting for `name`
- `config://{section}/{key}`: A single configuration value
- `files://{name}`: A file under the configured base path (when set)
"#;
