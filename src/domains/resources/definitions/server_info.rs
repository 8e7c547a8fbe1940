//! Server info resource definition.

use serde_json::json;

use super::ResourceDefinition;
use crate::core::Config;
use crate::domains::resources::content::FunctionContent;

/// Server information resource (computed on every read).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "mcp://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Information about this MCP server";
    const MIME_TYPE: &'static str = "application/json";

    type Source = FunctionContent;

    fn source(config: &Config) -> FunctionContent {
        let name = config.server.name.clone();
        let version = config.server.version.clone();
        let base_path = config.resources.base_path.clone();

        FunctionContent::new(move || {
            let info = json!({
                "server": name,
                "version": version,
                "base_path": base_path,
            });
            async move { Ok::<_, anyhow::Error>(info) }
        })
    }
}
