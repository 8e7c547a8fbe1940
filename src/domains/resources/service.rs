//! Resource service implementation.
//!
//! The ResourceService owns the [`ResourceManager`] and translates between the
//! registry's types and the rmcp protocol model. Resources are registered via
//! `registry.rs`; adding one does NOT require modifying this file.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rmcp::model::{
    AnnotateAble, Meta, RawResource, RawResourceTemplate, ReadResourceResult,
    Resource as McpResource, ResourceContents, ResourceTemplate as McpResourceTemplate,
};
use tracing::info;

use super::content::{Resource, ResourceContent};
use super::error::ResourceError;
use super::manager::ResourceManager;
use super::registry::register_builtin;
use super::template::ResourceTemplate;
use crate::core::Config;

/// Service exposing the resource registry to the MCP server.
#[derive(Debug)]
pub struct ResourceService {
    manager: ResourceManager,
}

impl ResourceService {
    /// Create a service with every built-in resource registered.
    pub fn new(config: &Config) -> Result<Self, ResourceError> {
        info!("Initializing ResourceService");

        let mut manager = ResourceManager::new(config.resources.warn_on_duplicate_resources);
        register_builtin(&mut manager, config)?;

        info!(
            "Registered {} resources and {} templates",
            manager.resource_count(),
            manager.template_count()
        );
        Ok(Self { manager })
    }

    /// Wrap an existing manager.
    pub fn with_manager(manager: ResourceManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &ResourceManager {
        &self.manager
    }

    /// List all registered resources.
    pub async fn list_resources(&self) -> Vec<McpResource> {
        self.manager
            .list_resources()
            .iter()
            .map(|r| to_mcp_resource(r))
            .collect()
    }

    /// List all registered resource templates.
    pub async fn list_resource_templates(&self) -> Vec<McpResourceTemplate> {
        self.manager
            .list_templates()
            .iter()
            .map(|t| to_mcp_template(t))
            .collect()
    }

    /// Resolve and read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let resource = self.manager.get_resource(uri).await?;
        let content = resource.read().await?;

        let contents = match content {
            ResourceContent::Text(text) => ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(resource.mime_type().to_string()),
                text,
                meta: None,
            },
            ResourceContent::Binary(data) => ResourceContents::BlobResourceContents {
                uri: uri.to_string(),
                mime_type: Some(resource.mime_type().to_string()),
                blob: STANDARD.encode(data),
                meta: None,
            },
        };

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

fn to_mcp_resource(resource: &Resource) -> McpResource {
    let mut raw = RawResource::new(resource.uri(), resource.name());
    raw.title = resource.title().map(str::to_string);
    raw.description = resource.description().map(str::to_string);
    raw.mime_type = Some(resource.mime_type().to_string());
    raw.meta = resource.meta().cloned().map(Meta);
    raw.no_annotation()
}

fn to_mcp_template(template: &ResourceTemplate) -> McpResourceTemplate {
    RawResourceTemplate {
        uri_template: template.uri_template().to_string(),
        name: template.name().to_string(),
        title: template.title().map(str::to_string),
        description: template.description().map(str::to_string),
        mime_type: Some(template.mime_type().to_string()),
    }
    .no_annotation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn service() -> ResourceService {
        ResourceService::new(&Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].raw.uri, "mcp://server/info");

        let templates = service.list_resource_templates().await;
        assert_eq!(templates[0].raw.uri_template, "greet://{name}");
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let result = service().read_resource("mcp://server/docs/readme").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().contents.len(), 1);
    }

    #[tokio::test]
    async fn test_list_resources_passes_metadata_and_title_through() {
        let mut versioned = Map::new();
        versioned.insert("version".to_string(), json!("1.0"));
        versioned.insert("public".to_string(), json!(true));

        let mut manager = ResourceManager::default();
        manager.add_resource(
            Resource::text("resource://v1/data", "v1", "v1 data")
                .with_title("Version One")
                .with_meta(versioned.clone()),
        );
        manager.add_resource(
            Resource::text("resource://empty", "empty", "data").with_meta(Map::new()),
        );
        manager.add_resource(Resource::text("resource://plain", "plain", "plain data"));
        let service = ResourceService::with_manager(manager);

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 3);

        assert_eq!(resources[0].raw.title.as_deref(), Some("Version One"));
        assert_eq!(resources[0].raw.meta.as_ref().map(|m| &m.0), Some(&versioned));

        assert!(resources[1].raw.title.is_none());
        assert_eq!(resources[1].raw.meta.as_ref().map(|m| &m.0), Some(&Map::new()));

        assert!(resources[2].raw.meta.is_none());
    }

    #[tokio::test]
    async fn test_read_text_resource_reports_resource_mime_type() {
        let service = service();

        let listed = service.list_resources().await;
        assert_eq!(listed[0].raw.mime_type.as_deref(), Some("application/json"));

        let result = service.read_resource("mcp://server/info").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { mime_type, .. } => {
                assert_eq!(mime_type.as_deref(), Some("application/json"));
            }
            other => panic!("Expected text contents, got {other:?}"),
        }

        let result = service.read_resource("greet://world").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { mime_type, .. } => {
                assert_eq!(mime_type.as_deref(), Some("text/plain"));
            }
            other => panic!("Expected text contents, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_templated_resource() {
        let result = service().read_resource("greet://world").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { uri, text, .. } => {
                assert_eq!(uri, "greet://world");
                assert_eq!(text, "Hello, world!");
            }
            other => panic!("Expected text contents, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_binary_resource() {
        let mut manager = ResourceManager::default();
        manager.add_resource(Resource::binary("blob://data", "data", vec![1, 2, 3]));
        let service = ResourceService::with_manager(manager);

        let result = service.read_resource("blob://data").await.unwrap();
        match &result.contents[0] {
            ResourceContents::BlobResourceContents {
                blob, mime_type, ..
            } => {
                assert_eq!(blob, &STANDARD.encode([1u8, 2, 3]));
                assert_eq!(mime_type.as_deref(), Some("application/octet-stream"));
            }
            other => panic!("Expected blob contents, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("mcp://server/nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
