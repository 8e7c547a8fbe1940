//! Configuration value template definition.

use anyhow::anyhow;
use serde_json::Value;
use tracing::warn;

use super::TemplateDefinition;
use crate::core::Config;
use crate::domains::resources::template::{Bindings, TemplateFn};

/// `config://{section}/{key}` - one value from the running configuration.
pub struct ConfigValueTemplate;

impl TemplateDefinition for ConfigValueTemplate {
    const URI_TEMPLATE: &'static str = "config://{section}/{key}";
    const NAME: &'static str = "Configuration Values";
    const DESCRIPTION: &'static str = "Access configuration values by section and key";
    const MIME_TYPE: &'static str = "application/json";

    fn producer(config: &Config) -> TemplateFn {
        // Snapshot taken at registration; the config does not change afterwards.
        let snapshot = serde_json::to_value(config).map_err(|e| {
            warn!("Configuration snapshot unavailable: {}", e);
            e.to_string()
        });

        TemplateFn::from_sync(["section", "key"], move |bindings: Bindings| {
            let section = bindings.get("section").unwrap_or_default();
            let key = bindings.get("key").unwrap_or_default();
            lookup(&snapshot, section, key)
        })
    }
}

fn lookup(snapshot: &Result<Value, String>, section: &str, key: &str) -> anyhow::Result<Value> {
    let snapshot = snapshot
        .as_ref()
        .map_err(|e| anyhow!("Configuration snapshot unavailable: {e}"))?;

    snapshot
        .get(section)
        .and_then(|s| s.get(key))
        .cloned()
        .ok_or_else(|| anyhow!("Unknown configuration key: {section}.{key}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::template::{ResourceTemplate, TemplateOptions};

    fn template(config: &Config) -> ResourceTemplate {
        ResourceTemplate::from_fn(
            ConfigValueTemplate::producer(config),
            ConfigValueTemplate::URI_TEMPLATE,
            TemplateOptions::new(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_config_value_lookup() {
        let mut config = Config::default();
        config.server.name = "lookup-test".to_string();
        let template = template(&config);

        let uri = "config://server/name";
        let bindings = template.matches(uri).unwrap();
        let resource = template.create_resource(uri, bindings).await.unwrap();
        let content = resource.read().await.unwrap();
        assert_eq!(content.as_text(), Some("\"lookup-test\""));
    }

    #[tokio::test]
    async fn test_config_value_unknown_key() {
        let template = template(&Config::default());

        let uri = "config://server/missing";
        let bindings = template.matches(uri).unwrap();
        let err = template.create_resource(uri, bindings).await.unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key: server.missing"));
    }

    #[test]
    fn test_lookup_reports_missing_snapshot() {
        let snapshot = Err("key must be a string".to_string());
        let err = lookup(&snapshot, "server", "name").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Configuration snapshot unavailable: key must be a string"));
        assert!(!message.contains("Unknown configuration key"));
    }
}
