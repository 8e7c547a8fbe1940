//! Project file template definition.

use anyhow::bail;
use std::path::PathBuf;

use super::TemplateDefinition;
use crate::core::Config;
use crate::domains::resources::template::{Bindings, TemplateFn};

/// `files://{name}` - a file directly under the configured base path.
pub struct ProjectFileTemplate;

impl TemplateDefinition for ProjectFileTemplate {
    const URI_TEMPLATE: &'static str = "files://{name}";
    const NAME: &'static str = "Project Files";
    const DESCRIPTION: &'static str = "Read files from the base directory by name";
    const MIME_TYPE: &'static str = "text/plain";

    fn enabled(config: &Config) -> bool {
        config.resources.base_path.is_some()
    }

    fn producer(config: &Config) -> TemplateFn {
        let base = config.resources.base_path.clone().unwrap_or_default();

        TemplateFn::new(["name"], move |bindings: Bindings| {
            let base: PathBuf = base.clone();
            let name = bindings.get("name").unwrap_or_default().to_string();
            async move {
                if name == "." || name == ".." {
                    bail!("Invalid file name: {name}");
                }
                let text = tokio::fs::read_to_string(base.join(&name)).await?;
                Ok::<_, anyhow::Error>(text)
            }
        })
    }
}
