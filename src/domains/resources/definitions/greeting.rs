//! Greeting template definition.

use super::TemplateDefinition;
use crate::core::Config;
use crate::domains::resources::template::{Bindings, TemplateFn};

/// `greet://{name}` - a greeting for the given name.
pub struct GreetingTemplate;

impl TemplateDefinition for GreetingTemplate {
    const URI_TEMPLATE: &'static str = "greet://{name}";
    const NAME: &'static str = "greeting";
    const DESCRIPTION: &'static str = "A personalised greeting";
    const MIME_TYPE: &'static str = "text/plain";

    fn producer(_config: &Config) -> TemplateFn {
        TemplateFn::from_sync(["name"], |bindings: Bindings| {
            let name = bindings.get("name").unwrap_or_default();
            Ok::<_, anyhow::Error>(format!("Hello, {name}!"))
        })
    }
}
