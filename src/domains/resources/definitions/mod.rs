//! Built-in resource and template definitions.
//!
//! Each definition lives in its own file with:
//! - URI (or URI template) and descriptive metadata
//! - Content source (or producer for templates)
//!
//! ## Adding a New Definition
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` or `TemplateDefinition`
//! 3. Export it here
//! 4. Register in `registry.rs`

mod config_value;
mod docs_readme;
mod greeting;
mod project_file;
mod server_info;

pub use config_value::ConfigValueTemplate;
pub use docs_readme::DocsReadmeResource;
pub use greeting::GreetingTemplate;
pub use project_file::ProjectFileTemplate;
pub use server_info::ServerInfoResource;

use super::content::ContentSource;
use super::template::TemplateFn;
use crate::core::Config;

/// Trait for static resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Where the content comes from.
    type Source: ContentSource + 'static;

    /// Build the content source for this resource.
    fn source(config: &Config) -> Self::Source;
}

/// Trait for resource template definitions.
pub trait TemplateDefinition {
    /// The URI template, with `{name}` placeholders.
    const URI_TEMPLATE: &'static str;

    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    const MIME_TYPE: &'static str;

    /// Whether the template should be registered under `config`.
    fn enabled(_config: &Config) -> bool {
        true
    }

    /// Build the producer for this template.
    fn producer(config: &Config) -> TemplateFn;
}
