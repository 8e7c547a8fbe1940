//! Built-in resource catalog - central registration of all definitions.
//!
//! When adding a new resource or template:
//! 1. Create the definition file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `register_builtin()`

use tracing::info;

use super::content::Resource;
use super::definitions::{
    ConfigValueTemplate, DocsReadmeResource, GreetingTemplate, ProjectFileTemplate,
    ResourceDefinition, ServerInfoResource, TemplateDefinition,
};
use super::error::ResourceError;
use super::manager::ResourceManager;
use super::template::TemplateOptions;
use crate::core::Config;

/// Build a resource from a definition.
fn build_resource<R: ResourceDefinition>(config: &Config) -> Resource {
    Resource::new(R::URI, R::NAME, R::source(config))
        .with_description(R::DESCRIPTION)
        .with_mime_type(R::MIME_TYPE)
}

/// Register a template definition if it is enabled for `config`.
fn register_template<T: TemplateDefinition>(
    manager: &mut ResourceManager,
    config: &Config,
) -> Result<(), ResourceError> {
    if !T::enabled(config) {
        info!("Skipping resource template: {}", T::URI_TEMPLATE);
        return Ok(());
    }

    let options = TemplateOptions::new()
        .name(T::NAME)
        .description(T::DESCRIPTION)
        .mime_type(T::MIME_TYPE);
    manager.add_template(T::producer(config), T::URI_TEMPLATE, options)?;
    Ok(())
}

/// Register every built-in resource and template.
///
/// This is the central place where built-ins are registered.
pub fn register_builtin(
    manager: &mut ResourceManager,
    config: &Config,
) -> Result<(), ResourceError> {
    manager.add_resource(build_resource::<ServerInfoResource>(config));
    manager.add_resource(build_resource::<DocsReadmeResource>(config));

    register_template::<GreetingTemplate>(manager, config)?;
    register_template::<ConfigValueTemplate>(manager, config)?;
    register_template::<ProjectFileTemplate>(manager, config)?;

    Ok(())
}

/// URIs of the built-in static resources.
pub fn resource_uris() -> Vec<&'static str> {
    vec![ServerInfoResource::URI, DocsReadmeResource::URI]
}
