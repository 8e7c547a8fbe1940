//! Resource manager - the resource and template tables.
//!
//! Resources are keyed by their exact URI, templates by their pattern string.
//! Both tables keep insertion order, which is also the order in which
//! templates are tried during resolution.
//!
//! Mutation takes `&mut self`; hosts that share a manager across tasks wrap it
//! in their own lock, so every insert is seen whole or not at all.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::content::Resource;
use super::error::ResourceError;
use super::template::{ResourceTemplate, TemplateFn, TemplateOptions};

/// Registry of static resources and resource templates.
#[derive(Debug)]
pub struct ResourceManager {
    /// Whether re-adding an existing URI logs a warning.
    warn_on_duplicate_resources: bool,

    resources: Vec<Arc<Resource>>,
    resource_index: HashMap<String, usize>,

    templates: Vec<Arc<ResourceTemplate>>,
    template_index: HashMap<String, usize>,
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ResourceManager {
    /// Create an empty manager.
    pub fn new(warn_on_duplicate_resources: bool) -> Self {
        Self {
            warn_on_duplicate_resources,
            resources: Vec::new(),
            resource_index: HashMap::new(),
            templates: Vec::new(),
            template_index: HashMap::new(),
        }
    }

    /// Register a resource.
    ///
    /// If the URI is already registered nothing is stored and the previously
    /// registered instance is returned.
    pub fn add_resource(&mut self, resource: Resource) -> Arc<Resource> {
        debug!(
            "Adding resource: uri={} name={}",
            resource.uri(),
            resource.name()
        );

        if let Some(&index) = self.resource_index.get(resource.uri()) {
            if self.warn_on_duplicate_resources {
                warn!("Resource already exists: {}", resource.uri());
            }
            return Arc::clone(&self.resources[index]);
        }

        let resource = Arc::new(resource);
        self.resource_index
            .insert(resource.uri().to_string(), self.resources.len());
        self.resources.push(Arc::clone(&resource));
        resource
    }

    /// Build and register a template from a producer function.
    ///
    /// Fails before anything is stored if the pattern is malformed or its
    /// placeholders differ from the producer's parameters. An existing
    /// template with the same pattern is replaced.
    pub fn add_template(
        &mut self,
        producer: TemplateFn,
        uri_template: &str,
        options: TemplateOptions,
    ) -> Result<Arc<ResourceTemplate>, ResourceError> {
        let template = ResourceTemplate::from_fn(producer, uri_template, options)?;
        Ok(self.insert_template(template))
    }

    /// Register an already-built template, replacing any with the same pattern.
    pub fn insert_template(&mut self, template: ResourceTemplate) -> Arc<ResourceTemplate> {
        info!("Adding resource template: {}", template.uri_template());
        let template = Arc::new(template);

        match self.template_index.get(template.uri_template()) {
            Some(&index) => {
                debug!("Replacing resource template: {}", template.uri_template());
                self.templates[index] = Arc::clone(&template);
            }
            None => {
                self.template_index
                    .insert(template.uri_template().to_string(), self.templates.len());
                self.templates.push(Arc::clone(&template));
            }
        }
        template
    }

    /// Resolve a URI to a resource.
    ///
    /// Exact matches in the resource table win. Otherwise templates are tried
    /// in registration order and the first one that matches produces a new,
    /// unregistered resource.
    pub async fn get_resource(&self, uri: &str) -> Result<Arc<Resource>, ResourceError> {
        debug!("Getting resource: {}", uri);

        if let Some(&index) = self.resource_index.get(uri) {
            return Ok(Arc::clone(&self.resources[index]));
        }

        for template in &self.templates {
            if let Some(bindings) = template.matches(uri) {
                let resource = template.create_resource(uri, bindings).await?;
                return Ok(Arc::new(resource));
            }
        }

        Err(ResourceError::not_found(uri))
    }

    /// Look up a template by its exact pattern string.
    pub fn get_template(&self, uri_template: &str) -> Option<Arc<ResourceTemplate>> {
        self.template_index
            .get(uri_template)
            .map(|&index| Arc::clone(&self.templates[index]))
    }

    /// All registered resources in insertion order.
    pub fn list_resources(&self) -> Vec<Arc<Resource>> {
        debug!("Listing resources: count={}", self.resources.len());
        self.resources.clone()
    }

    /// All registered templates in insertion order.
    pub fn list_templates(&self) -> Vec<Arc<ResourceTemplate>> {
        debug!("Listing templates: count={}", self.templates.len());
        self.templates.clone()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}
