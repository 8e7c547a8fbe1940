//! Parameterized resource templates.
//!
//! A template pattern such as `config://{section}/{key}` is compiled into an
//! anchored regex in which every `{name}` placeholder captures one path
//! segment (`[^/]+`) and every literal run must match exactly.

use futures::FutureExt;
use futures::future::BoxFuture;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

use super::content::{DEFAULT_MIME_TYPE, Meta, Resource, ResourceContent, StaticContent};
use super::error::ResourceError;

/// Placeholder bindings captured from a URI, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(Vec<(String, String)>);

impl Bindings {
    /// Value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A compiled URI template.
#[derive(Debug, Clone)]
pub struct UriPattern {
    template: String,
    params: Vec<String>,
    regex: Regex,
}

impl UriPattern {
    /// Compile a template pattern.
    pub fn parse(template: &str) -> Result<Self, ResourceError> {
        let mut pattern = String::from("^");
        let mut params: Vec<String> = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let (literal, tail) = rest.split_at(open);
            if literal.contains('}') {
                return Err(ResourceError::invalid_template(template, "unmatched '}'"));
            }
            pattern.push_str(&regex::escape(literal));

            let close = tail
                .find('}')
                .ok_or_else(|| ResourceError::invalid_template(template, "unclosed '{'"))?;
            let name = &tail[1..close];
            if !is_identifier(name) {
                return Err(ResourceError::invalid_template(
                    template,
                    format!("invalid placeholder name '{name}'"),
                ));
            }
            if params.iter().any(|p| p == name) {
                return Err(ResourceError::invalid_template(
                    template,
                    format!("duplicate placeholder '{name}'"),
                ));
            }

            pattern.push_str(&format!("(?P<{name}>[^/]+)"));
            params.push(name.to_string());
            rest = &tail[close + 1..];
        }

        if rest.contains('}') {
            return Err(ResourceError::invalid_template(template, "unmatched '}'"));
        }
        pattern.push_str(&regex::escape(rest));
        pattern.push('$');

        let regex = Regex::new(&pattern)
            .map_err(|e| ResourceError::invalid_template(template, e.to_string()))?;

        Ok(Self {
            template: template.to_string(),
            params,
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Placeholder names in the order they appear.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Match `uri` against the whole pattern, returning the captured bindings.
    pub fn matches(&self, uri: &str) -> Option<Bindings> {
        let captures = self.regex.captures(uri)?;
        Some(
            self.params
                .iter()
                .filter_map(|name| {
                    captures
                        .name(name)
                        .map(|m| (name.clone(), m.as_str().to_string()))
                })
                .collect(),
        )
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

type ProducerFn =
    Arc<dyn Fn(Bindings) -> BoxFuture<'static, anyhow::Result<ResourceContent>> + Send + Sync>;

/// The function behind a template, together with its declared parameter names.
#[derive(Clone)]
pub struct TemplateFn {
    params: Vec<String>,
    call: ProducerFn,
}

impl TemplateFn {
    /// Wrap an async producer that requires exactly the parameters in `params`.
    pub fn new<P, S, F, Fut, T, E>(params: P, f: F) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(Bindings) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Into<ResourceContent>,
        E: Into<anyhow::Error>,
    {
        let call: ProducerFn = Arc::new(move |bindings| {
            let fut = f(bindings);
            async move {
                let result: anyhow::Result<ResourceContent> =
                    fut.await.map(Into::into).map_err(Into::into);
                result
            }
            .boxed()
        });
        Self {
            params: params.into_iter().map(Into::into).collect(),
            call,
        }
    }

    /// Wrap a synchronous producer.
    pub fn from_sync<P, S, F, T, E>(params: P, f: F) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(Bindings) -> Result<T, E> + Send + Sync + 'static,
        T: Into<ResourceContent> + Send + 'static,
        E: Into<anyhow::Error> + Send + 'static,
    {
        Self::new(params, move |bindings| futures::future::ready(f(bindings)))
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    async fn call(&self, bindings: Bindings) -> anyhow::Result<ResourceContent> {
        (self.call)(bindings).await
    }
}

impl fmt::Debug for TemplateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateFn")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Optional descriptor fields for a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub mime_type: Option<String>,
    pub meta: Option<Meta>,
}

impl TemplateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn meta(mut self, meta: impl Into<Option<Meta>>) -> Self {
        self.meta = meta.into();
        self
    }
}

/// A parameterized factory producing resources for URIs that match its pattern.
#[derive(Debug, Clone)]
pub struct ResourceTemplate {
    pattern: UriPattern,
    name: String,
    title: Option<String>,
    description: Option<String>,
    mime_type: String,
    meta: Option<Meta>,
    producer: TemplateFn,
}

impl ResourceTemplate {
    /// Build a template, checking that the placeholders in `uri_template` are
    /// exactly the producer's parameters.
    pub fn from_fn(
        producer: TemplateFn,
        uri_template: &str,
        options: TemplateOptions,
    ) -> Result<Self, ResourceError> {
        let pattern = UriPattern::parse(uri_template)?;

        let uri_params: BTreeSet<&str> = pattern.params().iter().map(String::as_str).collect();
        let fn_params: BTreeSet<&str> = producer.params().iter().map(String::as_str).collect();
        if uri_params != fn_params {
            return Err(ResourceError::TemplateMismatch {
                uri_template: uri_template.to_string(),
                uri_params: uri_params.into_iter().map(str::to_string).collect(),
                fn_params: fn_params.into_iter().map(str::to_string).collect(),
            });
        }

        Ok(Self {
            name: options.name.unwrap_or_else(|| uri_template.to_string()),
            title: options.title,
            description: options.description,
            mime_type: options
                .mime_type
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            meta: options.meta,
            pattern,
            producer,
        })
    }

    pub fn uri_template(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Match a concrete URI against this template.
    pub fn matches(&self, uri: &str) -> Option<Bindings> {
        self.pattern.matches(uri)
    }

    /// Run the producer for `uri` and wrap its output in a new resource that
    /// carries this template's metadata.
    pub async fn create_resource(
        &self,
        uri: &str,
        bindings: Bindings,
    ) -> Result<Resource, ResourceError> {
        self.create_resource_with_meta(uri, bindings, self.meta.clone())
            .await
    }

    /// Like [`create_resource`](Self::create_resource) but with explicit
    /// metadata for the produced instance.
    pub async fn create_resource_with_meta(
        &self,
        uri: &str,
        bindings: Bindings,
        meta: Option<Meta>,
    ) -> Result<Resource, ResourceError> {
        debug!("Creating resource {} from template {}", uri, self.uri_template());
        let content = self
            .producer
            .call(bindings)
            .await
            .map_err(|source| ResourceError::producer(uri, source))?;

        let mut resource = Resource::new(uri, self.name.clone(), StaticContent(content))
            .with_mime_type(self.mime_type.clone())
            .with_meta(meta);
        if let Some(title) = &self.title {
            resource = resource.with_title(title.clone());
        }
        if let Some(description) = &self.description {
            resource = resource.with_description(description.clone());
        }
        Ok(resource)
    }
}
