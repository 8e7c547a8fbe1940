//! Resource descriptors and the content sources behind them.
//!
//! A [`Resource`] is an immutable, URI-keyed descriptor paired with a
//! [`ContentSource`]. The registry never looks at which source a resource
//! uses; it only calls [`Resource::read`].

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::{Map, Value};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ResourceError;

/// Opaque metadata attached to resources and templates.
pub type Meta = Map<String, Value>;

/// MIME type used when none is supplied.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// MIME type used for binary content when none is supplied.
pub const BINARY_MIME_TYPE: &str = "application/octet-stream";

/// Content produced by reading a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceContent {
    /// Text content.
    Text(String),

    /// Binary content.
    Binary(Vec<u8>),
}

impl ResourceContent {
    /// The text payload, if this is text content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }
}

impl From<String> for ResourceContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ResourceContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for ResourceContent {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

impl From<Value> for ResourceContent {
    fn from(value: Value) -> Self {
        let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        Self::Text(text)
    }
}

/// Something that can produce the content of a resource.
///
/// Implement this to plug a new kind of resource (HTTP-backed, database-backed,
/// ...) into the registry.
#[async_trait]
pub trait ContentSource: fmt::Debug + Send + Sync {
    /// Produce the content for the resource registered under `uri`.
    async fn read(&self, uri: &str) -> Result<ResourceContent, ResourceError>;
}

/// Content fixed at construction time.
#[derive(Debug, Clone)]
pub struct StaticContent(pub ResourceContent);

#[async_trait]
impl ContentSource for StaticContent {
    async fn read(&self, _uri: &str) -> Result<ResourceContent, ResourceError> {
        Ok(self.0.clone())
    }
}

/// Content read from a file on every access.
#[derive(Debug, Clone)]
pub struct FileContent {
    path: PathBuf,
    binary: bool,
}

impl FileContent {
    /// Create a text file source. The path must be absolute.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ResourceError> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(ResourceError::InvalidPath(path.display().to_string()));
        }
        Ok(Self {
            path,
            binary: false,
        })
    }

    /// Read the file as raw bytes instead of UTF-8 text.
    pub fn binary(mut self) -> Self {
        self.binary = true;
        self
    }
}

#[async_trait]
impl ContentSource for FileContent {
    async fn read(&self, _uri: &str) -> Result<ResourceContent, ResourceError> {
        if self.binary {
            Ok(ResourceContent::Binary(tokio::fs::read(&self.path).await?))
        } else {
            Ok(ResourceContent::Text(
                tokio::fs::read_to_string(&self.path).await?,
            ))
        }
    }
}

type ContentFn = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<ResourceContent>> + Send + Sync>;

/// Content computed by an async function on every access.
#[derive(Clone)]
pub struct FunctionContent {
    read: ContentFn,
}

impl FunctionContent {
    /// Wrap an async function producing anything convertible into content.
    pub fn new<F, Fut, T, E>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Into<ResourceContent>,
        E: Into<anyhow::Error>,
    {
        let read: ContentFn = Arc::new(move || {
            let fut = f();
            async move {
                let result: anyhow::Result<ResourceContent> =
                    fut.await.map(Into::into).map_err(Into::into);
                result
            }
            .boxed()
        });
        Self { read }
    }
}

impl fmt::Debug for FunctionContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionContent").finish_non_exhaustive()
    }
}

#[async_trait]
impl ContentSource for FunctionContent {
    async fn read(&self, uri: &str) -> Result<ResourceContent, ResourceError> {
        (self.read)()
            .await
            .map_err(|source| ResourceError::read(uri, source))
    }
}

/// An addressable unit of content.
///
/// Resources are built by the caller and handed to the registry, which stores
/// them behind an `Arc` and never mutates them.
#[derive(Debug, Clone)]
pub struct Resource {
    uri: String,
    name: String,
    title: Option<String>,
    description: Option<String>,
    mime_type: String,
    meta: Option<Meta>,
    source: Arc<dyn ContentSource>,
}

impl Resource {
    /// Create a resource backed by an arbitrary content source.
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        source: impl ContentSource + 'static,
    ) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            title: None,
            description: None,
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            meta: None,
            source: Arc::new(source),
        }
    }

    /// Create a resource with fixed text content.
    pub fn text(uri: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(uri, name, StaticContent(ResourceContent::Text(text.into())))
    }

    /// Create a resource with fixed binary content.
    pub fn binary(uri: impl Into<String>, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(uri, name, StaticContent(ResourceContent::Binary(bytes)))
            .with_mime_type(BINARY_MIME_TYPE)
    }

    /// Create a resource that reads a text file on access.
    pub fn file(
        uri: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<Self, ResourceError> {
        Ok(Self::new(uri, name, FileContent::new(path)?))
    }

    /// Create a resource whose content is computed by `f` on every read.
    pub fn from_fn<F, Fut, T, E>(uri: impl Into<String>, name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Into<ResourceContent>,
        E: Into<anyhow::Error>,
    {
        Self::new(uri, name, FunctionContent::new(f))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Attach metadata. `Some(Map::new())` is kept as an empty map, not `None`.
    pub fn with_meta(mut self, meta: impl Into<Option<Meta>>) -> Self {
        self.meta = meta.into();
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
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

    /// Read the resource content.
    pub async fn read(&self) -> Result<ResourceContent, ResourceError> {
        self.source.read(&self.uri).await
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
            && self.name == other.name
            && self.title == other.title
            && self.description == other.description
            && self.mime_type == other.mime_type
            && self.meta == other.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn meta(value: Value) -> Meta {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[tokio::test]
    async fn test_text_resource_read() {
        let resource = Resource::text("resource://hello", "hello", "hi there");
        assert_eq!(resource.mime_type(), DEFAULT_MIME_TYPE);
        let content = resource.read().await.unwrap();
        assert_eq!(content.as_text(), Some("hi there"));
    }

    #[tokio::test]
    async fn test_binary_resource_defaults_mime_type() {
        let resource = Resource::binary("resource://blob", "blob", vec![0, 1, 2]);
        assert_eq!(resource.mime_type(), BINARY_MIME_TYPE);
        let content = resource.read().await.unwrap();
        assert_eq!(content, ResourceContent::Binary(vec![0, 1, 2]));
    }

    #[tokio::test]
    async fn test_function_resource_read() {
        let resource = Resource::from_fn("resource://data", "data", || async {
            Ok::<_, anyhow::Error>("test data")
        });
        let content = resource.read().await.unwrap();
        assert_eq!(content.as_text(), Some("test data"));
    }

    #[tokio::test]
    async fn test_function_resource_json_value() {
        let resource = Resource::from_fn("resource://json", "json", || async {
            Ok::<_, anyhow::Error>(json!({"debug": false}))
        });
        let content = resource.read().await.unwrap();
        let parsed: Value = serde_json::from_str(content.as_text().unwrap()).unwrap();
        assert_eq!(parsed, json!({"debug": false}));
    }

    #[tokio::test]
    async fn test_function_resource_error_is_read_failure() {
        let resource = Resource::from_fn("resource://broken", "broken", || async {
            Err::<String, _>(anyhow::anyhow!("backend down"))
        });
        let err = resource.read().await.unwrap_err();
        match err {
            ResourceError::Read { uri, source } => {
                assert_eq!(uri, "resource://broken");
                assert_eq!(source.to_string(), "backend down");
            }
            other => panic!("Expected Read error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_file_resource_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "test content").unwrap();
        let path = file.path().to_path_buf();

        let resource =
            Resource::file(format!("file://{}", path.display()), "test", path.clone()).unwrap();
        let content = resource.read().await.unwrap();
        assert_eq!(content.as_text(), Some("test content"));

        let binary = Resource::new("file:///bin", "bin", FileContent::new(path).unwrap().binary());
        let content = binary.read().await.unwrap();
        assert_eq!(content, ResourceContent::Binary(b"test content".to_vec()));
    }

    #[tokio::test]
    async fn test_file_resource_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let resource = Resource::file("file:///missing.txt", "missing", path).unwrap();
        assert!(matches!(resource.read().await, Err(ResourceError::Io(_))));
    }

    #[test]
    fn test_file_resource_requires_absolute_path() {
        let result = Resource::file("file:///relative", "relative", "relative/path.txt");
        assert!(matches!(result, Err(ResourceError::InvalidPath(_))));
    }

    #[test]
    fn test_resource_without_metadata() {
        let resource = Resource::text("resource://plain", "plain", "data");
        assert!(resource.meta().is_none());
    }

    #[test]
    fn test_resource_empty_metadata_preserved() {
        let resource = Resource::text("resource://empty-meta", "empty", "data").with_meta(Meta::new());
        assert_eq!(resource.meta(), Some(&Meta::new()));
    }

    #[test]
    fn test_resource_complex_metadata() {
        let metadata = meta(json!({
            "ui": {
                "components": [
                    {"type": "viewer", "options": {"readonly": true}},
                    {"type": "editor", "options": {"syntax": "json"}}
                ],
                "layout": {"position": "sidebar", "width": 300}
            },
            "permissions": ["read", "write"],
            "version": 2
        }));

        let resource =
            Resource::text("resource://complex", "complex", "data").with_meta(metadata.clone());
        let stored = resource.meta().unwrap();
        assert_eq!(stored, &metadata);
        assert_eq!(stored["ui"]["components"][0]["options"]["readonly"], json!(true));
        assert_eq!(stored["ui"]["layout"]["width"], json!(300));
    }

    #[test]
    fn test_resource_equality_ignores_source() {
        let a = Resource::text("resource://a", "a", "one");
        let b = Resource::text("resource://a", "a", "two");
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_meta(Meta::new()));
    }
}
