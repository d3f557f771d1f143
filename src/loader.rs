use serde_json::Value as JsonValue;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Hook applied to a parsed document before it is returned to the caller
pub type Transform = Arc<dyn Fn(&str, JsonValue) -> JsonValue + Send + Sync>;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("invalid resource name '{0}'")]
    InvalidName(String),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("failed to read resource '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("resource '{name}' is not valid JSON: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Shareable loader resolving logical names to JSON documents on disk
///
/// A name is one or more slash-separated segments of `[A-Za-z0-9_-]`,
/// resolved to `<root>/<name>.json`. Documents are read and parsed on every
/// call; there is no caching. A transform hook runs on the parsed document
/// before it is returned (identity by default).
#[derive(Clone)]
pub struct ResourceLoader {
    root: Arc<PathBuf>,
    transform: Transform,
}

impl ResourceLoader {
    /// Create a loader over `root` with the identity transform
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_transform(root, Arc::new(|_, data| data))
    }

    /// Create a loader over `root` with a custom transform hook
    pub fn with_transform(root: impl Into<PathBuf>, transform: Transform) -> Self {
        Self {
            root: Arc::new(root.into()),
            transform,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a logical name to its backing file path
    ///
    /// # Errors
    /// Returns `ResourceError::InvalidName` if the name is empty, contains an
    /// empty segment, or contains characters outside `[A-Za-z0-9_-]`. Path
    /// traversal is therefore unrepresentable.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ResourceError> {
        if !is_valid_name(name) {
            return Err(ResourceError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(format!("{name}.json")))
    }

    /// Load and parse the document for `name`, applying the transform hook
    ///
    /// # Errors
    /// * `InvalidName` - the name failed validation
    /// * `NotFound` - no file backs the name
    /// * `Io` / `Parse` - the file exists but could not be read or parsed
    pub async fn load(&self, name: &str) -> Result<JsonValue, ResourceError> {
        let path = self.resolve(name)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ResourceError::NotFound(name.to_string()));
            }
            Err(err) => {
                return Err(ResourceError::Io {
                    name: name.to_string(),
                    source: err,
                });
            }
        };

        let data: JsonValue =
            serde_json::from_slice(&bytes).map_err(|err| ResourceError::Parse {
                name: name.to_string(),
                source: err,
            })?;

        tracing::debug!(%name, path = %path.display(), "loaded named resource");
        Ok((self.transform)(name, data))
    }

    /// Verify that the content root is a readable directory
    pub async fn health_check(&self) -> Result<(), ResourceError> {
        let metadata =
            tokio::fs::metadata(self.root.as_ref())
                .await
                .map_err(|err| ResourceError::Io {
                    name: self.root.display().to_string(),
                    source: err,
                })?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(ResourceError::Io {
                name: self.root.display().to_string(),
                source: io::Error::new(io::ErrorKind::NotADirectory, "content root is not a directory"),
            })
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
}
