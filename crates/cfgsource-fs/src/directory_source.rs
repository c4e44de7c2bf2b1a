//! Filesystem-backed ConfigSource implementation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cfgsource_core::{ConfigSource, ConfigSourceSync, Error, Key, Result, Value, ValueMap};
use tracing::{debug, error, info};

use crate::options::DirectorySourceOptions;
use crate::walk;

/// Configuration source reading files below a root directory
///
/// Keys are file paths relative to the root, joined with `/`. Values are the
/// raw file contents. Nothing is cached: every call goes back to the
/// filesystem.
///
/// Cloning is cheap and clones share the same root and options.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Validated root directory
    root: PathBuf,
    options: DirectorySourceOptions,
}

impl DirectorySource {
    /// Create a directory source
    ///
    /// # Arguments
    /// * `root` - Root directory, the current working directory when `None`
    /// * `options` - Behaviour options, see [`DirectorySourceOptions`]
    ///
    /// # Errors
    /// - `Error::NotFound` if the root doesn't exist
    /// - `Error::NotADirectory` if the root isn't a directory
    /// - `Error::Io` if the root can't be inspected for another reason
    pub fn open(root: Option<&Path>, options: DirectorySourceOptions) -> Result<Self> {
        let root = resolve_root(root, &options)?;
        validate_root(&root)?;

        info!(root = %root.display(), ?options, "Initialized DirectorySource");

        Ok(Self {
            inner: Arc::new(Inner { root, options }),
        })
    }

    /// Create a directory source rooted at `root`
    pub fn new(root: impl AsRef<Path>, options: DirectorySourceOptions) -> Result<Self> {
        Self::open(Some(root.as_ref()), options)
    }

    /// Create a directory source rooted at the current working directory
    pub fn from_current_dir(options: DirectorySourceOptions) -> Result<Self> {
        Self::open(None, options)
    }

    /// The resolved root directory
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    pub fn options(&self) -> DirectorySourceOptions {
        self.inner.options
    }

    /// Run a blocking operation on tokio's blocking pool
    async fn in_background<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&Inner) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || op(&inner))
            .await
            .map_err(|e| {
                error!("Directory source task failed: {}", e);
                Error::Internal(format!("Directory source task failed: {}", e))
            })?
    }
}

fn resolve_root(root: Option<&Path>, options: &DirectorySourceOptions) -> Result<PathBuf> {
    match root {
        None => Ok(std::env::current_dir()?),
        Some(root) if options.relative_root => Ok(std::env::current_dir()?.join(root)),
        Some(root) => Ok(root.to_path_buf()),
    }
}

fn validate_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory {
            path: root.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound {
            path: root.to_path_buf(),
        }),
        // A file somewhere along the path
        Err(e) if e.kind() == io::ErrorKind::NotADirectory => Err(Error::NotADirectory {
            path: root.to_path_buf(),
        }),
        Err(e) => {
            error!("Failed to inspect root {:?}: {}", root, e);
            Err(Error::Io(e))
        }
    }
}

impl Inner {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        let result = walk::resolve_key(&self.root, key).and_then(|path| walk::read_file(&path));

        match result {
            Ok(bytes) => Ok(Some(bytes)),
            Err(source) if self.options.throw_errors => Err(Error::ReadFailure {
                key: key.to_string(),
                source,
            }),
            Err(e) => {
                debug!(key, error = %e, "Read failed, reporting absent value");
                Ok(None)
            }
        }
    }

    fn list(&self) -> Result<Vec<Key>> {
        let keys = walk::list_files(&self.root, self.options.recurse)?;
        debug!(count = keys.len(), recurse = self.options.recurse, "Listed directory source");
        Ok(keys)
    }

    fn read_all(&self) -> Result<ValueMap> {
        self.list()?
            .into_iter()
            .map(|key| {
                let value = self.read(&key)?;
                Ok((key, value))
            })
            .collect()
    }
}

#[async_trait]
impl ConfigSource for DirectorySource {
    async fn read(&self, key: &str) -> Result<Option<Value>> {
        let key = key.to_string();
        self.in_background(move |inner| inner.read(&key)).await
    }

    async fn list(&self) -> Result<Vec<Key>> {
        self.in_background(Inner::list).await
    }

    async fn read_all(&self) -> Result<ValueMap> {
        self.in_background(Inner::read_all).await
    }
}

impl ConfigSourceSync for DirectorySource {
    fn read_sync(&self, key: &str) -> Result<Option<Value>> {
        self.inner.read(key)
    }

    fn list_sync(&self) -> Result<Vec<Key>> {
        self.inner.list()
    }

    fn read_all_sync(&self) -> Result<ValueMap> {
        self.inner.read_all()
    }
}
