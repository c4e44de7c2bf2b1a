//! Common test utilities for integration tests

use async_trait::async_trait;
use bytes::Bytes;
use cfgsource_core::{ConfigSource, Key, Result, Value, ValueMap};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_TXT: &[u8] = b"This is a test file.\n";
pub const SECRET_TXT: &[u8] = b"This is a super secret file.\n";

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Root with `test.txt` and `subdirectory/secret.txt`
#[allow(dead_code)]
pub fn fixture() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "test.txt", TEST_TXT);
    write(temp_dir.path(), "subdirectory/secret.txt", SECRET_TXT);
    temp_dir
}

#[allow(dead_code)]
pub fn write(root: &Path, key: &str, contents: &[u8]) {
    let path = root.join(key);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Minimal host that consults sources in order, first hit wins
#[derive(Default)]
#[allow(dead_code)]
pub struct LayeredConfig {
    sources: Vec<Arc<dyn ConfigSource>>,
}

#[allow(dead_code)]
impl LayeredConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub async fn read(&self, key: &str) -> Result<Option<Value>> {
        for source in &self.sources {
            if let Some(value) = source.read(key).await? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Merge every source, earlier sources taking precedence
    pub async fn read_all(&self) -> Result<ValueMap> {
        let mut merged = ValueMap::new();
        for source in self.sources.iter().rev() {
            for (key, value) in source.read_all().await? {
                if value.is_some() || !merged.contains_key(&key) {
                    merged.insert(key, value);
                }
            }
        }
        Ok(merged)
    }
}

/// In-memory source for testing
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct MemorySource {
    values: HashMap<String, Bytes>,
}

#[allow(dead_code)]
impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &'static [u8]) -> Self {
        self.values.insert(key.to_string(), Bytes::from_static(value));
        self
    }
}

#[async_trait]
impl ConfigSource for MemorySource {
    async fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    async fn list(&self) -> Result<Vec<Key>> {
        Ok(self.values.keys().cloned().collect())
    }
}
