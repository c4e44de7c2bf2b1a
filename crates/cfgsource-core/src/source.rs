//! Configuration source traits
//!
//! A configuration source exposes raw byte values under string keys. Host
//! frameworks hold several sources side by side and merge, cache and parse
//! their values; a source itself only answers `read`, `list` and
//! `read_all`.
//!
//! Every source comes in two flavours:
//! - [`ConfigSource`]: non-blocking, returns futures
//! - [`ConfigSourceSync`]: blocks the calling thread
//!
//! Implementations must return the same results from both for the same
//! underlying state.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;

use crate::Result;

/// Key naming a configuration value, `/`-joined when nested
pub type Key = String;

/// Raw configuration value
pub type Value = Bytes;

/// Result of a bulk read
///
/// A key mapped to `None` was visible to the source but could not be read.
/// A key missing from the map does not exist at all.
pub type ValueMap = BTreeMap<Key, Option<Value>>;

/// Non-blocking configuration source
///
/// # Example
/// ```no_run
/// # use cfgsource_core::ConfigSource;
/// # async fn example(source: &dyn ConfigSource) -> cfgsource_core::Result<()> {
/// match source.read("database.url").await? {
///     Some(bytes) => println!("{} bytes", bytes.len()),
///     None => println!("not set"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Read a single value
    ///
    /// Returns `Ok(None)` when the value is absent. Whether a failed read is
    /// reported as absent or as an error is up to the implementation's
    /// policy.
    async fn read(&self, key: &str) -> Result<Option<Value>>;

    /// List every key visible to the source
    ///
    /// Keys are unique. Their order carries no meaning.
    async fn list(&self) -> Result<Vec<Key>>;

    /// Read every visible key
    ///
    /// The default lists the source and reads each key in turn, stopping at
    /// the first error.
    async fn read_all(&self) -> Result<ValueMap> {
        let mut values = ValueMap::new();
        for key in self.list().await? {
            let value = self.read(&key).await?;
            values.insert(key, value);
        }
        Ok(values)
    }
}

/// Blocking configuration source
///
/// Mirrors [`ConfigSource`] method for method.
pub trait ConfigSourceSync: Send + Sync {
    /// Blocking form of [`ConfigSource::read`]
    fn read_sync(&self, key: &str) -> Result<Option<Value>>;

    /// Blocking form of [`ConfigSource::list`]
    fn list_sync(&self) -> Result<Vec<Key>>;

    /// Blocking form of [`ConfigSource::read_all`]
    fn read_all_sync(&self) -> Result<ValueMap> {
        let mut values = ValueMap::new();
        for key in self.list_sync()? {
            let value = self.read_sync(&key)?;
            values.insert(key, value);
        }
        Ok(values)
    }
}
