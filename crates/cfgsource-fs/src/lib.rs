//! Filesystem configuration source
//!
//! This crate implements the `ConfigSource` and `ConfigSourceSync` traits on
//! top of a directory tree. Each file below the root is one configuration
//! value, keyed by its `/`-joined path relative to the root.
//!
//! # Features
//! - Optional recursive traversal of subdirectories
//! - Lenient (absent value) or strict (error) handling of failed reads
//! - Blocking and non-blocking forms of every operation
//! - Options loadable from JSON, YAML or TOML
//!
//! # Example
//! ```no_run
//! # use cfgsource_fs::{DirectorySource, DirectorySourceOptions};
//! # use cfgsource_core::ConfigSource;
//! # async fn example() -> cfgsource_core::Result<()> {
//! let options = DirectorySourceOptions::new().with_recurse(true);
//! let source = DirectorySource::new("/run/secrets", options)?;
//! let token = source.read("api/token").await?;
//! let everything = source.read_all().await?;
//! # Ok(())
//! # }
//! ```

mod directory_source;
mod options;
mod walk;

pub use cfgsource_core::{ConfigSource, ConfigSourceSync, Error, Result};
pub use directory_source::DirectorySource;
pub use options::{ConfigFormat, DirectorySourceOptions};
