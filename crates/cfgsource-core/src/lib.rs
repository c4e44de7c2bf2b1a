//! cfgsource Core Types and Traits
//!
//! This crate provides the contract between configuration sources and the
//! frameworks that aggregate them:
//! - Key/value types
//! - Blocking and non-blocking source traits
//! - Core error types

pub mod error;
pub mod source;

pub use error::{Error, Result};
pub use source::{ConfigSource, ConfigSourceSync, Key, Value, ValueMap};
