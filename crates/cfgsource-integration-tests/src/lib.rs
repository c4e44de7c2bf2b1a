//! End-to-end integration tests for cfgsource
//!
//! These tests drive directory sources through the provider traits only,
//! with the hosting framework stood in for by the helpers in
//! `tests/common.rs`.
