//! Platform-agnostic dashboard logic: loading, aggregation and scene state.

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod platform;
pub mod scene;
pub mod streams;
