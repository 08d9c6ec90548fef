//! Fetch workflows that turn API responses into breed records.

pub mod gallery;
