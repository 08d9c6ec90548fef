//! Top-level pages.

pub mod gallery;
