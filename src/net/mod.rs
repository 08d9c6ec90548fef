//! Networking modules for the breed API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP transport behind the `BreedApi` trait and `types`
//! defines the wire envelopes and the shared `FetchError`.

pub mod api;
pub mod types;
