//! HTTP client for the managed backend service.
//!
//! Implements the `finder-core` store and auth traits against the backend's
//! REST surface: a row read/insert API under `/rest/v1` and a token-based
//! auth API under `/auth/v1`. Persistence, credential verification, and
//! row-level access control all live on the backend; this crate is plumbing.

mod auth;
mod client;

pub mod config;
pub mod error;

pub use client::BackendClient;
pub use config::BackendConfig;
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
