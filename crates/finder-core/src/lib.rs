//! Core types and trait definitions for the Services Finder directory.
//!
//! This crate is deliberately free of HTTP and runtime dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod directory;
pub mod error;
pub mod filter;
pub mod session;
pub mod store;
pub mod worker;

pub use error::{Error, Result};
