//! `SixJars` - a personal finance tracking engine
//!
//! This crate provides the computational core of a six-jars style personal
//! finance tracker: expense aggregation by month, year, and category, debt
//! payoff progress with clamped payments, percentage-based jar (envelope)
//! allocation against regular income, and the bounded size mapping used by
//! the bubble/grid visualizations. Records are persisted through an opaque
//! store collaborator with local keyed-blob and remote HTTP implementations.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::expect_used,
    clippy::unwrap_used,
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration management - settings from the environment and the category catalog
pub mod config;
/// Core business logic - pure aggregation, debt, jar, and layout computations
pub mod core;
/// Plain data records persisted through the store layer
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Owned application state with the mutate-persist-reload pipeline
pub mod session;
/// Persistence collaborators - the `Store` trait and its implementations
pub mod store;
/// Tracing subscriber initialization for embedding binaries
pub mod telemetry;

pub use errors::{Error, Result};
pub use session::Session;
pub use store::{LocalStore, RemoteStore, Store};

#[cfg(test)]
pub mod test_utils;
