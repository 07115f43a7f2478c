//! `ice-orders` - Order tracking for a small ice-manufacturing business
//!
//! This crate provides the order data-sync component: an in-memory order list
//! kept approximately consistent with a hosted remote collection store, plus
//! the price table used to price new orders. The rendering layer and the
//! hosted database itself are external collaborators.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Documentation - missing docs should be added gradually
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
)]

/// Configuration - remote store credentials and the price table
pub mod config;
/// Unified error types and result handling
pub mod errors;
/// The order record and its constructor
pub mod models;
/// Remote collection store access - backend trait and HTTP implementation
pub mod remote;
/// In-memory order store synchronized with the remote collection store
pub mod store;

#[cfg(test)]
pub mod test_utils;
