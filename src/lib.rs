//! `LabStock` - a single-site laboratory inventory tracker core.
//!
//! This crate keeps stock quantities, condition state (normal/used/broken), and
//! alert records mutually consistent across the chemical, equipment,
//! broken-item, usage-log, reminder, and schedule collections. The UI layer is
//! an external collaborator: it supplies validated field values and item
//! references and consumes the data-access and alert-scan operations exposed
//! here.

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
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
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
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration loading and database initialization
pub mod config;
/// Business logic - usage processing, broken-item tracking, reminder scanning
pub mod core;
/// SeaORM entity definitions for the inventory tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Generic keyed record store over the entity collections
pub mod store;

#[cfg(test)]
pub mod test_utils;
