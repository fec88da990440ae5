//! # hol-core
//!
//! Core types and error definitions for holidays-rs.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error enum, the `ensure!` / `fail!` macros, and the
//! validated [`Year`] type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Validated calendar year.
pub mod year;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use year::Year;
