// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based tests driven through the embedding API.
//!
//! # Organization
//!
//! - `parse/` - Programs rejected before evaluation
//! - `eval/` - Language behavior, modules and host interop
//! - `common/` - Shared test utilities
//!
//! ```bash
//! cargo test -p scripterc --test phases
//! cargo test -p scripterc --test phases eval::modules
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/parse/mod.rs"]
mod parse;

#[path = "phases/eval/mod.rs"]
mod eval;
