//! Behavioral specifications for shtree.
//!
//! These tests are black-box: they parse scripts through the public API
//! and compare the debug form, JSON form and fault messages against
//! golden text.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/arithmetic.rs"]
mod arithmetic;
#[path = "specs/commands.rs"]
mod commands;
#[path = "specs/errors.rs"]
mod errors;
#[path = "specs/expansions.rs"]
mod expansions;
