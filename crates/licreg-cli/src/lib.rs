//! # licreg-cli: License Registration Command-Line Interface
//!
//! ## Subcommands
//!
//! - `check`: Build a registration from flags and report its validity
//! - `modes`: List the recognised licensing modes
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `licreg-core` and return an exit code.
//! - Reports go to stdout; logs go to stderr.

pub mod check;
pub mod modes;
