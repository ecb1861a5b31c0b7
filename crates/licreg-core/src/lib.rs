//! # licreg-core: License Registration Records
//!
//! Defines the registration record that binds a license holder to its usage
//! terms, together with the primitives it is built from.
//!
//! ## Key Design Principles
//!
//! 1. **Immutable value type.** `Registration` has private fields and
//!    read-only accessors. Once constructed it never changes, so it can be
//!    shared across threads without synchronization.
//!
//! 2. **Closed `Mode` enum.** `TRIAL` and `FULL` are the only licensing
//!    modes. Parsing is exact and case-sensitive; anything else is an
//!    `InvalidArgument` error at construction time.
//!
//! 3. **Explicit clock.** Every time-dependent predicate has an `_at`
//!    variant taking the evaluation instant. The plain variants read the
//!    wall clock and delegate.
//!
//! 4. **Millisecond UTC timestamps.** `Timestamp` stores UTC instants at
//!    millisecond precision, the resolution license dates are issued with.
//!
//! ## Crate Policy
//!
//! - No internal dependencies.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod mode;
pub mod registration;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::LicregError;
pub use mode::Mode;
pub use registration::Registration;
pub use temporal::Timestamp;
