//! # Expectations Validator
//!
//! Declarative expectation checks for tabular datasets. This crate provides:
//!
//! - [`ExpectationSet`], a borrowing view over any
//!   [`TabularData`](expectations_core::TabularData) with one method per check
//! - [`CheckOutcome`] and [`Diagnostic`], the structured result of a check
//! - [`SuiteRunner`], which evaluates a whole
//!   [`ExpectationSuite`](expectations_core::ExpectationSuite) into a [`SuiteReport`]
//! - Text and JSON rendering of reports
//!
//! Checks never print and never mutate the dataset. A check that is not met
//! returns `passed == false` with diagnostics; only input a check cannot
//! evaluate at all (an unknown column, a non-numeric value in a mean) is an
//! [`ExpectationError`].
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{Column, DataFrame};
//! use expectations_validator::Expect;
//!
//! let frame = DataFrame::new(vec![
//!     Column::from_values("status", ["active", "pending"]),
//! ])
//! .unwrap();
//!
//! let outcome = frame
//!     .expectations()
//!     .values_in_set("status", ["active"])
//!     .unwrap();
//!
//! assert!(!outcome.passed());
//! for diagnostic in outcome.diagnostics() {
//!     println!("{}", diagnostic);
//! }
//! ```

mod content;
mod diagnostic;
mod error;
mod expectation_set;
mod outcome;
mod render;
mod runner;
mod statistics;
mod structure;

pub use diagnostic::*;
pub use error::*;
pub use expectation_set::*;
pub use outcome::*;
pub use render::*;
pub use runner::*;
