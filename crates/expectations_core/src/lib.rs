//! # Expectations Core
//!
//! Core data structures for declarative dataset expectations.
//!
//! This crate provides the pieces every other crate in the workspace builds on:
//!
//! - **DataValue**: a scalar cell value with dataframe-style equality
//! - **DType**: the value type of a column
//! - **DataFrame**: an in-memory columnar dataset
//! - **TabularData**: the minimal read interface expectations are evaluated
//!   against (implemented for `DataFrame` and, with the `arrow` feature, for
//!   Arrow `RecordBatch`)
//! - **ExpectationSuite**: the declarative, serializable form of a set of checks
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{Column, DataFrame, DType, TabularData};
//!
//! let frame = DataFrame::new(vec![
//!     Column::from_values("A", [1i64, 2, 3]),
//!     Column::from_values("B", [4i64, 5, 6]),
//! ])
//! .unwrap();
//!
//! assert_eq!(frame.column_names(), vec!["A", "B"]);
//! assert_eq!(frame.column_dtype("A"), Some(DType::Int64));
//! assert_eq!(frame.row_count(), 3);
//! ```

#[cfg(feature = "arrow")]
pub mod arrow;
pub mod builder;
pub mod dtype;
pub mod error;
pub mod frame;
pub mod suite;
pub mod tabular;
pub mod value;

pub use builder::*;
pub use dtype::*;
pub use error::*;
pub use frame::*;
pub use suite::*;
pub use tabular::*;
pub use value::*;
