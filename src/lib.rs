//! # Filterable
//!
//! Filter descriptors for a web framework's query layer. Each filter
//! describes one filterable field — its kind, display grouping, entered
//! values, and validation rules — and exposes a uniform contract so a
//! generic aggregator can apply a set of filters to a query polymorphically
//! and serialize the whole set for a front-end to render filter widgets.
//!
//! ## Main Components
//!
//! - **[`Filter`](filters::Filter)**: the contract every filter variant implements
//! - **[`DateRangePickerFilter`](filters::DateRangePickerFilter)**: date-range input, canonicalized to a bound pair
//! - **[`SelectFilter`](filters::SelectFilter)**: input constrained to a fixed option list
//! - **[`TextFilter`](filters::TextFilter)**: free-form text input
//! - **[`StructuredFilter`](filters::StructuredFilter)**: the flat wire record consumed by front-ends
//!
//! ## Example
//!
//! ```rust
//! use filterable::{DateRangePickerFilter, Filter};
//!
//! let mut filter = DateRangePickerFilter::on("created_between")
//!     .with_values(vec!["2024-01-01,2024-01-31".to_string()]);
//!
//! filter.mutate();
//! assert!(filter.validate().is_ok());
//! assert_eq!(filter.values(), ["2024-01-01", "2024-01-31"]);
//! assert_eq!(filter.method(), "createdBetween");
//! ```

pub mod date;
pub mod errors;
pub mod filters;

pub use date::{DateParseError, DateRange};
pub use errors::{ValidationError, ValidationErrors};
pub use filters::{
    DateRangePickerFilter, Filter, FilterKind, SelectFilter, StructuredFilter, TextFilter,
};
