//! # Filter Descriptors
//!
//! Every filterable field is described by one filter value: which query
//! method it binds to, which display group it belongs to, the values the
//! user entered, and the rules those values must satisfy. All variants
//! implement the [`Filter`] trait so an aggregator can drive a heterogeneous
//! set of filters through the same lifecycle:
//!
//! 1. build the filter with [`on`](DateRangePickerFilter::on) and the fluent
//!    builders (`with_name`, `with_group`, `with_values`)
//! 2. assign decoded request input via [`Filter::set_values`]
//! 3. canonicalize with [`Filter::mutate`]
//! 4. check with [`Filter::validate`], inspecting [`Filter::errors`]
//! 5. hand `method()` and `values()` to the query layer, or serialize the
//!    descriptor for the front-end with [`Filter::to_structured`]
//!
//! ## Variants
//!
//! - [`TextFilter`]: free-form text, no fixed options
//! - [`SelectFilter`]: values constrained to a configured option list
//! - [`DateRangePickerFilter`]: one range token canonicalized to two bounds

pub mod base;
pub mod date_range_picker;
pub mod select;
pub mod text;

pub use base::{Filter, FilterCore, FilterKind, StructuredFilter};
pub use date_range_picker::DateRangePickerFilter;
pub use select::SelectFilter;
pub use text::TextFilter;
