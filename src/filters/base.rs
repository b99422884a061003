//! Shared filter state and the contract every variant implements.

use heck::ToLowerCamelCase;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::errors::ValidationErrors;

/// Group label used when neither the variant nor the caller sets one.
pub const DEFAULT_GROUP: &str = "Other";

/// The closed set of filter kinds.
///
/// The kind doubles as the `type` tag in the wire contract, so the
/// serialized names (`"text"`, `"select"`, `"date_range_picker"`) must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Text,
    Select,
    DateRangePicker,
}

impl FilterKind {
    /// The wire tag for this kind
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::DateRangePicker => "date_range_picker",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flat, client-facing filter record.
///
/// This exact shape (field names and nesting) is the compatibility surface
/// consumed by front-end code; `method`, `name`, and validation errors are
/// deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StructuredFilter {
    /// The filter kind, serialized as the `type` tag
    #[serde(rename = "type")]
    pub kind: FilterKind,
    /// True when the filter is presentation-only and carries pre-set values
    pub readonly: bool,
    /// Display grouping label
    pub group: String,
    /// The values currently set for the filter
    pub values: Vec<String>,
    /// The named filter-set this filter was requested as part of, if any
    pub collection: Option<String>,
}

/// State shared by every filter variant.
///
/// Variants embed a `FilterCore` and expose it through
/// [`Filter::core`] / [`Filter::core_mut`]; the trait's provided methods do
/// the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCore {
    method: String,
    name: String,
    readonly: bool,
    values: Vec<String>,
    collection: Option<String>,
    group: Option<String>,
    errors: ValidationErrors,
}

impl FilterCore {
    /// Build the shared state for a filter bound to a query method.
    ///
    /// `method` becomes the lowerCamelCase transform of the identifier;
    /// `name` keeps the identifier verbatim. Any string is accepted.
    #[must_use]
    pub fn on(field: &str) -> Self {
        Self {
            method: field.to_lower_camel_case(),
            name: field.to_string(),
            ..Self::default()
        }
    }

    /// The query-layer method this filter binds to
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The display/identifier label
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// True when the filter is read-only
    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// The values currently set
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Replace the values, dropping entries that are exactly the empty
    /// string. Relative order of the remaining entries is preserved.
    pub fn set_values(&mut self, values: Vec<String>) {
        self.values = values.into_iter().filter(|value| !value.is_empty()).collect();
    }

    /// Overwrite the values verbatim; used by [`Filter::mutate`], which
    /// installs already-canonical values.
    pub fn replace_values(&mut self, values: Vec<String>) {
        self.values = values;
    }

    /// The named filter-set this filter belongs to, if any
    #[must_use]
    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    /// Assign the filter to a named filter-set; reassigning overwrites.
    pub fn set_collection(&mut self, collection: Option<String>) {
        self.collection = collection;
    }

    /// The explicitly configured group, if any
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn set_group(&mut self, group: String) {
        self.group = Some(group);
    }

    /// Errors recorded by the last validation run
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }
}

/// The contract every filter variant implements.
///
/// Variants supply their kind, option list, value canonicalization, and
/// validation rules; everything else comes from the provided methods over
/// the embedded [`FilterCore`].
///
/// The read-only flag accessor is named [`is_readonly`](Filter::is_readonly)
/// so that `true` plainly means read-only; the serialized field keeps its
/// `readonly` wire name.
pub trait Filter {
    /// Shared state, read side
    fn core(&self) -> &FilterCore;

    /// Shared state, write side
    fn core_mut(&mut self) -> &mut FilterCore;

    /// The variant's kind tag
    fn kind(&self) -> FilterKind;

    /// Options to present to the user; empty for variants with no fixed
    /// option set
    fn options(&self) -> Vec<String>;

    /// The current raw values transformed into the canonical form the query
    /// layer expects. Must not mutate the filter; [`Filter::mutate`] installs
    /// the result.
    fn mutated_values(&self) -> Vec<String>;

    /// Run the variant's validation rules over the current values.
    ///
    /// Replaces any previously recorded errors, so re-running validation
    /// never accumulates duplicates.
    ///
    /// # Errors
    ///
    /// Returns the recorded [`ValidationErrors`] when any value fails;
    /// the same errors stay readable via [`Filter::errors`].
    fn validate(&mut self) -> Result<(), ValidationErrors>;

    /// Deep-copy this filter behind the trait object seam.
    ///
    /// The copy carries the same method, read-only flag, collection, values,
    /// name, and errors, but shares no state with the source; validating one
    /// never touches the other.
    fn boxed_copy(&self) -> Box<dyn Filter>;

    /// The group used when none was configured; variants may override.
    fn default_group(&self) -> &str {
        DEFAULT_GROUP
    }

    /// The query-layer method this filter binds to
    fn method(&self) -> &str {
        self.core().method()
    }

    /// The display/identifier label
    fn name(&self) -> &str {
        self.core().name()
    }

    /// True when the filter is presentation-only
    fn is_readonly(&self) -> bool {
        self.core().is_readonly()
    }

    /// The values currently set
    fn values(&self) -> &[String] {
        self.core().values()
    }

    /// Replace the values from decoded request input; empty-string entries
    /// are dropped, order is otherwise preserved.
    fn set_values(&mut self, values: Vec<String>) {
        self.core_mut().set_values(values);
    }

    /// The named filter-set this filter belongs to, if any
    fn collection(&self) -> Option<&str> {
        self.core().collection()
    }

    /// Assign the filter to a named filter-set
    fn set_collection(&mut self, collection: Option<String>) {
        self.core_mut().set_collection(collection);
    }

    /// The display group: the configured one, or the variant default
    fn group(&self) -> &str {
        self.core().group().unwrap_or_else(|| self.default_group())
    }

    /// Errors recorded by the last validation run
    fn errors(&self) -> &ValidationErrors {
        self.core().errors()
    }

    /// Canonicalize: overwrite the raw values with
    /// [`Filter::mutated_values`]. Call after [`Filter::set_values`] and
    /// before [`Filter::validate`].
    fn mutate(&mut self) {
        let mutated = self.mutated_values();
        tracing::debug!(
            filter = %self.name(),
            count = mutated.len(),
            "canonicalized filter values"
        );
        self.core_mut().replace_values(mutated);
    }

    /// Serialize to the flat client-facing record
    fn to_structured(&self) -> StructuredFilter {
        StructuredFilter {
            kind: self.kind(),
            readonly: self.is_readonly(),
            group: self.group().to_string(),
            values: self.values().to_vec(),
            collection: self.collection().map(ToString::to_string),
        }
    }

    /// [`Filter::to_structured`] rendered as JSON text
    ///
    /// # Errors
    ///
    /// Propagates the `serde_json` error if serialization fails.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_structured())
    }

    /// Set the display name
    #[must_use]
    fn with_name(mut self, name: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_name(name.into());
        self
    }

    /// Set the display group
    #[must_use]
    fn with_group(mut self, group: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_group(group.into());
        self
    }

    /// Set the values; same stripping rules as [`Filter::set_values`]
    #[must_use]
    fn with_values(mut self, values: Vec<String>) -> Self
    where
        Self: Sized,
    {
        self.set_values(values);
        self
    }

    /// Mark the filter as read-only (presentation-only, pre-set values)
    #[must_use]
    fn readonly(mut self, readonly: bool) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_readonly(readonly);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_camel_cases_method_and_keeps_name() {
        let core = FilterCore::on("created_between");
        assert_eq!(core.method(), "createdBetween");
        assert_eq!(core.name(), "created_between");
    }

    #[test]
    fn test_on_accepts_already_camel_cased_identifiers() {
        let core = FilterCore::on("someField");
        assert_eq!(core.method(), "someField");
        assert_eq!(core.name(), "someField");
    }

    #[test]
    fn test_set_values_strips_empty_strings_preserving_order() {
        let mut core = FilterCore::on("status");
        core.set_values(vec![
            "open".to_string(),
            String::new(),
            "closed".to_string(),
            String::new(),
        ]);
        assert_eq!(core.values(), ["open", "closed"]);
    }

    #[test]
    fn test_set_values_keeps_whitespace_only_entries() {
        // Only the exact empty string is stripped.
        let mut core = FilterCore::on("status");
        core.set_values(vec![" ".to_string()]);
        assert_eq!(core.values(), [" "]);
    }

    #[test]
    fn test_replace_values_is_verbatim() {
        let mut core = FilterCore::on("status");
        core.replace_values(vec![String::new()]);
        assert_eq!(core.values(), [""]);
    }

    #[test]
    fn test_collection_reassignment_overwrites() {
        let mut core = FilterCore::on("status");
        core.set_collection(Some("sidebar".to_string()));
        core.set_collection(Some("toolbar".to_string()));
        assert_eq!(core.collection(), Some("toolbar"));
        core.set_collection(None);
        assert_eq!(core.collection(), None);
    }

    #[test]
    fn test_defaults() {
        let core = FilterCore::on("status");
        assert!(!core.is_readonly());
        assert!(core.values().is_empty());
        assert_eq!(core.collection(), None);
        assert_eq!(core.group(), None);
        assert!(core.errors().is_empty());
    }

    #[test]
    fn test_filter_kind_wire_tags() {
        assert_eq!(FilterKind::Text.as_str(), "text");
        assert_eq!(FilterKind::Select.as_str(), "select");
        assert_eq!(FilterKind::DateRangePicker.as_str(), "date_range_picker");

        let json = serde_json::to_string(&FilterKind::DateRangePicker).unwrap();
        assert_eq!(json, r#""date_range_picker""#);
    }
}
