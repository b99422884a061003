//! Date-range picker filter.

use crate::date::DateRange;
use crate::errors::{ValidationError, ValidationErrors};
use crate::filters::base::{Filter, FilterCore, FilterKind};

/// A filter fed by a date range picker widget.
///
/// Each raw value is a single range token, either one date
/// (`"2024-06-15"`) or a comma-separated pair
/// (`"2024-01-01,2024-01-31"`). [`Filter::mutate`] expands every token into
/// its two canonical bounds (lower first, single dates becoming single-day
/// ranges) so the query layer receives discrete values it can compare
/// against directly.
#[derive(Debug, Clone, Default)]
pub struct DateRangePickerFilter {
    core: FilterCore,
}

impl DateRangePickerFilter {
    /// Create a date-range filter bound to a query method.
    #[must_use]
    pub fn on(field: &str) -> Self {
        Self {
            core: FilterCore::on(field),
        }
    }
}

impl Filter for DateRangePickerFilter {
    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }

    fn kind(&self) -> FilterKind {
        FilterKind::DateRangePicker
    }

    /// Always empty; the values come from free-form date input.
    fn options(&self) -> Vec<String> {
        Vec::new()
    }

    fn default_group(&self) -> &str {
        "Dates"
    }

    fn mutated_values(&self) -> Vec<String> {
        self.values()
            .iter()
            .flat_map(|token| match DateRange::parse(token) {
                Ok(range) => range.into_values(),
                // Leave the token in place so validate() can report it.
                Err(_) => vec![token.clone()],
            })
            .collect()
    }

    fn validate(&mut self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for token in self.values() {
            if let Err(err) = DateRange::parse(token) {
                errors.add(ValidationError::new(self.name(), err.to_string()));
            }
        }

        if !errors.is_empty() {
            tracing::debug!(
                filter = %self.name(),
                errors = errors.len(),
                "date range values failed validation"
            );
        }

        *self.core_mut().errors_mut() = errors.clone();
        errors.result()
    }

    fn boxed_copy(&self) -> Box<dyn Filter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_options() {
        let filter = DateRangePickerFilter::on("created_between");
        assert_eq!(filter.kind(), FilterKind::DateRangePicker);
        assert!(filter.options().is_empty());
    }

    #[test]
    fn test_group_defaults_to_dates() {
        let filter = DateRangePickerFilter::on("created_between");
        assert_eq!(filter.group(), "Dates");

        let overridden = DateRangePickerFilter::on("created_between").with_group("Activity");
        assert_eq!(overridden.group(), "Activity");
    }

    #[test]
    fn test_mutate_expands_range_into_bounds() {
        let mut filter = DateRangePickerFilter::on("created_between")
            .with_values(vec!["2024-01-01,2024-01-31".to_string()]);
        filter.mutate();
        assert_eq!(filter.values(), ["2024-01-01", "2024-01-31"]);
    }

    #[test]
    fn test_mutate_single_date_becomes_single_day_range() {
        let mut filter =
            DateRangePickerFilter::on("created_on").with_values(vec!["2024-06-15".to_string()]);
        filter.mutate();
        assert_eq!(filter.values(), ["2024-06-15", "2024-06-15"]);
    }

    #[test]
    fn test_mutate_normalizes_reversed_range() {
        let mut filter = DateRangePickerFilter::on("created_between")
            .with_values(vec!["2024-01-31,2024-01-01".to_string()]);
        filter.mutate();
        assert_eq!(filter.values(), ["2024-01-01", "2024-01-31"]);
    }

    #[test]
    fn test_mutate_leaves_unparseable_token_for_validate() {
        let mut filter =
            DateRangePickerFilter::on("created_between").with_values(vec!["last week".to_string()]);
        filter.mutate();
        assert_eq!(filter.values(), ["last week"]);

        let result = filter.validate();
        assert!(result.is_err());
        assert_eq!(
            filter.errors().messages_for("created_between"),
            vec!["'last week' is not a valid date or date range"]
        );
    }

    #[test]
    fn test_validate_after_mutate_passes_on_valid_range() {
        let mut filter = DateRangePickerFilter::on("created_between")
            .with_values(vec!["2024-01-01,2024-01-31".to_string()]);
        filter.mutate();
        assert!(filter.validate().is_ok());
        assert!(filter.errors().is_empty());
    }

    #[test]
    fn test_validate_empty_values_passes() {
        let mut filter = DateRangePickerFilter::on("created_between");
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_revalidation_replaces_previous_errors() {
        let mut filter =
            DateRangePickerFilter::on("created_between").with_values(vec!["bogus".to_string()]);
        assert!(filter.validate().is_err());
        assert_eq!(filter.errors().len(), 1);

        // Same bad value again: still one error, not two.
        assert!(filter.validate().is_err());
        assert_eq!(filter.errors().len(), 1);

        filter.set_values(vec!["2024-01-01".to_string()]);
        assert!(filter.validate().is_ok());
        assert!(filter.errors().is_empty());
    }
}
