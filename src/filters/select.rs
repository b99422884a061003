//! Select filter with a fixed option list.

use crate::errors::{ValidationError, ValidationErrors};
use crate::filters::base::{Filter, FilterCore, FilterKind};

/// A filter fed by a select menu.
///
/// The configured options are both the list presented to the user and the
/// set of values [`Filter::validate`] accepts. A select with no configured
/// options accepts anything; that covers options sourced at render time
/// from somewhere the filter cannot see.
#[derive(Debug, Clone, Default)]
pub struct SelectFilter {
    core: FilterCore,
    options: Vec<String>,
}

impl SelectFilter {
    /// Create a select filter bound to a query method.
    #[must_use]
    pub fn on(field: &str) -> Self {
        Self {
            core: FilterCore::on(field),
            options: Vec::new(),
        }
    }

    /// Set the selectable options.
    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }
}

impl Filter for SelectFilter {
    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Select
    }

    fn options(&self) -> Vec<String> {
        self.options.clone()
    }

    fn mutated_values(&self) -> Vec<String> {
        self.values().to_vec()
    }

    fn validate(&mut self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !self.options.is_empty() {
            for value in self.values() {
                if !self.options.contains(value) {
                    errors.add(ValidationError::new(
                        self.name(),
                        format!("'{value}' is not one of the available options"),
                    ));
                }
            }
        }

        if !errors.is_empty() {
            tracing::debug!(
                filter = %self.name(),
                errors = errors.len(),
                "select values failed validation"
            );
        }

        *self.core_mut().errors_mut() = errors.clone();
        errors.result()
    }

    fn boxed_copy(&self) -> Box<dyn Filter> {
        Box::new(self.clone())
    }
}
