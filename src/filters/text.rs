//! Free-form text filter.

use crate::errors::ValidationErrors;
use crate::filters::base::{Filter, FilterCore, FilterKind};

/// A filter fed by a free-form text input.
///
/// Canonicalization trims surrounding whitespace from each value; there are
/// no validation rules, since any text is a legitimate search term.
#[derive(Debug, Clone, Default)]
pub struct TextFilter {
    core: FilterCore,
}

impl TextFilter {
    /// Create a text filter bound to a query method.
    #[must_use]
    pub fn on(field: &str) -> Self {
        Self {
            core: FilterCore::on(field),
        }
    }
}

impl Filter for TextFilter {
    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Text
    }

    fn options(&self) -> Vec<String> {
        Vec::new()
    }

    fn mutated_values(&self) -> Vec<String> {
        self.values()
            .iter()
            .map(|value| value.trim().to_string())
            .collect()
    }

    fn validate(&mut self) -> Result<(), ValidationErrors> {
        self.core_mut().errors_mut().clear();
        Ok(())
    }

    fn boxed_copy(&self) -> Box<dyn Filter> {
        Box::new(self.clone())
    }
}
