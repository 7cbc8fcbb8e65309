//! The FilterPipeline chains course filters.

use crate::traits::CourseFilter;
use data_loader::Course;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SubjectFilter::new("bio"))
///     .add_filter(MinimumAuditedFilter::new(10.0))
///     .add_filter(MaximumHoursFilter::new(500.0));
///
/// let matched = pipeline.apply(repository.iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn CourseFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl CourseFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence, keeping the input order.
    pub fn apply<'a>(&self, courses: Vec<&'a Course>) -> Vec<&'a Course> {
        let mut current = courses;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
