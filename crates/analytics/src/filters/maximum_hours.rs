//! Filter to cap total course hours.

use crate::traits::CourseFilter;
use data_loader::Course;

/// Keeps courses with `total_hours <= max_hours`.
pub struct MaximumHoursFilter {
    max_hours: f64,
}

impl MaximumHoursFilter {
    pub fn new(max_hours: f64) -> Self {
        Self { max_hours }
    }
}

impl CourseFilter for MaximumHoursFilter {
    fn name(&self) -> &str {
        "MaximumHoursFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        course.total_hours <= self.max_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CourseBuilder;

    #[test]
    fn test_threshold_is_inclusive() {
        let filter = MaximumHoursFilter::new(100.0);

        assert!(filter.matches(&CourseBuilder::new("a").hours(100.0).build()));
        assert!(filter.matches(&CourseBuilder::new("b").hours(0.0).build()));
        assert!(!filter.matches(&CourseBuilder::new("c").hours(100.5).build()));
    }
}
