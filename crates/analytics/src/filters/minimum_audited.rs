//! Filter to ensure a minimum audit rate.

use crate::traits::CourseFilter;
use data_loader::Course;

/// Keeps courses with `percent_audited >= min_percent`.
pub struct MinimumAuditedFilter {
    min_percent: f64,
}

impl MinimumAuditedFilter {
    pub fn new(min_percent: f64) -> Self {
        Self { min_percent }
    }
}

impl CourseFilter for MinimumAuditedFilter {
    fn name(&self) -> &str {
        "MinimumAuditedFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        course.percent_audited >= self.min_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CourseBuilder;

    #[test]
    fn test_threshold_is_inclusive() {
        let filter = MinimumAuditedFilter::new(20.0);

        assert!(filter.matches(&CourseBuilder::new("a").percent_audited(20.0).build()));
        assert!(filter.matches(&CourseBuilder::new("b").percent_audited(75.5).build()));
        assert!(!filter.matches(&CourseBuilder::new("c").percent_audited(19.99).build()));
    }
}
