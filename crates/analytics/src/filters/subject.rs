//! Filter on course subject.

use crate::traits::CourseFilter;
use data_loader::Course;

/// Keeps courses whose subject contains a substring, ignoring case.
///
/// "bio" matches "Biology" and "Microbiology"; an empty needle matches
/// every course.
pub struct SubjectFilter {
    /// Stored lowercased so each comparison only lowercases the subject
    needle: String,
}

impl SubjectFilter {
    pub fn new(substring: &str) -> Self {
        Self {
            needle: substring.to_lowercase(),
        }
    }
}

impl CourseFilter for SubjectFilter {
    fn name(&self) -> &str {
        "SubjectFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        course.subject.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CourseBuilder;

    #[test]
    fn test_case_insensitive_substring() {
        let filter = SubjectFilter::new("BIO");

        assert!(filter.matches(&CourseBuilder::new("a").subject("Biology").build()));
        assert!(filter.matches(&CourseBuilder::new("b").subject("Microbiology").build()));
        assert!(!filter.matches(&CourseBuilder::new("c").subject("Chemistry").build()));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let filter = SubjectFilter::new("");
        assert!(filter.matches(&CourseBuilder::new("a").subject("History").build()));
    }
}
