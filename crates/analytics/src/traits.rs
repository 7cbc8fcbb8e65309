//! Core traits for course filtering.
//!
//! This module defines the CourseFilter trait that lets search predicates
//! be composed into a `FilterPipeline`.

use data_loader::Course;

/// A predicate over course offerings.
///
/// ## Design Note
/// - `Send + Sync` so a pipeline can be shared between threads
/// - Filters take ownership of the input Vec and return the survivors,
///   preserving order
pub trait CourseFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single course passes this filter
    fn matches(&self, course: &Course) -> bool;

    /// Apply this filter to a set of courses.
    fn apply<'a>(&self, courses: Vec<&'a Course>) -> Vec<&'a Course> {
        courses
            .into_iter()
            .filter(|course| self.matches(course))
            .collect()
    }
}
