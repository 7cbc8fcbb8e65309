//! # Data Loader Crate
//!
//! This crate loads the online-course enrollment dataset into an immutable
//! in-memory repository.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Course, CourseRepository)
//! - **parser**: Parse the CSV file into `Course` values
//! - **index**: Build and validate the repository
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::CourseRepository;
//! use std::path::Path;
//!
//! let repository = CourseRepository::load_from_file(Path::new("data/online_courses.csv"))?;
//! println!("{} offerings loaded", repository.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Course, CourseRepository, FIELD_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_repository() {
        let repo = CourseRepository::default();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
        assert_eq!(repo.total_participants(), 0);
    }

    #[test]
    fn test_is_solo() {
        let mut course = Course {
            instructor_list: vec!["Ana Bell".to_string()],
            ..Default::default()
        };
        assert!(course.is_solo());

        course.instructor_list.push("Eric Grimson".to_string());
        assert!(!course.is_solo());
    }
}
