//! Core domain types for the online-course dataset.
//!
//! A `Course` is one offering of a course: the same course number shows up
//! once per run (different years, sometimes different institutions).
//! `CourseRepository` owns every offering in file order and never changes
//! after it is built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::slice::Iter;

/// Number of comma-separated fields in one dataset record
pub const FIELD_COUNT: usize = 23;

// =============================================================================
// Course
// =============================================================================

/// One validated enrollment record.
///
/// This is a plain value: equality is field-wise. Code that needs to treat
/// two offerings with the same title as one course does so through an
/// explicit key function in the analytics crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub institution: String,
    /// Shared by every offering of the same course
    pub course_number: String,
    pub launch_date: NaiveDate,
    pub title: String,
    /// Instructor names exactly as they appeared in the source
    pub instructors: String,
    /// `instructors` split on `", "`; never empty once loaded
    pub instructor_list: Vec<String>,
    pub subject: String,
    pub year: i32,
    pub honor_code: u8,

    // Enrollment counts
    pub participants: u32,
    pub audited: u32,
    pub certified: u32,

    // Percentages and statistics. These are taken as given, values outside
    // 0..=100 are not rejected.
    pub percent_audited: f64,
    pub percent_certified: f64,
    pub percent_certified_50: f64,
    pub percent_video: f64,
    pub percent_forum: f64,
    pub grade_higher_zero: f64,
    pub total_hours: f64,
    pub median_hours_certification: f64,
    pub median_age: f64,
    pub percent_male: f64,
    pub percent_female: f64,
    pub percent_degree: f64,
}

impl Course {
    /// True when exactly one instructor taught this offering
    pub fn is_solo(&self) -> bool {
        self.instructor_list.len() == 1
    }
}

// =============================================================================
// CourseRepository
// =============================================================================

/// Immutable, ordered collection of every course offering.
///
/// Built once by the loader (or from an already validated `Vec<Course>`)
/// and shared read-only, usually behind an `Arc`. There are no mutators.
#[derive(Debug, Clone, Default)]
pub struct CourseRepository {
    courses: Vec<Course>,
}

impl CourseRepository {
    /// Wrap an already validated list of courses, keeping their order
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// All offerings in load order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn iter(&self) -> Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sum of `participants` over every offering
    pub fn total_participants(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.participants)).sum()
    }
}

impl<'a> IntoIterator for &'a CourseRepository {
    type Item = &'a Course;
    type IntoIter = Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}
