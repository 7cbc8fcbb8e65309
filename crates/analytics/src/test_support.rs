//! Fixture builder for unit tests.

use chrono::NaiveDate;
use data_loader::{Course, CourseRepository};
use std::sync::Arc;

/// Builds a `Course` with sensible defaults so tests only spell out the
/// fields they care about.
pub(crate) struct CourseBuilder(Course);

impl CourseBuilder {
    pub fn new(title: &str) -> Self {
        Self(Course {
            institution: "MITx".to_string(),
            course_number: title.to_string(),
            launch_date: NaiveDate::from_ymd_opt(2013, 1, 1).unwrap(),
            title: title.to_string(),
            instructors: "Staff".to_string(),
            instructor_list: vec!["Staff".to_string()],
            subject: "Computer Science".to_string(),
            ..Default::default()
        })
    }

    pub fn institution(mut self, institution: &str) -> Self {
        self.0.institution = institution.to_string();
        self
    }

    pub fn number(mut self, number: &str) -> Self {
        self.0.course_number = number.to_string();
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.0.subject = subject.to_string();
        self
    }

    pub fn instructors(mut self, names: &[&str]) -> Self {
        self.0.instructors = names.join(", ");
        self.0.instructor_list = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn participants(mut self, participants: u32) -> Self {
        self.0.participants = participants;
        self
    }

    pub fn hours(mut self, total_hours: f64) -> Self {
        self.0.total_hours = total_hours;
        self
    }

    pub fn percent_audited(mut self, percent: f64) -> Self {
        self.0.percent_audited = percent;
        self
    }

    pub fn launched(mut self, year: i32, month: u32, day: u32) -> Self {
        self.0.launch_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn demographics(mut self, median_age: f64, percent_male: f64, percent_degree: f64) -> Self {
        self.0.median_age = median_age;
        self.0.percent_male = percent_male;
        self.0.percent_female = 100.0 - percent_male;
        self.0.percent_degree = percent_degree;
        self
    }

    pub fn build(self) -> Course {
        self.0
    }
}

pub(crate) fn repository(courses: Vec<Course>) -> Arc<CourseRepository> {
    Arc::new(CourseRepository::from_courses(courses))
}
