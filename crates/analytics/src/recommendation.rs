//! Recommendation Engine - demographic nearest-neighbour courses
//!
//! ## Algorithm
//! 1. Partition offerings by course number and average `median_age`,
//!    `percent_male` and `percent_degree` over each partition
//! 2. Score each course number by squared Euclidean distance between the
//!    caller's profile and that average (lower = more similar)
//! 3. Order by score, then by representative title, then by course number
//! 4. Map to representative titles, drop repeats, keep the first `limit`
//!
//! The representative title of a course number is the title of its most
//! recently launched offering. It is computed once per call.
//!
//! Nothing is cached between calls: every recommendation is recomputed from
//! the repository.

use crate::grouping::{distinct, partition_by};
use data_loader::{Course, CourseRepository};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Default number of titles returned by `recommend`
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// The caller's demographic profile.
///
/// `gender` is 0 (female) or 1 (male) and `has_bachelor_or_higher` is 0 or
/// 1; both are scaled by 100 to line up with the percentage columns. Other
/// values are used as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemographicProfile {
    pub age: i32,
    pub gender: i32,
    pub has_bachelor_or_higher: i32,
}

impl DemographicProfile {
    pub fn new(age: i32, gender: i32, has_bachelor_or_higher: i32) -> Self {
        Self {
            age,
            gender,
            has_bachelor_or_higher,
        }
    }

    /// Squared Euclidean distance to a course's averaged demographics
    pub fn dissimilarity(&self, stats: &CourseDemographics) -> f64 {
        let age = f64::from(self.age) - stats.median_age;
        let male = f64::from(self.gender) * 100.0 - stats.percent_male;
        let degree = f64::from(self.has_bachelor_or_higher) * 100.0 - stats.percent_degree;
        age.powi(2) + male.powi(2) + degree.powi(2)
    }
}

/// Demographics of one course number, averaged over all its offerings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseDemographics {
    pub median_age: f64,
    pub percent_male: f64,
    pub percent_degree: f64,
}

impl CourseDemographics {
    /// Arithmetic mean over `offerings`, summed in the given order.
    ///
    /// `offerings` must not be empty.
    fn mean_of(offerings: &[&Course]) -> Self {
        let count = offerings.len() as f64;
        let (age, male, degree) = offerings.iter().fold((0.0, 0.0, 0.0), |acc, c| {
            (
                acc.0 + c.median_age,
                acc.1 + c.percent_male,
                acc.2 + c.percent_degree,
            )
        });
        Self {
            median_age: age / count,
            percent_male: male / count,
            percent_degree: degree / count,
        }
    }
}

/// Nearest-neighbour course recommendations
#[derive(Clone)]
pub struct RecommendationEngine {
    repository: Arc<CourseRepository>,

    /// Maximum number of titles returned
    limit: usize,
}

impl RecommendationEngine {
    pub fn new(repository: Arc<CourseRepository>) -> Self {
        Self {
            repository,
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    /// Configure how many titles `recommend` returns (default: 10)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Up to `limit` distinct titles, most similar first
    pub fn recommend(&self, age: i32, gender: i32, has_bachelor_or_higher: i32) -> Vec<String> {
        self.recommend_for(&DemographicProfile::new(age, gender, has_bachelor_or_higher))
    }

    #[instrument(skip(self))]
    pub fn recommend_for(&self, profile: &DemographicProfile) -> Vec<String> {
        let partitions = partition_by(self.repository.iter(), |c| c.course_number.as_str());
        let representatives = representative_titles(&self.repository);
        debug!("Scoring {} course numbers", partitions.len());

        let mut scored: Vec<(&str, f64, &str)> = partitions
            .par_iter()
            .map(|(&number, offerings)| {
                let score = profile.dissimilarity(&CourseDemographics::mean_of(offerings));
                let title = representatives.get(number).copied().unwrap_or("");
                (number, score, title)
            })
            .collect();

        // Course number is unique, so this is a total order
        scored.sort_unstable_by(|a, b| {
            a.1.total_cmp(&b.1)
                .then_with(|| a.2.cmp(b.2))
                .then_with(|| a.0.cmp(b.0))
        });

        let titles = distinct(scored.into_iter().map(|(_, _, title)| title));
        titles
            .into_iter()
            .take(self.limit)
            .map(str::to_string)
            .collect()
    }
}

/// Course number -> title of its most recently launched offering.
///
/// When several offerings share the latest launch date, the first one in
/// the repository wins.
pub fn representative_titles(repository: &CourseRepository) -> HashMap<&str, &str> {
    let mut latest: HashMap<&str, &Course> = HashMap::new();
    for course in repository.iter() {
        latest
            .entry(course.course_number.as_str())
            .and_modify(|current| {
                if course.launch_date > current.launch_date {
                    *current = course;
                }
            })
            .or_insert(course);
    }
    latest
        .into_iter()
        .map(|(number, course)| (number, course.title.as_str()))
        .collect()
}
