//! # Course Analyzer
//!
//! Bundles the three engines behind the six query operations. All of them
//! share one `Arc<CourseRepository>`; the analyzer itself is cheap to clone
//! and safe to share between threads.

use crate::aggregation::{AggregationEngine, InstructorCourses};
use crate::error::Result;
use crate::ranking::RankingEngine;
use crate::recommendation::RecommendationEngine;
use data_loader::CourseRepository;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Entry point for every query against a loaded dataset
#[derive(Clone)]
pub struct CourseAnalyzer {
    repository: Arc<CourseRepository>,
    aggregation: AggregationEngine,
    ranking: RankingEngine,
    recommendation: RecommendationEngine,
}

impl CourseAnalyzer {
    pub fn new(repository: Arc<CourseRepository>) -> Self {
        Self {
            aggregation: AggregationEngine::new(repository.clone()),
            ranking: RankingEngine::new(repository.clone()),
            recommendation: RecommendationEngine::new(repository.clone()),
            repository,
        }
    }

    /// Configure the number of recommended titles (default: 10)
    pub fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation = self.recommendation.with_limit(limit);
        self
    }

    pub fn repository(&self) -> &CourseRepository {
        &self.repository
    }

    pub fn participation_by_institution(&self) -> BTreeMap<String, u64> {
        self.aggregation.participation_by_institution()
    }

    pub fn participation_by_institution_subject(&self) -> Vec<(String, u64)> {
        self.aggregation.participation_by_institution_subject()
    }

    pub fn course_lists_by_instructor(&self) -> BTreeMap<String, InstructorCourses> {
        self.aggregation.course_lists_by_instructor()
    }

    pub fn top_courses(&self, k: usize, metric: &str) -> Result<Vec<String>> {
        self.ranking.top_courses(k, metric)
    }

    pub fn search_courses(
        &self,
        subject_substring: &str,
        min_percent_audited: f64,
        max_total_hours: f64,
    ) -> Vec<String> {
        self.ranking
            .search_courses(subject_substring, min_percent_audited, max_total_hours)
    }

    pub fn recommend(&self, age: i32, gender: i32, has_bachelor_or_higher: i32) -> Vec<String> {
        self.recommendation.recommend(age, gender, has_bachelor_or_higher)
    }
}
