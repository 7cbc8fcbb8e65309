//! Ranking Engine - top-K and filtered search
//!
//! ## Top-K
//! 1. Sort every offering by the chosen metric, highest first
//! 2. Break ties by title, ascending
//! 3. Keep the first offering per distinct title
//! 4. Return the first `k` titles
//!
//! ## Search
//! Subject substring (any case), minimum audit percentage and maximum total
//! hours, chained as filters. Matching titles come back sorted and distinct.

use crate::error::{QueryError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{MaximumHoursFilter, MinimumAuditedFilter, SubjectFilter};
use crate::grouping::{course_identity, distinct_by};
use data_loader::{Course, CourseRepository};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Metric used to order courses in `top_courses`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    /// `total_hours`
    Hours,
    /// `participants`
    Participants,
}

impl RankMetric {
    /// Names accepted by `FromStr`
    pub const NAMES: [&'static str; 2] = ["hours", "participants"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankMetric::Hours => "hours",
            RankMetric::Participants => "participants",
        }
    }

    /// Higher metric value sorts first
    fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            RankMetric::Hours => b.total_hours.total_cmp(&a.total_hours),
            RankMetric::Participants => b.participants.cmp(&a.participants),
        }
    }
}

impl FromStr for RankMetric {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hours" => Ok(RankMetric::Hours),
            "participants" => Ok(RankMetric::Participants),
            _ => Err(QueryError::InvalidArgument {
                argument: "metric",
                value: s.to_string(),
                accepted: Self::NAMES.join(", "),
            }),
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-K and search queries with deterministic ordering
#[derive(Clone)]
pub struct RankingEngine {
    repository: Arc<CourseRepository>,
}

impl RankingEngine {
    pub fn new(repository: Arc<CourseRepository>) -> Self {
        Self { repository }
    }

    /// Top `k` distinct titles by a metric given by name.
    ///
    /// Fails with `QueryError::InvalidArgument` unless `metric` is
    /// `"hours"` or `"participants"`.
    pub fn top_courses(&self, k: usize, metric: &str) -> Result<Vec<String>> {
        let metric: RankMetric = metric.parse()?;
        Ok(self.top_courses_by(k, metric))
    }

    /// Top `k` distinct titles by `metric`, ties broken by title
    #[instrument(skip(self))]
    pub fn top_courses_by(&self, k: usize, metric: RankMetric) -> Vec<String> {
        let mut sorted: Vec<&Course> = self.repository.iter().collect();
        // Stable sort: equal (metric, title) pairs keep load order
        sorted.sort_by(|a, b| metric.compare(a, b).then_with(|| a.title.cmp(&b.title)));

        let representatives = distinct_by(sorted, |c| course_identity(*c));
        debug!(
            "Ranked {} distinct titles by {}",
            representatives.len(),
            metric
        );

        representatives
            .into_iter()
            .take(k)
            .map(|c| c.title.clone())
            .collect()
    }

    /// Titles matching all search criteria, sorted ascending and distinct.
    ///
    /// An empty result is not an error.
    #[instrument(skip(self))]
    pub fn search_courses(
        &self,
        subject_substring: &str,
        min_percent_audited: f64,
        max_total_hours: f64,
    ) -> Vec<String> {
        let pipeline = FilterPipeline::new()
            .add_filter(SubjectFilter::new(subject_substring))
            .add_filter(MinimumAuditedFilter::new(min_percent_audited))
            .add_filter(MaximumHoursFilter::new(max_total_hours));

        let matched = pipeline.apply(self.repository.iter().collect());

        let mut titles: Vec<String> = matched.into_iter().map(|c| c.title.clone()).collect();
        titles.sort_unstable();
        titles.dedup();
        debug!("Search matched {} titles", titles.len());
        titles
    }
}
