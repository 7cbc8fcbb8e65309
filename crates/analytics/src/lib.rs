//! # Analytics Crate
//!
//! Read-only queries over a loaded `CourseRepository`.
//!
//! ## Components
//!
//! ### AggregationEngine
//! - Participation totals per institution and per institution-subject pair
//! - Solo and co-taught course titles per instructor
//!
//! ### RankingEngine
//! - Top-K titles by total hours or participants
//! - Search by subject substring, audit rate and course length, built from
//!   composable `CourseFilter`s
//!
//! ### RecommendationEngine
//! - Nearest-neighbour courses for an age / gender / degree profile
//!
//! ## Example Usage
//!
//! ```ignore
//! use analytics::CourseAnalyzer;
//! use data_loader::CourseRepository;
//! use std::sync::Arc;
//!
//! let repository = Arc::new(CourseRepository::load_from_file("data/online_courses.csv".as_ref())?);
//! let analyzer = CourseAnalyzer::new(repository);
//!
//! let top = analyzer.top_courses(10, "participants")?;
//! let picks = analyzer.recommend(25, 1, 1);
//! ```
//!
//! Every engine only reads the repository, so results are identical across
//! repeated calls with the same arguments.

pub mod aggregation;
pub mod analyzer;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod grouping;
pub mod ranking;
pub mod recommendation;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use aggregation::{AggregationEngine, InstructorCourses};
pub use analyzer::CourseAnalyzer;
pub use error::{QueryError, Result};
pub use filter_pipeline::FilterPipeline;
pub use grouping::course_identity;
pub use ranking::{RankMetric, RankingEngine};
pub use recommendation::{DemographicProfile, RecommendationEngine};
pub use traits::CourseFilter;
