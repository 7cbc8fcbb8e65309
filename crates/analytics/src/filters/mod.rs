//! Filter implementations for course search.
//!
//! Each filter covers one search criterion; `RankingEngine::search_courses`
//! chains them in a `FilterPipeline`.

pub mod maximum_hours;
pub mod minimum_audited;
pub mod subject;

// Re-export for convenience
pub use maximum_hours::MaximumHoursFilter;
pub use minimum_audited::MinimumAuditedFilter;
pub use subject::SubjectFilter;
