//! Aggregation Engine - participation totals and instructor course lists
//!
//! Every query is a two-phase operation:
//! 1. Partition the offerings by a key (institution, institution-subject,
//!    instructor)
//! 2. Reduce each partition independently (sum participants, collect titles)
//!
//! The reductions are order-independent, so they run on rayon's pool.

use crate::grouping::partition_by;
use data_loader::{Course, CourseRepository};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Titles an instructor taught, split by whether they taught alone.
///
/// Both lists are sorted ascending and hold each title once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstructorCourses {
    /// Courses where this instructor was the only one
    pub independent: Vec<String>,
    /// Courses taught together with at least one other instructor
    pub cooperative: Vec<String>,
}

/// Grouping and summing queries over the repository
#[derive(Clone)]
pub struct AggregationEngine {
    /// Shared, read-only course data
    repository: Arc<CourseRepository>,
}

impl AggregationEngine {
    pub fn new(repository: Arc<CourseRepository>) -> Self {
        Self { repository }
    }

    /// Total participants per institution, ordered by institution name
    #[instrument(skip(self))]
    pub fn participation_by_institution(&self) -> BTreeMap<String, u64> {
        let partitions = partition_by(self.repository.iter(), |c| c.institution.as_str());
        debug!("Partitioned offerings into {} institutions", partitions.len());

        sum_participants(partitions)
            .into_iter()
            .map(|(institution, total)| (institution.to_string(), total))
            .collect()
    }

    /// Total participants per `institution-subject` pair.
    ///
    /// Ordered by total descending; equal totals are ordered by key
    /// ascending so the output is reproducible.
    #[instrument(skip(self))]
    pub fn participation_by_institution_subject(&self) -> Vec<(String, u64)> {
        let partitions = partition_by(self.repository.iter(), |c| {
            format!("{}-{}", c.institution, c.subject)
        });
        debug!(
            "Partitioned offerings into {} institution-subject pairs",
            partitions.len()
        );

        let mut totals: Vec<(String, u64)> = sum_participants(partitions).into_iter().collect();
        totals.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        totals
    }

    /// For every instructor, the titles they taught alone and the titles
    /// they co-taught
    #[instrument(skip(self))]
    pub fn course_lists_by_instructor(&self) -> BTreeMap<String, InstructorCourses> {
        // An offering lands in one partition per instructor it lists
        let mut partitions: HashMap<&str, Vec<&Course>> = HashMap::new();
        for course in self.repository.iter() {
            for instructor in &course.instructor_list {
                partitions.entry(instructor.as_str()).or_default().push(course);
            }
        }
        debug!("Found {} distinct instructors", partitions.len());

        partitions
            .into_par_iter()
            .map(|(instructor, courses)| {
                let lists = InstructorCourses {
                    independent: sorted_titles(courses.iter().filter(|c| c.is_solo())),
                    cooperative: sorted_titles(courses.iter().filter(|c| !c.is_solo())),
                };
                (instructor.to_string(), lists)
            })
            .collect()
    }
}

fn sum_participants<K>(partitions: HashMap<K, Vec<&Course>>) -> HashMap<K, u64>
where
    K: Eq + std::hash::Hash + Send,
{
    partitions
        .into_par_iter()
        .map(|(key, courses)| {
            let total: u64 = courses.iter().map(|c| u64::from(c.participants)).sum();
            (key, total)
        })
        .collect()
}

/// Titles sorted ascending with exact duplicates removed
fn sorted_titles<'a, 'b: 'a>(courses: impl Iterator<Item = &'a &'b Course>) -> Vec<String> {
    let mut titles: Vec<String> = courses.map(|c| c.title.clone()).collect();
    titles.sort_unstable();
    titles.dedup();
    titles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CourseBuilder, repository};

    fn create_test_repository() -> Arc<CourseRepository> {
        repository(vec![
            CourseBuilder::new("Circuits")
                .institution("MITx")
                .subject("Science")
                .instructors(&["Anant Agarwal"])
                .participants(100)
                .build(),
            CourseBuilder::new("Circuits")
                .institution("MITx")
                .subject("Science")
                .instructors(&["Anant Agarwal"])
                .participants(50)
                .build(),
            CourseBuilder::new("CS50")
                .institution("HarvardX")
                .subject("Computer Science")
                .instructors(&["David Malan", "Anant Agarwal"])
                .participants(300)
                .build(),
            CourseBuilder::new("Justice")
                .institution("HarvardX")
                .subject("Humanities")
                .instructors(&["Michael Sandel"])
                .participants(150)
                .build(),
            CourseBuilder::new("Biology")
                .institution("MITx")
                .subject("Science")
                .instructors(&["Eric Lander"])
                .participants(150)
                .build(),
        ])
    }

    #[test]
    fn test_participation_by_institution() {
        let engine = AggregationEngine::new(create_test_repository());
        let totals = engine.participation_by_institution();

        let keys: Vec<&str> = totals.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["HarvardX", "MITx"]);
        assert_eq!(totals["HarvardX"], 450);
        assert_eq!(totals["MITx"], 300);
    }

    #[test]
    fn test_participation_by_institution_subject_order() {
        let engine = AggregationEngine::new(create_test_repository());
        let totals = engine.participation_by_institution_subject();

        assert_eq!(
            totals,
            vec![
                ("HarvardX-Computer Science".to_string(), 300),
                ("MITx-Science".to_string(), 300),
                ("HarvardX-Humanities".to_string(), 150),
            ]
        );
    }

    #[test]
    fn test_totals_agree() {
        let repo = create_test_repository();
        let engine = AggregationEngine::new(repo.clone());

        let by_institution: u64 = engine.participation_by_institution().values().sum();
        let by_pair: u64 = engine
            .participation_by_institution_subject()
            .iter()
            .map(|(_, total)| total)
            .sum();

        assert_eq!(by_institution, repo.total_participants());
        assert_eq!(by_pair, repo.total_participants());
    }

    #[test]
    fn test_course_lists_by_instructor() {
        let engine = AggregationEngine::new(create_test_repository());
        let lists = engine.course_lists_by_instructor();

        assert_eq!(lists.len(), 4);

        let agarwal = &lists["Anant Agarwal"];
        // Two offerings of Circuits collapse into one title
        assert_eq!(agarwal.independent, vec!["Circuits"]);
        assert_eq!(agarwal.cooperative, vec!["CS50"]);

        let malan = &lists["David Malan"];
        assert!(malan.independent.is_empty());
        assert_eq!(malan.cooperative, vec!["CS50"]);
    }

    #[test]
    fn test_instructor_lists_sorted() {
        let repo = repository(vec![
            CourseBuilder::new("Zoology").instructors(&["Kim"]).build(),
            CourseBuilder::new("Algebra").instructors(&["Kim"]).build(),
            CourseBuilder::new("Zoology").instructors(&["Kim"]).build(),
        ]);
        let lists = AggregationEngine::new(repo).course_lists_by_instructor();
        assert_eq!(lists["Kim"].independent, vec!["Algebra", "Zoology"]);
    }

    #[test]
    fn test_empty_repository() {
        let engine = AggregationEngine::new(repository(Vec::new()));
        assert!(engine.participation_by_institution().is_empty());
        assert!(engine.participation_by_institution_subject().is_empty());
        assert!(engine.course_lists_by_instructor().is_empty());
    }
}
