//! Partitioning and deduplication helpers shared by the engines.
//!
//! Two courses with the same title are the same course as far as ranking
//! and recommendation are concerned. That rule lives here as an explicit
//! key function instead of an equality override on `Course`, and is only
//! applied where a query asks for distinct courses.

use data_loader::Course;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Identity key of a course for deduplication: its title
pub fn course_identity(course: &Course) -> &str {
    &course.title
}

/// Keep the first item for each distinct key, preserving order
pub fn distinct_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Keep the first occurrence of each value, preserving order
pub fn distinct<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    distinct_by(items, T::clone)
}

/// Partition courses by key.
///
/// Each partition keeps the courses in iteration order, so a reduction
/// over a partition always sees the same sequence.
pub fn partition_by<'a, K, F>(
    courses: impl IntoIterator<Item = &'a Course>,
    key: F,
) -> HashMap<K, Vec<&'a Course>>
where
    K: Eq + Hash,
    F: Fn(&'a Course) -> K,
{
    let mut partitions: HashMap<K, Vec<&'a Course>> = HashMap::new();
    for course in courses {
        partitions.entry(key(course)).or_default().push(course);
    }
    partitions
}
