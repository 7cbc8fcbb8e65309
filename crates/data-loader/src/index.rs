//! Building a `CourseRepository` from the dataset file.
//!
//! Steps:
//! 1. Open the CSV file
//! 2. Parse every record (quote handling, dates, instructor split)
//! 3. Validate the parsed records
//! 4. Freeze them into a read-only repository

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{Course, CourseRepository};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

impl CourseRepository {
    /// Load the whole dataset from a CSV file
    ///
    /// This is the main entry point for loading data.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading course dataset from {:?}", path);

        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let courses = parser::parse_courses(BufReader::new(file))?;

        let repository = Self::try_from_courses(courses)?;
        info!(
            "Loaded {} course offerings ({} participants)",
            repository.len(),
            repository.total_participants()
        );
        Ok(repository)
    }

    /// Validate and wrap courses that came from somewhere other than the parser
    pub fn try_from_courses(courses: Vec<Course>) -> Result<Self> {
        validate(&courses)?;
        Ok(Self::from_courses(courses))
    }
}

/// Check that:
/// - every course has at least one instructor
/// - honor code is 0 or 1
///
/// The `line` reported for a failure assumes one header line.
fn validate(courses: &[Course]) -> Result<()> {
    for (idx, course) in courses.iter().enumerate() {
        if course.instructor_list.is_empty() {
            return Err(DataLoadError::EmptyInstructorList {
                title: course.title.clone(),
                line: idx + 2,
            });
        }
        if course.honor_code > 1 {
            return Err(DataLoadError::InvalidValue {
                field: "honorCode".to_string(),
                value: course.honor_code.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn course(title: &str, instructors: &[&str]) -> Course {
        Course {
            title: title.to_string(),
            instructors: instructors.join(", "),
            instructor_list: instructors.iter().map(|s| s.to_string()).collect(),
            participants: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_try_from_courses_keeps_order() {
        let repo = CourseRepository::try_from_courses(vec![
            course("B", &["x"]),
            course("A", &["y"]),
        ])
        .unwrap();

        let titles: Vec<&str> = repo.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(repo.total_participants(), 20);
    }

    #[test]
    fn test_try_from_courses_rejects_missing_instructors() {
        let result = CourseRepository::try_from_courses(vec![
            course("Fine", &["x"]),
            course("Broken", &[]),
        ]);
        assert!(matches!(
            result,
            Err(DataLoadError::EmptyInstructorList { line: 3, .. })
        ));
    }

    #[test]
    fn test_missing_file_keeps_io_error() {
        let result = CourseRepository::load_from_file(Path::new("does/not/exist.csv"));
        match result {
            Err(DataLoadError::Io { path, source }) => {
                assert_eq!(path, "does/not/exist.csv");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("loading a missing file succeeded"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Institution,Course Number,Launch Date,Course Title,Instructors,Course Subject,Year,Honor Code Certificates,Participants,Audited,Certified,% Audited,% Certified,% Certified 50,% Played Video,% Posted in Forum,% Grade Higher Than Zero,Total Course Hours,Median Hours for Certification,Median Age,% Male,% Female,% Bachelor's Degree or Higher").unwrap();
        writeln!(file, r#"HarvardX,PH207x,10/15/2012,Health in Numbers,"Earl Francis Cook, Marcello Pagano",Government,1,1,30002,17588,1000,58.64,3.33,5.71,0,9.63,21.2,260.92,34.15,30,62.85,37.15,77.03"#).unwrap();
        writeln!(file, r#"MITx,6.00x,09/26/2012,Introduction to Computer Science and Programming,Eric Grimson,Computer Science,1,1,52521,21893,4049,41.68,7.71,18.46,84.75,8.74,30.87,1026.68,65.17,26,83.49,16.51,62.92"#).unwrap();
        file.flush().unwrap();

        let repo = CourseRepository::load_from_file(file.path()).unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.courses()[0].instructor_list.len(), 2);
        assert_eq!(repo.total_participants(), 30002 + 52521);
    }
}
