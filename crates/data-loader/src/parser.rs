//! Parser for the online-course CSV file.
//!
//! One header line, then one record per course offering with
//! `FIELD_COUNT` comma-separated fields. Commas inside double quotes do not
//! split a field. The csv reader removes the wrapping quotes and unescapes
//! doubled ones, so title, instructors and subject are taken as it returns
//! them.

use crate::error::{DataLoadError, Result};
use crate::types::{Course, FIELD_COUNT};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

/// Launch dates are written as month/day/year, e.g. `06/05/2012`
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse every record from a CSV source.
///
/// The first line is treated as a header and skipped. Blank lines are
/// ignored. Parsing stops at the first malformed record.
pub fn parse_courses<R: Read>(reader: R) -> Result<Vec<Course>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        // Field counts are checked per record so the error names the line
        .flexible(true)
        .from_reader(reader);

    let mut courses = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(courses.len() + 2);
        courses.push(parse_record(&record, line)?);
    }
    Ok(courses)
}

/// Convert one CSV record into a `Course`
fn parse_record(record: &StringRecord, line: usize) -> Result<Course> {
    if record.len() != FIELD_COUNT {
        return Err(DataLoadError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: record.len(),
            line,
        });
    }

    let title = record[3].to_string();
    let instructors = record[4].to_string();
    let instructor_list = split_instructors(&instructors);
    if instructor_list.is_empty() {
        return Err(DataLoadError::EmptyInstructorList { title, line });
    }

    let honor_code: u8 = parse_number(&record[7], "honorCode", line)?;
    if honor_code > 1 {
        return Err(DataLoadError::InvalidValue {
            field: "honorCode".to_string(),
            value: record[7].to_string(),
        });
    }

    Ok(Course {
        institution: record[0].trim().to_string(),
        course_number: record[1].trim().to_string(),
        launch_date: parse_date(&record[2], line)?,
        title,
        instructors,
        instructor_list,
        subject: record[5].to_string(),
        year: parse_number(&record[6], "year", line)?,
        honor_code,
        participants: parse_number(&record[8], "participants", line)?,
        audited: parse_number(&record[9], "audited", line)?,
        certified: parse_number(&record[10], "certified", line)?,
        percent_audited: parse_number(&record[11], "percentAudited", line)?,
        percent_certified: parse_number(&record[12], "percentCertified", line)?,
        percent_certified_50: parse_number(&record[13], "percentCertified50", line)?,
        percent_video: parse_number(&record[14], "percentVideo", line)?,
        percent_forum: parse_number(&record[15], "percentForum", line)?,
        grade_higher_zero: parse_number(&record[16], "gradeHigherZero", line)?,
        total_hours: parse_number(&record[17], "totalHours", line)?,
        median_hours_certification: parse_number(&record[18], "medianHoursCertification", line)?,
        median_age: parse_number(&record[19], "medianAge", line)?,
        percent_male: parse_number(&record[20], "percentMale", line)?,
        percent_female: parse_number(&record[21], "percentFemale", line)?,
        percent_degree: parse_number(&record[22], "percentDegree", line)?,
    })
}

fn parse_number<T>(raw: &str, field: &'static str, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e| DataLoadError::ParseError {
        line,
        field,
        reason: format!("'{}': {}", raw, e),
    })
}

fn parse_date(raw: &str, line: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| DataLoadError::ParseError {
        line,
        field: "launchDate",
        reason: format!("'{}': {}", raw, e),
    })
}

/// Split the raw instructor field on `", "`
///
/// Example: "Eric Grimson, John Guttag" -> ["Eric Grimson", "John Guttag"]
///
/// Names are trimmed and empty ones are dropped, so a blank field yields an
/// empty list.
pub fn split_instructors(raw: &str) -> Vec<String> {
    raw.split(", ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
