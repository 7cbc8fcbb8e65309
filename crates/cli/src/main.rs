use analytics::{CourseAnalyzer, InstructorCourses};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::CourseRepository;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// CourseStats - Online course enrollment analytics
#[derive(Parser)]
#[command(name = "course-stats")]
#[command(about = "Analytical queries over online course enrollment data", long_about = None)]
struct Cli {
    /// Path to the course dataset CSV file
    #[arg(short, long, global = true, default_value = "data/online_courses.csv")]
    data: PathBuf,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total participants per institution
    Institutions,

    /// Total participants per institution and subject, largest first
    InstitutionSubjects,

    /// Courses each instructor taught alone and together with others
    Instructors {
        /// Only show this instructor
        #[arg(long)]
        name: Option<String>,
    },

    /// Top courses by total hours or participants
    Top {
        /// Number of courses to return
        #[arg(long, default_value = "10")]
        k: usize,

        /// Ranking metric: "hours" or "participants"
        #[arg(long, default_value = "participants")]
        by: String,
    },

    /// Search courses by subject, audit rate and course length
    Search {
        /// Subject substring (case-insensitive)
        #[arg(long)]
        subject: String,

        /// Minimum percentage of audited participants
        #[arg(long, default_value = "0")]
        min_audited: f64,

        /// Maximum total course hours (thousands)
        #[arg(long, default_value = "1000000")]
        max_hours: f64,
    },

    /// Recommend courses for a demographic profile
    Recommend {
        /// Your age in years
        #[arg(long)]
        age: i32,

        /// 0 for female, 1 for male
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..=1))]
        gender: i32,

        /// 1 if you hold a bachelor's degree or higher, otherwise 0
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..=1))]
        bachelor: i32,
    },

    /// Show dataset size and totals
    Summary,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let repository = Arc::new(
        CourseRepository::load_from_file(&cli.data)
            .with_context(|| format!("Failed to load course dataset from {}", cli.data.display()))?,
    );
    info!("Loaded {} offerings in {:?}", repository.len(), start.elapsed());

    let analyzer = CourseAnalyzer::new(repository);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Institutions => handle_institutions(&analyzer, cli.json)?,
        Commands::InstitutionSubjects => handle_institution_subjects(&analyzer, cli.json)?,
        Commands::Instructors { name } => handle_instructors(&analyzer, name, cli.json)?,
        Commands::Top { k, by } => handle_top(&analyzer, k, &by, cli.json)?,
        Commands::Search {
            subject,
            min_audited,
            max_hours,
        } => handle_search(&analyzer, &subject, min_audited, max_hours, cli.json)?,
        Commands::Recommend {
            age,
            gender,
            bachelor,
        } => handle_recommend(&analyzer, age, gender, bachelor, cli.json)?,
        Commands::Summary => handle_summary(&analyzer, cli.json)?,
    }

    Ok(())
}

/// Participant total for one grouping key, as printed in JSON output
#[derive(Serialize)]
struct KeyTotal<'a> {
    key: &'a str,
    participants: u64,
}

#[derive(Serialize)]
struct Summary {
    offerings: usize,
    institutions: usize,
    instructors: usize,
    participants: u64,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_institutions(analyzer: &CourseAnalyzer, json: bool) -> Result<()> {
    let totals = analyzer.participation_by_institution();
    if json {
        return print_json(&totals);
    }

    println!("{}", "Participants by institution:".bold().blue());
    for (institution, total) in &totals {
        println!("{}{}: {}", "• ".green(), institution, total);
    }
    Ok(())
}

fn handle_institution_subjects(analyzer: &CourseAnalyzer, json: bool) -> Result<()> {
    let totals = analyzer.participation_by_institution_subject();
    if json {
        let rows: Vec<KeyTotal> = totals
            .iter()
            .map(|(key, participants)| KeyTotal {
                key,
                participants: *participants,
            })
            .collect();
        return print_json(&rows);
    }

    println!("{}", "Participants by institution and subject:".bold().blue());
    for (rank, (key, total)) in totals.iter().enumerate() {
        println!("{}. {}: {}", (rank + 1).to_string().green(), key, total);
    }
    Ok(())
}

fn handle_instructors(analyzer: &CourseAnalyzer, name: Option<String>, json: bool) -> Result<()> {
    let mut lists = analyzer.course_lists_by_instructor();
    if let Some(name) = name {
        let courses = lists
            .remove(&name)
            .ok_or_else(|| anyhow!("Instructor '{}' not found", name))?;
        lists = BTreeMap::from([(name, courses)]);
    }
    if json {
        return print_json(&lists);
    }

    for (instructor, courses) in &lists {
        print_instructor(instructor, courses);
    }
    Ok(())
}

fn print_instructor(instructor: &str, courses: &InstructorCourses) {
    println!("{}", instructor.bold().blue());
    println!("  {} ({})", "Independent".cyan(), courses.independent.len());
    for title in &courses.independent {
        println!("    - {}", title);
    }
    println!("  {} ({})", "Cooperative".cyan(), courses.cooperative.len());
    for title in &courses.cooperative {
        println!("    - {}", title);
    }
}

fn handle_top(analyzer: &CourseAnalyzer, k: usize, by: &str, json: bool) -> Result<()> {
    let titles = analyzer.top_courses(k, by)?;
    print_titles(&format!("Top {} courses by {}:", k, by), &titles, json)
}

fn handle_search(
    analyzer: &CourseAnalyzer,
    subject: &str,
    min_audited: f64,
    max_hours: f64,
    json: bool,
) -> Result<()> {
    let titles = analyzer.search_courses(subject, min_audited, max_hours);
    print_titles(&format!("Courses matching '{}':", subject), &titles, json)
}

fn handle_recommend(
    analyzer: &CourseAnalyzer,
    age: i32,
    gender: i32,
    bachelor: i32,
    json: bool,
) -> Result<()> {
    let titles = analyzer.recommend(age, gender, bachelor);
    print_titles("Recommended courses:", &titles, json)
}

fn handle_summary(analyzer: &CourseAnalyzer, json: bool) -> Result<()> {
    let repository = analyzer.repository();
    let summary = Summary {
        offerings: repository.len(),
        institutions: analyzer.participation_by_institution().len(),
        instructors: analyzer.course_lists_by_instructor().len(),
        participants: repository.total_participants(),
    };
    if json {
        return print_json(&summary);
    }

    println!("{}", "Dataset summary:".bold().blue());
    println!("{}Offerings: {}", "• ".cyan(), summary.offerings);
    println!("{}Institutions: {}", "• ".cyan(), summary.institutions);
    println!("{}Instructors: {}", "• ".cyan(), summary.instructors);
    println!("{}Participants: {}", "• ".cyan(), summary.participants);
    Ok(())
}

/// Print a ranked list of titles, or a note when it is empty
fn print_titles(header: &str, titles: &[String], json: bool) -> Result<()> {
    if json {
        return print_json(&titles);
    }

    println!("{}", header.bold().blue());
    if titles.is_empty() {
        println!("  {}", "No courses found".yellow());
    }
    for (rank, title) in titles.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), title);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["course-stats", "top", "--data", "x.csv", "--json"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("x.csv"));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Top { k: 10, .. }));
    }

    #[test]
    fn test_data_defaults_when_omitted() {
        let cli = Cli::try_parse_from(["course-stats", "summary"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("data/online_courses.csv"));
    }
}
