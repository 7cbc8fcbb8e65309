use data_loader::CourseRepository;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_path = Path::new("data/online_courses.csv");

    println!("Loading online course dataset...\n");

    let start = Instant::now();
    let repository = CourseRepository::load_from_file(data_path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Offerings: {}", repository.len());
    println!("Participants: {}", repository.total_participants());
    println!("\nPerformance: {:.0} records/second",
             repository.len() as f64 / elapsed.as_secs_f64());
}
