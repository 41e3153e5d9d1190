use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/sample");

    println!("Loading catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_files(data_dir)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let movies = catalog.len();
    let scores = movies * catalog.similarity().dimension();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Similarity scores: {}", scores);
    println!("\nPerformance: {:.0} scores/second",
             scores as f64 / elapsed.as_secs_f64());
}
