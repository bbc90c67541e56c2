//! Profiling tool: time each pipeline stage at the reference size

use tileworld_generator::{generate_world, WorldConfig};

fn main() {
    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(1337u64);
    let config = WorldConfig::default();

    println!("=== Performance Profiling ===");
    println!(
        "World size: {}x{} ({} tiles), seed {}",
        config.width,
        config.height,
        config.width * config.height,
        seed
    );
    println!();

    let world = match generate_world(&config, seed) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("invalid config: {}", e);
            std::process::exit(1);
        }
    };

    let total: std::time::Duration = world.timings.iter().map(|(_, d)| *d).sum();
    println!("=== Summary ===");
    for (stage, elapsed) in &world.timings {
        println!(
            "{:<12} {:>8.2}% ({:?})",
            stage,
            100.0 * elapsed.as_secs_f64() / total.as_secs_f64().max(f64::EPSILON),
            elapsed
        );
    }
    println!("─────────────────────────────────");
    println!("TOTAL:       {:>8}  {:?}", "100%", total);
    println!();
    println!("{}", world.stats.summary());
}
