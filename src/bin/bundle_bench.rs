use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cafe_recommender_rs::bench::{
    print_summary, run_bench, write_csv, write_summary_json, BenchConfig,
};
use cafe_recommender_rs::interface::parse_sweetness_range;
use cafe_recommender_rs::models::normalize_tags;

#[derive(Parser, Debug)]
#[command(name = "bundle_bench")]
#[command(about = "Time the bundle search on seeded synthetic menus")]
struct Args {
    /// Number of synthetic drinks
    #[arg(long, default_value = "30")]
    drinks: usize,

    /// Number of synthetic bakery items
    #[arg(long, default_value = "30")]
    bakery: usize,

    /// Random seed for reproducible menus
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Party size (drinks per bundle)
    #[arg(long, default_value = "3")]
    people: usize,

    /// Bundle budget
    #[arg(long, default_value = "25000")]
    budget: u64,

    /// Sweetness range, e.g. 1-3
    #[arg(long, default_value = "0-4")]
    sweetness: String,

    /// Desired tags (comma-separated)
    #[arg(long, default_value = "")]
    tags: String,

    /// Worker threads for the timed runs
    #[arg(long, default_value = "4")]
    threads: usize,

    /// Number of timed runs
    #[arg(long, default_value = "3")]
    runs: usize,

    /// Output CSV file for per-run timings
    #[arg(long, default_value = "bench_runs.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "bench_summary.json")]
    json: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let sweetness_range = match parse_sweetness_range(&args.sweetness) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = BenchConfig {
        drinks: args.drinks,
        bakery: args.bakery,
        seed: args.seed,
        party_size: args.people,
        budget: args.budget,
        sweetness_range,
        tags: normalize_tags(&args.tags),
        threads: args.threads,
        runs: args.runs,
    };

    if let Err(e) = config.preference().validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!(
        "Menus: {} drinks, {} bakery items (seed {})",
        config.drinks, config.bakery, config.seed
    );

    let results = run_bench(&config);
    print_summary(&results);

    if !results.all_consistent() {
        eprintln!("Error: threaded search disagreed with the sequential result");
    }

    if let Err(e) = write_csv(&results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote run timings to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&config, &results, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }

    if !results.all_consistent() {
        std::process::exit(2);
    }
}
