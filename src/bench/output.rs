use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::bench::runner::{BenchConfig, BenchResults};
use crate::error::Result;

/// Round a float to n decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write one CSV row per timed run.
pub fn write_csv(results: &BenchResults, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "run",
        "threads",
        "elapsed_ms",
        "multisets",
        "within_budget",
        "bundles_kept",
        "top_score",
        "matches_reference",
    ])?;

    for run in &results.runs {
        wtr.write_record([
            run.run.to_string(),
            run.threads.to_string(),
            format!("{:.3}", run.elapsed_ms),
            run.multisets.to_string(),
            run.within_budget.to_string(),
            run.kept.to_string(),
            run.top_score.map(|s| s.to_string()).unwrap_or_default(),
            run.matches_reference.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a JSON summary: configuration, reference result and timings.
pub fn write_summary_json(config: &BenchConfig, results: &BenchResults, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "config": {
            "drinks": config.drinks,
            "bakery": config.bakery,
            "seed": config.seed,
            "party_size": config.party_size,
            "budget": config.budget,
            "sweetness_range": config.sweetness_range,
            "tags": config.tags,
            "threads": config.threads,
            "runs": config.runs,
        },
        "reference": results.reference,
        "timing": {
            "reference_ms": round_to(results.reference_ms, 3),
            "mean_threaded_ms": round_to(results.mean_ms(), 3),
        },
        "multiset_upper_bound": results.multiset_upper_bound,
        "consistent": results.all_consistent(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print a short report to stdout.
pub fn print_summary(results: &BenchResults) {
    let reference = &results.reference;

    println!("\n=== Bundle search benchmark ===\n");
    println!(
        "Multisets: {} enumerated (bound {}), {} within budget",
        reference.multisets_enumerated,
        results.multiset_upper_bound,
        reference.multisets_within_budget
    );
    println!("Bundles kept: {}", reference.bundles_kept);
    println!("Sequential: {:.2} ms", results.reference_ms);

    for run in &results.runs {
        let mark = if run.matches_reference { "ok" } else { "MISMATCH" };
        println!(
            "Run {:>2} ({} threads): {:>10.2} ms  [{}]",
            run.run, run.threads, run.elapsed_ms, mark
        );
    }

    if !results.runs.is_empty() && results.mean_ms() > 0.0 {
        println!(
            "Mean threaded: {:.2} ms (speedup {:.2}x)",
            results.mean_ms(),
            results.reference_ms / results.mean_ms()
        );
    }

    println!();
    for (i, bundle) in reference.bundles.iter().enumerate() {
        println!(
            "#{}: score {} price {} drinks [{}] bakery [{}]",
            i + 1,
            bundle.score,
            bundle.price,
            bundle.drinks.join(", "),
            bundle.bakeries.join(", ")
        );
    }
    println!();
}
