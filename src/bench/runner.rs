use std::time::Instant;

use tracing::{debug, info};

use crate::catalog::{synthetic_catalog, Catalog, SyntheticSpec};
use crate::models::{Preference, SweetnessRange};
use crate::recommender::{multiset_count, search_bundles, BundleSearchReport, SearchOptions};

/// Configuration for a benchmark session.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub drinks: usize,
    pub bakery: usize,
    pub seed: u64,
    pub party_size: usize,
    pub budget: u64,
    pub sweetness_range: SweetnessRange,
    pub tags: Vec<String>,
    pub threads: usize,
    pub runs: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            drinks: 30,
            bakery: 30,
            seed: 123,
            party_size: 3,
            budget: 25_000,
            sweetness_range: SweetnessRange::new(0, 4),
            tags: Vec::new(),
            threads: 4,
            runs: 3,
        }
    }
}

impl BenchConfig {
    pub fn preference(&self) -> Preference {
        Preference {
            selected_tags: self.tags.clone(),
            sweetness_range: self.sweetness_range,
            budget: self.budget,
            party_size: self.party_size,
        }
    }

    /// Synthetic (drinks, bakery) catalogs for this seed.
    pub fn catalogs(&self) -> (Catalog, Catalog) {
        let drinks = synthetic_catalog("drink", &SyntheticSpec::drinks(self.drinks), self.seed);
        let bakery = synthetic_catalog(
            "bakery",
            &SyntheticSpec::bakery(self.bakery),
            self.seed.wrapping_add(1),
        );
        (drinks, bakery)
    }
}

/// Timing and counters for one search run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub run: usize,
    pub threads: usize,
    pub elapsed_ms: f64,
    pub multisets: u64,
    pub within_budget: u64,
    pub kept: u64,
    pub top_score: Option<u32>,
    /// Whether this run returned exactly the sequential result.
    pub matches_reference: bool,
}

/// Results from a benchmark session.
#[derive(Debug, Clone)]
pub struct BenchResults {
    /// Sequential search, used as the expected output.
    pub reference: BundleSearchReport,
    pub reference_ms: f64,
    pub runs: Vec<RunResult>,
    /// Upper bound on multisets for the candidate pool and party size.
    pub multiset_upper_bound: u64,
}

impl BenchResults {
    pub fn all_consistent(&self) -> bool {
        self.runs.iter().all(|r| r.matches_reference)
    }

    pub fn mean_ms(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| r.elapsed_ms).sum::<f64>() / self.runs.len() as f64
    }
}

fn timed(
    drinks: &Catalog,
    bakery: &Catalog,
    pref: &Preference,
    threads: usize,
) -> (BundleSearchReport, f64) {
    let options = SearchOptions {
        threads,
        cancel: None,
    };
    let start = Instant::now();
    let report = search_bundles(drinks, bakery, pref, &options);
    (report, start.elapsed().as_secs_f64() * 1000.0)
}

/// Run the sequential reference once, then `runs` threaded searches.
pub fn run_bench(config: &BenchConfig) -> BenchResults {
    let (drinks, bakery) = config.catalogs();
    let pref = config.preference();

    info!(
        drinks = drinks.len(),
        bakery = bakery.len(),
        party_size = pref.party_size,
        budget = pref.budget,
        "starting bundle benchmark"
    );

    let (reference, reference_ms) = timed(&drinks, &bakery, &pref, 1);
    debug!(elapsed_ms = reference_ms, "sequential reference done");

    let runs = (0..config.runs)
        .map(|i| {
            let (report, elapsed_ms) = timed(&drinks, &bakery, &pref, config.threads);
            RunResult {
                run: i + 1,
                threads: config.threads,
                elapsed_ms,
                multisets: report.multisets_enumerated,
                within_budget: report.multisets_within_budget,
                kept: report.bundles_kept,
                top_score: report.bundles.first().map(|b| b.score),
                matches_reference: report == reference,
            }
        })
        .collect();

    let pool = drinks.len().min(crate::recommender::BUNDLE_CANDIDATE_POOL);
    BenchResults {
        reference,
        reference_ms,
        runs,
        multiset_upper_bound: multiset_count(pool, config.party_size),
    }
}
