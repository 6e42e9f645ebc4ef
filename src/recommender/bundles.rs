use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::models::{Bundle, Preference, ScoredItem};
use crate::recommender::combinatorics::{Combinations, Multisets};
use crate::recommender::constants::{BUNDLE_CANDIDATE_POOL, MAX_BAKERY_PER_BUNDLE, TOP_BUNDLES};
use crate::recommender::scoring::eligible_pool;

/// Knobs for a bundle search run. Neither changes which bundles are returned
/// for a search that runs to completion.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions<'c> {
    /// Worker threads sharing the drink multisets. `0` is treated as `1`.
    pub threads: usize,

    /// Checked once per drink multiset; when set the search stops early.
    pub cancel: Option<&'c AtomicBool>,
}

impl Default for SearchOptions<'_> {
    fn default() -> Self {
        Self {
            threads: 1,
            cancel: None,
        }
    }
}

/// Outcome of a bundle search plus counters for logging and benchmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundleSearchReport {
    /// Best bundles, score descending, at most [`TOP_BUNDLES`].
    pub bundles: Vec<Bundle>,

    pub multisets_enumerated: u64,

    /// Multisets whose drink subtotal stayed strictly under budget.
    pub multisets_within_budget: u64,

    /// Bundles whose full price fit the budget.
    pub bundles_kept: u64,

    /// True when the cancel flag stopped the search; `bundles` then reflects
    /// only the multisets visited.
    pub cancelled: bool,
}

/// Find the best drink + bakery bundles for a request.
///
/// Shorthand for [`search_bundles`] with default options.
pub fn find_bundles(drinks: &Catalog, bakery: &Catalog, pref: &Preference) -> Vec<Bundle> {
    search_bundles(drinks, bakery, pref, &SearchOptions::default()).bundles
}

/// Exhaustive bundle search.
///
/// Both catalogs are scored and trimmed to their top [`BUNDLE_CANDIDATE_POOL`]
/// eligible items. Every multiset of `party_size` drinks is paired with every
/// subset of 1..=[`MAX_BAKERY_PER_BUNDLE`] distinct bakery items; bundles whose
/// total price fits the budget are ranked by score, ties going to the one
/// enumerated first.
///
/// A drink subtotal equal to the budget is rejected before any bakery item is
/// considered, while a full bundle equal to the budget is accepted.
pub fn search_bundles(
    drinks: &Catalog,
    bakery: &Catalog,
    pref: &Preference,
    options: &SearchOptions<'_>,
) -> BundleSearchReport {
    if drinks.is_empty() || bakery.is_empty() || pref.party_size == 0 {
        return BundleSearchReport::default();
    }

    let range = pref.sweetness_range;
    let mut drink_pool = eligible_pool(drinks, &pref.selected_tags, range);
    let mut bakery_pool = eligible_pool(bakery, &pref.selected_tags, range);
    if drink_pool.is_empty() || bakery_pool.is_empty() {
        debug!(
            drinks = drink_pool.len(),
            bakery = bakery_pool.len(),
            "bundle search skipped: empty eligible pool"
        );
        return BundleSearchReport::default();
    }
    drink_pool.truncate(BUNDLE_CANDIDATE_POOL);
    bakery_pool.truncate(BUNDLE_CANDIDATE_POOL);

    let ctx = SearchContext {
        drinks: &drink_pool,
        bakery_sets: bakery_sets(&bakery_pool),
        party_size: pref.party_size,
        budget: pref.budget,
        cancel: options.cancel,
        next_group: AtomicUsize::new(0),
    };

    let threads = options.threads.clamp(1, drink_pool.len());
    let shared = &ctx;
    let partials: Vec<Partial> = if threads == 1 {
        vec![shared.run_worker()]
    } else {
        thread::scope(|scope| {
            let workers: Vec<_> = (0..threads)
                .map(|_| scope.spawn(move || shared.run_worker()))
                .collect();
            workers
                .into_iter()
                .map(|w| match w.join() {
                    Ok(partial) => partial,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    };

    let report = merge(partials, &drink_pool, &bakery_pool, &ctx.bakery_sets);
    info!(
        threads,
        multisets = report.multisets_enumerated,
        within_budget = report.multisets_within_budget,
        kept = report.bundles_kept,
        cancelled = report.cancelled,
        "bundle search finished"
    );
    report
}

/// One bakery subset with its sums precomputed.
#[derive(Debug, Clone)]
struct BakerySet {
    members: Vec<usize>,
    price: u64,
    score: u32,
}

/// All bakery subsets of size 1..=MAX, by size then lexicographically.
fn bakery_sets(pool: &[ScoredItem<'_>]) -> Vec<BakerySet> {
    (1..=MAX_BAKERY_PER_BUNDLE)
        .flat_map(|k| Combinations::new(pool.len(), k))
        .map(|members| BakerySet {
            price: members.iter().map(|&i| u64::from(pool[i].price())).sum(),
            score: members.iter().map(|&i| pool[i].total_score).sum(),
            members,
        })
        .collect()
}

struct SearchContext<'p, 'c> {
    drinks: &'p [ScoredItem<'p>],
    bakery_sets: Vec<BakerySet>,
    party_size: usize,
    budget: u64,
    cancel: Option<&'c AtomicBool>,
    /// Next first-drink index to hand out; each value is one contiguous run
    /// of multisets.
    next_group: AtomicUsize,
}

impl SearchContext<'_, '_> {
    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn run_worker(&self) -> Partial {
        let mut partial = Partial::default();
        let n = self.drinks.len();

        loop {
            let first = self.next_group.fetch_add(1, Ordering::Relaxed);
            if first >= n {
                break;
            }

            let mut multisets = Multisets::with_first(n, self.party_size, first);
            while let Some(indices) = multisets.current() {
                if self.is_cancelled() {
                    partial.cancelled = true;
                    return partial;
                }
                self.visit_multiset(indices, &mut partial);
                multisets.advance();
            }
        }
        partial
    }

    fn visit_multiset(&self, indices: &[usize], partial: &mut Partial) {
        partial.multisets_enumerated += 1;

        let drink_price: u64 = indices
            .iter()
            .map(|&i| u64::from(self.drinks[i].price()))
            .sum();
        // Strict: a drink subtotal equal to the budget leaves no room.
        if drink_price >= self.budget {
            return;
        }
        partial.multisets_within_budget += 1;

        let drink_score: u32 = indices.iter().map(|&i| self.drinks[i].total_score).sum();

        for (ordinal, set) in self.bakery_sets.iter().enumerate() {
            let price = drink_price + set.price;
            if price > self.budget {
                continue;
            }
            partial.bundles_kept += 1;
            partial.top.offer(drink_score + set.score, || Candidate {
                score: drink_score + set.score,
                price,
                drinks: indices.to_vec(),
                bakery_set: ordinal,
            });
        }
    }
}

/// A kept bundle, still in index form.
///
/// Ordering key: score descending, then enumeration order (drink indices,
/// then bakery subset ordinal).
#[derive(Debug, Clone)]
struct Candidate {
    score: u32,
    price: u64,
    drinks: Vec<usize>,
    bakery_set: usize,
}

impl Candidate {
    fn rank_cmp(&self, other: &Self) -> CmpOrdering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.drinks.cmp(&other.drinks))
            .then_with(|| self.bakery_set.cmp(&other.bakery_set))
    }
}

/// Bounded best-first buffer.
///
/// Offers must arrive in enumeration order: a newcomer is placed after every
/// entry with an equal or higher score, which reproduces a stable sort.
#[derive(Debug, Default)]
struct TopBundles {
    entries: Vec<Candidate>,
}

impl TopBundles {
    fn offer(&mut self, score: u32, make: impl FnOnce() -> Candidate) {
        let pos = self
            .entries
            .iter()
            .position(|c| c.score < score)
            .unwrap_or(self.entries.len());
        if pos >= TOP_BUNDLES {
            return;
        }
        self.entries.insert(pos, make());
        self.entries.truncate(TOP_BUNDLES);
    }
}

/// Per-worker result.
#[derive(Debug, Default)]
struct Partial {
    top: TopBundles,
    multisets_enumerated: u64,
    multisets_within_budget: u64,
    bundles_kept: u64,
    cancelled: bool,
}

fn merge(
    partials: Vec<Partial>,
    drinks: &[ScoredItem<'_>],
    bakery: &[ScoredItem<'_>],
    bakery_sets: &[BakerySet],
) -> BundleSearchReport {
    let mut report = BundleSearchReport::default();
    let mut candidates: Vec<Candidate> = Vec::new();

    for partial in partials {
        report.multisets_enumerated += partial.multisets_enumerated;
        report.multisets_within_budget += partial.multisets_within_budget;
        report.bundles_kept += partial.bundles_kept;
        report.cancelled |= partial.cancelled;
        candidates.extend(partial.top.entries);
    }

    candidates.sort_by(Candidate::rank_cmp);
    candidates.truncate(TOP_BUNDLES);

    report.bundles = candidates
        .into_iter()
        .map(|c| Bundle {
            score: c.score,
            price: c.price,
            drinks: c.drinks.iter().map(|&i| drinks[i].name().to_string()).collect(),
            bakeries: bakery_sets[c.bakery_set]
                .members
                .iter()
                .map(|&i| bakery[i].name().to_string())
                .collect(),
        })
        .collect();
    report
}
