//! Frequent Itemset Miner
//!
//! Level-wise Apriori over canonical transactions.
//!
//! Core principles:
//! - Level k = 1: count distinct items across all transactions
//! - Level k >= 2: join pairs of frequent (k-1)-itemsets whose union has
//!   exactly k elements, deduplicating unions via canonical form
//! - Support of a candidate is the fraction of transactions that are
//!   supersets of it; candidates below the minimum are discarded
//! - Mining stops at the first level that yields no frequent itemset, which
//!   is what enforces the Apriori property: supersets of an infrequent
//!   itemset are never generated
//!
//! Worst-case cost is exponential in the number of surviving itemsets;
//! callers bound it by choosing a sane minimum support.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::error::Result;
use crate::sanitize;
use crate::types::{FrequentItemset, Itemset, Transaction, DEFAULT_MIN_SUPPORT};

/// Apriori frequent itemset miner.
#[derive(Clone, Debug)]
pub struct FrequentItemsetMiner {
    min_support: f64,
}

impl Default for FrequentItemsetMiner {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
        }
    }
}

impl FrequentItemsetMiner {
    /// Create a miner, rejecting a minimum support outside (0, 1].
    pub fn new(min_support: f64) -> Result<Self> {
        sanitize::check_threshold("min_support", min_support)?;
        Ok(Self { min_support })
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Find all itemsets whose support meets the minimum.
    ///
    /// Returns records sorted by support descending (canonical itemset
    /// order on ties). An empty transaction slice yields an empty vector.
    pub fn mine(&self, transactions: &[Transaction]) -> Vec<FrequentItemset> {
        if transactions.is_empty() {
            return Vec::new();
        }

        let mut frequent = Vec::new();
        let mut current = self.frequent_singletons(transactions);
        let mut level = 1usize;

        while !current.is_empty() {
            tracing::debug!(level, survivors = current.len(), "apriori level complete");
            frequent.extend(current.iter().cloned());

            level += 1;
            let candidates = join_candidates(&current);
            if candidates.is_empty() {
                break;
            }
            tracing::debug!(level, candidates = candidates.len(), "apriori candidates generated");

            current = self.prune_candidates(candidates, transactions);
        }

        frequent.sort_by(|a, b| {
            b.support
                .total_cmp(&a.support)
                .then_with(|| a.itemset.cmp(&b.itemset))
        });
        frequent
    }

    /// Level 1: count each distinct item across all transactions.
    fn frequent_singletons(&self, transactions: &[Transaction]) -> Vec<FrequentItemset> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for transaction in transactions {
            // Items within a transaction are already distinct.
            for item in transaction.iter() {
                *counts.entry(item.as_str()).or_insert(0) += 1;
            }
        }

        let total = transactions.len() as f64;
        let mut singletons: Vec<FrequentItemset> = counts
            .into_iter()
            .filter_map(|(item, count)| {
                let support = count as f64 / total;
                (support >= self.min_support).then(|| FrequentItemset {
                    itemset: Itemset::single(item),
                    support,
                })
            })
            .collect();

        singletons.sort_by(|a, b| a.itemset.cmp(&b.itemset));
        singletons
    }

    /// Keep candidates whose support meets the minimum.
    ///
    /// Counting scans every transaction per candidate; candidates are
    /// independent, so the scan is parallelized. Survivors are re-sorted
    /// canonically to keep output deterministic.
    fn prune_candidates(
        &self,
        candidates: Vec<Itemset>,
        transactions: &[Transaction],
    ) -> Vec<FrequentItemset> {
        let mut survivors: Vec<FrequentItemset> = candidates
            .into_par_iter()
            .filter_map(|candidate| {
                let support = Self::support(&candidate, transactions);
                (support >= self.min_support).then(|| FrequentItemset {
                    itemset: candidate,
                    support,
                })
            })
            .collect();

        survivors.sort_by(|a, b| a.itemset.cmp(&b.itemset));
        survivors
    }

    /// Fraction of transactions that are supersets of `itemset`.
    pub fn support(itemset: &Itemset, transactions: &[Transaction]) -> f64 {
        if transactions.is_empty() {
            return 0.0;
        }
        let count = transactions
            .iter()
            .filter(|transaction| itemset.is_subset_of(transaction))
            .count();
        count as f64 / transactions.len() as f64
    }
}

/// Join step: union every pair of size-(k-1) frequent itemsets whose union
/// has exactly k elements. Different pairs can produce the same union, so
/// candidates are deduplicated through their canonical form.
fn join_candidates(previous: &[FrequentItemset]) -> Vec<Itemset> {
    let mut seen: HashSet<Itemset> = HashSet::new();
    let mut candidates = Vec::new();
    let target_len = match previous.first() {
        Some(first) => first.itemset.len() + 1,
        None => return candidates,
    };

    for i in 0..previous.len() {
        for j in (i + 1)..previous.len() {
            let union = previous[i].itemset.union(&previous[j].itemset);
            if union.len() == target_len && seen.insert(union.clone()) {
                candidates.push(union);
            }
        }
    }

    candidates
}
