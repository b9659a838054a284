//! Association Rule Generator
//!
//! Derives antecedent => consequent rules from mined frequent itemsets.
//!
//! Core principles:
//! - Every proper, non-empty subset of a frequent itemset of size >= 2 is a
//!   candidate antecedent; the consequent is the remaining items
//! - confidence = support(itemset) / support(antecedent), with the
//!   antecedent support looked up among the mined records by exact
//!   canonical match
//! - An antecedent with no support record produces no rule: confidence is
//!   not computable from available data, a sparsity condition rather than a
//!   fault (it can hide rules when a record was pruned elsewhere)
//! - lift = confidence / support(consequent); a missing consequent record
//!   falls back to a small support floor, so lift stays finite at the cost
//!   of statistical rigor

use std::collections::HashMap;

use crate::error::Result;
use crate::sanitize;
use crate::types::{
    AssociationRule, FrequentItemset, ItemId, Itemset, CONSEQUENT_SUPPORT_FLOOR,
    DEFAULT_MIN_CONFIDENCE,
};

/// Rule generator with a minimum confidence bar.
#[derive(Clone, Debug)]
pub struct RuleGenerator {
    min_confidence: f64,
}

impl Default for RuleGenerator {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl RuleGenerator {
    /// Create a generator, rejecting a minimum confidence outside (0, 1].
    pub fn new(min_confidence: f64) -> Result<Self> {
        sanitize::check_threshold("min_confidence", min_confidence)?;
        Ok(Self { min_confidence })
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Derive rules from frequent itemsets, sorted by confidence
    /// descending. The sort is stable, so ties keep discovery order.
    pub fn generate(&self, frequent: &[FrequentItemset]) -> Vec<AssociationRule> {
        let support_index: HashMap<&Itemset, f64> = frequent
            .iter()
            .map(|record| (&record.itemset, record.support))
            .collect();

        let mut rules = Vec::new();

        for record in frequent {
            if record.itemset.len() < 2 {
                continue;
            }

            for antecedent in proper_subsets(record.itemset.items()) {
                let Some(&antecedent_support) = support_index.get(&antecedent) else {
                    tracing::trace!(
                        antecedent = ?antecedent.items(),
                        itemset = ?record.itemset.items(),
                        "antecedent support not recorded, skipping rule"
                    );
                    continue;
                };

                let confidence = record.support / antecedent_support;
                if confidence < self.min_confidence {
                    continue;
                }

                let consequent = record.itemset.difference(&antecedent);
                let consequent_support = support_index
                    .get(&consequent)
                    .copied()
                    .unwrap_or(CONSEQUENT_SUPPORT_FLOOR);
                let lift = confidence / consequent_support;

                rules.push(AssociationRule {
                    antecedent,
                    consequent,
                    support: record.support,
                    confidence,
                    lift,
                });
            }
        }

        rules.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        rules
    }
}

/// All proper, non-empty subsets of a canonical item slice.
///
/// Bitmask enumeration over up to 2^n - 2 subsets; frequent itemsets stay
/// small under realistic thresholds, so n is in the single digits. Selecting
/// from a sorted slice keeps each subset canonical without re-sorting.
fn proper_subsets(items: &[ItemId]) -> Vec<Itemset> {
    let n = items.len();
    let mut subsets = Vec::with_capacity((1usize << n).saturating_sub(2));

    for mask in 1..(1usize << n).saturating_sub(1) {
        let subset: Vec<ItemId> = items
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, item)| item.clone())
            .collect();
        subsets.push(Itemset::new(subset));
    }

    subsets
}
