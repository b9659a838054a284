//! Common Types and Constants
//!
//! Shared data structures used across the mining, rule-generation, and
//! recommendation modules.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sanitize;

// ==================== Constants ====================

/// Default minimum support threshold (5%)
pub const DEFAULT_MIN_SUPPORT: f64 = 0.05;

/// Default minimum confidence threshold
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Default number of returned recommendations
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Minimum transaction count below which recommendations are withheld
pub const MIN_TRANSACTIONS: usize = 3;

/// Support floor used for the lift denominator when the exact consequent
/// itemset was never recorded as frequent. Keeps lift finite; documented
/// approximation, not a statistically rigorous value.
pub const CONSEQUENT_SUPPORT_FLOOR: f64 = 0.01;

// ==================== Item and Itemset ====================

/// Opaque item identifier. The algorithm uses it for identity only;
/// in practice it is a stable product record id.
pub type ItemId = String;

/// A set of distinct item identifiers kept in canonical sorted order.
///
/// Canonical form makes set equality reduce to sequence equality, so the
/// type can serve directly as a `HashMap` key for candidate deduplication
/// and support lookup. Serde sees it as a plain array and re-normalizes
/// on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<ItemId>", into = "Vec<ItemId>")]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    /// Build an itemset from arbitrary items, sorting and deduplicating.
    pub fn new(mut items: Vec<ItemId>) -> Self {
        items.sort();
        items.dedup();
        Self(items)
    }

    /// Single-item set.
    pub fn single(item: impl Into<ItemId>) -> Self {
        Self(vec![item.into()])
    }

    /// Items in canonical order.
    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.binary_search_by(|probe| probe.as_str().cmp(item)).is_ok()
    }

    /// True when every item of `self` appears in `other`.
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.0.iter().all(|item| other.contains(item))
    }

    /// True when `self` and `other` share at least one item.
    pub fn intersects(&self, other: &Itemset) -> bool {
        self.0.iter().any(|item| other.contains(item))
    }

    /// Set union, canonical.
    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut items = self.0.clone();
        items.extend_from_slice(&other.0);
        Itemset::new(items)
    }

    /// Items of `self` not present in `other`. Stays canonical because
    /// filtering a sorted sequence preserves its order.
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset(
            self.0
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemId> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<ItemId> {
        self.0.clone()
    }
}

impl From<Vec<ItemId>> for Itemset {
    fn from(items: Vec<ItemId>) -> Self {
        Self::new(items)
    }
}

impl From<Itemset> for Vec<ItemId> {
    fn from(itemset: Itemset) -> Self {
        itemset.0
    }
}

impl FromIterator<ItemId> for Itemset {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One historical completed order, reduced to the distinct items it
/// contains. Order within a transaction carries no meaning.
pub type Transaction = Itemset;

// ==================== Mining and Rule Types ====================

/// An itemset whose support met the configured minimum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrequentItemset {
    /// Items in canonical order
    pub itemset: Itemset,
    /// Fraction of transactions containing the itemset, in [0, 1]
    pub support: f64,
}

/// Association rule: antecedent => consequent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    /// Trigger itemset (left side)
    pub antecedent: Itemset,
    /// Recommended itemset (right side), disjoint from the antecedent
    pub consequent: Itemset,
    /// Support of antecedent ∪ consequent
    pub support: f64,
    /// support(antecedent ∪ consequent) / support(antecedent), in [0, 1]
    pub confidence: f64,
    /// confidence / support(consequent); > 1 indicates positive correlation
    pub lift: f64,
}

// ==================== Recommendation Types ====================

/// A single ranked suggestion. One per distinct item id; when several rules
/// recommend the same item, the highest-confidence rule wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Suggested item
    pub item_id: ItemId,
    /// Confidence of the best supporting rule
    pub score: f64,
    /// Support of that rule
    pub support: f64,
    /// Antecedent items the suggestion is based on
    pub based_on: Vec<ItemId>,
}

/// Why no data-driven recommendation is available.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InsufficientDataReason {
    /// Fewer than [`MIN_TRANSACTIONS`] usable transactions exist.
    TooFewTransactions { count: usize },
    /// The rule set produced zero candidates for this cart.
    NoMatchingRules,
}

/// Outcome of a recommendation request.
///
/// `InsufficientData` is a valid, non-error result: callers substitute a
/// popularity-based fallback without error-handling special cases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum RecommendOutcome {
    /// Ranked suggestions, at most the requested limit.
    Suggestions(Vec<Recommendation>),
    /// No data-driven recommendation available.
    InsufficientData(InsufficientDataReason),
}

impl RecommendOutcome {
    /// Suggestions, if any were produced.
    pub fn suggestions(&self) -> Option<&[Recommendation]> {
        match self {
            RecommendOutcome::Suggestions(items) => Some(items),
            RecommendOutcome::InsufficientData(_) => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, RecommendOutcome::InsufficientData(_))
    }
}

// ==================== Configuration ====================

/// Engine thresholds. Both values must lie in (0, 1]; out-of-range values
/// are rejected fail-fast, never clamped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Minimum support for frequent itemsets
    pub min_support: f64,
    /// Minimum confidence for retained rules
    pub min_confidence: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl EngineConfig {
    /// Check both thresholds, failing fast on the first violation.
    pub fn validate(&self) -> Result<()> {
        sanitize::check_threshold("min_support", self.min_support)?;
        sanitize::check_threshold("min_confidence", self.min_confidence)?;
        Ok(())
    }
}

// ==================== Training Report ====================

/// Output of the training/reporting interface: everything the admin
/// statistics view and the recommender need from one mining pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    /// Number of usable transactions after normalization
    pub transaction_count: usize,
    /// Frequent itemsets, sorted by support descending
    pub frequent_itemsets: Vec<FrequentItemset>,
    /// Association rules, sorted by confidence descending
    pub rules: Vec<AssociationRule>,
}

impl TrainingReport {
    /// Top itemsets by support (the list is already sorted descending).
    pub fn top_itemsets(&self, n: usize) -> &[FrequentItemset] {
        &self.frequent_itemsets[..n.min(self.frequent_itemsets.len())]
    }

    /// Top rules by confidence (the list is already sorted descending).
    pub fn top_rules(&self, n: usize) -> &[AssociationRule] {
        &self.rules[..n.min(self.rules.len())]
    }

    /// JSON snapshot for the reporting caller.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ==================== Tests ====================
