//! Cart Recommender
//!
//! Turns a rule set and a shopping cart into ranked item suggestions.
//!
//! Core principles:
//! - A rule fires when its antecedent shares at least one item with the
//!   cart. This is a deliberate relaxation of classical Apriori triggering
//!   (which requires the full antecedent as a subset of the cart): if the
//!   customer has any item from a rule's trigger set, the rule's other
//!   items are surfaced. Partial matching can surface lower-confidence
//!   associations than the literature would expect.
//! - Consequent items already in the cart are never suggested
//! - One candidate per item id; a later rule replaces an earlier one only
//!   when its confidence is strictly higher

use std::collections::HashMap;

use crate::types::{AssociationRule, ItemId, Itemset, Recommendation};

/// Rank suggestions for `cart` from `rules`, returning at most `limit`
/// candidates sorted by score descending (item id on ties, so the result
/// is deterministic).
pub fn recommend(cart: &Itemset, rules: &[AssociationRule], limit: usize) -> Vec<Recommendation> {
    let mut candidates: HashMap<&ItemId, Recommendation> = HashMap::new();

    for rule in rules {
        if !rule.antecedent.intersects(cart) {
            continue;
        }

        for item in rule.consequent.iter() {
            if cart.contains(item) {
                continue;
            }

            let replace = candidates
                .get(item)
                .map_or(true, |existing| rule.confidence > existing.score);
            if replace {
                candidates.insert(
                    item,
                    Recommendation {
                        item_id: item.clone(),
                        score: rule.confidence,
                        support: rule.support,
                        based_on: rule.antecedent.to_vec(),
                    },
                );
            }
        }
    }

    let mut ranked: Vec<Recommendation> = candidates.into_values().collect();
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.item_id.cmp(&b.item_id))
    });
    ranked.truncate(limit);
    ranked
}
