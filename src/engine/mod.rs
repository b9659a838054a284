//! Recommendation Engine Facade
//!
//! Entry point for the two callers of the core:
//!
//! - the training/reporting caller, which supplies order histories and
//!   reads frequent itemsets and rules for admin statistics
//! - the recommendation caller, which supplies a cart and a limit and
//!   receives ranked suggestions or a distinguishable insufficient-data
//!   signal for its popularity fallback
//!
//! Every call recomputes itemsets and rules from the supplied transactions:
//! the computation is batch, stateless, and idempotent, so concurrent use
//! needs no locking. Callers needing bounded latency bound input size or
//! raise the support threshold; there is no internal timeout.

use crate::error::{EngineError, Result};
use crate::mining::FrequentItemsetMiner;
use crate::recommend;
use crate::rules::RuleGenerator;
use crate::sanitize;
use crate::types::{
    EngineConfig, InsufficientDataReason, ItemId, RecommendOutcome, TrainingReport,
    MIN_TRANSACTIONS,
};

/// Association-rule recommendation engine.
#[derive(Clone, Debug, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
    miner: FrequentItemsetMiner,
    rule_gen: RuleGenerator,
}

impl RecommendationEngine {
    /// Create an engine, rejecting thresholds outside (0, 1].
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let miner = FrequentItemsetMiner::new(config.min_support)?;
        let rule_gen = RuleGenerator::new(config.min_confidence)?;
        Ok(Self {
            config,
            miner,
            rule_gen,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mine frequent itemsets and derive rules from raw order histories.
    ///
    /// Orders are normalized first (per-order dedup, empty orders dropped),
    /// so the report's transaction count is the support denominator.
    pub fn train(&self, orders: &[Vec<ItemId>]) -> TrainingReport {
        let transactions = sanitize::normalize_transactions(orders);
        let frequent_itemsets = self.miner.mine(&transactions);
        let rules = self.rule_gen.generate(&frequent_itemsets);

        tracing::debug!(
            transactions = transactions.len(),
            frequent_itemsets = frequent_itemsets.len(),
            rules = rules.len(),
            "training pass complete"
        );

        TrainingReport {
            transaction_count: transactions.len(),
            frequent_itemsets,
            rules,
        }
    }

    /// Train on `orders` and rank suggestions for `cart`.
    pub fn recommend(
        &self,
        orders: &[Vec<ItemId>],
        cart: &[ItemId],
        limit: usize,
    ) -> Result<RecommendOutcome> {
        if limit == 0 {
            return Err(EngineError::ZeroLimit);
        }
        let report = self.train(orders);
        self.recommend_with_report(&report, cart, limit)
    }

    /// Rank suggestions against a previously computed report.
    ///
    /// This is the reuse seam for callers that train once and serve many
    /// carts (and where a rule-set cache would attach if one were added).
    pub fn recommend_with_report(
        &self,
        report: &TrainingReport,
        cart: &[ItemId],
        limit: usize,
    ) -> Result<RecommendOutcome> {
        if limit == 0 {
            return Err(EngineError::ZeroLimit);
        }

        if report.transaction_count < MIN_TRANSACTIONS {
            tracing::debug!(
                transactions = report.transaction_count,
                required = MIN_TRANSACTIONS,
                "withholding recommendations, corpus too small"
            );
            return Ok(RecommendOutcome::InsufficientData(
                InsufficientDataReason::TooFewTransactions {
                    count: report.transaction_count,
                },
            ));
        }

        let cart = sanitize::normalize_cart(cart);
        let suggestions = recommend::recommend(&cart, &report.rules, limit);
        if suggestions.is_empty() {
            return Ok(RecommendOutcome::InsufficientData(
                InsufficientDataReason::NoMatchingRules,
            ));
        }

        Ok(RecommendOutcome::Suggestions(suggestions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders(rows: &[&[&str]]) -> Vec<Vec<ItemId>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn cart(items: &[&str]) -> Vec<ItemId> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn spec_orders() -> Vec<Vec<ItemId>> {
        orders(&[&["A", "B"], &["A", "B"], &["A", "C"], &["B", "C"]])
    }

    fn engine(min_support: f64, min_confidence: f64) -> RecommendationEngine {
        RecommendationEngine::new(EngineConfig {
            min_support,
            min_confidence,
        })
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = RecommendationEngine::new(EngineConfig {
            min_support: 0.0,
            min_confidence: 0.5,
        })
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidThreshold { param: "min_support", .. }));
    }

    #[test]
    fn test_train_on_spec_basket() {
        let report = engine(0.25, 0.5).train(&spec_orders());
        assert_eq!(report.transaction_count, 4);
        assert_eq!(report.frequent_itemsets.len(), 6);
        assert!(!report.rules.is_empty());
        // A => B with confidence 1.0 ranks first.
        assert_eq!(report.rules[0].confidence, 1.0);
    }

    #[test]
    fn test_train_on_empty_orders() {
        let report = engine(0.25, 0.5).train(&[]);
        assert_eq!(report.transaction_count, 0);
        assert!(report.frequent_itemsets.is_empty());
        assert!(report.rules.is_empty());
    }

    #[test]
    fn test_train_is_idempotent() {
        let engine = engine(0.25, 0.5);
        let orders = spec_orders();
        assert_eq!(engine.train(&orders), engine.train(&orders));
    }

    #[test]
    fn test_recommend_end_to_end() {
        let outcome = engine(0.25, 0.5)
            .recommend(&spec_orders(), &cart(&["A"]), 5)
            .unwrap();
        let suggestions = outcome.suggestions().expect("suggestions");
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].item_id, "B");
        assert!(suggestions.iter().all(|s| s.item_id != "A"));
    }

    #[test]
    fn test_recommend_rejects_zero_limit() {
        let engine = engine(0.25, 0.5);
        assert_eq!(
            engine.recommend(&spec_orders(), &cart(&["A"]), 0).unwrap_err(),
            EngineError::ZeroLimit
        );
        let report = engine.train(&spec_orders());
        assert_eq!(
            engine
                .recommend_with_report(&report, &cart(&["A"]), 0)
                .unwrap_err(),
            EngineError::ZeroLimit
        );
    }

    #[test]
    fn test_too_few_transactions_signal() {
        // Two usable orders is below the three-transaction minimum.
        let outcome = engine(0.25, 0.5)
            .recommend(&orders(&[&["A", "B"], &["A", "B"]]), &cart(&["A"]), 5)
            .unwrap();
        assert_eq!(
            outcome,
            RecommendOutcome::InsufficientData(InsufficientDataReason::TooFewTransactions {
                count: 2,
            })
        );
    }

    #[test]
    fn test_empty_orders_counted_after_normalization() {
        // Four raw orders but only two usable ones.
        let raw = orders(&[&["A", "B"], &[], &["A", "B"], &[]]);
        let outcome = engine(0.25, 0.5).recommend(&raw, &cart(&["A"]), 5).unwrap();
        assert!(outcome.is_insufficient());
    }

    #[test]
    fn test_no_matching_rules_signal() {
        // Cart item never co-occurs with anything in the corpus.
        let outcome = engine(0.25, 0.5)
            .recommend(&spec_orders(), &cart(&["Z"]), 5)
            .unwrap();
        assert_eq!(
            outcome,
            RecommendOutcome::InsufficientData(InsufficientDataReason::NoMatchingRules)
        );
    }

    #[test]
    fn test_recommend_with_report_reuses_rules() {
        let engine = engine(0.25, 0.5);
        let report = engine.train(&spec_orders());

        let first = engine
            .recommend_with_report(&report, &cart(&["A"]), 5)
            .unwrap();
        let second = engine
            .recommend_with_report(&report, &cart(&["C"]), 5)
            .unwrap();
        assert!(first.suggestions().is_some());
        assert!(second.suggestions().is_some());
    }

    #[test]
    fn test_result_respects_limit() {
        let outcome = engine(0.1, 0.1)
            .recommend(
                &orders(&[
                    &["A", "B", "C", "D"],
                    &["A", "B", "C"],
                    &["A", "B", "D"],
                    &["A", "C", "D"],
                ]),
                &cart(&["A"]),
                2,
            )
            .unwrap();
        assert!(outcome.suggestions().expect("suggestions").len() <= 2);
    }

    #[test]
    fn test_admin_statistics_accessors() {
        let report = engine(0.25, 0.5).train(&spec_orders());
        let top = report.top_itemsets(3);
        assert_eq!(top.len(), 3);
        // {B} has the highest support in the spec basket.
        assert_eq!(top[0].itemset.items(), &["B"]);
        assert!(report.top_rules(1)[0].confidence >= report.rules.last().unwrap().confidence);
    }
}
