//! Input Hygiene
//!
//! Normalization and validation applied before any mining runs.
//!
//! Functions:
//! - Threshold validation (fail fast, never clamp)
//! - Order-history normalization into canonical transactions
//! - Cart normalization

use crate::error::{EngineError, Result};
use crate::types::{ItemId, Itemset, Transaction};

/// True when `value` is a finite fraction in (0, 1].
pub fn is_valid_fraction(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= 1.0
}

/// Validate a threshold parameter, rejecting anything outside (0, 1].
pub fn check_threshold(param: &'static str, value: f64) -> Result<()> {
    if is_valid_fraction(value) {
        Ok(())
    } else {
        Err(EngineError::InvalidThreshold { param, value })
    }
}

/// Reduce raw order histories to canonical transactions.
///
/// Duplicate items within one order collapse to a single occurrence and
/// orders that end up empty are dropped, so the transaction count used as
/// the support denominator only counts orders that can contribute.
pub fn normalize_transactions(orders: &[Vec<ItemId>]) -> Vec<Transaction> {
    orders
        .iter()
        .map(|order| Itemset::new(order.clone()))
        .filter(|transaction| !transaction.is_empty())
        .collect()
}

/// Canonicalize the items already in the cart.
pub fn normalize_cart(items: &[ItemId]) -> Itemset {
    Itemset::new(items.to_vec())
}
