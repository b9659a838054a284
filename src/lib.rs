//! # basket-algo - association-rule recommendation core
//!
//! Pure Rust implementation of the shop backend's recommendation engine:
//!
//! - **Frequent Itemset Mining** - level-wise Apriori over order history
//! - **Rule Generation** - antecedent => consequent rules scored with
//!   support, confidence, and lift
//! - **Cart Recommendation** - ranked suggestions for a shopping cart,
//!   with a distinguishable insufficient-data signal for fallback logic
//!
//! The crate is synchronous, CPU-bound, and stateless per call: every
//! invocation recomputes itemsets and rules from the transactions it is
//! given, so runs are idempotent and safe to execute concurrently. Fetching
//! order history and item metadata are the callers' concern.
//!
//! ## Module structure
//!
//! - [`mining`] - frequent itemset miner (Apriori)
//! - [`rules`] - association rule generator
//! - [`recommend`] - cart recommender
//! - [`engine`] - facade for the training/reporting and recommendation callers
//! - [`sanitize`] - input normalization and threshold validation
//! - [`types`] - public types and constants
//! - [`error`] - fallible conditions
//!
//! ## Usage example
//!
//! ```rust
//! use basket_algo::{EngineConfig, RecommendationEngine};
//!
//! let engine = RecommendationEngine::new(EngineConfig::default()).unwrap();
//!
//! let orders: Vec<Vec<String>> = vec![
//!     vec!["espresso".into(), "grinder".into()],
//!     vec!["espresso".into(), "grinder".into()],
//!     vec!["espresso".into(), "kettle".into()],
//!     vec!["grinder".into(), "kettle".into()],
//! ];
//!
//! let outcome = engine.recommend(&orders, &["espresso".to_string()], 5).unwrap();
//! if let Some(suggestions) = outcome.suggestions() {
//!     for suggestion in suggestions {
//!         println!("{} (score {:.2})", suggestion.item_id, suggestion.score);
//!     }
//! }
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod engine;
pub mod error;
pub mod mining;
pub mod recommend;
pub mod rules;
pub mod sanitize;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export all public types
pub use types::*;

/// Re-export the engine facade
pub use engine::RecommendationEngine;

/// Re-export the mining stage
pub use mining::FrequentItemsetMiner;

/// Re-export the rule-generation stage
pub use rules::RuleGenerator;

/// Re-export error types
pub use error::{EngineError, Result};
