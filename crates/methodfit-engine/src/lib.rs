//! Methodfit Eligibility Engine
//!
//! Maps an answer snapshot to a recommendation over the fixed method
//! catalog. The engine is a pure function: no I/O, no shared mutable state,
//! deterministic for any input, and total. Every snapshot, including an
//! empty one, produces a result.
//!
//! The engine runs a fixed, ordered pipeline of exclusion and override
//! stages over the catalog. Which medical red flags feed the estrogen
//! contraindication, and which questions trigger the broader exclusions, is
//! carried by a [`RuleSet`] rather than hard-coded in the pipeline.
//!
//! # Examples
//!
//! ```
//! use methodfit_engine::Recommender;
//! use methodfit_domain::Answers;
//!
//! let recommender = Recommender::canonical();
//! let recommendation = recommender.recommend(&Answers::new());
//!
//! // Nothing answered means nothing excluded.
//! assert!(!recommendation.estrogen_contraindicated);
//! assert_eq!(recommendation.recommended.len(), 7);
//! ```

#![warn(missing_docs)]

mod recommender;
mod rules;
mod shaping;

pub use recommender::{Recommendation, Recommender};
pub use rules::{RedFlag, RuleSet};
pub use shaping::display_order;
