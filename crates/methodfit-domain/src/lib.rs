//! Methodfit Domain Layer
//!
//! This crate contains the core domain model for methodfit. It has ZERO
//! external dependencies and defines the closed enumerations, value objects,
//! and static data that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Method**: A catalog entry for one contraceptive method, classified by
//!   its hormone profile
//! - **Catalog**: The fixed, ordered, embedded table of all methods
//! - **Question**: One entry in the fixed interrogation sequence
//! - **Answers**: An incrementally built snapshot of the user's responses,
//!   tolerant of missing keys
//!
//! ## Architecture
//!
//! Identifiers are closed enumerations, so an id outside the known set is
//! unrepresentable rather than a runtime lookup failure. All tables are
//! `'static` and shareable by reference across any number of concurrent
//! evaluations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answers;
pub mod catalog;
pub mod method;
pub mod question;

// Re-exports for convenience
pub use answers::{AnswerValue, Answers, YesNo};
pub use catalog::{Catalog, Method};
pub use method::{HormoneProfile, MethodId};
pub use question::{questionnaire, Question, QuestionId, QuestionKind};
