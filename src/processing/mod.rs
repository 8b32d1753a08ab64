//! Sentence normalization and palindrome checking

pub mod sentence;
pub mod normalizer;
pub mod checker;
pub mod evaluation;

pub use checker::Verdict;
pub use evaluation::Evaluation;
pub use sentence::{CanonicalForm, Sentence};
