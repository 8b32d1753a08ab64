//! One sentence taken through normalization and checking

use crate::processing::checker::Verdict;
use crate::processing::normalizer::normalize;
use crate::processing::sentence::{CanonicalForm, Sentence};
use log::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub sentence: Sentence,
    pub canonical: CanonicalForm,
    pub verdict: Verdict,
}

impl Evaluation {
    pub fn evaluate(sentence: Sentence) -> Self {
        let canonical = normalize(&sentence);
        debug!(
            "Canonical form {:?} ({} of {} bytes kept)",
            canonical.as_str(),
            canonical.len(),
            sentence.len()
        );

        let verdict = canonical.verdict();
        info!("Verdict: {}", verdict);

        Self {
            sentence,
            canonical,
            verdict,
        }
    }
}
