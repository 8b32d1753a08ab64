//! Palindrome checker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{PalindromeError, Result};
pub use processing::{CanonicalForm, Evaluation, Sentence, Verdict};

use input::reader::read_sentence;
use output::report::ReportWriter;
use std::io::{BufRead, Write};

/// Prompt on `output`, read one line from `input`, and report whether it is a palindrome.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<Evaluation> {
    let report = ReportWriter::new(config);

    report.write_prompt(output)?;
    let sentence = read_sentence(input)?;
    let evaluation = Evaluation::evaluate(sentence);
    report.write_evaluation(output, &evaluation)?;

    Ok(evaluation)
}
