//! Prompt and verdict rendering

use crate::config::{Config, OutputConfig, PromptConfig};
use crate::error::Result;
use crate::processing::{Evaluation, Verdict};
use colored::{Color, Colorize};
use std::io::Write;

/// Writes the prompt and the result lines for one evaluation
pub struct ReportWriter {
    prompt: PromptConfig,
    output: OutputConfig,
}

impl ReportWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            prompt: config.prompt.clone(),
            output: config.output.clone(),
        }
    }

    /// Write the prompt and flush so it is visible before input is read.
    pub fn write_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.prompt.text.as_bytes())?;
        if self.prompt.newline {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn write_evaluation<W: Write>(&self, out: &mut W, evaluation: &Evaluation) -> Result<()> {
        if self.output.show_canonical {
            writeln!(out, "Canonical form: \"{}\"", evaluation.canonical)?;
        }
        writeln!(out, "{}", self.format_verdict(evaluation.verdict))?;
        out.flush()?;
        Ok(())
    }

    fn format_verdict(&self, verdict: Verdict) -> String {
        if !self.output.color_output {
            return verdict.message().to_string();
        }

        let color = match verdict {
            Verdict::Palindrome => Color::Green,
            Verdict::NotPalindrome => Color::Red,
        };
        verdict.message().color(color).bold().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::Sentence;

    fn render(config: &Config, text: &str) -> String {
        let writer = ReportWriter::new(config);
        let mut out = Vec::new();
        writer.write_prompt(&mut out).unwrap();
        writer
            .write_evaluation(&mut out, &Evaluation::evaluate(Sentence::from(text)))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_report() {
        let config = Config::default();
        assert_eq!(
            render(&config, "Hello World"),
            "Enter a sentence: The sentence is not a palindrome.\n"
        );
        assert_eq!(
            render(&config, "racecar"),
            "Enter a sentence: The sentence is a palindrome.\n"
        );
    }

    #[test]
    fn test_prompt_on_its_own_line() {
        let mut config = Config::default();
        config.prompt.newline = true;
        assert_eq!(
            render(&config, "noon"),
            "Enter a sentence: \nThe sentence is a palindrome.\n"
        );
    }

    #[test]
    fn test_show_canonical() {
        let mut config = Config::default();
        config.prompt.text = String::new();
        config.output.show_canonical = true;
        assert_eq!(
            render(&config, "Hello, World!"),
            "Canonical form: \"helloworld\"\nThe sentence is not a palindrome.\n"
        );
    }

    #[test]
    fn test_colored_verdict_keeps_message() {
        let mut config = Config::default();
        config.output.color_output = true;
        let rendered = render(&config, "Step on no pets");
        assert!(rendered.contains("The sentence is a palindrome."));
    }
}
