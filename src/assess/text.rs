use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();

fn sentence_break() -> &'static Regex {
    SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence pattern should compile"))
}

fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK
        .get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph pattern should compile"))
}

/// Token-level counts shared by every scoring step.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    pub words: Vec<String>,
    pub unique_words: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        let words: Vec<String> = lower.split_whitespace().map(str::to_string).collect();
        let unique_words = words.iter().map(String::as_str).collect::<HashSet<_>>().len();
        let sentence_count = sentence_break()
            .split(&lower)
            .filter(|sentence| !sentence.trim().is_empty())
            .count();
        let paragraph_count = paragraph_break()
            .split(&lower)
            .filter(|paragraph| !paragraph.trim().is_empty())
            .count();

        Self {
            words,
            unique_words,
            sentence_count,
            paragraph_count,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn lexical_diversity(&self) -> f64 {
        ratio(self.unique_words, self.word_count())
    }

    pub fn avg_words_per_sentence(&self) -> f64 {
        ratio(self.word_count(), self.sentence_count)
    }

    /// Share of words (surrounding punctuation ignored) found in `is_basic`.
    pub fn basic_word_fraction(&self, is_basic: impl Fn(&str) -> bool) -> f64 {
        let basic = self
            .words
            .iter()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| is_basic(*word))
            .count();
        ratio(basic, self.word_count())
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
