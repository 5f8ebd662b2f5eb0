use super::patterns::{grammar_rules, CompiledRule};
use crate::types::report::GrammarError;
use crate::types::scoring::Score;
use regex::Match;

const MIN_SCORE: Score = 20;
const MAX_PENALTY: Score = 65;
const PENALTY_PER_SEVERITY: Score = 6;

/// Runs the rule table in order. A rule reports at most once however many
/// times it matches.
pub fn detect_grammar_errors(text: &str) -> Vec<GrammarError> {
    grammar_rules()
        .iter()
        .filter_map(|compiled| {
            first_reportable(compiled, text).map(|found| GrammarError {
                id: compiled.rule.id.to_string(),
                level: compiled.rule.level,
                severity: compiled.rule.severity,
                description: compiled.rule.description.to_string(),
                excerpt: found.as_str().to_string(),
            })
        })
        .collect()
}

fn first_reportable<'t>(compiled: &CompiledRule, text: &'t str) -> Option<Match<'t>> {
    let Some(exception) = &compiled.exception else {
        return compiled.regex.find(text);
    };
    compiled.regex.find_iter(text).find(|found| {
        let before = text[..found.start()].trim_end();
        let word_start = before.trim_end_matches(|c: char| !c.is_whitespace()).len();
        !exception.is_match(&text[word_start..found.end()])
    })
}

fn baseline(word_count: usize) -> Score {
    if word_count <= 100 {
        75
    } else if word_count <= 200 {
        80
    } else {
        85
    }
}

pub fn grammar_score(word_count: usize, errors: &[GrammarError]) -> Score {
    let severity: Score = errors.iter().map(|error| Score::from(error.severity)).sum();
    let penalty = (severity * PENALTY_PER_SEVERITY).min(MAX_PENALTY);
    baseline(word_count).saturating_sub(penalty).max(MIN_SCORE)
}
