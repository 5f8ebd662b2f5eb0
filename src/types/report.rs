use crate::types::level::CefrLevel;
use crate::types::scoring::{Score, SubScores};
use serde::Serialize;

/// A detected English grammar mistake. Data, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarError {
    pub id: String,
    pub level: CefrLevel,
    pub severity: u8,
    pub description: String,
    /// First span of the text that triggered the rule.
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub score: Score,
    pub cefr_level: CefrLevel,
    pub details: SubScores,
    pub grammar_errors: Vec<GrammarError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<f64>,
    pub overview: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AssessmentResult {
    pub fn has_grammar_errors(&self) -> bool {
        !self.grammar_errors.is_empty()
    }
}
