use crate::types::level::CefrLevel;
use serde::{Deserialize, Serialize};

pub type Score = u32;

/// The five component scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub vocabulary: Score,
    pub grammar: Score,
    pub coherence: Score,
    pub complexity: Score,
    pub task_achievement: Score,
}

impl SubScores {
    pub fn new(
        vocabulary: Score,
        grammar: Score,
        coherence: Score,
        complexity: Score,
        task_achievement: Score,
    ) -> Self {
        Self {
            vocabulary: vocabulary.min(100),
            grammar: grammar.min(100),
            coherence: coherence.min(100),
            complexity: complexity.min(100),
            task_achievement: task_achievement.min(100),
        }
    }

    /// Weighted overall score, rounded and clamped into `[0, 100]`.
    pub fn overall(&self, weights: &Weights) -> Score {
        let raw = f64::from(self.vocabulary) * weights.vocabulary
            + f64::from(self.grammar) * weights.grammar
            + f64::from(self.coherence) * weights.coherence
            + f64::from(self.complexity) * weights.complexity
            + f64::from(self.task_achievement) * weights.task_achievement;
        raw.round().clamp(0.0, 100.0) as Score
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub vocabulary: f64,
    pub grammar: f64,
    pub coherence: f64,
    pub complexity: f64,
    pub task_achievement: f64,
}

impl Weights {
    pub const KEYS: [&'static str; 5] = [
        "vocabulary",
        "grammar",
        "coherence",
        "complexity",
        "task_achievement",
    ];

    pub fn as_array(&self) -> [f64; 5] {
        [
            self.vocabulary,
            self.grammar,
            self.coherence,
            self.complexity,
            self.task_achievement,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoringVariant {
    /// Re-tuned weighting with short-text downgrade corrections.
    #[default]
    Calibrated,
    /// First-generation weighting: no corrections, no confidence.
    Legacy,
}

impl ScoringVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calibrated => "calibrated",
            Self::Legacy => "legacy",
        }
    }
}

/// Minimum overall score for each level above A1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub a2: Score,
    pub b1: Score,
    pub b2: Score,
    pub c1: Score,
    pub c2: Score,
}

impl Thresholds {
    pub fn level_for(&self, score: Score) -> CefrLevel {
        if score >= self.c2 {
            CefrLevel::C2
        } else if score >= self.c1 {
            CefrLevel::C1
        } else if score >= self.b2 {
            CefrLevel::B2
        } else if score >= self.b1 {
            CefrLevel::B1
        } else if score >= self.a2 {
            CefrLevel::A2
        } else {
            CefrLevel::A1
        }
    }

    /// Lower bound of `level`; A1 starts at zero.
    pub fn lower_bound(&self, level: CefrLevel) -> Score {
        match level {
            CefrLevel::A1 => 0,
            CefrLevel::A2 => self.a2,
            CefrLevel::B1 => self.b1,
            CefrLevel::B2 => self.b2,
            CefrLevel::C1 => self.c1,
            CefrLevel::C2 => self.c2,
        }
    }
}

/// Every constant that differs between the two scoring variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringProfile {
    pub variant: ScoringVariant,
    pub weights: Weights,
    pub thresholds: Thresholds,
    pub discourse_multiplier: u32,
    pub task_floor: Score,
    pub short_text_corrections: bool,
    pub report_confidence: bool,
}

impl ScoringProfile {
    pub fn calibrated() -> Self {
        Self {
            variant: ScoringVariant::Calibrated,
            weights: Weights {
                vocabulary: 0.15,
                grammar: 0.25,
                coherence: 0.25,
                complexity: 0.15,
                task_achievement: 0.20,
            },
            thresholds: Thresholds {
                a2: 55,
                b1: 65,
                b2: 74,
                c1: 82,
                c2: 90,
            },
            discourse_multiplier: 3,
            task_floor: 20,
            short_text_corrections: true,
            report_confidence: true,
        }
    }

    pub fn legacy() -> Self {
        Self {
            variant: ScoringVariant::Legacy,
            weights: Weights {
                vocabulary: 0.25,
                grammar: 0.20,
                coherence: 0.20,
                complexity: 0.25,
                task_achievement: 0.10,
            },
            thresholds: Thresholds {
                a2: 40,
                b1: 60,
                b2: 70,
                c1: 80,
                c2: 90,
            },
            discourse_multiplier: 2,
            task_floor: 0,
            short_text_corrections: false,
            report_confidence: false,
        }
    }

    pub fn for_variant(variant: ScoringVariant) -> Self {
        match variant {
            ScoringVariant::Calibrated => Self::calibrated(),
            ScoringVariant::Legacy => Self::legacy(),
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::calibrated()
    }
}
