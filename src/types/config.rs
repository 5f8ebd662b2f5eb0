use crate::error::AssessError;
use crate::types::scoring::{ScoringProfile, ScoringVariant, Weights};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessConfig {
    pub scoring: Option<ScoringConfig>,
    pub input: Option<InputConfig>,
    pub batch: Option<BatchConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub variant: ScoringVariant,
    pub discourse_multiplier: Option<u32>,
    pub weights: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    #[serde(default = "default_strip_html")]
    pub strip_html: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            strip_html: true,
        }
    }
}

fn default_min_chars() -> usize {
    DEFAULT_MIN_CHARS
}

fn default_strip_html() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["txt", "md", "html", "htm"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

impl AssessConfig {
    pub fn variant(&self) -> ScoringVariant {
        self.scoring
            .as_ref()
            .map(|scoring| scoring.variant)
            .unwrap_or_default()
    }

    /// Profile for `variant` (or the configured one), with explicit weight and
    /// multiplier overrides applied. A validated `scoring.weights` table names
    /// all five keys, so it replaces the variant's weights as a whole.
    pub fn profile(&self, variant: Option<ScoringVariant>) -> ScoringProfile {
        let mut profile = ScoringProfile::for_variant(variant.unwrap_or_else(|| self.variant()));
        let Some(scoring) = &self.scoring else {
            return profile;
        };

        if let Some(multiplier) = scoring.discourse_multiplier {
            profile.discourse_multiplier = multiplier;
        }
        if let Some(weights) = &scoring.weights {
            let base = profile.weights;
            let get = |key: &str, fallback: f64| *weights.get(key).unwrap_or(&fallback);
            profile.weights = Weights {
                vocabulary: get("vocabulary", base.vocabulary),
                grammar: get("grammar", base.grammar),
                coherence: get("coherence", base.coherence),
                complexity: get("complexity", base.complexity),
                task_achievement: get("task_achievement", base.task_achievement),
            };
        }
        profile
    }

    pub fn input_settings(&self) -> InputConfig {
        self.input.clone().unwrap_or_default()
    }

    pub fn batch_extensions(&self) -> Vec<String> {
        self.batch.clone().unwrap_or_default().extensions
    }

    pub fn validate(&self) -> Result<(), AssessError> {
        if let Some(scoring) = &self.scoring {
            if let Some(weights) = &scoring.weights {
                let unknown = weights
                    .keys()
                    .filter(|key| !Weights::KEYS.contains(&key.as_str()))
                    .cloned()
                    .collect::<Vec<_>>();
                if !unknown.is_empty() {
                    return Err(AssessError::ConfigParse(format!(
                        "scoring.weights contains unknown key(s): {}",
                        unknown.join(", ")
                    )));
                }

                let missing = Weights::KEYS
                    .iter()
                    .filter(|key| !weights.contains_key(**key))
                    .copied()
                    .collect::<Vec<_>>();
                if !missing.is_empty() {
                    return Err(AssessError::ConfigParse(format!(
                        "scoring.weights is missing key(s): {}",
                        missing.join(", ")
                    )));
                }
            }

            let weights = self.profile(None).weights;
            if weights
                .as_array()
                .iter()
                .any(|weight| !(0.0..=1.0).contains(weight))
            {
                return Err(AssessError::ConfigParse(
                    "scoring.weights values must be between 0.0 and 1.0".to_string(),
                ));
            }
            let weight_sum = weights.sum();
            if (weight_sum - 1.0).abs() > 0.001 {
                return Err(AssessError::ConfigParse(format!(
                    "scoring.weights must sum to 1.0 (found {:.3})",
                    weight_sum
                )));
            }

            if let Some(multiplier) = scoring.discourse_multiplier {
                if !(1..=10).contains(&multiplier) {
                    return Err(AssessError::ConfigParse(
                        "scoring.discourse_multiplier must be between 1 and 10".to_string(),
                    ));
                }
            }
        }

        if let Some(input) = &self.input {
            if input.min_chars == 0 {
                return Err(AssessError::ConfigParse(
                    "input.min_chars must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(batch) = &self.batch {
            validate_extensions(&batch.extensions)?;
        }

        Ok(())
    }
}

fn validate_extensions(extensions: &[String]) -> Result<(), AssessError> {
    if extensions.is_empty() {
        return Err(AssessError::ConfigParse(
            "batch.extensions must list at least one extension".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for ext in extensions {
        let normalized = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(AssessError::ConfigParse(
                "batch.extensions entries must be non-empty".to_string(),
            ));
        }
        if !seen.insert(normalized.clone()) {
            return Err(AssessError::ConfigParse(format!(
                "batch.extensions contains duplicate extension: {normalized}"
            )));
        }
    }
    Ok(())
}
