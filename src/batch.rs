use crate::assess::assess_text;
use crate::error::{AssessError, Result};
use crate::input;
use crate::types::config::AssessConfig;
use crate::types::level::CefrLevel;
use crate::types::report::AssessmentResult;
use crate::types::scoring::ScoringProfile;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub path: String,
    pub sha256: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_of: Option<String>,
    pub result: AssessmentResult,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub generated_at: String,
    pub variant: String,
    pub entries: Vec<BatchEntry>,
    pub skipped: Vec<SkippedFile>,
    pub level_counts: BTreeMap<CefrLevel, usize>,
}

impl BatchReport {
    pub fn duplicate_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.duplicate_of.is_some())
            .count()
    }
}

/// Scores every submission under `root` whose extension is configured.
/// Files that fail preparation are reported as skipped.
pub fn assess_directory(
    root: &Path,
    profile: &ScoringProfile,
    config: &AssessConfig,
) -> Result<BatchReport> {
    if !root.is_dir() {
        return Err(AssessError::InputNotFound(root.display().to_string()));
    }
    let extensions: Vec<String> = config
        .batch_extensions()
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .collect();
    let settings = config.input_settings();

    let mut files = submission_files(root, &extensions);
    files.sort();
    info!(root = %root.display(), files = files.len(), "assessing submissions");

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    let mut first_seen: HashMap<String, String> = HashMap::new();
    for path in files {
        let rel_path = relative_display(root, &path);
        let prepared = input::read_source(&path).and_then(|raw| input::prepare(&raw, &settings));
        let text = match prepared {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %rel_path, error = %err, "skipping submission");
                skipped.push(SkippedFile {
                    path: rel_path,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let digest = sha256_hex(text.as_bytes());
        let duplicate_of = match first_seen.get(&digest) {
            Some(original) => Some(original.clone()),
            None => {
                first_seen.insert(digest.clone(), rel_path.clone());
                None
            }
        };

        entries.push(BatchEntry {
            path: rel_path,
            sha256: digest,
            duplicate_of,
            result: assess_text(&text, profile),
        });
    }

    let mut level_counts = BTreeMap::new();
    for entry in &entries {
        *level_counts.entry(entry.result.cefr_level).or_insert(0) += 1;
    }

    Ok(BatchReport {
        generated_at: Utc::now().to_rfc3339(),
        variant: profile.variant.as_str().to_string(),
        entries,
        skipped,
        level_counts,
    })
}

fn submission_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| extensions.contains(&ext.to_ascii_lowercase()))
                .unwrap_or(false)
        })
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
