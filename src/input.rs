//! Everything the scorer expects its caller to do: read the submission,
//! strip markup and enforce the minimum length.

use crate::error::{AssessError, Result};
use crate::types::config::InputConfig;
use regex::Regex;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

pub const STDIN_MARKER: &str = "-";

static BLOCK_END: OnceLock<Regex> = OnceLock::new();
static TAG: OnceLock<Regex> = OnceLock::new();

fn block_end() -> &'static Regex {
    BLOCK_END.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>|</(p|div|li|h[1-6])\s*>")
            .expect("block pattern should compile")
    })
}

fn tag() -> &'static Regex {
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern should compile"))
}

/// Reads a file, or stdin when `source` is `-`.
pub fn read_source(source: &Path) -> Result<String> {
    if source == Path::new(STDIN_MARKER) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !source.exists() {
        return Err(AssessError::InputNotFound(source.display().to_string()));
    }
    Ok(std::fs::read_to_string(source)?)
}

/// Drops markup from rich-text submissions. Closing block elements become
/// blank lines so paragraph boundaries survive.
pub fn strip_html(raw: &str) -> String {
    let with_breaks = block_end().replace_all(raw, "\n\n");
    let without_tags = tag().replace_all(&with_breaks, "");
    without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Turns a raw submission into scorer input, rejecting texts shorter than
/// `settings.min_chars` characters.
pub fn prepare(raw: &str, settings: &InputConfig) -> Result<String> {
    let text = if settings.strip_html {
        strip_html(raw)
    } else {
        raw.to_string()
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AssessError::EmptyInput(
            "no text left after preparation".to_string(),
        ));
    }
    let found = trimmed.chars().count();
    if found < settings.min_chars {
        return Err(AssessError::TextTooShort {
            min: settings.min_chars,
            found,
        });
    }
    Ok(trimmed.to_string())
}
