use crate::error::{AssessError, Result};
use crate::types::config::AssessConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "proficiency.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".proficiency/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/proficiency/config.toml";

/// Loads and validates the layered configuration rooted at `root`. An
/// explicit path replaces the project file and must exist.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<AssessConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let loaded = load_config_with_global(root, explicit, global.as_deref())?;
    if let Some(cfg) = &loaded {
        cfg.validate()?;
    }
    Ok(loaded)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<AssessConfig>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AssessError::InputNotFound(path.display().to_string()));
        }
    }

    let layers = [
        global_path.map(Path::to_path_buf),
        Some(
            explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE)),
        ),
        Some(root.join(DEFAULT_LOCAL_FILE)),
    ];

    let mut merged = Value::Table(Map::new());
    let mut found_any = false;
    for path in layers.iter().flatten() {
        found_any |= merge_file_if_exists(&mut merged, path)?;
    }
    if !found_any {
        return Ok(None);
    }

    let cfg: AssessConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AssessError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AssessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
