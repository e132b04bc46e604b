use crate::error::{ReportError, Result};
use crate::types::config::ReportConfig;
use crate::types::thresholds::ThresholdSet;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "sentiment.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".sentiment/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/sentiment-report/config.toml";

/// Loads the layered config: global, then the project file, then the local override.
///
/// `explicit` replaces the project file; it must exist when given.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ReportConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<ReportConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ReportError::ConfigParse(format!(
                "config file not found: {}",
                path.display()
            )));
        }
    }
    let project_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ReportConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ReportError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ReportError::ConfigParse(format!("{}: {}", path.display(), e)))
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

/// Picks the effective thresholds.
///
/// Order: the CLI file, the configured file, inline config values, then the
/// default. A threshold file that does not exist falls through to the next
/// source; one that exists but cannot be parsed is an error.
pub fn resolve_thresholds(cfg: &ReportConfig, cli_file: Option<&Path>) -> Result<ThresholdSet> {
    let section = cfg.thresholds.as_ref();
    let configured_file = section.and_then(|thresholds| thresholds.file.as_deref());

    for path in [cli_file, configured_file].into_iter().flatten() {
        if path.exists() {
            let set = read_threshold_file(path)?;
            tracing::info!(path = %path.display(), thresholds = ?set.cutoffs(), "loaded thresholds");
            return Ok(set);
        }
        tracing::info!(path = %path.display(), "threshold file not found, trying next source");
    }

    if let Some(values) = section.and_then(|thresholds| thresholds.values.as_ref()) {
        return ThresholdSet::from_persisted(values);
    }

    tracing::info!("using default thresholds");
    Ok(ThresholdSet::default())
}

fn read_threshold_file(path: &Path) -> Result<ThresholdSet> {
    let content = std::fs::read_to_string(path)?;
    let values: Vec<f64> = serde_json::from_str(&content)
        .map_err(|e| ReportError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    ThresholdSet::from_persisted(&values)
}
