//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SlnError, SlnResult};

use super::types::{Config, Verbosity};

/// File name of the per-directory config
pub const PROJECT_CONFIG_FILE: &str = ".slnmerge.toml";

/// Overrides the user config directory (`<config_dir>/slnmerge`)
pub const CONFIG_HOME_VAR: &str = "SLNMERGE_CONFIG_HOME";

pub const VERBOSITY_VAR: &str = "SLNMERGE_VERBOSITY";
pub const PRUNE_COPIED_VAR: &str = "SLNMERGE_PRUNE_COPIED";
pub const WARNINGS_FILE_VAR: &str = "SLNMERGE_WARNINGS_FILE";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SlnResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SlnError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run started in `cwd`.
///
/// The first file found wins, in this order: `explicit` (must exist),
/// `<cwd>/.slnmerge.toml`, `<config_dir>/slnmerge/config.toml`. Without any
/// file the defaults are used. Environment overrides are applied last; CLI
/// flags are layered on top by the caller.
pub fn load_layered(explicit: Option<&Path>, cwd: &Path) -> SlnResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [
            Some(cwd.join(PROJECT_CONFIG_FILE)),
            user_config_path(),
        ]
        .into_iter()
        .flatten()
        .find(|p| p.is_file()),
    };

    let (config, warnings) = match candidate {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// `<config_dir>/slnmerge/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_HOME_VAR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("slnmerge")))
        .map(|d| d.join("config.toml"))
}

/// Apply environment variable overrides (SLNMERGE_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(verbosity) = std::env::var(VERBOSITY_VAR) {
        if let Some(v) = Verbosity::parse(&verbosity) {
            config.output.verbosity = v;
        }
    }

    if let Ok(val) = std::env::var(PRUNE_COPIED_VAR) {
        config.consolidate.prune_copied_solutions = is_truthy(&val);
    }

    if let Ok(path) = std::env::var(WARNINGS_FILE_VAR) {
        config.report.warnings_file = (!path.is_empty()).then(|| PathBuf::from(path));
    }

    config
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "verbosity",
        "color",
        "consolidate",
        "prune_copied_solutions",
        "report",
        "warnings_file",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
