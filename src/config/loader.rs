//! Settings discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NuaError, NuaResult};

use super::types::Settings;

/// Default settings file, looked up in the current directory
pub const SETTINGS_FILE_NAME: &str = "nua-deploy.toml";
/// Environment variable naming the settings file
pub const ENV_SETTINGS_PATH: &str = "NUA_DEPLOY_CONFIG";
/// Environment variable overriding `toolchain.nua_env`
pub const ENV_NUA_ENV: &str = "NUA_ENV";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NuaResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NuaError::InvalidSettings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    settings
        .toolchain
        .validate()
        .map_err(|message| NuaError::InvalidSettings {
            path: path.to_path_buf(),
            message,
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

    Ok((settings, warnings))
}

/// Which settings file to read, if any.
///
/// Priority: explicit `--config` path, then `NUA_DEPLOY_CONFIG`, then
/// `nua-deploy.toml` in `cwd` when it exists. An explicit or environment
/// path is returned even when missing, so that loading it reports the error.
pub fn discover(
    explicit: Option<&Path>,
    cwd: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = get_env(ENV_SETTINGS_PATH).filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    let default = cwd.join(SETTINGS_FILE_NAME);
    default.is_file().then_some(default)
}

/// Discover and load settings; defaults when no file is found
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> NuaResult<(Settings, Vec<ConfigWarning>)> {
    let (settings, warnings) = match discover(explicit, cwd, &get_env) {
        Some(path) => {
            debug!(path = %path.display(), "loading settings");
            load_with_warnings(&path)?
        }
        None => {
            debug!("no settings file, using defaults");
            (Settings::default(), Vec::new())
        }
    };
    Ok((with_env_overrides(settings, get_env), warnings))
}

/// Apply environment variable overrides (`NUA_ENV`)
pub fn with_env_overrides(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    if let Some(nua_env) = get_env(ENV_NUA_ENV).filter(|v| !v.trim().is_empty()) {
        debug!(nua_env = %nua_env, "NUA_ENV overrides toolchain.nua_env");
        settings.toolchain.nua_env = PathBuf::from(nua_env);
    }
    settings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "target",
        "host",
        "domain",
        "apps_root",
        "toolchain",
        "nua_env",
        "remote_apps_dir",
        "document_path",
        "ssh_user",
        "upload_user",
        "catalog",
        "unknown_apps",
        "apps",
        "hostname",
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
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
