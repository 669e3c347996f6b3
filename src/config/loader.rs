//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SkeletonError, SkeletonResult};

use super::types::{ColorMode, Config};

/// Project-level configuration file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "skeleton.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SkeletonResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| SkeletonError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SkeletonError::InvalidConfig {
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

/// Load the first configuration found, then apply environment overrides.
///
/// An explicit path must exist. Otherwise `skeleton.toml` in `project_root`
/// wins over the user config; with neither present, defaults are used.
/// Malformed files are errors rather than silently ignored.
pub fn load_layered(project_root: &Path, explicit: Option<&Path>) -> SkeletonResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(project_root.join(path)),
        None => {
            let project_config = project_root.join(PROJECT_CONFIG_FILE);
            if project_config.is_file() {
                Some(project_config)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig::default(),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// User-level configuration file
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skeleton-cli").join("config.toml"))
}

/// Apply environment variable overrides (SKELETON_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `get_env`
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // SKELETON_COPY_TEMPLATE
    if let Some(val) = get_env("SKELETON_COPY_TEMPLATE") {
        config.entry.copy_template = is_truthy(&val);
    }

    // SKELETON_WORKSPACE
    if let Some(dir) = get_env("SKELETON_WORKSPACE").filter(|d| !d.trim().is_empty()) {
        config.workspace.dir = PathBuf::from(dir);
    }

    // SKELETON_BUNDLER (program followed by whitespace-separated args)
    if let Some(cmd) = get_env("SKELETON_BUNDLER") {
        let mut parts = cmd.split_whitespace().map(str::to_string);
        if let Some(program) = parts.next() {
            config.bundler.program = program;
            config.bundler.args = parts.collect();
        }
    }

    // SKELETON_NODE
    if let Some(node) = get_env("SKELETON_NODE").filter(|n| !n.trim().is_empty()) {
        config.renderer.program = node;
    }

    // SKELETON_NO_COLOR
    if get_env("SKELETON_NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

fn is_truthy(val: &str) -> bool {
    let v = val.trim().to_lowercase();
    !(v.is_empty() || v == "false" || v == "0" || v == "no")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "entry",
        "copy_template",
        "template",
        "workspace",
        "dir",
        "bundler",
        "renderer",
        "program",
        "args",
        "html",
        "output",
        "color",
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
