//! Module-relative import path
//!
//! The bundler resolves the component import relative to the directory of the
//! entry file, so the path must always start with `./` or `../` and use `/`.

use std::fmt;
use std::path::{Component, Path};

use path_clean::PathClean;

/// Import specifier from an entry directory to a component file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportPath(String);

impl ImportPath {
    /// Compute the import of `source` as seen from a module inside `entry_dir`.
    ///
    /// Both paths are lexically cleaned first. When the paths share no root
    /// (different drives on Windows) the cleaned absolute source is used.
    pub fn between(entry_dir: &Path, source: &Path) -> Self {
        let from = entry_dir.clean();
        let to = source.clean();

        let from_parts: Vec<Component<'_>> = from
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        let to_parts: Vec<Component<'_>> = to
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();

        let common = from_parts
            .iter()
            .zip(to_parts.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let rooted = |parts: &[Component<'_>]| {
            parts
                .first()
                .map(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
                .unwrap_or(false)
        };
        if common == 0 && (rooted(&from_parts) || rooted(&to_parts)) {
            return Self(to_slash(&to));
        }

        let mut segments: Vec<String> = vec!["..".to_string(); from_parts.len() - common];
        segments.extend(
            to_parts[common..]
                .iter()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        );

        let joined = segments.join("/");
        if joined == ".." || joined.starts_with("../") {
            Self(joined)
        } else {
            Self(format!("./{joined}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Single-quoted JavaScript string literal for this path
    pub fn quoted(&self) -> String {
        let escaped = self.0.replace('\\', "\\\\").replace('\'', "\\'");
        format!("'{escaped}'")
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
