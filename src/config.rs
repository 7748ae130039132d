use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::models::BuildStyle;

/// Root configuration structure, deserialized from `.pipdeptree-annotate/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Symbols written into each annotation.
    #[serde(default)]
    pub marks: Marks,
}

/// Marks for each build file, rendered as ` [pyproject.toml: ✅] [setup.py: ❌]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Marks {
    pub pyproject_toml: MarkPair,
    pub setup_py: MarkPair,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkPair {
    /// Shown when the package uses the file.
    pub present: String,
    /// Shown when it does not, including when the report omits the flag.
    pub absent: String,
}

impl Default for MarkPair {
    fn default() -> Self {
        MarkPair {
            present: "✅".to_string(),
            absent: "❌".to_string(),
        }
    }
}

impl MarkPair {
    pub fn mark(&self, present: bool) -> &str {
        if present {
            &self.present
        } else {
            &self.absent
        }
    }
}

impl Marks {
    /// The suffix appended to a matched line, with its leading space.
    pub fn annotation(&self, style: &BuildStyle) -> String {
        format!(
            " [pyproject.toml: {}] [setup.py: {}]",
            self.pyproject_toml.mark(style.uses_pyproject_toml),
            self.setup_py.mark(style.uses_setup_py)
        )
    }
}

/// Load the marks configuration, searching in order:
///
/// 1. `config_override`, the path passed via `--config`
/// 2. `./.pipdeptree-annotate/config.toml`
/// 3. `~/.config/pipdeptree-annotate/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = Path::new(".pipdeptree-annotate").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("pipdeptree-annotate")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using default marks");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn style(uses_pyproject_toml: bool, uses_setup_py: bool) -> BuildStyle {
        BuildStyle {
            uses_pyproject_toml,
            uses_setup_py,
        }
    }

    #[test]
    fn test_default_annotation() {
        let marks = Marks::default();
        assert_eq!(
            marks.annotation(&style(true, false)),
            " [pyproject.toml: ✅] [setup.py: ❌]"
        );
        assert_eq!(
            marks.annotation(&style(false, false)),
            " [pyproject.toml: ❌] [setup.py: ❌]"
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[marks.setup_py]").unwrap();
        writeln!(f, "present = \"yes\"").unwrap();

        let config = load_config(Some(f.path())).unwrap();
        assert_eq!(config.marks.pyproject_toml, MarkPair::default());
        assert_eq!(config.marks.setup_py.present, "yes");
        assert_eq!(config.marks.setup_py.absent, "❌");
        assert_eq!(
            config.marks.annotation(&style(true, true)),
            " [pyproject.toml: ✅] [setup.py: yes]"
        );
    }

    #[test]
    fn test_empty_config_file() {
        let f = NamedTempFile::new().unwrap();
        let config = load_config(Some(f.path())).unwrap();
        assert_eq!(config.marks, Marks::default());
    }

    #[test]
    fn test_override_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[marks").unwrap();
        let err = load_config(Some(f.path())).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
