use serde::Deserialize;

/// One entry of the build-style report.
///
/// Only `package` is required; a missing flag means the file is not used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageRecord {
    pub package: String,
    #[serde(default)]
    pub pyproject_toml: bool,
    #[serde(default)]
    pub setup_py: bool,
}

/// How a package declares its build: `pyproject.toml`, `setup.py`, both, or neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStyle {
    pub uses_pyproject_toml: bool,
    pub uses_setup_py: bool,
}

impl From<&PackageRecord> for BuildStyle {
    fn from(record: &PackageRecord) -> Self {
        BuildStyle {
            uses_pyproject_toml: record.pyproject_toml,
            uses_setup_py: record.setup_py,
        }
    }
}

impl std::fmt::Display for BuildStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.uses_pyproject_toml, self.uses_setup_py) {
            (true, true) => write!(f, "pyproject.toml + setup.py"),
            (true, false) => write!(f, "pyproject.toml"),
            (false, true) => write!(f, "setup.py"),
            (false, false) => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_default_to_false() {
        let record: PackageRecord = serde_json::from_str(r#"{"package": "six"}"#).unwrap();
        assert_eq!(record.package, "six");
        assert!(!record.pyproject_toml);
        assert!(!record.setup_py);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record: PackageRecord =
            serde_json::from_str(r#"{"package": "attrs", "pyproject_toml": true, "source": "sdist"}"#)
                .unwrap();
        assert!(BuildStyle::from(&record).uses_pyproject_toml);
    }

    #[test]
    fn test_package_is_required() {
        let result: Result<PackageRecord, _> = serde_json::from_str(r#"{"setup_py": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let style = BuildStyle {
            uses_pyproject_toml: false,
            uses_setup_py: true,
        };
        assert_eq!(style.to_string(), "setup.py");
        assert_eq!(BuildStyle::default().to_string(), "none");
    }
}
