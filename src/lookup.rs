use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::models::{BuildStyle, PackageRecord};

/// Build styles keyed by lower-cased package name.
///
/// Built once from the report and only read afterwards.
#[derive(Debug, Default)]
pub struct LookupTable {
    packages: HashMap<String, BuildStyle>,
}

impl LookupTable {
    /// Later records overwrite earlier ones with the same lower-cased name.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PackageRecord>,
    {
        let mut packages = HashMap::new();
        for record in records {
            let key = record.package.to_lowercase();
            let style = BuildStyle::from(&record);
            if let Some(previous) = packages.insert(key, style) {
                debug!(
                    package = %record.package,
                    previous = %previous,
                    current = %style,
                    "duplicate package in report, keeping the later entry"
                );
            }
        }
        LookupTable { packages }
    }

    pub fn get(&self, name: &str) -> Option<&BuildStyle> {
        self.packages.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Read and parse the JSON report at `path`.
///
/// Fails if the file cannot be read, is not a JSON array, or any entry lacks `package`.
pub fn load_report(path: &Path) -> Result<LookupTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read report {}", path.display()))?;
    let records: Vec<PackageRecord> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse report {}", path.display()))?;

    let record_count = records.len();
    let table = LookupTable::from_records(records);
    info!(
        path = %path.display(),
        records = record_count,
        packages = table.len(),
        "loaded build-style report"
    );

    Ok(table)
}
