//! Exported parameter map
//!
//! Accumulates stack exports across every account handled by one policy
//! update. Values are appended as seen; deduplication happens when the map is
//! merged into the shared group stack.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedParameters {
    values: BTreeMap<String, Vec<String>>,
}

impl ExportedParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under an export name
    pub fn record(&mut self, export_name: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(export_name.into())
            .or_default()
            .push(value.into());
    }

    pub fn get(&self, export_name: &str) -> Option<&[String]> {
        self.values.get(export_name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
