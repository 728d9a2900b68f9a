//! Merge exported values into comma-joined stack parameters

use std::collections::HashSet;

use crate::domain::value_objects::{ExportedParameters, StackParameter};

/// Drop repeated values, keeping the first occurrence of each
pub fn dedup_preserving_order<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        let value = value.into();
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// Merge new values into a comma-joined parameter value.
///
/// Empty segments of the current value are ignored.
pub fn merge_values(current: &str, incoming: &[String]) -> String {
    let existing = current.split(',').filter(|s| !s.is_empty());
    let merged = dedup_preserving_order(existing.chain(incoming.iter().map(String::as_str)));
    merged.join(",")
}

/// Outcome of merging an export map into a stack's parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedParameters {
    /// Full parameter list to submit, in the stack's order
    pub parameters: Vec<StackParameter>,
    /// Keys that matched an export
    pub merged_keys: Vec<String>,
}

/// Merge exports into the parameters whose key matches an export name.
///
/// Parameters with no matching export keep their current value.
pub fn merge_parameters(current: &[StackParameter], exports: &ExportedParameters) -> MergedParameters {
    let mut merged = MergedParameters::default();
    for param in current {
        match exports.get(&param.key) {
            Some(values) => {
                merged
                    .parameters
                    .push(StackParameter::new(&param.key, merge_values(&param.value, values)));
                merged.merged_keys.push(param.key.clone());
            }
            None => merged.parameters.push(param.clone()),
        }
    }
    merged
}
