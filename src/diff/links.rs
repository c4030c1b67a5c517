use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Direction of the link-set comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkDiffMode {
    /// Only report links present on the first site and missing from the second
    #[default]
    OneWay,

    /// Report missing links in both directions
    Symmetric,
}

/// Links present in one site's link set and absent from the other's
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSetDiff {
    /// URLs present in the first set and absent from the second
    pub missing_from_second: Vec<String>,

    /// URLs present in the second set and absent from the first; only
    /// populated in symmetric mode
    pub missing_from_first: Option<Vec<String>>,
}

/// URLs present in `first` and absent from `second`, preserving first-seen
/// order. URLs are compared as opaque, already-normalized strings.
pub fn missing_from(first: &[String], second: &[String]) -> Vec<String> {
    let present: HashSet<&str> = second.iter().map(String::as_str).collect();
    first
        .iter()
        .filter(|url| !present.contains(url.as_str()))
        .cloned()
        .collect()
}

/// Compares the two link sets in the requested mode
pub fn diff_link_sets(first: &[String], second: &[String], mode: LinkDiffMode) -> LinkSetDiff {
    LinkSetDiff {
        missing_from_second: missing_from(first, second),
        missing_from_first: match mode {
            LinkDiffMode::OneWay => None,
            LinkDiffMode::Symmetric => Some(missing_from(second, first)),
        },
    }
}
