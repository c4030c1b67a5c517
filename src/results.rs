use serde::{Deserialize, Serialize};

use crate::diff::links::LinkSetDiff;
use crate::diff::visual::BoundingBox;

/// Per-site facts gathered during a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteReport {
    /// URL of the site
    pub url: String,

    /// Seconds from navigation start to load-event-end
    pub page_load_secs: f64,

    /// Unique absolute link URLs in first-seen order
    pub links: Vec<String>,

    /// Links whose HEAD check did not answer 200
    pub broken_links: Vec<String>,
}

/// Summary of the content comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ContentSummary {
    /// The rendered documents were byte-identical; no report written
    Identical,

    /// The documents differ; a side-by-side report was written
    Different { report_file: String },
}

/// Summary of the visual comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum VisualSummary {
    /// Every pixel matched; no difference image written
    Identical,

    /// The screenshots could not be compared pixel-by-pixel
    DimensionMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },

    /// Pixels differ; the difference image was written
    Different {
        bounding_box: BoundingBox,
        diff_file: String,
    },
}

/// Everything a comparison run produced, in summary form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// First website's capture summary
    pub first: SiteReport,

    /// Second website's capture summary
    pub second: SiteReport,

    /// Content diff outcome
    pub content: ContentSummary,

    /// Visual diff outcome
    pub visual: VisualSummary,

    /// Link-set diff outcome
    pub links: LinkSetDiff,
}
