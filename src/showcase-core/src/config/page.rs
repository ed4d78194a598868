use crate::card::MetricStyle;
use crate::workflow::StickyNoteRule;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_WORKFLOW_NAME: &str = "Untitled Workflow";

/// One showcase page: which descriptor it loads and how its card reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub slug: String,
    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    /// Path to the workflow descriptor, relative to the showcase root.
    pub descriptor: PathBuf,

    /// Name used when the descriptor has none, or could not be loaded.
    #[serde(default = "default_workflow_name")]
    pub default_name: String,

    /// Fixed marketing copy shown above the setup notes.
    #[serde(default)]
    pub overview: Option<String>,

    #[serde(default)]
    pub image: Option<PathBuf>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub sticky_note: StickyNoteRule,

    #[serde(default = "MetricStyle::identifier")]
    pub id_metric: MetricStyle,

    #[serde(default = "MetricStyle::version")]
    pub version_metric: MetricStyle,
}

fn default_workflow_name() -> String {
    DEFAULT_WORKFLOW_NAME.to_string()
}
