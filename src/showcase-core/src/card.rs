//! The marketing card shown for one page: title, copy, features, statistics
//! and the download it offers.

use crate::config::{PageConfig, Showcase};
use crate::error::card::RenderCardError;
use crate::workflow::export::{export_file_name, WORKFLOW_MIME_TYPE};
use crate::workflow::{extract_description, WorkflowDescriptor};
use handlebars::Handlebars;
use serde::{Deserialize, Serialize};

/// How an identifier is shortened for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricStyle {
    /// Maximum number of characters kept.
    pub width: usize,
    /// Append `...` after the kept characters, whether or not anything was cut.
    #[serde(default)]
    pub ellipsis: bool,
}

impl MetricStyle {
    pub const fn identifier() -> Self {
        Self {
            width: 20,
            ellipsis: true,
        }
    }

    pub const fn version() -> Self {
        Self {
            width: 20,
            ellipsis: false,
        }
    }

    pub fn apply(&self, value: &str) -> String {
        let mut shown: String = value.chars().take(self.width).collect();
        if self.ellipsis {
            shown.push_str("...");
        }
        shown
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WorkflowStats {
    pub total_nodes: usize,
    pub workflow_id: String,
    pub status: &'static str,
    pub version: String,
}

impl WorkflowStats {
    pub fn new(page: &PageConfig, descriptor: &WorkflowDescriptor) -> Self {
        Self {
            total_nodes: descriptor.node_count(),
            workflow_id: page.id_metric.apply(descriptor.id()),
            status: if descriptor.active() {
                "Active"
            } else {
                "Inactive"
            },
            version: page.version_metric.apply(descriptor.version_id()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WorkflowCard {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub workflow_name: String,
    pub overview: Option<String>,
    pub setup: String,
    pub features: Vec<String>,
    pub image: Option<String>,
    pub image_available: bool,
    pub stats: WorkflowStats,
    pub download_file_name: String,
    pub download_mime_type: &'static str,
}

impl WorkflowCard {
    pub fn build(showcase: &Showcase, page: &PageConfig, descriptor: &WorkflowDescriptor) -> Self {
        let workflow_name = descriptor.name(&page.default_name).to_string();
        let image_path = showcase.image_path(page);
        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            subtitle: page.subtitle.clone(),
            download_file_name: export_file_name(&workflow_name),
            download_mime_type: WORKFLOW_MIME_TYPE,
            workflow_name,
            overview: page.overview.clone(),
            setup: extract_description(descriptor, page.sticky_note),
            features: page.features.clone(),
            image_available: image_path.as_deref().is_some_and(|p| p.is_file()),
            image: page.image.as_ref().map(|p| p.display().to_string()),
            stats: WorkflowStats::new(page, descriptor),
        }
    }
}

const CARD_TEMPLATE: &str = "\
{{title}}
{{#if subtitle}}{{subtitle}}
{{/if}}
== {{workflow_name}} ==
{{#if overview}}
Overview:
{{overview}}
{{/if}}
Setup instructions:
{{setup}}
{{#if features}}
Key features:
{{#each features}}  * {{this}}
{{/each}}{{/if}}
Image: {{#if image}}{{image}}{{#unless image_available}} (not found){{/unless}}{{else}}none{{/if}}

Statistics:
  Total nodes: {{stats.total_nodes}}
  Workflow ID: {{stats.workflow_id}}
  Status:      {{stats.status}}
  Version:     {{stats.version}}

Download: {{download_file_name}} ({{download_mime_type}})
";

pub fn render_card(card: &WorkflowCard) -> Result<String, RenderCardError> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .render_template(CARD_TEMPLATE, card)
        .map_err(|err| RenderCardError::RenderFailed(card.slug.clone(), err))
}
