use crate::workflow::{Node, WorkflowDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STICKY_NOTE_TYPE: &str = "n8n-nodes-base.stickyNote";
pub const STICKY_NOTE_NAME: &str = "Sticky Note";
pub const NO_DESCRIPTION: &str = "No description provided.";

/// How a sticky note is recognised among a workflow's nodes.
///
/// Pages have historically disagreed: most match on the node type, some on the
/// node's display name. Both are kept selectable instead of guessing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StickyNoteRule {
    /// `type == "n8n-nodes-base.stickyNote"`
    #[default]
    Type,
    /// `name == "Sticky Note"`
    Name,
    /// Either of the above.
    Either,
}

impl StickyNoteRule {
    pub fn matches(&self, node: &Node<'_>) -> bool {
        let by_type = || node.node_type() == Some(STICKY_NOTE_TYPE);
        let by_name = || node.name() == Some(STICKY_NOTE_NAME);
        match self {
            StickyNoteRule::Type => by_type(),
            StickyNoteRule::Name => by_name(),
            StickyNoteRule::Either => by_type() || by_name(),
        }
    }
}

/// The `content` of the first matching node that has one.
pub fn find_sticky_note_content(
    descriptor: &WorkflowDescriptor,
    rule: StickyNoteRule,
) -> Option<&Value> {
    descriptor
        .nodes()
        .filter(|node| rule.matches(node))
        .find_map(|node| node.content())
}

/// Text of the workflow's sticky note, or [`NO_DESCRIPTION`].
pub fn extract_description(descriptor: &WorkflowDescriptor, rule: StickyNoteRule) -> String {
    match find_sticky_note_content(descriptor, rule) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => NO_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn describe(document: Value) -> String {
        extract_description(&WorkflowDescriptor::from_value(document), StickyNoteRule::Type)
    }

    #[test]
    fn no_nodes_means_no_description() {
        assert_eq!(describe(json!({"nodes": []})), NO_DESCRIPTION);
        assert_eq!(describe(json!({})), NO_DESCRIPTION);
    }

    #[test]
    fn sticky_note_content_is_returned() {
        let document = json!({"nodes": [
            {"type": "n8n-nodes-base.stickyNote", "parameters": {"content": "Setup: do X"}}
        ]});
        assert_eq!(describe(document), "Setup: do X");
    }

    #[test]
    fn first_match_wins_after_skipping_other_nodes() {
        let document = json!({"nodes": [
            {"type": "other", "parameters": {}},
            {"type": "n8n-nodes-base.stickyNote", "parameters": {"content": "second"}},
            {"type": "n8n-nodes-base.stickyNote", "parameters": {"content": "third"}},
        ]});
        assert_eq!(describe(document), "second");
    }

    #[test]
    fn sticky_note_without_content_is_skipped() {
        let document = json!({"nodes": [
            {"type": "n8n-nodes-base.stickyNote", "parameters": {"color": 4}},
            {"type": "n8n-nodes-base.stickyNote", "parameters": {"content": "later"}},
        ]});
        assert_eq!(describe(document), "later");

        let only_empty = json!({"nodes": [
            {"type": "n8n-nodes-base.stickyNote"}
        ]});
        assert_eq!(describe(only_empty), NO_DESCRIPTION);
    }

    #[test]
    fn name_rule_ignores_type() {
        let document = WorkflowDescriptor::from_value(json!({"nodes": [
            {"type": "n8n-nodes-base.stickyNote", "name": "Setup", "parameters": {"content": "by type"}},
            {"type": "n8n-nodes-base.set", "name": "Sticky Note", "parameters": {"content": "by name"}},
        ]}));

        assert_eq!(extract_description(&document, StickyNoteRule::Type), "by type");
        assert_eq!(extract_description(&document, StickyNoteRule::Name), "by name");
        assert_eq!(extract_description(&document, StickyNoteRule::Either), "by type");
    }

    #[test]
    fn non_text_content_is_rendered_as_json() {
        let document = json!({"nodes": [
            {"type": "n8n-nodes-base.stickyNote", "parameters": {"content": ["a", 1]}}
        ]});
        assert_eq!(describe(document), r#"["a",1]"#);
    }
}
