use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Value shown for identifiers the descriptor does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// A parsed n8n workflow document.
///
/// The document is kept as the raw JSON it was loaded from: no schema is
/// imposed, unknown fields survive untouched, and every field the showcase
/// reads is defaulted when it is accessed rather than when it is loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowDescriptor(Value);

impl WorkflowDescriptor {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// The document handed out when the real one is absent or unusable.
    pub fn placeholder(name: &str) -> Self {
        Self(json!({
            "name": name,
            "nodes": [],
            "id": NOT_AVAILABLE,
            "active": false,
            "versionId": NOT_AVAILABLE,
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn name<'a>(&'a self, default: &'a str) -> &'a str {
        self.str_field("name").unwrap_or(default)
    }

    pub fn id(&self) -> &str {
        self.str_field("id").unwrap_or(NOT_AVAILABLE)
    }

    pub fn version_id(&self) -> &str {
        self.str_field("versionId").unwrap_or(NOT_AVAILABLE)
    }

    /// Whether the workflow is switched on in n8n. Any JSON value is accepted
    /// and judged by truthiness; absence means inactive.
    pub fn active(&self) -> bool {
        self.0.get("active").is_some_and(is_truthy)
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        self.0
            .get("nodes")
            .and_then(Value::as_array)
            .map(|nodes| nodes.as_slice())
            .unwrap_or_default()
            .iter()
            .map(Node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Value> for WorkflowDescriptor {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A borrowed view of one element of `nodes`.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a>(&'a Value);

impl<'a> Node<'a> {
    pub fn node_type(&self) -> Option<&'a str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn parameters(&self) -> Option<&'a Map<String, Value>> {
        self.0.get("parameters").and_then(Value::as_object)
    }

    pub fn content(&self) -> Option<&'a Value> {
        self.parameters().and_then(|p| p.get("content"))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
