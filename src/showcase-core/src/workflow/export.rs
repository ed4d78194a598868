use crate::error::export::WorkflowExportError;
use crate::error::export::WorkflowExportError::{InvalidFileName, SerializeFailed};
use crate::workflow::WorkflowDescriptor;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const WORKFLOW_MIME_TYPE: &str = "application/json";

/// A workflow ready to be handed to the user as a download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowExport {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl WorkflowExport {
    /// Serializes the descriptor exactly as loaded, indented by two spaces.
    pub fn new(
        descriptor: &WorkflowDescriptor,
        default_name: &str,
    ) -> Result<Self, WorkflowExportError> {
        let name = descriptor.name(default_name);
        let contents = serde_json::to_string_pretty(descriptor.as_value())
            .map_err(|err| SerializeFailed(name.to_string(), err))?;
        Ok(Self {
            file_name: export_file_name(name),
            mime_type: WORKFLOW_MIME_TYPE,
            contents,
        })
    }

    /// Writes the export into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, WorkflowExportError> {
        if Path::new(&self.file_name).file_name() != Some(OsStr::new(&self.file_name)) {
            return Err(InvalidFileName(self.file_name.clone()));
        }
        crate::fs::ensure_dir_exists(dir)?;
        let path = dir.join(&self.file_name);
        crate::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

pub fn export_file_name(workflow_name: &str) -> String {
    format!("{}.json", workflow_name.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(
            export_file_name("Google Maps Local Leads"),
            "Google_Maps_Local_Leads.json"
        );
        assert_eq!(export_file_name("single"), "single.json");
    }

    #[test]
    fn export_uses_descriptor_name_and_indents() {
        let descriptor = WorkflowDescriptor::from_value(json!({
            "name": "AI Email Assistant",
            "nodes": [],
        }));

        let export = WorkflowExport::new(&descriptor, "unused").unwrap();

        assert_eq!(export.file_name, "AI_Email_Assistant.json");
        assert_eq!(export.mime_type, "application/json");
        assert!(export.contents.contains("\n  \"name\": \"AI Email Assistant\""));
        let reparsed: Value = serde_json::from_str(&export.contents).unwrap();
        assert_eq!(&reparsed, descriptor.as_value());
    }

    #[test]
    fn export_keeps_document_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workflow.json");
        std::fs::write(
            &path,
            r#"{"name": "Ordered", "nodes": [{"type": "t", "name": "n", "parameters": {}}],
                "connections": {}, "active": true, "id": "z1"}"#,
        )
        .unwrap();
        let descriptor = crate::workflow::try_load_workflow(&path).unwrap();

        let contents = WorkflowExport::new(&descriptor, "x").unwrap().contents;

        let position = |key: &str| contents.find(&format!("\"{key}\"")).unwrap();
        assert!(position("name") < position("nodes"));
        assert!(position("nodes") < position("connections"));
        assert!(position("connections") < position("active"));
        assert!(position("active") < position("id"));
        assert!(position("type") < position("parameters"));
    }

    #[test]
    fn export_falls_back_to_default_name() {
        let descriptor = WorkflowDescriptor::placeholder("Untitled Workflow");
        let export = WorkflowExport::new(&descriptor, "Other").unwrap();
        assert_eq!(export.file_name, "Untitled_Workflow.json");

        let nameless = WorkflowDescriptor::from_value(json!({}));
        let export = WorkflowExport::new(&nameless, "AI Social Content Creation").unwrap();
        assert_eq!(export.file_name, "AI_Social_Content_Creation.json");
    }

    #[test]
    fn write_to_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("downloads");
        let descriptor = WorkflowDescriptor::from_value(json!({"name": "My Flow"}));

        let path = WorkflowExport::new(&descriptor, "x")
            .unwrap()
            .write_to(&out)
            .unwrap();

        assert_eq!(path, out.join("My_Flow.json"));
        let written: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(&written, descriptor.as_value());
    }

    #[test]
    fn write_to_rejects_names_with_separators() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = WorkflowDescriptor::from_value(json!({"name": "../escape"}));

        let err = WorkflowExport::new(&descriptor, "x")
            .unwrap()
            .write_to(dir.path())
            .unwrap_err();

        assert!(matches!(err, InvalidFileName(_)));
    }
}
