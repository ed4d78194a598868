pub mod builtin;
pub mod page;

use crate::error::config::LoadShowcaseConfigError;
use crate::error::config::LoadShowcaseConfigError::{
    DetermineCurrentWorkingDirFailed, DuplicatePage, LoadFromFileFailed,
    ResolveManifestPathFailed,
};
use crate::error::config::UnknownPageError;
use crate::error::structured_file::StructuredFileError;
pub use page::PageConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "showcase.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShowcaseManifest {
    pub pages: Vec<PageConfig>,
}

impl ShowcaseManifest {
    pub fn builtin() -> Self {
        Self {
            pages: builtin::pages(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StructuredFileError> {
        crate::json::save_json_file(path, self)
    }
}

/// The set of pages the CLI can show, and the directory their paths are
/// relative to.
#[derive(Clone, Debug)]
pub struct Showcase {
    root: PathBuf,
    manifest_path: Option<PathBuf>,
    pages: Vec<PageConfig>,
}

impl Showcase {
    fn resolve_manifest_path(
        working_dir: &Path,
    ) -> Result<Option<PathBuf>, LoadShowcaseConfigError> {
        let mut curr = crate::fs::canonicalize(working_dir).map_err(ResolveManifestPathFailed)?;
        while curr.parent().is_some() {
            if curr.join(MANIFEST_FILE_NAME).is_file() {
                return Ok(Some(curr.join(MANIFEST_FILE_NAME)));
            } else {
                curr.pop();
            }
        }

        // The manifest may sit in the filesystem root (containers, CI).
        if curr.join(MANIFEST_FILE_NAME).is_file() {
            return Ok(Some(curr.join(MANIFEST_FILE_NAME)));
        }

        Ok(None)
    }

    /// The built-in pages, rooted at `root`.
    pub fn builtin(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            manifest_path: None,
            pages: builtin::pages(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadShowcaseConfigError> {
        let manifest: ShowcaseManifest =
            crate::json::load_json_file(path).map_err(LoadFromFileFailed)?;

        let mut seen = BTreeSet::new();
        for page in &manifest.pages {
            if !seen.insert(page.slug.as_str()) {
                return Err(DuplicatePage {
                    slug: page.slug.clone(),
                    path: path.to_path_buf(),
                });
            }
        }

        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self {
            root,
            manifest_path: Some(path.to_path_buf()),
            pages: manifest.pages,
        })
    }

    /// Looks for a manifest in `working_dir` or any parent. Without one the
    /// built-in pages are used, rooted at `working_dir`.
    pub fn from_dir(working_dir: &Path) -> Result<Self, LoadShowcaseConfigError> {
        match Self::resolve_manifest_path(working_dir)? {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::builtin(working_dir)),
        }
    }

    pub fn from_current_dir() -> Result<Self, LoadShowcaseConfigError> {
        Self::from_dir(&std::env::current_dir().map_err(DetermineCurrentWorkingDirFailed)?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest_path.as_deref()
    }

    pub fn pages(&self) -> &[PageConfig] {
        &self.pages
    }

    pub fn page(&self, slug: &str) -> Result<&PageConfig, UnknownPageError> {
        self.pages
            .iter()
            .find(|page| page.slug == slug)
            .ok_or_else(|| UnknownPageError {
                slug: slug.to_string(),
                known: self.pages.iter().map(|p| p.slug.clone()).collect(),
            })
    }

    pub fn descriptor_path(&self, page: &PageConfig) -> PathBuf {
        self.root.join(&page.descriptor)
    }

    pub fn image_path(&self, page: &PageConfig) -> Option<PathBuf> {
        page.image.as_ref().map(|image| self.root.join(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_tempdir() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().canonicalize().unwrap();
        (dir, path)
    }

    #[test]
    fn find_manifest_in_current_path() {
        let (_dir, root) = canonical_tempdir();
        let manifest_path = root.join("site").join(MANIFEST_FILE_NAME);
        std::fs::create_dir_all(manifest_path.parent().unwrap()).unwrap();
        std::fs::write(&manifest_path, r#"{"pages": []}"#).unwrap();

        assert_eq!(
            Showcase::resolve_manifest_path(manifest_path.parent().unwrap())
                .unwrap()
                .unwrap(),
            manifest_path
        );
    }

    #[test]
    fn find_manifest_from_subdir() {
        let (_dir, root) = canonical_tempdir();
        let manifest_path = root.join("site").join(MANIFEST_FILE_NAME);
        let subdir = root.join("site/pages/deep");
        std::fs::create_dir_all(&subdir).unwrap();
        std::fs::write(&manifest_path, r#"{"pages": []}"#).unwrap();

        let showcase = Showcase::from_dir(&subdir).unwrap();
        assert_eq!(showcase.manifest_path(), Some(manifest_path.as_path()));
        assert_eq!(showcase.root(), root.join("site"));
        assert!(showcase.pages().is_empty());
    }

    #[test]
    fn no_manifest_means_builtin_pages() {
        let (_dir, root) = canonical_tempdir();

        let showcase = Showcase::from_dir(&root).unwrap();

        assert!(showcase.manifest_path().is_none());
        assert_eq!(showcase.pages(), builtin::pages().as_slice());
        let page = showcase.page("government-grants").unwrap();
        assert_eq!(
            showcase.descriptor_path(page),
            root.join("workflow_government_grants.json")
        );
    }

    #[test]
    fn email_assistant_assets_resolve_under_pages_dir() {
        let root = Path::new("/site");
        let showcase = Showcase::builtin(root);
        let page = showcase.page("ai-email-assistant").unwrap();

        assert_eq!(
            showcase.descriptor_path(page),
            root.join("pages/streamlit_app/workflow_ai_email_assistant.json")
        );
        assert_eq!(
            showcase.image_path(page).unwrap(),
            root.join("pages/streamlit_app/ai_email_assistant.png")
        );
    }

    #[test]
    fn manifest_pages_take_defaults() {
        let (_dir, root) = canonical_tempdir();
        let manifest_path = root.join(MANIFEST_FILE_NAME);
        std::fs::write(
            &manifest_path,
            r#"{"pages": [{"slug": "leads", "title": "Leads", "descriptor": "flows/leads.json"}]}"#,
        )
        .unwrap();

        let showcase = Showcase::from_file(&manifest_path).unwrap();
        let page = showcase.page("leads").unwrap();

        assert_eq!(page.default_name, page::DEFAULT_WORKFLOW_NAME);
        assert_eq!(showcase.descriptor_path(page), root.join("flows/leads.json"));
        assert!(showcase.image_path(page).is_none());
    }

    #[test]
    fn saved_builtin_manifest_loads_back() {
        let (_dir, root) = canonical_tempdir();
        let manifest_path = root.join(MANIFEST_FILE_NAME);

        ShowcaseManifest::builtin().save(&manifest_path).unwrap();
        let showcase = Showcase::from_dir(&root).unwrap();

        assert_eq!(showcase.manifest_path(), Some(manifest_path.as_path()));
        assert_eq!(showcase.pages(), builtin::pages().as_slice());
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let (_dir, root) = canonical_tempdir();
        let manifest_path = root.join(MANIFEST_FILE_NAME);
        std::fs::write(
            &manifest_path,
            r#"{"pages": [
                {"slug": "a", "title": "A", "descriptor": "a.json"},
                {"slug": "a", "title": "A again", "descriptor": "b.json"}
            ]}"#,
        )
        .unwrap();

        let err = Showcase::from_file(&manifest_path).unwrap_err();
        assert!(matches!(err, DuplicatePage { ref slug, .. } if slug == "a"));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let (_dir, root) = canonical_tempdir();
        std::fs::write(root.join(MANIFEST_FILE_NAME), "{").unwrap();

        let err = Showcase::from_dir(&root).unwrap_err();
        assert!(matches!(err, LoadFromFileFailed(_)));
    }

    #[test]
    fn unknown_page_lists_known_slugs() {
        let showcase = Showcase::builtin(Path::new("."));
        let err = showcase.page("nope").unwrap_err();

        assert_eq!(err.slug, "nope");
        assert!(err.to_string().contains("workflow-showcase"));
    }
}
