//! Profile document read from the local filesystem.

use std::path::{Path, PathBuf};

use folio_app::ports::ProfileSource;
use folio_domain::error::{FolioError, SourceError};
use folio_domain::profile::ProfileDocument;

/// Reads and parses the document on every fetch, so edits show up on the
/// next request.
#[derive(Debug, Clone)]
pub struct FileProfileSource {
    path: PathBuf,
}

impl FileProfileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileSource for FileProfileSource {
    async fn fetch(&self) -> Result<ProfileDocument, FolioError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(SourceError::Io)?;
        ProfileDocument::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempSite;

    #[tokio::test]
    async fn should_parse_document_from_disk() {
        let site = TempSite::new("source-parse");
        site.write("personal_info.json", r#"{"name": "A", "title": "B"}"#);

        let doc = FileProfileSource::new(site.path("personal_info.json"))
            .fetch()
            .await
            .unwrap();
        assert_eq!(doc.name, "A");
    }

    #[tokio::test]
    async fn should_report_io_error_when_file_is_missing() {
        let site = TempSite::new("source-missing");
        let err = FileProfileSource::new(site.path("personal_info.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, FolioError::Source(SourceError::Io(_))));
    }
}
