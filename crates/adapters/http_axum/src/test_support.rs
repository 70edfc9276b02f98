//! Throwaway site roots for tests.

use std::path::{Path, PathBuf};

/// A directory under the system temp dir, removed on drop.
pub struct TempSite {
    root: PathBuf,
}

impl TempSite {
    pub fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!("folio-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.path(name), content).unwrap();
    }
}

impl Drop for TempSite {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
