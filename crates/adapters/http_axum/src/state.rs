//! Shared application state for axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Datelike;
use folio_app::config::SiteConfig;
use folio_app::services::render_service::RenderService;

use crate::source::FileProfileSource;

/// Application state shared across all axum handlers.
///
/// The profile source is concrete: handler futures must be `Send`, which
/// the `ProfileSource` port does not promise in general.
#[derive(Clone)]
pub struct AppState {
    /// Renders the on-disk document with the site's options.
    pub render_service: Arc<RenderService<FileProfileSource>>,
    /// Directory served as the site.
    pub site_root: Arc<PathBuf>,
}

impl AppState {
    /// Create the state for a site root and its profile document.
    ///
    /// The footer year is the current year when the state is built.
    pub fn new(
        site_root: impl Into<PathBuf>,
        profile: FileProfileSource,
        config: &SiteConfig,
    ) -> Self {
        let options = config.render_options(chrono::Utc::now().year());
        Self {
            render_service: Arc::new(RenderService::new(profile, options)),
            site_root: Arc::new(site_root.into()),
        }
    }

    pub fn site_root(&self) -> &Path {
        &self.site_root
    }
}
