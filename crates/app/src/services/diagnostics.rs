//! Developer diagnostics, available only in developer mode.

use folio_domain::animation::{DETAILS_CONTAINER_ID, SPECIAL_ELEMENT_IDS};
use folio_domain::navigation::NAV_LINK_SELECTOR;
use folio_domain::render::target;
use folio_domain::scroll::{BACK_TO_TOP_ID, NAV_ID};
use folio_domain::theme::THEME_TOGGLE_ID;

use crate::ports::Page;

/// Elements the page shell is expected to provide.
const CONTRACT_IDS: [&str; 8] = [
    NAV_ID,
    BACK_TO_TOP_ID,
    THEME_TOGGLE_ID,
    DETAILS_CONTAINER_ID,
    target::NAME,
    target::TITLE,
    target::TALKS_LIST,
    target::FOOTER_TEXT,
];

/// Point-in-time view of the page structure.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsReport {
    /// Contract ids the page does not provide.
    pub missing: Vec<&'static str>,
    pub nav_links: usize,
    pub scroll_offset: f64,
    /// `(section id, offset from top)` for every section with an id in the
    /// details container.
    pub sections: Vec<(String, f64)>,
}

pub struct Diagnostics<P> {
    page: P,
    enabled: bool,
}

impl<P: Page> Diagnostics<P> {
    pub fn new(page: P, enabled: bool) -> Self {
        Self { page, enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Inspect the page. `None` outside developer mode.
    pub fn snapshot(&self) -> Option<DiagnosticsReport> {
        if !self.enabled {
            return None;
        }
        let missing = CONTRACT_IDS
            .iter()
            .chain(SPECIAL_ELEMENT_IDS.iter())
            .copied()
            .filter(|id| self.page.element(id).is_none())
            .collect();
        let nav_links = self
            .page
            .element(NAV_ID)
            .map_or(0, |nav| self.page.query_all(&nav, NAV_LINK_SELECTOR).len());
        let sections = self
            .page
            .element(DETAILS_CONTAINER_ID)
            .map(|details| self.page.query_all(&details, "section"))
            .unwrap_or_default()
            .iter()
            .filter_map(|section| {
                let id = self.page.attribute(section, "id")?;
                Some((id, self.page.offset_top(section)))
            })
            .collect();

        Some(DiagnosticsReport {
            missing,
            nav_links,
            scroll_offset: self.page.scroll_offset(),
            sections,
        })
    }

    /// Log a snapshot through `tracing`; no-op outside developer mode.
    pub fn log(&self) {
        let Some(report) = self.snapshot() else {
            return;
        };
        tracing::info!(
            nav_links = report.nav_links,
            scroll_offset = report.scroll_offset,
            missing = ?report.missing,
            "page diagnostics"
        );
        for (id, top) in &report.sections {
            tracing::debug!(section = %id, top, "section offset");
        }
    }
}
