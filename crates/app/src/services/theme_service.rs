//! Theme service — resolves, applies and toggles the document theme.

use std::cell::Cell;

use folio_domain::theme::{THEME_ATTRIBUTE, THEME_TOGGLE_ID, Theme};

use crate::ports::{Page, ParticleBackground, PreferenceStore, SystemTheme};

/// Application service for the light/dark theme.
pub struct ThemeService<S, Y, B, P> {
    store: S,
    system: Y,
    particles: B,
    page: P,
    current: Cell<Theme>,
    particles_ready: Cell<bool>,
    follows_system: Cell<bool>,
}

impl<S, Y, B, P> ThemeService<S, Y, B, P>
where
    S: PreferenceStore,
    Y: SystemTheme,
    B: ParticleBackground,
    P: Page,
{
    pub fn new(store: S, system: Y, particles: B, page: P) -> Self {
        Self {
            store,
            system,
            particles,
            page,
            current: Cell::new(Theme::default()),
            particles_ready: Cell::new(false),
            follows_system: Cell::new(false),
        }
    }

    /// The theme currently applied to the document.
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Apply the persisted theme, else the system preference, else light.
    ///
    /// The system signal is only queried when nothing is persisted. On a
    /// first visit the resolved theme is persisted and the page keeps
    /// following the system until the user toggles.
    pub fn init(&self) -> Theme {
        let theme = match self.store.get() {
            Some(theme) => theme,
            None => {
                let theme = self
                    .system
                    .prefers_dark()
                    .map(Theme::from_prefers_dark)
                    .unwrap_or_default();
                self.persist(theme);
                self.follows_system.set(true);
                theme
            }
        };
        self.apply(theme);

        if !self.particles_ready.get() && self.particles.is_present() {
            self.particles.initialize();
            self.particles_ready.set(true);
        }

        tracing::debug!(theme = %theme, "theme initialized");
        theme
    }

    /// Flip the theme, persist the explicit choice and re-apply.
    pub fn toggle(&self) -> Theme {
        let theme = self.current().toggled();
        self.follows_system.set(false);
        self.apply(theme);
        self.persist(theme);
        self.refresh_particles();
        theme
    }

    /// Whether the page still follows the system preference: nothing was
    /// persisted when the page loaded and the user has not toggled since.
    pub fn follows_system(&self) -> bool {
        self.follows_system.get()
    }

    /// React to a change of the system preference.
    ///
    /// Ignored once the user has made an explicit choice; returns the newly
    /// applied theme otherwise.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        if !self.follows_system() {
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.apply(theme);
        self.persist(theme);
        self.refresh_particles();
        Some(theme)
    }

    fn persist(&self, theme: Theme) {
        if let Err(err) = self.store.set(theme) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
    }

    fn apply(&self, theme: Theme) {
        self.page
            .set_document_attribute(THEME_ATTRIBUTE, theme.as_str());
        if let Some(toggle) = self.page.element(THEME_TOGGLE_ID) {
            self.page.set_text(&toggle, theme.toggle_glyph());
        }
        self.current.set(theme);
    }

    fn refresh_particles(&self) {
        if self.particles.is_present() {
            self.particles.reinitialize();
        }
    }
}
