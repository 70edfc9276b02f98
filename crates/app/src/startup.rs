//! Page initialization, sequenced explicitly.
//!
//! Each phase awaits the previous one: the theme and chrome are applied
//! against the static shell, the profile is rendered, the entrance
//! animation is started, layout is allowed to settle for two frames, and
//! only then is a fragment from the initial URL scrolled to.
//!
//! A failed render does not stop the shell from animating in; it only
//! cancels the fragment restore.

use folio_domain::error::FolioError;
use folio_domain::theme::Theme;

use crate::ports::{Page, ParticleBackground, PreferenceStore, ProfileSource, SystemTheme, Timers};
use crate::services::diagnostics::Diagnostics;
use crate::services::navigation_service::NavigationService;
use crate::services::render_service::{RenderReport, RenderService};
use crate::services::scroll_service::ScrollService;
use crate::services::theme_service::ThemeService;

/// What initialization did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupReport {
    pub theme: Theme,
    pub render: RenderReport,
    /// Whether a pending fragment was scrolled to.
    pub restored: bool,
}

/// Borrowed view of every service taking part in initialization.
pub struct Startup<'a, S, Y, B, P, T, R> {
    pub page: &'a P,
    pub timers: &'a T,
    pub theme: &'a ThemeService<S, Y, B, P>,
    pub scroll: &'a ScrollService<P>,
    pub render: &'a RenderService<R>,
    pub navigation: &'a NavigationService<P, T>,
    pub diagnostics: &'a Diagnostics<P>,
}

impl<S, Y, B, P, T, R> Startup<'_, S, Y, B, P, T, R>
where
    S: PreferenceStore,
    Y: SystemTheme,
    B: ParticleBackground,
    P: Page,
    T: Timers,
    R: ProfileSource,
{
    /// Run every phase in order.
    ///
    /// `pending` is the fragment that was in the URL when the page loaded.
    ///
    /// # Errors
    ///
    /// Returns the source error when the profile document cannot be loaded,
    /// after the theme, chrome, animation and diagnostics phases have run.
    pub async fn run(&self, pending: Option<&str>) -> Result<StartupReport, FolioError> {
        let theme = self.theme.init();
        self.scroll.on_scroll();
        tracing::debug!(%theme, "shell initialized");

        let render = self.render.render_into(self.page).await;

        self.navigation.animation().animate_page();
        self.timers.next_frame().await;
        self.timers.next_frame().await;

        let restored = render.is_ok()
            && pending.is_some_and(|fragment| self.navigation.restore_pending(fragment));
        self.diagnostics.log();

        let render = render?;
        tracing::info!(restored, "page ready");
        Ok(StartupReport {
            theme,
            render,
            restored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        CountingParticles, FakePage, FixedSystemTheme, InstantTimers, MemoryPreferenceStore,
        StaticProfileSource,
    };
    use folio_domain::animation::ANIMATE_IN;
    use folio_domain::navigation::DETAILS_SECTION_ID;
    use folio_domain::render::{RenderOptions, target};
    use folio_domain::scroll::NAV_ID;
    use folio_domain::theme::THEME_ATTRIBUTE;

    type TestStartup<'a> = Startup<
        'a,
        MemoryPreferenceStore,
        FixedSystemTheme,
        CountingParticles,
        FakePage,
        InstantTimers,
        StaticProfileSource,
    >;

    struct Harness {
        page: FakePage,
        timers: InstantTimers,
        theme: ThemeService<MemoryPreferenceStore, FixedSystemTheme, CountingParticles, FakePage>,
        scroll: ScrollService<FakePage>,
        render: RenderService<StaticProfileSource>,
        navigation: NavigationService<FakePage, InstantTimers>,
        diagnostics: Diagnostics<FakePage>,
    }

    impl Harness {
        fn new(document: Option<&str>) -> Self {
            let page = FakePage::with_elements(&[
                NAV_ID,
                DETAILS_SECTION_ID,
                "teaching",
                target::NAME,
                target::TITLE,
            ]);
            page.nest(DETAILS_SECTION_ID, "section", &["teaching"]);
            page.edit("teaching", |e| e.offset_top = 1500.0);
            let timers = InstantTimers::default();
            Self {
                theme: ThemeService::new(
                    MemoryPreferenceStore::default(),
                    FixedSystemTheme::new(Some(true)),
                    CountingParticles::default(),
                    page.clone(),
                ),
                scroll: ScrollService::new(page.clone()),
                render: RenderService::new(
                    StaticProfileSource(document.map(ToString::to_string)),
                    RenderOptions::default(),
                ),
                navigation: NavigationService::new(page.clone(), timers.clone()),
                diagnostics: Diagnostics::new(page.clone(), true),
                page,
                timers,
            }
        }

        fn startup(&self) -> TestStartup<'_> {
            Startup {
                page: &self.page,
                timers: &self.timers,
                theme: &self.theme,
                scroll: &self.scroll,
                render: &self.render,
                navigation: &self.navigation,
                diagnostics: &self.diagnostics,
            }
        }
    }

    #[tokio::test]
    async fn should_render_before_restoring_pending_fragment() {
        let harness = Harness::new(Some(r#"{"name": "A", "title": "B"}"#));

        let report = harness.startup().run(Some("teaching")).await.unwrap();

        assert_eq!(report.theme, Theme::Dark);
        assert!(report.restored);
        assert_eq!(harness.page.get(target::NAME).text.as_deref(), Some("A"));
        assert_eq!(harness.timers.frames.get(), 2);
        assert!((harness.page.scroll_offset() - 1410.0).abs() < f64::EPSILON);

        harness.timers.flush();
        assert!(harness.page.has_class("teaching", ANIMATE_IN));
    }

    #[tokio::test]
    async fn should_animate_shell_even_when_profile_fails() {
        let harness = Harness::new(None);

        let result = harness.startup().run(Some("teaching")).await;

        assert!(result.is_err());
        assert_eq!(
            harness.page.document_attributes(),
            vec![(THEME_ATTRIBUTE.to_string(), "dark".to_string())]
        );
        assert!(harness.page.scrolls().is_empty());
        assert_eq!(harness.timers.frames.get(), 2);

        harness.timers.flush();
        assert!(harness.page.has_class("teaching", ANIMATE_IN));
    }

    #[tokio::test]
    async fn should_skip_restore_without_pending_fragment() {
        let harness = Harness::new(Some(r#"{"name": "A", "title": "B"}"#));
        let report = harness.startup().run(None).await.unwrap();
        assert!(!report.restored);
        assert!(harness.page.scrolls().is_empty());
    }
}
