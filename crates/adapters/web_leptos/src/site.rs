//! Every service of the page, wired to the browser adapters.

use folio_app::config::SiteConfig;
use folio_app::services::diagnostics::Diagnostics;
use folio_app::services::navigation_service::NavigationService;
use folio_app::services::render_service::RenderService;
use folio_app::services::scroll_service::ScrollService;
use folio_app::services::theme_service::ThemeService;
use folio_app::startup::Startup;

use crate::page::DomPage;
use crate::particles::JsParticles;
use crate::source::FetchProfileSource;
use crate::storage::{LocalStorageStore, MediaQueryTheme};
use crate::timers::BrowserTimers;

pub type BrowserThemeService = ThemeService<LocalStorageStore, MediaQueryTheme, JsParticles, DomPage>;

pub struct Site {
    pub page: DomPage,
    pub timers: BrowserTimers,
    pub theme: BrowserThemeService,
    pub scroll: ScrollService<DomPage>,
    pub render: RenderService<FetchProfileSource>,
    pub navigation: NavigationService<DomPage, BrowserTimers>,
    pub diagnostics: Diagnostics<DomPage>,
}

impl Site {
    pub fn new(page: DomPage, config: &SiteConfig, footer_year: i32) -> Self {
        let timers = BrowserTimers;
        Self {
            theme: ThemeService::new(
                LocalStorageStore::new(config.theme_storage_key.clone()),
                MediaQueryTheme,
                JsParticles,
                page.clone(),
            ),
            scroll: ScrollService::new(page.clone()),
            render: RenderService::new(
                FetchProfileSource::new(config.profile_url.clone()),
                config.render_options(footer_year),
            ),
            navigation: NavigationService::new(page.clone(), timers),
            diagnostics: Diagnostics::new(page.clone(), config.dev_mode),
            page,
            timers,
        }
    }

    pub fn startup(
        &self,
    ) -> Startup<
        '_,
        LocalStorageStore,
        MediaQueryTheme,
        JsParticles,
        DomPage,
        BrowserTimers,
        FetchProfileSource,
    > {
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
