//! # folio-adapter-web-leptos
//!
//! Browser adapter for the portfolio page: `web-sys` implementations of
//! every application port, DOM event wiring, the popover component and
//! console logging.
//!
//! The page shell (static HTML) provides every container; this crate only
//! fills them and reacts to user input.

use std::rc::Rc;

use folio_app::config::SiteConfig;
use leptos::mount::mount_to_body;
use leptos::prelude::*;
use leptos::task::spawn_local;

mod components;
pub mod config;
pub mod events;
pub mod logging;
pub mod page;
pub mod particles;
pub mod site;
pub mod source;
pub mod storage;
pub mod timers;

use components::Popover;
use page::DomPage;
use site::Site;

fn current_year() -> i32 {
    i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(1970)
}

/// Entry point: configure logging, wire listeners, mount the popover and
/// run the startup sequence.
pub fn start() {
    let Some(page) = DomPage::from_window() else {
        return;
    };
    let pending = page.reset_scroll();

    let dev_flag = config::has_dev_flag(&page.search());
    let parsed = config::load(page.document());
    logging::init(dev_flag || parsed.as_ref().is_ok_and(|c| c.dev_mode));
    let mut config = parsed.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid site config");
        SiteConfig::default()
    });
    config.dev_mode |= dev_flag;

    let site = Rc::new(Site::new(page, &config, current_year()));
    events::bind_all(&site);

    let SiteConfig {
        popover_image,
        popover_caption,
        ..
    } = config;
    mount_to_body(move || {
        view! { <Popover image=popover_image caption=popover_caption/> }
    });

    spawn_local(async move {
        match site.startup().run(pending.as_deref()).await {
            Ok(report) => tracing::debug!(?report, "startup finished"),
            Err(err) => tracing::error!(error = %err, "page started without profile content"),
        }
        events::observe_in_view(&site);
    });
}
