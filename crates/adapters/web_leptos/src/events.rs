//! DOM event wiring.
//!
//! Element listeners are bound at most once per element: a bound element
//! carries a `data-folio-bound` marker and is skipped afterwards. Listeners
//! live as long as the page.

use std::rc::Rc;

use folio_app::ports::Page;
use folio_domain::animation::{
    DETAILS_CONTAINER_ID, IN_VIEW_CLASS, IN_VIEW_ROOT_MARGIN, IN_VIEW_SELECTOR, IN_VIEW_THRESHOLD,
};
use folio_domain::navigation::{MORE_LINK_SELECTOR, NAV_LINK_SELECTOR};
use folio_domain::scroll::{BACK_TO_TOP_ID, NAV_ID};
use folio_domain::theme::THEME_TOGGLE_ID;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::site::Site;
use crate::storage::MediaQueryTheme;

pub const BOUND_MARKER: &str = "data-folio-bound";

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        tracing::warn!(?err, event, "unable to add listener");
    }
    closure.forget();
}

/// Bind `handler` unless the element already carries the marker.
fn bind_once<F>(element: &Element, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    if element.has_attribute(BOUND_MARKER) {
        return;
    }
    listen(element, event, handler);
    let _ = element.set_attribute(BOUND_MARKER, event);
}

/// The element the event started on, or its closest ancestor matching
/// `selector`.
pub fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

fn bind_theme(site: &Rc<Site>) {
    if let Some(toggle) = site.page.element(THEME_TOGGLE_ID) {
        let site = Rc::clone(site);
        bind_once(&toggle, "click", move |_| {
            site.theme.toggle();
        });
    }
    let site = Rc::clone(site);
    MediaQueryTheme::watch(move |prefers_dark| {
        if let Some(theme) = site.theme.on_system_change(prefers_dark) {
            tracing::debug!(%theme, "followed system theme");
        }
    });
}

fn bind_scroll(site: &Rc<Site>) {
    let window = site.page.window();
    let on_scroll = Rc::clone(site);
    listen(window, "scroll", move |_| on_scroll.scroll.on_scroll());
    let on_resize = Rc::clone(site);
    listen(window, "resize", move |_| on_resize.scroll.on_resize());

    if let Some(button) = site.page.element(BACK_TO_TOP_ID) {
        let site = Rc::clone(site);
        bind_once(&button, "click", move |_| site.scroll.back_to_top());
    }
}

/// One delegated listener on the nav bar handles every in-page link.
fn bind_nav(site: &Rc<Site>) {
    let Some(nav) = site.page.element(NAV_ID) else {
        return;
    };
    let site = Rc::clone(site);
    bind_once(&nav, "click", move |event| {
        let Some(href) = closest(&event, NAV_LINK_SELECTOR).and_then(|a| a.get_attribute("href"))
        else {
            return;
        };
        event.prevent_default();
        let site = Rc::clone(&site);
        spawn_local(async move {
            if let Err(err) = site.navigation.navigate(&href).await {
                tracing::debug!(error = %err, "navigation skipped");
            }
        });
    });
}

fn bind_more_link(site: &Rc<Site>) {
    let Some(more) = site.page.document().query_selector(MORE_LINK_SELECTOR).ok().flatten() else {
        return;
    };
    let site = Rc::clone(site);
    bind_once(&more, "click", move |event| {
        event.prevent_default();
        let site = Rc::clone(&site);
        spawn_local(async move {
            if let Err(err) = site.navigation.more().await {
                tracing::debug!(error = %err, "more link skipped");
            }
        });
    });
}

/// Replay the page animation whenever the tab becomes visible again.
fn bind_visibility(site: &Rc<Site>) {
    let document = site.page.document().clone();
    let target = document.clone();
    let site = Rc::clone(site);
    listen(&target, "visibilitychange", move |_| {
        if !document.hidden() && site.page.element(DETAILS_CONTAINER_ID).is_some() {
            site.navigation.animation().animate_page();
        }
    });
}

/// Wire every page-level listener.
pub fn bind_all(site: &Rc<Site>) {
    bind_theme(site);
    bind_scroll(site);
    bind_nav(site);
    bind_more_link(site);
    bind_visibility(site);
}

/// Mark the in-view element once half of it has been visible.
pub fn observe_in_view(site: &Site) {
    let Some(target) = site.page.document().query_selector(IN_VIEW_SELECTOR).ok().flatten() else {
        return;
    };
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let element = entry.target();
                    let _ = element.class_list().add_1(IN_VIEW_CLASS);
                    observer.unobserve(&element);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(IN_VIEW_THRESHOLD));
    options.set_root_margin(IN_VIEW_ROOT_MARGIN);
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer.observe(&target),
        Err(err) => tracing::warn!(?err, "unable to observe in-view element"),
    }
    callback.forget();
}
