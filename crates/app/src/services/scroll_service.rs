//! Scroll service — nav bar and back-to-top visibility.

use std::cell::Cell;

use folio_domain::geometry::ScrollBehavior;
use folio_domain::navigation::ScrollRequest;
use folio_domain::scroll::{BACK_TO_TOP_ID, NAV_ID, VISIBLE_CLASS, chrome_visibility};

use crate::ports::Page;

/// Keeps the fixed chrome in sync with the scroll offset.
///
/// Runs on every scroll event without debouncing; browsers already
/// rate-limit scroll events to paint cycles.
pub struct ScrollService<P> {
    page: P,
    hero_height: Cell<f64>,
}

impl<P: Page> ScrollService<P> {
    /// The hero section spans the initial viewport height.
    pub fn new(page: P) -> Self {
        let hero_height = page.viewport().height;
        Self {
            page,
            hero_height: Cell::new(hero_height),
        }
    }

    pub fn hero_height(&self) -> f64 {
        self.hero_height.get()
    }

    /// Toggle the visible state of the nav bar and back-to-top control.
    pub fn on_scroll(&self) {
        let visibility = chrome_visibility(self.page.scroll_offset(), self.hero_height.get());
        if let Some(nav) = self.page.element(NAV_ID) {
            self.page.toggle_class(&nav, VISIBLE_CLASS, visibility.nav);
        }
        if let Some(button) = self.page.element(BACK_TO_TOP_ID) {
            self.page
                .toggle_class(&button, VISIBLE_CLASS, visibility.back_to_top);
        }
    }

    /// Track the new viewport height.
    pub fn on_resize(&self) {
        self.hero_height.set(self.page.viewport().height);
    }

    /// Smooth scroll back to the top of the page.
    pub fn back_to_top(&self) {
        self.page.scroll_to(ScrollRequest {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakePage;
    use folio_domain::geometry::Viewport;

    fn make_service() -> (ScrollService<FakePage>, FakePage) {
        let page = FakePage::with_elements(&[NAV_ID, BACK_TO_TOP_ID]);
        (ScrollService::new(page.clone()), page)
    }

    #[test]
    fn should_take_hero_height_from_viewport() {
        let (svc, _) = make_service();
        assert!((svc.hero_height() - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_show_nav_after_threshold() {
        let (svc, page) = make_service();
        page.set_scroll_offset(60.0);
        svc.on_scroll();
        assert!(page.has_class(NAV_ID, VISIBLE_CLASS));
        assert!(!page.has_class(BACK_TO_TOP_ID, VISIBLE_CLASS));
    }

    #[test]
    fn should_hide_nav_when_back_at_top() {
        let (svc, page) = make_service();
        page.set_scroll_offset(900.0);
        svc.on_scroll();
        assert!(page.has_class(BACK_TO_TOP_ID, VISIBLE_CLASS));

        page.set_scroll_offset(10.0);
        svc.on_scroll();
        assert!(!page.has_class(NAV_ID, VISIBLE_CLASS));
        assert!(!page.has_class(BACK_TO_TOP_ID, VISIBLE_CLASS));
    }

    #[test]
    fn should_use_resized_height_for_back_to_top() {
        let (svc, page) = make_service();
        page.0.borrow_mut().viewport = Viewport::new(1280.0, 400.0);
        svc.on_resize();

        page.set_scroll_offset(350.0);
        svc.on_scroll();
        assert!(page.has_class(BACK_TO_TOP_ID, VISIBLE_CLASS));
    }

    #[test]
    fn should_scroll_smoothly_to_top() {
        let (svc, page) = make_service();
        svc.back_to_top();
        let scrolls = page.scrolls();
        assert_eq!(scrolls.len(), 1);
        assert!(scrolls[0].top.abs() < f64::EPSILON);
        assert_eq!(scrolls[0].behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn should_tolerate_missing_back_to_top() {
        let page = FakePage::with_elements(&[NAV_ID]);
        let svc = ScrollService::new(page.clone());
        page.set_scroll_offset(2000.0);
        svc.on_scroll();
        assert!(page.has_class(NAV_ID, VISIBLE_CLASS));
    }
}
