//! Navigation service — in-page anchor dispatch.

use folio_domain::error::{FolioError, NotFoundError};
use folio_domain::navigation::{
    DETAILS_SECTION_ID, MORE_NAV_REVEAL_MS, SCROLL_DELAY_MS, click_scroll, fragment_target,
    load_scroll, more_scroll,
};
use folio_domain::scroll::{NAV_ID, NAV_THRESHOLD, VISIBLE_CLASS};

use crate::ports::{Page, Timers};
use crate::services::animation_service::AnimationService;

/// Dispatches nav-link clicks into an animation replay and a scroll.
pub struct NavigationService<P, T> {
    page: P,
    timers: T,
    animation: AnimationService<P, T>,
}

impl<P: Page, T: Timers> NavigationService<P, T> {
    pub fn new(page: P, timers: T) -> Self {
        let animation = AnimationService::new(page.clone(), timers.clone());
        Self {
            page,
            timers,
            animation,
        }
    }

    pub fn animation(&self) -> &AnimationService<P, T> {
        &self.animation
    }

    fn target(&self, id: &str) -> Result<P::Element, FolioError> {
        self.page.element(id).ok_or_else(|| {
            NotFoundError {
                kind: "section",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Handle a click on a nav link.
    ///
    /// Returns `Ok(false)` when `href` is not an in-page fragment, in which
    /// case the caller lets the browser follow it.
    pub async fn navigate(&self, href: &str) -> Result<bool, FolioError> {
        let Some(id) = fragment_target(href) else {
            return Ok(false);
        };
        let target = self.target(id)?;

        // measured before the animation reset moves anything
        let request = click_scroll(
            self.page.bounding_rect(&target).top,
            self.page.scroll_offset(),
        );
        self.animation.animate_section(id);
        self.timers.sleep(SCROLL_DELAY_MS).await;
        self.page.scroll_to(request);

        tracing::debug!(section = id, top = request.top, "navigated");
        Ok(true)
    }

    /// Handle the hero's "More" link: scroll to the details section without
    /// replaying animations, then force the nav bar visible.
    pub async fn more(&self) -> Result<(), FolioError> {
        let details = self.target(DETAILS_SECTION_ID)?;
        self.page
            .scroll_to(more_scroll(self.page.offset_top(&details)));
        self.timers.sleep(MORE_NAV_REVEAL_MS).await;
        if let Some(nav) = self.page.element(NAV_ID) {
            self.page.add_classes(&nav, &[VISIBLE_CLASS]);
        }
        Ok(())
    }

    /// Jump to the fragment that was present when the page loaded, once
    /// content is in place, and put it back in the URL.
    ///
    /// Returns `false` when the target does not exist.
    pub fn restore_pending(&self, fragment: &str) -> bool {
        let Some(target) = self.page.element(fragment) else {
            tracing::debug!(fragment, "pending fragment has no target");
            return false;
        };
        let request = load_scroll(fragment, self.page.offset_top(&target));
        self.page.scroll_to(request);

        if request.top > NAV_THRESHOLD
            && let Some(nav) = self.page.element(NAV_ID)
        {
            self.page.add_classes(&nav, &[VISIBLE_CLASS]);
        }
        self.page.replace_fragment(Some(fragment));
        true
    }
}
