//! In-page navigation: target resolution and scroll offsets.

use crate::geometry::ScrollBehavior;

/// Correction applied to nav-link scrolls; the fixed header covers this much.
pub const NAV_CORRECTION: f64 = 68.0;
/// Correction for a fragment present at page load, for most sections.
pub const LOAD_CORRECTION: f64 = 90.0;
/// Section that scrolls with [`NAV_CORRECTION`] even at page load.
pub const DETAILS_SECTION_ID: &str = "details-section";
/// Delay between starting a section's animation and moving the viewport.
pub const SCROLL_DELAY_MS: u32 = 50;
/// Delay before the nav bar is forced visible after the "More" link.
pub const MORE_NAV_REVEAL_MS: u32 = 100;

/// Nav links handled in-page.
pub const NAV_LINK_SELECTOR: &str = "a[href^='#']";
/// The hero's link down to the details section.
pub const MORE_LINK_SELECTOR: &str = ".more-link";

/// A programmatic scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Extract the element id from an in-page `href` such as `#about`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll for a nav-link click, from the target's bounding-rect top and the
/// current page offset.
#[must_use]
pub fn click_scroll(rect_top: f64, page_offset: f64) -> ScrollRequest {
    ScrollRequest {
        top: rect_top + page_offset - NAV_CORRECTION,
        behavior: ScrollBehavior::Smooth,
    }
}

/// Deferred scroll for a fragment that was present when the page loaded.
///
/// Uses the layout offset and an instant jump to avoid jank during the
/// initial paint.
#[must_use]
pub fn load_scroll(target_id: &str, offset_top: f64) -> ScrollRequest {
    let correction = if target_id == DETAILS_SECTION_ID {
        NAV_CORRECTION
    } else {
        LOAD_CORRECTION
    };
    ScrollRequest {
        top: offset_top - correction,
        behavior: ScrollBehavior::Instant,
    }
}

/// Scroll for the hero's "More" link: straight to the details section.
#[must_use]
pub fn more_scroll(details_offset_top: f64) -> ScrollRequest {
    ScrollRequest {
        top: details_offset_top,
        behavior: ScrollBehavior::Smooth,
    }
}
