//! Section entrance animations — which classes go where, and when.

/// Class that plays the rich entrance animation.
pub const ANIMATE_IN: &str = "animate-in";
/// Class that overrides the entrance with a plain fade.
pub const SIMPLE_FADE_IN: &str = "simple-fade-in";
/// Classes stripped before an animation is replayed.
pub const RESET_CLASSES: [&str; 2] = [ANIMATE_IN, SIMPLE_FADE_IN];

/// Section that receives the richer per-element animation.
pub const ABOUT_SECTION_ID: &str = "about";
/// Wrapper holding every animated section.
pub const DETAILS_CONTAINER_ID: &str = "details-section";
/// Selector for a section's heading.
pub const HEADING_SELECTOR: &str = "h2, h3, h4";
/// Individually animated elements inside the about section.
pub const SPECIAL_ELEMENT_IDS: [&str; 8] = [
    "profile-image",
    "profile-name",
    "profile-title",
    "about-text",
    "education-section",
    "research-section",
    "profile-links",
    "services-content",
];
/// Special elements that animate in sections other than about.
const PLAIN_SPECIAL_ELEMENT_IDS: [&str; 1] = ["services-content"];
/// Delay before the page-wide entrance animation starts.
pub const PAGE_START_DELAY_MS: u32 = 50;

/// Element revealed once when scrolled into view.
pub const IN_VIEW_SELECTOR: &str = ".job-market-text";
pub const IN_VIEW_CLASS: &str = "in-view";
/// Share of the element that must be visible.
pub const IN_VIEW_THRESHOLD: f64 = 0.5;
pub const IN_VIEW_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// How to replay one section's entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionAnimation {
    /// Wait between the reset and adding classes back.
    pub start_delay_ms: u32,
    pub section_classes: &'static [&'static str],
    pub heading_classes: &'static [&'static str],
    pub item_classes: &'static [&'static str],
    /// Extra delay per list item, producing a cascade.
    pub item_stagger_ms: u32,
    pub special_ids: &'static [&'static str],
    pub special_classes: &'static [&'static str],
}

impl SectionAnimation {
    /// The about section gets the rich animation; every other section a
    /// uniform fade.
    #[must_use]
    pub fn for_section(section_id: &str) -> Self {
        if section_id == ABOUT_SECTION_ID {
            Self {
                start_delay_ms: 50,
                section_classes: &[ANIMATE_IN],
                heading_classes: &[ANIMATE_IN],
                item_classes: &[ANIMATE_IN],
                item_stagger_ms: 50,
                special_ids: &SPECIAL_ELEMENT_IDS,
                special_classes: &[ANIMATE_IN],
            }
        } else {
            Self {
                start_delay_ms: 0,
                section_classes: &[SIMPLE_FADE_IN],
                heading_classes: &RESET_CLASSES,
                item_classes: &RESET_CLASSES,
                item_stagger_ms: 100,
                special_ids: &PLAIN_SPECIAL_ELEMENT_IDS,
                special_classes: &RESET_CLASSES,
            }
        }
    }

    /// Delay for the list item at `index`, relative to the start.
    #[must_use]
    pub fn item_delay_ms(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.item_stagger_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stagger_about_items_by_50ms() {
        let animation = SectionAnimation::for_section("about");
        assert_eq!(animation.item_delay_ms(0), 0);
        assert_eq!(animation.item_delay_ms(3), 150);
        assert_eq!(animation.start_delay_ms, 50);
        assert_eq!(animation.special_ids.len(), 8);
    }

    #[test]
    fn should_stagger_other_items_by_100ms() {
        let animation = SectionAnimation::for_section("teaching");
        assert_eq!(animation.item_delay_ms(3), 300);
        assert_eq!(animation.start_delay_ms, 0);
        assert_eq!(animation.section_classes, &[SIMPLE_FADE_IN]);
        assert_eq!(animation.special_ids, &["services-content"]);
    }

    #[test]
    fn should_saturate_huge_index() {
        let animation = SectionAnimation::for_section("teaching");
        assert_eq!(animation.item_delay_ms(usize::MAX), u32::MAX);
    }
}
