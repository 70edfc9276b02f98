//! Fixed chrome (navigation bar, back-to-top control) visibility.

/// Id of the fixed navigation bar.
pub const NAV_ID: &str = "mainNav";
/// Id of the back-to-top control.
pub const BACK_TO_TOP_ID: &str = "backToTop";
/// Class toggled on the nav bar and back-to-top control.
pub const VISIBLE_CLASS: &str = "visible";
/// Scroll offset past which the nav bar is shown.
pub const NAV_THRESHOLD: f64 = 50.0;
/// The back-to-top control appears this far before the end of the hero.
pub const BACK_TO_TOP_MARGIN: f64 = 100.0;

/// Which fixed controls should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeVisibility {
    pub nav: bool,
    pub back_to_top: bool,
}

/// Visibility for a scroll `offset`, given the hero section height
/// (the viewport height).
#[must_use]
pub fn chrome_visibility(offset: f64, hero_height: f64) -> ChromeVisibility {
    ChromeVisibility {
        nav: offset > NAV_THRESHOLD,
        back_to_top: offset > hero_height - BACK_TO_TOP_MARGIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hide_everything_at_top() {
        assert_eq!(chrome_visibility(0.0, 800.0), ChromeVisibility::default());
    }

    #[test]
    fn should_show_nav_past_threshold() {
        let visibility = chrome_visibility(51.0, 800.0);
        assert!(visibility.nav);
        assert!(!visibility.back_to_top);
    }

    #[test]
    fn should_keep_nav_hidden_at_exact_threshold() {
        assert!(!chrome_visibility(50.0, 800.0).nav);
    }

    #[test]
    fn should_show_back_to_top_near_end_of_hero() {
        assert!(!chrome_visibility(700.0, 800.0).back_to_top);
        assert!(chrome_visibility(701.0, 800.0).back_to_top);
    }
}
