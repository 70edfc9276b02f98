//! Site configuration shared by the browser and preview adapters.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use folio_domain::render::RenderOptions;
use serde::{Deserialize, Serialize};

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// URL of the profile document, relative to the page.
    pub profile_url: String,
    /// Local storage key holding the theme preference.
    pub theme_storage_key: String,
    /// Project title that opens the popover.
    pub popover_project: String,
    /// Icon shown before grant-like funding lines.
    pub award_icon: String,
    /// Affiliations kept out of the bold part of award names.
    pub plain_award_suffixes: Vec<String>,
    /// Badge appended to the profile title; `None` hides it.
    pub title_badge: Option<String>,
    /// Image shown inside the popover panel.
    pub popover_image: String,
    /// Caption under the popover image.
    pub popover_caption: String,
    /// Enable developer diagnostics.
    pub dev_mode: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            profile_url: "personal_info.json".to_string(),
            theme_storage_key: "theme".to_string(),
            popover_project: options.popover_project,
            award_icon: options.award_icon,
            plain_award_suffixes: options.plain_award_suffixes,
            title_badge: options.title_badge,
            popover_image: "techmemory_wechat_QR.jpg".to_string(),
            popover_caption: "Scan it with WeChat to gain access".to_string(),
            dev_mode: false,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the text is not a
    /// JSON object of known field types.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Rendering knobs for a given footer year.
    #[must_use]
    pub fn render_options(&self, footer_year: i32) -> RenderOptions {
        RenderOptions {
            award_icon: self.award_icon.clone(),
            popover_project: self.popover_project.clone(),
            plain_award_suffixes: self.plain_award_suffixes.clone(),
            title_badge: self.title_badge.clone(),
            footer_year,
        }
    }
}
