//! Site configuration embedded in the page.
//!
//! The page may carry a `<script type="application/json" id="folio-config">`
//! block; `?dev` in the query string turns developer mode on as well.

use folio_app::config::SiteConfig;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Read the embedded config block, or the defaults when there is none.
///
/// # Errors
///
/// Returns the JSON error when the block exists but does not parse.
pub fn load(document: &Document) -> Result<SiteConfig, serde_json::Error> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(text) if !text.trim().is_empty() => SiteConfig::from_json(&text),
        _ => Ok(SiteConfig::default()),
    }
}

/// Whether the query string asks for developer mode.
pub fn has_dev_flag(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "dev" || (pair.starts_with("dev=") && pair != "dev=0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_dev_flag_when_present() {
        assert!(has_dev_flag("?dev"));
        assert!(has_dev_flag("?lang=en&dev=1"));
    }

    #[test]
    fn should_ignore_dev_flag_when_disabled_or_absent() {
        assert!(!has_dev_flag(""));
        assert!(!has_dev_flag("?dev=0"));
        assert!(!has_dev_flag("?device=phone"));
    }
}
