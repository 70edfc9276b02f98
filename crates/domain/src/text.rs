//! Small text transformations used while rendering.

/// Substrings that mark a funding line as a grant or award.
const GRANT_MARKERS: [&str; 3] = ["Grant", "Foundation", "Dean's Small Grant"];

/// Turn a camel-case category key into a heading.
///
/// A space is inserted before every ASCII capital letter and the first
/// character is upper-cased: `programmingLanguages` → `Programming Languages`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

/// Whether a funding line names a grant, foundation or award.
#[must_use]
pub fn is_grant_funding(funding: &str) -> bool {
    GRANT_MARKERS.iter().any(|marker| funding.contains(marker))
}

/// Replace line feeds with `<br>`.
#[must_use]
pub fn newlines_to_br(text: &str) -> String {
    text.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_space_and_capitalize_camel_case_key() {
        assert_eq!(humanize_key("programmingLanguages"), "Programming Languages");
        assert_eq!(humanize_key("dataAnalysisTools"), "Data Analysis Tools");
    }

    #[test]
    fn should_capitalize_single_word_key() {
        assert_eq!(humanize_key("languages"), "Languages");
    }

    #[test]
    fn should_insert_one_space_per_capital() {
        let key = "aBcDe";
        let humanized = humanize_key(key);
        let capitals = key.chars().filter(char::is_ascii_uppercase).count();
        assert_eq!(humanized.len(), key.len() + capitals);
        assert_eq!(humanized, "A Bc De");
    }

    #[test]
    fn should_keep_leading_space_when_key_starts_with_capital() {
        assert_eq!(humanize_key("SQL"), " S Q L");
    }

    #[test]
    fn should_leave_empty_key_empty() {
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn should_detect_grant_funding() {
        assert!(is_grant_funding("NSF Grant #123"));
        assert!(is_grant_funding("Sloan Foundation"));
        assert!(!is_grant_funding("Self-funded"));
    }

    #[test]
    fn should_convert_newlines() {
        assert_eq!(newlines_to_br("a\nb"), "a<br>b");
    }
}
