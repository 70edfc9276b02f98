//! Academic terms (`"Season YYYY"`) — parsing, ordering and display.

use std::cmp::Ordering;

/// Academic season, ordered within a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Spring" => Some(Self::Spring),
            "Summer" => Some(Self::Summer),
            "Fall" => Some(Self::Fall),
            "Winter" => Some(Self::Winter),
            _ => None,
        }
    }

    /// Position within the year; unknown labels sort before `Spring`.
    fn rank(label: &str) -> u8 {
        Self::parse(label).map_or(0, |season| season as u8 + 1)
    }
}

/// A term split into its season label and year text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Everything before the last word (e.g. `"Fall"`, `"Summer Session"`).
    pub season: String,
    /// The last word, kept verbatim for display.
    pub year: String,
}

impl Term {
    /// Split `"Season YYYY"` on single spaces; the last word is the year.
    ///
    /// Returns `None` for a single word.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.trim().split(' ').collect();
        let (year, season) = parts.split_last()?;
        if season.is_empty() {
            return None;
        }
        Some(Self {
            season: season.join(" "),
            year: (*year).to_string(),
        })
    }

    /// Numeric year for sorting: the leading digits, or 0 if there are none.
    #[must_use]
    pub fn year_number(&self) -> u32 {
        let digits: String = self
            .year
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// Year first, visually isolated, then the season.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(r#"<span class="term-year">{}</span> {}"#, self.year, self.season)
    }

    /// Most recent year first; within a year, Spring < Summer < Fall < Winter.
    #[must_use]
    pub fn display_order(&self, other: &Self) -> Ordering {
        other
            .year_number()
            .cmp(&self.year_number())
            .then_with(|| Season::rank(&self.season).cmp(&Season::rank(&other.season)))
    }
}

enum Entry<'a> {
    Parsed(Term),
    Raw(&'a str),
}

impl Entry<'_> {
    fn year_number(&self) -> u32 {
        match self {
            Self::Parsed(term) => term.year_number(),
            Self::Raw(_) => 0,
        }
    }

    fn season_rank(&self) -> u8 {
        match self {
            Self::Parsed(term) => Season::rank(&term.season),
            Self::Raw(_) => 0,
        }
    }
}

/// Render a list of terms as HTML.
///
/// A single term is reformatted in place. Several terms are sorted by
/// [`Term::display_order`] and joined with `<br>`. Strings that do not
/// look like `"Season YYYY"` are kept verbatim (sorting as year 0).
#[must_use]
pub fn format_terms(terms: &[String]) -> String {
    match terms {
        [] => String::new(),
        [single] => Term::parse(single).map_or_else(|| single.clone(), |term| term.to_html()),
        _ => {
            let mut entries: Vec<Entry<'_>> = terms
                .iter()
                .map(|raw| Term::parse(raw).map_or(Entry::Raw(raw), Entry::Parsed))
                .collect();
            entries.sort_by(|a, b| {
                b.year_number()
                    .cmp(&a.year_number())
                    .then_with(|| a.season_rank().cmp(&b.season_rank()))
            });
            entries
                .iter()
                .map(|entry| match entry {
                    Entry::Parsed(term) => term.to_html(),
                    Entry::Raw(raw) => (*raw).to_string(),
                })
                .collect::<Vec<_>>()
                .join("<br>")
        }
    }
}
