//! Preference ports — the persisted theme and the system signal.

use folio_domain::error::StorageError;
use folio_domain::theme::Theme;

/// Durable key-value storage for the theme preference, scoped to the site.
pub trait PreferenceStore {
    /// The persisted theme, or `None` when the user never chose one.
    ///
    /// Unreadable or unrecognized values count as absent.
    fn get(&self) -> Option<Theme>;

    /// Persist an explicit choice.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is unavailable or refuses the write.
    fn set(&self, theme: Theme) -> Result<(), StorageError>;
}

/// The operating system's light/dark preference.
pub trait SystemTheme {
    /// `Some(true)` for dark, `Some(false)` for light, `None` if undetectable.
    fn prefers_dark(&self) -> Option<bool>;
}
