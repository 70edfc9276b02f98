//! Theme preference in `localStorage` and the system colour-scheme query.

use folio_app::ports::{PreferenceStore, SystemTheme};
use folio_domain::error::StorageError;
use folio_domain::theme::Theme;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{MediaQueryList, MediaQueryListEvent, Storage};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persisted preference under a single key.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self) -> Option<Theme> {
        let value = local_storage()?.get_item(&self.key).ok().flatten()?;
        match value.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring stored theme");
                None
            }
        }
    }

    fn set(&self, theme: Theme) -> Result<(), StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(&self.key, theme.as_str())
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }
}

fn media_query(query: &str) -> Option<MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}

/// The `prefers-color-scheme` media signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryTheme;

impl MediaQueryTheme {
    /// Call `on_change` with the new dark-mode flag whenever the system
    /// preference changes, for the lifetime of the page.
    pub fn watch(on_change: impl Fn(bool) + 'static) {
        let Some(query) = media_query(DARK_QUERY) else {
            return;
        };
        let callback = Closure::<dyn Fn(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            on_change(event.matches());
        });
        if let Err(err) =
            query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "unable to watch the system theme");
        }
        callback.forget();
    }
}

impl SystemTheme for MediaQueryTheme {
    fn prefers_dark(&self) -> Option<bool> {
        if media_query(DARK_QUERY).is_some_and(|q| q.matches()) {
            return Some(true);
        }
        if media_query(LIGHT_QUERY).is_some_and(|q| q.matches()) {
            return Some(false);
        }
        None
    }
}
