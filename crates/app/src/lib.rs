//! # folio-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — the persisted theme preference
//!   - `SystemTheme` — the system light/dark signal
//!   - `ParticleBackground` — the optional decorative plugin
//!   - `ProfileSource` — obtains the profile document
//!   - `Page` — the host document (elements, classes, geometry, scrolling)
//!   - `Timers` — delays, deferred tasks, animation frames
//! - Define **driving/inbound** use-cases as services:
//!   - `ThemeService`, `ScrollService`, `AnimationService`,
//!     `NavigationService`, `RenderService`, `Diagnostics`
//! - Sequence page initialization explicitly (`Startup`)
//!
//! ## Dependency rule
//! Depends on `folio-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod ports;
pub mod services;
pub mod startup;

#[cfg(test)]
pub(crate) mod test_support;
