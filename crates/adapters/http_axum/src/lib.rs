//! # folio-adapter-http-axum
//!
//! Development preview server built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **static site root** so the page's same-origin fetch of the
//!   profile document works exactly as in production
//! - Expose **inspection endpoints**: `/api/profile` (the parsed document)
//!   and `/api/render` (the render plan with per-section failures)
//! - Read the profile document from disk ([`source::FileProfileSource`])
//!
//! ## Dependency rule
//! Depends on `folio-app` (ports, services, config) and `folio-domain`.
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod source;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
