//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Services keep their small amount of UI state in `Cell`s: everything runs on
//! the page's single event loop.

pub mod animation_service;
pub mod diagnostics;
pub mod navigation_service;
pub mod render_service;
pub mod scroll_service;
pub mod theme_service;
