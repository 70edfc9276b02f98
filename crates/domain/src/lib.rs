//! # folio-domain
//!
//! Pure domain model for the folio academic portfolio page.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, geometry
//! - Define the **Profile Document** (the JSON content of the page)
//! - Define the **Theme** preference (light/dark)
//! - Format content: teaching terms, skill keys, funding lines
//! - Project a document into a **render plan** (container id → fragment)
//! - Compute layout decisions: popover placement, chrome visibility,
//!   navigation scroll targets, section animation plans
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser APIs.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod geometry;

pub mod animation;
pub mod navigation;
pub mod popover;
pub mod profile;
pub mod render;
pub mod scroll;
pub mod term;
pub mod text;
pub mod theme;
