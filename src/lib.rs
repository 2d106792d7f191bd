// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Client-side engine for a static academic homepage.
//!
//! Folio drives two independent behaviors of an otherwise static page:
//! scroll-linked visual effects (navbar state, header parallax, active
//! nav-link highlighting, header fade) and rendering of a publication
//! list fetched from a static JSON document.
//!
//! # Key entry points
//!
//! - [`config::PageConfig`] - element selectors and numeric tuning,
//!   resolved once at startup
//! - [`scroll::FrameEffects`] - per-frame visual state derived from
//!   sampled scroll geometry
//! - [`model::ScholarStats`] - the fetched citation/publication document
//! - [`view::PublicationItemView`] - everything a publication DOM
//!   fragment needs, built without touching the DOM
//!
//! # Architecture
//!
//! The core modules are pure Rust and carry the unit tests; the `web`
//! module (behind the `web` cargo feature) compiles to WASM and wires the
//! core into the browser: a coalesced scroll listener applying one update
//! per animation frame, and three uncoordinated fetch tasks populating the
//! stats line and the two publication containers.

pub mod config;
pub mod error;
pub mod model;
pub mod scroll;
pub mod view;

#[cfg(feature = "web")]
pub mod web;
