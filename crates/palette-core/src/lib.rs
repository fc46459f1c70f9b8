#![deny(missing_docs)]

//! # palette-core — Foundational Types for the Palette Catalog
//!
//! Every other crate in the workspace depends on this one. It has no
//! internal crate dependencies and performs no I/O: everything here is a
//! pure function or an in-memory state transition.
//!
//! ## Components
//!
//! - [`contrast`] — picks a readable text color for a swatch background,
//!   honoring explicit [`TextPair`] overrides.
//! - [`normalize`] — coerces raw stored documents into well-formed
//!   [`Palette`] records.
//! - [`filter`] — OR-based tag filtering driven by a [`TagSet`].
//! - [`form`] — the edit buffer for one in-progress palette.
//! - [`tag`] — the canonical Minimal/Bold/Playful vocabulary.
//!
//! ## Design Principles
//!
//! 1. **One representation for tag toggles.** The three boolean flags the
//!    UI shows are derived from a [`TagSet`]; there is no second list to
//!    keep in sync.
//!
//! 2. **Storage is lenient, the domain is not.** Documents in the store may
//!    hold anything. [`normalize::normalize`] is the single path from a raw
//!    document to a [`Palette`], and its output always satisfies the
//!    record invariants.

pub mod contrast;
pub mod error;
pub mod filter;
pub mod form;
pub mod normalize;
pub mod palette;
pub mod tag;

// Re-export primary types at crate root for ergonomic imports.
pub use contrast::{contrast_text, luminance, resolve_text_color, Rgb, BLACK, WHITE};
pub use error::{ColorError, FormError, NormalizeError};
pub use filter::filter_palettes;
pub use form::{FormMode, PaletteForm, TextPairField};
pub use normalize::normalize;
pub use palette::{Palette, PaletteDraft, PaletteId, TextPair, UNTITLED};
pub use tag::{BadgeColor, Tag, TagSet};
