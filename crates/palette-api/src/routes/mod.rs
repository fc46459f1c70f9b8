//! # API Route Modules
//!
//! - `palettes` — CRUD over the `palettes` document collection.

pub mod palettes;
