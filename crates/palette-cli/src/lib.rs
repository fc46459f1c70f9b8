//! # palette-cli — Terminal front-end for the palette catalog
//!
//! Provides the `palette` command-line interface.
//!
//! ## Subcommands
//!
//! - `palette list [--tag TAG]...` — palette cards, OR-filtered by tag.
//! - `palette show ID` — one palette with its text pair overrides.
//! - `palette create --title ...` — create through the edit form.
//! - `palette update ID ...` — edit through the edit form.
//! - `palette delete ID [--yes]` — delete after confirmation.
//! - `palette contrast COLOR [--pair BG:TEXT]...` — resolve a text color offline.
//!
//! ```bash
//! palette list --tag bold --tag playful
//! palette create --title Dusk --tag minimal --color '#112233' --pair '#112233:#eeeeee'
//! palette update 3f2a... --set-color '0=#ffffff' --untag bold
//! ```

pub mod contrast;
pub mod palettes;
pub mod render;
