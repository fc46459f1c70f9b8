//! # Tag Filtering
//!
//! OR semantics: a palette is shown when at least one of its tags matches
//! an active toggle, ignoring case on both sides. With no toggle active
//! every palette is shown.

use crate::palette::Palette;
use crate::tag::TagSet;

/// Palettes visible under the given filter toggles, in input order.
pub fn filter_palettes<'a>(palettes: &'a [Palette], active: &TagSet) -> Vec<&'a Palette> {
    if active.is_empty() {
        return palettes.iter().collect();
    }
    palettes
        .iter()
        .filter(|palette| matches_any(palette, active))
        .collect()
}

/// Whether any of the palette's tags is in `active`.
pub fn matches_any(palette: &Palette, active: &TagSet) -> bool {
    palette
        .tags
        .iter()
        .any(|tag| active.iter().any(|on| on.key().eq_ignore_ascii_case(tag)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteId;
    use crate::tag::Tag;

    fn palette(id: &str, tags: &[&str]) -> Palette {
        Palette {
            id: PaletteId::new(id),
            title: id.to_string(),
            notes: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            colors: Vec::new(),
            text_pairs: Vec::new(),
        }
    }

    fn fixtures() -> Vec<Palette> {
        vec![
            palette("p1", &["Minimal"]),
            palette("p2", &["Bold", "Playful"]),
            palette("p3", &["BOLD"]),
            palette("p4", &[]),
            palette("p5", &["playful", "retro"]),
        ]
    }

    fn ids(palettes: &[&Palette]) -> Vec<String> {
        palettes.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn no_active_toggle_returns_everything_in_order() {
        let all = fixtures();
        let visible = filter_palettes(&all, &TagSet::empty());
        assert_eq!(ids(&visible), vec!["p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn all_toggles_on_hide_untagged_palettes() {
        let all = fixtures();
        let visible = filter_palettes(&all, &TagSet::all());
        assert_eq!(ids(&visible), vec!["p1", "p2", "p3", "p5"]);
    }

    #[test]
    fn bold_only_after_clearing_all_toggles() {
        let all = fixtures();
        let mut toggles = TagSet::all();
        for tag in Tag::ALL {
            toggles.toggle(tag);
        }
        assert!(toggles.is_empty());
        toggles.toggle(Tag::Bold);

        let visible = filter_palettes(&all, &toggles);
        assert_eq!(ids(&visible), vec!["p2", "p3"]);
    }

    #[test]
    fn or_semantics_across_toggles() {
        let all = fixtures();
        let toggles: TagSet = [Tag::Minimal, Tag::Playful].into_iter().collect();
        let visible = filter_palettes(&all, &toggles);
        assert_eq!(ids(&visible), vec!["p1", "p2", "p5"]);
    }

    #[test]
    fn unknown_tags_never_match() {
        let all = vec![palette("only-retro", &["retro"])];
        assert!(filter_palettes(&all, &TagSet::all()).is_empty());
    }
}
