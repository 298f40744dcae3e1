//! Per-call input bundle and output record.

use crate::grid::{GlyphGrid, TerminalGrid};
use crate::id::TtyCursor;
use crate::inventory::InventoryView;
use crate::status::StatusVector;

/// Everything the encoder reads for one reset/step, borrowed from the
/// environment's buffers for the duration of the call.
#[derive(Clone, Copy, Debug)]
pub struct RawObservation<'a> {
    /// Dungeon glyph map.
    pub glyphs: GlyphGrid<'a>,
    /// Bottom-line status vector.
    pub blstats: StatusVector<'a>,
    /// Rendered terminal.
    pub tty_chars: TerminalGrid<'a>,
    /// Inventory arrays.
    pub inventory: InventoryView<'a>,
    /// Terminal cursor.
    pub tty_cursor: TtyCursor,
}

/// The five text sections produced for one observation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextObservation {
    /// Surroundings of the player.
    pub text_glyphs: String,
    /// Current message or menu.
    pub text_message: String,
    /// Labelled status lines.
    pub text_blstats: String,
    /// Lettered inventory list.
    pub text_inventory: String,
    /// What the cursor points at.
    pub text_cursor: String,
}

impl TextObservation {
    /// Section names paired with their text, in canonical order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("text_glyphs", &self.text_glyphs),
            ("text_message", &self.text_message),
            ("text_blstats", &self.text_blstats),
            ("text_inventory", &self.text_inventory),
            ("text_cursor", &self.text_cursor),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_in_canonical_order() {
        let t = TextObservation {
            text_cursor: "Yourself a monk".into(),
            ..Default::default()
        };
        let names: Vec<&str> = t.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            [
                "text_glyphs",
                "text_message",
                "text_blstats",
                "text_inventory",
                "text_cursor"
            ]
        );
        assert_eq!(t.fields()[4].1, "Yourself a monk");
    }
}
