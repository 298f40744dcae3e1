//! Inventory text.

use nletext_core::InventoryView;

/// Renders the inventory as `letter: description` lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct InventoryFormatter;

impl InventoryFormatter {
    /// Create a formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render `inventory`; an empty inventory renders as an empty string.
    pub fn format(&self, inventory: &InventoryView<'_>) -> String {
        inventory
            .entries()
            .map(|e| format!("{}: {}", e.letter, e.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nletext_test_utils::fixtures::{glyph, monk_scene};
    use nletext_test_utils::OwnedObservation;

    #[test]
    fn monk_inventory() {
        let obs = monk_scene();
        assert_eq!(
            InventoryFormatter::new().format(&obs.view().unwrap().inventory),
            "a: a blessed +1 quarterstaff (weapon in hands)\n\
             b: an uncursed +0 cloak of magic resistance (being worn)"
        );
    }

    #[test]
    fn empty_inventory() {
        assert_eq!(InventoryFormatter::new().format(&InventoryView::empty()), "");
    }

    #[test]
    fn stops_at_empty_description() {
        let mut obs = OwnedObservation::filled(glyph::DARK_AREA);
        obs.set_inventory(&[('a', "a quarterstaff"), ('b', ""), ('c', "a cloak")]);
        assert_eq!(
            InventoryFormatter::new().format(&obs.view().unwrap().inventory),
            "a: a quarterstaff"
        );
    }
}
