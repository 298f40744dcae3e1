//! Inventory arrays (`inv_letters`, `inv_strs`) and the entries they zip to.

use crate::error::BoundsError;

/// One inventory slot: the selection letter and the item description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryEntry {
    /// Selection letter (`a`-`z`, `A`-`Z`, `$`, `#`).
    pub letter: char,
    /// Item description as shown in the inventory menu.
    pub description: String,
}

/// Read-only view of the parallel inventory arrays.
///
/// `strs` is a row-major `rows x width` byte matrix; each row is a
/// NUL-terminated Latin-1 description for the letter at the same index.
#[derive(Clone, Copy, Debug)]
pub struct InventoryView<'a> {
    letters: &'a [u8],
    strs: &'a [u8],
    rows: usize,
    width: usize,
}

impl<'a> InventoryView<'a> {
    /// Wrap the inventory arrays.
    pub fn new(
        letters: &'a [u8],
        strs: &'a [u8],
        rows: usize,
        width: usize,
    ) -> Result<Self, BoundsError> {
        let expected = rows.checked_mul(width).unwrap_or(usize::MAX);
        if strs.len() != expected {
            return Err(BoundsError::ShapeMismatch {
                what: "inv_strs",
                expected,
                actual: strs.len(),
            });
        }
        Ok(Self {
            letters,
            strs,
            rows,
            width,
        })
    }

    /// An inventory with no slots.
    pub fn empty() -> Self {
        Self {
            letters: &[],
            strs: &[],
            rows: 0,
            width: 0,
        }
    }

    /// Entries in slot order, ending at the first NUL letter, the first
    /// empty description, or the end of the shorter array.
    pub fn entries(&self) -> impl Iterator<Item = InventoryEntry> + 'a {
        let strs = self.strs;
        let width = self.width;
        self.letters
            .iter()
            .take(self.rows)
            .enumerate()
            .map(move |(i, &letter)| {
                let row = &strs[i * width..(i + 1) * width];
                (letter, decode_cstr(row))
            })
            .take_while(|(letter, description)| *letter != 0 && !description.is_empty())
            .map(|(letter, description)| InventoryEntry {
                letter: char::from(letter),
                description,
            })
    }
}

/// Decode a NUL-terminated Latin-1 byte string.
pub fn decode_cstr(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| char::from(b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(items: &[&str], width: usize) -> Vec<u8> {
        let mut out = vec![0u8; items.len() * width];
        for (i, s) in items.iter().enumerate() {
            out[i * width..i * width + s.len()].copy_from_slice(s.as_bytes());
        }
        out
    }

    #[test]
    fn zips_until_nul_letter() {
        let strs = matrix(&["a quarterstaff", "a cloak", ""], 20);
        let letters = [b'a', b'b', 0];
        let inv = InventoryView::new(&letters, &strs, 3, 20).unwrap();
        let entries: Vec<_> = inv.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].letter, 'b');
        assert_eq!(entries[1].description, "a cloak");
    }

    #[test]
    fn truncates_at_missing_description() {
        let strs = matrix(&["a quarterstaff", "", "a cloak"], 20);
        let letters = [b'a', b'b', b'c'];
        let inv = InventoryView::new(&letters, &strs, 3, 20).unwrap();
        assert_eq!(inv.entries().count(), 1);
    }

    #[test]
    fn letters_longer_than_rows() {
        let strs = matrix(&["a quarterstaff"], 20);
        let letters = [b'a', b'b'];
        let inv = InventoryView::new(&letters, &strs, 1, 20).unwrap();
        assert_eq!(inv.entries().count(), 1);
    }

    #[test]
    fn latin1_descriptions_survive() {
        let mut row = vec![0u8; 8];
        row[..3].copy_from_slice(&[b'a', 0xe9, b'z']);
        assert_eq!(decode_cstr(&row), "a\u{e9}z");
    }

    #[test]
    fn rejects_misshapen_strs() {
        assert!(InventoryView::new(&[b'a'], &[0u8; 7], 1, 8).is_err());
        assert_eq!(InventoryView::empty().entries().count(), 0);
    }
}
