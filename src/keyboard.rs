//! Keyboard layout description and the key-adjacency table built from it.

use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// Placeholder for a key position that produces no character.
const BLANK: u8 = b' ';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("key row mismatch: {shifted} shifted vs {unshifted} unshifted positions")]
    RowLengthMismatch { shifted: usize, unshifted: usize },
}

/// One physical row of keys.
///
/// `shifted[i]` and `unshifted[i]` belong to the same key. A space marks a
/// position where the key produces nothing in that shift state.
#[derive(Debug, Clone, Copy)]
pub struct KeyRow {
    shifted: &'static str,
    unshifted: &'static str,
}

impl KeyRow {
    /// Compile-time constructor for static tables; panics during const
    /// evaluation on mismatched rows. Use [`KeyRow::try_new`] otherwise.
    pub const fn new(shifted: &'static str, unshifted: &'static str) -> Self {
        assert!(
            shifted.len() == unshifted.len(),
            "shifted and unshifted rows must have the same length"
        );
        Self { shifted, unshifted }
    }

    pub fn try_new(shifted: &'static str, unshifted: &'static str) -> Result<Self, LayoutError> {
        if shifted.len() != unshifted.len() {
            return Err(LayoutError::RowLengthMismatch {
                shifted: shifted.len(),
                unshifted: unshifted.len(),
            });
        }
        Ok(Self { shifted, unshifted })
    }

    pub fn len(&self) -> usize {
        self.unshifted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unshifted.is_empty()
    }

    /// Characters produced by the key at `col`, unshifted first. Out of range
    /// columns and blank positions yield nothing.
    pub fn key_at(&self, col: usize) -> Vec<char> {
        [self.unshifted, self.shifted]
            .iter()
            .filter_map(|variant| variant.as_bytes().get(col).copied())
            .filter(|&b| b != BLANK)
            .map(char::from)
            .collect()
    }

    /// Characters on the keys directly left and right of `col`, in both
    /// shift states.
    pub fn beside(&self, col: usize) -> Vec<char> {
        let mut out = Vec::with_capacity(4);
        if let Some(left) = col.checked_sub(1) {
            out.extend(self.key_at(left));
        }
        out.extend(self.key_at(col + 1));
        out
    }
}

/// Rows from the digit row down to the bottom letter row.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    rows: &'static [KeyRow],
}

impl Layout {
    pub const fn new(rows: &'static [KeyRow]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[KeyRow] {
        self.rows
    }

    /// Everything physically around the key at (`row`, `col`): the same-row
    /// neighbours plus the keys at the same column in the rows above and
    /// below. The returned vector is freshly allocated per call.
    pub fn around(&self, row: usize, col: usize) -> Vec<char> {
        let Some(current) = self.rows.get(row) else {
            return Vec::new();
        };

        let mut out = current.beside(col);
        if let Some(above) = row.checked_sub(1).and_then(|r| self.rows.get(r)) {
            out.extend(above.key_at(col));
        }
        if let Some(below) = self.rows.get(row + 1) {
            out.extend(below.key_at(col));
        }
        out
    }
}

const QWERTY_ROWS: [KeyRow; 4] = [
    KeyRow::new("~!@#$%^&*()_+", "`1234567890-="),
    KeyRow::new(" QWERTYUIOP{}|", " qwertyuiop[]\\"),
    KeyRow::new(" ASDFGHJKL:\"", " asdfghjkl;'"),
    KeyRow::new(" ZXCVBNM<>?", " zxcvbnm,./"),
];

/// US QWERTY, main block only.
pub const QWERTY: Layout = Layout::new(&QWERTY_ROWS);

/// For every character a layout can produce, the characters that must not
/// directly follow it.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyTable {
    pub(crate) illegal_next: HashMap<char, HashSet<char>>,
}

impl AdjacencyTable {
    pub fn build(layout: &Layout) -> Self {
        let mut illegal_next: HashMap<char, HashSet<char>> = HashMap::new();

        for (row_idx, row) in layout.rows().iter().enumerate() {
            for col in 0..row.len() {
                let around = layout.around(row_idx, col);
                let same_key = row.key_at(col);

                for &ch in &same_key {
                    let entry = illegal_next.entry(ch).or_default();
                    entry.extend(around.iter().copied());
                    // shifted and unshifted characters of one key count as neighbours
                    entry.extend(same_key.iter().copied());
                }
            }
        }

        debug!(keys = illegal_next.len(), "built adjacency table");
        Self { illegal_next }
    }

    pub fn qwerty() -> Self {
        Self::build(&QWERTY)
    }

    /// True when `next` is too close to `prev` to follow it. Characters the
    /// layout never produced have no neighbours.
    pub fn is_illegal_next(&self, prev: char, next: char) -> bool {
        self.illegal_next
            .get(&prev)
            .is_some_and(|set| set.contains(&next))
    }

    pub fn neighbours(&self, ch: char) -> Option<&HashSet<char>> {
        self.illegal_next.get(&ch)
    }

    pub fn len(&self) -> usize {
        self.illegal_next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.illegal_next.is_empty()
    }
}
