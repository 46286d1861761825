//! Keyboard focus movement over the booth grid.
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
    RowStart,
    RowEnd,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "Home" => Some(Self::RowStart),
            "End" => Some(Self::RowEnd),
            _ => None,
        }
    }
}

/// Enter and Space activate the focused tile.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Row-major grid geometry; the last row may be short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridNav {
    len: usize,
    columns: usize,
}

impl GridNav {
    #[must_use]
    pub const fn new(len: usize, columns: usize) -> Self {
        Self { len, columns }
    }

    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.len(), catalog.columns())
    }

    /// One step from `from`. `None` at an edge; there is no wrapping.
    #[must_use]
    pub fn step(&self, from: usize, key: NavKey) -> Option<usize> {
        if self.columns == 0 || from >= self.len {
            return None;
        }
        let col = from % self.columns;
        let row_start = from - col;
        let row_end = (row_start + self.columns - 1).min(self.len - 1);
        let target = match key {
            NavKey::Left => from.checked_sub(1).filter(|_| col > 0)?,
            NavKey::Right => Some(from + 1).filter(|&next| next <= row_end)?,
            NavKey::Up => from.checked_sub(self.columns)?,
            NavKey::Down => Some(from + self.columns).filter(|&next| next < self.len)?,
            NavKey::RowStart => row_start,
            NavKey::RowEnd => row_end,
        };
        (target != from).then_some(target)
    }

    /// Move in `key`'s direction until `is_open` accepts a cell.
    ///
    /// Home/End pick the first/last open cell of the row. Returns `None` if
    /// nothing open lies that way, so the caller keeps focus where it is.
    #[must_use]
    pub fn next_open(
        &self,
        from: usize,
        key: NavKey,
        is_open: impl Fn(usize) -> bool,
    ) -> Option<usize> {
        match key {
            NavKey::RowStart | NavKey::RowEnd => {
                let start = self.step(from, NavKey::RowStart).unwrap_or(from);
                let end = self.step(from, NavKey::RowEnd).unwrap_or(from);
                let found = if key == NavKey::RowStart {
                    (start..=end).find(|&idx| is_open(idx))
                } else {
                    (start..=end).rev().find(|&idx| is_open(idx))
                };
                found.filter(|&idx| idx != from)
            }
            _ => {
                let mut cursor = from;
                loop {
                    cursor = self.step(cursor, key)?;
                    if is_open(cursor) {
                        return Some(cursor);
                    }
                }
            }
        }
    }

    /// First cell `is_open` accepts, for initial focus.
    #[must_use]
    pub fn first_open(&self, is_open: impl Fn(usize) -> bool) -> Option<usize> {
        (0..self.len).find(|&idx| is_open(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridNav = GridNav::new(24, 6);

    #[test]
    fn steps_clamp_at_edges() {
        assert_eq!(GRID.step(0, NavKey::Left), None);
        assert_eq!(GRID.step(0, NavKey::Up), None);
        assert_eq!(GRID.step(5, NavKey::Right), None);
        assert_eq!(GRID.step(23, NavKey::Down), None);
        assert_eq!(GRID.step(6, NavKey::Left), None);
    }

    #[test]
    fn steps_move_one_cell() {
        assert_eq!(GRID.step(0, NavKey::Right), Some(1));
        assert_eq!(GRID.step(7, NavKey::Left), Some(6));
        assert_eq!(GRID.step(7, NavKey::Up), Some(1));
        assert_eq!(GRID.step(7, NavKey::Down), Some(13));
        assert_eq!(GRID.step(9, NavKey::RowStart), Some(6));
        assert_eq!(GRID.step(9, NavKey::RowEnd), Some(11));
        assert_eq!(GRID.step(6, NavKey::RowStart), None);
    }

    #[test]
    fn short_last_row_is_respected() {
        let grid = GridNav::new(8, 3);
        assert_eq!(grid.step(4, NavKey::Down), Some(7));
        assert_eq!(grid.step(5, NavKey::Down), None);
        assert_eq!(grid.step(6, NavKey::RowEnd), Some(7));
        assert_eq!(grid.step(7, NavKey::Right), None);
    }

    #[test]
    fn next_open_skips_closed_cells() {
        // A2 (1) and B1 (6) closed.
        let closed = [1_usize, 6];
        let open = |idx: usize| !closed.contains(&idx);
        assert_eq!(GRID.next_open(0, NavKey::Right, open), Some(2));
        assert_eq!(GRID.next_open(0, NavKey::Down, open), Some(12));
        assert_eq!(GRID.next_open(7, NavKey::RowStart, open), None);
        assert_eq!(GRID.next_open(8, NavKey::RowStart, open), Some(7));
        assert_eq!(GRID.next_open(2, NavKey::Left, open), Some(0));
    }

    #[test]
    fn next_open_stays_put_when_nothing_is_open() {
        assert_eq!(GRID.next_open(3, NavKey::Right, |_| false), None);
        assert_eq!(GRID.first_open(|idx| idx > 4), Some(5));
    }

    #[test]
    fn key_names_map() {
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Down));
        assert_eq!(NavKey::from_key("End"), Some(NavKey::RowEnd));
        assert_eq!(NavKey::from_key("x"), None);
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Enter"));
        assert!(!is_activation_key("Tab"));
    }
}
