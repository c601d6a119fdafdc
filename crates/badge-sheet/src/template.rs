//! Sheet templates: grid shape, face image refs and the duplex slot
//! permutations.
//!
//! The back-face order is the permutation that makes slot *k* land in
//! the same physical position as front slot *k* once the printed sheet
//! is flipped along the printer's duplex axis. It depends on which paper
//! edge the duplex pass binds on — a physical-world convention the
//! engine cannot derive from grid dimensions — so every template carries
//! its orders as hand-verified data.
//!
//! Worked example, 2×2 grid with a long-edge flip:
//!
//! ```text
//!  front        back (as printed)     back (after flip)
//! +---+---+     +---+---+             +---+---+
//! | 0 | 1 |     | 1 | 0 |     →       | 0 | 1 |
//! +---+---+     +---+---+             +---+---+
//! | 2 | 3 |     | 3 | 2 |             | 2 | 3 |
//! +---+---+     +---+---+             +---+---+
//! ```
//!
//! Each row's columns swap: `order_back = [1, 0, 3, 2]` while
//! `order_front` stays identity.

use std::path::PathBuf;

use badge_layout::Face;

use crate::types::{Result, SheetError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Columns × rows of card slots on one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridShape {
    pub columns: usize,
    pub rows: usize,
}

/// A printable sheet layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Template {
    pub id: String,
    pub per_sheet: usize,
    pub grid: GridShape,
    /// Chunk position → slot index, front face.
    pub order_front: Vec<usize>,
    /// Chunk position → slot index, back face (duplex-aligned).
    pub order_back: Vec<usize>,
    /// Background artwork refs; carried through to the renderer's
    /// caller, never decoded here.
    pub front_image: Option<PathBuf>,
    pub back_image: Option<PathBuf>,
}

impl Template {
    /// The classic one-card 100×100mm sheet: a single slot, so the
    /// duplex flip trivially leaves it in place.
    pub fn single() -> Self {
        Self {
            id: "single".to_string(),
            per_sheet: 1,
            grid: GridShape {
                columns: 1,
                rows: 1,
            },
            order_front: vec![0],
            order_back: vec![0],
            front_image: None,
            back_image: None,
        }
    }

    /// Four cards per sheet in a 2×2 grid, duplexed along the long edge:
    /// each row's two columns swap on the back.
    pub fn quad() -> Self {
        Self {
            id: "quad".to_string(),
            per_sheet: 4,
            grid: GridShape {
                columns: 2,
                rows: 2,
            },
            order_front: vec![0, 1, 2, 3],
            order_back: vec![1, 0, 3, 2],
            front_image: None,
            back_image: None,
        }
    }

    /// Slot order for one face.
    pub fn order(&self, face: Face) -> &[usize] {
        match face {
            Face::Front => &self.order_front,
            Face::Back => &self.order_back,
        }
    }

    /// Check the structural invariants: the grid covers exactly
    /// `per_sheet` slots and both orders are permutations of
    /// `0..per_sheet`.
    pub fn validate(&self) -> Result<()> {
        if self.per_sheet == 0 {
            return Err(SheetError::EmptyTemplate);
        }
        if self.grid.columns * self.grid.rows != self.per_sheet {
            return Err(SheetError::GridMismatch {
                columns: self.grid.columns,
                rows: self.grid.rows,
                per_sheet: self.per_sheet,
            });
        }
        for (face, order) in [("front", &self.order_front), ("back", &self.order_back)] {
            if !is_permutation(order, self.per_sheet) {
                return Err(SheetError::InvalidOrder {
                    face,
                    per_sheet: self.per_sheet,
                });
            }
        }
        Ok(())
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &slot in order {
        if slot >= len || seen[slot] {
            return false;
        }
        seen[slot] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_are_valid() {
        assert!(Template::single().validate().is_ok());
        assert!(Template::quad().validate().is_ok());
    }

    #[test]
    fn test_single_orders_are_identity() {
        let t = Template::single();
        assert_eq!(t.order_front, vec![0]);
        assert_eq!(t.order_back, vec![0]);
    }

    #[test]
    fn test_quad_back_order_is_an_involution() {
        let t = Template::quad();
        // Applying the duplex permutation twice returns every index home.
        for i in 0..t.per_sheet {
            assert_eq!(t.order_back[t.order_back[i]], i);
        }
        assert_eq!(t.order_front, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_validate_rejects_grid_mismatch() {
        let mut t = Template::quad();
        t.grid.rows = 3;
        assert!(matches!(
            t.validate(),
            Err(SheetError::GridMismatch { per_sheet: 4, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_permutations() {
        let mut t = Template::quad();
        t.order_back = vec![1, 1, 3, 2];
        assert!(matches!(
            t.validate(),
            Err(SheetError::InvalidOrder { face: "back", .. })
        ));

        let mut t = Template::quad();
        t.order_front = vec![0, 1, 2];
        assert!(t.validate().is_err());

        let mut t = Template::quad();
        t.order_front = vec![0, 1, 2, 4];
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_slots() {
        let mut t = Template::single();
        t.per_sheet = 0;
        t.order_front = vec![];
        t.order_back = vec![];
        t.grid = GridShape {
            columns: 0,
            rows: 0,
        };
        assert!(matches!(t.validate(), Err(SheetError::EmptyTemplate)));
    }
}
