//! Overlay placement inference over a fixed square cell grid.
//!
//! A sparse set of selected cells is reduced to two derived facts: a semantic
//! anchor ("top left", "center", ...) and an arrangement classification
//! (horizontal, vertical, diagonal, scattered). Both are total, pure functions
//! of the selection; selection order never matters.

/// Cells per side. The row stride equals this, which is what makes the
/// diagonal deltas `GRID_SIDE + 1` and `GRID_SIDE - 1`; substituting another
/// side length generalizes every rule below to an N x N grid.
pub const GRID_SIDE: usize = 5;

/// Total cell count (`GRID_SIDE` squared), indices `0..GRID_CELLS` row-major.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// A set of selected cell indices, kept sorted and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridSelection {
    cells: Vec<usize>,
}

/// Vertical third of the grid the selection centers on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalBand {
    Top,
    Center,
    Bottom,
}

/// Horizontal third of the grid the selection centers on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalBand {
    Left,
    Center,
    Right,
}

/// Semantic screen-region label derived from the average selected cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub vertical: VerticalBand,
    pub horizontal: HorizontalBand,
}

impl Anchor {
    /// The label embedded into text-rendering instructions, vertical band
    /// first. The dead-center anchor collapses to plain `"center"`.
    pub fn description(self) -> &'static str {
        use HorizontalBand as H;
        use VerticalBand as V;
        match (self.vertical, self.horizontal) {
            (V::Center, H::Center) => "center",
            (V::Top, H::Left) => "top left",
            (V::Top, H::Center) => "top center",
            (V::Top, H::Right) => "top right",
            (V::Center, H::Left) => "center left",
            (V::Center, H::Right) => "center right",
            (V::Bottom, H::Left) => "bottom left",
            (V::Bottom, H::Center) => "bottom center",
            (V::Bottom, H::Right) => "bottom right",
        }
    }
}

/// How the selected cells line up spatially.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrangement {
    /// Fewer than two cells selected; nothing to classify yet.
    Default,
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Top-right to bottom-left.
    DiagonalUp,
    /// Evenly spaced on some other constant stride.
    CustomLinear,
    /// Uneven spacing.
    Scattered,
}

impl Arrangement {
    /// Wording embedded into generation prompts. The unclassified default
    /// falls back to plain horizontal.
    pub fn orientation_prompt(self) -> &'static str {
        match self {
            Arrangement::Default => "horizontal",
            Arrangement::Horizontal => "strictly horizontal orientation (side-by-side)",
            Arrangement::Vertical => "strictly vertical orientation (top-to-bottom)",
            Arrangement::DiagonalDown => "diagonal orientation (top-left to bottom-right)",
            Arrangement::DiagonalUp => "diagonal orientation (top-right to bottom-left)",
            Arrangement::CustomLinear => "custom alignment",
            Arrangement::Scattered => "custom scattered layout",
        }
    }

    /// Short label for live display; the default prompts the user to select.
    pub fn display_label(self) -> &'static str {
        match self {
            Arrangement::Default => "Click grid to plan text path",
            Arrangement::Horizontal => "Horizontal Path",
            Arrangement::Vertical => "Vertical Path",
            Arrangement::DiagonalDown => "Diagonal (TL-BR)",
            Arrangement::DiagonalUp => "Diagonal (TR-BL)",
            Arrangement::CustomLinear => "Custom Linear",
            Arrangement::Scattered => "Custom Scattered",
        }
    }
}

impl GridSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from arbitrary indices: out-of-range cells are
    /// dropped, duplicates collapse, order is irrelevant.
    pub fn from_cells(cells: impl IntoIterator<Item = usize>) -> Self {
        let mut cells: Vec<usize> = cells.into_iter().filter(|&c| c < GRID_CELLS).collect();
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
    }

    /// Adds the cell if absent, removes it if present. Out-of-range is a no-op.
    pub fn toggle(&mut self, cell: usize) {
        if cell >= GRID_CELLS {
            return;
        }
        match self.cells.binary_search(&cell) {
            Ok(pos) => {
                self.cells.remove(pos);
            }
            Err(pos) => self.cells.insert(pos, cell),
        }
    }

    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// The semantic anchor: average row and column, independently bucketed
    /// into thirds. An empty selection anchors at the center.
    pub fn anchor(&self) -> Anchor {
        let center = Anchor {
            vertical: VerticalBand::Center,
            horizontal: HorizontalBand::Center,
        };
        if self.cells.is_empty() {
            return center;
        }

        let n = self.cells.len() as f64;
        let avg_row = self.cells.iter().map(|&c| (c / GRID_SIDE) as f64).sum::<f64>() / n;
        let avg_col = self.cells.iter().map(|&c| (c % GRID_SIDE) as f64).sum::<f64>() / n;

        let lo = GRID_SIDE as f64 * 0.3;
        let hi = GRID_SIDE as f64 * 0.7;

        let vertical = if avg_row < lo {
            VerticalBand::Top
        } else if avg_row > hi {
            VerticalBand::Bottom
        } else {
            VerticalBand::Center
        };
        let horizontal = if avg_col < lo {
            HorizontalBand::Left
        } else if avg_col > hi {
            HorizontalBand::Right
        } else {
            HorizontalBand::Center
        };

        Anchor {
            vertical,
            horizontal,
        }
    }

    /// Shorthand for `anchor().description()`.
    pub fn position_description(&self) -> &'static str {
        self.anchor().description()
    }

    /// Classifies the selection by its consecutive index differences. The
    /// cells are already sorted, so a line shows up as one constant delta:
    /// `1` horizontal, `GRID_SIDE` vertical, `GRID_SIDE +/- 1` the two
    /// diagonals, anything else a custom stride. Non-constant deltas are
    /// scattered.
    pub fn arrangement(&self) -> Arrangement {
        if self.cells.len() < 2 {
            return Arrangement::Default;
        }

        let diffs: Vec<usize> = self.cells.windows(2).map(|w| w[1] - w[0]).collect();
        let first = diffs[0];
        if !diffs.iter().all(|&d| d == first) {
            return Arrangement::Scattered;
        }

        match first {
            1 => Arrangement::Horizontal,
            d if d == GRID_SIDE => Arrangement::Vertical,
            d if d == GRID_SIDE + 1 => Arrangement::DiagonalDown,
            d if d == GRID_SIDE - 1 => Arrangement::DiagonalUp,
            _ => Arrangement::CustomLinear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_anchors_center() {
        assert_eq!(GridSelection::new().position_description(), "center");
    }

    #[test]
    fn corner_cell_is_top_left() {
        let sel = GridSelection::from_cells([0]);
        assert_eq!(sel.position_description(), "top left");
    }

    #[test]
    fn exact_center_cell_is_center() {
        // Cell 12: row 2, col 2.
        let sel = GridSelection::from_cells([12]);
        assert_eq!(sel.position_description(), "center");
    }

    #[test]
    fn bottom_right_corner() {
        let sel = GridSelection::from_cells([24]);
        assert_eq!(sel.position_description(), "bottom right");
    }

    #[test]
    fn single_axis_offsets_keep_center_on_the_other() {
        assert_eq!(GridSelection::from_cells([2]).position_description(), "top center");
        assert_eq!(GridSelection::from_cells([10]).position_description(), "center left");
    }

    #[test]
    fn constant_delta_classification() {
        assert_eq!(
            GridSelection::from_cells([5, 6, 7]).arrangement(),
            Arrangement::Horizontal
        );
        assert_eq!(
            GridSelection::from_cells([2, 7, 12]).arrangement(),
            Arrangement::Vertical
        );
        assert_eq!(
            GridSelection::from_cells([0, 6, 12, 18, 24]).arrangement(),
            Arrangement::DiagonalDown
        );
        assert_eq!(
            GridSelection::from_cells([4, 8, 12, 16, 20]).arrangement(),
            Arrangement::DiagonalUp
        );
        assert_eq!(
            GridSelection::from_cells([0, 2, 4]).arrangement(),
            Arrangement::CustomLinear
        );
    }

    #[test]
    fn uneven_deltas_are_scattered() {
        assert_eq!(
            GridSelection::from_cells([0, 1, 7]).arrangement(),
            Arrangement::Scattered
        );
    }

    #[test]
    fn under_two_cells_is_default() {
        assert_eq!(GridSelection::new().arrangement(), Arrangement::Default);
        assert_eq!(GridSelection::from_cells([3]).arrangement(), Arrangement::Default);
        assert_eq!(Arrangement::Default.orientation_prompt(), "horizontal");
    }

    #[test]
    fn selection_order_is_irrelevant() {
        let a = GridSelection::from_cells([12, 7, 2]);
        let b = GridSelection::from_cells([2, 12, 7]);
        assert_eq!(a, b);
        assert_eq!(a.arrangement(), Arrangement::Vertical);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = GridSelection::new();
        sel.toggle(8);
        assert!(sel.contains(8));
        sel.toggle(8);
        assert!(sel.is_empty());
        sel.toggle(99); // out of range, ignored
        assert!(sel.is_empty());
    }
}
