use storydeck::{Arrangement, GRID_SIDE, GridSelection};

#[test]
fn anchor_descriptions_for_known_selections() {
    assert_eq!(GridSelection::new().position_description(), "center");
    assert_eq!(GridSelection::from_cells([0]).position_description(), "top left");
    assert_eq!(GridSelection::from_cells([12]).position_description(), "center");
    assert_eq!(GridSelection::from_cells([4]).position_description(), "top right");
    assert_eq!(GridSelection::from_cells([20]).position_description(), "bottom left");
    assert_eq!(GridSelection::from_cells([24]).position_description(), "bottom right");
}

#[test]
fn anchor_averages_cells_not_extremes() {
    // Cells 0 and 24 average to the exact center.
    let sel = GridSelection::from_cells([0, 24]);
    assert_eq!(sel.position_description(), "center");

    // A cluster in the top row with one low outlier still averages top.
    let sel = GridSelection::from_cells([0, 1, 2, 3, 5]);
    assert_eq!(sel.position_description(), "top left");
}

#[test]
fn constant_delta_classification() {
    // d=1 horizontal, d=5 vertical, d=6 TL-BR, d=4 TR-BL, others custom linear.
    let cases: &[(&[usize], Arrangement)] = &[
        (&[0, 1], Arrangement::Horizontal),
        (&[10, 11, 12, 13, 14], Arrangement::Horizontal),
        (&[0, 5], Arrangement::Vertical),
        (&[1, 6, 11, 16, 21], Arrangement::Vertical),
        (&[0, 6], Arrangement::DiagonalDown),
        (&[0, 6, 12, 18, 24], Arrangement::DiagonalDown),
        (&[4, 8], Arrangement::DiagonalUp),
        (&[4, 8, 12, 16, 20], Arrangement::DiagonalUp),
        (&[0, 2, 4], Arrangement::CustomLinear),
        (&[0, 3, 6], Arrangement::CustomLinear),
        (&[0, 10, 20], Arrangement::CustomLinear),
    ];
    for (cells, expect) in cases {
        let sel = GridSelection::from_cells(cells.iter().copied());
        assert_eq!(sel.arrangement(), *expect, "cells {cells:?}");
    }
}

#[test]
fn any_non_constant_delta_is_scattered() {
    for cells in [&[0usize, 1, 3][..], &[0, 5, 11], &[2, 3, 10, 24]] {
        let sel = GridSelection::from_cells(cells.iter().copied());
        assert_eq!(sel.arrangement(), Arrangement::Scattered, "cells {cells:?}");
    }
}

#[test]
fn diagonal_deltas_derive_from_the_grid_stride() {
    // The classification is stride-based: 5-wide grid means vertical delta 5
    // and diagonal deltas 6 and 4.
    assert_eq!(GRID_SIDE, 5);
    let vertical = GridSelection::from_cells([0, GRID_SIDE]);
    assert_eq!(vertical.arrangement(), Arrangement::Vertical);
    let down = GridSelection::from_cells([0, GRID_SIDE + 1]);
    assert_eq!(down.arrangement(), Arrangement::DiagonalDown);
    let up = GridSelection::from_cells([GRID_SIDE - 1, 2 * GRID_SIDE - 2]);
    assert_eq!(up.arrangement(), Arrangement::DiagonalUp);
}

#[test]
fn presentation_wrappers_share_one_classification() {
    let sel = GridSelection::from_cells([0, 6, 12]);
    let arrangement = sel.arrangement();
    assert_eq!(
        arrangement.orientation_prompt(),
        "diagonal orientation (top-left to bottom-right)"
    );
    assert_eq!(arrangement.display_label(), "Diagonal (TL-BR)");

    let unset = GridSelection::from_cells([7]);
    assert_eq!(unset.arrangement().orientation_prompt(), "horizontal");
    assert_eq!(
        unset.arrangement().display_label(),
        "Click grid to plan text path"
    );
}

#[test]
fn selection_is_a_set() {
    let mut sel = GridSelection::from_cells([3, 3, 3, 1]);
    assert_eq!(sel.cells(), &[1, 3]);
    sel.toggle(2);
    assert_eq!(sel.cells(), &[1, 2, 3]);
    assert_eq!(sel.arrangement(), Arrangement::Horizontal);
}
