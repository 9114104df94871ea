use doku::{Error, Grid};
use pretty_assertions::assert_eq;

const EASY: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

#[test]
fn parse_and_compact_round_trip() {
    let g = Grid::parse(EASY).unwrap();
    assert_eq!(g.to_compact(), EASY);
    assert_eq!(g.filled_count(), 30);
}

#[test]
fn parse_accepts_blank_styles_and_ignores_layout() {
    let spaced = "53..7....\n6..195...\n.98....6.\n8...6...3\n4..8.3..1\n7...2...6\n.6....28.\n...419..5\n....8..79";
    let g = Grid::parse(spaced).unwrap();
    assert_eq!(g.to_compact(), EASY);
    let underscores = EASY.replace('.', "_");
    assert_eq!(Grid::parse(&underscores).unwrap(), g);
}

#[test]
fn parse_rejects_wrong_length() {
    let err = Grid::parse("123").unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn from_rows_rejects_out_of_range_values() {
    let mut rows = [[0u8; 9]; 9];
    rows[4][4] = 10;
    assert!(matches!(Grid::from_rows(rows), Err(Error::InvalidInput(_))));
}

#[test]
fn set_rejects_out_of_bounds() {
    let mut g = Grid::empty();
    assert!(matches!(g.set(9, 0, 1), Err(Error::InvalidInput(_))));
    assert!(matches!(g.set(0, 0, 10), Err(Error::InvalidInput(_))));
    g.set(0, 0, 9).unwrap();
    assert_eq!(g.get(0, 0), 9);
}

#[test]
fn placement_legality_checks_row_col_box() {
    let mut g = Grid::empty();
    g.set(0, 0, 5).unwrap();
    assert!(!g.is_placement_legal(0, 8, 5), "same row");
    assert!(!g.is_placement_legal(8, 0, 5), "same column");
    assert!(!g.is_placement_legal(1, 1, 5), "same box");
    assert!(g.is_placement_legal(1, 1, 6));
    assert!(g.is_placement_legal(4, 4, 5), "unrelated cell");
}

#[test]
fn placement_legality_ignores_the_cell_itself() {
    let mut g = Grid::empty();
    g.set(0, 0, 5).unwrap();
    assert!(g.is_placement_legal(0, 0, 5));
}

#[test]
fn complete_and_valid_on_solved_grid() {
    let solved =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
    let g = Grid::parse(solved).unwrap();
    assert!(g.is_complete_and_valid());
    assert!(g.conflicts().is_empty());
}

#[test]
fn complete_and_valid_rejects_partial_and_broken_grids() {
    let g = Grid::parse(EASY).unwrap();
    assert!(!g.is_complete_and_valid(), "partial grid is not a win");

    let solved =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
    let mut g = Grid::parse(solved).unwrap();
    // Swap in a duplicate: row 0 now holds two 3s.
    g.set(0, 0, 3).unwrap();
    assert!(!g.is_complete_and_valid());
}

#[test]
fn conflicts_reports_both_cells_of_a_row_pair() {
    let mut g = Grid::empty();
    g.set(0, 0, 5).unwrap();
    g.set(0, 1, 5).unwrap();
    let conflicts = g.conflicts();
    assert_eq!(conflicts.into_iter().collect::<Vec<_>>(), vec![(0, 0), (0, 1)]);
}

#[test]
fn conflicts_covers_columns_and_boxes() {
    let mut g = Grid::empty();
    g.set(0, 0, 7).unwrap();
    g.set(8, 0, 7).unwrap();
    assert!(g.conflicts().contains(&(8, 0)), "column conflict");

    let mut g = Grid::empty();
    g.set(0, 0, 7).unwrap();
    g.set(2, 2, 7).unwrap();
    let conflicts = g.conflicts();
    assert!(conflicts.contains(&(0, 0)) && conflicts.contains(&(2, 2)), "box conflict");
}

#[test]
fn box_index_groups_cells_into_nine_regions() {
    use doku::board::{box_index, box_positions};
    assert_eq!(box_index(0, 0), 0);
    assert_eq!(box_index(4, 4), 4);
    assert_eq!(box_index(8, 8), 8);
    assert_eq!(box_index(0, 8), 2);
    for b in 0..9 {
        let cells: Vec<_> = box_positions(b).collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|&(r, c)| box_index(r, c) == b));
    }
}

#[test]
fn conflicts_empty_on_conflict_free_grid() {
    let g = Grid::parse(EASY).unwrap();
    assert!(g.conflicts().is_empty());
}
