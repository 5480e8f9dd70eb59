//! Board tests: cell access, the collision predicate, line clearing

use blockfall::core::{Board, LineClearPolicy, Piece};
use blockfall::types::{Color, ShapeFamily, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

fn color(index: u8) -> Color {
    Color::new(index).unwrap()
}

/// Vertical I piece (rotation 0 occupies column 1 of its box, rows 0..=3)
fn vertical_i(x: i32, y: i32) -> Piece {
    Piece::new(ShapeFamily::I, color(1), x, y)
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);

    for y in 0..DEFAULT_BOARD_HEIGHT as i32 {
        for x in 0..DEFAULT_BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(6, 8);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(6, 0), None);
    assert_eq!(board.get(0, 8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Some(color(3))));
    assert_eq!(board.get(5, 10), Some(Some(color(3))));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(color(3))));
    assert!(!board.set(10, 0, Some(color(3))));
}

#[test]
fn test_collides_at_side_walls() {
    let board = Board::default();

    assert!(!board.collides(&vertical_i(-1, 0)));
    assert!(board.collides(&vertical_i(-2, 0)));

    assert!(!board.collides(&vertical_i(8, 0)));
    assert!(board.collides(&vertical_i(9, 0)));
}

#[test]
fn test_collides_at_floor() {
    let board = Board::default();

    assert!(!board.collides(&vertical_i(0, 16)));
    assert!(board.collides(&vertical_i(0, 17)));
}

#[test]
fn test_rows_above_top_are_empty() {
    let mut board = Board::default();
    board.set(1, 0, Some(color(2)));

    // Only the lowest block is on the board.
    assert!(!board.collides(&vertical_i(3, -3)));
    // Same column as the settled cell.
    assert!(board.collides(&vertical_i(0, -3)));
}

#[test]
fn test_lock_piece_writes_color() {
    let mut board = Board::default();
    let piece = Piece::new(ShapeFamily::O, color(5), 3, 18);
    board.lock_piece(&piece);

    // O occupies box columns 1..=2, rows 0..=1.
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(board.get(x, y), Some(Some(color(5))));
    }
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
}

#[test]
fn test_no_full_rows_is_a_noop() {
    for policy in [LineClearPolicy::Compacting, LineClearPolicy::Legacy] {
        let mut board = Board::from_rows(&[&[0, 0, 0], &[1, 0, 2], &[3, 3, 0]]);
        let before = board.clone();
        assert_eq!(board.clear_lines(policy), 0);
        assert_eq!(board, before);
    }
}

#[test]
fn test_compacting_removes_bottom_rows() {
    let mut board = Board::from_rows(&[
        &[0, 0, 0],
        &[0, 4, 0],
        &[1, 1, 1],
        &[2, 0, 0],
        &[3, 3, 3],
    ]);

    assert_eq!(board.clear_lines(LineClearPolicy::Compacting), 2);
    assert_eq!(
        board,
        Board::from_rows(&[
            &[0, 0, 0],
            &[0, 0, 0],
            &[0, 0, 0],
            &[0, 4, 0],
            &[2, 0, 0],
        ])
    );
}

#[test]
fn test_legacy_matches_compacting_below_row_one() {
    // Rows 0 and 1 empty: the two policies agree.
    let rows: [&[u8]; 6] = [
        &[0, 0, 0],
        &[0, 0, 0],
        &[0, 6, 0],
        &[1, 1, 1],
        &[5, 0, 5],
        &[2, 2, 2],
    ];
    let mut legacy = Board::from_rows(&rows);
    let mut compacting = Board::from_rows(&rows);

    assert_eq!(legacy.clear_lines(LineClearPolicy::Legacy), 2);
    assert_eq!(compacting.clear_lines(LineClearPolicy::Compacting), 2);
    assert_eq!(legacy, compacting);
}

#[test]
fn test_legacy_never_clears_row_zero() {
    let mut board = Board::from_rows(&[&[1, 1], &[0, 0], &[0, 2]]);
    assert_eq!(board.clear_lines(LineClearPolicy::Legacy), 0);
    assert!(board.is_row_full(0));

    let mut board = Board::from_rows(&[&[1, 1], &[0, 0], &[0, 2]]);
    assert_eq!(board.clear_lines(LineClearPolicy::Compacting), 1);
    assert!(!board.is_row_full(0));
}

#[test]
fn test_write_u8_grid_reuses_buffer() {
    let board = Board::from_rows(&[&[0, 6], &[3, 0]]);
    let mut out = vec![9; 32];
    board.write_u8_grid(&mut out);
    assert_eq!(out, vec![0, 6, 3, 0]);
}
