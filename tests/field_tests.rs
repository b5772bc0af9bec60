//! Field tests - grid, validity and row clearing

use tetro_field::core::{PlayingField, ScoreKeeper};
use tetro_field::types::{GameEvent, PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(field: &mut PlayingField, row: i32, kind: PieceKind) {
    let b = field.bounds();
    for x in b.x_min()..b.x_max() {
        field.set(Point::new(x, row), Some(kind));
    }
}

fn o_shape() -> [Point; 4] {
    [
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(0, 1),
        Point::new(1, 1),
    ]
}

#[test]
fn test_field_new_empty() {
    let field = PlayingField::default();
    assert_eq!(field.width(), BOARD_WIDTH);
    assert_eq!(field.height(), BOARD_HEIGHT);

    let b = field.bounds();
    for y in b.y_min()..b.y_max() {
        for x in b.x_min()..b.x_max() {
            assert_eq!(field.get(Point::new(x, y)), Some(None), "({}, {})", x, y);
        }
    }
}

#[test]
fn test_bounds_centered_on_origin() {
    let b = PlayingField::default().bounds();
    assert_eq!((b.x_min(), b.x_max()), (-5, 5));
    assert_eq!((b.y_min(), b.y_max()), (-10, 10));

    let b = PlayingField::new(6, 8).bounds();
    assert_eq!((b.x_min(), b.x_max()), (-3, 3));
    assert_eq!((b.y_min(), b.y_max()), (-4, 4));
}

#[test]
fn test_get_out_of_bounds() {
    let field = PlayingField::default();
    assert_eq!(field.get(Point::new(-6, 0)), None);
    assert_eq!(field.get(Point::new(5, 0)), None);
    assert_eq!(field.get(Point::new(0, -11)), None);
    assert_eq!(field.get(Point::new(0, 10)), None);
}

#[test]
fn test_is_valid_position_empty_field() {
    let field = PlayingField::default();
    assert!(field.is_valid_position(&o_shape(), Point::new(0, 0)));
    assert!(field.is_valid_position(&o_shape(), Point::new(-5, -10)));
    assert!(field.is_valid_position(&o_shape(), Point::new(3, 8)));
}

#[test]
fn test_is_valid_position_outside_bounds() {
    let field = PlayingField::default();
    // Right cell column lands on x_max
    assert!(!field.is_valid_position(&o_shape(), Point::new(4, 0)));
    // Left edge
    assert!(!field.is_valid_position(&o_shape(), Point::new(-6, 0)));
    // Floor
    assert!(!field.is_valid_position(&o_shape(), Point::new(0, -11)));
    // Top cell row lands on y_max
    assert!(!field.is_valid_position(&o_shape(), Point::new(0, 9)));
}

#[test]
fn test_is_valid_position_collision() {
    let mut field = PlayingField::default();
    field.set(Point::new(1, 1), Some(PieceKind::T));

    assert!(!field.is_valid_position(&o_shape(), Point::new(0, 0)));
    assert!(field.is_valid_position(&o_shape(), Point::new(2, 0)));
}

#[test]
fn test_stamp_and_clear() {
    let mut field = PlayingField::default();
    field.stamp(&o_shape(), Point::new(-2, 3), PieceKind::O);

    assert_eq!(field.occupied_count(), 4);
    assert_eq!(field.get(Point::new(-2, 3)), Some(Some(PieceKind::O)));
    assert_eq!(field.get(Point::new(-1, 4)), Some(Some(PieceKind::O)));
    assert!(!field.is_valid_position(&o_shape(), Point::new(-2, 3)));

    field.clear(&o_shape(), Point::new(-2, 3));
    assert_eq!(field.occupied_count(), 0);
    assert!(field.is_valid_position(&o_shape(), Point::new(-2, 3)));
}

#[test]
fn test_stamp_never_populates_outside_bounds() {
    let mut field = PlayingField::default();
    // Two of the four cells are above the top edge
    field.stamp(&o_shape(), Point::new(0, 9), PieceKind::O);
    assert_eq!(field.occupied_count(), 2);
    assert_eq!(field.get(Point::new(0, 10)), None);
}

#[test]
fn test_is_line_full_one_gap() {
    let mut field = PlayingField::default();
    let row = -7;

    // All columns but the sixth one (x = 0)
    for x in -5..5 {
        if x != 0 {
            field.set(Point::new(x, row), Some(PieceKind::I));
        }
    }
    assert!(!field.is_line_full(row));

    field.set(Point::new(0, row), Some(PieceKind::L));
    assert!(field.is_line_full(row));
}

#[test]
fn test_collapse_line_shifts_everything_above() {
    let mut field = PlayingField::default();
    let row = -7;
    fill_row(&mut field, row, PieceKind::T);

    field.set(Point::new(-5, -6), Some(PieceKind::J));
    field.set(Point::new(2, -3), Some(PieceKind::S));
    field.set(Point::new(4, 9), Some(PieceKind::Z));
    // Below the cleared row must not move
    field.set(Point::new(0, -10), Some(PieceKind::O));

    field.collapse_line(row);

    assert!(!field.is_line_full(row));
    assert_eq!(field.get(Point::new(-5, -7)), Some(Some(PieceKind::J)));
    assert_eq!(field.get(Point::new(-5, -6)), Some(None));
    assert_eq!(field.get(Point::new(2, -4)), Some(Some(PieceKind::S)));
    assert_eq!(field.get(Point::new(4, 8)), Some(Some(PieceKind::Z)));
    assert_eq!(field.get(Point::new(0, -10)), Some(Some(PieceKind::O)));

    // Top row is empty after the shift
    for x in -5..5 {
        assert_eq!(field.get(Point::new(x, 9)), Some(None));
    }
    assert_eq!(field.occupied_count(), 4);
}

#[test]
fn test_clear_all_lines_two_adjacent_rows() {
    let mut field = PlayingField::default();
    fill_row(&mut field, -10, PieceKind::I);
    fill_row(&mut field, -9, PieceKind::O);
    // Two rows above the pair
    field.set(Point::new(3, -8), Some(PieceKind::T));
    field.set(Point::new(-1, -7), Some(PieceKind::L));

    let mut keeper = ScoreKeeper::new();
    assert_eq!(field.clear_all_lines(&mut keeper), 2);
    assert_eq!(keeper.score(), 300);
    assert_eq!(keeper.lines(), 2);

    // Both rows replaced by what sat two rows above
    assert_eq!(field.get(Point::new(3, -10)), Some(Some(PieceKind::T)));
    assert_eq!(field.get(Point::new(-1, -9)), Some(Some(PieceKind::L)));
    assert_eq!(field.occupied_count(), 2);
}

#[test]
fn test_clear_all_lines_non_adjacent_rows() {
    let mut field = PlayingField::default();
    fill_row(&mut field, -10, PieceKind::I);
    fill_row(&mut field, -5, PieceKind::I);
    fill_row(&mut field, 0, PieceKind::I);

    // Markers above each cleared row
    field.set(Point::new(0, -9), Some(PieceKind::J));
    field.set(Point::new(0, -4), Some(PieceKind::L));
    field.set(Point::new(0, 1), Some(PieceKind::S));

    let mut log: Vec<GameEvent> = Vec::new();
    assert_eq!(field.clear_all_lines(&mut log), 3);
    assert_eq!(log.last(), Some(&GameEvent::LinesCleared(3)));
    assert_eq!(
        log.iter()
            .filter(|e| matches!(e, GameEvent::LineClearedAt(_)))
            .count(),
        3
    );

    // Each marker drops by the number of cleared rows below it
    assert_eq!(field.get(Point::new(0, -10)), Some(Some(PieceKind::J)));
    assert_eq!(field.get(Point::new(0, -6)), Some(Some(PieceKind::L)));
    assert_eq!(field.get(Point::new(0, -2)), Some(Some(PieceKind::S)));
}

#[test]
fn test_clear_all_lines_four_rows_scores_800() {
    let mut field = PlayingField::default();
    for row in -10..-6 {
        fill_row(&mut field, row, PieceKind::I);
    }
    let mut keeper = ScoreKeeper::new();
    assert_eq!(field.clear_all_lines(&mut keeper), 4);
    assert_eq!(keeper.score(), 800);
    assert_eq!(field.occupied_count(), 0);
}

#[test]
fn test_clear_all_lines_nothing_full() {
    let mut field = PlayingField::default();
    field.set(Point::new(0, -10), Some(PieceKind::T));
    field.set(Point::new(4, 2), Some(PieceKind::Z));
    let before = field.clone();

    let mut log: Vec<GameEvent> = Vec::new();
    assert_eq!(field.clear_all_lines(&mut log), 0);
    assert!(log.is_empty());
    assert_eq!(field, before);
}

#[test]
fn test_clear_board() {
    let mut field = PlayingField::default();
    fill_row(&mut field, 3, PieceKind::T);
    field.set(Point::new(0, -10), Some(PieceKind::O));

    field.clear_board();
    assert_eq!(field.occupied_count(), 0);
}
