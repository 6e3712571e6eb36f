//! Grid tests - ASCII loading, reads and marker bookkeeping

use tile_keys::core::{ConfigError, TileGrid, TileMarkerError};
use tile_keys::types::{Direction, Position, TileKind};

#[test]
fn test_grid_from_ascii_reads_every_glyph() {
    let grid = TileGrid::from_ascii(&["#~DPOSE."]).unwrap();
    assert_eq!(grid.width(), 8);
    assert_eq!(grid.height(), 1);

    let expected = [
        TileKind::Wall,
        TileKind::Slide,
        TileKind::Drop,
        TileKind::PickUp,
        TileKind::Portal,
        TileKind::Start,
        TileKind::End,
        TileKind::Empty,
    ];
    for (x, kind) in expected.iter().enumerate() {
        assert_eq!(grid.kind_at(Position::new(x as i32, 0)), *kind, "cell {}", x);
    }
}

#[test]
fn test_grid_out_of_bounds_reads_are_empty() {
    let grid = TileGrid::from_ascii(&["###", "#S#", "###"]).unwrap();

    for pos in [
        Position::new(-1, 0),
        Position::new(0, -1),
        Position::new(3, 1),
        Position::new(1, 3),
        Position::new(100, -100),
    ] {
        assert!(!grid.contains(pos));
        assert_eq!(grid.kind_at(pos), TileKind::Empty, "{}", pos);
        assert_eq!(grid.bound_key_at(pos), None);
    }
}

#[test]
fn test_grid_rejects_malformed_rows() {
    let empty: [&str; 0] = [];
    assert_eq!(TileGrid::from_ascii(&empty).unwrap_err(), ConfigError::EmptyGrid);
    assert_eq!(
        TileGrid::from_ascii(&["S.E", "##"]).unwrap_err(),
        ConfigError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        }
    );
    assert!(matches!(
        TileGrid::from_ascii(&["S?E"]).unwrap_err(),
        ConfigError::UnknownGlyph { glyph: '?', .. }
    ));
}

#[test]
fn test_grid_start_position() {
    let grid = TileGrid::from_ascii(&["#.#", "#S#"]).unwrap();
    assert_eq!(grid.start_position(), Ok(Position::new(1, 1)));

    let none = TileGrid::from_ascii(&["#.E"]).unwrap();
    assert_eq!(none.start_position(), Err(ConfigError::MissingStart));

    let two = TileGrid::from_ascii(&["S.S"]).unwrap();
    assert_eq!(
        two.start_position(),
        Err(ConfigError::DuplicateStart {
            first: Position::new(0, 0),
            second: Position::new(2, 0)
        })
    );
}

#[test]
fn test_grid_drop_and_pickup_cycle() {
    let mut grid = TileGrid::from_ascii(&[".D."]).unwrap();
    let at = Position::new(1, 0);

    grid.set_drop(at, Direction::Left).unwrap();
    assert_eq!(grid.kind_at(at), TileKind::PickUp);
    assert_eq!(grid.bound_key_at(at), Some(Direction::Left));
    assert_eq!(grid.markers().collect::<Vec<_>>(), vec![(at, Direction::Left)]);

    assert_eq!(grid.clear_pickup(at), Ok(Direction::Left));
    assert_eq!(grid.kind_at(at), TileKind::Drop);
    assert_eq!(grid.bound_key_at(at), None);
    assert_eq!(grid.marker_at(at), None);
    assert_eq!(grid.markers().count(), 0);

    // The tile can be used again.
    grid.set_drop(at, Direction::Up).unwrap();
    assert_eq!(grid.marker_at(at), Some(Direction::Up));
}

#[test]
fn test_grid_marker_errors_leave_grid_unchanged() {
    let mut grid = TileGrid::from_ascii(&[".DP"]).unwrap();
    let before = grid.clone();

    assert!(matches!(
        grid.set_drop(Position::new(0, 0), Direction::Up),
        Err(TileMarkerError::WrongKind { .. })
    ));
    assert_eq!(
        grid.clear_pickup(Position::new(2, 0)),
        Err(TileMarkerError::MissingKey(Position::new(2, 0)))
    );
    assert_eq!(
        grid.set_drop(Position::new(9, 0), Direction::Up),
        Err(TileMarkerError::OutOfBounds(Position::new(9, 0)))
    );
    assert_eq!(grid, before);
}

#[test]
fn test_grid_ascii_round_trip() {
    let rows = ["#####", "#S~D#", "#P.E#", "#####"];
    let grid = TileGrid::from_ascii(&rows).unwrap();
    assert_eq!(grid.to_ascii(), rows);
}
