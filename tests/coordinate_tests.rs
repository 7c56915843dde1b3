use battle_group::{Coordinate, Direction, Orientation};

#[test]
fn test_neighbours_may_leave_the_grid() {
    let corner = Coordinate::new(0, 0);
    assert_eq!(corner.up(), Coordinate::new(-1, 0));
    assert_eq!(corner.left(), Coordinate::new(0, -1));
    assert!(!corner.up().valid());
    assert!(!corner.left().valid());
    assert!(corner.down().valid());
    assert!(corner.right().valid());
    assert!(!Coordinate::new(10, 3).valid());
}

#[test]
fn test_adjacent_keeps_only_valid_neighbours() {
    let corner: Vec<_> = Coordinate::new(0, 9).adjacent().collect();
    assert_eq!(corner, vec![Coordinate::new(1, 9), Coordinate::new(0, 8)]);

    let inner: Vec<_> = Coordinate::new(4, 4).adjacent().collect();
    assert_eq!(
        inner,
        vec![
            Coordinate::new(3, 4),
            Coordinate::new(5, 4),
            Coordinate::new(4, 5),
            Coordinate::new(4, 3),
        ]
    );
}

#[test]
fn test_direction_table() {
    for dir in Direction::ALL {
        let c = Coordinate::new(5, 5);
        assert_eq!(c.step(dir).step(dir.opposite()), c);
        let moved = c.step(dir);
        match dir.orientation() {
            Orientation::Vertical => assert_eq!(moved.col, c.col),
            Orientation::Horizontal => assert_eq!(moved.row, c.row),
        }
    }
    assert_eq!(Coordinate::new(2, 2).offset(Direction::Right, 3), Coordinate::new(2, 5));
    assert_eq!(Coordinate::new(2, 2).offset(Direction::Down, -2), Coordinate::new(0, 2));
}

#[test]
fn test_display_uses_letter_columns() {
    assert_eq!(Coordinate::new(0, 0).to_string(), "A1");
    assert_eq!(Coordinate::new(3, 2).to_string(), "C4");
    assert_eq!(Coordinate::new(9, 9).to_string(), "J10");
}

#[test]
fn test_all_and_at() {
    assert_eq!(Coordinate::all().count(), 100);
    assert_eq!(Coordinate::at(9, 0), Some(Coordinate::new(9, 0)));
    assert_eq!(Coordinate::at(10, 0), None);
    assert_eq!(Coordinate::new(-1, 4).index(), None);
}
