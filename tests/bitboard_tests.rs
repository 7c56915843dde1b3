use battle_group::{BitBoard, BitBoardError, Coordinate, Mask};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u64, 8>::try_new().is_ok());
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_insert_remove_contains() {
    let mut mask = Mask::new();
    assert!(mask.is_empty());

    assert_eq!(mask.insert(Coordinate::new(1, 1)), Ok(true));
    assert_eq!(mask.insert(Coordinate::new(1, 1)), Ok(false));
    assert!(mask.contains(Coordinate::new(1, 1)));
    assert_eq!(mask.len(), 1);

    assert!(mask.remove(Coordinate::new(1, 1)));
    assert!(!mask.remove(Coordinate::new(1, 1)));
    assert!(mask.is_empty());
}

#[test]
fn test_off_board_coordinates() {
    let mut mask = Mask::new();
    let off = Coordinate::new(-1, 3);
    assert_eq!(mask.insert(off), Err(BitBoardError::OutOfBounds(off)));
    assert!(!mask.contains(off));
    assert!(!mask.contains(Coordinate::new(0, 10)));
}

#[test]
fn test_iter_and_complement() {
    let mask = Mask::from_coords([Coordinate::new(9, 9), Coordinate::new(0, 1)]).unwrap();
    let cells: Vec<_> = mask.iter().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 1), Coordinate::new(9, 9)]);

    let rest = !mask;
    assert_eq!(rest.len(), 98);
    assert!((rest & mask).is_empty());
    assert_eq!((rest | mask).len(), 100);
}
