use battleship_duel::{decode, encode, BoardError, Coord, BOARD_SIZE};

#[test]
fn test_decode_corners() {
    assert_eq!(decode("A1"), Ok(Coord::new(0, 0).unwrap()));
    assert_eq!(decode("J10"), Ok(Coord::new(9, 9).unwrap()));
    assert_eq!(decode("C7"), Ok(Coord::new(2, 6).unwrap()));
}

#[test]
fn test_decode_out_of_range() {
    assert_eq!(decode("K1"), Err(BoardError::BadFormat("K1".into())));
    assert_eq!(decode("A11"), Err(BoardError::BadFormat("A11".into())));
    assert_eq!(decode("A0"), Err(BoardError::BadFormat("A0".into())));
}

#[test]
fn test_decode_rejects_malformed_text() {
    let malformed = [
        "", "A", "1A", "a1", "j10", "A01", "A+1", "A 1", " A1", "A1 ", "AA", "A100", "Ä1", "A1\n",
    ];
    for text in malformed {
        assert!(
            matches!(decode(text), Err(BoardError::BadFormat(_))),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn test_encode() {
    assert_eq!(encode(Coord::new(0, 0).unwrap()), "A1");
    assert_eq!(encode(Coord::new(9, 9).unwrap()), "J10");
    assert_eq!(Coord::new(4, 2).unwrap().to_string(), "E3");
}

#[test]
fn test_from_str() {
    let c: Coord = "B10".parse().unwrap();
    assert_eq!((c.row(), c.col()), (1, 9));
    assert!("B11".parse::<Coord>().is_err());
}

#[test]
fn test_new_bounds_and_offset() {
    assert!(Coord::new(BOARD_SIZE, 0).is_none());
    assert!(Coord::new(0, BOARD_SIZE).is_none());

    let corner = Coord::new(0, 0).unwrap();
    assert_eq!(corner.offset(-1, 0), None);
    assert_eq!(corner.offset(0, -1), None);
    assert_eq!(corner.offset(1, 1), Coord::new(1, 1));
    assert_eq!(Coord::new(9, 9).unwrap().offset(0, 1), None);
}

#[test]
fn test_all_is_row_major() {
    let all: Vec<Coord> = Coord::all().collect();
    assert_eq!(all.len(), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(all[0], Coord::new(0, 0).unwrap());
    assert_eq!(all[1], Coord::new(0, 1).unwrap());
    assert_eq!(all[BOARD_SIZE], Coord::new(1, 0).unwrap());
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}
