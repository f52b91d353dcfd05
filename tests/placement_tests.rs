use battleship_duel::placement::{
    guard_cells, legal_placements, orientation_of, random_placement, validate,
};
use battleship_duel::{decode, Board, BoardError, Coord, Orientation, Side, SHIPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const DESTROYER: usize = 4;

fn at(text: &str) -> Coord {
    decode(text).unwrap()
}

fn names(cells: impl Iterator<Item = Coord>) -> Vec<String> {
    cells.map(|c| c.to_string()).collect()
}

fn board_with(cells: &[&str]) -> Board {
    let mut board = Board::new();
    board.place_ship_cells(cells.iter().map(|c| at(c))).unwrap();
    board
}

#[test]
fn test_destroyer_in_corner() {
    let board = Board::new();
    let p = validate(&board, SHIPS[DESTROYER], "A1", "A2").unwrap();
    assert_eq!(p.orientation(), Orientation::Horizontal);
    assert_eq!(p.len(), 2);
    let cells: Vec<_> = p.cells().map(|c| (c.row(), c.col())).collect();
    assert_eq!(cells, vec![(0, 0), (0, 1)]);
}

#[test]
fn test_side_by_side_rejected() {
    let board = board_with(&["A1", "A2"]);
    assert_eq!(
        validate(&board, SHIPS[DESTROYER], "B1", "B2"),
        Err(BoardError::TooClose)
    );
}

#[test]
fn test_reversed_endpoints() {
    let board = Board::new();
    let p = validate(&board, SHIPS[2], "F7", "D7").unwrap();
    assert_eq!(p.orientation(), Orientation::Vertical);
    assert_eq!(names(p.cells()), ["D7", "E7", "F7"]);
    assert_eq!(p.bow(), at("F7"));
    assert_eq!(p.ends(), (at("D7"), at("F7")));
}

#[test]
fn test_bad_format_comes_first() {
    let board = Board::new();
    assert_eq!(
        validate(&board, SHIPS[DESTROYER], "A1", "Z9"),
        Err(BoardError::BadFormat("Z9".into()))
    );
    assert_eq!(
        validate(&board, SHIPS[DESTROYER], "a1", "B7"),
        Err(BoardError::BadFormat("a1".into()))
    );
}

#[test]
fn test_orientation() {
    assert_eq!(orientation_of(at("A1"), at("A5")), Ok(Orientation::Horizontal));
    assert_eq!(orientation_of(at("A1"), at("E1")), Ok(Orientation::Vertical));
    assert_eq!(orientation_of(at("A1"), at("B2")), Err(BoardError::BadOrientation));
    assert_eq!(orientation_of(at("C3"), at("C3")), Err(BoardError::BadOrientation));

    // orientation is checked before length
    let board = Board::new();
    assert_eq!(
        validate(&board, SHIPS[DESTROYER], "A1", "C5"),
        Err(BoardError::BadOrientation)
    );
}

#[test]
fn test_wrong_length() {
    let board = Board::new();
    assert_eq!(
        validate(&board, SHIPS[DESTROYER], "A1", "A3"),
        Err(BoardError::WrongLength {
            ship: "Destroyer",
            expected: 2,
            actual: 3
        })
    );
    let err = validate(&board, SHIPS[2], "J1", "J2").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Wrong length of the Submarine! Expected 3 cells, got 2."
    );
}

#[test]
fn test_overlap() {
    let board = board_with(&["A1", "A2"]);
    assert_eq!(
        validate(&board, SHIPS[DESTROYER], "A2", "B2"),
        Err(BoardError::Overlap)
    );
    assert_eq!(
        BoardError::Overlap.to_string(),
        "Your ship intercepts another one."
    );
}

#[test]
fn test_end_caps_must_be_clear() {
    let board = board_with(&["A1", "A2"]);
    assert_eq!(
        validate(&board, SHIPS[DESTROYER], "A3", "A4"),
        Err(BoardError::TooClose)
    );

    let board = board_with(&["A5", "B5"]);
    assert_eq!(
        validate(&board, SHIPS[DESTROYER], "C5", "D5"),
        Err(BoardError::TooClose)
    );
    assert!(validate(&board, SHIPS[DESTROYER], "D5", "E5").is_ok());
}

#[test]
fn test_diagonal_contact_allowed() {
    let board = board_with(&["A1", "A2"]);
    assert!(validate(&board, SHIPS[DESTROYER], "B3", "C3").is_ok());
    assert!(validate(&board, SHIPS[DESTROYER], "B3", "B4").is_ok());
}

#[test]
fn test_guard_cells_clip_at_edges() {
    let board = Board::new();
    let p = validate(&board, SHIPS[DESTROYER], "J9", "J10").unwrap();
    let mut guards = names(guard_cells(&p).into_iter());
    guards.sort();
    assert_eq!(guards, ["I10", "I9", "J8"]);

    let p = validate(&board, SHIPS[2], "D4", "D6").unwrap();
    let mut guards = guard_cells(&p);
    guards.sort();
    let expected: Vec<Coord> = ["C4", "C5", "C6", "D3", "D7", "E4", "E5", "E6"]
        .iter()
        .map(|c| at(c))
        .collect();
    assert_eq!(guards, expected);

    let p = validate(&board, SHIPS[2], "D4", "F4").unwrap();
    assert_eq!(p.orientation(), Orientation::Vertical);
    let mut guards = guard_cells(&p);
    guards.sort();
    let expected: Vec<Coord> = ["C4", "D3", "D5", "E3", "E5", "F3", "F5", "G4"]
        .iter()
        .map(|c| at(c))
        .collect();
    assert_eq!(guards, expected);
}

#[test]
fn test_rejection_leaves_side_unchanged() {
    let mut side = Side::new("Player 1");
    side.deploy("A1", "A5").unwrap();
    let board = side.board().clone();
    let fleet = side.fleet().clone();

    for (a, b) in [("B1", "B4"), ("A2", "D2"), ("C1", "C3"), ("C1", "D2"), ("X1", "X4")] {
        assert!(side.deploy(a, b).is_err(), "{a} {b} should be rejected");
    }
    assert_eq!(side.board(), &board);
    assert_eq!(side.fleet(), &fleet);
    assert_eq!(side.pending_ship(), Some(SHIPS[1]));
}

#[test]
fn test_all_ships_placed_then_rejected() {
    let mut side = Side::new("Player 1");
    for (a, b) in [("A1", "A5"), ("C1", "C4"), ("E1", "E3"), ("G1", "G3"), ("I1", "I2")] {
        side.deploy(a, b).unwrap();
    }
    assert!(side.fleet().is_deployed());
    assert_eq!(side.pending_ship(), None);
    assert_eq!(side.deploy("J9", "J10"), Err(BoardError::ShipAlreadyPlaced));
}

#[test]
fn test_legal_placement_counts() {
    let board = Board::new();
    assert_eq!(legal_placements(&board, SHIPS[DESTROYER]).len(), 180);
    assert_eq!(legal_placements(&board, SHIPS[0]).len(), 120);

    let board = board_with(&["E5"]);
    let options = legal_placements(&board, SHIPS[DESTROYER]);
    for p in options {
        let (bow, stern) = (p.bow().to_string(), p.stern().to_string());
        assert!(validate(&board, SHIPS[DESTROYER], &bow, &stern).is_ok());
    }
}

#[test]
fn test_random_placement_reproducible() {
    let board = Board::new();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let p1 = random_placement(&board, SHIPS[0], &mut rng1).unwrap();
    let p2 = random_placement(&board, SHIPS[0], &mut rng2).unwrap();
    assert_eq!(p1, p2);
    assert_eq!(p1.len(), 5);
}

#[test]
fn test_random_placement_full_board() {
    let mut board = Board::new();
    board.place_ship_cells(Coord::all()).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        random_placement(&board, SHIPS[DESTROYER], &mut rng),
        Err(BoardError::UnableToPlaceShip)
    );
}

#[test]
fn test_random_fleet_with_fixed_seed() {
    let mut side = Side::new("Player 1");
    let mut rng = SmallRng::seed_from_u64(12345);
    while side.pending_ship().is_some() {
        side.deploy_random(&mut rng).unwrap();
    }
    assert_eq!(side.board().ship_map().count_ones(), 17);
}
