//! Placement rules for a proposed ship position.
//!
//! Every rule is a free function over an explicit board and candidate span,
//! applied in a fixed order by [`validate`]:
//!
//! 1. both coordinates parse,
//! 2. the endpoints lie on one row or one column,
//! 3. the span length equals the ship's length,
//! 4. every span cell is empty,
//! 5. the cells beside the span and just beyond both ends are empty.
//!
//! Rule 5 looks at orthogonal neighbours only; diagonal corners are allowed
//! to touch another ship.

use rand::Rng;

use crate::board::{Board, BB};
use crate::common::BoardError;
use crate::coord::{decode, Coord};
use crate::ship::{span_len, Orientation, Placement, ShipType};

/// Horizontal when the rows match and the columns differ, vertical when the
/// columns match and the rows differ. Equal points and diagonals are
/// rejected.
pub fn orientation_of(a: Coord, b: Coord) -> Result<Orientation, BoardError> {
    match (a.row() == b.row(), a.col() == b.col()) {
        (true, false) => Ok(Orientation::Horizontal),
        (false, true) => Ok(Orientation::Vertical),
        _ => Err(BoardError::BadOrientation),
    }
}

pub fn check_length(
    ship_type: ShipType,
    a: Coord,
    b: Coord,
    orientation: Orientation,
) -> Result<(), BoardError> {
    let actual = span_len(a, b, orientation);
    if actual != ship_type.length() {
        return Err(BoardError::WrongLength {
            ship: ship_type.name(),
            expected: ship_type.length(),
            actual,
        });
    }
    Ok(())
}

/// Every cell of the span must still be `Empty`.
pub fn check_overlap(board: &Board, placement: &Placement) -> Result<(), BoardError> {
    let footprint = BB::from_coords(placement.cells())?;
    if !(board.occupied() & footprint).is_empty() {
        return Err(BoardError::Overlap);
    }
    Ok(())
}

/// On-board cells that must stay empty around a span: one step to each side
/// of every cell, perpendicular to the axis, plus the cell just past each
/// end along the axis.
pub fn guard_cells(placement: &Placement) -> Vec<Coord> {
    let (side, along) = match placement.orientation() {
        Orientation::Horizontal => ((1, 0), (0, 1)),
        Orientation::Vertical => ((0, 1), (1, 0)),
    };
    let (lo, hi) = placement.ends();
    let mut guards: Vec<Coord> = placement
        .cells()
        .flat_map(|c| [c.offset(side.0, side.1), c.offset(-side.0, -side.1)])
        .flatten()
        .collect();
    guards.extend(lo.offset(-along.0, -along.1));
    guards.extend(hi.offset(along.0, along.1));
    guards
}

/// The guard cells of the span must be `Empty`.
pub fn check_clearance(board: &Board, placement: &Placement) -> Result<(), BoardError> {
    let guards = BB::from_coords(guard_cells(placement))?;
    if !(board.occupied() & guards).is_empty() {
        return Err(BoardError::TooClose);
    }
    Ok(())
}

/// Check a placement given as two coordinate strings.
pub fn validate(
    board: &Board,
    ship_type: ShipType,
    cord1: &str,
    cord2: &str,
) -> Result<Placement, BoardError> {
    let a = decode(cord1)?;
    let b = decode(cord2)?;
    validate_coords(board, ship_type, a, b)
}

/// Check a placement given as two decoded endpoints.
///
/// On success the returned [`Placement`] carries the endpoints and the
/// orientation; the board is never modified here.
pub fn validate_coords(
    board: &Board,
    ship_type: ShipType,
    a: Coord,
    b: Coord,
) -> Result<Placement, BoardError> {
    let orientation = orientation_of(a, b)?;
    check_length(ship_type, a, b, orientation)?;
    let placement = Placement::new(a, b, orientation);
    check_overlap(board, &placement)?;
    check_clearance(board, &placement)?;
    Ok(placement)
}

/// Every placement of `ship_type` that [`validate_coords`] accepts, in
/// row-major order of the first endpoint, horizontal before vertical.
pub fn legal_placements(board: &Board, ship_type: ShipType) -> Vec<Placement> {
    let reach = ship_type.length().saturating_sub(1);
    let mut found = Vec::new();
    for start in Coord::all() {
        let candidates = [
            Coord::new(start.row(), start.col() + reach),
            Coord::new(start.row() + reach, start.col()),
        ];
        for end in candidates.into_iter().flatten() {
            if let Ok(p) = validate_coords(board, ship_type, start, end) {
                found.push(p);
            }
        }
    }
    found
}

/// Pick one legal placement for `ship_type` uniformly at random.
pub fn random_placement<R: Rng>(
    board: &Board,
    ship_type: ShipType,
    rng: &mut R,
) -> Result<Placement, BoardError> {
    let options = legal_placements(board, ship_type);
    if options.is_empty() {
        return Err(BoardError::UnableToPlaceShip);
    }
    Ok(options[rng.random_range(0..options.len())])
}
