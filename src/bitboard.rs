//! A fixed-size bitboard implementation using const generics.
//!
//! Boards are represented as an `N×N` grid packed into an unsigned integer
//! `T` and are addressed by [`Coord`]. The game keeps one bitboard per cell
//! marker (ships, hits, misses) instead of a grid of enums, which makes
//! "is any of these cells set" a single mask test.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

use crate::coord::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Coordinate lies outside [0..N) on either axis.
    #[error("index out of bounds: row={row}, col={col}")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create a new empty bitboard. `N * N` must not exceed the bits of `T`.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at `coord`.
    pub fn get(&self, coord: Coord) -> Result<bool, BitBoardError> {
        let idx = Self::index(coord)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at `coord`.
    pub fn set(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        let idx = Self::index(coord)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Returns `true` when `coord` is in bounds and set.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    #[inline]
    fn index(coord: Coord) -> Result<usize, BitBoardError> {
        let (row, col) = (coord.row(), coord.col());
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a bitboard with every coordinate of `iter` set.
    pub fn from_coords<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut board = Self::new();
        for coord in iter {
            board.set(coord)?;
        }
        Ok(board)
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
