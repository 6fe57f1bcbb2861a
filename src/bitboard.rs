//! A fixed-size bitboard implementation using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `N×N` grid with one unsigned integer `T` per row, so a
//! 15×15 board packs into `[u16; 15]`.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested row width N exceeds the capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N={} exceeds T::BITS={}", n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A fixed-size N×N bitboard with each row stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    rows: [T; N],
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn row_mask() -> T {
        if N == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << N) - T::one()
        }
    }

    /// Create a new empty bitboard (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard {
            rows: [T::zero(); N],
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if N > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_zero())
    }

    /// Returns true if every cell of the board is set.
    pub fn is_full(&self) -> bool {
        let mask = Self::row_mask();
        self.rows.iter().all(|&r| r & mask == mask)
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        Ok(((self.rows[row] >> col) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        self.rows[row] = self.rows[row] | (T::one() << col);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        self.rows[row] = self.rows[row] & !(T::one() << col);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    #[inline]
    pub fn from_iter<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", core::any::type_name::<T>(), N)?;
        writeln!(f, "{}", self)
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.rows[r] >> c) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetBits<'a, T, N>
where
    T: PrimInt + Unsigned,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let (r, c) = (self.idx / N, self.idx % N);
            self.idx += 1;
            if ((self.board.rows[r] >> c) & T::one()) != T::zero() {
                return Some((r, c));
            }
        }
        None
    }
}

/// Bitwise AND for intersecting two bitboards.
impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            rows: core::array::from_fn(|r| self.rows[r] & rhs.rows[r]),
        }
    }
}

/// Bitwise OR for combining two bitboards.
impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            rows: core::array::from_fn(|r| self.rows[r] | rhs.rows[r]),
        }
    }
}

/// Bitwise NOT for inverting a bitboard (within board bounds).
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        let mask = Self::row_mask();
        BitBoard {
            rows: core::array::from_fn(|r| !self.rows[r] & mask),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type BB = BitBoard<u16, 15>;

    #[test]
    fn set_get_clear() {
        let mut bb = BB::new();
        assert!(bb.is_empty());
        bb.set(14, 14).unwrap();
        bb.set(0, 3).unwrap();
        assert!(bb.get(14, 14).unwrap());
        assert!(!bb.get(14, 13).unwrap());
        assert_eq!(bb.count_ones(), 2);
        bb.clear(14, 14).unwrap();
        assert_eq!(bb.count_ones(), 1);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut bb = BB::new();
        assert_eq!(
            bb.set(15, 0).unwrap_err(),
            BitBoardError::IndexOutOfBounds { row: 15, col: 0 }
        );
        assert!(bb.get(0, 15).is_err());
    }

    #[test]
    fn try_new_checks_width() {
        assert!(BitBoard::<u16, 15>::try_new().is_ok());
        assert_eq!(
            BitBoard::<u8, 9>::try_new().unwrap_err(),
            BitBoardError::SizeTooLarge { n: 9, capacity: 8 }
        );
    }

    #[test]
    fn not_stays_in_bounds() {
        let full = !BB::new();
        assert!(full.is_full());
        assert_eq!(full.count_ones(), 225);
    }

    #[test]
    fn set_bits_are_row_major() {
        let bb = BB::from_iter([(2, 1), (0, 5), (2, 0)]).unwrap();
        let bits: Vec<_> = bb.iter_set_bits().collect();
        assert_eq!(bits, vec![(0, 5), (2, 0), (2, 1)]);
    }

    #[test]
    fn or_and_combine() {
        let a = BB::from_iter([(1, 1), (2, 2)]).unwrap();
        let b = BB::from_iter([(2, 2), (3, 3)]).unwrap();
        assert_eq!((a | b).count_ones(), 3);
        assert_eq!((a & b).count_ones(), 1);
        assert!((a & !a).is_empty());
    }
}
