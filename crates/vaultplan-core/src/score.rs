//! Score - single-level integer score for move chains

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A single integer score.
///
/// Used both for the cumulative delta of a move chain and for the
/// penalized value the selector compares. Higher is better.
///
/// # Examples
///
/// ```
/// use vaultplan_core::Score;
///
/// let a = Score::of(-5);
/// let b = Score::of(3);
///
/// assert!(b > a);
/// assert_eq!(a + b, Score::of(-2));
/// assert_eq!([a, b].into_iter().sum::<Score>(), Score::of(-2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    score: i64,
}

impl Score {
    /// The zero score.
    pub const ZERO: Score = Score { score: 0 };

    /// A score of 1 (useful for incrementing).
    pub const ONE: Score = Score { score: 1 };

    /// Creates a new Score with the given value.
    #[inline]
    pub const fn of(score: i64) -> Self {
        Score { score }
    }

    /// Returns the score value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.score
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Score::of(self.score + other.score)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, other: Self) {
        self.score += other.score;
    }
}

impl Sub for Score {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Score::of(self.score - other.score)
    }
}

impl Mul<i64> for Score {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Score::of(self.score * rhs)
    }
}

impl Neg for Score {
    type Output = Self;

    fn neg(self) -> Self {
        Score::of(-self.score)
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Self {
        iter.fold(Score::ZERO, Add::add)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self.score)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score)
    }
}
