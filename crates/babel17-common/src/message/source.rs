use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A line and column in the source text. Both are 1-based, and columns count
/// characters rather than bytes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A location is the range of source text from `start` up to and including the
/// character at `end`. Locations can be combined using the `+` operator to
/// create the smallest location containing both.
///
/// A location whose end comes before its start is *invalid*; such locations
/// are never attached to a tree node, but they may be constructed while
/// computing a span from tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    /// The single character at the very beginning of a source.
    pub const START: Location = Location {
        start: Position::START,
        end: Position::START,
    };

    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn point(at: Position) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// The smallest location covering both `self` and `other`.
    pub fn merge(self, other: Location) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Whether `other` lies entirely within this location.
    pub fn contains(&self, other: Location) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Interpret this location as relative to `origin`, where line 1, column 1
    /// of `self` is `origin` itself. Columns are only shifted on the first
    /// line.
    pub fn relative_to(self, origin: Position) -> Self {
        let shift = |at: Position| {
            let column = if at.line == 1 {
                origin.column + at.column - 1
            } else {
                at.column
            };

            Position::new(origin.line + at.line - 1, column)
        };

        Self {
            start: shift(self.start),
            end: shift(self.end),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Add<Location> for Location {
    type Output = Location;

    fn add(self, rhs: Location) -> Self::Output {
        self.merge(rhs)
    }
}

impl AddAssign<Location> for Location {
    fn add_assign(&mut self, rhs: Location) {
        *self = *self + rhs;
    }
}

impl Sum for Location {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Location::merge).unwrap_or(Location::START)
    }
}
