//! Label formats.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A label: either a level-2 value (`"0"`..`"19"`) or a direction-tagged
/// level-1 value (`"{direction}:{l1_value}"`).
pub type Label = String;

/// Direction of a level-1 value with respect to the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `"0"`: the actor's behaviour is aligned with the value
    Aligned,
    /// `"1"`: the actor's behaviour contradicts the value
    Contradictory,
}

impl Direction {
    /// Parse a direction token.
    ///
    /// Only `"0"` is aligned; every other token falls on the contradictory
    /// side. Labels are not validated against the universe here.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == "0" {
            Direction::Aligned
        } else {
            Direction::Contradictory
        }
    }

    /// Canonical token (`"0"` or `"1"`).
    #[must_use]
    pub fn as_token(self) -> &'static str {
        match self {
            Direction::Aligned => "0",
            Direction::Contradictory => "1",
        }
    }

    /// The other direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Aligned => Direction::Contradictory,
            Direction::Contradictory => Direction::Aligned,
        }
    }
}

/// A direction-tagged level-1 label split into its parts.
///
/// # Example
///
/// ```rust
/// use fehu_eval::types::{Direction, DirectionLabel};
///
/// let label = DirectionLabel::parse("1:42").unwrap();
/// assert_eq!(label.direction, Direction::Contradictory);
/// assert_eq!(label.value, "42");
///
/// assert!(DirectionLabel::parse("42").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectionLabel<'a> {
    /// Direction part (before the first colon)
    pub direction: Direction,
    /// Level-1 value part (after the first colon, may itself contain colons)
    pub value: &'a str,
}

impl<'a> DirectionLabel<'a> {
    /// Split on the first colon.
    pub fn parse(label: &'a str) -> Result<Self> {
        let (direction, value) = label
            .split_once(':')
            .ok_or_else(|| Error::malformed_label(label))?;
        Ok(Self {
            direction: Direction::from_token(direction),
            value,
        })
    }
}

impl fmt::Display for DirectionLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.direction.as_token(), self.value)
    }
}
