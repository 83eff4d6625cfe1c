//! Self-report ratings on a 1-10 scale

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single mood, energy or stress rating, always within `[1, 10]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Build a rating, clamping out-of-range input into `[MIN, MAX]`
    pub fn new(value: i64) -> Self {
        Rating(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    /// Midpoint of the scale, where the input sliders start
    fn default() -> Self {
        Rating(5)
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid rating: '{}'. Expected a number from 1 to 10", s))?;

        if !(Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            return Err(format!(
                "Invalid rating: {}. Ratings range from 1 to 10",
                value
            ));
        }

        Ok(Rating(value as u8))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three ratings captured by one check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ratings {
    pub mood: Rating,
    pub energy: Rating,
    pub stress: Rating,
}

impl Ratings {
    pub fn new(mood: i64, energy: i64, stress: i64) -> Self {
        Ratings {
            mood: Rating::new(mood),
            energy: Rating::new(energy),
            stress: Rating::new(stress),
        }
    }
}
