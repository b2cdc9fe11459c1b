//! An inclusive numeric range.  A pair of numbers that always travel
//! together as "the smallest and largest allowed value" deserves a
//! name and a single type, rather than two loose arguments.

use std::fmt;
use std::str::FromStr;

/// The closed interval `[min, max]` over a single numeric type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<T> {
    /// Smallest value inside the bounds.
    pub min: T,
    /// Largest value inside the bounds.
    pub max: T,
}

impl<T> Bounds<T>
where
    T: PartialOrd + Copy,
{
    /// Returns `None` when `min` is greater than `max`.
    pub fn new(min: T, max: T) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Bounds { min, max })
        }
    }

    /// True if `value` lies between `min` and `max`, ends included.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T> Bounds<T>
where
    T: PartialOrd + Copy + FromStr + fmt::Display,
{
    /// Parse `s` and check that it falls inside the bounds.  The error
    /// message names the bounds, which is handy for command line
    /// validators.
    pub fn parse(&self, s: &str, what: &str) -> Result<T, String> {
        match T::from_str(s.trim()) {
            Ok(value) if self.contains(value) => Ok(value),
            Ok(_) => Err(format!(
                "{} must be between {} and {}",
                what, self.min, self.max
            )),
            Err(_) => Err(format!("Could not parse {}", what)),
        }
    }
}
