//! Testimonial rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside the 1-5 star range.
    #[error("rating must be between 1 and 5, got {0}")]
    OutOfRange(u8),
}

/// A star rating attached to a testimonial.
///
/// ## Constraints
///
/// - Integer value between 1 and 5 inclusive
///
/// ## Examples
///
/// ```
/// use portico_core::Rating;
///
/// assert!(Rating::new(5).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Minimum allowed rating.
    pub const MIN: u8 = 1;

    /// Maximum allowed rating.
    pub const MAX: u8 = 5;

    /// Create a `Rating` from a raw star count.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if the value is not in `1..=5`.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars >= Self::MIN && stars <= Self::MAX {
            Ok(Self(stars))
        } else {
            Err(RatingError::OutOfRange(stars))
        }
    }

    /// Get the star count.
    #[must_use]
    pub const fn stars(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stars = s.parse::<u8>().map_err(|_| RatingError::OutOfRange(0))?;
        Self::new(stars)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for stars in 1..=5 {
            assert!(Rating::new(stars).is_ok());
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Rating::new(0), Err(RatingError::OutOfRange(0)));
        assert_eq!(Rating::new(6), Err(RatingError::OutOfRange(6)));
    }

    #[test]
    fn test_default_is_five_stars() {
        assert_eq!(Rating::default().stars(), 5);
    }

    #[test]
    fn test_serde_roundtrip() {
        let rating = Rating::new(4).unwrap();
        let json = serde_json::to_string(&rating).unwrap();
        assert_eq!(json, "4");

        let parsed: Rating = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rating);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_from_str() {
        let rating: Rating = "3".parse().unwrap();
        assert_eq!(rating.stars(), 3);
        assert!("ten".parse::<Rating>().is_err());
    }
}
