//! Fixed-point hour quantities.
//!
//! Hours are stored as hundredths so that sums, capacity ratios and band
//! boundaries are exact.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

/// A non-negative number of hours with two decimal places.
///
/// # Examples
///
/// ```
/// use workplan::task::domain::Hours;
///
/// let hours: Hours = "4.5".parse().expect("valid hours");
/// assert_eq!(hours, Hours::from_hundredths(450));
/// assert_eq!(hours.to_string(), "4.50");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Hours(u32);

impl Hours {
    /// Zero hours.
    pub const ZERO: Self = Self(0);

    const SCALE: u32 = 100;

    /// Creates a quantity from hundredths of an hour.
    #[must_use]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Creates a quantity from whole hours.
    #[must_use]
    pub fn from_whole(hours: u16) -> Self {
        Self(u32::from(hours) * Self::SCALE)
    }

    /// Returns the quantity in hundredths of an hour.
    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// Returns whether the quantity is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds two quantities, saturating at the maximum.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtracts `other`, saturating at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Divides into `parts` equal shares, discarding the remainder.
    ///
    /// Returns `None` when `parts` is zero.
    #[must_use]
    pub fn divide_evenly(self, parts: usize) -> Option<Self> {
        let divisor = u32::try_from(parts).ok()?;
        self.0.checked_div(divisor).map(Self)
    }

    /// Splits into `parts` shares that add up exactly to `self`.
    ///
    /// Leftover hundredths go to the earliest shares. Returns an empty
    /// vector when `parts` is zero.
    #[must_use]
    pub fn distribute(self, parts: usize) -> Vec<Self> {
        let Ok(divisor) = u32::try_from(parts) else {
            return Vec::new();
        };
        if divisor == 0 {
            return Vec::new();
        }
        let base = self.0.div_euclid(divisor);
        let leftover = self.0.rem_euclid(divisor);
        (0..divisor)
            .map(|index| {
                if index < leftover {
                    Self(base + 1)
                } else {
                    Self(base)
                }
            })
            .collect()
    }

    /// Parses a decimal number of hours, rounding extra decimals half up to
    /// the nearest hundredth.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidHours`] for anything that is not a
    /// non-negative decimal number.
    ///
    /// # Examples
    ///
    /// ```
    /// use workplan::task::domain::Hours;
    ///
    /// let hours = Hours::parse_rounded("2.3366").expect("decimal hours");
    /// assert_eq!(hours, Hours::from_hundredths(234));
    /// ```
    pub fn parse_rounded(value: &str) -> Result<Self, TaskDomainError> {
        let invalid = || TaskDomainError::InvalidHours(value.to_owned());
        let trimmed = value.trim();
        let (whole_part, fraction_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        if !fraction_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let kept: String = fraction_part.chars().take(2).collect();
        let exact: Self = format!("{whole_part}.{kept}")
            .parse()
            .map_err(|_| invalid())?;
        if fraction_part.chars().nth(2).is_some_and(|digit| digit >= '5') {
            exact.0.checked_add(1).map(Self).ok_or_else(invalid)
        } else {
            Ok(exact)
        }
    }
}

impl Sum for Hours {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a Self> for Hours {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for Hours {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || TaskDomainError::InvalidHours(value.to_owned());
        let trimmed = value.trim();
        let (whole_part, fraction_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        if whole_part.is_empty() && fraction_part.is_empty() {
            return Err(invalid());
        }
        if !whole_part.chars().all(|c| c.is_ascii_digit())
            || !fraction_part.chars().all(|c| c.is_ascii_digit())
            || fraction_part.len() > 2
        {
            return Err(invalid());
        }

        let whole: u32 = if whole_part.is_empty() {
            0
        } else {
            whole_part.parse().map_err(|_| invalid())?
        };
        let fraction: u32 = match fraction_part.len() {
            0 => 0,
            1 => fraction_part.parse::<u32>().map_err(|_| invalid())? * 10,
            _ => fraction_part.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(Self::SCALE)
            .and_then(|scaled| scaled.checked_add(fraction))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0.div_euclid(Self::SCALE),
            self.0.rem_euclid(Self::SCALE)
        )
    }
}
