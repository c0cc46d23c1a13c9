//! Capacity bands.

use crate::task::domain::Hours;
use serde::{Deserialize, Serialize};

/// Three-way classification of assigned hours against capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Less than half the capacity is used.
    UnderUtilised,
    /// Between half and all of the capacity is used, both inclusive.
    Optimal,
    /// More hours are assigned than the capacity allows.
    Overloaded,
}

impl Band {
    /// Classifies `assigned` against `capacity`.
    ///
    /// Zero capacity is overloaded as soon as anything is assigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use workplan::task::domain::Hours;
    /// use workplan::workload::domain::Band;
    ///
    /// let capacity = Hours::from_whole(8);
    /// assert_eq!(Band::classify(Hours::from_whole(4), capacity), Band::Optimal);
    /// assert_eq!(Band::classify(Hours::from_whole(8), capacity), Band::Optimal);
    /// assert_eq!(Band::classify(Hours::from_hundredths(801), capacity), Band::Overloaded);
    /// ```
    #[must_use]
    pub fn classify(assigned: Hours, capacity: Hours) -> Self {
        let used = u64::from(assigned.hundredths());
        let available = u64::from(capacity.hundredths());
        if available == 0 {
            return if used == 0 {
                Self::UnderUtilised
            } else {
                Self::Overloaded
            };
        }
        if used > available {
            Self::Overloaded
        } else if used * 2 < available {
            Self::UnderUtilised
        } else {
            Self::Optimal
        }
    }
}
