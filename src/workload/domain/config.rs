//! Aggregation settings.

use serde::{Deserialize, Serialize};

/// How a one-off instance spanning several days is booked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionPolicy {
    /// Book all hours on the instance date.
    ///
    /// The instance date is the first day of the span inside the expanded
    /// range, so a span crossing a window boundary books its full estimate
    /// in each window it overlaps.
    #[default]
    InstanceDate,
    /// Spread the hours over the assignee's work days inside the span.
    SpreadOverWorkDays,
}

/// Configuration for [`super::aggregate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Booking policy for multi-day instances.
    pub distribution: DistributionPolicy,
}

impl WorkloadConfig {
    /// Spreads multi-day instances over the assignee's work days, matching
    /// how capacity itself is spread over the week.
    #[must_use]
    pub const fn spread_over_work_days() -> Self {
        Self {
            distribution: DistributionPolicy::SpreadOverWorkDays,
        }
    }
}
