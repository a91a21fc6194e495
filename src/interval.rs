use chrono::Duration;
use log::warn;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One rung of the fixed review ladder.
///
/// The declaration order is the ladder order: an `easy` review climbs one
/// rung, a `hard` review drops back to the bottom. The serialized tokens are
/// the stored representation and must not change.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum IntervalBucket {
    #[default]
    #[serde(rename = "1_hour")]
    #[strum(serialize = "1_hour")]
    Hour,
    #[serde(rename = "3_hours")]
    #[strum(serialize = "3_hours")]
    ThreeHours,
    #[serde(rename = "24_hours")]
    #[strum(serialize = "24_hours")]
    Day,
    #[serde(rename = "3_days")]
    #[strum(serialize = "3_days")]
    ThreeDays,
    #[serde(rename = "7_days")]
    #[strum(serialize = "7_days")]
    Week,
}

impl IntervalBucket {
    /// Time until the next review for a card sitting on this rung.
    ///
    /// Every bucket is a fixed span: the day buckets are exact multiples of
    /// 24 h, not calendar days.
    pub fn duration(self) -> Duration {
        match self {
            Self::Hour => Duration::hours(1),
            Self::ThreeHours => Duration::hours(3),
            Self::Day => Duration::hours(24),
            Self::ThreeDays => Duration::hours(72),
            Self::Week => Duration::hours(168),
        }
    }

    /// The next rung up, clamped at the top of the ladder.
    pub fn advance(self) -> Self {
        match self {
            Self::Hour => Self::ThreeHours,
            Self::ThreeHours => Self::Day,
            Self::Day => Self::ThreeDays,
            Self::ThreeDays | Self::Week => Self::Week,
        }
    }

    /// Total mapping from a stored label to a bucket.
    ///
    /// Records with a missing or unrecognized interval fall back to the
    /// shortest bucket instead of blocking review.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(label) => label.parse().unwrap_or_else(|_| {
                warn!("unrecognized stored interval {label:?}, falling back to 1_hour");
                Self::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ladder_is_ordered() {
        let ladder: Vec<_> = IntervalBucket::iter().collect();
        assert_eq!(
            ladder,
            [
                IntervalBucket::Hour,
                IntervalBucket::ThreeHours,
                IntervalBucket::Day,
                IntervalBucket::ThreeDays,
                IntervalBucket::Week,
            ]
        );
        assert!(ladder.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn tokens_round_trip() {
        for bucket in IntervalBucket::iter() {
            let token = bucket.to_string();
            assert_eq!(token.parse::<IntervalBucket>(), Ok(bucket));
        }
        assert_eq!(IntervalBucket::Hour.to_string(), "1_hour");
        assert_eq!(IntervalBucket::ThreeHours.to_string(), "3_hours");
        assert_eq!(IntervalBucket::Day.to_string(), "24_hours");
        assert_eq!(IntervalBucket::ThreeDays.to_string(), "3_days");
        assert_eq!(IntervalBucket::Week.to_string(), "7_days");
    }

    #[test]
    fn durations_in_hours() {
        let hours: Vec<_> = IntervalBucket::iter()
            .map(|b| b.duration().num_hours())
            .collect();
        assert_eq!(hours, [1, 3, 24, 72, 168]);
    }

    #[test]
    fn advance_clamps_at_week() {
        assert_eq!(IntervalBucket::Hour.advance(), IntervalBucket::ThreeHours);
        assert_eq!(IntervalBucket::ThreeHours.advance(), IntervalBucket::Day);
        assert_eq!(IntervalBucket::Day.advance(), IntervalBucket::ThreeDays);
        assert_eq!(IntervalBucket::ThreeDays.advance(), IntervalBucket::Week);
        assert_eq!(IntervalBucket::Week.advance(), IntervalBucket::Week);
    }

    #[test]
    fn from_stored_is_lenient() {
        assert_eq!(IntervalBucket::from_stored(None), IntervalBucket::Hour);
        assert_eq!(IntervalBucket::from_stored(Some("")), IntervalBucket::Hour);
        assert_eq!(
            IntervalBucket::from_stored(Some("2_weeks")),
            IntervalBucket::Hour
        );
        assert_eq!(
            IntervalBucket::from_stored(Some("3_days")),
            IntervalBucket::ThreeDays
        );
    }
}
