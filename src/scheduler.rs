use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, SchedulerError};
use crate::interval::IntervalBucket;

/// How well the card came back during a review.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Recall {
    Hard,
    Medium,
    Easy,
}

/// Replacement scheduling fields for a reviewed card. The storage layer
/// persists these verbatim, merged with the card fields the scheduler never
/// reads (question, answer, media).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scheduled {
    pub next_interval: IntervalBucket,
    pub next_review_at: DateTime<Utc>,
    pub last_reviewed_at: DateTime<Utc>,
}

/// The bucket each recall quality would move a card to, so a UI can label
/// its answer buttons without re-deriving the transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextStates {
    pub hard: IntervalBucket,
    pub medium: IntervalBucket,
    pub easy: IntervalBucket,
}

/// The quality-driven transition: easy climbs one rung (clamped), hard
/// resets to the bottom, medium stays put.
pub fn next_bucket(current: IntervalBucket, quality: Recall) -> IntervalBucket {
    match quality {
        Recall::Easy => current.advance(),
        Recall::Medium => current,
        Recall::Hard => IntervalBucket::Hour,
    }
}

pub fn next_states(current: IntervalBucket) -> NextStates {
    NextStates {
        hard: next_bucket(current, Recall::Hard),
        medium: next_bucket(current, Recall::Medium),
        easy: next_bucket(current, Recall::Easy),
    }
}

/// Compute the next scheduling state for one review.
///
/// A `chosen` interval bypasses the quality-driven transition entirely; the
/// quality is still the caller's to record in the review history. `now` is
/// supplied by the caller so the engine never touches the wall clock.
pub fn schedule(
    current: IntervalBucket,
    quality: Recall,
    chosen: Option<IntervalBucket>,
    now: DateTime<Utc>,
) -> Scheduled {
    let next_interval = chosen.unwrap_or_else(|| next_bucket(current, quality));
    let next_review_at = now + next_interval.duration();
    debug!("review {quality} on {current}: next {next_interval}, due {next_review_at}");
    Scheduled {
        next_interval,
        next_review_at,
        last_reviewed_at: now,
    }
}

/// String-label entry point for callers holding persisted record fields or
/// raw UI tokens.
///
/// Strict where the UI is strict (`quality`, `chosen`), lenient on the
/// stored `current` interval so an old or corrupted record never blocks a
/// review.
pub fn schedule_raw(
    current: Option<&str>,
    quality: &str,
    chosen: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Scheduled> {
    let quality: Recall = quality
        .parse()
        .map_err(|_| SchedulerError::InvalidQuality)?;
    let chosen = chosen
        .map(|label| {
            label
                .parse::<IntervalBucket>()
                .map_err(|_| SchedulerError::InvalidInterval)
        })
        .transpose()?;
    Ok(schedule(
        IntervalBucket::from_stored(current),
        quality,
        chosen,
        now,
    ))
}
