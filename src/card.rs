use std::collections::HashMap;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::interval::IntervalBucket;
use crate::scheduler::{Recall, Scheduled, schedule};

/// One applied review, as stored in the card's append-only history log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub reviewed_at: DateTime<Utc>,
    pub quality: Recall,
}

/// Per-card scheduling state.
///
/// Persisted alongside the card's content fields (question, answer, media),
/// which the scheduler never reads or writes. Invariant: `next_review_at` is
/// always `last_reviewed_at` (or the creation time) plus the duration of
/// `current_interval`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    pub current_interval: IntervalBucket,
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub next_review_at: DateTime<Utc>,
    #[serde(default)]
    pub review_history: Vec<ReviewEntry>,
}

impl CardState {
    /// Fresh card: shortest bucket, first review due an hour after creation.
    pub fn new(created_at: DateTime<Utc>) -> Self {
        let current_interval = IntervalBucket::default();
        Self {
            current_interval,
            last_reviewed_at: None,
            next_review_at: created_at + current_interval.duration(),
            review_history: Vec::new(),
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.next_review_at
    }

    /// Merge a schedule result back into the state and append the review to
    /// the history log.
    ///
    /// The quality is recorded even when the transition was driven by a
    /// manual override.
    pub fn apply(&mut self, quality: Recall, scheduled: Scheduled) {
        self.current_interval = scheduled.next_interval;
        self.last_reviewed_at = Some(scheduled.last_reviewed_at);
        self.next_review_at = scheduled.next_review_at;
        self.review_history.push(ReviewEntry {
            reviewed_at: scheduled.last_reviewed_at,
            quality,
        });
    }

    /// Run one full review against this state: compute the transition, merge
    /// it back, and return the scheduled fields for persistence.
    pub fn review(
        &mut self,
        quality: Recall,
        chosen: Option<IntervalBucket>,
        now: DateTime<Utc>,
    ) -> Scheduled {
        let scheduled = schedule(self.current_interval, quality, chosen, now);
        self.apply(quality, scheduled);
        scheduled
    }

    /// How often each quality shows up in the history log.
    pub fn quality_counts(&self) -> HashMap<Recall, usize> {
        self.review_history.iter().map(|r| r.quality).counts()
    }
}
