use std::cmp::Reverse;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use priority_queue::PriorityQueue;

/// Due-order queue over opaque card ids.
///
/// The storage layer feeds it `next_review_at` values as cards are created
/// and rescheduled; `pop_due` hands back the cards whose review time has
/// arrived, earliest first. Cards that are not yet due stay queued.
#[derive(Debug, Clone)]
pub struct ReviewQueue<K: Hash + Eq> {
    queue: PriorityQueue<K, Reverse<DateTime<Utc>>>,
}

impl<K: Hash + Eq> ReviewQueue<K> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
        }
    }

    /// Insert a card, or move an already-queued card to its new due time.
    pub fn upsert(&mut self, id: K, next_review_at: DateTime<Utc>) {
        self.queue.push(id, Reverse(next_review_at));
    }

    /// Drop a card from the queue, e.g. when its flashcard is deleted.
    pub fn remove(&mut self, id: &K) {
        self.queue.remove(id);
    }

    /// The earliest queued card and its due time, due or not.
    pub fn peek(&self) -> Option<(&K, DateTime<Utc>)> {
        self.queue.peek().map(|(id, &Reverse(at))| (id, at))
    }

    /// Pop the next card whose review time has arrived, if any.
    pub fn pop_due(&mut self, now: DateTime<Utc>) -> Option<K> {
        match self.queue.peek() {
            Some((_, &Reverse(at))) if at <= now => self.queue.pop().map(|(id, _)| id),
            _ => None,
        }
    }

    /// Pop every card due at `now`, in due order.
    pub fn drain_due(&mut self, now: DateTime<Utc>) -> Vec<K> {
        std::iter::from_fn(|| self.pop_due(now)).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<K: Hash + Eq> Default for ReviewQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
