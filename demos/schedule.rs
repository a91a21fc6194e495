use chrono::{Duration, Utc};
use srs_ladder::{CardState, IntervalBucket, Recall, ReviewQueue, next_states, schedule_raw};

fn schedule_new_card() -> Result<(), Box<dyn std::error::Error>> {
    // Create a new card, due one hour after creation
    let created_at = Utc::now();
    let mut card = CardState::new(created_at);
    println!("First review due: {}", card.next_review_at);

    // Show what each answer button would do
    let preview = next_states(card.current_interval);
    println!("Hard   -> {}", preview.hard);
    println!("Medium -> {}", preview.medium);
    println!("Easy   -> {}", preview.easy);

    // The card came back easily at review time
    let scheduled = card.review(Recall::Easy, None, card.next_review_at);
    println!("Next interval: {}", scheduled.next_interval);
    println!("Next review due: {}", scheduled.next_review_at);
    Ok(())
}

fn schedule_existing_card() -> Result<(), Box<dyn std::error::Error>> {
    // An existing card sitting on the 24_hours rung, reviewed a day ago
    let now = Utc::now();
    let mut card = CardState::new(now - Duration::hours(25));
    card.review(Recall::Easy, Some(IntervalBucket::Day), now - Duration::hours(24));
    assert!(card.is_due(now));

    // The stored record fields can also drive the raw string boundary
    let scheduled = schedule_raw(
        Some(&card.current_interval.to_string()),
        "hard",
        None,
        now,
    )?;
    println!("After a hard recall: {}", scheduled.next_interval);
    println!("Next review due: {}", scheduled.next_review_at);

    // The user can pin the interval instead of letting quality decide
    let pinned = card.review(Recall::Hard, Some(IntervalBucket::Week), now);
    println!("Pinned to: {}", pinned.next_interval);
    println!("History so far: {} reviews", card.review_history.len());
    Ok(())
}

fn drain_review_queue() {
    let now = Utc::now();
    let mut queue = ReviewQueue::new();
    queue.upsert("capital-of-france", now - Duration::hours(2));
    queue.upsert("newtons-first-law", now - Duration::hours(1));
    queue.upsert("photosynthesis", now + Duration::hours(3));

    for card_id in queue.drain_due(now) {
        println!("Due for review: {card_id}");
    }
    println!("Still queued: {}", queue.len());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()?;

    println!("Scheduling a new card:");
    schedule_new_card()?;

    println!("\nScheduling an existing card:");
    schedule_existing_card()?;

    println!("\nDraining the review queue:");
    drain_review_queue();

    Ok(())
}
