//! Deterministic sample posts inserted into an empty store.

use board_core::domain::PostInput;
use chrono::{DateTime, Duration, Utc};

pub const SEED_POST_COUNT: usize = 35;

pub const SEED_AUTHORS: [&str; 5] = [
    "admin",
    "Hong Gildong",
    "Im Kkeokjeong",
    "Lee Mongryong",
    "Seong Chunhyang",
];

/// Build the seed rows relative to `now`. Row `i` is stamped `i` hours in the
/// past, so ids ascend while timestamps descend.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<(PostInput, DateTime<Utc>)> {
    (1..=SEED_POST_COUNT)
        .map(|i| {
            let input = PostInput::new(
                format!("Sample post {i}"),
                format!("This is sample post #{i}. Seeded into SQLite at startup."),
                SEED_AUTHORS[(i - 1) % SEED_AUTHORS.len()],
            );
            (input, now - Duration::hours(i as i64))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        let now = Utc::now();
        let rows = seed_posts(now);

        assert_eq!(rows.len(), SEED_POST_COUNT);
        assert_eq!(rows[0].0.title, "Sample post 1");
        assert_eq!(rows[0].0.author, "admin");
        assert_eq!(rows[5].0.author, "admin");
        assert_eq!(rows[6].0.author, "Hong Gildong");
        assert_eq!(rows[34].1, now - Duration::hours(35));
    }
}
