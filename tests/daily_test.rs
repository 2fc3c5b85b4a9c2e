mod common;

use std::collections::HashSet;

use ai_or_human::{
    catalog::Catalog,
    game::{daily::DAILY_STATS_KEY, daily_pool, DailyStats, StreakBook},
    store::{KeyValueStore, MemoryStore},
};
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn stats(last: &str, current: u32, max: u32, completed: bool) -> DailyStats {
    DailyStats {
        last_played_date: Some(date(last)),
        current_streak: current,
        max_streak: max,
        today_completed: completed,
    }
}

#[test]
fn test_consecutive_day_extends_streak() {
    let mut s = stats("2024-03-01", 3, 3, true);
    s.record_completion(date("2024-03-02"));

    assert_eq!(s.current_streak, 4);
    assert_eq!(s.max_streak, 4);
    assert!(s.today_completed);
    assert_eq!(s.last_played_date, Some(date("2024-03-02")));
}

#[test]
fn test_consecutive_day_below_best_keeps_best() {
    let mut s = stats("2024-02-28", 2, 7, true);
    s.record_completion(date("2024-02-29"));

    assert_eq!(s.current_streak, 3);
    assert_eq!(s.max_streak, 7);
}

#[test]
fn test_gap_resets_streak() {
    let mut s = stats("2024-03-01", 2, 5, true);

    s.rollover(date("2024-03-05"));
    assert_eq!(s.current_streak, 0);
    assert!(!s.today_completed);

    s.record_completion(date("2024-03-05"));
    assert_eq!(s.current_streak, 1);
    assert_eq!(s.max_streak, 5);
}

#[test]
fn test_second_completion_same_day_counts_once() {
    let mut s = DailyStats::default();
    let today = date("2024-06-10");

    s.record_completion(today);
    s.record_completion(today);

    assert_eq!(s.current_streak, 1);
    assert_eq!(s.max_streak, 1);
    assert!(s.completed_on(today));
}

#[test]
fn test_streak_across_year_boundary() {
    let mut s = stats("2023-12-31", 10, 10, true);
    s.record_completion(date("2024-01-01"));
    assert_eq!(s.current_streak, 11);
}

#[test]
fn test_current_never_exceeds_max() {
    let mut s = DailyStats::default();
    let mut day = date("2024-01-01");
    for n in 0..30 {
        if n % 7 != 3 {
            s.record_completion(day);
        }
        assert!(s.current_streak <= s.max_streak);
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn test_streak_book_persists_through_store() {
    let mut book = StreakBook::new(MemoryStore::new());
    assert!(!book.has_stats());

    let first = book.complete(date("2024-05-01")).unwrap();
    assert_eq!(first.current_streak, 1);
    assert!(book.has_stats());

    let second = book.complete(date("2024-05-02")).unwrap();
    assert_eq!(second.current_streak, 2);

    let loaded = book.load(date("2024-05-02"));
    assert_eq!(loaded, second);

    let raw = book.store().get(DAILY_STATS_KEY).unwrap();
    assert!(raw.contains(r#""lastPlayedDate":"2024-05-02""#));
    assert!(raw.contains(r#""currentStreak":2"#));
}

#[test]
fn test_load_applies_rollover() {
    let mut book = StreakBook::new(MemoryStore::new());
    book.complete(date("2024-05-01")).unwrap();

    let next_day = book.load(date("2024-05-02"));
    assert_eq!(next_day.current_streak, 1);
    assert!(!next_day.today_completed);

    let much_later = book.load(date("2024-05-20"));
    assert_eq!(much_later.current_streak, 0);
    assert_eq!(much_later.max_streak, 1);
}

#[test]
fn test_unreadable_stats_start_fresh() {
    let mut store = MemoryStore::new();
    store.set(DAILY_STATS_KEY, "{not json".to_string());

    let book = StreakBook::new(store);
    assert_eq!(book.load(date("2024-05-01")), DailyStats::default());
}

#[test]
fn test_daily_pool_is_deterministic() {
    let catalog = Catalog::builtin();
    let day = date("2024-07-14");

    let a = daily_pool(&catalog, day, 5);
    let b = daily_pool(&catalog, day, 5);
    assert_eq!(a, b);
    assert_eq!(a.len(), 5);

    let unique: HashSet<u32> = a.iter().map(|item| item.id).collect();
    assert_eq!(unique.len(), 5);
    assert!(unique.iter().all(|&id| catalog.contains(id)));
}

#[test]
fn test_daily_pool_shrinks_with_small_catalog() {
    let catalog = common::tiny_catalog();
    let pool = daily_pool(&catalog, date("2024-07-14"), 5);
    assert_eq!(pool.len(), 3);
}
