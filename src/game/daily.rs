use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{catalog::Catalog, models::QuizItem, store::KeyValueStore};

pub const DAILY_STATS_KEY: &str = "dailyStats";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    #[serde(default)]
    pub last_played_date: Option<NaiveDate>,
    pub current_streak: u32,
    pub max_streak: u32,
    pub today_completed: bool,
}

impl DailyStats {
    /// Brings stored stats up to `today`: a streak survives a one-day gap
    /// and is broken by anything longer.
    pub fn rollover(&mut self, today: NaiveDate) {
        let Some(last) = self.last_played_date else {
            return;
        };
        if last == today {
            return;
        }

        if today.pred_opt() != Some(last) {
            self.current_streak = 0;
        }
        self.last_played_date = Some(today);
        self.today_completed = false;
    }

    /// Records a finished daily round. A second completion on the same day
    /// changes nothing.
    pub fn record_completion(&mut self, today: NaiveDate) {
        self.rollover(today);
        if self.today_completed {
            return;
        }

        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        self.today_completed = true;
        self.last_played_date = Some(today);
    }

    pub fn completed_on(&self, today: NaiveDate) -> bool {
        self.today_completed && self.last_played_date == Some(today)
    }
}

/// Loads and saves [`DailyStats`] through a key-value store.
pub struct StreakBook<S> {
    store: S,
}

impl<S: KeyValueStore> StreakBook<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn has_stats(&self) -> bool {
        self.store.get(DAILY_STATS_KEY).is_some()
    }

    /// Stats as of `today`. Missing or unreadable data reads as a fresh start.
    pub fn load(&self, today: NaiveDate) -> DailyStats {
        let mut stats = self
            .store
            .get(DAILY_STATS_KEY)
            .and_then(|json| match serde_json::from_str::<DailyStats>(&json) {
                Ok(stats) => Some(stats),
                Err(e) => {
                    tracing::warn!("discarding unreadable daily stats: {e}");
                    None
                }
            })
            .unwrap_or_default();
        stats.rollover(today);
        stats
    }

    pub fn save(&mut self, stats: &DailyStats) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(stats)?;
        self.store.set(DAILY_STATS_KEY, json);
        Ok(())
    }

    pub fn complete(&mut self, today: NaiveDate) -> Result<DailyStats, serde_json::Error> {
        let mut stats = self.load(today);
        stats.record_completion(today);
        self.save(&stats)?;
        tracing::info!(
            "daily challenge completed, streak {} (best {})",
            stats.current_streak,
            stats.max_streak
        );
        Ok(stats)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// The same `count` items for everyone on `date`.
pub fn daily_pool(catalog: &Catalog, date: NaiveDate, count: usize) -> Vec<QuizItem> {
    let len = catalog.len() as u64;
    if len == 0 {
        return Vec::new();
    }

    let seed = date_seed(date);
    let mut items: Vec<&QuizItem> = catalog.items().iter().collect();
    items.sort_by_key(|item| (u64::from(item.id) * seed) % len);
    items.into_iter().take(count).cloned().collect()
}

fn date_seed(date: NaiveDate) -> u64 {
    let year = u64::try_from(date.year()).unwrap_or(0);
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}
