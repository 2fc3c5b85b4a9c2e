use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};

use ulid::Ulid;

use crate::game::{GameSession, TierQueue};

#[derive(Clone, Debug)]
pub enum PlayMode {
    Practice,
    Daily,
    Challenge {
        session: GameSession,
        token: String,
        player_name: String,
    },
}

/// One play-through held for a browser.
#[derive(Clone, Debug)]
pub struct Play {
    pub mode: PlayMode,
    pub tiers: TierQueue,
    started: Instant,
}

impl Play {
    pub fn new(mode: PlayMode, tiers: TierQueue) -> Self {
        Self {
            mode,
            tiers,
            started: Instant::now(),
        }
    }
}

/// In-memory plays keyed by the token in the player's cookie.
#[derive(Clone)]
pub struct PlayStore {
    plays: Arc<Mutex<HashMap<String, Play>>>,
    ttl: Duration,
}

impl PlayStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            plays: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Stores a new play and returns its token. Expired plays are dropped.
    pub fn insert(&self, play: Play) -> String {
        let token = Ulid::new().to_string();
        let mut plays = self.lock();

        let before = plays.len();
        plays.retain(|_, p| p.started.elapsed() < self.ttl);
        if plays.len() < before {
            tracing::debug!("evicted {} expired plays", before - plays.len());
        }

        plays.insert(token.clone(), play);
        token
    }

    pub fn get(&self, token: &str) -> Option<Play> {
        self.lock().get(token).cloned()
    }

    /// Runs `f` against the play for `token`, if there is one.
    pub fn update<T>(&self, token: &str, f: impl FnOnce(&mut Play) -> T) -> Option<T> {
        self.lock().get_mut(token).map(f)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Play>> {
        self.plays.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
