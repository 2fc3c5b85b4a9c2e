use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::{
    catalog::Catalog,
    models::{Difficulty, QuizItem},
};

/// Draws up to `count` distinct items, optionally of one difficulty.
///
/// Ids in `exclude` are skipped as long as at least `count` other items are
/// left; otherwise the exclusion is ignored for this draw. A filtered set
/// smaller than `count` yields all of its items.
pub fn select_pool<R: Rng + ?Sized>(
    catalog: &Catalog,
    difficulty: Option<Difficulty>,
    exclude: &HashSet<u32>,
    count: usize,
    rng: &mut R,
) -> Vec<QuizItem> {
    let (pool, _) = draw(catalog, difficulty, exclude, count, rng);
    pool
}

/// Returns the draw and whether the exclusion set had to be dropped.
fn draw<R: Rng + ?Sized>(
    catalog: &Catalog,
    difficulty: Option<Difficulty>,
    exclude: &HashSet<u32>,
    count: usize,
    rng: &mut R,
) -> (Vec<QuizItem>, bool) {
    let filtered = catalog.filtered(difficulty);
    let fresh: Vec<&QuizItem> = filtered
        .iter()
        .copied()
        .filter(|item| !exclude.contains(&item.id))
        .collect();

    let (mut candidates, exhausted) = if fresh.len() >= count {
        (fresh, false)
    } else {
        (filtered, !exclude.is_empty())
    };

    candidates.shuffle(rng);
    candidates.truncate(count);
    (candidates.into_iter().cloned().collect(), exhausted)
}

/// Ids shown in recent play-throughs, kept to avoid immediate repeats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentItems {
    used: HashSet<u32>,
}

impl RecentItems {
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            used: ids.into_iter().collect(),
        }
    }

    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.used.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn contains(&self, id: u32) -> bool {
        self.used.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Selects a pool avoiding recent items and records what was picked.
    /// Once too few unseen items remain the history starts over.
    pub fn select<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        difficulty: Option<Difficulty>,
        count: usize,
        rng: &mut R,
    ) -> Vec<QuizItem> {
        let (pool, exhausted) = draw(catalog, difficulty, &self.used, count, rng);
        if exhausted {
            tracing::debug!("recent item history exhausted, starting over");
            self.used.clear();
        }
        self.used.extend(pool.iter().map(|item| item.id));
        pool
    }
}
