use std::{collections::HashSet, path::Path};

use color_eyre::{eyre::eyre, Result};

use crate::models::{Difficulty, QuizItem, QuizItems};

const BUILTIN: &[(u32, Difficulty, bool, &str)] = &[
    (1, Difficulty::Easy, false, "Cats are cute animals that love to nap in the sun. They also enjoy playing with strings and chasing laser pointers."),
    (2, Difficulty::Easy, true, "The universe is vast and mysterious, with billions of galaxies, each containing millions of stars and planets."),
    (3, Difficulty::Easy, false, "Just finished watching that movie everyone was talking about. It was... okay. Not great, not terrible. Just okay."),
    (4, Difficulty::Easy, true, "The benefits of regular exercise include improved cardiovascular health, increased energy, and enhanced mental clarity."),
    (5, Difficulty::Easy, false, "My cat knocked over a glass of water and just stared at me as if it was my fault. Cats are such drama queens!"),
    (6, Difficulty::Medium, true, "The mountains stood tall against the horizon, their peaks dusted with snow, while the valley below was alive with wildflowers."),
    (7, Difficulty::Medium, false, "I tried that new recipe you sent me. The pasta turned out amazing, but I burned the garlic bread. Typical me!"),
    (8, Difficulty::Medium, true, "In a recent study, scientists discovered that certain marine animals can adapt their diets based on environmental changes, showcasing remarkable resilience."),
    (9, Difficulty::Medium, false, "There\u{2019}s something magical about waking up early, brewing a cup of coffee, and watching the world slowly come alive."),
    (10, Difficulty::Medium, true, "The intricate design of ancient architecture often reflects the culture's deep connection with nature and spirituality."),
    (11, Difficulty::Hard, false, "Sometimes I wonder if dreams are just our brain\u{2019}s way of processing reality or if they\u{2019}re glimpses into alternate universes."),
    (12, Difficulty::Hard, true, "The artist's brush moved with deliberate precision, layering colors and textures to bring the abstract concept to life on the canvas."),
    (13, Difficulty::Hard, true, "Economists debate whether the recent market trends are indicative of a deeper structural shift or merely a cyclical fluctuation."),
    (14, Difficulty::Hard, false, "I watched as the waves crashed against the rocks, each one carrying away tiny fragments of the shoreline, slowly reshaping the coast."),
    (15, Difficulty::Hard, true, "Artificial intelligence has made significant strides, yet ethical questions around its deployment remain largely unresolved."),
];

/// The fixed, read-only set of passages the game draws from.
#[derive(Clone, Debug)]
pub struct Catalog {
    items: QuizItems,
}

impl Catalog {
    /// Builds a catalog, rejecting zero or duplicate ids and empty passages.
    pub fn new(items: QuizItems) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.id == 0 {
                return Err(eyre!("catalog item ids must be positive"));
            }
            if !seen.insert(item.id) {
                return Err(eyre!("duplicate catalog item id {}", item.id));
            }
            if item.content.trim().is_empty() {
                return Err(eyre!("catalog item {} has no content", item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn builtin() -> Self {
        let items = BUILTIN
            .iter()
            .map(|&(id, difficulty, is_ai, content)| QuizItem {
                id,
                content: content.to_string(),
                is_ai,
                difficulty: Some(difficulty),
            })
            .collect();
        Self { items }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let items: QuizItems = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "loaded {} catalog items from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&QuizItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Items of one difficulty, or the whole catalog when `difficulty` is `None`.
    pub fn filtered(&self, difficulty: Option<Difficulty>) -> Vec<&QuizItem> {
        self.items
            .iter()
            .filter(|item| difficulty.is_none() || item.difficulty == difficulty)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
