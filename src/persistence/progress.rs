//! Player progress across sessions

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    BONUS_UNLOCKED_KEY, COMPLETED_LEVELS_KEY, HIGH_SCORE_KEY, ProgressStore, StoredValue,
};

/// High score, completed levels and the bonus flag
///
/// Every mutation is monotonic: the high score only rises, the completed set
/// only grows and the bonus flag never clears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentProgress {
    pub high_score: u64,
    pub completed: BTreeSet<u32>,
    pub bonus_unlocked: bool,
}

impl PersistentProgress {
    /// Read progress, substituting zero values for anything missing or corrupt
    pub fn load<S: ProgressStore>(store: &S) -> Self {
        let high_score = match store.load_scalar(HIGH_SCORE_KEY) {
            Some(v) if v >= 0.0 => v.floor() as u64,
            Some(v) => {
                log::warn!("Ignoring negative high score {}", v);
                0
            }
            None => 0,
        };
        let progress = Self {
            high_score,
            completed: store.load_list(COMPLETED_LEVELS_KEY).into_iter().collect(),
            bonus_unlocked: store.load_flag(BONUS_UNLOCKED_KEY),
        };
        log::info!(
            "Loaded progress: high score {}, {} levels completed, bonus {}",
            progress.high_score,
            progress.completed.len(),
            if progress.bonus_unlocked { "unlocked" } else { "locked" }
        );
        progress
    }

    /// Raise the high score if `score` beats it; true when it did
    pub fn record_score<S: ProgressStore>(&mut self, score: u64, store: &mut S) -> bool {
        if score <= self.high_score {
            return false;
        }
        self.high_score = score;
        store.save(HIGH_SCORE_KEY, &StoredValue::Scalar(score as f64));
        true
    }

    /// Add `id` to the completed set; true when it was new
    pub fn mark_completed<S: ProgressStore>(&mut self, id: u32, store: &mut S) -> bool {
        if !self.completed.insert(id) {
            return false;
        }
        let ids = self.completed.iter().copied().collect();
        store.save(COMPLETED_LEVELS_KEY, &StoredValue::List(ids));
        true
    }

    /// Set the bonus flag; true the first time
    pub fn unlock_bonus<S: ProgressStore>(&mut self, store: &mut S) -> bool {
        if self.bonus_unlocked {
            return false;
        }
        self.bonus_unlocked = true;
        store.save(BONUS_UNLOCKED_KEY, &StoredValue::Flag(true));
        true
    }

    pub fn is_completed(&self, id: u32) -> bool {
        self.completed.contains(&id)
    }

    /// True when every id in `ids` has been completed
    pub fn completed_all(&self, ids: &[u32]) -> bool {
        ids.iter().all(|id| self.completed.contains(id))
    }
}
