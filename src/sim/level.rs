//! Level definitions and the level catalog
//!
//! A level is a scroll speed, a total length and a list of spawn events keyed
//! by scroll distance. Events may be listed in any order; each fires at most
//! once per run (the fired flags live in the spawner, not here).

use serde::{Deserialize, Serialize};

use super::catalog;
use super::entity::CollectibleKind;
use crate::error::LevelError;

/// Difficulty label shown on the level select screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    #[serde(alias = "INSANE")]
    Insane,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Insane => "INSANE",
        }
    }
}

/// What a spawn event creates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SpawnKind {
    Spike,
    TallSpike,
    /// Regular spike with an explicit height
    SizedSpike { height: f32 },
    /// Platform whose top sits `height` above the ground line
    Platform { height: f32 },
    Orb,
    Coin,
    Enemy,
    Collectible { kind: CollectibleKind },
}

/// A spawn scheduled at a scroll distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnEvent {
    #[serde(flatten)]
    pub kind: SpawnKind,
    /// Scroll progress at which the entity enters on the right edge
    pub at: f32,
}

impl SpawnEvent {
    pub const fn new(kind: SpawnKind, at: f32) -> Self {
        Self { kind, at }
    }
}

/// A playable level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub id: u32,
    pub name: String,
    pub difficulty: Difficulty,
    /// Scroll distance that completes the level
    pub length: f32,
    /// Scroll speed (units/tick)
    pub speed: f32,
    /// Background tint for presentation
    #[serde(default)]
    pub color: String,
    /// Bonus levels are locked until every main level is complete
    #[serde(default)]
    pub bonus: bool,
    pub pattern: Vec<SpawnEvent>,
}

impl LevelDefinition {
    /// Fraction of the level scrolled so far, clamped to [0, 1]
    pub fn progress_ratio(&self, progress: f32) -> f32 {
        (progress / self.length).clamp(0.0, 1.0)
    }

    fn validate(&self) -> Result<(), LevelError> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(LevelError::InvalidLength { id: self.id });
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(LevelError::InvalidSpeed { id: self.id });
        }
        Ok(())
    }
}

/// Ordered list of levels (main levels first by convention)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LevelCatalog {
    /// The six shipped levels: five main levels and the Clubstep bonus
    pub fn builtin() -> Self {
        Self {
            levels: catalog::builtin_levels(),
        }
    }

    /// Build a catalog, rejecting empty lists, duplicate ids and bad numbers
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::EmptyCatalog);
        }
        for (i, level) in levels.iter().enumerate() {
            level.validate()?;
            if levels[..i].iter().any(|l| l.id == level.id) {
                return Err(LevelError::DuplicateId(level.id));
            }
        }
        Ok(Self { levels })
    }

    /// Parse a JSON level pack (an array of level definitions)
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let levels: Vec<LevelDefinition> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    pub fn get(&self, id: u32) -> Option<&LevelDefinition> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Like `get`, for callers that want an error
    pub fn require(&self, id: u32) -> Result<&LevelDefinition, LevelError> {
        self.get(id).ok_or(LevelError::UnknownLevel(id))
    }

    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Ids of the levels that count toward the bonus unlock, in catalog order
    pub fn main_level_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.levels.iter().filter(|l| !l.bonus).map(|l| l.id)
    }

    /// The main level after `id` in catalog order, if any
    pub fn next_main_after(&self, id: u32) -> Option<u32> {
        let pos = self.levels.iter().position(|l| l.id == id)?;
        self.levels[pos + 1..]
            .iter()
            .find(|l| !l.bonus)
            .map(|l| l.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = LevelCatalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.main_level_ids().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);

        let bonus = catalog.get(5).unwrap();
        assert!(bonus.bonus);
        assert_eq!(bonus.name, "Clubstep");
        assert_eq!(bonus.difficulty, Difficulty::Insane);
        assert_eq!(bonus.speed, 8.5);
    }

    #[test]
    fn test_builtin_events_inside_level() {
        for level in LevelCatalog::builtin().levels() {
            assert!(!level.pattern.is_empty(), "{} has no events", level.name);
            for event in &level.pattern {
                assert!(event.at > 0.0 && event.at < level.length);
            }
        }
    }

    #[test]
    fn test_next_main_after() {
        let catalog = LevelCatalog::builtin();
        assert_eq!(catalog.next_main_after(0), Some(1));
        assert_eq!(catalog.next_main_after(4), None);
        assert_eq!(catalog.next_main_after(5), None);
        assert_eq!(catalog.next_main_after(42), None);
    }

    #[test]
    fn test_level_pack_json() {
        let json = r#"[
            {
                "id": 7,
                "name": "Tiny",
                "difficulty": "INSANE",
                "length": 1000,
                "speed": 10,
                "pattern": [
                    { "type": "spike", "at": 500 },
                    { "type": "platform", "at": 600, "height": 60 },
                    { "type": "collectible", "at": 700, "kind": "fish" }
                ]
            }
        ]"#;
        let catalog = LevelCatalog::from_json(json).unwrap();
        let level = catalog.get(7).unwrap();
        assert_eq!(level.difficulty, Difficulty::Insane);
        assert!(!level.bonus);
        assert_eq!(level.pattern[0], SpawnEvent::new(SpawnKind::Spike, 500.0));
        assert_eq!(
            level.pattern[1].kind,
            SpawnKind::Platform { height: 60.0 }
        );
        assert_eq!(
            level.pattern[2].kind,
            SpawnKind::Collectible {
                kind: CollectibleKind::Fish
            }
        );
    }

    #[test]
    fn test_catalog_validation() {
        assert!(matches!(
            LevelCatalog::from_json("[]"),
            Err(LevelError::EmptyCatalog)
        ));

        let mut level = LevelCatalog::builtin().levels()[0].clone();
        let dup = LevelCatalog::new(vec![level.clone(), level.clone()]);
        assert!(matches!(dup, Err(LevelError::DuplicateId(0))));

        level.speed = 0.0;
        assert!(matches!(
            LevelCatalog::new(vec![level.clone()]),
            Err(LevelError::InvalidSpeed { id: 0 })
        ));

        level.speed = 5.0;
        level.length = -1.0;
        assert!(matches!(
            LevelCatalog::new(vec![level]),
            Err(LevelError::InvalidLength { id: 0 })
        ));
    }

    #[test]
    fn test_require_unknown() {
        let catalog = LevelCatalog::builtin();
        assert!(matches!(catalog.require(99), Err(LevelError::UnknownLevel(99))));
        assert!(catalog.require(3).is_ok());
    }

    #[test]
    fn test_progress_ratio_clamped() {
        let catalog = LevelCatalog::builtin();
        let level = &catalog.levels()[0];
        assert_eq!(level.progress_ratio(-5.0), 0.0);
        assert_eq!(level.progress_ratio(level.length * 2.0), 1.0);
    }
}
