//! Scrolling entities and their per-category stores
//!
//! Every entity carries two one-shot flags: `passed` gates the passing award,
//! `consumed` gates the contact effect (orb used, coin/collectible collected).
//! Each flips false to true at most once over the entity's lifetime.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Sketch collectibles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectibleKind {
    Fish,
    Yarn,
}

/// Entity variant with its shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Ground spike; `tall` only changes how it is drawn
    Obstacle { width: f32, height: f32, tall: bool },
    Platform { width: f32, height: f32 },
    Orb { radius: f32 },
    Coin { radius: f32 },
    Enemy { width: f32, height: f32 },
    Collectible { radius: f32, kind: CollectibleKind },
}

/// Which store an entity lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityCategory {
    Obstacle,
    Platform,
    Orb,
    Coin,
    Enemy,
    Collectible,
}

/// What touching an entity does to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Ends the run
    Fatal,
    /// Player can stand on it
    Support,
    /// One-shot upward impulse
    Bounce,
    /// One-shot pickup
    Collect,
}

/// Entity geometry for collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect(Rect),
    Circle { center: Vec2, radius: f32 },
}

impl EntityKind {
    pub fn category(&self) -> EntityCategory {
        match self {
            EntityKind::Obstacle { .. } => EntityCategory::Obstacle,
            EntityKind::Platform { .. } => EntityCategory::Platform,
            EntityKind::Orb { .. } => EntityCategory::Orb,
            EntityKind::Coin { .. } => EntityCategory::Coin,
            EntityKind::Enemy { .. } => EntityCategory::Enemy,
            EntityKind::Collectible { .. } => EntityCategory::Collectible,
        }
    }

    pub fn contact(&self) -> Contact {
        match self {
            EntityKind::Obstacle { .. } | EntityKind::Enemy { .. } => Contact::Fatal,
            EntityKind::Platform { .. } => Contact::Support,
            EntityKind::Orb { .. } => Contact::Bounce,
            EntityKind::Coin { .. } | EntityKind::Collectible { .. } => Contact::Collect,
        }
    }

    /// Score for getting past this entity, if it awards any
    pub fn pass_points(&self) -> Option<u64> {
        match self {
            EntityKind::Obstacle { .. } | EntityKind::Platform { .. } | EntityKind::Orb { .. } => {
                Some(PASS_POINTS)
            }
            EntityKind::Enemy { .. } => Some(ENEMY_PASS_POINTS),
            EntityKind::Coin { .. } | EntityKind::Collectible { .. } => None,
        }
    }
}

/// A live entity. `pos` is the top-left corner for boxes and the centre for
/// circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub pos: Vec2,
    pub kind: EntityKind,
    /// Passing award already given
    pub passed: bool,
    /// Contact effect already applied (orb used, pickup collected)
    pub consumed: bool,
}

impl Entity {
    pub fn new(id: u32, pos: Vec2, kind: EntityKind) -> Self {
        Self {
            id,
            pos,
            kind,
            passed: false,
            consumed: false,
        }
    }

    pub fn shape(&self) -> Shape {
        match self.kind {
            EntityKind::Obstacle { width, height, .. }
            | EntityKind::Platform { width, height }
            | EntityKind::Enemy { width, height } => {
                Shape::Rect(Rect::new(self.pos.x, self.pos.y, width, height))
            }
            EntityKind::Orb { radius }
            | EntityKind::Coin { radius }
            | EntityKind::Collectible { radius, .. } => Shape::Circle {
                center: self.pos,
                radius,
            },
        }
    }

    /// Axis-aligned bounds (circles are boxed)
    pub fn bounds(&self) -> Rect {
        match self.shape() {
            Shape::Rect(rect) => rect,
            Shape::Circle { center, radius } => Rect::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            ),
        }
    }

    /// Trailing (rightmost) edge
    pub fn right_edge(&self) -> f32 {
        self.bounds().right()
    }

    /// Fully past the left boundary of the playfield
    pub fn is_offscreen(&self) -> bool {
        self.right_edge() < 0.0
    }

    /// Does this entity touch `player`?
    pub fn touches(&self, player: &Rect) -> bool {
        match self.shape() {
            Shape::Rect(rect) => rect.overlaps(player),
            Shape::Circle { center, radius } => player.overlaps_circle(center, radius),
        }
    }

    /// Set the passing flag if this entity's trailing edge is behind `x`.
    /// Returns the award on the one tick the flag flips.
    pub fn try_pass(&mut self, x: f32) -> Option<u64> {
        let points = self.kind.pass_points()?;
        if self.passed || self.right_edge() >= x {
            return None;
        }
        self.passed = true;
        Some(points)
    }

    /// Set the consumed flag; true only the first time
    pub fn consume(&mut self) -> bool {
        !std::mem::replace(&mut self.consumed, true)
    }
}

/// Live entities, one ordered store per category (spawn order)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityStores {
    pub obstacles: Vec<Entity>,
    pub platforms: Vec<Entity>,
    pub orbs: Vec<Entity>,
    pub coins: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub collectibles: Vec<Entity>,
}

impl EntityStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, category: EntityCategory) -> &[Entity] {
        match category {
            EntityCategory::Obstacle => &self.obstacles,
            EntityCategory::Platform => &self.platforms,
            EntityCategory::Orb => &self.orbs,
            EntityCategory::Coin => &self.coins,
            EntityCategory::Enemy => &self.enemies,
            EntityCategory::Collectible => &self.collectibles,
        }
    }

    fn store_mut(&mut self, category: EntityCategory) -> &mut Vec<Entity> {
        match category {
            EntityCategory::Obstacle => &mut self.obstacles,
            EntityCategory::Platform => &mut self.platforms,
            EntityCategory::Orb => &mut self.orbs,
            EntityCategory::Coin => &mut self.coins,
            EntityCategory::Enemy => &mut self.enemies,
            EntityCategory::Collectible => &mut self.collectibles,
        }
    }

    /// Append to the store matching the entity's kind
    pub fn insert(&mut self, entity: Entity) {
        self.store_mut(entity.kind.category()).push(entity);
    }

    fn all_mut(&mut self) -> [&mut Vec<Entity>; 6] {
        [
            &mut self.obstacles,
            &mut self.platforms,
            &mut self.orbs,
            &mut self.coins,
            &mut self.enemies,
            &mut self.collectibles,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.obstacles
            .iter()
            .chain(&self.platforms)
            .chain(&self.orbs)
            .chain(&self.coins)
            .chain(&self.enemies)
            .chain(&self.collectibles)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.all_mut().into_iter().flat_map(|store| store.iter_mut())
    }

    /// Move everything left by `dx` and drop what scrolled off.
    /// Returns the number of entities removed.
    pub fn scroll(&mut self, dx: f32) -> usize {
        let mut removed = 0;
        for store in self.all_mut() {
            let before = store.len();
            for entity in store.iter_mut() {
                entity.pos.x -= dx;
            }
            store.retain(|e| !e.is_offscreen());
            removed += before - store.len();
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.all().iter().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn all(&self) -> [&Vec<Entity>; 6] {
        [
            &self.obstacles,
            &self.platforms,
            &self.orbs,
            &self.coins,
            &self.enemies,
            &self.collectibles,
        ]
    }

    pub fn clear(&mut self) {
        for store in self.all_mut() {
            store.clear();
        }
    }
}
