//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only (endless mode)
//! - Stable iteration order (spawn order within each store)
//! - No rendering, storage or platform dependencies

mod catalog;
pub mod checkpoint;
pub mod collision;
pub mod coyote;
pub mod entity;
pub mod level;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use checkpoint::CheckpointTracker;
pub use collision::Rect;
pub use coyote::CoyoteTimer;
pub use entity::{CollectibleKind, Contact, Entity, EntityCategory, EntityKind, EntityStores};
pub use level::{Difficulty, LevelCatalog, LevelDefinition, SpawnEvent, SpawnKind};
pub use spawner::Spawner;
pub use state::{GameEvent, Player, RunMode, RunState, RunStatus, World};
pub use tick::{jump, tick};
