//! Run state and core simulation types
//!
//! Everything a single run owns lives in `World`; it is created on start and
//! dropped when the run is discarded.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::checkpoint::CheckpointTracker;
use super::collision::Rect;
use super::coyote::CoyoteTimer;
use super::entity::{CollectibleKind, Entity, EntityKind, EntityStores};
use super::spawner::Spawner;
use crate::config::GameConfig;

/// Run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// No run (menu / level select)
    Idle,
    /// Active tick loop
    Running,
    /// Fatal collision; world frozen
    Over,
    /// Level length reached; world frozen
    Complete,
}

/// What is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    Level { id: u32 },
    /// Random spawns forever, deterministic per seed
    Endless { seed: u64 },
}

/// Bumpy the cat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (positive is down)
    pub vy: f32,
    pub gravity: f32,
    pub jump_power: f32,
    pub grounded: bool,
    /// Visual spin (radians)
    pub rotation: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_x, config.player_start_y),
            width: config.player_width,
            height: config.player_height,
            vy: 0.0,
            gravity: config.gravity,
            jump_power: config.jump_power,
            grounded: false,
            rotation: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Forgiving box used for fatal contacts
    pub fn hitbox(&self, inset: f32) -> Rect {
        self.rect().shrink(inset)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }
}

/// Per-run progression counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub mode: RunMode,
    pub status: RunStatus,
    /// Distance scrolled since run start
    pub progress: f32,
    pub score: u64,
    /// Sketch collectibles picked up this run
    pub collectibles: u32,
    /// Ticks simulated while running
    pub ticks: u64,
    /// Scroll speed (units/tick)
    pub speed: f32,
    /// Distance that completes the run (`None` for endless)
    pub length: Option<f32>,
}

impl RunState {
    pub fn new(mode: RunMode, speed: f32, length: Option<f32>) -> Self {
        Self {
            mode,
            status: RunStatus::Running,
            progress: 0.0,
            score: 0,
            collectibles: 0,
            ticks: 0,
            speed,
            length,
        }
    }

    /// Completion fraction; endless runs report 0
    pub fn progress_ratio(&self) -> f32 {
        match self.length {
            Some(length) => (self.progress / length).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    pub fn level_id(&self) -> Option<u32> {
        match self.mode {
            RunMode::Level { id } => Some(id),
            RunMode::Endless { .. } => None,
        }
    }
}

/// Things that happened during a tick or command, for audio and presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted { mode: RunMode },
    Jumped,
    OrbBounce { pos: Vec2 },
    Landed { pos: Vec2 },
    CoinCollected { pos: Vec2 },
    CollectibleCollected { kind: CollectibleKind, pos: Vec2 },
    Passed { points: u64 },
    Crashed { pos: Vec2 },
    LevelComplete { level_id: u32, score: u64 },
    CheckpointReached { distance: f32 },
    NewHighScore { score: u64 },
    BonusUnlocked,
}

/// Everything owned by one run
#[derive(Debug, Clone)]
pub struct World {
    pub run: RunState,
    pub player: Player,
    pub entities: EntityStores,
    pub spawner: Spawner,
    pub coyote: CoyoteTimer,
    pub checkpoints: CheckpointTracker,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl World {
    pub fn new(run: RunState, spawner: Spawner, config: &GameConfig) -> Self {
        Self {
            run,
            player: Player::new(config),
            entities: EntityStores::new(),
            spawner,
            coyote: CoyoteTimer::new(config.coyote_ticks),
            checkpoints: CheckpointTracker::new(config.checkpoint_interval),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create an entity of `kind` at `pos` in its store
    pub fn spawn(&mut self, pos: Vec2, kind: EntityKind) -> u32 {
        let id = self.next_entity_id();
        self.entities.insert(Entity::new(id, pos, kind));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_defaults() {
        let player = Player::new(&GameConfig::default());
        assert_eq!(player.pos, Vec2::new(100.0, 300.0));
        assert_eq!(player.bottom(), 340.0);
        assert!(!player.grounded);
        assert_eq!(player.hitbox(5.0), Rect::new(105.0, 305.0, 30.0, 30.0));
    }

    #[test]
    fn test_progress_ratio() {
        let mut run = RunState::new(RunMode::Level { id: 0 }, 10.0, Some(1000.0));
        run.progress = 250.0;
        assert_eq!(run.progress_ratio(), 0.25);
        assert_eq!(run.level_id(), Some(0));

        let endless = RunState::new(RunMode::Endless { seed: 1 }, 6.0, None);
        assert_eq!(endless.progress_ratio(), 0.0);
        assert_eq!(endless.level_id(), None);
    }
}
