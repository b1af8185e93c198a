//! Game core: the single owner of all run state
//!
//! Wraps the deterministic simulation with the progression side effects
//! (persisted high score, completed levels, bonus unlock), run-generation
//! gated banners and cosmetic particles. Input arrives as discrete commands;
//! presentation reads `snapshot()` and drains events.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::GameConfig;
use crate::fx::{Particle, ParticleSystem};
use crate::persistence::{PersistentProgress, ProgressStore};
use crate::sim::{
    self, EntityStores, GameEvent, LevelCatalog, Player, RunMode, RunState, RunStatus, Spawner,
    World,
};
use crate::timers::{DeferredQueue, RunGeneration};

/// Transient overlay text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Banner {
    LevelComplete { name: String },
    Checkpoint { distance: f32 },
    NewHighScore { score: u64 },
    BonusUnlocked,
}

/// Deferred effects
#[derive(Debug, Clone, Copy, PartialEq)]
enum TimedEffect {
    /// Hide the banner with this serial, if it is still showing
    ClearBanner(u64),
}

/// Read-only view handed to presentation each frame
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub status: RunStatus,
    pub mode: Option<RunMode>,
    pub level_name: Option<&'a str>,
    pub progress: f32,
    pub progress_ratio: f32,
    pub score: u64,
    pub collectibles: u32,
    pub high_score: u64,
    pub bonus_unlocked: bool,
    pub completed_levels: &'a BTreeSet<u32>,
    pub latest_checkpoint: Option<f32>,
    pub player: Option<&'a Player>,
    pub entities: Option<&'a EntityStores>,
    pub particles: &'a [Particle],
    pub banner: Option<&'a Banner>,
}

/// Platformer core over a progress store
pub struct GameCore<S: ProgressStore> {
    config: GameConfig,
    catalog: LevelCatalog,
    store: S,
    progress: PersistentProgress,
    /// `None` while idle
    world: Option<World>,
    generation: RunGeneration,
    timers: DeferredQueue<TimedEffect>,
    /// Latest time seen by `poll_timers`
    clock_ms: f64,
    banner: Option<Banner>,
    banner_serial: u64,
    particles: ParticleSystem,
    events: Vec<GameEvent>,
}

impl<S: ProgressStore> GameCore<S> {
    /// Core with the built-in levels
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_catalog(config, LevelCatalog::builtin(), store)
    }

    /// Core over `catalog`. Out-of-range tuning is replaced by the defaults.
    pub fn with_catalog(config: GameConfig, catalog: LevelCatalog, store: S) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Using default config: {}", e);
                GameConfig::default()
            }
        };
        let progress = PersistentProgress::load(&store);
        let particles = ParticleSystem::new(0, config.max_particles);
        Self {
            config,
            catalog,
            store,
            progress,
            world: None,
            generation: RunGeneration::default(),
            timers: DeferredQueue::new(),
            clock_ms: 0.0,
            banner: None,
            banner_serial: 0,
            particles,
            events: Vec::new(),
        }
    }

    // === Queries ===

    pub fn status(&self) -> RunStatus {
        self.world
            .as_ref()
            .map_or(RunStatus::Idle, |w| w.run.status)
    }

    pub fn run(&self) -> Option<&RunState> {
        self.world.as_ref().map(|w| &w.run)
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn progress(&self) -> &PersistentProgress {
        &self.progress
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn generation(&self) -> RunGeneration {
        self.generation
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Whether `id` exists and is not a locked bonus level
    pub fn is_playable(&self, id: u32) -> bool {
        self.catalog
            .get(id)
            .is_some_and(|l| !l.bonus || self.progress.bonus_unlocked)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let run = self.run();
        let level_name = run
            .and_then(RunState::level_id)
            .and_then(|id| self.catalog.get(id))
            .map(|l| l.name.as_str());
        Snapshot {
            status: self.status(),
            mode: run.map(|r| r.mode),
            level_name,
            progress: run.map_or(0.0, |r| r.progress),
            progress_ratio: run.map_or(0.0, RunState::progress_ratio),
            score: run.map_or(0, |r| r.score),
            collectibles: run.map_or(0, |r| r.collectibles),
            high_score: self.progress.high_score,
            bonus_unlocked: self.progress.bonus_unlocked,
            completed_levels: &self.progress.completed,
            latest_checkpoint: self.world.as_ref().and_then(|w| w.checkpoints.latest()),
            player: self.world.as_ref().map(|w| &w.player),
            entities: self.world.as_ref().map(|w| &w.entities),
            particles: self.particles.particles(),
            banner: self.banner.as_ref(),
        }
    }

    /// Take every event produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.collect_world_events();
        std::mem::take(&mut self.events)
    }

    // === Commands ===

    /// Start level `id` from the menu. Ignored unless idle, or when the level
    /// is unknown or a locked bonus level.
    pub fn on_start(&mut self, id: u32) -> bool {
        if self.status() != RunStatus::Idle {
            log::warn!("Start ignored: a run is already in progress");
            return false;
        }
        self.begin(RunMode::Level { id })
    }

    /// Start an endless run from the menu
    pub fn on_start_endless(&mut self, seed: u64) -> bool {
        if self.status() != RunStatus::Idle {
            log::warn!("Start ignored: a run is already in progress");
            return false;
        }
        self.begin(RunMode::Endless { seed })
    }

    pub fn on_jump(&mut self) -> bool {
        let Some(world) = self.world.as_mut() else {
            return false;
        };
        if world.run.status != RunStatus::Running {
            return false;
        }
        let jumped = sim::jump(world, &self.config);
        self.collect_world_events();
        jumped
    }

    /// Play the current mode again from the start
    pub fn on_restart(&mut self) -> bool {
        let Some(mode) = self.run().map(|r| r.mode) else {
            return false;
        };
        self.enter_idle();
        self.begin(mode)
    }

    /// Resume a crashed run from its latest checkpoint
    pub fn on_restart_from_checkpoint(&mut self) -> bool {
        let Some(world) = self.world.as_ref() else {
            return false;
        };
        if world.run.status != RunStatus::Over {
            return false;
        }
        let Some(distance) = world.checkpoints.latest() else {
            return false;
        };
        let mode = world.run.mode;

        self.enter_idle();
        if !self.begin(mode) {
            return false;
        }
        if let Some(world) = self.world.as_mut() {
            world.run.progress = distance;
            world.spawner.skip_through(distance);
            world.checkpoints.resume_from(distance);
        }
        log::info!("Resumed from checkpoint at {:.0}", distance);
        true
    }

    /// Back to level select; discards the run
    pub fn on_return_to_menu(&mut self) -> bool {
        if self.world.is_none() {
            return false;
        }
        self.enter_idle();
        true
    }

    /// After completing a main level, start the next one
    pub fn on_next_level(&mut self) -> bool {
        let next = match self.run() {
            Some(run) if run.status == RunStatus::Complete => run
                .level_id()
                .and_then(|id| self.catalog.next_main_after(id)),
            _ => None,
        };
        let Some(next) = next else {
            return false;
        };
        self.enter_idle();
        self.begin(RunMode::Level { id: next })
    }

    /// Secret unlock path; true the first time
    pub fn on_unlock_bonus(&mut self) -> bool {
        if !self.progress.unlock_bonus(&mut self.store) {
            return false;
        }
        log::info!("Bonus level unlocked");
        self.events.push(GameEvent::BonusUnlocked);
        self.show_banner(Banner::BonusUnlocked);
        true
    }

    /// Replace the tuning from the menu. Rejected mid-run or when out of range.
    pub fn on_configure(&mut self, config: GameConfig) -> bool {
        if self.world.is_some() {
            log::warn!("Config change ignored: a run is in progress");
            return false;
        }
        if let Err(e) = config.validate() {
            log::warn!("Config change ignored: {}", e);
            return false;
        }
        self.particles = ParticleSystem::new(0, config.max_particles);
        self.config = config;
        true
    }

    // === Frame driving ===

    /// Advance one fixed step. No-op unless a run is in progress.
    pub fn tick(&mut self) {
        let Some(world) = self.world.as_mut() else {
            return;
        };
        if world.run.status != RunStatus::Running {
            return;
        }

        sim::tick(world, &self.config);
        let status = world.run.status;
        let mode = world.run.mode;
        let score = world.run.score;
        let new_events = std::mem::take(&mut world.events);

        for event in &new_events {
            self.particles.observe(event, self.config.player_width);
            if let GameEvent::CheckpointReached { distance } = event {
                self.show_banner(Banner::Checkpoint {
                    distance: *distance,
                });
            }
        }
        self.particles.update();
        self.events.extend(new_events);

        match status {
            RunStatus::Over => self.finish_over(score),
            RunStatus::Complete => self.finish_complete(mode, score),
            RunStatus::Idle | RunStatus::Running => {}
        }
    }

    /// Apply deferred effects due at `now_ms` (monotonic ms, e.g. performance.now)
    pub fn poll_timers(&mut self, now_ms: f64) {
        self.clock_ms = self.clock_ms.max(now_ms);
        for effect in self.timers.take_due(self.clock_ms, self.generation) {
            match effect {
                TimedEffect::ClearBanner(serial) => {
                    if serial == self.banner_serial {
                        self.banner = None;
                    }
                }
            }
        }
    }

    // === Internals ===

    fn begin(&mut self, mode: RunMode) -> bool {
        let (run, spawner) = match mode {
            RunMode::Level { id } => {
                let Some(level) = self.catalog.get(id) else {
                    log::warn!("Start ignored: unknown level {}", id);
                    return false;
                };
                if level.bonus && !self.progress.bonus_unlocked {
                    log::warn!("Start ignored: {} is locked", level.name);
                    return false;
                }
                log::info!(
                    "Starting {} ({}, speed {})",
                    level.name,
                    level.difficulty.as_str(),
                    level.speed
                );
                (
                    RunState::new(mode, level.speed, Some(level.length)),
                    Spawner::pattern(&level.pattern),
                )
            }
            RunMode::Endless { seed } => {
                log::info!("Starting endless run with seed {}", seed);
                (
                    RunState::new(mode, self.config.endless_speed, None),
                    Spawner::endless(seed, self.config.endless_spacing),
                )
            }
        };

        self.generation = self.generation.next();
        self.banner = None;
        self.particles.clear();
        let mut world = World::new(run, spawner, &self.config);
        world.events.push(GameEvent::RunStarted { mode });
        self.world = Some(world);
        self.collect_world_events();
        true
    }

    /// Discard the run; pending effects from it go stale
    fn enter_idle(&mut self) {
        self.collect_world_events();
        self.world = None;
        self.generation = self.generation.next();
        self.banner = None;
        self.particles.clear();
    }

    fn collect_world_events(&mut self) {
        if let Some(world) = self.world.as_mut() {
            self.events.append(&mut world.events);
        }
    }

    fn show_banner(&mut self, banner: Banner) {
        self.banner_serial += 1;
        self.banner = Some(banner);
        self.timers.schedule(
            self.clock_ms + self.config.banner_ms,
            self.generation,
            TimedEffect::ClearBanner(self.banner_serial),
        );
    }

    fn record_score(&mut self, score: u64) {
        if self.progress.record_score(score, &mut self.store) {
            log::info!("New high score: {}", score);
            self.events.push(GameEvent::NewHighScore { score });
            self.show_banner(Banner::NewHighScore { score });
        }
    }

    fn finish_over(&mut self, score: u64) {
        self.record_score(score);
    }

    fn finish_complete(&mut self, mode: RunMode, score: u64) {
        let RunMode::Level { id } = mode else {
            return;
        };
        let name = self
            .catalog
            .get(id)
            .map(|l| l.name.clone())
            .unwrap_or_default();
        log::info!("Level complete: {} with score {}", name, score);

        self.progress.mark_completed(id, &mut self.store);
        self.record_score(score);
        self.show_banner(Banner::LevelComplete { name });

        let main: Vec<u32> = self.catalog.main_level_ids().collect();
        if !self.progress.bonus_unlocked && self.progress.completed_all(&main) {
            self.on_unlock_bonus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{COMPLETED_LEVELS_KEY, HIGH_SCORE_KEY, MemoryStore};
    use crate::sim::{Difficulty, LevelDefinition, SpawnEvent, SpawnKind};

    fn level(id: u32, length: f32, pattern: Vec<SpawnEvent>) -> LevelDefinition {
        LevelDefinition {
            id,
            name: format!("Level {}", id),
            difficulty: Difficulty::Easy,
            length,
            speed: 10.0,
            color: String::new(),
            bonus: false,
            pattern,
        }
    }

    /// Two short main levels and a bonus level
    fn catalog() -> LevelCatalog {
        let mut bonus = level(9, 100.0, vec![]);
        bonus.bonus = true;
        LevelCatalog::new(vec![
            level(0, 100.0, vec![SpawnEvent::new(SpawnKind::Coin, 50.0)]),
            level(1, 100.0, vec![]),
            bonus,
        ])
        .unwrap()
    }

    fn core() -> GameCore<MemoryStore> {
        GameCore::with_catalog(GameConfig::default(), catalog(), MemoryStore::new())
    }

    fn run_until_done(core: &mut GameCore<MemoryStore>) {
        for _ in 0..10_000 {
            if core.status() != RunStatus::Running {
                return;
            }
            core.tick();
        }
    }

    #[test]
    fn test_idle_until_started() {
        let mut core = core();
        assert_eq!(core.status(), RunStatus::Idle);
        core.tick();
        assert!(!core.on_jump());
        assert!(!core.on_restart());
        assert!(core.run().is_none());
    }

    #[test]
    fn test_start_rejects_unknown_and_locked() {
        let mut core = core();
        assert!(!core.on_start(42));
        assert!(!core.on_start(9));
        assert_eq!(core.status(), RunStatus::Idle);

        assert!(core.on_unlock_bonus());
        assert!(core.on_start(9));
        assert_eq!(core.status(), RunStatus::Running);
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut core = core();
        assert!(core.on_start(0));
        assert!(!core.on_start(1));
        assert_eq!(core.run().unwrap().level_id(), Some(0));
    }

    #[test]
    fn test_complete_persists() {
        let mut core = core();
        core.on_start(0);
        run_until_done(&mut core);

        assert_eq!(core.status(), RunStatus::Complete);
        assert!(core.progress().is_completed(0));
        assert_eq!(core.store().raw(COMPLETED_LEVELS_KEY), Some("[0]"));
        assert!(matches!(core.banner(), Some(Banner::LevelComplete { .. })));

        let events = core.drain_events();
        assert_eq!(events.first(), Some(&GameEvent::RunStarted { mode: RunMode::Level { id: 0 } }));
        assert!(events.contains(&GameEvent::LevelComplete { level_id: 0, score: 0 }));
    }

    #[test]
    fn test_frozen_after_end() {
        let mut core = core();
        core.on_start(1);
        run_until_done(&mut core);
        let before = core.run().unwrap().clone();
        for _ in 0..5 {
            core.tick();
        }
        assert!(!core.on_jump());
        assert_eq!(core.run().unwrap(), &before);
    }

    #[test]
    fn test_all_main_levels_unlock_bonus() {
        let mut core = core();
        core.on_start(0);
        run_until_done(&mut core);
        assert!(!core.progress().bonus_unlocked);

        assert!(core.on_next_level());
        assert_eq!(core.run().unwrap().level_id(), Some(1));
        run_until_done(&mut core);

        assert!(core.progress().bonus_unlocked);
        assert!(core.drain_events().contains(&GameEvent::BonusUnlocked));
        assert_eq!(core.banner(), Some(&Banner::BonusUnlocked));
        // Last main level: nothing next
        assert!(!core.on_next_level());
    }

    #[test]
    fn test_next_level_only_after_complete() {
        let mut core = core();
        core.on_start(0);
        assert!(!core.on_next_level());
    }

    #[test]
    fn test_crash_records_high_score() {
        let mut core = core();
        core.on_start(1);
        let world = core.world.as_mut().unwrap();
        world.run.score = 7;
        // Spike right on top of the player
        let (pos, kind) = sim::spawner::place(SpawnKind::Spike, &core.config);
        let world = core.world.as_mut().unwrap();
        world.spawn(glam::Vec2::new(110.0, pos.y), kind);
        for _ in 0..20 {
            core.tick();
        }

        assert_eq!(core.status(), RunStatus::Over);
        assert_eq!(core.progress().high_score, 7);
        assert_eq!(core.store().raw(HIGH_SCORE_KEY), Some("7"));
        assert!(core.drain_events().contains(&GameEvent::NewHighScore { score: 7 }));
    }

    #[test]
    fn test_return_to_menu_discards_run() {
        let mut core = core();
        core.on_start(0);
        let generation = core.generation();
        assert!(core.on_return_to_menu());
        assert_eq!(core.status(), RunStatus::Idle);
        assert!(core.generation() > generation);
        assert!(!core.on_return_to_menu());
    }

    #[test]
    fn test_restart_is_fresh() {
        let mut core = core();
        core.on_start(0);
        for _ in 0..6 {
            core.tick();
        }
        assert!(core.on_restart());
        let run = core.run().unwrap();
        assert_eq!(run.progress, 0.0);
        assert_eq!(run.status, RunStatus::Running);
        assert_eq!(core.world().unwrap().spawner.fired_flags(), &[false]);
        assert!(core.world().unwrap().entities.is_empty());
    }

    #[test]
    fn test_banner_cleared_by_timer() {
        let mut core = core();
        core.poll_timers(1000.0);
        core.on_unlock_bonus();
        assert!(core.banner().is_some());

        core.poll_timers(1000.0 + core.config().banner_ms - 1.0);
        assert!(core.banner().is_some());
        core.poll_timers(1000.0 + core.config().banner_ms);
        assert!(core.banner().is_none());
    }

    #[test]
    fn test_stale_timer_cannot_touch_new_run() {
        let mut core = core();
        core.on_unlock_bonus();
        // New generation; the pending clear belongs to the old one
        core.on_start(0);
        core.banner = Some(Banner::Checkpoint { distance: 0.0 });
        core.poll_timers(1_000_000.0);
        assert!(core.banner().is_some());
    }

    #[test]
    fn test_later_banner_outlives_earlier_timer() {
        let mut core = core();
        core.on_unlock_bonus();
        core.poll_timers(1000.0);
        core.show_banner(Banner::NewHighScore { score: 1 });
        // First banner's clear is due, but the second is showing
        core.poll_timers(core.config().banner_ms);
        assert_eq!(core.banner(), Some(&Banner::NewHighScore { score: 1 }));
    }

    #[test]
    fn test_endless_never_completes() {
        let mut core = core();
        assert!(core.on_start_endless(11));
        let run = core.run().unwrap();
        assert_eq!(run.length, None);
        assert_eq!(run.speed, core.config().endless_speed);
        for _ in 0..200 {
            core.tick();
        }
        assert_ne!(core.status(), RunStatus::Complete);
        assert!(core.progress().completed.is_empty());
    }

    #[test]
    fn test_restart_from_checkpoint() {
        let config = GameConfig {
            checkpoint_interval: 30.0,
            ..GameConfig::default()
        };
        let mut core = GameCore::with_catalog(config, catalog(), MemoryStore::new());
        core.on_start(0);
        for _ in 0..6 {
            core.tick();
        }
        assert_eq!(core.world().unwrap().checkpoints.latest(), Some(60.0));

        // Not crashed yet
        assert!(!core.on_restart_from_checkpoint());
        core.world.as_mut().unwrap().run.status = RunStatus::Over;
        assert!(core.on_restart_from_checkpoint());

        let world = core.world().unwrap();
        assert_eq!(world.run.progress, 60.0);
        assert_eq!(world.run.score, 0);
        // The coin at 50 is behind the checkpoint and will not respawn
        assert_eq!(world.spawner.fired_flags(), &[true]);
        assert_eq!(world.checkpoints.latest(), Some(60.0));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = GameConfig {
            endless_speed: -6.0,
            ..GameConfig::default()
        };
        let mut core = GameCore::with_catalog(config, catalog(), MemoryStore::new());
        assert_eq!(core.config(), &GameConfig::default());

        assert!(core.on_start_endless(1));
        let mut prev = 0.0;
        for _ in 0..100 {
            core.tick();
            let progress = core.run().unwrap().progress;
            assert!(progress > prev);
            prev = progress;
        }
    }

    #[test]
    fn test_configure_only_from_idle() {
        let mut core = core();
        let tuned = GameConfig {
            endless_speed: 8.0,
            ..GameConfig::default()
        };
        assert!(core.on_configure(tuned.clone()));
        assert_eq!(core.config().endless_speed, 8.0);

        core.on_start_endless(3);
        assert!(!core.on_configure(GameConfig::default()));
        assert_eq!(core.run().unwrap().speed, 8.0);

        core.on_return_to_menu();
        let broken = GameConfig {
            gravity: -1.0,
            ..GameConfig::default()
        };
        assert!(!core.on_configure(broken));
        assert_eq!(core.config(), &tuned);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut core = core();
        core.on_start(0);
        core.tick();
        let snapshot = core.snapshot();
        assert_eq!(snapshot.level_name, Some("Level 0"));
        assert_eq!(snapshot.progress, 10.0);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"status\":\"Running\""));
    }

    #[test]
    fn test_loads_existing_progress() {
        let store = MemoryStore::new()
            .with_raw(HIGH_SCORE_KEY, "99")
            .with_raw(COMPLETED_LEVELS_KEY, "[0,1]");
        let core = GameCore::with_catalog(GameConfig::default(), catalog(), store);
        assert_eq!(core.progress().high_score, 99);
        assert!(core.is_playable(1));
        assert!(!core.is_playable(9));
    }
}
