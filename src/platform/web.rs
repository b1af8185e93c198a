//! Browser entry: wasm-bindgen surface driven by the page's animation loop
//!
//! The page owns the canvas and DOM overlays. Each frame it calls
//! `frame(now)`, reads `snapshot_json()` to draw and `drain_events_json()`
//! to play sounds.

use wasm_bindgen::prelude::*;

use super::clock::FixedStep;
use super::input::{Command, KeyMap};
use crate::config::GameConfig;
use crate::game::GameCore;
use crate::persistence::LocalStorageStore;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Bumpy Dash starting...");
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct WebGame {
    core: GameCore<LocalStorageStore>,
    clock: FixedStep,
    keys: KeyMap,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let core = GameCore::new(GameConfig::load(), LocalStorageStore::new());
        log::info!("Game initialized ({} levels)", core.catalog().len());
        WebGame {
            core,
            clock: FixedStep::new(),
            keys: KeyMap::new(),
        }
    }

    /// Run the ticks due at `now_ms` (requestAnimationFrame timestamp)
    pub fn frame(&mut self, now_ms: f64) {
        for _ in 0..self.clock.advance(now_ms) {
            self.core.tick();
        }
        self.core.poll_timers(now_ms);
    }

    pub fn start(&mut self, level_id: u32) -> bool {
        self.clock.reset();
        self.core.on_start(level_id)
    }

    pub fn start_endless(&mut self) -> bool {
        let seed = js_sys::Date::now() as u64;
        self.clock.reset();
        self.core.on_start_endless(seed)
    }

    /// Click / tap / space
    pub fn jump(&mut self) -> bool {
        self.core.on_jump()
    }

    pub fn restart(&mut self) -> bool {
        self.clock.reset();
        self.core.on_restart()
    }

    pub fn restart_from_checkpoint(&mut self) -> bool {
        self.clock.reset();
        self.core.on_restart_from_checkpoint()
    }

    pub fn next_level(&mut self) -> bool {
        self.clock.reset();
        self.core.on_next_level()
    }

    pub fn menu(&mut self) -> bool {
        self.core.on_return_to_menu()
    }

    /// Apply and persist tuning JSON from the settings overlay (menu only)
    pub fn configure(&mut self, json: &str) -> bool {
        let config = match GameConfig::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Rejected config: {}", e);
                return false;
            }
        };
        if !self.core.on_configure(config) {
            return false;
        }
        self.core.config().save();
        true
    }

    pub fn config_json(&self) -> String {
        self.core
            .config()
            .to_json()
            .unwrap_or_else(|_| String::from("{}"))
    }

    pub fn is_playable(&self, level_id: u32) -> bool {
        self.core.is_playable(level_id)
    }

    /// Returns true if the key was consumed
    pub fn key_down(&mut self, code: &str) -> bool {
        match self.keys.key_down(code) {
            Some(Command::Jump) => {
                self.core.on_jump();
                true
            }
            Some(Command::UnlockBonus) => {
                if self.core.on_unlock_bonus() {
                    log::info!("Bonus level \"Clubstep\" unlocked!");
                }
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.keys.key_up(code);
    }

    /// Tab hidden: avoid a burst of catch-up ticks on return
    pub fn visibility_changed(&mut self) {
        self.clock.reset();
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.core.snapshot()).unwrap_or_else(|e| {
            log::warn!("Snapshot serialization failed: {}", e);
            String::from("null")
        })
    }

    pub fn drain_events_json(&mut self) -> String {
        serde_json::to_string(&self.core.drain_events()).unwrap_or_else(|_| String::from("[]"))
    }

    /// Level list for the level-select overlay
    pub fn levels_json(&self) -> String {
        serde_json::to_string(self.core.catalog()).unwrap_or_else(|_| String::from("[]"))
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
