//! Game tuning
//!
//! Persisted separately from progress in LocalStorage. The defaults are the
//! shipped tuning; spike gaps in the built-in levels are laid out for this
//! jump arc, so change gravity and impulses together.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LevelError;

/// Data-driven tuning for a `GameCore`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Player motion ===
    /// Downward acceleration (units/tick²)
    pub gravity: f32,
    /// Velocity set by a grounded jump (negative is up)
    pub jump_power: f32,
    /// Velocity set by an orb (negative is up)
    pub orb_impulse: f32,
    /// Visual spin while airborne (radians/tick)
    pub air_rotation: f32,

    // === Geometry ===
    /// Right edge where entities spawn
    pub playfield_width: f32,
    /// Ground line (player bottom rests here)
    pub ground_y: f32,
    /// Player box left edge
    pub player_x: f32,
    /// Player box top edge at run start
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Per-side shrink of the player box for fatal tests
    pub hitbox_inset: f32,
    /// Extra reach for tapping an orb with a jump
    pub orb_tap_reach: f32,

    // === Optional features ===
    /// Ticks after leaving a surface during which a jump is honoured (0 = off)
    pub coyote_ticks: u32,
    /// Distance between checkpoints (0 = off)
    pub checkpoint_interval: f32,
    /// Distance between endless-mode spawns
    pub endless_spacing: f32,
    /// Scroll speed in endless mode (units/tick)
    pub endless_speed: f32,
    /// Particle cap (0 disables particles)
    pub max_particles: usize,
    /// Banner lifetime (ms)
    pub banner_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            orb_impulse: ORB_IMPULSE,
            air_rotation: AIR_ROTATION_SPEED,

            playfield_width: PLAYFIELD_WIDTH,
            ground_y: GROUND_Y,
            player_x: PLAYER_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            hitbox_inset: HITBOX_INSET,
            orb_tap_reach: ORB_TAP_REACH,

            coyote_ticks: 0,
            checkpoint_interval: 0.0,
            endless_spacing: ENDLESS_SPACING,
            endless_speed: ENDLESS_SPEED,
            max_particles: 256,
            banner_ms: BANNER_MS,
        }
    }
}

impl GameConfig {
    /// Defaults plus every feature from the improvements sketch switched on
    pub fn with_sketch_features() -> Self {
        Self {
            coyote_ticks: SKETCH_COYOTE_TICKS,
            checkpoint_interval: 3000.0,
            ..Self::default()
        }
    }

    /// Parse and validate a config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tuning the simulation cannot run with
    pub fn validate(&self) -> Result<(), LevelError> {
        let positive = [
            ("gravity", self.gravity),
            ("playfield_width", self.playfield_width),
            ("ground_y", self.ground_y),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("endless_spacing", self.endless_spacing),
            ("endless_speed", self.endless_speed),
        ];
        let non_negative = [
            ("hitbox_inset", self.hitbox_inset),
            ("orb_tap_reach", self.orb_tap_reach),
            ("checkpoint_interval", self.checkpoint_interval),
        ];
        let finite = [
            ("jump_power", self.jump_power),
            ("orb_impulse", self.orb_impulse),
            ("air_rotation", self.air_rotation),
            ("player_x", self.player_x),
            ("player_start_y", self.player_start_y),
        ];

        let bad = positive
            .iter()
            .find(|(_, v)| !(v.is_finite() && *v > 0.0))
            .or_else(|| {
                non_negative
                    .iter()
                    .find(|(_, v)| !(v.is_finite() && *v >= 0.0))
            })
            .or_else(|| finite.iter().find(|(_, v)| !v.is_finite()));
        if let Some(&(field, _)) = bad {
            return Err(LevelError::InvalidConfig { field });
        }

        // The fatal hitbox must keep some area
        if self.hitbox_inset * 2.0 >= self.player_width.min(self.player_height) {
            return Err(LevelError::InvalidConfig {
                field: "hitbox_inset",
            });
        }
        if !(self.banner_ms.is_finite() && self.banner_ms >= 0.0) {
            return Err(LevelError::InvalidConfig { field: "banner_ms" });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bumpyDashConfig";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_ok() {
                        log::info!("Config saved");
                    } else {
                        log::warn!("Config could not be written");
                    }
                }
                Err(e) => log::warn!("Config not saved: {}", e),
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_shipped_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.gravity, 0.6);
        assert_eq!(config.jump_power, -13.0);
        assert_eq!(config.orb_impulse, -15.0);
        assert_eq!(config.coyote_ticks, 0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"playfield_width": 200.0}"#).unwrap();
        assert_eq!(config.playfield_width, 200.0);
        assert_eq!(config.ground_y, GROUND_Y);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(GameConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        let cases = [
            (r#"{"endless_speed": -6.0}"#, "endless_speed"),
            (r#"{"endless_speed": 0.0}"#, "endless_speed"),
            (r#"{"gravity": -0.6}"#, "gravity"),
            (r#"{"playfield_width": -800.0}"#, "playfield_width"),
            (r#"{"ground_y": 0.0}"#, "ground_y"),
            (r#"{"endless_spacing": 0.0}"#, "endless_spacing"),
            (r#"{"checkpoint_interval": -1.0}"#, "checkpoint_interval"),
            (r#"{"hitbox_inset": 20.0}"#, "hitbox_inset"),
            (r#"{"banner_ms": -5.0}"#, "banner_ms"),
        ];
        for (json, expected) in cases {
            match GameConfig::from_json(json) {
                Err(LevelError::InvalidConfig { field }) => assert_eq!(field, expected, "{}", json),
                other => panic!("{} was not rejected: {:?}", json, other),
            }
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        let nan = GameConfig {
            endless_speed: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(LevelError::InvalidConfig {
                field: "endless_speed"
            })
        ));

        let inf = GameConfig {
            jump_power: f32::NEG_INFINITY,
            ..GameConfig::default()
        };
        assert!(matches!(
            inf.validate(),
            Err(LevelError::InvalidConfig {
                field: "jump_power"
            })
        ));
    }

    #[test]
    fn test_shipped_configs_validate() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::with_sketch_features().validate().is_ok());
    }

    #[test]
    fn test_sketch_features_enable_coyote() {
        let config = GameConfig::with_sketch_features();
        assert_eq!(config.coyote_ticks, SKETCH_COYOTE_TICKS);
        assert!(config.checkpoint_interval > 0.0);
    }
}
