//! Spawner: turns scroll progress into new entities on the right edge
//!
//! Pattern levels fire each event exactly once per run, guarded by a fired
//! flag per event. An event is due once progress has reached its distance, so
//! a scroll speed larger than any tolerance window can never step over it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{CollectibleKind, EntityKind};
use super::level::{SpawnEvent, SpawnKind};
use crate::config::GameConfig;
use crate::consts::*;

/// Where spawns come from
#[derive(Debug, Clone)]
enum SpawnSource {
    Pattern {
        events: Vec<SpawnEvent>,
        fired: Vec<bool>,
    },
    Endless {
        rng: Pcg32,
        spacing: f32,
        next_at: f32,
    },
}

#[derive(Debug, Clone)]
pub struct Spawner {
    source: SpawnSource,
}

impl Spawner {
    /// Spawner for a level pattern with every event armed
    pub fn pattern(events: &[SpawnEvent]) -> Self {
        Self {
            source: SpawnSource::Pattern {
                events: events.to_vec(),
                fired: vec![false; events.len()],
            },
        }
    }

    /// Random spawns every `spacing` units, reproducible from `seed`
    pub fn endless(seed: u64, spacing: f32) -> Self {
        let spacing = if spacing.is_finite() && spacing > 0.0 {
            spacing
        } else {
            ENDLESS_SPACING
        };
        Self {
            source: SpawnSource::Endless {
                rng: Pcg32::seed_from_u64(seed),
                spacing,
                next_at: spacing,
            },
        }
    }

    /// Kinds due at `progress`, marking them fired
    pub fn due(&mut self, progress: f32) -> Vec<SpawnKind> {
        let mut out = Vec::new();
        match &mut self.source {
            SpawnSource::Pattern { events, fired } => {
                for (event, fired) in events.iter().zip(fired.iter_mut()) {
                    if !*fired && event.at <= progress {
                        *fired = true;
                        out.push(event.kind);
                    }
                }
            }
            SpawnSource::Endless {
                rng,
                spacing,
                next_at,
            } => {
                while *next_at <= progress {
                    out.push(random_kind(rng));
                    *next_at += *spacing;
                }
            }
        }
        out
    }

    /// Treat everything at or before `distance` as already spawned
    pub fn skip_through(&mut self, distance: f32) {
        match &mut self.source {
            SpawnSource::Pattern { events, fired } => {
                for (event, fired) in events.iter().zip(fired.iter_mut()) {
                    if event.at <= distance {
                        *fired = true;
                    }
                }
            }
            SpawnSource::Endless {
                spacing, next_at, ..
            } => {
                while *next_at <= distance {
                    *next_at += *spacing;
                }
            }
        }
    }

    /// Per-event fired flags (empty for endless)
    pub fn fired_flags(&self) -> &[bool] {
        match &self.source {
            SpawnSource::Pattern { fired, .. } => fired,
            SpawnSource::Endless { .. } => &[],
        }
    }

    /// Events that have not fired yet (endless never runs out)
    pub fn remaining(&self) -> Option<usize> {
        match &self.source {
            SpawnSource::Pattern { fired, .. } => Some(fired.iter().filter(|f| !**f).count()),
            SpawnSource::Endless { .. } => None,
        }
    }
}

fn random_kind(rng: &mut Pcg32) -> SpawnKind {
    match rng.random_range(0..6) {
        0 => SpawnKind::SizedSpike {
            height: SPIKE_HEIGHT + rng.random::<f32>() * ENDLESS_SPIKE_VARIANCE,
        },
        1 => SpawnKind::TallSpike,
        2 => SpawnKind::Enemy,
        3 => SpawnKind::Platform {
            height: 60.0 + rng.random::<f32>() * 100.0,
        },
        4 => SpawnKind::Orb,
        _ => SpawnKind::Collectible {
            kind: if rng.random_bool(0.5) {
                CollectibleKind::Fish
            } else {
                CollectibleKind::Yarn
            },
        },
    }
}

/// Position and shape for a new entity entering at the right edge
pub fn place(kind: SpawnKind, config: &GameConfig) -> (Vec2, EntityKind) {
    let x = config.playfield_width;
    let ground = config.ground_y;
    match kind {
        SpawnKind::Spike | SpawnKind::TallSpike | SpawnKind::SizedSpike { .. } => {
            let (height, tall) = match kind {
                SpawnKind::TallSpike => (TALL_SPIKE_HEIGHT, true),
                SpawnKind::SizedSpike { height } => (height, false),
                _ => (SPIKE_HEIGHT, false),
            };
            (
                Vec2::new(x, ground - height),
                EntityKind::Obstacle {
                    width: SPIKE_WIDTH,
                    height,
                    tall,
                },
            )
        }
        SpawnKind::Platform { height } => (
            Vec2::new(x, ground - height),
            EntityKind::Platform {
                width: PLATFORM_WIDTH,
                height: PLATFORM_THICKNESS,
            },
        ),
        SpawnKind::Orb => (
            Vec2::new(x, ground - ORB_ALTITUDE),
            EntityKind::Orb { radius: ORB_RADIUS },
        ),
        SpawnKind::Coin => (
            Vec2::new(x, ground - COIN_ALTITUDE),
            EntityKind::Coin {
                radius: COIN_RADIUS,
            },
        ),
        SpawnKind::Enemy => (
            Vec2::new(x, ground - ENEMY_HEIGHT),
            EntityKind::Enemy {
                width: ENEMY_WIDTH,
                height: ENEMY_HEIGHT,
            },
        ),
        SpawnKind::Collectible { kind } => (
            Vec2::new(x, ground - COIN_ALTITUDE),
            EntityKind::Collectible {
                radius: COLLECTIBLE_RADIUS,
                kind,
            },
        ),
    }
}
