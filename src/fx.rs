//! Cosmetic particles
//!
//! Driven by `GameEvent`s after each tick; never read back by the simulation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Particle lifetime (ticks)
pub const PARTICLE_LIFE: u32 = 30;
/// Downward pull on particles (units/tick²)
const PARTICLE_GRAVITY: f32 = 0.2;

/// Particle palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    Dust,
    Gold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: ParticleColor,
    /// Ticks left
    pub life: u32,
}

impl Particle {
    /// Opacity fading with remaining life
    pub fn alpha(&self) -> f32 {
        self.life as f32 / PARTICLE_LIFE as f32
    }
}

#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: Pcg32,
    max: usize,
}

impl ParticleSystem {
    pub fn new(seed: u64, max: usize) -> Self {
        Self {
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            max,
        }
    }

    fn spawn(&mut self, pos: Vec2, color: ParticleColor) {
        if self.particles.len() >= self.max {
            return;
        }
        let vel = Vec2::new(
            (self.rng.random::<f32>() - 0.5) * 4.0,
            (self.rng.random::<f32>() - 0.5) * 4.0 - 2.0,
        );
        let size = 3.0 + self.rng.random::<f32>() * 3.0;
        self.particles.push(Particle {
            pos,
            vel,
            size,
            color,
            life: PARTICLE_LIFE,
        });
    }

    /// Dust kicked up along `width` starting at `pos`
    pub fn dust(&mut self, pos: Vec2, width: f32, count: usize) {
        for _ in 0..count {
            let x = pos.x + self.rng.random::<f32>() * width;
            self.spawn(Vec2::new(x, pos.y), ParticleColor::Dust);
        }
    }

    pub fn burst(&mut self, pos: Vec2, count: usize) {
        for _ in 0..count {
            self.spawn(pos, ParticleColor::Gold);
        }
    }

    /// React to simulation events
    pub fn observe(&mut self, event: &GameEvent, player_width: f32) {
        match event {
            GameEvent::Landed { pos } => self.dust(*pos, player_width, 5),
            GameEvent::CoinCollected { pos } | GameEvent::CollectibleCollected { pos, .. } => {
                self.burst(*pos, 10)
            }
            _ => {}
        }
    }

    pub fn update(&mut self) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.vel.y += PARTICLE_GRAVITY;
            p.life = p.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_expire() {
        let mut fx = ParticleSystem::new(1, 100);
        fx.burst(Vec2::ZERO, 10);
        assert_eq!(fx.particles().len(), 10);
        for _ in 0..PARTICLE_LIFE - 1 {
            fx.update();
        }
        assert_eq!(fx.particles().len(), 10);
        fx.update();
        assert!(fx.particles().is_empty());
    }

    #[test]
    fn test_cap() {
        let mut fx = ParticleSystem::new(1, 4);
        fx.burst(Vec2::ZERO, 10);
        assert_eq!(fx.particles().len(), 4);

        let mut off = ParticleSystem::new(1, 0);
        off.burst(Vec2::ZERO, 10);
        assert!(off.particles().is_empty());
    }

    #[test]
    fn test_observe_events() {
        let mut fx = ParticleSystem::new(3, 100);
        fx.observe(&GameEvent::Landed { pos: Vec2::new(100.0, 350.0) }, 40.0);
        assert_eq!(fx.particles().len(), 5);
        assert!(fx
            .particles()
            .iter()
            .all(|p| p.color == ParticleColor::Dust && p.pos.x >= 100.0 && p.pos.x <= 140.0));

        fx.observe(&GameEvent::Jumped, 40.0);
        assert_eq!(fx.particles().len(), 5);

        fx.observe(&GameEvent::CoinCollected { pos: Vec2::ZERO }, 40.0);
        assert_eq!(fx.particles().len(), 15);
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut fx = ParticleSystem::new(9, 10);
        fx.burst(Vec2::ZERO, 1);
        let v0 = fx.particles()[0].vel.y;
        fx.update();
        assert!((fx.particles()[0].vel.y - (v0 + PARTICLE_GRAVITY)).abs() < 1e-6);
        assert!(fx.particles()[0].alpha() < 1.0);
    }
}
