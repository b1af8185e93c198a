//! Fixed-step simulation tick
//!
//! One call advances a running world by one frame:
//! progress, completion test, spawns, player motion, scrolling, fatal
//! contacts, pickups, passing awards, checkpoints. A world that is not
//! `Running` is left untouched.

use glam::Vec2;

use super::entity::{Contact, EntityKind, Shape};
use super::physics;
use super::spawner::place;
use super::state::{GameEvent, RunStatus, World};
use crate::config::GameConfig;
use crate::consts::*;

/// Advance the world by one tick
pub fn tick(world: &mut World, config: &GameConfig) {
    if world.run.status != RunStatus::Running {
        return;
    }

    world.run.ticks += 1;
    world.run.progress += world.run.speed;

    if let Some(length) = world.run.length {
        if world.run.progress >= length {
            world.run.status = RunStatus::Complete;
            if let Some(level_id) = world.run.level_id() {
                world.events.push(GameEvent::LevelComplete {
                    level_id,
                    score: world.run.score,
                });
            }
            return;
        }
    }

    spawn_due(world, config);

    let landed = physics::step_player(
        &mut world.player,
        &world.entities.platforms,
        config.ground_y,
    );
    physics::update_rotation(&mut world.player, config.air_rotation);
    world.coyote.update(world.player.grounded);
    if landed {
        let feet = Vec2::new(world.player.pos.x, world.player.bottom());
        world.events.push(GameEvent::Landed { pos: feet });
    }

    world.entities.scroll(world.run.speed);

    if let Some(pos) = fatal_contact(world, config) {
        world.run.status = RunStatus::Over;
        world.events.push(GameEvent::Crashed { pos });
        log::info!(
            "Run over at {:.0} with score {}",
            world.run.progress,
            world.run.score
        );
        return;
    }

    apply_pickups(world, config);
    award_passes(world);

    if let Some(distance) = world.checkpoints.observe(world.run.progress) {
        log::debug!("Checkpoint at {}", distance);
        world.events.push(GameEvent::CheckpointReached { distance });
    }
}

/// Jump command. An unused orb within reach is tapped instead of jumping;
/// otherwise a grounded (or coyote-window) player jumps. Returns whether
/// anything happened.
pub fn jump(world: &mut World, config: &GameConfig) -> bool {
    if world.run.status != RunStatus::Running {
        return false;
    }

    let body = world.player.rect();
    for orb in world.entities.orbs.iter_mut() {
        if orb.consumed {
            continue;
        }
        let Shape::Circle { center, radius } = orb.shape() else {
            continue;
        };
        if body.overlaps_circle(center, radius + config.orb_tap_reach) {
            orb.consume();
            world.player.vy = config.orb_impulse;
            world.player.grounded = false;
            world.events.push(GameEvent::OrbBounce { pos: center });
            return true;
        }
    }

    if world.coyote.can_jump(world.player.grounded) {
        world.player.vy = world.player.jump_power;
        world.player.grounded = false;
        world.coyote.consume();
        world.events.push(GameEvent::Jumped);
        return true;
    }

    false
}

fn spawn_due(world: &mut World, config: &GameConfig) {
    for kind in world.spawner.due(world.run.progress) {
        let (pos, entity_kind) = place(kind, config);
        let id = world.spawn(pos, entity_kind);
        log::debug!("Spawned {:?} #{} at {:.0}", kind, id, world.run.progress);
    }
}

/// First hazard overlapping the shrunk player hitbox
fn fatal_contact(world: &World, config: &GameConfig) -> Option<Vec2> {
    let hitbox = world.player.hitbox(config.hitbox_inset);
    world
        .entities
        .iter()
        .filter(|e| e.kind.contact() == Contact::Fatal)
        .find(|e| e.touches(&hitbox))
        .map(|e| e.pos)
}

fn apply_pickups(world: &mut World, config: &GameConfig) {
    let body = world.player.rect();
    for entity in world.entities.iter_mut() {
        match entity.kind.contact() {
            Contact::Fatal | Contact::Support => continue,
            Contact::Bounce | Contact::Collect => {}
        }
        if entity.consumed || !entity.touches(&body) || !entity.consume() {
            continue;
        }
        match entity.kind {
            EntityKind::Orb { .. } => {
                world.player.vy = config.orb_impulse;
                world.player.grounded = false;
                world.events.push(GameEvent::OrbBounce { pos: entity.pos });
            }
            EntityKind::Coin { .. } => {
                world.run.score += COIN_POINTS;
                world.events.push(GameEvent::CoinCollected { pos: entity.pos });
            }
            EntityKind::Collectible { kind, .. } => {
                world.run.collectibles += 1;
                world.events.push(GameEvent::CollectibleCollected {
                    kind,
                    pos: entity.pos,
                });
            }
            EntityKind::Obstacle { .. } | EntityKind::Platform { .. } | EntityKind::Enemy { .. } => {}
        }
    }
}

fn award_passes(world: &mut World) {
    let behind = world.player.pos.x;
    for entity in world.entities.iter_mut() {
        if let Some(points) = entity.try_pass(behind) {
            world.run.score += points;
            world.events.push(GameEvent::Passed { points });
        }
    }
}
