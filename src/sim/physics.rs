//! Player vertical motion and support resolution
//!
//! Order matters: integrate, then the ground, then platforms. A platform only
//! catches the player when they are falling and their bottom edge was at or
//! above its top before this tick's motion, so walking into a platform's side
//! or jumping up through it never snaps the player onto it.

use super::entity::{Entity, Shape};
use super::state::Player;

/// Apply gravity then velocity. Returns the bottom edge before the move.
pub fn integrate(player: &mut Player) -> f32 {
    let prev_bottom = player.bottom();
    player.vy += player.gravity;
    player.pos.y += player.vy;
    prev_bottom
}

/// Clamp to the ground line. Sets `grounded` either way.
pub fn resolve_ground(player: &mut Player, ground_y: f32) {
    player.grounded = false;
    if player.bottom() >= ground_y {
        player.pos.y = ground_y - player.height;
        player.vy = 0.0;
        player.grounded = true;
    }
}

/// Land on the first platform the player falls onto this tick
pub fn resolve_platforms(player: &mut Player, platforms: &[Entity], prev_bottom: f32) {
    if player.vy <= 0.0 {
        return;
    }
    for platform in platforms {
        let Shape::Rect(top) = platform.shape() else {
            continue;
        };
        let rect = player.rect();
        let horizontal = rect.left() < top.right() && rect.right() > top.left();
        let vertical = rect.bottom() >= top.top() && rect.top() < top.bottom();
        if horizontal && vertical && prev_bottom <= top.top() {
            player.pos.y = top.top() - player.height;
            player.vy = 0.0;
            player.grounded = true;
            return;
        }
    }
}

/// Full vertical step. Returns true if the player touched down this tick
/// after being airborne.
pub fn step_player(player: &mut Player, platforms: &[Entity], ground_y: f32) -> bool {
    let was_grounded = player.grounded;
    let prev_bottom = integrate(player);
    resolve_ground(player, ground_y);
    resolve_platforms(player, platforms, prev_bottom);
    player.grounded && !was_grounded
}

/// Spin while airborne, upright on a surface
pub fn update_rotation(player: &mut Player, spin: f32) {
    if player.grounded {
        player.rotation = 0.0;
    } else {
        player.rotation += spin;
    }
}
