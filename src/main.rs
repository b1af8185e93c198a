//! Bumpy Dash entry point
//!
//! The browser build is driven from `platform::web`. Natively this runs a
//! headless demo: a simple autopilot plays one level (or an endless run) and
//! the outcome is logged.
//!
//! Usage: `bumpy-dash [LEVEL_ID | endless]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bumpy_dash::sim::{EntityCategory, RunStatus};
    use bumpy_dash::{GameConfig, GameCore, MemoryStore};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bumpy Dash (native) starting...");

    let arg = std::env::args().nth(1);
    let mut core = GameCore::new(GameConfig::with_sketch_features(), MemoryStore::new());
    // Headless: the demo may pick the bonus level too
    core.on_unlock_bonus();

    let started = match arg.as_deref() {
        Some("endless") => core.on_start_endless(7),
        Some(id) => match id.parse::<u32>() {
            Ok(id) => core.on_start(id),
            Err(_) => {
                log::error!("Expected a level id or \"endless\", got {:?}", id);
                return;
            }
        },
        None => core.on_start(0),
    };
    if !started {
        log::error!("Could not start run");
        return;
    }

    // Ten simulated minutes at 60 Hz
    let max_ticks = 60 * 60 * 10;
    for _ in 0..max_ticks {
        if core.status() != RunStatus::Running {
            break;
        }
        if let Some(world) = core.world() {
            let player = &world.player;
            let lead = player.pos.x + player.width;
            let reach = world.run.speed * 6.0;
            let threat = world.entities.iter().any(|e| {
                matches!(
                    e.kind.category(),
                    EntityCategory::Obstacle | EntityCategory::Enemy
                ) && e.pos.x >= lead
                    && e.pos.x - lead <= reach
            });
            if threat && player.grounded {
                core.on_jump();
            }
        }
        core.tick();
    }

    let events = core.drain_events();
    let snapshot = core.snapshot();
    log::info!(
        "Finished: {:?} after {} events, score {}, {:.0}% of {}",
        snapshot.status,
        events.len(),
        snapshot.score,
        snapshot.progress_ratio * 100.0,
        snapshot.level_name.unwrap_or("endless run")
    );
    log::info!(
        "High score {}, completed levels {:?}",
        snapshot.high_score,
        snapshot.completed_levels
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
