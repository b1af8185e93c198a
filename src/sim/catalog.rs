//! Built-in levels
//!
//! Five main levels plus the Clubstep bonus, named after the Geometry Dash
//! levels they loosely follow. Distances are scroll units.

use super::level::{Difficulty, LevelDefinition, SpawnEvent, SpawnKind::*};

static STEREO_MADNESS: [SpawnEvent; 42] = [
    SpawnEvent::new(Spike, 300.0), SpawnEvent::new(Spike, 500.0), SpawnEvent::new(Platform { height: 60.0 }, 800.0),
    SpawnEvent::new(Coin, 900.0), SpawnEvent::new(Spike, 1100.0), SpawnEvent::new(Enemy, 1400.0),
    SpawnEvent::new(Platform { height: 70.0 }, 1700.0), SpawnEvent::new(Orb, 2000.0), SpawnEvent::new(Spike, 2200.0),
    SpawnEvent::new(TallSpike, 2500.0), SpawnEvent::new(Platform { height: 80.0 }, 2800.0), SpawnEvent::new(Coin, 3000.0),
    SpawnEvent::new(Spike, 3300.0), SpawnEvent::new(Enemy, 3600.0), SpawnEvent::new(Platform { height: 90.0 }, 3900.0),
    SpawnEvent::new(Orb, 4200.0), SpawnEvent::new(Spike, 4400.0), SpawnEvent::new(Spike, 4700.0),
    SpawnEvent::new(Platform { height: 100.0 }, 5000.0), SpawnEvent::new(Coin, 5200.0), SpawnEvent::new(Enemy, 5500.0),
    SpawnEvent::new(TallSpike, 5800.0), SpawnEvent::new(Orb, 6100.0), SpawnEvent::new(Spike, 6300.0),
    SpawnEvent::new(Platform { height: 70.0 }, 6600.0), SpawnEvent::new(Spike, 6900.0), SpawnEvent::new(Enemy, 7200.0),
    SpawnEvent::new(Coin, 7500.0), SpawnEvent::new(Platform { height: 110.0 }, 7800.0), SpawnEvent::new(Orb, 8100.0),
    SpawnEvent::new(TallSpike, 8400.0), SpawnEvent::new(Spike, 8700.0), SpawnEvent::new(Enemy, 9000.0),
    SpawnEvent::new(Platform { height: 80.0 }, 9300.0), SpawnEvent::new(Coin, 9600.0), SpawnEvent::new(Spike, 9900.0),
    SpawnEvent::new(Orb, 10200.0), SpawnEvent::new(Enemy, 10500.0), SpawnEvent::new(TallSpike, 10800.0),
    SpawnEvent::new(Platform { height: 120.0 }, 11100.0), SpawnEvent::new(Coin, 11400.0), SpawnEvent::new(Spike, 11700.0),
];

static BACK_ON_TRACK: [SpawnEvent; 47] = [
    SpawnEvent::new(Spike, 300.0), SpawnEvent::new(Platform { height: 70.0 }, 600.0), SpawnEvent::new(Enemy, 900.0),
    SpawnEvent::new(Spike, 1200.0), SpawnEvent::new(Orb, 1500.0), SpawnEvent::new(Coin, 1700.0),
    SpawnEvent::new(TallSpike, 2000.0), SpawnEvent::new(Platform { height: 80.0 }, 2300.0), SpawnEvent::new(Enemy, 2600.0),
    SpawnEvent::new(Spike, 2900.0), SpawnEvent::new(Orb, 3200.0), SpawnEvent::new(Platform { height: 90.0 }, 3500.0),
    SpawnEvent::new(Coin, 3800.0), SpawnEvent::new(TallSpike, 4100.0), SpawnEvent::new(Enemy, 4400.0),
    SpawnEvent::new(Spike, 4700.0), SpawnEvent::new(Platform { height: 100.0 }, 5000.0), SpawnEvent::new(Orb, 5300.0),
    SpawnEvent::new(Coin, 5600.0), SpawnEvent::new(Enemy, 5900.0), SpawnEvent::new(TallSpike, 6200.0),
    SpawnEvent::new(Spike, 6500.0), SpawnEvent::new(Platform { height: 70.0 }, 6800.0), SpawnEvent::new(Orb, 7100.0),
    SpawnEvent::new(Enemy, 7400.0), SpawnEvent::new(Coin, 7700.0), SpawnEvent::new(Spike, 8000.0),
    SpawnEvent::new(TallSpike, 8300.0), SpawnEvent::new(Platform { height: 110.0 }, 8600.0), SpawnEvent::new(Orb, 8900.0),
    SpawnEvent::new(Enemy, 9200.0), SpawnEvent::new(Spike, 9500.0), SpawnEvent::new(Coin, 9800.0),
    SpawnEvent::new(Platform { height: 90.0 }, 10100.0), SpawnEvent::new(TallSpike, 10400.0), SpawnEvent::new(Orb, 10700.0),
    SpawnEvent::new(Enemy, 11000.0), SpawnEvent::new(Spike, 11300.0), SpawnEvent::new(Platform { height: 120.0 }, 11600.0),
    SpawnEvent::new(Coin, 11900.0), SpawnEvent::new(Enemy, 12200.0), SpawnEvent::new(TallSpike, 12500.0),
    SpawnEvent::new(Orb, 12800.0), SpawnEvent::new(Spike, 13100.0), SpawnEvent::new(Platform { height: 80.0 }, 13400.0),
    SpawnEvent::new(Coin, 13700.0), SpawnEvent::new(Enemy, 14000.0),
];

static POLARGEIST: [SpawnEvent; 53] = [
    SpawnEvent::new(Platform { height: 80.0 }, 300.0), SpawnEvent::new(Spike, 600.0), SpawnEvent::new(Enemy, 850.0),
    SpawnEvent::new(TallSpike, 1100.0), SpawnEvent::new(Orb, 1400.0), SpawnEvent::new(Coin, 1650.0),
    SpawnEvent::new(Platform { height: 90.0 }, 1900.0), SpawnEvent::new(Spike, 2150.0), SpawnEvent::new(Enemy, 2400.0),
    SpawnEvent::new(TallSpike, 2700.0), SpawnEvent::new(Orb, 3000.0), SpawnEvent::new(Platform { height: 100.0 }, 3300.0),
    SpawnEvent::new(Coin, 3550.0), SpawnEvent::new(Spike, 3800.0), SpawnEvent::new(Enemy, 4100.0),
    SpawnEvent::new(Platform { height: 110.0 }, 4400.0), SpawnEvent::new(TallSpike, 4700.0), SpawnEvent::new(Orb, 5000.0),
    SpawnEvent::new(Coin, 5300.0), SpawnEvent::new(Spike, 5600.0), SpawnEvent::new(Enemy, 5900.0),
    SpawnEvent::new(Platform { height: 70.0 }, 6200.0), SpawnEvent::new(TallSpike, 6500.0), SpawnEvent::new(Orb, 6800.0),
    SpawnEvent::new(Spike, 7100.0), SpawnEvent::new(Enemy, 7400.0), SpawnEvent::new(Coin, 7700.0),
    SpawnEvent::new(Platform { height: 120.0 }, 8000.0), SpawnEvent::new(TallSpike, 8300.0), SpawnEvent::new(Orb, 8600.0),
    SpawnEvent::new(Enemy, 8900.0), SpawnEvent::new(Spike, 9200.0), SpawnEvent::new(Platform { height: 80.0 }, 9500.0),
    SpawnEvent::new(Coin, 9800.0), SpawnEvent::new(TallSpike, 10100.0), SpawnEvent::new(Orb, 10400.0),
    SpawnEvent::new(Enemy, 10700.0), SpawnEvent::new(Spike, 11000.0), SpawnEvent::new(Platform { height: 100.0 }, 11300.0),
    SpawnEvent::new(Coin, 11600.0), SpawnEvent::new(TallSpike, 11900.0), SpawnEvent::new(Enemy, 12200.0),
    SpawnEvent::new(Orb, 12500.0), SpawnEvent::new(Spike, 12800.0), SpawnEvent::new(Platform { height: 90.0 }, 13100.0),
    SpawnEvent::new(TallSpike, 13400.0), SpawnEvent::new(Coin, 13700.0), SpawnEvent::new(Enemy, 14000.0),
    SpawnEvent::new(Orb, 14300.0), SpawnEvent::new(Spike, 14600.0), SpawnEvent::new(Platform { height: 110.0 }, 14900.0),
    SpawnEvent::new(Enemy, 15200.0), SpawnEvent::new(Coin, 15500.0),
];

static DRY_OUT: [SpawnEvent; 56] = [
    SpawnEvent::new(Spike, 300.0), SpawnEvent::new(Platform { height: 70.0 }, 600.0), SpawnEvent::new(Enemy, 850.0),
    SpawnEvent::new(TallSpike, 1100.0), SpawnEvent::new(Orb, 1400.0), SpawnEvent::new(Spike, 1650.0),
    SpawnEvent::new(Platform { height: 90.0 }, 1900.0), SpawnEvent::new(Coin, 2150.0), SpawnEvent::new(Enemy, 2400.0),
    SpawnEvent::new(TallSpike, 2700.0), SpawnEvent::new(Orb, 3000.0), SpawnEvent::new(Spike, 3300.0),
    SpawnEvent::new(Platform { height: 110.0 }, 3600.0), SpawnEvent::new(Enemy, 3900.0), SpawnEvent::new(Coin, 4200.0),
    SpawnEvent::new(TallSpike, 4500.0), SpawnEvent::new(Orb, 4800.0), SpawnEvent::new(Spike, 5100.0),
    SpawnEvent::new(Platform { height: 80.0 }, 5400.0), SpawnEvent::new(Enemy, 5700.0), SpawnEvent::new(TallSpike, 6000.0),
    SpawnEvent::new(Coin, 6300.0), SpawnEvent::new(Orb, 6600.0), SpawnEvent::new(Spike, 6900.0),
    SpawnEvent::new(Enemy, 7200.0), SpawnEvent::new(Platform { height: 100.0 }, 7500.0), SpawnEvent::new(TallSpike, 7800.0),
    SpawnEvent::new(Orb, 8100.0), SpawnEvent::new(Coin, 8400.0), SpawnEvent::new(Spike, 8700.0),
    SpawnEvent::new(Platform { height: 120.0 }, 9000.0), SpawnEvent::new(Enemy, 9300.0), SpawnEvent::new(TallSpike, 9600.0),
    SpawnEvent::new(Orb, 9900.0), SpawnEvent::new(Spike, 10200.0), SpawnEvent::new(Coin, 10500.0),
    SpawnEvent::new(Platform { height: 70.0 }, 10800.0), SpawnEvent::new(Enemy, 11100.0), SpawnEvent::new(TallSpike, 11400.0),
    SpawnEvent::new(Orb, 11700.0), SpawnEvent::new(Spike, 12000.0), SpawnEvent::new(Platform { height: 90.0 }, 12300.0),
    SpawnEvent::new(Coin, 12600.0), SpawnEvent::new(Enemy, 12900.0), SpawnEvent::new(TallSpike, 13200.0),
    SpawnEvent::new(Orb, 13500.0), SpawnEvent::new(Spike, 13800.0), SpawnEvent::new(Platform { height: 110.0 }, 14100.0),
    SpawnEvent::new(Enemy, 14400.0), SpawnEvent::new(Coin, 14700.0), SpawnEvent::new(TallSpike, 15000.0),
    SpawnEvent::new(Orb, 15300.0), SpawnEvent::new(Spike, 15600.0), SpawnEvent::new(Enemy, 15900.0),
    SpawnEvent::new(Platform { height: 100.0 }, 16200.0), SpawnEvent::new(TallSpike, 16500.0),
];

static BASE_AFTER_BASE: [SpawnEvent; 60] = [
    SpawnEvent::new(Enemy, 300.0), SpawnEvent::new(TallSpike, 600.0), SpawnEvent::new(Platform { height: 90.0 }, 900.0),
    SpawnEvent::new(Orb, 1200.0), SpawnEvent::new(Spike, 1450.0), SpawnEvent::new(Enemy, 1700.0),
    SpawnEvent::new(Coin, 1950.0), SpawnEvent::new(TallSpike, 2200.0), SpawnEvent::new(Platform { height: 110.0 }, 2500.0),
    SpawnEvent::new(Orb, 2800.0), SpawnEvent::new(Enemy, 3100.0), SpawnEvent::new(Spike, 3400.0),
    SpawnEvent::new(TallSpike, 3700.0), SpawnEvent::new(Platform { height: 100.0 }, 4000.0), SpawnEvent::new(Coin, 4300.0),
    SpawnEvent::new(Orb, 4600.0), SpawnEvent::new(Enemy, 4900.0), SpawnEvent::new(Spike, 5200.0),
    SpawnEvent::new(TallSpike, 5500.0), SpawnEvent::new(Platform { height: 120.0 }, 5800.0), SpawnEvent::new(Orb, 6100.0),
    SpawnEvent::new(Enemy, 6400.0), SpawnEvent::new(Coin, 6700.0), SpawnEvent::new(Spike, 7000.0),
    SpawnEvent::new(TallSpike, 7300.0), SpawnEvent::new(Platform { height: 80.0 }, 7600.0), SpawnEvent::new(Orb, 7900.0),
    SpawnEvent::new(Enemy, 8200.0), SpawnEvent::new(Spike, 8500.0), SpawnEvent::new(Coin, 8800.0),
    SpawnEvent::new(TallSpike, 9100.0), SpawnEvent::new(Platform { height: 100.0 }, 9400.0), SpawnEvent::new(Orb, 9700.0),
    SpawnEvent::new(Enemy, 10000.0), SpawnEvent::new(Spike, 10300.0), SpawnEvent::new(TallSpike, 10600.0),
    SpawnEvent::new(Platform { height: 110.0 }, 10900.0), SpawnEvent::new(Coin, 11200.0), SpawnEvent::new(Orb, 11500.0),
    SpawnEvent::new(Enemy, 11800.0), SpawnEvent::new(Spike, 12100.0), SpawnEvent::new(TallSpike, 12400.0),
    SpawnEvent::new(Platform { height: 90.0 }, 12700.0), SpawnEvent::new(Orb, 13000.0), SpawnEvent::new(Enemy, 13300.0),
    SpawnEvent::new(Coin, 13600.0), SpawnEvent::new(Spike, 13900.0), SpawnEvent::new(TallSpike, 14200.0),
    SpawnEvent::new(Platform { height: 120.0 }, 14500.0), SpawnEvent::new(Orb, 14800.0), SpawnEvent::new(Enemy, 15100.0),
    SpawnEvent::new(Spike, 15400.0), SpawnEvent::new(Coin, 15700.0), SpawnEvent::new(TallSpike, 16000.0),
    SpawnEvent::new(Platform { height: 100.0 }, 16300.0), SpawnEvent::new(Orb, 16600.0), SpawnEvent::new(Enemy, 16900.0),
    SpawnEvent::new(Spike, 17200.0), SpawnEvent::new(TallSpike, 17500.0), SpawnEvent::new(Coin, 17800.0),
];

static CLUBSTEP: [SpawnEvent; 81] = [
    SpawnEvent::new(Spike, 250.0), SpawnEvent::new(Enemy, 500.0), SpawnEvent::new(TallSpike, 750.0),
    SpawnEvent::new(Platform { height: 100.0 }, 1000.0), SpawnEvent::new(Orb, 1250.0), SpawnEvent::new(Spike, 1500.0),
    SpawnEvent::new(Enemy, 1750.0), SpawnEvent::new(TallSpike, 2000.0), SpawnEvent::new(Coin, 2250.0),
    SpawnEvent::new(Platform { height: 120.0 }, 2500.0), SpawnEvent::new(Orb, 2750.0), SpawnEvent::new(Spike, 3000.0),
    SpawnEvent::new(Enemy, 3250.0), SpawnEvent::new(TallSpike, 3500.0), SpawnEvent::new(Platform { height: 90.0 }, 3750.0),
    SpawnEvent::new(Orb, 4000.0), SpawnEvent::new(Coin, 4250.0), SpawnEvent::new(Spike, 4500.0),
    SpawnEvent::new(Enemy, 4750.0), SpawnEvent::new(TallSpike, 5000.0), SpawnEvent::new(Platform { height: 110.0 }, 5250.0),
    SpawnEvent::new(Orb, 5500.0), SpawnEvent::new(Spike, 5750.0), SpawnEvent::new(Enemy, 6000.0),
    SpawnEvent::new(TallSpike, 6250.0), SpawnEvent::new(Coin, 6500.0), SpawnEvent::new(Platform { height: 100.0 }, 6750.0),
    SpawnEvent::new(Orb, 7000.0), SpawnEvent::new(Spike, 7250.0), SpawnEvent::new(Enemy, 7500.0),
    SpawnEvent::new(TallSpike, 7750.0), SpawnEvent::new(Platform { height: 120.0 }, 8000.0), SpawnEvent::new(Orb, 8250.0),
    SpawnEvent::new(Coin, 8500.0), SpawnEvent::new(Spike, 8750.0), SpawnEvent::new(Enemy, 9000.0),
    SpawnEvent::new(TallSpike, 9250.0), SpawnEvent::new(Platform { height: 80.0 }, 9500.0), SpawnEvent::new(Orb, 9750.0),
    SpawnEvent::new(Spike, 10000.0), SpawnEvent::new(Enemy, 10250.0), SpawnEvent::new(TallSpike, 10500.0),
    SpawnEvent::new(Coin, 10750.0), SpawnEvent::new(Platform { height: 110.0 }, 11000.0), SpawnEvent::new(Orb, 11250.0),
    SpawnEvent::new(Spike, 11500.0), SpawnEvent::new(Enemy, 11750.0), SpawnEvent::new(TallSpike, 12000.0),
    SpawnEvent::new(Platform { height: 100.0 }, 12250.0), SpawnEvent::new(Orb, 12500.0), SpawnEvent::new(Coin, 12750.0),
    SpawnEvent::new(Spike, 13000.0), SpawnEvent::new(Enemy, 13250.0), SpawnEvent::new(TallSpike, 13500.0),
    SpawnEvent::new(Platform { height: 120.0 }, 13750.0), SpawnEvent::new(Orb, 14000.0), SpawnEvent::new(Spike, 14250.0),
    SpawnEvent::new(Enemy, 14500.0), SpawnEvent::new(Coin, 14750.0), SpawnEvent::new(TallSpike, 15000.0),
    SpawnEvent::new(Platform { height: 90.0 }, 15250.0), SpawnEvent::new(Orb, 15500.0), SpawnEvent::new(Spike, 15750.0),
    SpawnEvent::new(Enemy, 16000.0), SpawnEvent::new(TallSpike, 16250.0), SpawnEvent::new(Platform { height: 110.0 }, 16500.0),
    SpawnEvent::new(Coin, 16750.0), SpawnEvent::new(Orb, 17000.0), SpawnEvent::new(Spike, 17250.0),
    SpawnEvent::new(Enemy, 17500.0), SpawnEvent::new(TallSpike, 17750.0), SpawnEvent::new(Platform { height: 100.0 }, 18000.0),
    SpawnEvent::new(Orb, 18250.0), SpawnEvent::new(Spike, 18500.0), SpawnEvent::new(Coin, 18750.0),
    SpawnEvent::new(Enemy, 19000.0), SpawnEvent::new(TallSpike, 19250.0), SpawnEvent::new(Platform { height: 120.0 }, 19500.0),
    SpawnEvent::new(Orb, 19750.0), SpawnEvent::new(Spike, 20000.0), SpawnEvent::new(Enemy, 20200.0),
];

fn level(
    id: u32,
    name: &str,
    difficulty: Difficulty,
    length: f32,
    speed: f32,
    color: &str,
    pattern: &[SpawnEvent],
) -> LevelDefinition {
    LevelDefinition {
        id,
        name: name.to_string(),
        difficulty,
        length,
        speed,
        color: color.to_string(),
        bonus: false,
        pattern: pattern.to_vec(),
    }
}

pub(super) fn builtin_levels() -> Vec<LevelDefinition> {
    let mut levels = vec![
        level(0, "Stereo Madness", Difficulty::Easy, 12000.0, 5.0, "#87ceeb", &STEREO_MADNESS),
        level(1, "Back on Track", Difficulty::Easy, 14400.0, 6.0, "#98D8C8", &BACK_ON_TRACK),
        level(2, "Polargeist", Difficulty::Normal, 15600.0, 6.5, "#B19CD9", &POLARGEIST),
        level(3, "Dry Out", Difficulty::Normal, 16800.0, 7.0, "#FFB84D", &DRY_OUT),
        level(4, "Base After Base", Difficulty::Hard, 18000.0, 7.5, "#FF6B6B", &BASE_AFTER_BASE),
        level(5, "Clubstep", Difficulty::Insane, 20400.0, 8.5, "#9B59B6", &CLUBSTEP),
    ];
    // Clubstep is the bonus level
    if let Some(last) = levels.last_mut() {
        last.bonus = true;
    }
    levels
}
