//! Keyboard/pointer input mapped to core commands

/// Arrow keys taking part in the secret chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

impl Arrow {
    /// From a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Arrow::Left),
            "ArrowRight" => Some(Arrow::Right),
            "ArrowUp" => Some(Arrow::Up),
            "ArrowDown" => Some(Arrow::Down),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Arrow::Left => 1,
            Arrow::Right => 2,
            Arrow::Up => 4,
            Arrow::Down => 8,
        }
    }
}

/// Discrete commands delivered to the game core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    UnlockBonus,
}

/// Holding all four arrows at once unlocks the bonus level
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretChord {
    held: u8,
}

impl SecretChord {
    const ALL: u8 = 0b1111;

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when this press completes the chord; the chord then resets
    pub fn press(&mut self, arrow: Arrow) -> bool {
        self.held |= arrow.bit();
        if self.held == Self::ALL {
            self.held = 0;
            return true;
        }
        false
    }

    pub fn release(&mut self, arrow: Arrow) {
        self.held &= !arrow.bit();
    }
}

/// Tracks key state and turns key codes into commands
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    chord: SecretChord,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: &str) -> Option<Command> {
        if code == "Space" {
            return Some(Command::Jump);
        }
        let arrow = Arrow::from_code(code)?;
        self.chord.press(arrow).then_some(Command::UnlockBonus)
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(arrow) = Arrow::from_code(code) {
            self.chord.release(arrow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_needs_all_four() {
        let mut chord = SecretChord::new();
        assert!(!chord.press(Arrow::Left));
        assert!(!chord.press(Arrow::Right));
        assert!(!chord.press(Arrow::Up));
        assert!(chord.press(Arrow::Down));
        // Reset after firing
        assert!(!chord.press(Arrow::Down));
    }

    #[test]
    fn test_release_breaks_chord() {
        let mut chord = SecretChord::new();
        chord.press(Arrow::Left);
        chord.press(Arrow::Right);
        chord.press(Arrow::Up);
        chord.release(Arrow::Left);
        assert!(!chord.press(Arrow::Down));
        assert!(chord.press(Arrow::Left));
    }

    #[test]
    fn test_repeat_press_is_harmless() {
        let mut chord = SecretChord::new();
        for _ in 0..5 {
            assert!(!chord.press(Arrow::Up));
        }
    }

    #[test]
    fn test_key_map() {
        let mut keys = KeyMap::new();
        assert_eq!(keys.key_down("Space"), Some(Command::Jump));
        assert_eq!(keys.key_down("KeyA"), None);
        assert_eq!(keys.key_down("ArrowLeft"), None);
        assert_eq!(keys.key_down("ArrowRight"), None);
        assert_eq!(keys.key_down("ArrowUp"), None);
        keys.key_up("ArrowUp");
        assert_eq!(keys.key_down("ArrowDown"), None);
        assert_eq!(keys.key_down("ArrowUp"), Some(Command::UnlockBonus));
    }
}
