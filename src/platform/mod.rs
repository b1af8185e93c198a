//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (fixed-step accumulator)
//! - Input events (jump keys, secret arrow chord)
//! - The wasm-bindgen surface the page drives

pub mod clock;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::FixedStep;
pub use input::{Arrow, Command, KeyMap, SecretChord};
