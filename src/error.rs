//! Errors for the only fallible surface: loading level packs and config JSON.
//!
//! Gameplay never fails; rejected commands are no-ops and damaged saves
//! degrade to defaults.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level catalog is empty")]
    EmptyCatalog,

    #[error("duplicate level id {0}")]
    DuplicateId(u32),

    #[error("level {id} has a non-positive length")]
    InvalidLength { id: u32 },

    #[error("level {id} has a non-positive scroll speed")]
    InvalidSpeed { id: u32 },

    #[error("unknown level id {0}")]
    UnknownLevel(u32),

    #[error("config field {field} is out of range")]
    InvalidConfig { field: &'static str },
}
