//! Zeph - RPG tuning table
//!
//! Exposes the game's numeric constants together with the rules that read
//! them: experience curves, regeneration timing and map geometry.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod map;
pub mod progression;
pub mod timing;

pub use config::{ConfigEntry, ConfigGroup, ConfigValue, GameConfig};
pub use progression::ProgressionTrack;
