// Map constants
pub const TILE_SIZE: u32 = 64;
pub const MAP_WIDTH: u32 = 20;
pub const MAP_HEIGHT: u32 = 20;

// Character timing constants

/// Seconds between two regeneration ticks.
pub const REGEN_INTERVAL: f64 = 2.0;

/// How slow a character can attack, i.e. one attack every `n` seconds.
pub const SLOWEST_ATTACK_INTERVAL: f64 = 3.0;

// Level caps
pub const MAX_LEVEL_BASE: u32 = 100;
pub const MAX_LEVEL_STAT: u32 = 100;
pub const MAX_LEVEL_JOB: u32 = 60;
pub const MAX_LEVEL_SKILL: u32 = 10;

// Attribute constants
pub const MAX_ATTRIBUTE: u32 = 100;
pub const ATTRIBUTE_POINTS_PER_LEVEL: u32 = 3;

// Experience curve constants

/// Factor by which the experience needed for the next level grows per level.
pub const EXP_NEEDED_INC_BASE: f64 = 1.75;
pub const EXP_NEEDED_INC_STAT: f64 = 1.5;
pub const EXP_NEEDED_INC_JOB: f64 = 2.25;

pub const EXP_NEEDED_FOR_LEVEL2: u64 = 10;

// Gameplay constants
pub const STARTING_MONEY: u64 = 100;
pub const MAX_INVENTORY_SIZE: usize = 30;
