//! The tuning table as a single read-only record.
//!
//! Every field mirrors a constant in [`crate::constants`]. The record exists
//! so the whole table can be listed, looked up by name and exported.

use crate::constants::*;
use serde::Serialize;
use std::fmt;

/// Which part of the game a constant tunes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigGroup {
    Map,
    Character,
    Gameplay,
}

impl ConfigGroup {
    pub fn all() -> [ConfigGroup; 3] {
        [
            ConfigGroup::Map,
            ConfigGroup::Character,
            ConfigGroup::Gameplay,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            ConfigGroup::Map => "Map",
            ConfigGroup::Character => "Character",
            ConfigGroup::Gameplay => "Gameplay",
        }
    }
}

/// A single constant's value, tagged with its semantic type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigValue {
    /// Counts, caps and amounts.
    Integer(u64),
    /// Ratios and intervals in seconds.
    Float(f64),
}

impl ConfigValue {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            ConfigValue::Integer(v) => Some(*v),
            ConfigValue::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Integer(_) => None,
            ConfigValue::Float(v) => Some(*v),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Integer(v) => write!(f, "{}", v),
            // Keep the decimal point so 2.0 does not read as an integer
            ConfigValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigEntry {
    /// Name the game's designers use for the value, e.g. `tileSize`.
    pub name: &'static str,
    /// Spelling of the matching item in [`crate::constants`].
    pub const_name: &'static str,
    pub group: ConfigGroup,
    pub value: ConfigValue,
}

const ENTRIES: [ConfigEntry; GameConfig::LEN] = [
    ConfigEntry {
        name: "tileSize",
        const_name: "TILE_SIZE",
        group: ConfigGroup::Map,
        value: ConfigValue::Integer(TILE_SIZE as u64),
    },
    ConfigEntry {
        name: "mapWidth",
        const_name: "MAP_WIDTH",
        group: ConfigGroup::Map,
        value: ConfigValue::Integer(MAP_WIDTH as u64),
    },
    ConfigEntry {
        name: "mapHeight",
        const_name: "MAP_HEIGHT",
        group: ConfigGroup::Map,
        value: ConfigValue::Integer(MAP_HEIGHT as u64),
    },
    ConfigEntry {
        name: "REGEN_INTERVAL",
        const_name: "REGEN_INTERVAL",
        group: ConfigGroup::Character,
        value: ConfigValue::Float(REGEN_INTERVAL),
    },
    ConfigEntry {
        name: "SLOWEST_ATTACK_INTERVAL",
        const_name: "SLOWEST_ATTACK_INTERVAL",
        group: ConfigGroup::Character,
        value: ConfigValue::Float(SLOWEST_ATTACK_INTERVAL),
    },
    ConfigEntry {
        name: "MAX_LEVEL_BASE",
        const_name: "MAX_LEVEL_BASE",
        group: ConfigGroup::Character,
        value: ConfigValue::Integer(MAX_LEVEL_BASE as u64),
    },
    ConfigEntry {
        name: "MAX_LEVEL_STAT",
        const_name: "MAX_LEVEL_STAT",
        group: ConfigGroup::Character,
        value: ConfigValue::Integer(MAX_LEVEL_STAT as u64),
    },
    ConfigEntry {
        name: "MAX_LEVEL_JOB",
        const_name: "MAX_LEVEL_JOB",
        group: ConfigGroup::Character,
        value: ConfigValue::Integer(MAX_LEVEL_JOB as u64),
    },
    ConfigEntry {
        name: "MAX_LEVEL_SKILL",
        const_name: "MAX_LEVEL_SKILL",
        group: ConfigGroup::Character,
        value: ConfigValue::Integer(MAX_LEVEL_SKILL as u64),
    },
    ConfigEntry {
        name: "MAX_ATTRIBUTE",
        const_name: "MAX_ATTRIBUTE",
        group: ConfigGroup::Character,
        value: ConfigValue::Integer(MAX_ATTRIBUTE as u64),
    },
    ConfigEntry {
        name: "ATTRIBUTE_POINTS_PER_LEVEL",
        const_name: "ATTRIBUTE_POINTS_PER_LEVEL",
        group: ConfigGroup::Character,
        value: ConfigValue::Integer(ATTRIBUTE_POINTS_PER_LEVEL as u64),
    },
    ConfigEntry {
        name: "EXP_NEEDED_INC_BASE",
        const_name: "EXP_NEEDED_INC_BASE",
        group: ConfigGroup::Character,
        value: ConfigValue::Float(EXP_NEEDED_INC_BASE),
    },
    ConfigEntry {
        name: "EXP_NEEDED_INC_STAT",
        const_name: "EXP_NEEDED_INC_STAT",
        group: ConfigGroup::Character,
        value: ConfigValue::Float(EXP_NEEDED_INC_STAT),
    },
    ConfigEntry {
        name: "EXP_NEEDED_INC_JOB",
        const_name: "EXP_NEEDED_INC_JOB",
        group: ConfigGroup::Character,
        value: ConfigValue::Float(EXP_NEEDED_INC_JOB),
    },
    ConfigEntry {
        name: "EXP_NEEDED_FOR_LEVEL2",
        const_name: "EXP_NEEDED_FOR_LEVEL2",
        group: ConfigGroup::Character,
        value: ConfigValue::Integer(EXP_NEEDED_FOR_LEVEL2),
    },
    ConfigEntry {
        name: "STARTING_MONEY",
        const_name: "STARTING_MONEY",
        group: ConfigGroup::Gameplay,
        value: ConfigValue::Integer(STARTING_MONEY),
    },
    ConfigEntry {
        name: "MAX_INVENTORY_SIZE",
        const_name: "MAX_INVENTORY_SIZE",
        group: ConfigGroup::Gameplay,
        value: ConfigValue::Integer(MAX_INVENTORY_SIZE as u64),
    },
];

/// Game configuration constants and tunable parameters.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GameConfig {
    pub tile_size: u32,
    pub map_width: u32,
    pub map_height: u32,
    pub regen_interval: f64,
    pub slowest_attack_interval: f64,
    pub max_level_base: u32,
    pub max_level_stat: u32,
    pub max_level_job: u32,
    pub max_level_skill: u32,
    pub max_attribute: u32,
    pub attribute_points_per_level: u32,
    pub exp_needed_inc_base: f64,
    pub exp_needed_inc_stat: f64,
    pub exp_needed_inc_job: f64,
    pub exp_needed_for_level2: u64,
    pub starting_money: u64,
    pub max_inventory_size: usize,
}

static CURRENT: GameConfig = GameConfig::CURRENT;

impl GameConfig {
    /// Number of constants in the table.
    pub const LEN: usize = 17;

    /// The table the game runs with.
    pub const CURRENT: GameConfig = GameConfig {
        tile_size: TILE_SIZE,
        map_width: MAP_WIDTH,
        map_height: MAP_HEIGHT,
        regen_interval: REGEN_INTERVAL,
        slowest_attack_interval: SLOWEST_ATTACK_INTERVAL,
        max_level_base: MAX_LEVEL_BASE,
        max_level_stat: MAX_LEVEL_STAT,
        max_level_job: MAX_LEVEL_JOB,
        max_level_skill: MAX_LEVEL_SKILL,
        max_attribute: MAX_ATTRIBUTE,
        attribute_points_per_level: ATTRIBUTE_POINTS_PER_LEVEL,
        exp_needed_inc_base: EXP_NEEDED_INC_BASE,
        exp_needed_inc_stat: EXP_NEEDED_INC_STAT,
        exp_needed_inc_job: EXP_NEEDED_INC_JOB,
        exp_needed_for_level2: EXP_NEEDED_FOR_LEVEL2,
        starting_money: STARTING_MONEY,
        max_inventory_size: MAX_INVENTORY_SIZE,
    };

    /// Process-wide reference to the table.
    pub fn current() -> &'static GameConfig {
        &CURRENT
    }

    /// Every constant in table order.
    pub fn entries() -> [ConfigEntry; Self::LEN] {
        ENTRIES
    }

    /// Looks up a constant by its table name or its Rust const spelling.
    ///
    /// Matching is exact and case sensitive.
    pub fn lookup(name: &str) -> Option<ConfigValue> {
        ENTRIES
            .iter()
            .find(|e| e.name == name || e.const_name == name)
            .map(|e| e.value)
    }

    /// Entries belonging to one group, in table order.
    pub fn group_entries(group: ConfigGroup) -> Vec<ConfigEntry> {
        ENTRIES.into_iter().filter(|e| e.group == group).collect()
    }

    /// Pretty-printed JSON export of the table.
    pub fn to_json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(Self::current())
    }
}
