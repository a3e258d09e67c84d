//! Immutable run configuration, validated once at startup.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::GridBounds;

pub const DEFAULT_GRID_WIDTH: i32 = 64;
pub const DEFAULT_GRID_HEIGHT: i32 = 47;
pub const DEFAULT_MAX_AGENTS: usize = 50;
pub const DEFAULT_SPAWN_CHANCE: f64 = 0.3;
pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;
/// How much of a parent's backtracking stack a spawned child inherits.
/// Tuned by eye, not derived.
pub const DEFAULT_INHERITED_PATH_LIMIT: usize = 20;
/// Live-count fraction of `max_agents` past which a maze counts as grown.
pub const DEFAULT_HIGH_WATER_FRACTION: f64 = 0.8;
pub const DEFAULT_COLLAPSE_THRESHOLD: usize = 3;
pub const DEFAULT_NEW_MAZE_CHANCE_RATIO: f64 = 0.1;

/// Configuration for one scene run. Passed into [`crate::SceneDirector`] at
/// construction; never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub max_agents: usize,
    /// Per-agent, per-tick probability of being allowed to propose a spawn.
    pub spawn_chance: f64,
    pub stroke_width: f32,
    pub inherited_path_limit: usize,
    pub high_water_fraction: f64,
    /// A grown maze terminates once its live agent count drops below this.
    pub collapse_threshold: usize,
    /// Per-tick new-maze probability is `spawn_chance * new_maze_chance_ratio`.
    pub new_maze_chance_ratio: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            max_agents: DEFAULT_MAX_AGENTS,
            spawn_chance: DEFAULT_SPAWN_CHANCE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            inherited_path_limit: DEFAULT_INHERITED_PATH_LIMIT,
            high_water_fraction: DEFAULT_HIGH_WATER_FRACTION,
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
            new_maze_chance_ratio: DEFAULT_NEW_MAZE_CHANCE_RATIO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    NonPositiveGrid { width: i32, height: i32 },
    MaxAgentsBelowCollapseThreshold { max_agents: usize, collapse_threshold: usize },
    ZeroCollapseThreshold,
    ChanceOutOfRange { name: &'static str, value: f64 },
    HighWaterFractionOutOfRange { value: f64 },
    NonPositiveStrokeWidth { value: f32 },
    ZeroInheritedPathLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveGrid { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::MaxAgentsBelowCollapseThreshold { max_agents, collapse_threshold } => {
                write!(
                    f,
                    "max_agents ({max_agents}) must be at least the collapse \
                     threshold ({collapse_threshold})"
                )
            }
            Self::ZeroCollapseThreshold => write!(f, "collapse_threshold must be at least 1"),
            Self::ChanceOutOfRange { name, value } => {
                write!(f, "{name} must lie in [0, 1], got {value}")
            }
            Self::HighWaterFractionOutOfRange { value } => {
                write!(f, "high_water_fraction must lie in (0, 1], got {value}")
            }
            Self::NonPositiveStrokeWidth { value } => {
                write!(f, "stroke_width must be positive, got {value}")
            }
            Self::ZeroInheritedPathLimit => write!(f, "inherited_path_limit must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

impl SceneConfig {
    /// Reject malformed configurations up front instead of looping forever later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(ConfigError::NonPositiveGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.collapse_threshold == 0 {
            return Err(ConfigError::ZeroCollapseThreshold);
        }
        if self.max_agents < self.collapse_threshold {
            return Err(ConfigError::MaxAgentsBelowCollapseThreshold {
                max_agents: self.max_agents,
                collapse_threshold: self.collapse_threshold,
            });
        }
        for (name, value) in [
            ("spawn_chance", self.spawn_chance),
            ("new_maze_chance_ratio", self.new_maze_chance_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ChanceOutOfRange { name, value });
            }
        }
        if !(self.high_water_fraction > 0.0 && self.high_water_fraction <= 1.0) {
            return Err(ConfigError::HighWaterFractionOutOfRange {
                value: self.high_water_fraction,
            });
        }
        if !(self.stroke_width > 0.0) {
            return Err(ConfigError::NonPositiveStrokeWidth { value: self.stroke_width });
        }
        if self.inherited_path_limit == 0 {
            return Err(ConfigError::ZeroInheritedPathLimit);
        }
        Ok(())
    }

    pub fn bounds(&self) -> GridBounds {
        GridBounds { width: self.grid_width, height: self.grid_height }
    }

    /// Live count above which a controller's `high_water` flag sets.
    pub fn high_water_count(&self) -> usize {
        (self.max_agents as f64 * self.high_water_fraction) as usize
    }
}
