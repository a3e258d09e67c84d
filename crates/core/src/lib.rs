pub mod agent;
pub mod config;
pub mod director;
pub mod maze;
pub mod occupancy;
pub mod random;
pub mod types;

pub use agent::{GrowthAgent, StepContext};
pub use config::{ConfigError, SceneConfig};
pub use director::{SceneDirector, SceneStats};
pub use maze::MazeController;
pub use occupancy::OccupancySet;
pub use types::*;
