//! Outer loop state: all concurrently running mazes plus the run RNG.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use crate::config::{ConfigError, SceneConfig};
use crate::maze::MazeController;
use crate::random::{below, chance};
use crate::types::{DirectionFamily, FrameOutput, GridPoint, MazeId, Rgb};

/// Aggregate counts for logging and the soak tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneStats {
    pub tick: u64,
    pub live_mazes: usize,
    pub live_agents: usize,
    pub claimed_cells: usize,
}

pub struct SceneDirector {
    config: SceneConfig,
    rng: ChaCha8Rng,
    mazes: SlotMap<MazeId, MazeController>,
    tick: u64,
}

impl SceneDirector {
    /// Validates the configuration, seeds the run RNG, and starts the first
    /// maze. All later randomness derives from `seed`.
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut director =
            Self { config, rng: ChaCha8Rng::seed_from_u64(seed), mazes: SlotMap::with_key(), tick: 0 };
        director.start_maze();
        Ok(director)
    }

    /// One outer tick: advance every maze, drop the finished ones, and
    /// occasionally fade the canvas and start a fresh maze.
    pub fn tick(&mut self) -> FrameOutput {
        let mut output = FrameOutput::default();

        let live: Vec<MazeId> = self.mazes.keys().collect();
        for id in live {
            if !self.mazes[id].tick(&mut self.rng, &mut output.draws) {
                let _finished = self.mazes.remove(id);
            }
        }

        if chance(&mut self.rng, self.config.spawn_chance * self.config.new_maze_chance_ratio) {
            // Fade first so the newcomer draws onto an already-dimmed canvas.
            output.fade = true;
            self.start_maze();
        }

        self.tick += 1;
        output
    }

    /// Start one fresh maze with a random color, orientation family, and
    /// start position. Also the app's response to a manual new-maze request.
    pub fn start_maze(&mut self) {
        let color = Rgb {
            r: below(&mut self.rng, 256) as u8,
            g: below(&mut self.rng, 256) as u8,
            b: below(&mut self.rng, 256) as u8,
        };
        let family = if below(&mut self.rng, 2) == 0 {
            DirectionFamily::Orthogonal
        } else {
            DirectionFamily::Diagonal
        };
        let start = GridPoint::new(
            below(&mut self.rng, self.config.grid_width as usize) as i32,
            below(&mut self.rng, self.config.grid_height as usize) as i32,
        );
        let _id: MazeId =
            self.mazes.insert(MazeController::new(self.config, color, family, start));
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn mazes(&self) -> impl Iterator<Item = &MazeController> {
        self.mazes.values()
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            tick: self.tick,
            live_mazes: self.mazes.len(),
            live_agents: self.mazes.values().map(MazeController::agent_count).sum(),
            claimed_cells: self.mazes.values().map(MazeController::claimed_count).sum(),
        }
    }

    /// Order-stable digest of the observable scene state, for determinism
    /// checks and soak reports.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.tick);
        hasher.write_usize(self.mazes.len());
        for maze in self.mazes.values() {
            hasher.write_usize(maze.agent_count());
            hasher.write_usize(maze.claimed_count());
            hasher.write_u8(maze.high_water() as u8);
            let color = maze.color();
            hasher.write_u8(color.r);
            hasher.write_u8(color.g);
            hasher.write_u8(color.b);
            for pos in maze.agent_positions() {
                hasher.write_i32(pos.x);
                hasher.write_i32(pos.y);
            }
        }
        hasher.finish()
    }
}
