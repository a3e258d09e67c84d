//! One maze instance: shared occupancy, a bounded agent population, and the
//! birth/death policy that drives it.

use rand_chacha::ChaCha8Rng;
use slotmap::SlotMap;

use crate::agent::{GrowthAgent, StepContext};
use crate::config::SceneConfig;
use crate::occupancy::OccupancySet;
use crate::random::chance;
use crate::types::{
    AgentId, DirectionFamily, DrawCommand, GridPoint, Rgb, Segment, StepResult,
};

pub struct MazeController {
    config: SceneConfig,
    color: Rgb,
    directions: [GridPoint; 4],
    occupancy: OccupancySet,
    agents: SlotMap<AgentId, GrowthAgent>,
    /// Set permanently once the population ever exceeds the high-water count.
    /// Distinguishes "grew then exhausted" from "never grew".
    high_water: bool,
    finished: bool,
}

impl MazeController {
    pub fn new(
        config: SceneConfig,
        color: Rgb,
        family: DirectionFamily,
        start: GridPoint,
    ) -> Self {
        let mut agents = SlotMap::with_key();
        let _first: AgentId = agents.insert(GrowthAgent::new(start));
        Self {
            config,
            color,
            directions: family.directions(),
            occupancy: OccupancySet::new(),
            agents,
            high_water: false,
            finished: false,
        }
    }

    /// Advance every live agent one step, admit proposed spawns, prune the
    /// dead, and update the termination state.
    ///
    /// Returns whether the maze is still alive; once false, always false.
    pub fn tick(&mut self, rng: &mut ChaCha8Rng, out: &mut Vec<DrawCommand>) -> bool {
        if self.finished {
            return false;
        }

        // Snapshot: agents spawned during this tick step once on admission
        // but are otherwise not advanced until the next tick.
        let live: Vec<AgentId> = self.agents.keys().collect();
        let mut dead: Vec<AgentId> = Vec::new();

        for id in live {
            let can_spawn =
                chance(rng, self.config.spawn_chance) && self.agents.len() < self.config.max_agents;

            let result = self.step_agent(id, can_spawn, rng);
            let spawn = match result {
                StepResult::Died => {
                    dead.push(id);
                    continue;
                }
                StepResult::Moved { segment, spawn } => {
                    out.push(self.draw(segment));
                    spawn
                }
            };

            if let Some(proposal) = spawn
                && self.agents.len() < self.config.max_agents
            {
                // The child's own first step runs now; a newborn never
                // proposes, so admission cannot cascade within a tick.
                let mut child = GrowthAgent::from_proposal(proposal);
                let mut ctx = StepContext {
                    occupancy: &mut self.occupancy,
                    bounds: self.config.bounds(),
                    directions: self.directions,
                    inherited_path_limit: self.config.inherited_path_limit,
                    rng,
                    can_spawn: false,
                };
                if let StepResult::Moved { segment, .. } = child.step(&mut ctx) {
                    out.push(self.draw(segment));
                    let _id: AgentId = self.agents.insert(child);
                }
            }
        }

        for id in dead {
            let _removed = self.agents.remove(id);
        }

        if self.agents.len() > self.config.high_water_count() {
            self.high_water = true;
        }
        if self.high_water && self.agents.len() < self.config.collapse_threshold {
            self.finished = true;
        }

        !self.finished
    }

    fn step_agent(&mut self, id: AgentId, can_spawn: bool, rng: &mut ChaCha8Rng) -> StepResult {
        let mut ctx = StepContext {
            occupancy: &mut self.occupancy,
            bounds: self.config.bounds(),
            directions: self.directions,
            inherited_path_limit: self.config.inherited_path_limit,
            rng,
            can_spawn,
        };
        self.agents[id].step(&mut ctx)
    }

    fn draw(&self, segment: Segment) -> DrawCommand {
        DrawCommand { segment, color: self.color, stroke_width: self.config.stroke_width }
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn claimed_count(&self) -> usize {
        self.occupancy.len()
    }

    pub fn high_water(&self) -> bool {
        self.high_water
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn agent_positions(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.agents.values().map(GrowthAgent::pos)
    }
}
