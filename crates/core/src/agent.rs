//! A single resumable carving process: one agent, one step per tick.

use rand_chacha::ChaCha8Rng;

use crate::occupancy::OccupancySet;
use crate::random::shuffle;
use crate::types::{GridBounds, GridPoint, Segment, SpawnProposal, StepResult};

/// Per-step inputs shared by every agent of one maze.
pub struct StepContext<'a> {
    pub occupancy: &'a mut OccupancySet,
    pub bounds: GridBounds,
    pub directions: [GridPoint; 4],
    /// Maximum number of trailing stack entries a spawned child inherits.
    pub inherited_path_limit: usize,
    pub rng: &'a mut ChaCha8Rng,
    /// Controller-decided permission to propose a spawn this step.
    pub can_spawn: bool,
}

#[derive(Clone, Debug)]
pub struct GrowthAgent {
    pos: GridPoint,
    /// Own-path cells, most recent last. Popped during backtracking.
    path: Vec<GridPoint>,
    /// Suppresses the spawn proposal on the very first step, so a fresh
    /// agent cannot fan out the moment it is born.
    newborn: bool,
}

impl GrowthAgent {
    /// First agent of a maze: empty path, nothing inherited.
    pub fn new(start: GridPoint) -> Self {
        Self { pos: start, path: Vec::new(), newborn: true }
    }

    /// Child agent seeded from a parent's proposal. The inherited path lets
    /// the child backtrack through its parent's recent trail.
    pub fn from_proposal(proposal: SpawnProposal) -> Self {
        Self { pos: proposal.pos, path: proposal.inherited_path, newborn: true }
    }

    pub fn pos(&self) -> GridPoint {
        self.pos
    }

    pub fn path(&self) -> &[GridPoint] {
        &self.path
    }

    /// Advance one step: find an open neighbor (backtracking as far as the
    /// stack allows), claim it, move, and maybe propose a spawn.
    ///
    /// Dying is terminal; the controller removes the agent on `Died` and
    /// never steps it again.
    pub fn step(&mut self, ctx: &mut StepContext<'_>) -> StepResult {
        let first_step = self.newborn;
        self.newborn = false;

        let Some((search_origin, destination)) = self.find_destination(ctx) else {
            return StepResult::Died;
        };

        let segment = Segment { from: search_origin, to: destination };
        self.pos = destination;

        let spawn = if ctx.can_spawn && !first_step {
            let tail_start = self.path.len().saturating_sub(ctx.inherited_path_limit);
            Some(SpawnProposal { pos: self.pos, inherited_path: self.path[tail_start..].to_vec() })
        } else {
            None
        };

        StepResult::Moved { segment, spawn }
    }

    /// Shuffled direction scan from the current position, popping the stack
    /// and retrying on dead ends. Bounded: every retry shrinks the stack, so
    /// the loop ends in at most `path.len() + 1` scans.
    fn find_destination(&mut self, ctx: &mut StepContext<'_>) -> Option<(GridPoint, GridPoint)> {
        let mut origin = self.pos;
        loop {
            let mut directions = ctx.directions;
            shuffle(ctx.rng, &mut directions);

            for direction in directions {
                let candidate = origin + direction;
                if ctx.bounds.contains(candidate) && !ctx.occupancy.contains(candidate) {
                    let claimed = ctx.occupancy.claim(candidate);
                    debug_assert!(claimed);
                    self.path.push(candidate);
                    return Some((origin, candidate));
                }
            }

            origin = self.path.pop()?;
        }
    }
}
