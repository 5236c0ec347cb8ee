// In-memory world: a block map with queued hit batches, used for tests and benches

use std::collections::{HashMap, VecDeque};

use nalgebra::Vector3;

use crate::world::world_types::{BlockPos, BlockState, HitEvent, World};
use crate::Result;

/// A world held entirely in memory.
///
/// Unset blocks read as air. Every write and chat message is recorded so the
/// effect of a session can be inspected afterwards.
#[derive(Debug, Clone)]
pub struct MemoryWorld {
    pub player: Vector3<f64>,
    blocks: HashMap<BlockPos, BlockState>,
    pending_hits: VecDeque<Vec<HitEvent>>,
    pub writes: Vec<(BlockPos, BlockState)>,
    pub chat: Vec<String>,
    pub restrict_to_sword: Option<bool>,
    pub clear_count: usize,
    pub polls: usize,
}

impl MemoryWorld {
    pub fn new(player: Vector3<f64>) -> Self {
        Self {
            player,
            blocks: HashMap::new(),
            pending_hits: VecDeque::new(),
            writes: Vec::new(),
            chat: Vec::new(),
            restrict_to_sword: None,
            clear_count: 0,
            polls: 0,
        }
    }

    /// Place a block without recording it as a write
    pub fn place(&mut self, position: BlockPos, state: BlockState) {
        self.blocks.insert(position, state);
    }

    /// Queue one batch of hits to be returned by the next poll
    pub fn queue_hits(&mut self, hits: Vec<HitEvent>) {
        self.pending_hits.push_back(hits);
    }

    pub fn get(&self, position: &BlockPos) -> BlockState {
        self.blocks.get(position).cloned().unwrap_or_default()
    }
}

impl World for MemoryWorld {
    fn player_position(&mut self) -> Result<Vector3<f64>> {
        Ok(self.player)
    }

    fn block_at(&mut self, position: &BlockPos) -> Result<BlockState> {
        Ok(self.get(position))
    }

    fn set_block(&mut self, position: &BlockPos, state: &BlockState) -> Result<()> {
        self.blocks.insert(*position, state.clone());
        self.writes.push((*position, state.clone()));
        Ok(())
    }

    fn poll_block_hits(&mut self) -> Result<Vec<HitEvent>> {
        self.polls += 1;
        Ok(self.pending_hits.pop_front().unwrap_or_default())
    }

    fn post_to_chat(&mut self, message: &str) -> Result<()> {
        self.chat.push(message.to_string());
        Ok(())
    }

    fn restrict_hits_to_sword(&mut self, restrict: bool) -> Result<()> {
        self.restrict_to_sword = Some(restrict);
        Ok(())
    }

    fn clear_events(&mut self) -> Result<()> {
        self.clear_count += 1;
        Ok(())
    }
}
