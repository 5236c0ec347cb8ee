// World collaborator seam: block and event types plus the trait the session drives
// Positions are integer block corners; replicated points are floored onto this grid.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::AIR_BLOCK_ID;
use crate::Result;

/// Integer block coordinate (corner of the unit cube)
pub type BlockPos = Vector3<i32>;

/// Offsets of the block adjacent to each face index; index 6 means "no face".
pub const FACE_OFFSETS: [[i32; 3]; 7] = [
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
    [-1, 0, 0],
    [1, 0, 0],
    [0, 0, 0],
];

/// Offset to the neighbour across `face`, `None` for an index outside the table
pub fn face_offset(face: u8) -> Option<BlockPos> {
    FACE_OFFSETS
        .get(usize::from(face))
        .map(|[x, y, z]| Vector3::new(*x, *y, *z))
}

/// Block containing a (possibly fractional) world point
pub fn block_containing(point: &Vector3<f64>) -> BlockPos {
    point.map(|c| c.floor() as i32)
}

/// Block type plus its extended metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    pub id: u16,
    pub data: u8,
    /// Serialized tile entity data, if the block carries any
    pub nbt: Option<String>,
}

impl BlockState {
    pub fn new(id: u16, data: u8) -> Self {
        Self { id, data, nbt: None }
    }

    pub fn with_nbt(mut self, nbt: impl Into<String>) -> Self {
        self.nbt = Some(nbt.into());
        self
    }

    pub fn air() -> Self {
        Self::new(AIR_BLOCK_ID, 0)
    }

    pub fn is_air(&self) -> bool {
        self.id == AIR_BLOCK_ID
    }
}

impl Default for BlockState {
    fn default() -> Self {
        Self::air()
    }
}

/// A block the player hit, and the face that was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitEvent {
    pub position: BlockPos,
    pub face: u8,
}

impl HitEvent {
    pub fn new(position: BlockPos, face: u8) -> Self {
        Self { position, face }
    }

    /// Block on the hit face, where a placed block ends up
    pub fn adjacent(&self) -> Option<BlockPos> {
        face_offset(self.face).map(|offset| self.position + offset)
    }
}

/// Operations the replication session needs from the game world.
pub trait World {
    fn player_position(&mut self) -> Result<Vector3<f64>>;

    fn block_at(&mut self, position: &BlockPos) -> Result<BlockState>;

    fn set_block(&mut self, position: &BlockPos, state: &BlockState) -> Result<()>;

    /// Non-blocking snapshot of the hits recorded since the last poll
    fn poll_block_hits(&mut self) -> Result<Vec<HitEvent>>;

    fn post_to_chat(&mut self, message: &str) -> Result<()>;

    /// When `true`, only sword hits are reported
    fn restrict_hits_to_sword(&mut self, restrict: bool) -> Result<()>;

    fn clear_events(&mut self) -> Result<()>;
}
