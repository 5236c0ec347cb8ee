// World module: Contains the game world seam consumed by the replication session
// This module provides block/event types, an in-memory world and the TCP game server client

// ======================== MODULE DECLARATIONS ========================
pub mod mcpi_connection;
pub mod memory_world;
pub mod world_types;


// ======================== BLOCKS & EVENTS ========================
pub use world_types::{
    BlockPos,         // type - integer block coordinate (Vector3<i32>)
    BlockState,       // struct - block id, data value and optional NBT payload
    HitEvent,         // struct - hit block position and face index
    FACE_OFFSETS,     // const - face index 0..6 -> neighbour offset (6 = no face)
    block_containing, // fn(point: &Vector3<f64>) -> BlockPos - floors a world point onto the block grid
    face_offset,      // fn(face: u8) -> Option<BlockPos> - neighbour offset for a face index
};

// ======================== WORLD IMPLEMENTATIONS ========================
pub use world_types::World; // trait - operations the session needs from the game world
// World trait methods:
//   player_position(&mut self) -> Result<Vector3<f64>>                  - invoking player's position
//   block_at(&mut self, position: &BlockPos) -> Result<BlockState>      - block with extended metadata
//   set_block(&mut self, position: &BlockPos, state: &BlockState)       - writes a block
//   poll_block_hits(&mut self) -> Result<Vec<HitEvent>>                 - non-blocking hit snapshot
//   post_to_chat(&mut self, message: &str)                              - user-facing message
//   restrict_hits_to_sword(&mut self, restrict: bool)                   - hit event filter
//   clear_events(&mut self)                                             - drops pending events

pub use mcpi_connection::McpiConnection; // struct - TCP client for the game server line protocol
pub use memory_world::MemoryWorld; // struct - in-memory world recording writes and chat
