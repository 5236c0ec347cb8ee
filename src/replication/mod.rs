// Replication module: Contains the transform application engine and the polling session
// This module maps each observed block edit to its symmetric copies and writes them back

// ======================== MODULE DECLARATIONS ========================
pub mod replicator;
pub mod session;

// Test modules
mod _tests_replicator;
mod _tests_session;

// ======================== TRANSFORM APPLICATION ========================
pub use replicator::{
    Replicator,  // struct - fixed center + transform list of a session
    snap_center, // fn(position: &Vector3<f64>) -> Vector3<f64> - half-integer snap (ties to even)
};
// Replicator impl methods:
//   new(center: Vector3<f64>, spec: &SymmetrySpec) -> Self                - builds transforms about center
//   from_player_position(position: &Vector3<f64>, spec: &SymmetrySpec) -> Self - snaps, then builds
//   copy_count(&self) -> usize                                            - 1 + number of transforms
//   replicate(&self, point: &Vector3<f64>) -> Vec<Vector3<f64>>           - images of a block corner's center
//   replicate_block(&self, block: &BlockPos) -> Vec<BlockPos>             - blocks holding the copies

// ======================== SESSION LOOP ========================
pub use session::{
    Session,      // struct - Idle/Active polling loop over a World
    SessionState, // enum - Idle | Active
    Sleeper,      // trait - injectable pause between polls
    ThreadSleeper, // struct - Sleeper backed by std::thread::sleep
};
// Session impl methods:
//   start(world, spec, sleeper, poll_interval) -> Result<Self>            - centers on the player
//   activate(&mut self) -> Result<()>                                     - Idle -> Active
//   poll_once(&mut self) -> Result<usize>                                 - one fetch/process/sleep cycle
//   run(&mut self) -> Result<()>                                          - polls until the world fails
//   handle_hit(&mut self, hit: &HitEvent) -> Result<()>                   - erase + placement copies
