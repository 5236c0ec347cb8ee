// Constants

// Game server connection
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 4711;

// Event loop
pub const POLL_INTERVAL_MS: u64 = 250; // Sleep quantum between two hit polls

// Geometry
pub const BLOCK_CENTER_OFFSET: f64 = 0.5; // Block coordinates are corners, transforms act on centers
pub const CENTER_GRID: f64 = 0.5; // The center of symmetry is snapped to this grid

// Blocks
pub const AIR_BLOCK_ID: u16 = 0;
