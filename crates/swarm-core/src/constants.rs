//! Simulation constants and default tuning parameters.

// --- Swarm setup ---

/// Default RNG seed. Same seed = same initial unit placement.
pub const DEFAULT_SEED: u64 = 42;

/// Default number of units in a swarm.
pub const DEFAULT_SWARM_SIZE: usize = 30;

/// Side length of the cube units are spawned in: each coordinate is
/// drawn uniformly from `[0, DEFAULT_SPAWN_EXTENT)`.
pub const DEFAULT_SPAWN_EXTENT: f64 = 5.0;

/// Vertical coordinate destroyed units fall to.
pub const GROUND_LEVEL: f64 = 0.0;

// --- Unit defaults ---

pub const UNIT_LOAD_CAPACITY: f64 = 0.5;

/// Distance a unit covers per frame while steering.
pub const UNIT_ACCELERATION: f64 = 1.0;

pub const UNIT_CLIMB_RATE: f64 = 1.0;
pub const UNIT_WEIGHT: f64 = 1.0;
pub const UNIT_SIZE: f64 = 1.0;

/// Starting battery life (abstract units).
pub const UNIT_BATTERY_LIFE: f64 = 60.0;

// --- Formation defaults ---

pub const LINEAR_DEFAULT_HEIGHT: f64 = 30.0;
pub const LINEAR_DEFAULT_X_COORD: f64 = 30.0;
pub const LINEAR_DEFAULT_LENGTH: f64 = 20.0;

pub const CIRCULAR_DEFAULT_HEIGHT: f64 = 30.0;
pub const CIRCULAR_DEFAULT_RADIUS: f64 = 10.0;
pub const CIRCULAR_DEFAULT_CENTER_XZ: [f64; 2] = [10.0, 10.0];

// --- Scenario ---

/// Number of frames in the built-in reformation scenario.
pub const DEFAULT_SCENARIO_FRAMES: u64 = 200;

/// Frame at which the built-in scenario switches formation and destroys units.
pub const REFORMATION_FRAME: u64 = 100;

/// Number of units destroyed at the reformation frame (indices 0..N).
pub const REFORMATION_CASUALTIES: usize = 5;

// --- Rendering ---

/// Upper bound of every axis in the rendered view volume (lower bound is 0).
pub const VIEW_EXTENT: f64 = 50.0;

/// Render every Nth frame by default.
pub const DEFAULT_RENDER_EVERY: u64 = 5;

/// Per-frame delay of exported animations, in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u32 = 100;
