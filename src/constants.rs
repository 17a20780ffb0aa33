// Rocket defaults
pub const DEFAULT_DRY_MASS: f64 = 1.0;
pub const DEFAULT_FUEL_MASS: f64 = 1.0;
pub const DEFAULT_FUEL_BURN_RATE: f64 = 1.0;
pub const DEFAULT_THRUST: f64 = 1.0;
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.5;
pub const DEFAULT_CROSS_SECTION_RADIUS: f64 = 1.0;

// Environmental defaults
pub const DEFAULT_GRAVITY: f64 = 1.0;
pub const DEFAULT_AIR_DENSITY: f64 = 1.2;

// Launch site
pub const GROUND_HEIGHT: f64 = 0.4;
pub const LAUNCH_PAD_X: f64 = 0.0;
pub const LAUNCH_PAD_Y: f64 = 0.4;
pub const LAUNCH_PAD_Z: f64 = 0.0;

// Simulation Parameters
pub const FRAME_RATE: f64 = 60.0; // ticks per second assumed by fuel burn and legacy integration
pub const TICK_RATE: f64 = 60.0; // Hz, headless driver default
pub const MAX_SIMULATION_TIME: f64 = 120.0; // s
pub const MASS_EPSILON: f64 = 1e-6; // lower bound on total mass before dividing
pub const FUEL_BURNOUT_THRESHOLD: f64 = 1e-9; // remaining fuel at or below this is empty

// Drag is evaluated at a fixed unit speed in the legacy model
pub const LEGACY_DRAG_SPEED: f64 = 1.0;

// Scene
pub const STAR_COUNT: usize = 2000;
pub const STARFIELD_EXTENT: f64 = 2000.0;
