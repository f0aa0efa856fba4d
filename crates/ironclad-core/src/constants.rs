//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Reference frame duration for impulse normalization (60 fps frame).
/// Impulse magnitudes are scaled by `dt / REFERENCE_FRAME_SECS` so that
/// they are roughly frame-rate independent.
pub const REFERENCE_FRAME_SECS: f64 = 1.0 / 60.0;

// --- Arena ---

/// Half-extent of the square arena on each horizontal axis.
pub const ARENA_HALF_EXTENT: f64 = 5_000.0;

/// Radius of the ring on which AI tanks spawn at match start.
pub const SPAWN_RING_RADIUS: f64 = 2_500.0;

// --- Tank drive ---

/// Base forward/backward drive impulse.
pub const MOVE_IMPULSE: f64 = 50.0;

/// Exponent applied to the frame scale for drive impulses.
pub const MOVE_FRAME_EXPONENT: f64 = 1.3;

/// Base turning impulse.
pub const TURN_IMPULSE: f64 = 1_000.0;

/// Exponent applied to the frame scale for turn impulses.
pub const TURN_FRAME_EXPONENT: f64 = 2.0;

/// Yaw moment of inertia for the hull (turn impulse divisor).
pub const YAW_INERTIA: f64 = 4_000.0;

/// Per-tick horizontal velocity retention (ground friction stand-in).
pub const LINEAR_DAMPING: f64 = 0.90;

/// Per-tick yaw rate retention.
pub const ANGULAR_DAMPING: f64 = 0.80;

/// Downward acceleration on airborne entities (units/s²).
pub const GRAVITY: f64 = 980.0;

/// Speed above which a tank counts as moving (effect-hook threshold).
pub const MOVING_SPEED_THRESHOLD: f64 = 0.5;

// --- Tank combat ---

/// Charge inputs at or below this rate are ignored.
pub const CHARGE_INPUT_DEADZONE: f64 = 0.1;

/// Default charge accumulation rate (fraction per reference frame).
pub const DEFAULT_CHARGE_RATE: f64 = 0.5;

/// Default muzzle speed at zero charge.
pub const DEFAULT_SHOT_SPEED_MIN: f64 = 1_000.0;

/// Default muzzle speed at full charge.
pub const DEFAULT_SHOT_SPEED_MAX: f64 = 4_000.0;

/// Distance at or below which a hit deals full damage.
pub const DEFAULT_DAMAGE_FALLOFF_NEAR: f64 = 150.0;

/// Distance at or beyond which a hit deals no damage.
pub const DEFAULT_DAMAGE_FALLOFF_FAR: f64 = 1_200.0;

/// Default hull mass (drive impulse divisor).
pub const DEFAULT_TANK_MASS: f64 = 100.0;

/// Default damage multiplier carried by a tank's projectiles.
pub const DEFAULT_DAMAGE_MULTIPLIER: f64 = 1.0;

/// Default knockback strength carried by a tank's projectiles.
pub const DEFAULT_KNOCKBACK_STRENGTH: f64 = 400.0;

/// Fixed vertical component forced into the knockback vector.
pub const KNOCKBACK_LIFT: f64 = 50.0;

/// Hull collision radius used for overlap checks.
pub const TANK_HIT_RADIUS: f64 = 80.0;

/// Projectile spawn offset ahead of the hull along the nose.
pub const MUZZLE_OFFSET: f64 = 100.0;

/// Projectile lifetime in seconds.
pub const PROJECTILE_TTL_SECS: f64 = 4.0;

// --- AI controller ---

/// Half-extent of the square region wander points are rolled within.
pub const WANDER_HALF_EXTENT: f64 = 4_000.0;

/// Minimum re-plan interval (whole seconds, inclusive).
pub const REPLAN_MIN_SECS: u64 = 5;

/// Maximum re-plan interval (whole seconds, inclusive).
pub const REPLAN_MAX_SECS: u64 = 10;

/// Percent chance per re-plan cycle that the controller pursues the
/// closest opponent instead of its wander point.
pub const PURSUE_CHANCE_PERCENT: u32 = 80;

/// Pursuit range at which a fleeing controller turns to fight.
pub const ENGAGE_RANGE: f64 = 1_000.0;

/// Remaining distance on the final path leg that counts as arrival.
pub const WAYPOINT_REACHED_RANGE: f64 = 200.0;

/// Waypoint distance mapped to the drive-speed fraction.
pub const DRIVE_SPEED_DISTANCE_MAX: f64 = 2_000.0;

/// Drive-speed fraction at zero waypoint distance.
pub const DRIVE_SPEED_MIN: f64 = 0.8;

/// Drive-speed fraction at `DRIVE_SPEED_DISTANCE_MAX` or beyond.
pub const DRIVE_SPEED_MAX: f64 = 1.0;

/// Facing tolerance in radians.
pub const FACING_EPSILON_RAD: f64 = 0.05;

/// Fixed turn magnitude issued while correcting facing.
pub const AI_TURN_RATE: f64 = 1.0;

/// Constant backward drive applied while fighting (kiting).
pub const KITE_DRIVE: f64 = -0.5;

/// Search ceiling for the closest-opponent query.
pub const OPPONENT_SEARCH_RANGE: f64 = 10_000.0;

/// Target distance mapped onto the instantaneous fire charge.
pub const POWER_DISTANCE_MIN: f64 = 250.0;
pub const POWER_DISTANCE_MAX: f64 = 3_000.0;

/// Charge bounds of the instantaneous fire mapping.
pub const AI_CHARGE_MIN: f64 = 0.1;
pub const AI_CHARGE_MAX: f64 = 0.83;

/// Upper bound on the randomized delay between AI fire requests.
pub const AI_SHOT_DELAY_MAX_SECS: f64 = 1.5;

/// Lower bound of the delay floor (reached at the weakest gated charge).
pub const AI_SHOT_DELAY_FLOOR_MIN: f64 = 0.5;

/// Charge endpoints of the delay-floor mapping: weaker shots map to a
/// shorter floor and therefore more frequent fire.
pub const AI_SHOT_CHARGE_LOW: f64 = 0.25;
pub const AI_SHOT_CHARGE_HIGH: f64 = 1.0;
