use glam::Vec3;

/// Limits outside which a body is teleported back to its start.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecoveryBounds {
    /// Recover when `|x|` or `|z|` exceeds this fraction of the terrain size
    pub horizontal_fraction: f32,
    /// Recover when the body drops below this height
    pub floor_y: f32,
}

impl Default for RecoveryBounds {
    fn default() -> Self {
        Self {
            horizontal_fraction: 0.6,
            floor_y: -10.0,
        }
    }
}

impl RecoveryBounds {
    /// True if `position` is outside the recoverable region of a terrain of side `terrain_size`.
    pub fn is_out_of_bounds(&self, position: Vec3, terrain_size: f32) -> bool {
        let limit = self.horizontal_fraction * terrain_size;
        position.y < self.floor_y || position.x.abs() > limit || position.z.abs() > limit
    }
}

/// Configuration for the body controller
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Radius of the sphere; its centre rests this far above the ground
    pub radius: f32,
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Per-step multiplier on horizontal velocity when no direction is held
    pub damping: f32,
    /// Upper bound on a single step's `dt`
    pub max_dt: f32,
    /// Vertical velocity set by a jump while supported
    pub jump_speed: f32,
    /// Spawn and recovery position; y is only used where there is no ground
    pub start: Vec3,
    pub bounds: RecoveryBounds,
    /// Minimum simulated time between two "contact cleared" notifications
    pub clear_notify_interval: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            radius: 0.3,
            gravity: -9.81,
            move_speed: 3.0,
            damping: 0.9,
            max_dt: 1.0 / 60.0,
            jump_speed: 4.0,
            start: Vec3::new(0.0, 5.0, 0.0),
            bounds: RecoveryBounds::default(),
            clear_notify_interval: 0.1,
        }
    }
}

impl ControllerConfig {
    /// Clamp a host-supplied frame time into `[0, max_dt]`; NaN becomes zero.
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt > 0.0 {
            dt.min(self.max_dt)
        } else {
            0.0
        }
    }
}

/// How the body moves and responds to terrain, fixed when the controller is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MotionMode {
    /// Keyboard-driven walking with the body snapped onto the ground beneath it
    #[default]
    WalkAndSnap,
    /// One-shot launch, free flight under gravity, elastic bounces off faces
    LegacyBounce { launch_velocity: Vec3 },
}

impl MotionMode {
    /// Velocity given to a freshly spawned body.
    pub fn spawn_velocity(&self) -> Vec3 {
        match *self {
            MotionMode::WalkAndSnap => Vec3::ZERO,
            MotionMode::LegacyBounce { launch_velocity } => launch_velocity,
        }
    }
}
