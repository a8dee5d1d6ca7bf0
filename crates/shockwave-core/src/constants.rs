// Shared effect tuning constants used by the packer, the CPU compositor and
// (mirrored by hand) the WGSL shader. Keep the two sides in sync.

// Capacity
pub const MAX_SHOCKWAVES: usize = 20; // uniform array length, shared with shockwave.wgsl
pub const PACKED_VEC4S: usize = MAX_SHOCKWAVES / 4; // f32 arrays are stored 4-wide

// Progress easing
pub const EASE_EXPONENT: f32 = 1.5; // t = age^(1 / EASE_EXPONENT)

// Ring envelope
pub const FADE_IN_END: f32 = 0.05; // ring fades in over the first 5% of t
pub const FADE_OUT_START: f32 = 0.5; // and fades out over the last half
pub const FADE_OUT_END: f32 = 1.0;

// Chromatic aberration
pub const CHANNEL_PHASE_OFFSET: f32 = 0.02; // red leads, blue trails the green ring

// Flash highlight added to all channels, proportional to green distortion
pub const SHADING_GAIN: f32 = 8.0;

// Demo host defaults
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;
pub const CHECKER_CELLS_X: f32 = 16.0; // checkerboard squares across the scene

// Randomized trigger ranges used by the click-to-spawn demo
pub const TRIGGER_DURATION_MS_MIN: f32 = 500.0;
pub const TRIGGER_DURATION_MS_SPAN: f32 = 2000.0;
pub const TRIGGER_SPEED_MIN: f32 = 20.0;
pub const TRIGGER_SPEED_SPAN: f32 = 100.0;
pub const TRIGGER_MAX_RADIUS_MIN: f32 = 0.1;
pub const TRIGGER_MAX_RADIUS_SPAN: f32 = 0.5;
pub const TRIGGER_THICKNESS_MIN: f32 = 0.01;
pub const TRIGGER_THICKNESS_SPAN: f32 = 0.1;
