// Tuning constants shared by the two particle subsystems.

// --- Snow field ---

// One ambient flake per this many square pixels of viewport
pub const SNOW_AREA_PER_FLAKE: f32 = 8000.0;

pub const FLAKE_FALL_MIN: f32 = 0.3; // px/frame
pub const FLAKE_FALL_SPAN: f32 = 0.7;
pub const FLAKE_SIZE_MIN: f32 = 0.8; // px radius
pub const FLAKE_SIZE_SPAN: f32 = 2.5;
pub const FLAKE_OPACITY_MIN: f32 = 0.3;
pub const FLAKE_OPACITY_SPAN: f32 = 0.5;
pub const FLAKE_DRIFT_MIN: f32 = 0.2; // lateral sway amplitude
pub const FLAKE_DRIFT_SPAN: f32 = 0.5;

// Horizontal air resistance applied each frame
pub const FLAKE_DRAG: f32 = 0.96;

// Sway oscillator period (t/1000 inside the sin)
pub const SWAY_PERIOD_MS: f64 = 1000.0;

// Pointer repulsion field
pub const POINTER_RADIUS: f32 = 200.0;
pub const REPEL_X: f32 = 0.5;
pub const REPEL_Y: f32 = 0.3;

// A flake leaving the bottom edge restarts just above the top
pub const RECYCLE_Y: f32 = -10.0;

// Pointer position before the first pointermove; far enough that the
// repulsion field never reaches a visible flake
pub const POINTER_OFFSCREEN: f32 = -1000.0;

// --- Click bursts ---

pub const BURST_PARTICLES: usize = 40;
pub const BURST_SPEED_MIN: f32 = 1.0; // px/frame radial
pub const BURST_SPEED_SPAN: f32 = 4.0;
pub const BURST_SIZE_MIN: f32 = 2.0;
pub const BURST_SIZE_SPAN: f32 = 4.0;
pub const BURST_DRAG: f32 = 0.95;
pub const BURST_GRAVITY: f32 = 0.05; // px/frame^2 downward
pub const BURST_FADE: f32 = 0.01; // opacity lost per frame

// Shades of white and very light blue, for a snowy feel
pub const BURST_SHADES: [&str; 4] = ["#ffffff", "#f0f9ff", "#e0f2fe", "#f8fafc"];

// Larger, still-bright burst particles get a cross sigil overlay
pub const BURST_CROSS_MIN_SIZE: f32 = 4.0;
pub const BURST_CROSS_MIN_OPACITY: f32 = 0.5;

// --- Tree scene ---

// Logical canvas the scene projects into
pub const SCENE_WIDTH: f32 = 500.0;
pub const SCENE_HEIGHT: f32 = 600.0;

// Cone silhouette: zero radius at TREE_HEIGHT, widest at the base
pub const TREE_HEIGHT: f32 = 450.0;
pub const TREE_MAX_RADIUS: f32 = 160.0;
// The light spiral sits slightly outside the foliage
pub const LIGHT_MAX_RADIUS: f32 = 165.0;

// The tree base floats this far above the canvas bottom
pub const BASE_MARGIN: f32 = 100.0;

pub const TREE_PARTICLES: usize = 1500;
pub const LIGHT_COUNT: usize = 320;
pub const ORNAMENT_COUNT: usize = 50;

// Rigid-body spin per frame
pub const ROTATION_STEP: f32 = 0.012;

pub const PARTICLE_SPEED_MIN: f32 = 0.005; // rad/frame own orbit
pub const PARTICLE_SPEED_SPAN: f32 = 0.01;
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const TWINKLE_INIT_SPAN: f32 = 0.1;
pub const TWINKLE_STEP: f32 = 0.05;

// Share of particles tinted warm-yellow instead of green
pub const WARM_RATIO: f64 = 0.4;

// Linear depth cue: depth = (z + DEPTH_OFFSET) / DEPTH_RANGE
pub const DEPTH_OFFSET: f32 = 200.0;
pub const DEPTH_RANGE: f32 = 400.0;

// Ornaments behind this depth are skipped entirely
pub const ORNAMENT_CULL_Z: f32 = -20.0;
pub const ORNAMENT_Y_MIN: f32 = 20.0;
pub const ORNAMENT_Y_SPAN: f32 = 420.0;
pub const ORNAMENT_TINTS: [&str; 4] = ["#f43f5e", "#fbbf24", "#ffffff", "#60a5fa"];

// Total spiral phase accumulated top-to-bottom by the light string
pub const LIGHT_SPIRAL_RADIANS: f32 = 12.0 * std::f32::consts::PI;
pub const LIGHT_HUES: [&str; 6] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ffffff", "#ff00ff",
];
pub const LIGHT_FLICKER_PERIOD_MS: f64 = 200.0;

// Apex star pulse
pub const STAR_PULSE_PERIOD_MS: f64 = 500.0;
pub const STAR_Y: f32 = 465.0;
