// Drawing and page-wiring constants for the web front-end.

// Element ids the page shell must provide
pub const SNOW_CANVAS_ID: &str = "snow-canvas";
pub const TREE_CANVAS_ID: &str = "tree-canvas";
pub const AUDIO_ID: &str = "bgm-audio";
pub const GIFT_BUTTON_ID: &str = "gift-button";
pub const GIFT_MODAL_ID: &str = "gift-modal";
pub const GIFT_CLOSE_ID: &str = "gift-close";

// Tree particles are drawn at size * depth * this factor
pub const PARTICLE_DRAW_SCALE: f32 = 1.5;

// Fairy light dot radius before the depth cue
pub const LIGHT_DOT_RADIUS: f32 = 3.0;

// Ornament glyph font size at depth 1.0
pub const ORNAMENT_FONT_PX: f32 = 16.0;
pub const STAR_FONT: &str = "44px serif";

// shadowBlur radii for the glow passes
pub const BURST_GLOW_BLUR: f64 = 8.0;
pub const WARM_GLOW_BLUR: f64 = 5.0;
pub const LIGHT_GLOW_BLUR: f64 = 15.0;
pub const ORNAMENT_GLOW_BLUR: f64 = 10.0;
pub const STAR_GLOW_BLUR: f64 = 25.0;

// Periodic frame-rate log interval
pub const FPS_LOG_INTERVAL_SECS: u64 = 5;
