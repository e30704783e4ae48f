use crate::config::Color;

// Default tuning for the bouncing ball row. `SceneConfig::with_size` copies
// these into a config; nothing reads them directly at runtime.

// Layout
pub const PARTS: usize = 3; // balls per row
pub const MINI_PARTS: usize = 3; // sub-phases per ball: radius, baseline, drop

// Motion
pub const STEP_PER_TICK: f32 = 0.02 / PARTS as f32; // progress advanced per tick
pub const TICK_PERIOD_MS: u32 = 20; // timer period while a gesture runs

// Stroke width is min(width, height) / STROKE_FACTOR
pub const STROKE_FACTOR: f32 = 90.0;

// Colors
pub const BACKGROUND: Color = Color::rgb(0xBD, 0xBD, 0xBD); // light grey

pub const PALETTE: [Color; 5] = [
    Color::hex(0xF44336), // red
    Color::hex(0x673AB7), // deep purple
    Color::hex(0x01579B), // dark blue
    Color::hex(0x00C853), // green
    Color::hex(0xFFD600), // yellow
];

// DOM
pub const CANVAS_ID: &str = "app-canvas";
