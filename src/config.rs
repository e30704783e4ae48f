//! Scene configuration.
//!
//! Everything the animation treats as a fixed constant (surface size, ball
//! count, timing, colors) is collected here and validated once when the
//! renderer is built.

use crate::constants::{
    BACKGROUND, MINI_PARTS, PALETTE, PARTS, STEP_PER_TICK, STROKE_FACTOR, TICK_PERIOD_MS,
};
use std::fmt;
use thiserror::Error;

/// An opaque sRGB color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// CSS hex notation, e.g. `#F44336`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("row must contain at least one ball")]
    ZeroParts,
    #[error("ball must have at least one sub-phase")]
    ZeroMiniParts,
    #[error("step per tick must be finite and in (0, 1), got {0}")]
    InvalidStep(f32),
    #[error("tick period must be non-zero")]
    ZeroPeriod,
    #[error("stroke factor must be finite and positive, got {0}")]
    InvalidStrokeFactor(f32),
    #[error("surface size must be finite and positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub width: f32,
    pub height: f32,
    pub parts: usize,
    pub mini_parts: usize,
    pub step: f32,
    pub stroke_factor: f32,
    pub period_ms: u32,
    pub background: Color,
    pub palette: Vec<Color>,
}

impl SceneConfig {
    /// Default scene for a surface of the given size.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            parts: PARTS,
            mini_parts: MINI_PARTS,
            step: STEP_PER_TICK,
            stroke_factor: STROKE_FACTOR,
            period_ms: TICK_PERIOD_MS,
            background: BACKGROUND,
            palette: PALETTE.to_vec(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.parts == 0 {
            return Err(ConfigError::ZeroParts);
        }
        if self.mini_parts == 0 {
            return Err(ConfigError::ZeroMiniParts);
        }
        // A step of 1 or more would overshoot a whole cycle in a single tick.
        if !self.step.is_finite() || self.step <= 0.0 || self.step >= 1.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if self.period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if !self.stroke_factor.is_finite() || self.stroke_factor <= 0.0 {
            return Err(ConfigError::InvalidStrokeFactor(self.stroke_factor));
        }
        validate_size(self.width, self.height)
    }

    /// Stroke width for the current surface.
    #[inline]
    pub fn line_width(&self) -> f32 {
        self.width.min(self.height) / self.stroke_factor
    }
}

pub fn validate_size(width: f32, height: f32) -> Result<(), ConfigError> {
    let ok = |v: f32| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize { width, height })
    }
}
