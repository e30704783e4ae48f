//! Drawing primitives and the bouncing ball row.
//!
//! Everything draws through [`Surface`], a small path-based 2D API shaped
//! after the canvas 2D context. The browser build implements it for
//! `CanvasRenderingContext2d`; tests use a recorder.

use crate::config::{Color, SceneConfig};
use crate::core::{segment_progress, sinify};
use glam::Vec2;
use std::f32::consts::TAU;

pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    /// Round caps on every stroke that follows.
    fn set_round_caps(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2);
}

pub fn draw_line(surface: &mut impl Surface, from: Vec2, to: Vec2) {
    surface.begin_path();
    surface.move_to(from);
    surface.line_to(to);
    surface.stroke();
}

pub fn draw_circle(surface: &mut impl Surface, center: Vec2, radius: f32) {
    surface.begin_path();
    surface.arc(center, radius, 0.0, TAU);
    surface.fill();
}

/// Geometry of one ball slot for a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallFrame {
    /// Horizontal offset of the slot's local frame.
    pub offset_x: f32,
    pub center: Vec2,
    pub radius: f32,
    /// Half length of the baseline segment under the ball.
    pub baseline_half: f32,
    pub baseline_y: f32,
}

/// Layout of slot `j` at `progress`, in the slot's local frame.
///
/// Slots are staggered: slot `j` only starts once `progress` passes
/// `j / parts`. Within a slot the pulse `sinify(sj)` is split into sub-phases:
/// the ball and its baseline grow in the first, the drop toward the bottom
/// happens in the last.
pub fn ball_frame(progress: f32, j: usize, config: &SceneConfig) -> BallFrame {
    let (w, h) = (config.width, config.height);
    let gap = w / (2 * config.parts + 1) as f32;
    let r = gap / 2.0;
    let sj = segment_progress(progress, j, config.parts);
    let sfj = sinify(sj);
    let sfj1 = segment_progress(sfj, 0, config.mini_parts);
    let drop = segment_progress(sfj, config.mini_parts - 1, config.mini_parts);
    BallFrame {
        offset_x: gap * (2 * j + 1) as f32,
        center: Vec2::new(0.0, r + (h - 2.0 * r) * drop),
        radius: r * sfj1,
        baseline_half: r * sfj1,
        baseline_y: h - r,
    }
}

pub fn draw_bounce_ball_in_line(surface: &mut impl Surface, progress: f32, config: &SceneConfig) {
    for j in 0..config.parts {
        let frame = ball_frame(progress, j, config);
        surface.save();
        surface.translate(Vec2::new(frame.offset_x, 0.0));
        draw_circle(surface, frame.center, frame.radius);
        draw_line(
            surface,
            Vec2::new(-frame.baseline_half, frame.baseline_y),
            Vec2::new(frame.baseline_half, frame.baseline_y),
        );
        surface.restore();
    }
}

/// Draw the row in the palette color of node `index`.
pub fn draw_node(surface: &mut impl Surface, index: usize, progress: f32, config: &SceneConfig) {
    let color = config.palette[index % config.palette.len()];
    surface.set_round_caps();
    surface.set_line_width(config.line_width());
    surface.set_fill_color(color);
    surface.set_stroke_color(color);
    draw_bounce_ball_in_line(surface, progress, config);
}

pub fn fill_background(surface: &mut impl Surface, config: &SceneConfig) {
    surface.set_fill_color(config.background);
    surface.fill_rect(Vec2::ZERO, Vec2::new(config.width, config.height));
}
