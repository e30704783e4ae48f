// Host-side doubles for the browser collaborators: a surface that records
// every call and a ticker that only counts begin/cancel.

#![allow(dead_code)]

use bounce_ball_line::draw::Surface;
use bounce_ball_line::{Color, Ticker, TimerError};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Save,
    Restore,
    Translate(Vec2),
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f32),
    RoundCaps,
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc { center: Vec2, radius: f32 },
    Fill,
    Stroke,
    FillRect { origin: Vec2, size: Vec2 },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn arcs(&self) -> Vec<(Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Arc { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn translations(&self) -> Vec<Vec2> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Translate(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn fill_colors(&self) -> Vec<Color> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillColor(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, offset: Vec2) {
        self.ops.push(Op::Translate(offset));
    }
    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::FillColor(color));
    }
    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(Op::StrokeColor(color));
    }
    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::LineWidth(width));
    }
    fn set_round_caps(&mut self) {
        self.ops.push(Op::RoundCaps);
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, p: Vec2) {
        self.ops.push(Op::MoveTo(p));
    }
    fn line_to(&mut self, p: Vec2) {
        self.ops.push(Op::LineTo(p));
    }
    fn arc(&mut self, center: Vec2, radius: f32, _start_angle: f32, _end_angle: f32) {
        self.ops.push(Op::Arc { center, radius });
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ops.push(Op::FillRect { origin, size });
    }
}

#[derive(Default, Debug)]
pub struct ManualTicker {
    pub begins: u32,
    pub cancels: u32,
    pub last_period_ms: Option<u32>,
    /// Number of upcoming `begin` calls that fail to schedule.
    pub failures_left: u32,
}

impl ManualTicker {
    pub fn active(&self) -> bool {
        self.begins > self.cancels
    }
}

impl Ticker for ManualTicker {
    fn begin(&mut self, period_ms: u32) -> Result<(), TimerError> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(TimerError::Schedule("interval refused".into()));
        }
        self.begins += 1;
        self.last_period_ms = Some(period_ms);
        Ok(())
    }
    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

pub fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}
