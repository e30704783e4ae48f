use crate::config::Color;
use crate::draw::Surface;
use glam::Vec2;
use web_sys as web;

// Canvas calls that return `Result` only fail on non-finite input, which the
// validated config rules out; failures are dropped like the other DOM calls.
impl Surface for web::CanvasRenderingContext2d {
    fn save(&mut self) {
        web::CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        web::CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, offset: Vec2) {
        _ = web::CanvasRenderingContext2d::translate(self, offset.x as f64, offset.y as f64);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.set_fill_style_str(&color.css());
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.set_stroke_style_str(&color.css());
    }

    fn set_line_width(&mut self, width: f32) {
        web::CanvasRenderingContext2d::set_line_width(self, width as f64);
    }

    fn set_round_caps(&mut self) {
        web::CanvasRenderingContext2d::set_line_cap(self, "round");
    }

    fn begin_path(&mut self) {
        web::CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, p: Vec2) {
        web::CanvasRenderingContext2d::move_to(self, p.x as f64, p.y as f64);
    }

    fn line_to(&mut self, p: Vec2) {
        web::CanvasRenderingContext2d::line_to(self, p.x as f64, p.y as f64);
    }

    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        _ = web::CanvasRenderingContext2d::arc(
            self,
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            start_angle as f64,
            end_angle as f64,
        );
    }

    fn fill(&mut self) {
        web::CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        web::CanvasRenderingContext2d::stroke(self);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        web::CanvasRenderingContext2d::fill_rect(
            self,
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }
}
