//! Browser canvas draw target (wasm32 only)

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::DrawTarget;

const HUD_FONT: &str = "16px sans-serif";

/// [`DrawTarget`] over an HTML canvas 2D context
pub struct CanvasTarget {
    ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_font(HUD_FONT);
        Self { ctx }
    }
}

impl DrawTarget for CanvasTarget {
    fn clear_rect(&mut self, min: Vec2, size: Vec2) {
        self.ctx
            .clear_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &str) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("Canvas text failed: {:?}", e);
        }
    }
}
