//! In-memory draw target
//!
//! Records every call as a [`DrawCommand`]. Used by tests and the headless
//! native run.

use glam::Vec2;

use super::DrawTarget;

/// One recorded draw call, with the alpha active when it was issued
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { min: Vec2, size: Vec2 },
    Polygon { points: Vec<Vec2>, color: String, alpha: f32 },
    Rect { min: Vec2, size: Vec2, color: String, alpha: f32 },
    Circle { center: Vec2, radius: f32, color: String, alpha: f32 },
    Line { from: Vec2, to: Vec2, color: String, width: f32, alpha: f32 },
    Text { text: String, pos: Vec2, color: String },
}

#[derive(Debug, Clone)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
    alpha: f32,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            alpha: 1.0,
        }
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded commands (alpha is kept)
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Number of commands matching a predicate
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl DrawTarget for Recorder {
    fn clear_rect(&mut self, min: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Clear { min, size });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &str) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color: color.to_string(),
            alpha: self.alpha,
        });
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::Rect {
            min,
            size,
            color: color.to_string(),
            alpha: self.alpha,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
            alpha: self.alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: color.to_string(),
            width,
            alpha: self.alpha,
        });
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color: color.to_string(),
        });
    }
}
