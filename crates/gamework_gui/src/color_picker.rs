use gamework_core::Color;

use crate::layout::{Rect, QUAD_COLOR_WHEEL};
use crate::widget::{Pointer, Widget};
use crate::RenderCommand;

/// Hue/saturation wheel with a swatch of the current colour.
///
/// Clicking or dragging inside the wheel picks a colour: the angle from the
/// centre gives the hue, the distance gives the saturation, value is 1.0 and
/// alpha is left as it was.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    /// Swatch showing the current colour.
    pub swatch: Rect,
    /// Square the wheel is inscribed in.
    pub wheel: Rect,
    pub colour: Color,
}

impl ColorPicker {
    /// Lay the picker out in `rect`: swatch on the left, wheel on the right.
    pub fn new(rect: Rect, colour: Color) -> Self {
        let side = rect.height.min(rect.width);
        Self {
            swatch: Rect::new(rect.x, rect.y, (rect.width - side - 2.0).max(0.0), rect.height),
            wheel: Rect::new(rect.right() - side, rect.y, side, side),
            colour,
        }
    }

    /// Pick from coordinates normalised to the wheel square. Points outside
    /// the circle are ignored.
    fn default_pick(&mut self, nx: f32, ny: f32) {
        let dx = nx - 0.5;
        let dy = ny - 0.5;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > 0.5 {
            return;
        }
        let angle = dy.atan2(dx);
        let hue = (angle / std::f32::consts::TAU + 1.0) % 1.0;
        let sat = dist / 0.5;
        self.colour = Color::from_hsv(hue, sat, 1.0, self.colour.a);
    }
}

impl Widget for ColorPicker {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        cmds.push(RenderCommand::quad(self.swatch, self.colour.to_array()));
        let radius = self.wheel.width.min(self.wheel.height) * 0.5;
        cmds.push(RenderCommand::Quad {
            rect: self.wheel,
            color: [1.0; 4],
            radii: [radius; 4],
            flags: QUAD_COLOR_WHEEL,
        });
    }

    /// Inside the wheel's circle.
    fn hit(&self, mx: f64, my: f64) -> bool {
        let (cx, cy) = self.wheel.center();
        let rx = self.wheel.width * 0.5;
        let ry = self.wheel.height * 0.5;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (mx as f32 - cx) / rx;
        let dy = (my as f32 - cy) / ry;
        dx * dx + dy * dy <= 1.0
    }

    fn pointer(&mut self, pointer: &Pointer) -> bool {
        if !(pointer.down && self.hit(pointer.x, pointer.y)) {
            return false;
        }
        let nx = (pointer.x as f32 - self.wheel.x) / self.wheel.width;
        let ny = (pointer.y as f32 - self.wheel.y) / self.wheel.height;
        let before = self.colour;
        self.default_pick(nx, ny);
        self.colour != before
    }
}
