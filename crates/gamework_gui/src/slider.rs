use crate::layout::Rect;
use crate::widget::{Pointer, Widget};
use crate::RenderCommand;

/// Horizontal slider over `[min, max]`.
///
/// Holding the left button anywhere on the track moves the value to the
/// pointer. In integer mode values snap to whole numbers. The value is
/// always kept inside the range (a degenerate range leaves it untouched).
#[derive(Debug, Clone)]
pub struct Slider {
    pub rect: Rect,
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub integer: bool,
    pub thumb_color: [f32; 4],
    pub track_color: [f32; 4],
}

impl Slider {
    pub fn new(rect: Rect, value: f32, min: f32, max: f32) -> Self {
        let mut slider = Self {
            rect,
            value,
            min,
            max,
            integer: false,
            thumb_color: [0.8, 0.8, 0.8, 1.0],
            track_color: [0.2, 0.2, 0.2, 1.0],
        };
        slider.value = slider.clamp(value);
        slider
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self.value = self.clamp(self.value.round());
        self
    }

    fn clamp(&self, v: f32) -> f32 {
        if self.min < self.max {
            v.clamp(self.min, self.max)
        } else {
            v
        }
    }

    /// Thumb position in `[0, 1]`.
    pub fn normalized(&self) -> f32 {
        if self.min < self.max {
            ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Value under window x coordinate `mx`.
    pub fn value_at(&self, mx: f64) -> f32 {
        if self.min >= self.max {
            return self.value;
        }
        let v = self.min + self.rect.normalized_x(mx) * (self.max - self.min);
        let v = if self.integer { v.round() } else { v };
        self.clamp(v)
    }

    fn thumb_rect(&self) -> Rect {
        let thumb_w = self.rect.width * 0.1;
        let tx = self.rect.x + (self.rect.width - thumb_w) * self.normalized();
        Rect::new(tx, self.rect.y, thumb_w, self.rect.height)
    }
}

impl Widget for Slider {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        // track
        cmds.push(RenderCommand::quad(self.rect, self.track_color));
        // thumb
        cmds.push(RenderCommand::quad(self.thumb_rect(), self.thumb_color));
    }

    fn hit(&self, mx: f64, my: f64) -> bool {
        // the whole track is hittable, not just the thumb
        self.rect.contains(mx, my)
    }

    fn pointer(&mut self, pointer: &Pointer) -> bool {
        if !(pointer.down && self.hit(pointer.x, pointer.y)) {
            return false;
        }
        let v = self.value_at(pointer.x);
        let changed = v != self.value;
        self.value = v;
        changed
    }
}
