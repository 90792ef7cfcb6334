use crate::layout::Rect;
use crate::widget::{Pointer, Widget};
use crate::RenderCommand;

/// Rectangular push button with an optional caption.
///
/// Tracks hover/press state for tinting; `pointer` reports a click when the
/// left button goes down inside the rect.
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub hovered: bool,
    pub pressed: bool,
    /// base colour (tinted when hovered/pressed)
    pub color: [f32; 4],
    pub text_color: [f32; 4],
    pub font_size: f32,
    /// [top-left, top-right, bottom-left, bottom-right]
    pub radii: [f32; 4],
}

impl Button {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            label: String::new(),
            hovered: false,
            pressed: false,
            color: [0.25, 0.25, 0.3, 1.0],
            text_color: [1.0, 1.0, 1.0, 1.0],
            font_size: 12.0,
            radii: [0.0; 4],
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_radius(mut self, r: f32) -> Self {
        self.radii = [r; 4];
        self
    }

    fn current_color(&self) -> [f32; 4] {
        let [r, g, b, a] = self.color;
        if self.pressed {
            [r * 0.7, g * 0.7, b * 0.7, a]
        } else if self.hovered {
            [(r * 1.3).min(1.0), (g * 1.3).min(1.0), (b * 1.3).min(1.0), a]
        } else {
            self.color
        }
    }
}

impl Widget for Button {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        cmds.push(RenderCommand::Quad {
            rect: self.rect,
            color: self.current_color(),
            radii: self.radii,
            flags: 0,
        });
        if !self.label.is_empty() {
            cmds.push(RenderCommand::text(
                self.rect,
                self.label.clone(),
                self.text_color,
                self.font_size,
            ));
        }
    }

    fn hit(&self, mx: f64, my: f64) -> bool {
        self.rect.contains(mx, my)
    }

    fn pointer(&mut self, pointer: &Pointer) -> bool {
        self.hovered = self.hit(pointer.x, pointer.y);
        self.pressed = self.hovered && pointer.down;
        self.hovered && pointer.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_and_hover() {
        let mut b = Button::new(Rect::new(10.0, 10.0, 20.0, 20.0)).with_label("R");
        let hover = Pointer {
            x: 15.0,
            y: 15.0,
            ..Default::default()
        };
        assert!(!b.pointer(&hover));
        assert!(b.hovered && !b.pressed);
        assert!(b.pointer(&Pointer {
            pressed: true,
            down: true,
            ..hover
        }));
        assert!(b.pressed);
        assert!(!b.pointer(&Pointer {
            x: 0.0,
            pressed: true,
            down: true,
            ..hover
        }));

        let mut cmds = Vec::new();
        b.collect(&mut cmds);
        assert_eq!(cmds[1].as_text(), Some("R"));
    }
}
