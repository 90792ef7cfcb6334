use crate::layout::Rect;
use crate::widget::{Pointer, Widget};
use crate::RenderCommand;

/// Check box; a click inside flips the value.
#[derive(Debug, Clone)]
pub struct Toggle {
    pub rect: Rect,
    pub value: bool,
    pub box_color: [f32; 4],
    pub check_color: [f32; 4],
}

impl Toggle {
    pub fn new(rect: Rect, value: bool) -> Self {
        Self {
            rect,
            value,
            box_color: [0.15, 0.15, 0.15, 1.0],
            check_color: [0.3, 0.6, 1.0, 1.0],
        }
    }
}

impl Widget for Toggle {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        cmds.push(RenderCommand::Quad {
            rect: self.rect,
            color: self.box_color,
            radii: [2.0; 4],
            flags: 0,
        });
        if self.value {
            cmds.push(RenderCommand::Quad {
                rect: self.rect.inset(self.rect.height * 0.25),
                color: self.check_color,
                radii: [1.0; 4],
                flags: 0,
            });
        }
    }

    fn hit(&self, mx: f64, my: f64) -> bool {
        self.rect.contains(mx, my)
    }

    fn pointer(&mut self, pointer: &Pointer) -> bool {
        if pointer.pressed && self.hit(pointer.x, pointer.y) {
            self.value = !self.value;
            return true;
        }
        false
    }
}
