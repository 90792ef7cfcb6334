use crate::layout::Rect;
use crate::widget::{Pointer, Widget};
use crate::RenderCommand;

/// Number box edited by dragging horizontally with the left button held.
///
/// Each pixel of motion changes the value by `speed`; integer boxes round the
/// result. There is no range: bounds belong to whoever owns the value.
#[derive(Debug, Clone)]
pub struct DragValue {
    pub rect: Rect,
    pub value: f32,
    pub speed: f32,
    pub integer: bool,
    pub bg_color: [f32; 4],
    pub text_color: [f32; 4],
    pub font_size: f32,
}

impl DragValue {
    pub fn new(rect: Rect, value: f32, speed: f32) -> Self {
        Self {
            rect,
            value,
            speed,
            integer: false,
            bg_color: [0.1, 0.1, 0.1, 1.0],
            text_color: [1.0, 1.0, 1.0, 1.0],
            font_size: 12.0,
        }
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self.value = self.value.round();
        self
    }

    pub fn display(&self) -> String {
        if self.integer {
            format!("{}", self.value as i64)
        } else {
            format!("{:.3}", self.value)
        }
    }
}

impl Widget for DragValue {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        cmds.push(RenderCommand::quad(self.rect, self.bg_color));
        cmds.push(RenderCommand::text(
            self.rect.inset(2.0),
            self.display(),
            self.text_color,
            self.font_size,
        ));
    }

    fn hit(&self, mx: f64, my: f64) -> bool {
        self.rect.contains(mx, my)
    }

    fn pointer(&mut self, pointer: &Pointer) -> bool {
        if !pointer.down || pointer.dx == 0.0 {
            return false;
        }
        // the drag started where the pointer was at the beginning of the frame
        if !self.hit(pointer.x - pointer.dx as f64, pointer.y) {
            return false;
        }
        let v = self.value + pointer.dx * self.speed;
        self.value = if self.integer { v.round() } else { v };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(x: f64, dx: f32) -> Pointer {
        Pointer {
            x,
            y: 5.0,
            dx,
            down: true,
            ..Default::default()
        }
    }

    #[test]
    fn drag_changes_value() {
        let mut d = DragValue::new(Rect::new(0.0, 0.0, 50.0, 10.0), 1.0, 0.5);
        assert!(d.pointer(&drag(30.0, 4.0)));
        assert_eq!(d.value, 3.0);
        // a drag that started outside is ignored even when it ends inside
        assert!(!d.pointer(&drag(20.0, 40.0)));
        assert_eq!(d.display(), "3.000");
    }

    #[test]
    fn integer_drag_rounds() {
        let mut d = DragValue::new(Rect::new(0.0, 0.0, 50.0, 10.0), 2.0, 0.1).integer();
        d.pointer(&drag(25.0, 16.0));
        assert_eq!(d.value, 4.0);
        d.pointer(&drag(25.0, -2.0));
        assert_eq!(d.value, 4.0);
        assert_eq!(d.display(), "4");
    }
}
