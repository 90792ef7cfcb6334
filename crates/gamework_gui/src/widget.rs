use gamework_core::{InputState, MouseButton};

use crate::layout::RenderCommand;

/// Pointer state for one frame, as the widgets see it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    /// Horizontal motion during the frame.
    pub dx: f32,
    /// Left button went down this frame.
    pub pressed: bool,
    /// Left button is held.
    pub down: bool,
}

impl Pointer {
    pub fn from_input(input: &InputState) -> Self {
        let (x, y) = input.mouse_position();
        Self {
            x,
            y,
            dx: input.mouse_delta().0,
            pressed: input.button_just_pressed(MouseButton::Left),
            down: input.is_button_down(MouseButton::Left),
        }
    }
}

/// Anything that can be drawn and hit-tested.
///
/// Widgets do not talk to a renderer; they append backend-agnostic
/// [`RenderCommand`]s which the host converts later.
pub trait Widget {
    fn collect(&self, cmds: &mut Vec<RenderCommand>);

    fn hit(&self, mx: f64, my: f64) -> bool;

    /// Feed this frame's pointer. Returns `true` when the widget's value
    /// changed (or, for buttons, when it was clicked).
    fn pointer(&mut self, _pointer: &Pointer) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_snapshot() {
        let mut input = InputState::new();
        input.set_mouse_position(10.0, 5.0);
        input.begin_frame();
        input.set_mouse_position(14.0, 5.0);
        input.update_mouse_button(MouseButton::Left, true);
        let p = Pointer::from_input(&input);
        assert_eq!((p.x, p.y, p.dx), (14.0, 5.0, 4.0));
        assert!(p.pressed && p.down);

        input.begin_frame();
        let p = Pointer::from_input(&input);
        assert!(!p.pressed && p.down);
    }
}
