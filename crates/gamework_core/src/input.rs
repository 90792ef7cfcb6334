use std::collections::HashSet;

// re-exported so callers don't need to depend on winit
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// State of the keyboard and mouse for the current frame.
///
/// The host drives this structure by feeding it window events; the gui and
/// the console only ever read it. Call [`begin_frame`](Self::begin_frame)
/// before feeding a new frame's events so the "this frame" sets start empty.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    mouse_buttons: HashSet<MouseButton>,
    mouse_pressed: HashSet<MouseButton>,
    mouse_released: HashSet<MouseButton>,
    mouse_pos: (f64, f64),
    /// movement since the frame started
    mouse_delta: (f32, f32),
    text: String,
}

impl InputState {
    pub fn new() -> Self {
        Default::default()
    }

    /// Forget edge-triggered state (presses, releases, typed text, motion).
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
        self.mouse_delta = (0.0, 0.0);
        self.text.clear();
    }

    // ── Keyboard ───────────────────────────────────────────────────────────

    pub fn update_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.keys_down.insert(key) {
                self.keys_pressed.insert(key);
            }
        } else {
            self.keys_down.remove(&key);
        }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Went down during this frame.
    pub fn key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Append committed text (already filtered of control characters by the
    /// caller or not; consumers skip control characters themselves).
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Text typed during this frame.
    pub fn text(&self) -> &str {
        &self.text
    }

    // ── Mouse ──────────────────────────────────────────────────────────────

    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            if self.mouse_buttons.insert(button) {
                self.mouse_pressed.insert(button);
            }
        } else if self.mouse_buttons.remove(&button) {
            self.mouse_released.insert(button);
        }
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    pub fn button_just_pressed(&self, button: MouseButton) -> bool {
        self.mouse_pressed.contains(&button)
    }

    pub fn button_just_released(&self, button: MouseButton) -> bool {
        self.mouse_released.contains(&button)
    }

    /// Update the cursor position (window coordinates), accumulating the
    /// frame's motion.
    pub fn set_mouse_position(&mut self, x: f64, y: f64) {
        let (px, py) = self.mouse_pos;
        self.mouse_pos = (x, y);
        self.mouse_delta.0 += (x - px) as f32;
        self.mouse_delta.1 += (y - py) as f32;
    }

    pub fn mouse_position(&self) -> (f64, f64) {
        self.mouse_pos
    }

    /// Cursor motion accumulated this frame.
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_edges() {
        let mut state = InputState::new();
        state.update_key(KeyCode::Enter, true);
        assert!(state.is_key_pressed(KeyCode::Enter));
        assert!(state.key_just_pressed(KeyCode::Enter));
        state.begin_frame();
        // still held, but no longer a fresh press
        state.update_key(KeyCode::Enter, true);
        assert!(state.is_key_pressed(KeyCode::Enter));
        assert!(!state.key_just_pressed(KeyCode::Enter));
        state.update_key(KeyCode::Enter, false);
        assert!(!state.is_key_pressed(KeyCode::Enter));
    }

    #[test]
    fn mouse_tracking() {
        let mut state = InputState::new();
        state.update_mouse_button(MouseButton::Left, true);
        assert!(state.button_just_pressed(MouseButton::Left));
        state.update_mouse_button(MouseButton::Left, false);
        assert!(state.button_just_released(MouseButton::Left));
        assert!(!state.is_button_down(MouseButton::Left));

        state.set_mouse_position(10.0, 20.0);
        state.begin_frame();
        state.set_mouse_position(15.0, 25.0);
        state.set_mouse_position(17.0, 25.0);
        assert_eq!(state.mouse_delta(), (7.0, 5.0));
        state.begin_frame();
        assert_eq!(state.mouse_delta(), (0.0, 0.0));
        assert_eq!(state.mouse_position(), (17.0, 25.0));
    }

    #[test]
    fn typed_text_is_per_frame() {
        let mut state = InputState::new();
        state.push_text("he");
        state.push_text("lp");
        assert_eq!(state.text(), "help");
        state.begin_frame();
        assert!(state.text().is_empty());
    }
}
