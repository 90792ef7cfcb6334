//! Immediate-mode inspector renderer.
//!
//! `InspectorUi` implements the inspector's [`WidgetRenderer`]: every call
//! lays out one widget, feeds it this frame's pointer, records its draw
//! commands and returns the edited value. Rows stack top to bottom with a
//! fixed label column, a field column and a reset-button column.
//!
//! ```rust
//! use gamework_core::InputState;
//! use gamework_gui::{InspectorUi, UiStyle};
//! use gamework_inspector::{FieldLabel, WidgetRenderer};
//!
//! let input = InputState::new();
//! let mut ui = InspectorUi::new(&input, UiStyle::default());
//! ui.begin_row();
//! let enabled = ui.toggle(&FieldLabel::new("Enabled"), true);
//! ui.reset_button();
//! ui.end_row();
//! assert!(enabled);
//! assert!(!ui.finish().is_empty());
//! ```

use gamework_core::glam::{Vec2, Vec3};
use log::trace;
use gamework_core::{Color, InputState, ObjectRef};
use gamework_inspector::{FieldLabel, WidgetRenderer};

use crate::button::Button;
use crate::color_picker::ColorPicker;
use crate::drag_value::DragValue;
use crate::layout::{Rect, RenderCommand};
use crate::picker::{EnumPopup, ObjectPicker};
use crate::slider::Slider;
use crate::toggle::Toggle;
use crate::widget::{Pointer, Widget};

/// Sizes and colours of the inspector layout.
#[derive(Debug, Clone, PartialEq)]
pub struct UiStyle {
    pub origin: (f32, f32),
    pub row_height: f32,
    pub label_width: f32,
    pub field_width: f32,
    pub reset_width: f32,
    pub spacing: f32,
    pub font_size: f32,
    /// Value change per pixel dragged in number fields.
    pub drag_speed: f32,
    pub text_color: Color,
    pub tooltip_background: Color,
}

impl Default for UiStyle {
    fn default() -> Self {
        Self {
            origin: (0.0, 0.0),
            row_height: 20.0,
            label_width: 140.0,
            field_width: 200.0,
            reset_width: 20.0,
            spacing: 4.0,
            font_size: 14.0,
            drag_speed: 0.1,
            text_color: Color::rgb(0.9, 0.9, 0.9),
            tooltip_background: Color::rgba(0.05, 0.05, 0.05, 0.9),
        }
    }
}

/// One inspector pass over the current frame's input.
pub struct InspectorUi<'a> {
    input: &'a InputState,
    pointer: Pointer,
    style: UiStyle,
    catalog: Vec<ObjectRef>,
    cursor_x: f32,
    cursor_y: f32,
    in_row: bool,
    commands: Vec<RenderCommand>,
    tooltips: Vec<RenderCommand>,
}

impl<'a> InspectorUi<'a> {
    pub fn new(input: &'a InputState, style: UiStyle) -> Self {
        let (x, y) = style.origin;
        Self {
            input,
            pointer: Pointer::from_input(input),
            style,
            catalog: Vec::new(),
            cursor_x: x,
            cursor_y: y,
            in_row: false,
            commands: Vec::new(),
            tooltips: Vec::new(),
        }
    }

    /// Objects offered by object fields (assets and scene objects alike;
    /// each field filters them by type and origin).
    pub fn with_catalog(mut self, catalog: Vec<ObjectRef>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn input(&self) -> &InputState {
        self.input
    }

    pub fn style(&self) -> &UiStyle {
        &self.style
    }

    /// Candidates for an object field.
    pub fn candidates(&self, object_type: &str, allow_scene_objects: bool) -> Vec<ObjectRef> {
        self.catalog
            .iter()
            .filter(|o| object_type.is_empty() || o.type_name == object_type)
            .filter(|o| allow_scene_objects || !o.is_scene_object())
            .cloned()
            .collect()
    }

    /// Draw commands recorded so far, tooltips last so they end up on top.
    pub fn finish(mut self) -> Vec<RenderCommand> {
        self.commands.append(&mut self.tooltips);
        self.commands
    }

    // ── layout ─────────────────────────────────────────────────────────────

    /// Reserve `width` pixels on the current line.
    fn slot(&mut self, width: f32) -> Rect {
        let rect = Rect::new(self.cursor_x, self.cursor_y, width, self.style.row_height);
        self.cursor_x += width + self.style.spacing;
        rect
    }

    fn next_line(&mut self) {
        self.cursor_x = self.style.origin.0;
        self.cursor_y += self.style.row_height + self.style.spacing;
    }

    /// Widgets drawn outside `begin_row`/`end_row` get a line of their own.
    fn close_widget(&mut self) {
        if !self.in_row {
            self.next_line();
        }
    }

    fn label(&mut self, label: &FieldLabel) {
        let rect = self.slot(self.style.label_width);
        self.commands.push(RenderCommand::text(
            rect,
            label.text.clone(),
            self.style.text_color.to_array(),
            self.style.font_size,
        ));
        if !label.tooltip.is_empty() && rect.contains(self.pointer.x, self.pointer.y) {
            let tip = Rect::new(rect.x, rect.bottom(), self.style.field_width, self.style.row_height);
            self.tooltips
                .push(RenderCommand::quad(tip, self.style.tooltip_background.to_array()));
            self.tooltips.push(RenderCommand::text(
                tip.inset(2.0),
                label.tooltip.clone(),
                self.style.text_color.to_array(),
                self.style.font_size,
            ));
        }
    }

    /// Feed the pointer, record the widget and hand it back for reading,
    /// together with whether the pointer changed it.
    fn run<W: Widget>(&mut self, mut widget: W) -> (W, bool) {
        let changed = widget.pointer(&self.pointer);
        widget.collect(&mut self.commands);
        (widget, changed)
    }

    fn labelled<W: Widget>(
        &mut self,
        label: &FieldLabel,
        build: impl FnOnce(Rect) -> W,
    ) -> (W, bool) {
        self.label(label);
        let rect = self.slot(self.style.field_width);
        let result = self.run(build(rect));
        self.close_widget();
        result
    }

    fn drag_components(&mut self, label: &FieldLabel, values: &mut [f32]) {
        self.label(label);
        let rect = self.slot(self.style.field_width);
        let speed = self.style.drag_speed;
        let cells = rect.columns(values.len(), 2.0);
        for (value, cell) in values.iter_mut().zip(cells) {
            *value = self.run(DragValue::new(cell, *value, speed)).0.value;
        }
        self.close_widget();
    }
}

impl WidgetRenderer for InspectorUi<'_> {
    fn begin_row(&mut self) {
        if self.in_row {
            self.next_line();
        }
        self.cursor_x = self.style.origin.0;
        self.in_row = true;
    }

    fn end_row(&mut self) {
        self.in_row = false;
        self.next_line();
    }

    fn toggle(&mut self, label: &FieldLabel, value: bool) -> bool {
        let side = self.style.row_height;
        self.labelled(label, |r| Toggle::new(Rect::new(r.x, r.y, side, side), value))
            .0
            .value
    }

    // Widgets hold f32; integers only go through them when the pointer
    // actually edits the value, so large values survive untouched passes.
    fn int_field(&mut self, label: &FieldLabel, value: i32) -> i32 {
        let speed = self.style.drag_speed;
        match self.labelled(label, |r| DragValue::new(r, value as f32, speed).integer()) {
            (drag, true) => drag.value as i32,
            (_, false) => value,
        }
    }

    fn float_field(&mut self, label: &FieldLabel, value: f32) -> f32 {
        let speed = self.style.drag_speed;
        self.labelled(label, |r| DragValue::new(r, value, speed)).0.value
    }

    fn slider(&mut self, label: &FieldLabel, value: f32, min: f32, max: f32) -> f32 {
        self.labelled(label, |r| Slider::new(r, value, min, max)).0.value
    }

    fn int_slider(&mut self, label: &FieldLabel, value: i32, min: i32, max: i32) -> i32 {
        let build = |r| Slider::new(r, value as f32, min as f32, max as f32).integer();
        match self.labelled(label, build) {
            (slider, true) => slider.value as i32,
            (_, false) if min < max => value.clamp(min, max),
            (_, false) => value,
        }
    }

    fn enum_popup(&mut self, label: &FieldLabel, index: usize, variants: &[&str]) -> usize {
        self.labelled(label, |r| EnumPopup::new(r, index, variants))
            .0
            .index
    }

    fn color_field(&mut self, label: &FieldLabel, value: Color) -> Color {
        self.labelled(label, |r| ColorPicker::new(r, value)).0.colour
    }

    fn vector2_field(&mut self, label: &FieldLabel, value: Vec2) -> Vec2 {
        let mut v = value.to_array();
        self.drag_components(label, &mut v);
        Vec2::from_array(v)
    }

    fn vector3_field(&mut self, label: &FieldLabel, value: Vec3) -> Vec3 {
        let mut v = value.to_array();
        self.drag_components(label, &mut v);
        Vec3::from_array(v)
    }

    fn object_field(
        &mut self,
        label: &FieldLabel,
        value: Option<&ObjectRef>,
        object_type: &str,
        allow_scene_objects: bool,
    ) -> Option<ObjectRef> {
        let candidates = self.candidates(object_type, allow_scene_objects);
        if candidates.is_empty() {
            trace!("{}: no '{}' objects to pick from", label.text, object_type);
        }
        self.labelled(label, |r| {
            ObjectPicker::new(r, value.cloned(), candidates).with_type(object_type)
        })
        .0
        .current
    }

    fn reset_button(&mut self) -> bool {
        let rect = self.slot(self.style.reset_width);
        let mut button = Button::new(rect).with_label("\u{21ba}").with_radius(3.0);
        let clicked = button.pointer(&self.pointer);
        button.collect(&mut self.commands);
        self.close_widget();
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamework_core::scene::ObjectOrigin;
    use gamework_core::MouseButton;

    /// Input with the left button pressed this frame at `(x, y)`.
    fn click_at(x: f64, y: f64) -> InputState {
        let mut input = InputState::new();
        input.set_mouse_position(x, y);
        input.update_mouse_button(MouseButton::Left, true);
        input
    }

    /// Input dragging from `from_x` to `to_x` at height `y`.
    fn drag(from_x: f64, to_x: f64, y: f64) -> InputState {
        let mut input = InputState::new();
        input.set_mouse_position(from_x, y);
        input.update_mouse_button(MouseButton::Left, true);
        input.begin_frame();
        input.set_mouse_position(to_x, y);
        input
    }

    fn field_x(style: &UiStyle) -> f64 {
        (style.origin.0 + style.label_width + style.spacing) as f64
    }

    fn reset_x(style: &UiStyle) -> f64 {
        field_x(style) + (style.field_width + style.spacing) as f64
    }

    #[test]
    fn toggle_flips_on_click() {
        let style = UiStyle::default();
        let input = click_at(field_x(&style) + 5.0, 5.0);
        let mut ui = InspectorUi::new(&input, style);
        assert!(ui.toggle(&FieldLabel::new("On"), false));
        // the second row is below the pointer
        assert!(!ui.toggle(&FieldLabel::new("Off"), false));
    }

    #[test]
    fn slider_maps_pointer_and_stays_in_range() {
        let style = UiStyle::default();
        let mid = field_x(&style) + style.field_width as f64 / 2.0;
        let input = click_at(mid, 10.0);
        let mut ui = InspectorUi::new(&input, style.clone());
        assert_eq!(ui.slider(&FieldLabel::new("Throttle"), 0.0, 0.0, 10.0), 5.0);

        let input = click_at(field_x(&style) + 1.0, 10.0);
        let mut ui = InspectorUi::new(&input, style.clone());
        assert_eq!(ui.int_slider(&FieldLabel::new("Bays"), 99, 0, 10), 0);

        // untouched, an out-of-range value is pulled into range
        let input = InputState::new();
        let mut ui = InspectorUi::new(&input, style);
        assert_eq!(ui.int_slider(&FieldLabel::new("Bays"), 99, 0, 10), 10);
    }

    #[test]
    fn dragging_number_fields() {
        let style = UiStyle::default();
        let x = field_x(&style) + 10.0;
        let input = drag(x, x + 20.0, 10.0);
        let mut ui = InspectorUi::new(&input, style.clone());
        assert!((ui.float_field(&FieldLabel::new("Speed"), 1.0) - 3.0).abs() < 1e-5);

        let input = drag(x, x + 20.0, 10.0);
        let mut ui = InspectorUi::new(&input, style.clone());
        assert_eq!(ui.int_field(&FieldLabel::new("Crew"), 4), 6);

        // first component of a vector field
        let input = drag(x, x + 10.0, 10.0);
        let mut ui = InspectorUi::new(&input, style);
        assert_eq!(ui.vector3_field(&FieldLabel::new("Spawn"), Vec3::ZERO), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn untouched_integers_keep_full_precision() {
        use gamework_inspector::attribute::IntAttribute;
        use gamework_inspector::{impl_reflect, AttributeRegistry, FieldBinder};

        let input = InputState::new();
        let mut ui = InspectorUi::new(&input, UiStyle::default());
        assert_eq!(ui.int_field(&FieldLabel::new("Score"), 123_456_789), 123_456_789);
        assert_eq!(ui.int_slider(&FieldLabel::new("Seed"), 100_000_001, 0, i32::MAX), 100_000_001);
        assert_eq!(ui.int_slider(&FieldLabel::new("Seed"), -7, 0, i32::MAX), 0);

        struct Player {
            score: i32,
        }
        impl_reflect!(Player { score });

        let registry = AttributeRegistry::builder()
            .field("Player", "score", IntAttribute::new(0))
            .build()
            .unwrap();
        let mut player = Player { score: 123_456_789 };
        for _ in 0..3 {
            let mut ui = InspectorUi::new(&input, UiStyle::default());
            FieldBinder::new(&registry, &mut ui).int_field(&mut player, "score", "");
        }
        assert_eq!(player.score, 123_456_789);
    }

    #[test]
    fn reset_button_reports_click_in_its_row_only() {
        let style = UiStyle::default();
        let input = click_at(reset_x(&style) + 2.0, 5.0);
        let mut ui = InspectorUi::new(&input, style);
        ui.begin_row();
        ui.float_field(&FieldLabel::new("Speed"), 1.0);
        assert!(ui.reset_button());
        ui.end_row();
        ui.begin_row();
        ui.float_field(&FieldLabel::new("Drift"), 1.0);
        assert!(!ui.reset_button());
        ui.end_row();
    }

    #[test]
    fn enum_and_object_fields_cycle() {
        let style = UiStyle::default();
        let input = click_at(field_x(&style) + 5.0, 5.0);
        let mut ui = InspectorUi::new(&input, style.clone());
        assert_eq!(ui.enum_popup(&FieldLabel::new("Hull"), 2, &["Light", "Medium", "Heavy"]), 0);

        let steel = ObjectRef::asset(1, "Steel", "Material");
        let mesh = ObjectRef::asset(2, "Hull", "Mesh");
        let mut glass = ObjectRef::asset(3, "Glass", "Material");
        glass.origin = ObjectOrigin::Scene;
        let catalog = vec![mesh, glass.clone(), steel.clone()];

        let mut ui = InspectorUi::new(&input, style.clone()).with_catalog(catalog.clone());
        assert_eq!(ui.candidates("Material", false), vec![steel.clone()]);
        assert_eq!(ui.candidates("Material", true), vec![glass.clone(), steel.clone()]);
        assert_eq!(ui.candidates("", true).len(), 3);
        assert_eq!(ui.object_field(&FieldLabel::new("Paint"), None, "Material", false), Some(steel.clone()));

        let mut ui = InspectorUi::new(&input, style).with_catalog(catalog);
        assert_eq!(ui.object_field(&FieldLabel::new("Paint"), Some(&steel), "Shader", false), None);
    }

    #[test]
    fn binder_reset_through_the_ui() {
        use gamework_inspector::attribute::FloatAttribute;
        use gamework_inspector::{impl_reflect, AttributeRegistry, FieldBinder};

        struct Ship {
            speed: f32,
        }
        impl_reflect!(Ship { speed });

        let registry = AttributeRegistry::builder()
            .field("Ship", "speed", FloatAttribute::new(10.0).with_range(0.0, 100.0))
            .build()
            .unwrap();
        let mut ship = Ship { speed: 150.0 };

        // nothing clicked: the stored out-of-range value gets clamped
        let input = InputState::new();
        let mut ui = InspectorUi::new(&input, UiStyle::default());
        assert_eq!(FieldBinder::new(&registry, &mut ui).float_field(&mut ship, "speed", ""), 100.0);

        ship.speed = 42.0;
        let style = UiStyle::default();
        let input = click_at(reset_x(&style) + 2.0, 5.0);
        let mut ui = InspectorUi::new(&input, style);
        assert_eq!(FieldBinder::new(&registry, &mut ui).float_field(&mut ship, "speed", ""), 10.0);
        assert_eq!(ship.speed, 10.0);
        let texts: Vec<String> = ui
            .finish()
            .iter()
            .filter_map(|c| c.as_text().map(str::to_string))
            .collect();
        assert_eq!(texts[0], "Speed");
    }

    #[test]
    fn tooltip_is_drawn_last_when_hovering_label() {
        let style = UiStyle::default();
        let mut input = InputState::new();
        input.set_mouse_position(10.0, 10.0);
        let mut ui = InspectorUi::new(&input, style);
        let label = FieldLabel::new("Speed").with_tooltip("Units per second");
        ui.float_field(&label, 1.0);
        let cmds = ui.finish();
        assert_eq!(cmds.last().and_then(|c| c.as_text()), Some("Units per second"));
        assert_eq!(cmds.first().and_then(|c| c.as_text()), Some("Speed"));
    }
}
