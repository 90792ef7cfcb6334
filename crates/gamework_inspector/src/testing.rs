//! Scripted [`WidgetRenderer`] used by the unit tests.
//!
//! Each widget call pops the next scripted value for its kind, or echoes the
//! current value when nothing is queued. Every call is recorded.

use std::collections::VecDeque;

use gamework_core::glam::{Vec2, Vec3};
use gamework_core::{Color, ObjectRef};

use crate::label::FieldLabel;
use crate::widget::WidgetRenderer;

#[derive(Default)]
pub(crate) struct ScriptedRenderer {
    bools: VecDeque<bool>,
    ints: VecDeque<i32>,
    floats: VecDeque<f32>,
    sliders: VecDeque<f32>,
    enum_indices: VecDeque<usize>,
    objects: VecDeque<Option<ObjectRef>>,
    reset: bool,

    pub rows: usize,
    open_rows: usize,
    pub reset_buttons: usize,
    pub labels: Vec<FieldLabel>,
    pub int_slider_bounds: Vec<(i32, i32)>,
    pub enum_variants: Vec<Vec<String>>,
    pub object_filters: Vec<(String, bool)>,
}

impl ScriptedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggled(mut self, v: bool) -> Self {
        self.bools.push_back(v);
        self
    }

    pub fn int(mut self, v: i32) -> Self {
        self.ints.push_back(v);
        self
    }

    pub fn float(mut self, v: f32) -> Self {
        self.floats.push_back(v);
        self
    }

    pub fn slider(mut self, v: f32) -> Self {
        self.sliders.push_back(v);
        self
    }

    pub fn enum_index(mut self, v: usize) -> Self {
        self.enum_indices.push_back(v);
        self
    }

    pub fn object(mut self, v: Option<ObjectRef>) -> Self {
        self.objects.push_back(v);
        self
    }

    /// Every reset button reports a click.
    pub fn reset(mut self) -> Self {
        self.reset = true;
        self
    }

    fn record(&mut self, label: &FieldLabel) {
        assert!(self.open_rows > 0, "widget drawn outside a row");
        self.labels.push(label.clone());
    }
}

impl WidgetRenderer for ScriptedRenderer {
    fn begin_row(&mut self) {
        self.rows += 1;
        self.open_rows += 1;
    }

    fn end_row(&mut self) {
        assert!(self.open_rows > 0, "unbalanced end_row");
        self.open_rows -= 1;
    }

    fn toggle(&mut self, label: &FieldLabel, value: bool) -> bool {
        self.record(label);
        self.bools.pop_front().unwrap_or(value)
    }

    fn int_field(&mut self, label: &FieldLabel, value: i32) -> i32 {
        self.record(label);
        self.ints.pop_front().unwrap_or(value)
    }

    fn float_field(&mut self, label: &FieldLabel, value: f32) -> f32 {
        self.record(label);
        self.floats.pop_front().unwrap_or(value)
    }

    fn slider(&mut self, label: &FieldLabel, value: f32, _min: f32, _max: f32) -> f32 {
        self.record(label);
        self.sliders.pop_front().unwrap_or(value)
    }

    fn int_slider(&mut self, label: &FieldLabel, value: i32, min: i32, max: i32) -> i32 {
        self.record(label);
        self.int_slider_bounds.push((min, max));
        self.ints.pop_front().unwrap_or(value)
    }

    fn enum_popup(&mut self, label: &FieldLabel, index: usize, variants: &[&str]) -> usize {
        self.record(label);
        self.enum_variants
            .push(variants.iter().map(|v| v.to_string()).collect());
        self.enum_indices.pop_front().unwrap_or(index)
    }

    fn color_field(&mut self, label: &FieldLabel, value: Color) -> Color {
        self.record(label);
        value
    }

    fn vector2_field(&mut self, label: &FieldLabel, value: Vec2) -> Vec2 {
        self.record(label);
        value
    }

    fn vector3_field(&mut self, label: &FieldLabel, value: Vec3) -> Vec3 {
        self.record(label);
        value
    }

    fn object_field(
        &mut self,
        label: &FieldLabel,
        value: Option<&ObjectRef>,
        object_type: &str,
        allow_scene_objects: bool,
    ) -> Option<ObjectRef> {
        self.record(label);
        self.object_filters
            .push((object_type.to_string(), allow_scene_objects));
        self.objects
            .pop_front()
            .unwrap_or_else(|| value.cloned())
    }

    fn reset_button(&mut self) -> bool {
        assert!(self.open_rows > 0, "reset button drawn outside a row");
        self.reset_buttons += 1;
        self.reset
    }
}
