//! The widget-rendering interface the binder draws through.
//!
//! A renderer draws one control per call, seeded with the current value, and
//! returns the value as edited during this pass. Calls are infallible and
//! always return a value of the requested type. Rows group a field's widget
//! with its reset button.

use gamework_core::glam::{Vec2, Vec3};
use gamework_core::{Color, ObjectRef};

use crate::label::FieldLabel;

pub trait WidgetRenderer {
    /// Start a horizontal group; everything until `end_row` shares one line.
    fn begin_row(&mut self);
    fn end_row(&mut self);

    fn toggle(&mut self, label: &FieldLabel, value: bool) -> bool;
    fn int_field(&mut self, label: &FieldLabel, value: i32) -> i32;
    fn float_field(&mut self, label: &FieldLabel, value: f32) -> f32;
    fn slider(&mut self, label: &FieldLabel, value: f32, min: f32, max: f32) -> f32;
    fn int_slider(&mut self, label: &FieldLabel, value: i32, min: i32, max: i32) -> i32;
    /// Returns the selected index into `variants`.
    fn enum_popup(&mut self, label: &FieldLabel, index: usize, variants: &[&str]) -> usize;
    fn color_field(&mut self, label: &FieldLabel, value: Color) -> Color;
    fn vector2_field(&mut self, label: &FieldLabel, value: Vec2) -> Vec2;
    fn vector3_field(&mut self, label: &FieldLabel, value: Vec3) -> Vec3;
    /// Picker restricted to `object_type` (empty: any type); scene objects
    /// are offered only when `allow_scene_objects` is set.
    fn object_field(
        &mut self,
        label: &FieldLabel,
        value: Option<&ObjectRef>,
        object_type: &str,
        allow_scene_objects: bool,
    ) -> Option<ObjectRef>;

    /// Small "restore default" button; `true` when clicked this pass.
    fn reset_button(&mut self) -> bool;
}
