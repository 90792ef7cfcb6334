//! Attribute-less editing helpers.
//!
//! [`Inspector`] draws a widget plus a reset button on one row, where the
//! caller supplies the value to reset to instead of an attribute. The
//! `*_field` variants look the field up by name on a [`Reflect`] object and
//! write the result back; an unknown field is logged and yields the zero
//! value.

use gamework_core::glam::{Vec2, Vec3};
use gamework_core::Color;
use log::warn;

use crate::attribute::FieldKind;
use crate::label::{nicify, FieldLabel};
use crate::reflect::{FieldMut, Reflect};
use crate::reset;
use crate::widget::WidgetRenderer;

/// Values the inspector can edit without an attribute.
trait InspectorValue: Copy {
    const KIND: FieldKind;
    const ZERO: Self;
    fn read(field: &FieldMut<'_>) -> Option<Self>;
    fn write(field: &mut FieldMut<'_>, value: Self);
    fn draw<R: WidgetRenderer + ?Sized>(renderer: &mut R, label: &FieldLabel, value: Self) -> Self;
}

macro_rules! inspector_value {
    ($($ty:ty: $kind:ident = $zero:expr, $draw:ident;)*) => {
        $(
            impl InspectorValue for $ty {
                const KIND: FieldKind = FieldKind::$kind;
                const ZERO: Self = $zero;

                fn read(field: &FieldMut<'_>) -> Option<Self> {
                    match field {
                        FieldMut::$kind(v) => Some(**v),
                        _ => None,
                    }
                }

                fn write(field: &mut FieldMut<'_>, value: Self) {
                    if let FieldMut::$kind(v) = field {
                        **v = value;
                    }
                }

                fn draw<R: WidgetRenderer + ?Sized>(
                    renderer: &mut R,
                    label: &FieldLabel,
                    value: Self,
                ) -> Self {
                    renderer.$draw(label, value)
                }
            }
        )*
    };
}

inspector_value! {
    bool: Bool = false, toggle;
    i32: Int = 0, int_field;
    f32: Float = 0.0, float_field;
    Color: Color = Color::BLACK, color_field;
    Vec2: Vector2 = Vec2::ZERO, vector2_field;
    Vec3: Vector3 = Vec3::ZERO, vector3_field;
}

pub struct Inspector<'a, R: ?Sized> {
    renderer: &'a mut R,
}

impl<'a, R: WidgetRenderer + ?Sized> Inspector<'a, R> {
    pub fn new(renderer: &'a mut R) -> Self {
        Self { renderer }
    }

    fn row<T: InspectorValue>(&mut self, label: &FieldLabel, value: T, reset_to: T) -> T {
        self.renderer.begin_row();
        let edited = T::draw(&mut *self.renderer, label, value);
        let requested = reset::requested(&mut *self.renderer);
        self.renderer.end_row();
        reset::resolve(requested, edited, || reset_to)
    }

    fn field<T: InspectorValue>(&mut self, object: &mut dyn Reflect, field_name: &str, reset_to: T) -> T {
        let type_name = object.type_name();
        let Some(mut field) = object.field_mut(field_name) else {
            warn!("Field '{field_name}' not found");
            return T::ZERO;
        };
        let Some(current) = T::read(&field) else {
            warn!(
                "Field '{field_name}' of {type_name} is a {}, not a {}",
                field.kind(),
                T::KIND
            );
            return T::ZERO;
        };
        let label = FieldLabel::new(nicify(field_name));
        let value = self.row(&label, current, reset_to);
        T::write(&mut field, value);
        value
    }

    // ── value helpers ──────────────────────────────────────────────────────

    /// Toggle with a reset button restoring `reset_to`.
    pub fn toggle(&mut self, label: &FieldLabel, value: bool, reset_to: bool) -> bool {
        self.row(label, value, reset_to)
    }

    pub fn int(&mut self, label: &FieldLabel, value: i32, reset_to: i32) -> i32 {
        self.row(label, value, reset_to)
    }

    pub fn float(&mut self, label: &FieldLabel, value: f32, reset_to: f32) -> f32 {
        self.row(label, value, reset_to)
    }

    pub fn color(&mut self, label: &FieldLabel, value: Color, reset_to: Color) -> Color {
        self.row(label, value, reset_to)
    }

    pub fn vector2(&mut self, label: &FieldLabel, value: Vec2, reset_to: Vec2) -> Vec2 {
        self.row(label, value, reset_to)
    }

    pub fn vector3(&mut self, label: &FieldLabel, value: Vec3, reset_to: Vec3) -> Vec3 {
        self.row(label, value, reset_to)
    }

    // ── by field name ──────────────────────────────────────────────────────

    pub fn toggle_field(&mut self, object: &mut dyn Reflect, field_name: &str, reset_to: bool) -> bool {
        self.field(object, field_name, reset_to)
    }

    pub fn int_field(&mut self, object: &mut dyn Reflect, field_name: &str, reset_to: i32) -> i32 {
        self.field(object, field_name, reset_to)
    }

    pub fn float_field(&mut self, object: &mut dyn Reflect, field_name: &str, reset_to: f32) -> f32 {
        self.field(object, field_name, reset_to)
    }

    pub fn color_field(&mut self, object: &mut dyn Reflect, field_name: &str, reset_to: Color) -> Color {
        self.field(object, field_name, reset_to)
    }

    pub fn vector2_field(&mut self, object: &mut dyn Reflect, field_name: &str, reset_to: Vec2) -> Vec2 {
        self.field(object, field_name, reset_to)
    }

    pub fn vector3_field(&mut self, object: &mut dyn Reflect, field_name: &str, reset_to: Vec3) -> Vec3 {
        self.field(object, field_name, reset_to)
    }
}
