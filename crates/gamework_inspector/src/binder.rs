//! Attribute-driven field binding.
//!
//! [`FieldBinder::bind`] runs one synchronization pass for a single field:
//!
//! 1. resolve the field on the object ([`Reflect::field_mut`]),
//! 2. resolve its attribute in the [`AttributeRegistry`] and check the kind,
//! 3. read the current value,
//! 4. draw the widget and the reset button on one row,
//! 5. replace the edited value by the attribute default if reset was clicked,
//! 6. apply the constraint policy,
//! 7. write the final value back exactly once and return it.
//!
//! Any lookup failure stops before step 4: nothing is drawn and nothing is
//! written. The per-kind wrappers (`bool_field`, `float_field`, ...) turn
//! such failures into the kind's zero value.
//!
//! Each supported value type implements [`FieldType`], the small capability
//! set the generic routine needs.

use gamework_core::glam::{Vec2, Vec3};
use gamework_core::{Color, ObjectRef};
use log::{trace, warn};
use thiserror::Error;

use crate::attribute::{
    Attribute, BoolAttribute, ColorAttribute, EnumAttribute, FieldKind, FloatAttribute,
    IntAttribute, ObjectReferenceAttribute, SliderAttribute, Vector2Attribute, Vector3Attribute,
};
use crate::constraint;
use crate::label::FieldLabel;
use crate::reflect::{FieldMut, Reflect};
use crate::registry::AttributeRegistry;
use crate::reset;
use crate::widget::WidgetRenderer;

/// Why a field could not be bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unbound {
    #[error("{type_name} has no field '{field}'")]
    MissingField { type_name: &'static str, field: String },
    #[error("{type_name}.{field} has no attribute")]
    MissingAttribute { type_name: &'static str, field: String },
    #[error("{type_name}.{field}: expected {expected}, found {found}")]
    TypeMismatch {
        type_name: &'static str,
        field: String,
        expected: FieldKind,
        found: FieldKind,
    },
}

// ─── Capability set ────────────────────────────────────────────────────────

/// What the binder needs to know about one kind of value.
pub trait FieldType: Sized {
    /// Attribute payload for this kind.
    type Attribute;

    const KIND: FieldKind;
    /// Whether a reset button is drawn after the widget.
    const RESETTABLE: bool = true;

    /// Returned by the wrappers when nothing could be bound.
    fn zero() -> Self;

    fn attribute(attribute: &Attribute) -> Option<&Self::Attribute>;

    /// `None` when the field's storage does not fit the attribute.
    fn read(field: &FieldMut<'_>, attribute: &Self::Attribute) -> Option<Self>;

    fn write(field: &mut FieldMut<'_>, value: &Self);

    fn render<R: WidgetRenderer + ?Sized>(
        renderer: &mut R,
        label: &FieldLabel,
        value: &Self,
        attribute: &Self::Attribute,
    ) -> Self;

    /// Value after a reset. `current` is the value read before editing.
    fn default_value(attribute: &Self::Attribute, current: &Self) -> Self;

    /// Constraint policy; `previous` is the value read before editing.
    fn constrain(value: Self, previous: &Self, attribute: &Self::Attribute) -> Self;
}

// Value types that live directly in one `FieldMut` variant and whose
// default is stored on the attribute as-is.
macro_rules! plain_field_type {
    (@constrain Int, $value:ident, $attr:ident) => { $attr.bounds().clamp($value) };
    (@constrain Float, $value:ident, $attr:ident) => { $attr.bounds().clamp($value) };
    (@constrain $other:ident, $value:ident, $attr:ident) => { $value };
    ($($ty:ty: $kind:ident, $attr:ident, $zero:expr, $render:ident;)*) => {
        $(
            impl FieldType for $ty {
                type Attribute = $attr;
                const KIND: FieldKind = FieldKind::$kind;

                fn zero() -> Self {
                    $zero
                }

                fn attribute(attribute: &Attribute) -> Option<&$attr> {
                    match attribute {
                        Attribute::$kind(a) => Some(a),
                        _ => None,
                    }
                }

                fn read(field: &FieldMut<'_>, _: &$attr) -> Option<Self> {
                    match field {
                        FieldMut::$kind(v) => Some(**v),
                        _ => None,
                    }
                }

                fn write(field: &mut FieldMut<'_>, value: &Self) {
                    if let FieldMut::$kind(v) = field {
                        **v = *value;
                    }
                }

                fn render<R: WidgetRenderer + ?Sized>(
                    renderer: &mut R,
                    label: &FieldLabel,
                    value: &Self,
                    _: &$attr,
                ) -> Self {
                    renderer.$render(label, *value)
                }

                fn default_value(attribute: &$attr, _: &Self) -> Self {
                    attribute.default_value
                }

                fn constrain(value: Self, _: &Self, _attribute: &$attr) -> Self {
                    plain_field_type!(@constrain $kind, value, _attribute)
                }
            }
        )*
    };
}

plain_field_type! {
    bool: Bool, BoolAttribute, false, toggle;
    i32: Int, IntAttribute, 0, int_field;
    f32: Float, FloatAttribute, 0.0, float_field;
    Color: Color, ColorAttribute, Color::BLACK, color_field;
    Vec2: Vector2, Vector2Attribute, Vec2::ZERO, vector2_field;
    Vec3: Vector3, Vector3Attribute, Vec3::ZERO, vector3_field;
}

// ── Slider ─────────────────────────────────────────────────────────────────

/// Value of a slider field: float or integer depending on the attribute's
/// `float_slider` flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderValue {
    Float(f32),
    Int(i32),
}

impl SliderValue {
    pub fn as_f32(self) -> f32 {
        match self {
            SliderValue::Float(v) => v,
            SliderValue::Int(v) => v as f32,
        }
    }
}

impl FieldType for SliderValue {
    type Attribute = SliderAttribute;
    const KIND: FieldKind = FieldKind::Slider;

    fn zero() -> Self {
        SliderValue::Float(0.0)
    }

    fn attribute(attribute: &Attribute) -> Option<&SliderAttribute> {
        match attribute {
            Attribute::Slider(a) => Some(a),
            _ => None,
        }
    }

    fn read(field: &FieldMut<'_>, attribute: &SliderAttribute) -> Option<Self> {
        match (attribute.float_slider, field) {
            (true, FieldMut::Float(v)) => Some(SliderValue::Float(**v)),
            (false, FieldMut::Int(v)) => Some(SliderValue::Int(**v)),
            _ => None,
        }
    }

    fn write(field: &mut FieldMut<'_>, value: &Self) {
        match (field, *value) {
            (FieldMut::Float(v), SliderValue::Float(x)) => **v = x,
            (FieldMut::Int(v), SliderValue::Int(x)) => **v = x,
            _ => {}
        }
    }

    fn render<R: WidgetRenderer + ?Sized>(
        renderer: &mut R,
        label: &FieldLabel,
        value: &Self,
        attribute: &SliderAttribute,
    ) -> Self {
        match *value {
            SliderValue::Float(v) => {
                SliderValue::Float(renderer.slider(label, v, attribute.min, attribute.max))
            }
            SliderValue::Int(v) => {
                let bounds = attribute.bounds().truncated();
                SliderValue::Int(renderer.int_slider(label, v, bounds.min, bounds.max))
            }
        }
    }

    fn default_value(attribute: &SliderAttribute, _: &Self) -> Self {
        if attribute.float_slider {
            SliderValue::Float(attribute.default_value)
        } else {
            SliderValue::Int(attribute.default_value as i32)
        }
    }

    fn constrain(value: Self, _: &Self, attribute: &SliderAttribute) -> Self {
        match value {
            SliderValue::Float(v) => SliderValue::Float(attribute.bounds().clamp(v)),
            SliderValue::Int(v) => SliderValue::Int(attribute.bounds().truncated().clamp(v)),
        }
    }
}

// ── Enum ───────────────────────────────────────────────────────────────────

/// Selected variant of an enum field, with the names the popup shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub index: usize,
    pub variants: &'static [&'static str],
}

impl FieldType for EnumValue {
    type Attribute = EnumAttribute;
    const KIND: FieldKind = FieldKind::Enum;

    fn zero() -> Self {
        EnumValue {
            index: 0,
            variants: &[],
        }
    }

    fn attribute(attribute: &Attribute) -> Option<&EnumAttribute> {
        match attribute {
            Attribute::Enum(a) => Some(a),
            _ => None,
        }
    }

    fn read(field: &FieldMut<'_>, _: &EnumAttribute) -> Option<Self> {
        match field {
            FieldMut::Enum(e) => Some(EnumValue {
                index: e.index(),
                variants: e.variant_names(),
            }),
            _ => None,
        }
    }

    fn write(field: &mut FieldMut<'_>, value: &Self) {
        if let FieldMut::Enum(e) = field {
            e.set_index(value.index);
        }
    }

    fn render<R: WidgetRenderer + ?Sized>(
        renderer: &mut R,
        label: &FieldLabel,
        value: &Self,
        attribute: &EnumAttribute,
    ) -> Self {
        let index = if attribute.labels.len() == value.variants.len() {
            let names: Vec<&str> = attribute.labels.iter().map(String::as_str).collect();
            renderer.enum_popup(label, value.index, &names)
        } else {
            renderer.enum_popup(label, value.index, value.variants)
        };
        EnumValue { index, ..value.clone() }
    }

    fn default_value(attribute: &EnumAttribute, current: &Self) -> Self {
        EnumValue {
            index: attribute.default_value,
            ..current.clone()
        }
    }

    /// Indices past the last variant are pulled back onto it.
    fn constrain(value: Self, _: &Self, _: &EnumAttribute) -> Self {
        let last = value.variants.len().saturating_sub(1);
        EnumValue {
            index: value.index.min(last),
            ..value
        }
    }
}

// ── Object reference ───────────────────────────────────────────────────────

impl FieldType for Option<ObjectRef> {
    type Attribute = ObjectReferenceAttribute;
    const KIND: FieldKind = FieldKind::ObjectReference;
    const RESETTABLE: bool = false;

    fn zero() -> Self {
        None
    }

    fn attribute(attribute: &Attribute) -> Option<&ObjectReferenceAttribute> {
        match attribute {
            Attribute::ObjectReference(a) => Some(a),
            _ => None,
        }
    }

    fn read(field: &FieldMut<'_>, _: &ObjectReferenceAttribute) -> Option<Self> {
        match field {
            FieldMut::ObjectReference(v) => Some((**v).clone()),
            _ => None,
        }
    }

    fn write(field: &mut FieldMut<'_>, value: &Self) {
        if let FieldMut::ObjectReference(v) = field {
            **v = value.clone();
        }
    }

    fn render<R: WidgetRenderer + ?Sized>(
        renderer: &mut R,
        label: &FieldLabel,
        value: &Self,
        attribute: &ObjectReferenceAttribute,
    ) -> Self {
        renderer.object_field(
            label,
            value.as_ref(),
            &attribute.object_type,
            attribute.allow_scene_objects,
        )
    }

    /// No meaningful default exists for an opaque reference.
    fn default_value(_: &ObjectReferenceAttribute, current: &Self) -> Self {
        current.clone()
    }

    fn constrain(value: Self, previous: &Self, attribute: &ObjectReferenceAttribute) -> Self {
        constraint::accept_object(attribute, value, previous)
    }
}

// ─── Binder ────────────────────────────────────────────────────────────────

/// Binds fields of reflected objects to widgets for one pass.
///
/// Holds nothing but borrows: create one per pass (or per object) and drop
/// it afterwards.
pub struct FieldBinder<'a, R: ?Sized> {
    registry: &'a AttributeRegistry,
    renderer: &'a mut R,
}

impl<'a, R: WidgetRenderer + ?Sized> FieldBinder<'a, R> {
    pub fn new(registry: &'a AttributeRegistry, renderer: &'a mut R) -> Self {
        Self { registry, renderer }
    }

    pub fn renderer(&mut self) -> &mut R {
        &mut *self.renderer
    }

    /// Bind `field_name` of `object` as a `T`. `label` overrides the
    /// displayed name when non-empty.
    pub fn bind<T: FieldType>(
        &mut self,
        object: &mut dyn Reflect,
        field_name: &str,
        label: &str,
    ) -> Result<T, Unbound> {
        let result = self.try_bind::<T>(object, field_name, label);
        match &result {
            Err(err @ Unbound::TypeMismatch { .. }) => warn!("{err}"),
            Err(err) => trace!("{err}"),
            Ok(_) => {}
        }
        result
    }

    fn try_bind<T: FieldType>(
        &mut self,
        object: &mut dyn Reflect,
        field_name: &str,
        label: &str,
    ) -> Result<T, Unbound> {
        let type_name = object.type_name();
        let mut field = object
            .field_mut(field_name)
            .ok_or_else(|| Unbound::MissingField {
                type_name,
                field: field_name.to_string(),
            })?;

        let attribute = self
            .registry
            .get(type_name, field_name)
            .ok_or_else(|| Unbound::MissingAttribute {
                type_name,
                field: field_name.to_string(),
            })?;
        let mismatch = |found| Unbound::TypeMismatch {
            type_name,
            field: field_name.to_string(),
            expected: T::KIND,
            found,
        };
        let attr = T::attribute(attribute).ok_or_else(|| mismatch(attribute.kind()))?;
        let current = T::read(&field, attr).ok_or_else(|| mismatch(field.kind()))?;

        let label = FieldLabel::resolve(label, field_name, attribute.tooltip());
        self.renderer.begin_row();
        let edited = T::render(&mut *self.renderer, &label, &current, attr);
        let reset_requested = T::RESETTABLE && reset::requested(&mut *self.renderer);
        self.renderer.end_row();

        let value = reset::resolve(reset_requested, edited, || T::default_value(attr, &current));
        let value = T::constrain(value, &current, attr);
        T::write(&mut field, &value);
        Ok(value)
    }

    fn bind_or_zero<T: FieldType>(
        &mut self,
        object: &mut dyn Reflect,
        field_name: &str,
        label: &str,
    ) -> T {
        self.bind(object, field_name, label).unwrap_or_else(|_| T::zero())
    }

    // ── per-kind wrappers ──────────────────────────────────────────────────

    pub fn bool_field(&mut self, object: &mut dyn Reflect, field_name: &str, label: &str) -> bool {
        self.bind_or_zero(object, field_name, label)
    }

    pub fn int_field(&mut self, object: &mut dyn Reflect, field_name: &str, label: &str) -> i32 {
        self.bind_or_zero(object, field_name, label)
    }

    pub fn float_field(&mut self, object: &mut dyn Reflect, field_name: &str, label: &str) -> f32 {
        self.bind_or_zero(object, field_name, label)
    }

    /// Integer-mode sliders report their value converted to `f32`.
    pub fn slider_field(&mut self, object: &mut dyn Reflect, field_name: &str, label: &str) -> f32 {
        self.bind_or_zero::<SliderValue>(object, field_name, label)
            .as_f32()
    }

    /// Selected variant index.
    pub fn enum_field(&mut self, object: &mut dyn Reflect, field_name: &str, label: &str) -> usize {
        self.bind_or_zero::<EnumValue>(object, field_name, label)
            .index
    }

    pub fn color_field(&mut self, object: &mut dyn Reflect, field_name: &str, label: &str) -> Color {
        self.bind_or_zero(object, field_name, label)
    }

    pub fn vector2_field(&mut self, object: &mut dyn Reflect, field_name: &str, label: &str) -> Vec2 {
        self.bind_or_zero(object, field_name, label)
    }

    pub fn vector3_field(&mut self, object: &mut dyn Reflect, field_name: &str, label: &str) -> Vec3 {
        self.bind_or_zero(object, field_name, label)
    }

    pub fn object_reference_field(
        &mut self,
        object: &mut dyn Reflect,
        field_name: &str,
        label: &str,
    ) -> Option<ObjectRef> {
        self.bind_or_zero(object, field_name, label)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::*;
    use crate::testing::ScriptedRenderer;
    use gamework_core::scene::ObjectOrigin;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Hull {
        Light,
        Medium,
        Heavy,
    }
    crate::impl_enum_field!(Hull { Light, Medium, Heavy });

    struct Ship {
        speed: f32,
        drift: f32,
        crew: i32,
        throttle: f32,
        bays: i32,
        cloaked: bool,
        hull: Hull,
        paint: Color,
        heading: Vec2,
        spawn: Vec3,
        material: Option<ObjectRef>,
        name_tag: i32,
    }
    crate::impl_reflect!(Ship {
        speed, drift, crew, throttle, bays, cloaked, hull, paint, heading, spawn, material,
        name_tag,
    });

    fn ship() -> Ship {
        Ship {
            speed: 10.0,
            drift: 0.5,
            crew: 4,
            throttle: 2.0,
            bays: 3,
            cloaked: false,
            hull: Hull::Medium,
            paint: Color::GRAY,
            heading: Vec2::X,
            spawn: Vec3::ZERO,
            material: None,
            name_tag: 77,
        }
    }

    fn registry(float_slider: bool) -> AttributeRegistry {
        let mut slider = SliderAttribute::new(5.0).with_range(0.0, 10.0);
        slider.float_slider = float_slider;
        AttributeRegistry::builder()
            .field("Ship", "speed", FloatAttribute::new(10.0).with_range(0.0, 100.0).with_tooltip("Units per second"))
            .field("Ship", "drift", FloatAttribute::new(0.0))
            .field("Ship", "crew", IntAttribute::new(4).with_range(1, 12))
            .field("Ship", "throttle", slider.clone())
            .field("Ship", "bays", slider)
            .field("Ship", "cloaked", BoolAttribute::new(true))
            .field("Ship", "hull", EnumAttribute::new(2))
            .field("Ship", "paint", ColorAttribute::new(Color::RED))
            .field("Ship", "heading", Vector2Attribute::new(Vec2::Y))
            .field("Ship", "spawn", Vector3Attribute::new(Vec3::ONE))
            .field("Ship", "material", ObjectReferenceAttribute::new("Material"))
            .build()
            .unwrap()
    }

    #[test]
    fn speed_is_clamped_and_written() {
        let registry = registry(true);
        let mut r = ScriptedRenderer::new().float(150.0);
        let mut s = ship();
        let value = FieldBinder::new(&registry, &mut r).float_field(&mut s, "speed", "");
        assert_eq!(value, 100.0);
        assert_eq!(s.speed, 100.0);
        assert_eq!(r.labels, vec![FieldLabel::new("Speed").with_tooltip("Units per second")]);
        assert_eq!(r.rows, 1);
        assert_eq!(r.reset_buttons, 1);
    }

    #[test]
    fn constrained_numbers_stay_in_range() {
        let registry = registry(true);
        let mut s = ship();
        for raw in [-1.0e9, -0.5, 0.0, 42.0, 100.0, 1.0e9, f32::INFINITY, f32::NAN] {
            let mut r = ScriptedRenderer::new().float(raw);
            let v = FieldBinder::new(&registry, &mut r).float_field(&mut s, "speed", "");
            assert!((0.0..=100.0).contains(&v), "{raw} -> {v}");
            assert_eq!(s.speed, v);
        }
        for raw in [i32::MIN, 0, 5, 99] {
            let mut r = ScriptedRenderer::new().int(raw);
            let v = FieldBinder::new(&registry, &mut r).int_field(&mut s, "crew", "");
            assert!((1..=12).contains(&v));
            assert_eq!(s.crew, v);
        }
    }

    #[test]
    fn unconstrained_values_pass_through() {
        let registry = registry(true);
        let mut s = ship();
        let mut r = ScriptedRenderer::new().float(-12345.5);
        let v = FieldBinder::new(&registry, &mut r).float_field(&mut s, "drift", "Drift");
        assert_eq!(v, -12345.5);
        assert_eq!(s.drift, -12345.5);
        assert_eq!(r.labels[0].text, "Drift");
    }

    #[test]
    fn reset_restores_default_and_is_idempotent() {
        let registry = registry(true);
        let mut s = ship();
        s.cloaked = false;
        s.paint = Color::BLUE;
        for _ in 0..2 {
            let mut r = ScriptedRenderer::new().float(55.0).reset();
            assert_eq!(FieldBinder::new(&registry, &mut r).float_field(&mut s, "speed", ""), 10.0);
            assert_eq!(s.speed, 10.0);

            let mut r = ScriptedRenderer::new().reset();
            let mut binder = FieldBinder::new(&registry, &mut r);
            assert!(binder.bool_field(&mut s, "cloaked", ""));
            assert_eq!(binder.color_field(&mut s, "paint", ""), Color::RED);
            assert_eq!(binder.vector2_field(&mut s, "heading", ""), Vec2::Y);
            assert_eq!(binder.vector3_field(&mut s, "spawn", ""), Vec3::ONE);
            assert_eq!(binder.enum_field(&mut s, "hull", ""), 2);
        }
        assert!(s.cloaked);
        assert_eq!(s.paint, Color::RED);
        assert_eq!(s.hull, Hull::Heavy);
    }

    #[test]
    fn missing_field_or_attribute_yields_zero_without_writing() {
        let registry = registry(true);
        let mut s = ship();
        let mut r = ScriptedRenderer::new().int(5).reset();
        let mut binder = FieldBinder::new(&registry, &mut r);

        assert!(!binder.bool_field(&mut s, "doesNotExist", ""));
        assert_eq!(binder.int_field(&mut s, "doesNotExist", ""), 0);
        assert_eq!(binder.color_field(&mut s, "doesNotExist", ""), Color::BLACK);
        assert_eq!(binder.object_reference_field(&mut s, "doesNotExist", ""), None);

        // declared on the type, but no attribute registered
        assert_eq!(binder.int_field(&mut s, "name_tag", ""), 0);
        assert_eq!(
            binder.bind::<i32>(&mut s, "name_tag", ""),
            Err(Unbound::MissingAttribute {
                type_name: "Ship",
                field: "name_tag".into()
            })
        );
        assert_eq!(s.name_tag, 77);
        assert_eq!(r.rows, 0);
        assert!(r.labels.is_empty());
    }

    #[test]
    fn kind_mismatch_is_unbound() {
        let registry = registry(true);
        let mut s = ship();
        let mut r = ScriptedRenderer::new();
        let mut binder = FieldBinder::new(&registry, &mut r);

        // float attribute asked for as int
        assert!(matches!(
            binder.bind::<i32>(&mut s, "speed", ""),
            Err(Unbound::TypeMismatch { expected: FieldKind::Int, found: FieldKind::Float, .. })
        ));
        // float slider attribute on an int field
        assert_eq!(binder.slider_field(&mut s, "bays", ""), 0.0);
        assert_eq!(s.bays, 3);
        assert_eq!(r.rows, 0);
    }

    #[test]
    fn slider_modes_are_symmetric() {
        let float_registry = registry(true);
        let mut s = ship();
        let mut r = ScriptedRenderer::new().reset();
        let v = FieldBinder::new(&float_registry, &mut r).bind::<SliderValue>(&mut s, "throttle", "");
        assert_eq!(v, Ok(SliderValue::Float(5.0)));
        assert_eq!(s.throttle, 5.0);

        let int_registry = registry(false);
        let mut r = ScriptedRenderer::new().reset();
        let v = FieldBinder::new(&int_registry, &mut r).bind::<SliderValue>(&mut s, "bays", "");
        assert_eq!(v, Ok(SliderValue::Int(5)));
        assert_eq!(s.bays, 5);
        assert_eq!(r.int_slider_bounds, vec![(0, 10)]);

        for raw in [-4, 3, 10, 11, i32::MAX] {
            let mut r = ScriptedRenderer::new().int(raw);
            let v = FieldBinder::new(&int_registry, &mut r).slider_field(&mut s, "bays", "");
            assert!((0..=10).contains(&s.bays));
            assert_eq!(v, s.bays as f32);
        }
    }

    #[test]
    fn float_slider_is_clamped() {
        let registry = registry(true);
        let mut s = ship();
        for raw in [-4.0, 0.0, 2.5, 10.0, 10.5, f32::MAX, f32::NEG_INFINITY, f32::NAN] {
            let mut r = ScriptedRenderer::new().slider(raw);
            let v = FieldBinder::new(&registry, &mut r).slider_field(&mut s, "throttle", "");
            assert!((0.0..=10.0).contains(&v), "{raw} -> {v}");
            assert_eq!(s.throttle, v);
        }
        let mut r = ScriptedRenderer::new().slider(7.25);
        assert_eq!(FieldBinder::new(&registry, &mut r).slider_field(&mut s, "throttle", ""), 7.25);
    }

    #[test]
    fn unconstrained_float_slider_passes_through() {
        for (min, max) in [(0.0, 0.0), (10.0, 1.0)] {
            let registry = AttributeRegistry::builder()
                .field("Ship", "throttle", SliderAttribute::new(1.0).with_range(min, max))
                .build()
                .unwrap();
            let mut s = ship();
            let mut r = ScriptedRenderer::new().slider(-250.5);
            let v = FieldBinder::new(&registry, &mut r).slider_field(&mut s, "throttle", "");
            assert_eq!(v, -250.5);
            assert_eq!(s.throttle, -250.5);
        }
    }

    #[test]
    fn integer_slider_truncates_default() {
        let registry = AttributeRegistry::builder()
            .field("Ship", "bays", SliderAttribute::new(7.9).with_range(0.0, 10.0).integer())
            .build()
            .unwrap();
        let mut s = ship();
        let mut r = ScriptedRenderer::new().reset();
        assert_eq!(FieldBinder::new(&registry, &mut r).slider_field(&mut s, "bays", ""), 7.0);
        assert_eq!(s.bays, 7);
    }

    #[test]
    fn object_reference_acceptance_and_no_reset() {
        let registry = registry(true);
        let steel = ObjectRef::asset(1, "Steel", "Material");
        let mut s = ship();
        s.material = Some(steel.clone());

        let mesh = ObjectRef::asset(2, "Hull", "Mesh");
        let mut r = ScriptedRenderer::new().object(Some(mesh)).reset();
        let v = FieldBinder::new(&registry, &mut r).object_reference_field(&mut s, "material", "");
        assert_eq!(v, Some(steel.clone()));
        assert_eq!(r.reset_buttons, 0);
        assert_eq!(r.object_filters, vec![("Material".to_string(), false)]);

        let mut glass = ObjectRef::asset(3, "Glass", "Material");
        glass.origin = ObjectOrigin::Scene;
        let mut r = ScriptedRenderer::new().object(Some(glass));
        let v = FieldBinder::new(&registry, &mut r).object_reference_field(&mut s, "material", "");
        assert_eq!(v, Some(steel));

        let chrome = ObjectRef::asset(4, "Chrome", "Material");
        let mut r = ScriptedRenderer::new().object(Some(chrome.clone()));
        FieldBinder::new(&registry, &mut r).object_reference_field(&mut s, "material", "");
        assert_eq!(s.material, Some(chrome));

        let mut r = ScriptedRenderer::new().object(None);
        FieldBinder::new(&registry, &mut r).object_reference_field(&mut s, "material", "");
        assert_eq!(s.material, None);
    }

    #[test]
    fn enum_index_is_kept_in_range() {
        let registry = registry(true);
        let mut s = ship();
        let mut r = ScriptedRenderer::new().enum_index(9);
        assert_eq!(FieldBinder::new(&registry, &mut r).enum_field(&mut s, "hull", ""), 2);
        assert_eq!(s.hull, Hull::Heavy);
        assert_eq!(r.enum_variants, vec![vec!["Light", "Medium", "Heavy"]]);
    }

    #[test]
    fn untouched_widgets_keep_the_current_value() {
        let registry = registry(true);
        let mut s = ship();
        let mut r = ScriptedRenderer::new();
        let mut binder = FieldBinder::new(&registry, &mut r);
        assert_eq!(binder.float_field(&mut s, "speed", ""), 10.0);
        assert_eq!(binder.int_field(&mut s, "crew", ""), 4);
        assert_eq!(binder.vector2_field(&mut s, "heading", ""), Vec2::X);
        assert_eq!(binder.color_field(&mut s, "paint", ""), Color::GRAY);
        assert_eq!(r.rows, 4);
    }
}
