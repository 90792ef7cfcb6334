//! Field metadata: default value, bounds, tooltip and per-kind flags.
//!
//! Attributes are declared once at startup (in code or in TOML, see
//! [`AttributeRegistry`](crate::AttributeRegistry)) and are immutable after
//! that. Numeric bounds with `min >= max` mean "unconstrained", which is also
//! what every numeric attribute defaults to.
//!
//! ```rust
//! use gamework_inspector::attribute::{Attribute, FieldKind, FloatAttribute};
//!
//! let speed: Attribute = FloatAttribute::new(10.0)
//!     .with_range(0.0, 100.0)
//!     .with_tooltip("Units per second")
//!     .into();
//! assert_eq!(speed.kind(), FieldKind::Float);
//! assert_eq!(speed.tooltip(), "Units per second");
//! ```

use std::fmt;

use gamework_core::glam::{Vec2, Vec3};
use gamework_core::{Color, ObjectRef};
use serde::{Deserialize, Serialize};

use crate::constraint::Bounds;

/// The value kinds the binder knows how to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Slider,
    Enum,
    Color,
    Vector2,
    Vector3,
    ObjectReference,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Bool => "bool",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Slider => "slider",
            FieldKind::Enum => "enum",
            FieldKind::Color => "color",
            FieldKind::Vector2 => "vector2",
            FieldKind::Vector3 => "vector3",
            FieldKind::ObjectReference => "object reference",
        };
        f.write_str(name)
    }
}

// ─── Per-kind attributes ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolAttribute {
    #[serde(rename = "default")]
    pub default_value: bool,
    pub tooltip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntAttribute {
    #[serde(rename = "default")]
    pub default_value: i32,
    pub min: i32,
    pub max: i32,
    pub tooltip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatAttribute {
    #[serde(rename = "default")]
    pub default_value: f32,
    pub min: f32,
    pub max: f32,
    pub tooltip: String,
}

/// Slider over a float field, or over an integer field when `float_slider`
/// is off. Bounds and default are always stored as floats; integer mode
/// truncates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderAttribute {
    #[serde(rename = "default")]
    pub default_value: f32,
    pub min: f32,
    pub max: f32,
    pub float_slider: bool,
    pub tooltip: String,
}

impl Default for SliderAttribute {
    fn default() -> Self {
        Self {
            default_value: 0.0,
            min: 0.0,
            max: 1.0,
            float_slider: true,
            tooltip: String::new(),
        }
    }
}

/// Enum fields store a variant index. `labels` overrides the variant names
/// the field type reports, when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumAttribute {
    #[serde(rename = "default")]
    pub default_value: usize,
    pub labels: Vec<String>,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorAttribute {
    #[serde(rename = "default")]
    pub default_value: Color,
    pub tooltip: String,
}

impl Default for ColorAttribute {
    fn default() -> Self {
        Self {
            default_value: Color::WHITE,
            tooltip: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector2Attribute {
    #[serde(rename = "default")]
    pub default_value: Vec2,
    pub tooltip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3Attribute {
    #[serde(rename = "default")]
    pub default_value: Vec3,
    pub tooltip: String,
}

/// Object references have no default; `object_type` restricts the accepted
/// type (empty accepts any) and `allow_scene_objects` admits objects living
/// in the open scene as well as assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectReferenceAttribute {
    #[serde(rename = "type")]
    pub object_type: String,
    pub allow_scene_objects: bool,
    pub tooltip: String,
}

impl ObjectReferenceAttribute {
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            ..Default::default()
        }
    }

    pub fn allow_scene_objects(mut self, allow: bool) -> Self {
        self.allow_scene_objects = allow;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Whether `object` may be assigned to a field carrying this attribute.
    pub fn accepts(&self, object: &ObjectRef) -> bool {
        let type_ok = self.object_type.is_empty() || object.type_name == self.object_type;
        type_ok && (self.allow_scene_objects || !object.is_scene_object())
    }
}

// ── builders ───────────────────────────────────────────────────────────────

// Constructors for the kinds that only carry a default and a tooltip.
macro_rules! simple_builders {
    ($($attr:ident($value:ty)),* $(,)?) => {
        $(
            impl $attr {
                pub fn new(default_value: $value) -> Self {
                    Self {
                        default_value,
                        ..Default::default()
                    }
                }

                pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
                    self.tooltip = tooltip.into();
                    self
                }
            }
        )*
    };
}

simple_builders!(
    BoolAttribute(bool),
    IntAttribute(i32),
    FloatAttribute(f32),
    SliderAttribute(f32),
    EnumAttribute(usize),
    ColorAttribute(Color),
    Vector2Attribute(Vec2),
    Vector3Attribute(Vec3),
);

impl IntAttribute {
    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn bounds(&self) -> Bounds<i32> {
        Bounds::new(self.min, self.max)
    }
}

impl FloatAttribute {
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn bounds(&self) -> Bounds<f32> {
        Bounds::new(self.min, self.max)
    }
}

impl SliderAttribute {
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Switch to integer mode.
    pub fn integer(mut self) -> Self {
        self.float_slider = false;
        self
    }

    pub fn bounds(&self) -> Bounds<f32> {
        Bounds::new(self.min, self.max)
    }
}

impl EnumAttribute {
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

// ─── Attribute ─────────────────────────────────────────────────────────────

/// An attribute of any kind, as stored in the registry.
///
/// In TOML the variant is selected by a `kind` key:
///
/// ```toml
/// [Ship.speed]
/// kind = "float"
/// default = 10.0
/// min = 0.0
/// max = 100.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attribute {
    Bool(BoolAttribute),
    Int(IntAttribute),
    Float(FloatAttribute),
    Slider(SliderAttribute),
    Enum(EnumAttribute),
    Color(ColorAttribute),
    Vector2(Vector2Attribute),
    Vector3(Vector3Attribute),
    ObjectReference(ObjectReferenceAttribute),
}

impl Attribute {
    pub fn kind(&self) -> FieldKind {
        match self {
            Attribute::Bool(_) => FieldKind::Bool,
            Attribute::Int(_) => FieldKind::Int,
            Attribute::Float(_) => FieldKind::Float,
            Attribute::Slider(_) => FieldKind::Slider,
            Attribute::Enum(_) => FieldKind::Enum,
            Attribute::Color(_) => FieldKind::Color,
            Attribute::Vector2(_) => FieldKind::Vector2,
            Attribute::Vector3(_) => FieldKind::Vector3,
            Attribute::ObjectReference(_) => FieldKind::ObjectReference,
        }
    }

    pub fn tooltip(&self) -> &str {
        match self {
            Attribute::Bool(a) => &a.tooltip,
            Attribute::Int(a) => &a.tooltip,
            Attribute::Float(a) => &a.tooltip,
            Attribute::Slider(a) => &a.tooltip,
            Attribute::Enum(a) => &a.tooltip,
            Attribute::Color(a) => &a.tooltip,
            Attribute::Vector2(a) => &a.tooltip,
            Attribute::Vector3(a) => &a.tooltip,
            Attribute::ObjectReference(a) => &a.tooltip,
        }
    }

    /// Kind of field storage this attribute can be bound to. Sliders bind
    /// to float or int fields depending on their mode.
    pub fn storage_kind(&self) -> FieldKind {
        match self {
            Attribute::Slider(a) if a.float_slider => FieldKind::Float,
            Attribute::Slider(_) => FieldKind::Int,
            other => other.kind(),
        }
    }
}

macro_rules! impl_from_attribute {
    ($($variant:ident => $attr:ident),* $(,)?) => {
        $(
            impl From<$attr> for Attribute {
                fn from(a: $attr) -> Self {
                    Attribute::$variant(a)
                }
            }
        )*
    };
}

impl_from_attribute!(
    Bool => BoolAttribute,
    Int => IntAttribute,
    Float => FloatAttribute,
    Slider => SliderAttribute,
    Enum => EnumAttribute,
    Color => ColorAttribute,
    Vector2 => Vector2Attribute,
    Vector3 => Vector3Attribute,
    ObjectReference => ObjectReferenceAttribute,
);
