//! gamework_inspector: attribute-driven field binding for editor inspectors.
//!
//! An object exposes its editable fields through [`Reflect`]; an
//! [`AttributeRegistry`] holds the metadata (default, bounds, tooltip, flags)
//! declared for each `(type, field)` pair; a [`FieldBinder`] draws each field
//! through a [`WidgetRenderer`], applies reset and constraint policy, and
//! writes the result back.
//!
//! ```rust
//! use gamework_inspector::attribute::FloatAttribute;
//! use gamework_inspector::{impl_reflect, AttributeRegistry, FieldBinder, WidgetRenderer};
//! # use gamework_inspector::FieldLabel;
//! # use gamework_core::{Color, ObjectRef, glam::{Vec2, Vec3}};
//! # struct Overshoot;
//! # impl WidgetRenderer for Overshoot {
//! #     fn begin_row(&mut self) {}
//! #     fn end_row(&mut self) {}
//! #     fn toggle(&mut self, _: &FieldLabel, v: bool) -> bool { v }
//! #     fn int_field(&mut self, _: &FieldLabel, v: i32) -> i32 { v }
//! #     fn float_field(&mut self, _: &FieldLabel, _: f32) -> f32 { 150.0 }
//! #     fn slider(&mut self, _: &FieldLabel, v: f32, _: f32, _: f32) -> f32 { v }
//! #     fn int_slider(&mut self, _: &FieldLabel, v: i32, _: i32, _: i32) -> i32 { v }
//! #     fn enum_popup(&mut self, _: &FieldLabel, i: usize, _: &[&str]) -> usize { i }
//! #     fn color_field(&mut self, _: &FieldLabel, v: Color) -> Color { v }
//! #     fn vector2_field(&mut self, _: &FieldLabel, v: Vec2) -> Vec2 { v }
//! #     fn vector3_field(&mut self, _: &FieldLabel, v: Vec3) -> Vec3 { v }
//! #     fn object_field(&mut self, _: &FieldLabel, v: Option<&ObjectRef>, _: &str, _: bool) -> Option<ObjectRef> { v.cloned() }
//! #     fn reset_button(&mut self) -> bool { false }
//! # }
//!
//! struct Ship {
//!     speed: f32,
//! }
//! impl_reflect!(Ship { speed });
//!
//! let registry = AttributeRegistry::builder()
//!     .field("Ship", "speed", FloatAttribute::new(10.0).with_range(0.0, 100.0))
//!     .build()
//!     .unwrap();
//!
//! let mut ship = Ship { speed: 10.0 };
//! let mut renderer = Overshoot; // a widget that reports 150
//! let mut binder = FieldBinder::new(&registry, &mut renderer);
//! assert_eq!(binder.float_field(&mut ship, "speed", ""), 100.0);
//! assert_eq!(ship.speed, 100.0);
//! ```

pub mod attribute;
pub mod binder;
pub mod constraint;
pub mod inspector;
pub mod label;
pub mod reflect;
pub mod registry;
pub mod reset;
pub mod widget;

#[cfg(test)]
mod testing;

pub use attribute::{Attribute, FieldKind};
pub use binder::{EnumValue, FieldBinder, FieldType, SliderValue, Unbound};
pub use constraint::Bounds;
pub use inspector::Inspector;
pub use label::FieldLabel;
pub use reflect::{EnumField, FieldMut, Reflect, ReflectField};
pub use registry::{AttributeRegistry, RegistryError, RegistryIssue};
pub use widget::WidgetRenderer;
