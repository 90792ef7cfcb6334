//! Name-based access to an object's editable fields.
//!
//! Types opt in with [`impl_reflect!`](crate::impl_reflect), listing the
//! fields the inspector may touch. Each listed field's type must implement
//! [`ReflectField`]; enum types get that through
//! [`impl_enum_field!`](crate::impl_enum_field).
//!
//! ```rust
//! use gamework_inspector::{impl_reflect, Reflect};
//! use gamework_inspector::reflect::FieldMut;
//!
//! struct Ship {
//!     speed: f32,
//!     crew: i32,
//!     cloaked: bool,
//! }
//! impl_reflect!(Ship { speed, crew, cloaked });
//!
//! let mut ship = Ship { speed: 1.0, crew: 3, cloaked: false };
//! assert_eq!(ship.type_name(), "Ship");
//! if let Some(FieldMut::Float(speed)) = ship.field_mut("speed") {
//!     *speed = 2.0;
//! }
//! assert_eq!(ship.speed, 2.0);
//! assert!(ship.field_mut("hull").is_none());
//! ```

use gamework_core::glam::{Vec2, Vec3};
use gamework_core::{Color, ObjectRef};

use crate::attribute::FieldKind;

/// Mutable borrow of one field, tagged with its storage kind.
pub enum FieldMut<'a> {
    Bool(&'a mut bool),
    Int(&'a mut i32),
    Float(&'a mut f32),
    Enum(&'a mut dyn EnumField),
    Color(&'a mut Color),
    Vector2(&'a mut Vec2),
    Vector3(&'a mut Vec3),
    ObjectReference(&'a mut Option<ObjectRef>),
}

impl FieldMut<'_> {
    /// Storage kind. Never [`FieldKind::Slider`]: sliders are stored as
    /// floats or ints.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldMut::Bool(_) => FieldKind::Bool,
            FieldMut::Int(_) => FieldKind::Int,
            FieldMut::Float(_) => FieldKind::Float,
            FieldMut::Enum(_) => FieldKind::Enum,
            FieldMut::Color(_) => FieldKind::Color,
            FieldMut::Vector2(_) => FieldKind::Vector2,
            FieldMut::Vector3(_) => FieldKind::Vector3,
            FieldMut::ObjectReference(_) => FieldKind::ObjectReference,
        }
    }
}

/// A type whose fields can be edited by name.
pub trait Reflect {
    /// Key used for attribute lookup.
    fn type_name(&self) -> &'static str;
    fn field_names(&self) -> &'static [&'static str];
    fn field_kind(&self, name: &str) -> Option<FieldKind>;
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;
}

/// Maps a concrete field type to its [`FieldMut`] variant.
pub trait ReflectField {
    const KIND: FieldKind;
    fn as_field_mut(&mut self) -> FieldMut<'_>;
}

/// Storage kind of a field, used by [`impl_reflect!`](crate::impl_reflect).
#[doc(hidden)]
pub fn kind_of<T: ReflectField>(_: &T) -> FieldKind {
    T::KIND
}

macro_rules! reflect_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ReflectField for $ty {
                const KIND: FieldKind = FieldKind::$variant;
                fn as_field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::$variant(self)
                }
            }
        )*
    };
}

reflect_field!(
    bool => Bool,
    i32 => Int,
    f32 => Float,
    Color => Color,
    Vec2 => Vector2,
    Vec3 => Vector3,
    Option<ObjectRef> => ObjectReference,
);

// ─── Enums ─────────────────────────────────────────────────────────────────

/// A fieldless enum edited through its variant index.
pub trait EnumField {
    fn variant_names(&self) -> &'static [&'static str];
    fn index(&self) -> usize;
    /// Out-of-range indices leave the value unchanged and return `false`.
    fn set_index(&mut self, index: usize) -> bool;
}

/// Implements [`EnumField`] and [`ReflectField`] for a fieldless enum.
/// The enum must be `Copy + PartialEq`.
///
/// ```rust
/// use gamework_inspector::impl_enum_field;
/// use gamework_inspector::reflect::EnumField;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Difficulty { Easy, Normal, Hard }
/// impl_enum_field!(Difficulty { Easy, Normal, Hard });
///
/// let mut d = Difficulty::Easy;
/// assert!(d.set_index(2));
/// assert_eq!(d, Difficulty::Hard);
/// assert_eq!(d.variant_names(), ["Easy", "Normal", "Hard"]);
/// ```
#[macro_export]
macro_rules! impl_enum_field {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::reflect::EnumField for $ty {
            fn variant_names(&self) -> &'static [&'static str] {
                &[$(stringify!($variant)),+]
            }

            fn index(&self) -> usize {
                const VARIANTS: &[$ty] = &[$($ty::$variant),+];
                VARIANTS.iter().position(|v| v == self).unwrap_or(0)
            }

            fn set_index(&mut self, index: usize) -> bool {
                const VARIANTS: &[$ty] = &[$($ty::$variant),+];
                match VARIANTS.get(index) {
                    Some(v) => {
                        *self = *v;
                        true
                    }
                    None => false,
                }
            }
        }

        impl $crate::reflect::ReflectField for $ty {
            const KIND: $crate::attribute::FieldKind = $crate::attribute::FieldKind::Enum;
            fn as_field_mut(&mut self) -> $crate::reflect::FieldMut<'_> {
                $crate::reflect::FieldMut::Enum(self)
            }
        }
    };
}

/// Implements [`Reflect`] for a struct from the list of exposed fields.
#[macro_export]
macro_rules! impl_reflect {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::reflect::Reflect for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn field_names(&self) -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }

            #[allow(unused_variables)]
            fn field_kind(&self, name: &str) -> Option<$crate::attribute::FieldKind> {
                match name {
                    $(stringify!($field) => Some($crate::reflect::kind_of(&self.$field)),)*
                    _ => None,
                }
            }

            #[allow(unused_variables)]
            fn field_mut(&mut self, name: &str) -> Option<$crate::reflect::FieldMut<'_>> {
                match name {
                    $(stringify!($field) => Some($crate::reflect::ReflectField::as_field_mut(&mut self.$field)),)*
                    _ => None,
                }
            }
        }
    };
}
