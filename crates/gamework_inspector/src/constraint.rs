//! Constraint policy applied to an edited value before it is written back.

use gamework_core::ObjectRef;

use crate::attribute::ObjectReferenceAttribute;

/// Numeric bounds of an attribute. Only ordered bounds (`min < max`)
/// constrain anything; any other pair is the "unconstrained" sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_constrained(&self) -> bool {
        self.min < self.max
    }
}

impl Bounds<f32> {
    /// Clamp `value` when constrained. A NaN coming out of a widget lands on
    /// `min` so a constrained field never stores a value outside its range.
    pub fn clamp(&self, value: f32) -> f32 {
        if !self.is_constrained() {
            return value;
        }
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Integer bounds for integer-mode sliders (truncation toward zero).
    pub fn truncated(&self) -> Bounds<i32> {
        Bounds::new(self.min as i32, self.max as i32)
    }
}

impl Bounds<i32> {
    pub fn clamp(&self, value: i32) -> i32 {
        if self.is_constrained() {
            value.clamp(self.min, self.max)
        } else {
            value
        }
    }
}

/// Keep `edited` when the attribute accepts it, otherwise fall back to
/// `previous`. Clearing a reference is always allowed.
pub fn accept_object(
    attribute: &ObjectReferenceAttribute,
    edited: Option<ObjectRef>,
    previous: &Option<ObjectRef>,
) -> Option<ObjectRef> {
    match edited {
        Some(object) if !attribute.accepts(&object) => {
            log::debug!(
                "rejected '{}' ({}) for object field of type '{}'",
                object.name,
                object.type_name,
                attribute.object_type
            );
            previous.clone()
        }
        other => other,
    }
}
