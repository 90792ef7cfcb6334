//! Reset affordance: the per-field "restore default" control.
//!
//! It carries no data and remembers nothing between calls. Callers draw it
//! once per bound field, right after the field's widget and inside the same
//! row, and decide themselves what "default" means.

use crate::widget::WidgetRenderer;

/// Draw the reset control and report whether a reset was requested.
pub fn requested<R: WidgetRenderer + ?Sized>(renderer: &mut R) -> bool {
    renderer.reset_button()
}

/// `default()` when a reset was requested, `edited` otherwise.
#[inline]
pub fn resolve<T>(requested: bool, edited: T, default: impl FnOnce() -> T) -> T {
    if requested {
        default()
    } else {
        edited
    }
}
