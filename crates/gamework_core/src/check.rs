//! Runtime checks.
//!
//! Every check reports the *caller's* file and line, logs the failure at
//! `error` level and then panics. Checks compile to nothing observable when
//! `debug_assertions` is off, so they are safe to leave in hot paths.
//!
//! ```rust,should_panic
//! use gamework_core::check;
//!
//! check::is_not_empty("");
//! ```

use std::any::Any;
use std::panic::Location;
use std::path::Path;

#[track_caller]
fn assert(condition: bool, message: impl FnOnce() -> String) {
    if !cfg!(debug_assertions) || condition {
        return;
    }
    let location = Location::caller();
    let file = Path::new(location.file())
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or_else(|| location.file());
    let text = format!("{}:{} {}", file, location.line(), message());
    log::error!("{text}");
    panic!("{text}");
}

/// Generic check with a custom message.
#[track_caller]
pub fn that(condition: bool, message: &str) {
    assert(condition, || message.to_owned());
}

// ── Strings ────────────────────────────────────────────────────────────────

/// The string is not empty.
#[track_caller]
pub fn is_not_empty(value: &str) {
    assert(!value.is_empty(), || "'value' is empty.".to_owned());
}

/// The string has exactly `len` characters.
#[track_caller]
pub fn length(value: &str, len: usize) {
    assert(value.chars().count() == len, || {
        format!("Expected string 'value' length must be {len}.")
    });
}

/// The string has at most `max_length` characters.
#[track_caller]
pub fn max_length(value: &str, max_length: usize) {
    assert(value.chars().count() <= max_length, || {
        format!("Expected string 'value' max length must be {max_length}.")
    });
}

/// The string has at least `min_length` characters.
#[track_caller]
pub fn min_length(value: &str, min_length: usize) {
    assert(value.chars().count() >= min_length, || {
        format!("Expected string 'value' min length must be {min_length}.")
    });
}

// ── Values and types ───────────────────────────────────────────────────────

#[track_caller]
pub fn is_none<T>(value: &Option<T>) {
    assert(value.is_none(), || "'value' must be empty.".to_owned());
}

#[track_caller]
pub fn is_some<T>(value: &Option<T>) {
    assert(value.is_some(), || "'value' must not be empty.".to_owned());
}

/// The collection holds at least one element.
#[track_caller]
pub fn is_not_empty_collection<T>(collection: &[T]) {
    assert(!collection.is_empty(), || {
        "'collection' can't be empty.".to_owned()
    });
}

/// `obj` is a `T`.
#[track_caller]
pub fn of_type<T: Any>(obj: &dyn Any) {
    assert(obj.is::<T>(), || {
        format!("'obj' must be of type '{}'.", std::any::type_name::<T>())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_checks_are_silent() {
        that(true, "never shown");
        is_not_empty("a");
        length("abc", 3);
        max_length("abc", 3);
        min_length("abc", 1);
        is_none::<u8>(&None);
        is_some(&Some(1));
        is_not_empty_collection(&[1, 2]);
        of_type::<u32>(&5u32);
    }

    #[test]
    #[should_panic(expected = "check.rs")]
    fn failure_reports_caller_location() {
        is_not_empty("");
    }

    #[test]
    #[should_panic(expected = "length must be 2")]
    fn length_mismatch() {
        length("abc", 2);
    }

    #[test]
    #[should_panic(expected = "must be of type 'u32'")]
    fn wrong_type() {
        of_type::<u32>(&"text");
    }

    #[test]
    fn length_counts_characters() {
        length("ñandú", 5);
    }
}
