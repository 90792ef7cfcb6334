//! Extension traits for the primitive numeric types.
//!
//! Only behaviour std does not already provide lives here; `min`, `max`,
//! `abs`, `clamp` and `pow` are the inherent/`Ord` methods.

/// Integer helpers.
pub trait IntExt: Sized {
    /// `true` when `min <= self <= max`.
    fn between(self, min: Self, max: Self) -> bool;

    fn is_odd(self) -> bool;

    fn is_even(self) -> bool {
        !self.is_odd()
    }

    /// Smallest power of two `>= self`. Zero and negatives map to zero.
    fn next_power_of_two(self) -> Self;

    /// Treats `self` as a layer index and tests its bit in `mask`.
    fn is_in_layer_mask(self, mask: u32) -> bool;

    /// `1536` → `"1.50 KB"`. Values under 1 KB are printed as whole bytes.
    fn bytes_to_human_readable(self) -> String;

    /// `3661` → `"01:01:01"`.
    fn seconds_to_human_readable(self) -> String;
}

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

macro_rules! impl_int_ext {
    ($($t:ty),*) => {$(
        impl IntExt for $t {
            #[inline]
            fn between(self, min: Self, max: Self) -> bool {
                self >= min && self <= max
            }

            #[inline]
            fn is_odd(self) -> bool {
                self % 2 != 0
            }

            fn next_power_of_two(self) -> Self {
                if self <= 0 {
                    return 0;
                }
                let mut p: Self = 1;
                while p < self {
                    if p > Self::MAX >> 1 {
                        return Self::MAX;
                    }
                    p <<= 1;
                }
                p
            }

            fn is_in_layer_mask(self, mask: u32) -> bool {
                (0..32).contains(&self) && mask & (1u32 << self) != 0
            }

            fn bytes_to_human_readable(self) -> String {
                let mut value = self as f64;
                let mut unit = 0;
                while value.abs() >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
                    value /= 1024.0;
                    unit += 1;
                }
                if unit == 0 {
                    format!("{} {}", self, BYTE_UNITS[0])
                } else {
                    format!("{:.2} {}", value, BYTE_UNITS[unit])
                }
            }

            fn seconds_to_human_readable(self) -> String {
                let total = (self as i64).max(0);
                let hours = total / 3600;
                let minutes = (total % 3600) / 60;
                let seconds = total % 60;
                format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
            }
        }
    )*};
}

impl_int_ext!(i32, i64);

/// Float helpers.
pub trait FloatExt: Sized {
    fn clamp01(self) -> Self;

    /// `true` when `min <= self <= max`.
    fn between(self, min: Self, max: Self) -> bool;

    /// Absolute difference no greater than `tolerance`.
    fn nearly_equal(self, other: Self, tolerance: Self) -> bool;

    /// Rounds to the nearest multiple of `step`. A non-positive step is a no-op.
    fn snap(self, step: Self) -> Self;
}

impl FloatExt for f32 {
    #[inline]
    fn clamp01(self) -> Self {
        self.clamp(0.0, 1.0)
    }

    #[inline]
    fn between(self, min: Self, max: Self) -> bool {
        self >= min && self <= max
    }

    #[inline]
    fn nearly_equal(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() <= tolerance
    }

    fn snap(self, step: Self) -> Self {
        if step <= 0.0 {
            self
        } else {
            (self / step).round() * step
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_helpers() {
        assert!(0i32.between(-1, 1));
        assert!(1i32.between(-1, 1));
        assert!((-1i32).between(-1, 1));
        assert!(!2i32.between(-1, 1));
        assert!(!(-2i32).between(-1, 1));

        assert!(!0i32.is_odd());
        assert!(1i32.is_odd());
        assert!(!2i32.is_odd());
        assert!((-3i32).is_odd());
        assert!(4i64.is_even());

        assert_eq!(IntExt::next_power_of_two(0i32), 0);
        assert_eq!(IntExt::next_power_of_two(1i32), 1);
        assert_eq!(IntExt::next_power_of_two(2i32), 2);
        assert_eq!(IntExt::next_power_of_two(3i32), 4);
        assert_eq!(IntExt::next_power_of_two(4i32), 4);
        assert_eq!(IntExt::next_power_of_two(1000i64), 1024);
    }

    #[test]
    fn layer_mask() {
        assert!(3i32.is_in_layer_mask(u32::MAX));
        assert!(3i32.is_in_layer_mask(0b1000));
        assert!(!2i32.is_in_layer_mask(0b1000));
        assert!(!40i32.is_in_layer_mask(u32::MAX));
        assert!(!(-1i32).is_in_layer_mask(u32::MAX));
    }

    #[test]
    fn human_readable() {
        assert_eq!(512i32.bytes_to_human_readable(), "512 B");
        assert_eq!(1024i32.bytes_to_human_readable(), "1.00 KB");
        assert_eq!((1024i32 * 1024).bytes_to_human_readable(), "1.00 MB");
        assert_eq!(60i32.seconds_to_human_readable(), "00:01:00");
        assert_eq!(3600i32.seconds_to_human_readable(), "01:00:00");
        assert_eq!(3661i64.seconds_to_human_readable(), "01:01:01");
    }

    #[test]
    fn float_helpers() {
        assert_eq!(1.5f32.clamp01(), 1.0);
        assert!(0.5f32.between(0.0, 1.0));
        assert!(0.1f32.nearly_equal(0.1000001, 1e-5));
        assert_eq!(0.26f32.snap(0.25), 0.25);
        assert_eq!(0.26f32.snap(0.0), 0.26);
    }
}
