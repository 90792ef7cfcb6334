//! Development drawing.
//!
//! [`Draw`] records coloured line segments (gizmos) for the current frame.
//! It does not render anything itself; whoever owns the frame drains
//! [`Draw::take_lines`] into its line renderer.
//!
//! # Example
//! ```rust
//! use gamework_core::draw::{Draw, DrawSettings};
//! use glam::Vec3;
//!
//! let mut draw = Draw::new(DrawSettings::default());
//! draw.line(Vec3::ZERO, Vec3::X);
//! draw.disc(Vec3::ZERO, Vec3::Y, 2.0);
//! assert_eq!(draw.lines().len(), 1 + 32);
//! ```

mod settings;

pub use settings::DrawSettings;

use glam::Vec3;

use crate::color::Color;
use crate::math::Ray;
use crate::transform::Transform;

/// Upper bound on the segments one dashed line may emit.
pub const MAX_DASHES: u32 = 4096;

/// One recorded segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

/// Per-frame gizmo recorder.
#[derive(Debug, Default)]
pub struct Draw {
    settings: DrawSettings,
    lines: Vec<GizmoLine>,
}

impl Draw {
    pub fn new(settings: DrawSettings) -> Self {
        Self {
            settings,
            lines: Vec::new(),
        }
    }

    pub fn settings(&self) -> &DrawSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut DrawSettings {
        &mut self.settings
    }

    pub fn lines(&self) -> &[GizmoLine] {
        &self.lines
    }

    /// Hand the recorded lines over and start an empty frame.
    pub fn take_lines(&mut self) -> Vec<GizmoLine> {
        std::mem::take(&mut self.lines)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Colour used for the parts of a gizmo hidden behind geometry.
    pub fn occluded(&self, color: Color) -> Color {
        color.with_alpha(color.a * self.settings.occlude_color_factor)
    }

    fn push(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.lines.push(GizmoLine { start, end, color });
    }

    // ── Primitives ─────────────────────────────────────────────────────────

    pub fn line(&mut self, start: Vec3, end: Vec3) {
        let color = self.settings.line_color;
        self.push(start, end, color);
    }

    pub fn line_colored(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.push(start, end, color);
    }

    /// Dashes of `dash_size` separated by gaps of the same length. The last
    /// dash is cut at `end`. Lines that would need more than `MAX_DASHES`
    /// dashes are drawn solid; infinite lines are not drawn.
    pub fn dashed_line(&mut self, start: Vec3, end: Vec3) {
        let color = self.settings.line_color;
        let dash = self.settings.dash_size;
        let length = start.distance(end);
        if !length.is_finite() {
            return;
        }
        let period = dash * 2.0;
        let count = (length / period).ceil();
        if dash.is_nan() || dash <= 0.0 || length <= dash || count > MAX_DASHES as f32 {
            self.push(start, end, color);
            return;
        }
        let dir = (end - start) / length;
        for i in 0..count as u32 {
            let t = i as f32 * period;
            let stop = (t + dash).min(length);
            self.push(start + dir * t, start + dir * stop, color);
        }
    }

    /// Three axis-aligned strokes of total length `size` centred on `position`.
    pub fn point(&mut self, position: Vec3, size: f32) {
        let color = self.settings.point_color;
        let h = size * 0.5;
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            self.push(position - axis * h, position + axis * h, color);
        }
    }

    pub fn ray(&mut self, ray: &Ray, length: f32) {
        let color = self.settings.ray_color;
        self.push(ray.origin, ray.point_at(length), color);
    }

    /// Hit marker: a point plus its surface normal.
    pub fn hit(&mut self, point: Vec3, normal: Vec3, size: f32) {
        let color = self.settings.hit_color;
        let h = size * 0.5;
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            self.push(point - axis * h, point + axis * h, color);
        }
        self.push(point, point + normal.normalize_or_zero() * size, color);
    }

    /// Local axes of `transform`, `size` units long.
    pub fn axes(&mut self, transform: &Transform, size: f32) {
        let origin = transform.position;
        let (x, y, z) = (self.settings.color_x, self.settings.color_y, self.settings.color_z);
        self.push(origin, origin + transform.right() * size, x);
        self.push(origin, origin + transform.up() * size, y);
        self.push(origin, origin + transform.back() * size, z);
    }

    /// Circle of `radius` around `center`, facing `normal`.
    pub fn disc(&mut self, center: Vec3, normal: Vec3, radius: f32) {
        let color = self.settings.disc_color;
        let segments = self.settings.segments.max(3);
        let (u, v) = normal.normalize_or(Vec3::Y).any_orthonormal_pair();
        let step = std::f32::consts::TAU / segments as f32;
        let at = |i: u32| {
            let a = step * i as f32;
            center + (u * a.cos() + v * a.sin()) * radius
        };
        for i in 0..segments {
            self.push(at(i), at(i + 1), color);
        }
    }

    /// Polyline whose colour fades from `start_color` to `end_color`.
    pub fn path(&mut self, points: &[Vec3]) {
        if points.len() < 2 {
            return;
        }
        let (from, to) = (self.settings.start_color, self.settings.end_color);
        let last = (points.len() - 2).max(1) as f32;
        for (i, pair) in points.windows(2).enumerate() {
            let color = from.lerp(to, i as f32 / last);
            self.push(pair[0], pair[1], color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_line_alternates() {
        let mut draw = Draw::new(DrawSettings::default());
        draw.dashed_line(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
        // dashes at [0,1] [2,3] [4,5]
        let lines = draw.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].end, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn dashed_line_terminates_on_degenerate_input() {
        let mut draw = Draw::new(DrawSettings::default());
        draw.dashed_line(Vec3::ZERO, crate::math::INFINITY_VEC3);
        draw.dashed_line(Vec3::ZERO, crate::math::NAN_VEC3);
        assert!(draw.lines().is_empty());

        // too many dashes for the length: one solid segment
        draw.settings_mut().dash_size = 1.0e-9;
        draw.dashed_line(Vec3::ZERO, Vec3::new(1.0e6, 0.0, 0.0));
        assert_eq!(draw.lines().len(), 1);

        draw.settings_mut().dash_size = f32::NAN;
        draw.dashed_line(Vec3::ZERO, Vec3::X);
        assert_eq!(draw.lines().len(), 2);
    }

    #[test]
    fn disc_is_closed_and_on_radius() {
        let mut draw = Draw::new(DrawSettings::default());
        draw.disc(Vec3::ONE, Vec3::Z, 2.0);
        let lines = draw.lines();
        assert_eq!(lines.len(), 32);
        assert!((lines[0].start - lines[31].end).length() < 1e-4);
        for l in lines {
            assert!(((l.start - Vec3::ONE).length() - 2.0).abs() < 1e-4);
            assert!((l.start.z - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn axes_use_axis_colors() {
        let settings = DrawSettings::default();
        let mut draw = Draw::new(settings.clone());
        draw.axes(&Transform::default(), 1.0);
        let lines = draw.take_lines();
        assert_eq!(lines[0].color, settings.color_x);
        assert_eq!(lines[0].end, Vec3::X);
        assert_eq!(lines[2].end, Vec3::Z);
        assert!(draw.lines().is_empty());
    }

    #[test]
    fn occluded_scales_alpha_only() {
        let draw = Draw::new(DrawSettings::default());
        let c = draw.occluded(Color::RED);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn path_fades_between_colors() {
        let settings = DrawSettings::default();
        let mut draw = Draw::new(settings.clone());
        draw.path(&[Vec3::ZERO, Vec3::X, Vec3::Y]);
        let lines = draw.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].color, settings.start_color);
        assert_eq!(lines[1].color, settings.end_color);
    }
}
