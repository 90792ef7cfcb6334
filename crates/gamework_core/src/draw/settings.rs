use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Colours and tessellation used by [`Draw`](super::Draw).
///
/// Lives in the `[draw]` section of the configuration file; colours are
/// `[r, g, b, a]` arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    /// Alpha multiplier applied to gizmos hidden behind geometry.
    pub occlude_color_factor: f32,
    /// Segments used for circles.
    pub segments: u32,
    /// Length of each dash (and each gap) in dashed lines.
    pub dash_size: f32,

    pub text_color: Color,
    pub point_color: Color,
    pub line_color: Color,
    pub disc_color: Color,
    pub start_color: Color,
    pub end_color: Color,
    pub hit_color: Color,
    pub ray_color: Color,

    pub color_x: Color,
    pub color_y: Color,
    pub color_z: Color,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            occlude_color_factor: 0.5,
            segments: 32,
            dash_size: 1.0,
            text_color: Color::rgb(0.22, 0.22, 0.22),
            point_color: Color::rgb(1.0, 0.8, 0.0),
            line_color: Color::rgb(1.0, 0.4, 0.3),
            disc_color: Color::rgb(0.8, 0.4, 0.8),
            start_color: Color::rgb(1.0, 0.4, 0.3),
            end_color: Color::rgb(0.4, 1.0, 0.3),
            hit_color: Color::rgb(1.0, 0.1, 0.2),
            ray_color: Color::rgb(0.4, 1.0, 0.3),
            color_x: Color::rgb(1.0, 0.1, 0.2),
            color_y: Color::rgb(0.3, 1.0, 0.1),
            color_z: Color::rgb(0.1, 0.4, 1.0),
        }
    }
}
