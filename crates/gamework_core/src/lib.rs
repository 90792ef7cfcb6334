//! gamework_core: shared types and runtime utilities.
//!
//! Colours, transforms, math constants, numeric extensions, runtime checks,
//! development drawing, the scene world, input state, logging setup and the
//! configuration file.

pub mod check;
pub mod color;
pub mod config;
pub mod draw;
pub mod ext;
pub mod input;
pub mod logging;
pub mod math;
pub mod scene;
pub mod transform;

pub use color::Color;
pub use config::{ConfigError, ConsoleConfig, FoundationConfig};
pub use ext::{FloatExt, IntExt};
pub use input::{InputState, KeyCode, MouseButton};
pub use scene::{Handle, ObjectOrigin, ObjectRef, World};
pub use transform::Transform;

// glam is part of the public API (vector fields, gizmo coordinates)
pub use glam;
