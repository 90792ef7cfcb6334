//! gamework_gui: immediate-mode widgets and the inspector renderer.
//!
//! Widgets only produce [`RenderCommand`]s; presenting them is up to the
//! host.

pub mod button;
pub mod color_picker;
pub mod drag_value;
pub mod layout;
pub mod picker;
pub mod slider;
pub mod toggle;
pub mod ui;
pub mod widget;

pub use button::Button;
pub use color_picker::ColorPicker;
pub use drag_value::DragValue;
pub use layout::{Rect, RenderCommand, QUAD_COLOR_WHEEL};
pub use picker::{EnumPopup, ObjectPicker};
pub use slider::Slider;
pub use toggle::Toggle;
pub use ui::{InspectorUi, UiStyle};
pub use widget::{Pointer, Widget};
