//! Click-to-cycle selectors: enum variants and object references.

use gamework_core::ObjectRef;

use crate::layout::Rect;
use crate::widget::{Pointer, Widget};
use crate::RenderCommand;

const BG: [f32; 4] = [0.12, 0.12, 0.14, 1.0];
const TEXT: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

/// Enum selector; each click advances to the next variant, wrapping.
#[derive(Debug, Clone)]
pub struct EnumPopup {
    pub rect: Rect,
    pub index: usize,
    pub variants: Vec<String>,
    pub font_size: f32,
}

impl EnumPopup {
    pub fn new(rect: Rect, index: usize, variants: &[&str]) -> Self {
        Self {
            rect,
            index,
            variants: variants.iter().map(|v| v.to_string()).collect(),
            font_size: 12.0,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.variants.get(self.index).map(String::as_str)
    }
}

impl Widget for EnumPopup {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        cmds.push(RenderCommand::quad(self.rect, BG));
        let caption = format!("{} \u{25be}", self.selected().unwrap_or("-"));
        cmds.push(RenderCommand::text(self.rect.inset(2.0), caption, TEXT, self.font_size));
    }

    fn hit(&self, mx: f64, my: f64) -> bool {
        self.rect.contains(mx, my)
    }

    fn pointer(&mut self, pointer: &Pointer) -> bool {
        if self.variants.is_empty() || !(pointer.pressed && self.hit(pointer.x, pointer.y)) {
            return false;
        }
        self.index = (self.index + 1) % self.variants.len();
        true
    }
}

/// Object-reference selector over a list of candidates.
///
/// A click moves to the candidate after the current one (the first when the
/// current value is not a candidate); with no candidates the selection
/// becomes `None`.
#[derive(Debug, Clone)]
pub struct ObjectPicker {
    pub rect: Rect,
    pub current: Option<ObjectRef>,
    pub candidates: Vec<ObjectRef>,
    /// Accepted type name, shown when nothing is selected.
    pub object_type: String,
    pub font_size: f32,
}

impl ObjectPicker {
    pub fn new(rect: Rect, current: Option<ObjectRef>, candidates: Vec<ObjectRef>) -> Self {
        Self {
            rect,
            current,
            candidates,
            object_type: String::new(),
            font_size: 12.0,
        }
    }

    pub fn with_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = object_type.into();
        self
    }

    fn caption(&self) -> String {
        match &self.current {
            Some(o) => format!("{} ({})", o.name, o.type_name),
            None if self.object_type.is_empty() => "None".to_string(),
            None => format!("None ({})", self.object_type),
        }
    }
}

impl Widget for ObjectPicker {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        cmds.push(RenderCommand::quad(self.rect, BG));
        cmds.push(RenderCommand::text(self.rect.inset(2.0), self.caption(), TEXT, self.font_size));
    }

    fn hit(&self, mx: f64, my: f64) -> bool {
        self.rect.contains(mx, my)
    }

    fn pointer(&mut self, pointer: &Pointer) -> bool {
        if !(pointer.pressed && self.hit(pointer.x, pointer.y)) {
            return false;
        }
        let position = self
            .current
            .as_ref()
            .and_then(|c| self.candidates.iter().position(|o| o == c));
        let next = match position {
            Some(i) => self.candidates.get((i + 1) % self.candidates.len()),
            None => self.candidates.first(),
        };
        let next = next.cloned();
        let changed = next != self.current;
        self.current = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click() -> Pointer {
        Pointer {
            x: 5.0,
            y: 5.0,
            pressed: true,
            down: true,
            ..Default::default()
        }
    }

    #[test]
    fn enum_cycles_and_wraps() {
        let mut p = EnumPopup::new(Rect::new(0.0, 0.0, 50.0, 10.0), 1, &["A", "B", "C"]);
        p.pointer(&click());
        assert_eq!(p.selected(), Some("C"));
        p.pointer(&click());
        assert_eq!(p.index, 0);
        let mut empty = EnumPopup::new(Rect::new(0.0, 0.0, 50.0, 10.0), 0, &[]);
        assert!(!empty.pointer(&click()));
    }

    #[test]
    fn object_cycles_through_candidates() {
        let a = ObjectRef::asset(1, "Steel", "Material");
        let b = ObjectRef::asset(2, "Glass", "Material");
        let rect = Rect::new(0.0, 0.0, 50.0, 10.0);

        let mut p = ObjectPicker::new(rect, None, vec![a.clone(), b.clone()]);
        p.pointer(&click());
        assert_eq!(p.current, Some(a.clone()));
        p.pointer(&click());
        assert_eq!(p.current, Some(b));
        p.pointer(&click());
        assert_eq!(p.current, Some(a.clone()));

        let mut none = ObjectPicker::new(rect, Some(a), Vec::new()).with_type("Material");
        assert!(none.pointer(&click()));
        assert_eq!(none.current, None);
        let mut cmds = Vec::new();
        none.collect(&mut cmds);
        assert_eq!(cmds[1].as_text(), Some("None (Material)"));
    }
}
