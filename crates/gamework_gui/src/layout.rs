/// Axis-aligned rectangle with origin at `(x, y)` (top-left, window space).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inclusive.
    pub fn contains(&self, mx: f64, my: f64) -> bool {
        let x = mx as f32;
        let y = my as f32;
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Pointer x relative to the rectangle, `0.0` at the left edge and `1.0`
    /// at the right edge, clamped.
    pub fn normalized_x(&self, mx: f64) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        ((mx as f32 - self.x) / self.width).clamp(0.0, 1.0)
    }

    /// Split horizontally into `n` equal columns separated by `gap`.
    pub fn columns(&self, n: usize, gap: f32) -> Vec<Rect> {
        if n == 0 {
            return Vec::new();
        }
        let total_gap = gap * (n - 1) as f32;
        let w = ((self.width - total_gap) / n as f32).max(0.0);
        (0..n)
            .map(|i| Rect::new(self.x + i as f32 * (w + gap), self.y, w, self.height))
            .collect()
    }

    /// Shrink by `amount` on every side.
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }
}

/// Quad flag: draw a hue/saturation wheel instead of a flat colour.
pub const QUAD_COLOR_WHEEL: u32 = 1;

/// Backend-agnostic draw instruction produced by the widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Quad {
        rect: Rect,
        color: [f32; 4],
        /// per-corner radii in pixels: [top-left, top-right, bottom-left, bottom-right]
        radii: [f32; 4],
        flags: u32,
    },
    Text {
        rect: Rect,
        text: String,
        color: [f32; 4],
        font_size: f32,
    },
}

impl RenderCommand {
    pub fn quad(rect: Rect, color: [f32; 4]) -> Self {
        RenderCommand::Quad {
            rect,
            color,
            radii: [0.0; 4],
            flags: 0,
        }
    }

    pub fn text(rect: Rect, text: impl Into<String>, color: [f32; 4], font_size: f32) -> Self {
        RenderCommand::Text {
            rect,
            text: text.into(),
            color,
            font_size,
        }
    }

    pub fn rect(&self) -> &Rect {
        match self {
            RenderCommand::Quad { rect, .. } | RenderCommand::Text { rect, .. } => rect,
        }
    }

    /// The string of a text command.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderCommand::Text { text, .. } => Some(text),
            RenderCommand::Quad { .. } => None,
        }
    }
}
