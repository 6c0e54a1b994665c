use crate::core::Canvas;
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive, WedgePrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends paint in field order: wedges, rects, lines, circles, texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub canvas: Canvas,
    pub wedges: Vec<WedgePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            wedges: Vec::new(),
            rects: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_wedge(mut self, wedge: WedgePrimitive) -> Self {
        self.wedges.push(wedge);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;

        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.wedges.len()
            + self.rects.len()
            + self.lines.len()
            + self.circles.len()
            + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
