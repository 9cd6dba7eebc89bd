use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};
use crate::render::{MarkPrimitive, RowPrimitive, TickPrimitive};

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rows: Vec<RowPrimitive>,
    pub marks: Vec<MarkPrimitive>,
    pub ticks: Vec<TickPrimitive>,
    /// True while a story slide keeps a single driver in focus.
    pub axis_faded: bool,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rows: Vec::new(),
            marks: Vec::new(),
            ticks: Vec::new(),
            axis_faded: false,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for row in &self.rows {
            row.validate()?;
        }
        for mark in &self.marks {
            mark.validate()?;
        }
        for tick in &self.ticks {
            tick.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.marks.is_empty() && self.ticks.is_empty()
    }
}
