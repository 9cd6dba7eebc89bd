use crate::error::{TimelineError, TimelineResult};

/// One driver row: label, guide line, and highlight flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPrimitive {
    pub slug: String,
    pub label: String,
    /// Vertical offset of the row group.
    pub y: f64,
    /// Horizontal position of the floating driver label.
    pub label_x: f64,
    /// Guide line span, left edge to right edge.
    pub line_x1: f64,
    pub line_x2: f64,
    pub faded: bool,
    pub highlighted: bool,
}

impl RowPrimitive {
    pub fn validate(&self) -> TimelineResult<()> {
        for value in [self.y, self.label_x, self.line_x1, self.line_x2] {
            if !value.is_finite() {
                return Err(TimelineError::InvalidData(format!(
                    "row '{}' has non-finite geometry",
                    self.slug
                )));
            }
        }
        Ok(())
    }
}

/// One race participation mark inside a row.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkPrimitive {
    pub row: String,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

impl MarkPrimitive {
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.x.is_finite() || !self.width.is_finite() || !self.height.is_finite() {
            return Err(TimelineError::InvalidData(format!(
                "mark in row '{}' has non-finite geometry",
                self.row
            )));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "mark in row '{}' has negative size",
                self.row
            )));
        }
        Ok(())
    }
}

/// One axis tick: grid-line position plus the floating header label position.
#[derive(Debug, Clone, PartialEq)]
pub struct TickPrimitive {
    pub x: f64,
    pub label_x: f64,
    pub label: String,
}

impl TickPrimitive {
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.x.is_finite() || !self.label_x.is_finite() {
            return Err(TimelineError::InvalidData(format!(
                "tick '{}' has non-finite position",
                self.label
            )));
        }
        Ok(())
    }
}
