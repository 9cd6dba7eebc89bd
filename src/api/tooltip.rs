//! Floating info box tracking the pointer over chart marks.

use crate::core::Viewport;
use crate::interaction::{HoverSample, PointerPosition};

/// Offset from the pointer to the tooltip's top-left corner.
const POINTER_MARGIN_PX: f64 = 10.0;
/// Shift applied when the pointer is in the right half of the screen, so the
/// box stays inside the right edge.
const RIGHT_EDGE_SHIFT_PX: f64 = 240.0;
/// Shift applied when the pointer is in the bottom half of the screen.
const BOTTOM_EDGE_SHIFT_PX: f64 = 110.0;

const VISIBLE_OPACITY: f64 = 0.9;

/// Text fields presented inside the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub driver: String,
    pub race: String,
    pub date: String,
    pub position: String,
}

impl TooltipContent {
    #[must_use]
    pub fn from_sample(sample: &HoverSample) -> Self {
        Self {
            driver: sample.driver.clone(),
            race: sample.race.clone(),
            date: sample.date.to_string(),
            position: finish_label(sample.position),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub opacity: f64,
    pub left: f64,
    pub top: f64,
    pub content: Option<TooltipContent>,
}

/// Shows, hides, and repositions the tooltip.
#[derive(Debug)]
pub struct TooltipPresenter {
    screen: Viewport,
    state: TooltipState,
}

impl TooltipPresenter {
    #[must_use]
    pub fn new(screen: Viewport) -> Self {
        Self {
            screen,
            state: TooltipState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn show(&mut self, content: TooltipContent, pointer: PointerPosition) {
        self.state.visible = true;
        self.state.opacity = VISIBLE_OPACITY;
        self.state.content = Some(content);
        self.reposition(pointer);
    }

    /// Fades out and becomes non-interactive. Content is kept so a repeated
    /// `hide` stays idempotent.
    pub fn hide(&mut self) {
        self.state.visible = false;
        self.state.opacity = 0.0;
    }

    /// Tracks pointer movement while visible. A no-op when hidden, so calling
    /// it with an unchanged state changes nothing.
    pub fn update(&mut self, pointer: PointerPosition) {
        if self.state.visible {
            self.reposition(pointer);
        }
    }

    fn reposition(&mut self, pointer: PointerPosition) {
        let mut left = pointer.x + POINTER_MARGIN_PX;
        if pointer.x > 0.5 * f64::from(self.screen.width) {
            left -= RIGHT_EDGE_SHIFT_PX;
        }

        let mut top = pointer.y + POINTER_MARGIN_PX;
        if pointer.y > 0.5 * f64::from(self.screen.height) {
            top -= BOTTOM_EDGE_SHIFT_PX;
        }

        self.state.left = left;
        self.state.top = top;
    }
}

/// Finishing-position label: rank 1 is the winner, the zero sentinel did not
/// finish, everything else prints as an ordinal.
#[must_use]
pub fn finish_label(position: u32) -> String {
    match position {
        1 => "Winner".to_owned(),
        0 => "DNF".to_owned(),
        n => format!("{n}{}", ordinal_suffix(n)),
    }
}

// Suffix repeats on a 30-rank cycle; grid sizes stay well inside it.
fn ordinal_suffix(n: u32) -> &'static str {
    match n % 30 {
        1 | 21 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}
