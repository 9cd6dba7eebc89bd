//! Top-level coordinator owning every component instance.
//!
//! All shared UI state is mutated here, synchronously, inside method calls.
//! Time-driven behavior (scroll animation, the deferred full-data render)
//! advances only through `step`, which takes the caller's clock.

use tracing::debug;

use crate::api::chart::{ChartView, OUTER_GUTTER_PX};
use crate::api::menu::Menu;
use crate::api::mode::{AxisMode, ChartLayout, NARROW_LAYOUT};
use crate::api::scroll::{ScrollAnimator, ScrollHandle, ScrollStart};
use crate::api::story::StoryPlayer;
use crate::api::tooltip::{TooltipContent, TooltipPresenter, TooltipState};
use crate::core::{Driver, Viewport, load_dataset};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::PointerPosition;
use crate::render::{RenderFrame, Renderer};

/// Engine construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Screen bounds the tooltip is clamped against.
    pub screen: Viewport,
    /// Rows rendered immediately at startup, before the full set.
    pub initial_driver_count: usize,
    /// Delay before the deferred full-data render.
    pub full_render_delay_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen: Viewport::new(1920, 1080),
            initial_driver_count: 80,
            full_render_delay_ms: 1000.0,
        }
    }
}

/// Coordinates chart, menu, story, scroll, and tooltip state.
pub struct TimelineEngine {
    config: EngineConfig,
    drivers: Vec<Driver>,
    chart: ChartView,
    menu: Menu,
    story: StoryPlayer,
    scroll: ScrollAnimator,
    tooltip: TooltipPresenter,
    mode: AxisMode,
    wide_view: bool,
    header_top: f64,
    pending_reveal: Option<ScrollHandle>,
    full_render_due: Option<f64>,
}

impl TimelineEngine {
    pub fn new(config: EngineConfig) -> TimelineResult<Self> {
        if !config.screen.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: config.screen.width,
                height: config.screen.height,
            });
        }
        if !config.full_render_delay_ms.is_finite() || config.full_render_delay_ms < 0.0 {
            return Err(TimelineError::InvalidData(
                "full render delay must be finite and >= 0".to_owned(),
            ));
        }

        let mut engine = Self {
            config,
            drivers: Vec::new(),
            chart: ChartView::new(),
            menu: Menu::new(),
            story: StoryPlayer::new(),
            scroll: ScrollAnimator::new(),
            tooltip: TooltipPresenter::new(config.screen),
            mode: AxisMode::Age,
            wide_view: false,
            header_top: 0.0,
            pending_reveal: None,
            full_render_due: None,
        };
        engine.recompute_layout();
        Ok(engine)
    }

    /// Parses both data documents and runs startup phase one: layout, the
    /// first rows, and the story opening. Phase two (the full driver set) is
    /// scheduled `full_render_delay_ms` later and completed by `step`.
    ///
    /// Any parse or normalization failure aborts the load; nothing renders.
    pub fn load(
        &mut self,
        drivers_json: &str,
        races_json: &str,
        now_ms: f64,
    ) -> TimelineResult<()> {
        let dataset = load_dataset(drivers_json, races_json)?;
        self.chart.set_races(dataset.races);
        self.drivers = dataset.drivers;

        self.recompute_layout();
        let first = self.config.initial_driver_count.min(self.drivers.len());
        self.chart.update_drivers(&self.drivers[..first]);
        debug!(rows = first, "initial rows rendered");

        self.full_render_due = Some(now_ms + self.config.full_render_delay_ms);
        self.update_story(now_ms)
    }

    /// Advances time-driven state: the deferred full render, the scroll
    /// animation, and the pinned header position.
    pub fn step(&mut self, now_ms: f64) -> TimelineResult<()> {
        if let Some(due) = self.full_render_due {
            if now_ms >= due {
                self.full_render_due = None;
                self.chart.update_drivers(&self.drivers);
                debug!(rows = self.chart.row_count(), "full driver set rendered");
                self.update_story(now_ms)?;
            }
        }

        if let Some(finished) = self.scroll.step(now_ms)? {
            if self.pending_reveal == Some(finished) {
                self.pending_reveal = None;
                self.finish_story_reveal();
            }
        }

        self.header_top = self.scroll.offset_y();
        Ok(())
    }

    /// Switches the horizontal axis quantity and everything derived from it.
    pub fn set_mode(&mut self, mode: AxisMode) -> TimelineResult<()> {
        debug!(?mode, "axis mode change");
        self.mode = mode;
        self.chart.set_mode(mode);
        self.recompute_layout();
        self.chart.sort_rows(mode.sort_key());
        self.menu.select_option(mode);
        self.scroll_home();
        Ok(())
    }

    /// Trades chart width for finer per-mark spacing.
    pub fn set_wide_view(&mut self, wide: bool) -> TimelineResult<()> {
        debug!(wide, "wide view change");
        self.wide_view = wide;
        self.recompute_layout();
        self.scroll_home();
        Ok(())
    }

    fn recompute_layout(&mut self) {
        let layout = if self.wide_view {
            self.mode.wide_layout()
        } else {
            NARROW_LAYOUT
        };
        self.chart.set_layout(layout);
    }

    fn scroll_home(&mut self) {
        let home = if self.wide_view {
            self.mode.wide_scroll_home()
        } else {
            (0.0, 0.0)
        };
        self.scroll.move_to(home.0, home.1);
        self.header_top = self.scroll.offset_y();
    }

    pub fn story_next(&mut self, now_ms: f64) -> TimelineResult<()> {
        if self.story.is_enabled() && self.story.next() {
            self.update_story(now_ms)?;
        }
        Ok(())
    }

    pub fn story_prev(&mut self, now_ms: f64) -> TimelineResult<()> {
        if self.story.is_enabled() && self.story.prev() {
            self.update_story(now_ms)?;
        }
        Ok(())
    }

    pub fn story_close(&mut self, now_ms: f64) -> TimelineResult<()> {
        self.story.close();
        self.update_story(now_ms)
    }

    /// Re-renders the story state: spotlight, panel, scroll travel, and the
    /// menu gate. The panel stays concealed until the viewport arrives.
    pub fn update_story(&mut self, now_ms: f64) -> TimelineResult<()> {
        self.menu.set_enabled(!self.story.is_enabled());

        if !self.story.is_enabled() {
            self.chart.highlight_driver(None);
            self.story.hide_panel();
            self.pending_reveal = None;
            return Ok(());
        }

        let slide = self.story.slide();
        debug!(
            slide = self.story.current(),
            driver = slide.driver,
            "story slide"
        );
        self.story.conceal_panel();

        if self.story.current() > 0 {
            match self.scroll.scroll_to(slide.scroll_to, now_ms)? {
                ScrollStart::AlreadyAtTarget => {
                    self.pending_reveal = None;
                    self.finish_story_reveal();
                }
                ScrollStart::Animating(handle) => self.pending_reveal = Some(handle),
            }
        } else {
            self.scroll.move_to(0.0, 0.0);
            self.header_top = 0.0;
            self.pending_reveal = None;
            self.finish_story_reveal();
        }

        if slide.mode != self.mode {
            // The slide's animated scroll stays in flight; the mode change
            // only re-homes the instantaneous offset.
            self.set_mode(slide.mode)?;
        }
        Ok(())
    }

    fn finish_story_reveal(&mut self) {
        let slide = self.story.slide();
        self.chart.highlight_driver(Some(slide.driver));
        self.story.reveal_panel();
    }

    /// Pointer entered a mark region of the given row: resolve and show the
    /// tooltip. Returns whether a participation was found.
    pub fn pointer_over_mark(
        &mut self,
        slug: &str,
        pointer: PointerPosition,
    ) -> TimelineResult<bool> {
        let Some(sample) = self.chart.resolve_hover(slug, pointer.x)? else {
            return Ok(false);
        };
        self.tooltip
            .show(TooltipContent::from_sample(&sample), pointer);
        Ok(true)
    }

    pub fn pointer_moved(&mut self, pointer: PointerPosition) {
        self.tooltip.update(pointer);
    }

    pub fn pointer_left_mark(&mut self) {
        self.tooltip.hide();
    }

    /// Projects the current chart state into a frame.
    pub fn frame(&self) -> TimelineResult<RenderFrame> {
        self.chart.frame()
    }

    /// Projects and hands the frame to a backend.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> TimelineResult<()> {
        renderer.render(&self.chart.frame()?)
    }

    #[must_use]
    pub fn mode(&self) -> AxisMode {
        self.mode
    }

    #[must_use]
    pub fn wide_view(&self) -> bool {
        self.wide_view
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.chart.layout()
    }

    /// Width applied to the chart, header, and container elements.
    #[must_use]
    pub fn outer_width(&self) -> u32 {
        self.chart.layout().chart_width + OUTER_GUTTER_PX
    }

    /// Pinned header offset, tracking the scroll position.
    #[must_use]
    pub fn header_top(&self) -> f64 {
        self.header_top
    }

    #[must_use]
    pub fn scroll_offset(&self) -> (f64, f64) {
        (self.scroll.offset_x(), self.scroll.offset_y())
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_animating()
    }

    #[must_use]
    pub fn full_render_pending(&self) -> bool {
        self.full_render_due.is_some()
    }

    #[must_use]
    pub fn chart(&self) -> &ChartView {
        &self.chart
    }

    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    #[must_use]
    pub fn story(&self) -> &StoryPlayer {
        &self.story
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        self.tooltip.state()
    }

    #[must_use]
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }
}
