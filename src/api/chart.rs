//! Driver rows, mark projection, axis ticks, and highlight state.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::debug;

use crate::api::mode::{AxisMode, ChartLayout, NARROW_LAYOUT, SortKey};
use crate::core::scale::{LinearScale, date_day_number, day_number_date};
use crate::core::ticks::{numeric_label, tick_values};
use crate::core::{Driver, Race, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::HoverSample;
use crate::render::{MarkPrimitive, RenderFrame, RowPrimitive, TickPrimitive};

/// Vertical distance between consecutive driver rows.
pub const ROW_PITCH_PX: f64 = 20.0;
/// Horizontal gutter left of the mark area.
pub const CHART_LEFT_MARGIN_PX: f64 = 100.0;
/// Extra width around the mark area applied to chart, header, and container.
pub const OUTER_GUTTER_PX: u32 = 130;

const MARK_HEIGHT_PX: f64 = 14.0;
const LABEL_OFFSET_PX: f64 = 95.0;
/// Floating header labels sit slightly left of their grid line.
const HEADER_TICK_SHIFT_PX: f64 = 51.0;

const WIN_COLOR: &str = "#f03b20";
const PODIUM_COLOR: &str = "#ffeda0";
const MIDFIELD_COLOR: &str = "#aaa";
const NEUTRAL_COLOR: &str = "#444";

/// Mark fill by finishing rank. The zero DNF sentinel falls through to the
/// neutral color together with the back of the field.
#[must_use]
pub fn mark_color(position: u32) -> &'static str {
    match position {
        1 => WIN_COLOR,
        2 | 3 => PODIUM_COLOR,
        4..=10 => MIDFIELD_COLOR,
        _ => NEUTRAL_COLOR,
    }
}

/// Chart state: bound driver rows plus the projection configuration.
///
/// Rows are keyed by driver slug (names must be unique) and keep their
/// binding across rebinds, so a second `update_drivers` with a superset of
/// the data only appends the new rows.
#[derive(Debug)]
pub struct ChartView {
    races: Vec<Race>,
    rows: IndexMap<String, Driver>,
    mode: AxisMode,
    layout: ChartLayout,
    floats_labels: bool,
    order: SortKey,
    highlighted: Option<String>,
}

impl Default for ChartView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            races: Vec::new(),
            rows: IndexMap::new(),
            mode: AxisMode::Age,
            layout: NARROW_LAYOUT,
            floats_labels: AxisMode::Age.floats_driver_labels(),
            order: AxisMode::Age.sort_key(),
            highlighted: None,
        }
    }

    pub fn set_races(&mut self, races: Vec<Race>) {
        self.races = races;
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn mode(&self) -> AxisMode {
        self.mode
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn order(&self) -> SortKey {
        self.order
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// Binds driver records to rows. Already-bound slugs keep their row.
    pub fn update_drivers(&mut self, drivers: &[Driver]) {
        let before = self.rows.len();
        for driver in drivers {
            let slug = driver.slug();
            self.rows.entry(slug).or_insert_with(|| driver.clone());
        }
        debug!(
            appended = self.rows.len() - before,
            total = self.rows.len(),
            "driver rows bound"
        );
    }

    pub fn set_mode(&mut self, mode: AxisMode) {
        self.mode = mode;
        self.floats_labels = mode.floats_driver_labels();
    }

    pub fn set_layout(&mut self, layout: ChartLayout) {
        self.layout = layout;
    }

    /// Stable reorder of rows; vertical offsets follow the new positions.
    pub fn sort_rows(&mut self, key: SortKey) {
        self.order = key;
        self.rows.sort_by(|_, a, _, b| key.compare(a, b));
    }

    /// `Some` dims every other row and the axis; `None` clears all fades.
    pub fn highlight_driver(&mut self, slug: Option<&str>) {
        self.highlighted = slug.map(str::to_owned);
    }

    fn axis_scale(&self) -> TimelineResult<LinearScale> {
        match self.mode {
            AxisMode::Age => LinearScale::new(18.0, 60.0),
            AxisMode::Date => {
                let start = chrono::NaiveDate::from_ymd_opt(1950, 1, 1)
                    .ok_or_else(|| TimelineError::InvalidData("bad axis start date".to_owned()))?;
                let end = chrono::NaiveDate::from_ymd_opt(2015, 1, 2)
                    .ok_or_else(|| TimelineError::InvalidData("bad axis end date".to_owned()))?;
                LinearScale::new(date_day_number(start), date_day_number(end))
            }
            AxisMode::Histogram => LinearScale::new(0.0, 350.0),
        }
    }

    fn tick_count(&self) -> usize {
        if self.layout.chart_width > 1200 && self.mode != AxisMode::Histogram {
            60
        } else {
            10
        }
    }

    fn mark_value(&self, driver: &Driver, sequence: usize) -> f64 {
        let participation = driver.races[sequence];
        match self.mode {
            AxisMode::Age => participation.age,
            AxisMode::Date => date_day_number(self.races[participation.race.0].date),
            AxisMode::Histogram => sequence as f64,
        }
    }

    fn mark_offset(
        &self,
        scale: LinearScale,
        driver: &Driver,
        sequence: usize,
    ) -> TimelineResult<f64> {
        scale.domain_to_pixel(
            self.mark_value(driver, sequence),
            f64::from(self.layout.chart_width),
        )
    }

    fn tick_label(&self, value: f64) -> String {
        match self.mode {
            AxisMode::Age => format!("{}yrs", numeric_label(value)),
            AxisMode::Date => day_number_date(value)
                .map(|date| date.format("%Y").to_string())
                .unwrap_or_default(),
            AxisMode::Histogram => numeric_label(value),
        }
    }

    /// Projects the current rows into a backend-agnostic frame.
    pub fn frame(&self) -> TimelineResult<RenderFrame> {
        let scale = self.axis_scale()?;
        let range = f64::from(self.layout.chart_width);
        let fading = self.highlighted.is_some();

        let height = (self.rows.len() as u32).max(1) * ROW_PITCH_PX as u32;
        let mut frame = RenderFrame::new(Viewport::new(
            self.layout.chart_width + OUTER_GUTTER_PX,
            height,
        ));
        frame.axis_faded = fading;

        for (index, (slug, driver)) in self.rows.iter().enumerate() {
            let first_mark = self.mark_offset(scale, driver, 0)?;
            let label_x = if self.floats_labels {
                first_mark + LABEL_OFFSET_PX
            } else {
                LABEL_OFFSET_PX
            };
            let highlighted = self.highlighted.as_deref() == Some(slug.as_str());

            frame.rows.push(RowPrimitive {
                slug: slug.clone(),
                label: driver.name.clone(),
                y: ROW_PITCH_PX * index as f64,
                label_x,
                line_x1: CHART_LEFT_MARGIN_PX,
                line_x2: range + CHART_LEFT_MARGIN_PX,
                faded: fading && !highlighted,
                highlighted,
            });

            for sequence in 0..driver.races.len() {
                let x = self.mark_offset(scale, driver, sequence)?;
                frame.marks.push(MarkPrimitive {
                    row: slug.clone(),
                    x: CHART_LEFT_MARGIN_PX + x,
                    width: self.layout.mark_width,
                    height: MARK_HEIGHT_PX,
                    color: mark_color(driver.races[sequence].position),
                });
            }
        }

        for value in tick_values(scale.domain(), self.tick_count()) {
            let x = scale.domain_to_pixel(value, range)?;
            frame.ticks.push(TickPrimitive {
                x,
                label_x: x - HEADER_TICK_SHIFT_PX,
                label: self.tick_label(value),
            });
        }

        debug!(
            rows = frame.rows.len(),
            marks = frame.marks.len(),
            ticks = frame.ticks.len(),
            "frame projected"
        );
        Ok(frame)
    }

    /// Resolves a pointer x offset (chart space) within a driver row to the
    /// participation under it, preferring marks whose extent contains the
    /// pointer and falling back to the nearest mark.
    pub fn resolve_hover(
        &self,
        slug: &str,
        pointer_x: f64,
    ) -> TimelineResult<Option<HoverSample>> {
        if !pointer_x.is_finite() {
            return Err(TimelineError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }

        let Some(driver) = self.rows.get(slug) else {
            return Ok(None);
        };

        let scale = self.axis_scale()?;
        let mut contained: SmallVec<[(OrderedFloat<f64>, usize); 2]> = SmallVec::new();
        let mut nearest: Option<(OrderedFloat<f64>, usize)> = None;
        for sequence in 0..driver.races.len() {
            let left = CHART_LEFT_MARGIN_PX + self.mark_offset(scale, driver, sequence)?;
            let center = left + self.layout.mark_width / 2.0;
            let distance = OrderedFloat((center - pointer_x).abs());

            if pointer_x >= left && pointer_x <= left + self.layout.mark_width {
                contained.push((distance, sequence));
            }
            if nearest.is_none_or(|(best, _)| distance < best) {
                nearest = Some((distance, sequence));
            }
        }

        let chosen = contained
            .into_iter()
            .min()
            .or(nearest)
            .map(|(_, sequence)| sequence);
        let Some(sequence) = chosen else {
            return Ok(None);
        };

        let participation = driver.races[sequence];
        let race = &self.races[participation.race.0];
        Ok(Some(HoverSample {
            driver: driver.name.clone(),
            race: race.name.clone(),
            date: race.date,
            position: participation.position,
            age: participation.age.floor(),
        }))
    }
}
