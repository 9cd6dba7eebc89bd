use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::core::Driver;

/// Which quantity drives horizontal positioning of marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Driver age at race time.
    Age,
    /// Calendar date of the race.
    Date,
    /// Race-sequence index within the driver's career.
    Histogram,
}

/// Chart width and per-mark width for one view configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub chart_width: u32,
    pub mark_width: f64,
}

/// Narrow view uses the same compact layout for every mode.
pub const NARROW_LAYOUT: ChartLayout = ChartLayout {
    chart_width: 1200,
    mark_width: 2.0,
};

impl AxisMode {
    pub const ALL: [AxisMode; 3] = [AxisMode::Age, AxisMode::Date, AxisMode::Histogram];

    /// Row order applied when this mode is selected.
    #[must_use]
    pub fn sort_key(self) -> SortKey {
        match self {
            AxisMode::Age | AxisMode::Date => SortKey::DateOfBirth,
            AxisMode::Histogram => SortKey::RaceCount,
        }
    }

    /// Whether driver labels track their first mark horizontally.
    #[must_use]
    pub fn floats_driver_labels(self) -> bool {
        !matches!(self, AxisMode::Histogram)
    }

    #[must_use]
    pub fn wide_layout(self) -> ChartLayout {
        match self {
            AxisMode::Age => ChartLayout {
                chart_width: 6000,
                mark_width: 4.0,
            },
            AxisMode::Date => ChartLayout {
                chart_width: 24000,
                mark_width: 6.0,
            },
            AxisMode::Histogram => ChartLayout {
                chart_width: 2500,
                mark_width: 6.0,
            },
        }
    }

    /// Scroll position the view re-centers to after a mode or width change
    /// while wide view is active.
    #[must_use]
    pub fn wide_scroll_home(self) -> (f64, f64) {
        match self {
            AxisMode::Date => (24_000.0, 0.0),
            AxisMode::Age | AxisMode::Histogram => (0.0, 0.0),
        }
    }

    #[must_use]
    pub fn menu_label(self) -> &'static str {
        match self {
            AxisMode::Age => "How old were they?",
            AxisMode::Date => "Timeline",
            AxisMode::Histogram => "Race count",
        }
    }
}

/// Row sort key. Numeric keys order descending, names lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    DateOfBirth,
    RaceCount,
    WinCount,
    PodiumCount,
    StartAge,
}

impl SortKey {
    #[must_use]
    pub fn compare(self, a: &Driver, b: &Driver) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::DateOfBirth => b.dob.cmp(&a.dob),
            SortKey::RaceCount => b.num_races.cmp(&a.num_races),
            SortKey::WinCount => b.num_wins.cmp(&a.num_wins),
            SortKey::PodiumCount => b.num_podiums.cmp(&a.num_podiums),
            SortKey::StartAge => OrderedFloat(b.start_age).cmp(&OrderedFloat(a.start_age)),
        }
    }
}
