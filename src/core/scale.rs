use chrono::{Datelike, NaiveDate};

use crate::error::{TimelineError, TimelineResult};

/// Maps a fixed value domain onto a horizontal pixel range.
///
/// The pixel range is supplied per call because the chart re-derives it
/// whenever the layout width changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> TimelineResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(TimelineError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, range_px: f64) -> TimelineResult<f64> {
        validate_range(range_px)?;
        if !value.is_finite() {
            return Err(TimelineError::InvalidData(
                "value must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * range_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, range_px: f64) -> TimelineResult<f64> {
        validate_range(range_px)?;
        if !pixel.is_finite() {
            return Err(TimelineError::InvalidData(
                "pixel must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        Ok(self.domain_start + (pixel / range_px) * span)
    }
}

fn validate_range(range_px: f64) -> TimelineResult<()> {
    if !range_px.is_finite() || range_px <= 0.0 {
        return Err(TimelineError::InvalidData(
            "pixel range must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// Civil date as a continuous day number, the unit of the date-axis domain.
#[must_use]
pub fn date_day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Inverse of `date_day_number`, used when formatting date-axis tick labels.
#[must_use]
pub fn day_number_date(day: f64) -> Option<NaiveDate> {
    if !day.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(day.round() as i32)
}
