//! Data loading and normalization.
//!
//! The wire schema carries each driver's career as three parallel arrays
//! (`races`, `pos`, `age`). Normalization zips them into per-participation
//! records and derives the aggregate counters the chart sorts on. Any parse
//! or shape failure is an error; there is no retry and no partial dataset.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::core::driver::{Driver, Participation, Race, RaceId};
use crate::error::{TimelineError, TimelineResult};

#[derive(Debug, Deserialize)]
struct RawDriver {
    name: String,
    dob: String,
    races: Vec<usize>,
    pos: Vec<u32>,
    age: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct RawRace {
    name: String,
    date: String,
}

/// Fully normalized dataset: drivers with derived aggregates plus the race
/// reference table they index into.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub drivers: Vec<Driver>,
    pub races: Vec<Race>,
}

/// Parses and normalizes the two JSON documents.
pub fn load_dataset(drivers_json: &str, races_json: &str) -> TimelineResult<Dataset> {
    let raw_drivers: Vec<RawDriver> = serde_json::from_str(drivers_json)?;
    let raw_races: Vec<RawRace> = serde_json::from_str(races_json)?;
    debug!(
        drivers = raw_drivers.len(),
        races = raw_races.len(),
        "data documents parsed"
    );

    let races = raw_races
        .into_iter()
        .map(|raw| {
            Ok(Race {
                name: raw.name,
                date: parse_date(&raw.date)?,
            })
        })
        .collect::<TimelineResult<Vec<_>>>()?;

    let drivers = raw_drivers
        .into_iter()
        .map(|raw| normalize_driver(raw, races.len()))
        .collect::<TimelineResult<Vec<_>>>()?;
    debug!(drivers = drivers.len(), "aggregates computed");

    Ok(Dataset { drivers, races })
}

fn normalize_driver(raw: RawDriver, race_table_len: usize) -> TimelineResult<Driver> {
    if raw.races.len() != raw.pos.len() || raw.races.len() != raw.age.len() {
        return Err(TimelineError::InvalidData(format!(
            "driver '{}' has mismatched career arrays: races={}, pos={}, age={}",
            raw.name,
            raw.races.len(),
            raw.pos.len(),
            raw.age.len()
        )));
    }

    if raw.races.is_empty() {
        return Err(TimelineError::InvalidData(format!(
            "driver '{}' has no race participations",
            raw.name
        )));
    }

    let mut races = Vec::with_capacity(raw.races.len());
    for ((race_index, position), age) in raw.races.iter().zip(&raw.pos).zip(&raw.age) {
        if *race_index >= race_table_len {
            return Err(TimelineError::InvalidData(format!(
                "driver '{}' references race {} outside the race table ({} entries)",
                raw.name, race_index, race_table_len
            )));
        }
        if !age.is_finite() {
            return Err(TimelineError::InvalidData(format!(
                "driver '{}' has a non-finite age entry",
                raw.name
            )));
        }
        races.push(Participation {
            race: RaceId(*race_index),
            position: *position,
            age: *age,
        });
    }

    let num_races = races.len();
    let num_wins = races.iter().filter(|p| p.is_win()).count();
    let num_podiums = races.iter().filter(|p| p.is_podium()).count();
    let start_age = races[0].age;

    Ok(Driver {
        name: raw.name,
        dob: parse_date(&raw.dob)?,
        races,
        num_races,
        num_wins,
        num_podiums,
        start_age,
    })
}

fn parse_date(text: &str) -> TimelineResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d")?)
}
