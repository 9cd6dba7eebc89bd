use chrono::NaiveDate;

/// Finishing rank `0` means the driver did not finish.
pub const DNF_POSITION: u32 = 0;

/// Index into the race reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RaceId(pub usize);

/// Read-only race reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub name: String,
    pub date: NaiveDate,
}

/// One recorded instance of a driver competing in a specific race.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participation {
    pub race: RaceId,
    pub position: u32,
    pub age: f64,
}

impl Participation {
    #[must_use]
    pub fn is_win(self) -> bool {
        self.position == 1
    }

    #[must_use]
    pub fn is_podium(self) -> bool {
        matches!(self.position, 1..=3)
    }

    #[must_use]
    pub fn is_dnf(self) -> bool {
        self.position == DNF_POSITION
    }
}

/// A driver with their full career record and load-time aggregates.
///
/// Aggregates are derived once during normalization; the record is immutable
/// afterward. `races` is never empty for a loaded driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub name: String,
    pub dob: NaiveDate,
    pub races: Vec<Participation>,
    pub num_races: usize,
    pub num_wins: usize,
    pub num_podiums: usize,
    pub start_age: f64,
}

impl Driver {
    /// Row-binding identifier: the driver name with spaces removed, lowercased.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

#[must_use]
pub fn slugify(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
