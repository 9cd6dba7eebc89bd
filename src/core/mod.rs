pub mod driver;
pub mod loader;
pub mod scale;
pub mod ticks;
pub mod types;

pub use driver::{DNF_POSITION, Driver, Participation, Race, RaceId, slugify};
pub use loader::{Dataset, load_dataset};
pub use scale::{LinearScale, date_day_number, day_number_date};
pub use types::Viewport;
