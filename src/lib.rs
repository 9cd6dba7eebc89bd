//! raceline: headless driver-timeline charting engine.
//!
//! The crate models an interactive career-timeline chart — driver rows, race
//! marks, axis modes, a guided story sequence — as deterministic state with a
//! backend-agnostic render surface. Hosts drive it with their own clock and
//! event source and consume `RenderFrame`s through a `Renderer`.

pub mod api;
pub mod collector;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{EngineConfig, TimelineEngine};
pub use error::{TimelineError, TimelineResult};
