mod chart;
mod engine;
mod menu;
mod mode;
mod scroll;
mod story;
mod tooltip;

pub use chart::{CHART_LEFT_MARGIN_PX, ChartView, OUTER_GUTTER_PX, ROW_PITCH_PX, mark_color};
pub use engine::{EngineConfig, TimelineEngine};
pub use menu::{Menu, MenuOption};
pub use mode::{AxisMode, ChartLayout, NARROW_LAYOUT, SortKey};
pub use scroll::{ScrollAnimator, ScrollHandle, ScrollStart};
pub use story::{SLIDES, Slide, StoryPanel, StoryPlayer};
pub use tooltip::{TooltipContent, TooltipPresenter, TooltipState, finish_label};
