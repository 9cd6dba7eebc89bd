mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{MarkPrimitive, RowPrimitive, TickPrimitive};

use crate::error::TimelineResult;

/// Abstraction over a drawing backend consuming chart frames.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;
}
