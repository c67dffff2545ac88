use super::value_objects::RenderInstruction;
use crate::domain::errors::TimelineResult;

/// Interval timer driving the animation of one chart instance.
///
/// Implementations hold at most one active interval: `start` replaces any
/// running one, `cancel` is idempotent.
pub trait AnimationTimer {
    fn start(&mut self, interval_ms: u32);
    fn cancel(&mut self);
    fn is_running(&self) -> bool;
}

/// Rendering collaborator receiving one instruction per state entry
pub trait RenderSink {
    fn render(&mut self, instruction: &RenderInstruction) -> TimelineResult<()>;
}

impl<F> RenderSink for F
where
    F: FnMut(&RenderInstruction) -> TimelineResult<()>,
{
    fn render(&mut self, instruction: &RenderInstruction) -> TimelineResult<()> {
        self(instruction)
    }
}
