use crate::domain::{
    development_data::Year,
    errors::TimelineResult,
    timeline::{PlaybackState, RenderInstruction, RenderSink},
};
use std::cell::Cell;
use std::rc::Rc;

/// Playback position as last handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStatus {
    pub state: PlaybackState,
    pub year: Year,
}

/// Render sink decorator that publishes the status of every instruction
/// before delivering it, so the status can be read while a render is in
/// progress.
pub struct StatusTracking<R> {
    inner: R,
    status: Rc<Cell<ChartStatus>>,
}

impl<R: RenderSink> StatusTracking<R> {
    pub fn new(inner: R, initial: ChartStatus) -> Self {
        Self {
            inner,
            status: Rc::new(Cell::new(initial)),
        }
    }

    /// Shared handle to the published status.
    pub fn status(&self) -> Rc<Cell<ChartStatus>> {
        Rc::clone(&self.status)
    }
}

impl<R: RenderSink> RenderSink for StatusTracking<R> {
    fn render(&mut self, instruction: &RenderInstruction) -> TimelineResult<()> {
        self.status.set(ChartStatus {
            state: instruction.state,
            year: instruction.year,
        });
        self.inner.render(instruction)
    }
}
