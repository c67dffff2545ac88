use crate::domain::logging::LogComponent;
use crate::domain::timeline::AnimationTimer;
use crate::log_trace;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// `setInterval` backed animation timer owning at most one interval.
pub struct IntervalTimer {
    on_tick: Rc<dyn Fn()>,
    interval: Option<Interval>,
}

impl IntervalTimer {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
            interval: None,
        }
    }
}

impl AnimationTimer for IntervalTimer {
    fn start(&mut self, interval_ms: u32) {
        self.cancel();
        let on_tick = Rc::clone(&self.on_tick);
        self.interval = Some(Interval::new(interval_ms, move || (*on_tick)()));
        log_trace!(
            LogComponent::Infrastructure("IntervalTimer"),
            "started every {} ms",
            interval_ms
        );
    }

    fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            // clearInterval runs now; the closure may still be on the stack when
            // the cancel comes from inside a tick, so it is dropped after this task.
            let callback = interval.cancel();
            spawn_local(async move {
                drop(callback);
            });
            log_trace!(LogComponent::Infrastructure("IntervalTimer"), "cancelled");
        }
    }

    fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
