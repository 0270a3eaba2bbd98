use std::time::Duration;

/// Arms and disarms the carousel's idle timer.
///
/// A carousel owns at most one task at a time and always hands it back to
/// `cancel` before asking for another one.
pub trait Scheduler {
    type Task;

    fn schedule(&mut self, period: Duration) -> Self::Task;
    fn cancel(&mut self, task: Self::Task);
}

/// Scheduler for server-rendered carousels.
///
/// The timer runs in the browser: the task is rendered as an htmx trigger on
/// the carousel fragment, so replacing the fragment drops the old timer and
/// the new fragment arms the next one. Cancelling therefore has nothing to
/// release on this side.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeferredAdvance;

/// A pending auto-advance, as rendered into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTrigger {
    pub delay: Duration,
}

impl AdvanceTrigger {
    /// Value for the fragment's `hx-trigger` attribute.
    pub fn hx_trigger(&self) -> String {
        let millis = self.delay.as_millis();
        if millis % 1000 == 0 {
            format!("load delay:{}s", millis / 1000)
        } else {
            format!("load delay:{millis}ms")
        }
    }
}

impl Scheduler for DeferredAdvance {
    type Task = AdvanceTrigger;

    fn schedule(&mut self, period: Duration) -> AdvanceTrigger {
        AdvanceTrigger { delay: period }
    }

    fn cancel(&mut self, _task: AdvanceTrigger) {}
}
