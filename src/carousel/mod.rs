mod scheduler;

pub use scheduler::{DeferredAdvance, Scheduler};

use std::time::Duration;

/// One-item-at-a-time view over an ordered list, with wraparound navigation
/// and an idle auto-advance.
///
/// The carousel owns its pending auto-advance task. Any change of the active
/// index cancels that task before a new one is scheduled, and dropping the
/// carousel cancels it. Lists of one item never get a task.
pub struct Carousel<T, S: Scheduler> {
    items: Vec<T>,
    active: usize,
    period: Duration,
    scheduler: S,
    pending: Option<S::Task>,
}

impl<T, S: Scheduler> Carousel<T, S> {
    /// `None` for an empty list: nothing to show, nothing to schedule.
    pub fn new(items: Vec<T>, scheduler: S, period: Duration) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let mut carousel = Self {
            items,
            active: 0,
            period,
            scheduler,
            pending: None,
        };
        carousel.rearm();
        Some(carousel)
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.active)
    }

    /// The armed auto-advance, if any.
    pub fn pending(&self) -> Option<&S::Task> {
        self.pending.as_ref()
    }

    /// Index `next()` would move to.
    pub fn next_index(&self) -> usize {
        match self.items.len() {
            0 => 0,
            len => (self.active + 1) % len,
        }
    }

    /// Index `previous()` would move to.
    pub fn previous_index(&self) -> usize {
        if self.active == 0 {
            self.items.len().saturating_sub(1)
        } else {
            self.active - 1
        }
    }

    /// Jumps to `index`. Out-of-range requests are ignored and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.set_active(index);
        true
    }

    pub fn next(&mut self) {
        self.set_active(self.next_index());
    }

    pub fn previous(&mut self) {
        self.set_active(self.previous_index());
    }

    /// The pending auto-advance fired.
    pub fn tick(&mut self) {
        if self.pending.take().is_some() {
            self.next();
        }
    }

    /// Swaps in a new list. The active index falls back to 0 if it no longer
    /// points into the list; an empty list leaves the carousel inert.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        if self.active >= self.items.len() {
            self.active = 0;
        }
        self.rearm();
    }

    fn set_active(&mut self, index: usize) {
        if index != self.active {
            self.active = index;
            self.rearm();
        }
    }

    fn rearm(&mut self) {
        if let Some(task) = self.pending.take() {
            self.scheduler.cancel(task);
        }
        if self.items.len() > 1 {
            self.pending = Some(self.scheduler.schedule(self.period));
        }
    }
}

impl<T, S: Scheduler> Drop for Carousel<T, S> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            self.scheduler.cancel(task);
        }
    }
}

/// Groups images into pages of `per_page` for the gallery grid.
pub fn pages<T: Clone>(items: &[T], per_page: usize) -> Vec<Vec<T>> {
    items.chunks(per_page.max(1)).map(<[T]>::to_vec).collect()
}
