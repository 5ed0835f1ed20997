// SPDX-License-Identifier: MPL-2.0
//! Cancellable timers driving auto-hide and progress refresh.
//!
//! A timer is a tokio task that sends [`TimerFired`] into the owner's
//! channel. Every start or cancel bumps a generation counter, and the owner
//! drops firings whose generation is no longer current. This covers the
//! window where a task already sent its event but was cancelled before the
//! owner read it.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Which timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    AutoHide,
    Progress,
}

/// Message sent by a timer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub kind: TimerKind,
    pub generation: u64,
}

/// One restartable timer.
#[derive(Debug)]
pub struct ScheduledTask {
    kind: TimerKind,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    #[must_use]
    pub fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            generation: 0,
            handle: None,
        }
    }

    /// Returns true while a task is scheduled and has not finished.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Returns true if `fired` comes from the currently scheduled task.
    #[must_use]
    pub fn accepts(&self, fired: TimerFired) -> bool {
        fired.kind == self.kind && fired.generation == self.generation
    }

    /// Aborts the scheduled task, if any, and invalidates its pending firings.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Restarts the timer to fire once after `delay`.
    ///
    /// Returns `false` when no tokio runtime is available.
    pub fn start_once(&mut self, delay: Duration, sender: &UnboundedSender<TimerFired>) -> bool {
        self.cancel();
        let Some(runtime) = current_runtime(self.kind) else {
            return false;
        };
        let fired = self.fired();
        let sender = sender.clone();
        self.handle = Some(runtime.spawn(async move {
            time::sleep(delay).await;
            let _ = sender.send(fired);
        }));
        true
    }

    /// Restarts the timer to fire every `period`, first after one period.
    ///
    /// Returns `false` when no tokio runtime is available.
    pub fn start_periodic(
        &mut self,
        period: Duration,
        sender: &UnboundedSender<TimerFired>,
    ) -> bool {
        self.cancel();
        let Some(runtime) = current_runtime(self.kind) else {
            return false;
        };
        let fired = self.fired();
        let sender = sender.clone();
        self.handle = Some(runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(fired).is_err() {
                    break;
                }
            }
        }));
        true
    }

    fn fired(&self) -> TimerFired {
        TimerFired {
            kind: self.kind,
            generation: self.generation,
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

fn current_runtime(kind: TimerKind) -> Option<Handle> {
    match Handle::try_current() {
        Ok(handle) => Some(handle),
        Err(_) => {
            log::debug!("No tokio runtime, {kind:?} timer not scheduled");
            None
        }
    }
}
