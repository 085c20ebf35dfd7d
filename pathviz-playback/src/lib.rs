//! Timed replay of search expansion traces.
//!
//! A [`Playback`] drives a visualization callback through a uniform-cost
//! search trace at a fixed cadence: one [`TraceEntry`] per timer tick,
//! strictly in trace order, with no skipping or reordering under timer
//! jitter. A controller plays at most one trace at a time.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::trace;
use parking_lot::ReentrantMutex;
use thiserror::Error;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time;

use pathviz_core::TraceEntry;

#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum PlaybackError {
    #[error("A trace is already being played back")]
    AlreadyRunning,

    #[error("Playback period must be non-zero")]
    ZeroPeriod,
}

pub type Result<T> = std::result::Result<T, PlaybackError>;

/// Trace playback state machine.
///
/// Idle until [`Playback::start`] succeeds, running while the timer task
/// is delivering steps, and idle again once the trace is exhausted or
/// [`Playback::cancel`] is called. Starting while running is rejected
/// rather than leaking the active timer; the timer task handle is
/// released on every transition out of the running state.
pub struct Playback {
    /// `Some` while a trace is in flight. The lock is reentrant so a
    /// step callback may call back into `cancel` on its own controller;
    /// the `RefCell` carries the mutability the reentrant lock cannot.
    state: ReentrantMutex<RefCell<Option<Running>>>,
    /// Distinguishes the current playback from stale timer tasks.
    generation: Seq,
    /// Signalled on every transition back to idle.
    done: Notify,
}

struct Running {
    generation: u64,
    timer: JoinHandle<()>,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

impl Playback {
    pub fn new() -> Self {
        Playback {
            state: ReentrantMutex::new(RefCell::new(None)),
            generation: Seq::new(0),
            done: Notify::new(),
        }
    }

    /// Begin replaying `trace`, delivering one entry to `on_step` per
    /// `period` tick; the first step lands one full period after start.
    ///
    /// Rejects with [`PlaybackError::AlreadyRunning`] when a trace is
    /// already in flight, and with [`PlaybackError::ZeroPeriod`] when the
    /// period is zero. An empty trace completes without any callback.
    pub fn start<F>(self: &Arc<Self>, trace: Vec<TraceEntry>, mut on_step: F, period: Duration) -> Result<()>
    where
        F: FnMut(&TraceEntry) + Send + 'static,
    {
        if period.is_zero() {
            return Err(PlaybackError::ZeroPeriod);
        }

        let state = self.state.lock();
        if state.borrow().is_some() {
            return Err(PlaybackError::AlreadyRunning);
        }

        let generation = self.generation.next();
        let this = Arc::clone(self);
        let timer = tokio::task::spawn(async move {
            let mut timer = time::interval(period);
            // The first interval tick completes immediately; consume it
            // so each step lands one full period after the previous one.
            timer.tick().await;

            for entry in &trace {
                timer.tick().await;

                // Deliver while holding the state lock: once a `cancel()`
                // on another thread returns, this generation is gone and
                // no further steps fire. A `cancel()` from inside the
                // callback re-enters the lock instead of deadlocking; the
                // `RefCell` borrow is released before the callback runs
                // so re-entry can take the running state.
                {
                    let state = this.state.lock();
                    let live = matches!(*state.borrow(), Some(ref running) if running.generation == generation);
                    if !live {
                        return;
                    }
                    trace!("playback step {}: {} (cost {})", entry.order, entry.node, entry.cumulative_cost);
                    on_step(entry);
                }
            }

            let state = this.state.lock();
            let finished = matches!(*state.borrow(), Some(ref running) if running.generation == generation);
            if finished {
                *state.borrow_mut() = None;
                this.done.notify_waiters();
            }
        });

        *state.borrow_mut() = Some(Running { generation, timer });
        Ok(())
    }

    /// Stop the active playback, if any; no-op when idle.
    ///
    /// Once this returns, no further `on_step` calls are delivered for
    /// the cancelled trace. Safe to call from within the `on_step`
    /// callback itself.
    pub fn cancel(&self) {
        let state = self.state.lock();
        let taken = state.borrow_mut().take();
        if let Some(running) = taken {
            running.timer.abort();
            self.done.notify_waiters();
        }
    }

    /// Whether a trace is currently being replayed.
    pub fn is_running(&self) -> bool {
        self.state.lock().borrow().is_some()
    }

    /// Wait until the controller is idle (trace exhausted or cancelled).
    /// Returns immediately when nothing is playing.
    pub async fn wait_idle(&self) {
        let mut notified = Box::pin(self.done.notified());
        loop {
            // Register interest before the state check, so a completion
            // racing with the check cannot drop its wakeup.
            notified.as_mut().enable();
            if !self.is_running() {
                return;
            }
            notified.as_mut().await;
            notified.set(self.done.notified());
        }
    }
}

/// Thread-safe sequence number generator.
struct Seq(AtomicU64);

impl Seq {
    fn new(init: u64) -> Self {
        Seq(AtomicU64::new(init))
    }

    fn next(&self) -> u64 {
        let Seq(ref counter) = self;
        counter.fetch_add(1, Ordering::Relaxed)
    }
}
