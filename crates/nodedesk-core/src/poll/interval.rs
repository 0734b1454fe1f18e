//! Fixed-cadence runner that always invokes the latest callback.
//!
//! The runner is an explicit two-state machine, `Armed` or `Disarmed`.
//! Every config change goes through [`IntervalRunner::reconcile`], which
//! tears down the current timer and re-arms only for an enabled cadence.
//! Swapping the callback never touches the timer.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::errors::PollError;
use super::slot::CallbackSlot;
use super::types::{Cadence, TickerConfig, Trigger};

struct ArmedTimer {
    period: Duration,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl ArmedTimer {
    fn tear_down(self) {
        self.cancel.cancel();
        self.task.abort();
    }
}

enum TimerState {
    Armed(ArmedTimer),
    Disarmed,
}

pub struct IntervalRunner {
    slot: CallbackSlot,
    config: TickerConfig,
    state: TimerState,
    runtime: Handle,
    timers_armed: u64,
}

impl IntervalRunner {
    /// Activate a subscription on the current tokio runtime.
    ///
    /// With `fire_immediately` and an enabled cadence, `callback` runs once
    /// before this returns; the first periodic tick follows one period later.
    pub fn start(
        callback: Trigger,
        cadence: Cadence,
        fire_immediately: bool,
    ) -> Result<Self, PollError> {
        let runtime = Handle::try_current().map_err(|_| PollError::NoRuntime)?;
        Self::start_on(runtime, callback, cadence, fire_immediately)
    }

    /// Same as [`IntervalRunner::start`] with an explicit runtime handle.
    pub fn start_on(
        runtime: Handle,
        callback: Trigger,
        cadence: Cadence,
        fire_immediately: bool,
    ) -> Result<Self, PollError> {
        cadence.validate()?;

        let config = TickerConfig::new(cadence, fire_immediately);
        let mut runner = Self {
            slot: CallbackSlot::new(callback),
            config,
            state: TimerState::Disarmed,
            runtime,
            timers_armed: 0,
        };
        runner.transition(config);
        Ok(runner)
    }

    /// Per-render entry point: record `callback` as current, then reconcile
    /// the timer against `(cadence, fire_immediately)`.
    pub fn run_on_interval(
        &mut self,
        callback: Trigger,
        cadence: Cadence,
        fire_immediately: bool,
    ) -> Result<(), PollError> {
        cadence.validate()?;
        self.set_callback(callback);
        self.reconcile(TickerConfig::new(cadence, fire_immediately))
    }

    /// Replace the current callback without restarting the timer.
    pub fn set_callback(&self, callback: Trigger) {
        self.slot.replace(callback);
    }

    /// Apply a new config. Unchanged config leaves the timer alone.
    pub fn reconcile(&mut self, config: TickerConfig) -> Result<(), PollError> {
        config.cadence.validate()?;
        if config == self.config {
            return Ok(());
        }
        self.transition(config);
        Ok(())
    }

    /// Tear down the timer, if any, and stop ticking until reconciled again.
    pub fn disarm(&mut self) {
        self.reconcile_disabled();
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TimerState::Armed(_))
    }

    /// Number of timers this runner has armed over its lifetime.
    pub fn timers_armed(&self) -> u64 {
        self.timers_armed
    }

    pub fn cadence(&self) -> Cadence {
        self.config.cadence
    }

    pub fn config(&self) -> TickerConfig {
        self.config
    }

    fn reconcile_disabled(&mut self) {
        let config = TickerConfig::new(Cadence::Disabled, self.config.fire_immediately);
        self.transition(config);
    }

    fn transition(&mut self, config: TickerConfig) {
        if let TimerState::Armed(timer) = std::mem::replace(&mut self.state, TimerState::Disarmed)
        {
            debug!(
                event = "core.poll.timer_disarmed",
                period_ms = timer.period.as_millis() as u64
            );
            timer.tear_down();
        }

        self.config = config;

        let Some(period) = config.cadence.period() else {
            return;
        };

        if config.fire_immediately {
            self.slot.fire();
        }

        let cancel = CancellationToken::new();
        let task = spawn_ticker(&self.runtime, self.slot.clone(), period, cancel.clone());
        self.timers_armed += 1;
        debug!(
            event = "core.poll.timer_armed",
            period_ms = period.as_millis() as u64,
            fire_immediately = config.fire_immediately
        );
        self.state = TimerState::Armed(ArmedTimer {
            period,
            cancel,
            task,
        });
    }
}

impl Drop for IntervalRunner {
    fn drop(&mut self) {
        if let TimerState::Armed(timer) = std::mem::replace(&mut self.state, TimerState::Disarmed)
        {
            timer.tear_down();
        }
    }
}

impl std::fmt::Debug for IntervalRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalRunner")
            .field("config", &self.config)
            .field("armed", &self.is_armed())
            .field("timers_armed", &self.timers_armed)
            .finish()
    }
}

fn spawn_ticker(
    runtime: &Handle,
    slot: CallbackSlot,
    period: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    // First tick is one full period after arming, not after the task is first polled.
    let first_tick = Instant::now() + period;
    runtime.spawn(async move {
        let mut ticker = time::interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    if cancel.is_cancelled() {
                        break;
                    }
                    slot.fire();
                }
            }
        }
    })
}
