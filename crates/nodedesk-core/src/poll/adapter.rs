use tokio::runtime::Handle;

use super::errors::PollError;
use super::interval::IntervalRunner;
use super::slot::CallbackSlot;
use super::types::{Cadence, FetchPair, TickerConfig, Trigger};

/// Transparent cadence decorator over a fetch pair.
///
/// Owns neither half of the pair: `state` is handed straight back and the
/// `trigger` is kept only as "latest", so each tick dispatches whichever
/// trigger the most recent [`Poller::poll`] supplied.
#[derive(Debug)]
pub struct Poller {
    latest: CallbackSlot,
    dispatcher: Trigger,
    runner: IntervalRunner,
}

impl Poller {
    /// Start polling `pair.trigger` every `cadence` on the current runtime.
    pub fn activate<T>(
        pair: FetchPair<T>,
        cadence: Cadence,
    ) -> Result<(Self, FetchPair<T>), PollError> {
        let runtime = Handle::try_current().map_err(|_| PollError::NoRuntime)?;
        Self::activate_on(runtime, pair, cadence)
    }

    pub fn activate_on<T>(
        runtime: Handle,
        pair: FetchPair<T>,
        cadence: Cadence,
    ) -> Result<(Self, FetchPair<T>), PollError> {
        let (state, trigger) = pair.into_parts();
        let latest = CallbackSlot::new(trigger);
        let dispatcher = latest.dispatcher();
        let runner = IntervalRunner::start_on(runtime, dispatcher.clone(), cadence, false)?;
        let decorated = FetchPair::new(state, dispatcher.clone());
        Ok((
            Self {
                latest,
                dispatcher,
                runner,
            },
            decorated,
        ))
    }

    /// Per-render call: record the newest trigger, apply `cadence`, and hand
    /// back `state` untouched with a trigger that always dispatches to the
    /// newest one.
    pub fn poll<T>(
        &mut self,
        pair: FetchPair<T>,
        cadence: Cadence,
    ) -> Result<FetchPair<T>, PollError> {
        cadence.validate()?;
        let (state, trigger) = pair.into_parts();
        // Feeding back our own dispatcher would make the slot call itself.
        if !trigger.same_as(&self.dispatcher) {
            self.latest.replace(trigger);
        }
        self.runner.reconcile(TickerConfig::new(cadence, false))?;
        Ok(FetchPair::new(state, self.dispatcher.clone()))
    }

    pub fn cadence(&self) -> Cadence {
        self.runner.cadence()
    }

    pub fn is_armed(&self) -> bool {
        self.runner.is_armed()
    }

    pub fn timers_armed(&self) -> u64 {
        self.runner.timers_armed()
    }

    /// Deactivate; no tick fires after this returns.
    pub fn stop(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const PERIOD: Duration = Duration::from_secs(60);

    fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> Trigger {
        let log = Arc::clone(log);
        Trigger::new(move || log.lock().unwrap().push(name))
    }

    async fn advance(by: Duration) {
        tokio::time::advance(by).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Epoch {
        epoch: u64,
        next_validation: String,
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_passes_through_unchanged() {
        let state = Epoch {
            epoch: 42,
            next_validation: "2026-10-20T13:30:00Z".to_string(),
        };
        let (mut poller, returned) =
            Poller::activate(FetchPair::new(state.clone(), Trigger::noop()), Cadence::every(PERIOD))
                .unwrap();
        assert_eq!(returned.state, state);

        let next = Epoch {
            epoch: 43,
            ..state
        };
        let returned = poller
            .poll(FetchPair::new(next.clone(), Trigger::noop()), Cadence::every(PERIOD))
            .unwrap();
        assert_eq!(returned.state, next);
    }

    #[tokio::test(start_paused = true)]
    async fn test_returned_trigger_dispatches_to_latest() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (mut poller, first) =
            Poller::activate(FetchPair::new((), recorder(&log, "a")), Cadence::every(PERIOD))
                .unwrap();

        first.trigger.invoke();
        let second = poller
            .poll(FetchPair::new((), recorder(&log, "b")), Cadence::every(PERIOD))
            .unwrap();
        // A trigger handed out earlier still reaches the newest fetch.
        first.trigger.invoke();
        second.trigger.invoke();

        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_invokes_newest_trigger() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (mut poller, _) =
            Poller::activate(FetchPair::new((), recorder(&log, "a")), Cadence::every(PERIOD))
                .unwrap();

        advance(Duration::from_secs(30)).await;
        poller
            .poll(FetchPair::new((), recorder(&log, "b")), Cadence::every(PERIOD))
            .unwrap();
        advance(Duration::from_secs(30)).await;

        assert_eq!(*log.lock().unwrap(), vec!["b"]);
        assert_eq!(poller.timers_armed(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_does_not_fire_immediately() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (mut poller, _) =
            Poller::activate(FetchPair::new((), recorder(&log, "a")), Cadence::every(PERIOD))
                .unwrap();
        poller
            .poll(FetchPair::new((), recorder(&log, "b")), Cadence::every(PERIOD))
            .unwrap();

        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_cadence_stops_polling() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (mut poller, _) =
            Poller::activate(FetchPair::new((), recorder(&log, "a")), Cadence::every(PERIOD))
                .unwrap();

        poller
            .poll(FetchPair::new((), recorder(&log, "a")), Cadence::Disabled)
            .unwrap();
        assert!(!poller.is_armed());
        assert_eq!(poller.cadence(), Cadence::Disabled);

        advance(PERIOD * 3).await;
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_prevents_further_ticks() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (poller, returned) =
            Poller::activate(FetchPair::new((), recorder(&log, "a")), Cadence::every(PERIOD))
                .unwrap();

        advance(PERIOD).await;
        poller.stop();
        for _ in 0..4 {
            advance(PERIOD).await;
        }
        assert_eq!(*log.lock().unwrap(), vec!["a"]);

        // Manual invocation still works after the cadence is gone.
        returned.trigger.invoke();
        assert_eq!(*log.lock().unwrap(), vec!["a", "a"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_cadence_leaves_latest_trigger_alone() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (mut poller, _) =
            Poller::activate(FetchPair::new((), recorder(&log, "a")), Cadence::every(PERIOD))
                .unwrap();

        let result = poller.poll(
            FetchPair::new((), recorder(&log, "b")),
            Cadence::every(Duration::ZERO),
        );
        assert_eq!(result.err(), Some(PollError::ZeroPeriod));

        advance(PERIOD).await;
        assert_eq!(*log.lock().unwrap(), vec!["a"]);
        assert_eq!(poller.cadence(), Cadence::every(PERIOD));
    }

    #[tokio::test(start_paused = true)]
    async fn test_feeding_back_returned_trigger_keeps_latest() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (mut poller, returned) =
            Poller::activate(FetchPair::new(1u8, recorder(&log, "a")), Cadence::every(PERIOD))
                .unwrap();

        let again = poller
            .poll(FetchPair::new(2u8, returned.trigger), Cadence::every(PERIOD))
            .unwrap();
        again.trigger.invoke();
        advance(PERIOD).await;

        assert_eq!(again.state, 2);
        assert_eq!(*log.lock().unwrap(), vec!["a", "a"]);
    }
}
