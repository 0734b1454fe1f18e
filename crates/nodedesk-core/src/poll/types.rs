use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::errors::PollError;

/// Longest period a timer accepts: one year.
pub const MAX_PERIOD: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Time between ticks, or `Disabled` for no ticking at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cadence {
    Every(Duration),
    Disabled,
}

impl Cadence {
    pub fn every(period: Duration) -> Self {
        Cadence::Every(period)
    }

    pub fn from_secs(secs: u64) -> Self {
        Cadence::Every(Duration::from_secs(secs))
    }

    /// Map an optional period to a cadence; `None` disables ticking.
    pub fn from_option(period: Option<Duration>) -> Self {
        match period {
            Some(period) => Cadence::Every(period),
            None => Cadence::Disabled,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        match self {
            Cadence::Every(period) => Some(*period),
            Cadence::Disabled => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Cadence::Every(_))
    }

    /// Reject cadences a timer cannot run on.
    pub fn validate(&self) -> Result<(), PollError> {
        match self {
            Cadence::Every(period) if period.is_zero() => Err(PollError::ZeroPeriod),
            Cadence::Every(period) if *period > MAX_PERIOD => Err(PollError::PeriodTooLong {
                secs: period.as_secs(),
                max_secs: MAX_PERIOD.as_secs(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cadence::Every(period) => write!(f, "every {}ms", period.as_millis()),
            Cadence::Disabled => write!(f, "disabled"),
        }
    }
}

/// The part of a subscription whose change forces the timer to restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerConfig {
    pub cadence: Cadence,
    pub fire_immediately: bool,
}

impl TickerConfig {
    pub fn new(cadence: Cadence, fire_immediately: bool) -> Self {
        Self {
            cadence,
            fire_immediately,
        }
    }
}

/// A cloneable zero-argument operation invoked on each tick.
#[derive(Clone)]
pub struct Trigger(Arc<dyn Fn() + Send + Sync>);

impl Trigger {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn invoke(&self) {
        (self.0)()
    }

    /// Whether both handles wrap the same closure allocation.
    pub fn same_as(&self, other: &Trigger) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger").finish_non_exhaustive()
    }
}

/// A `(state, trigger)` pair produced by a data-fetching collaborator.
///
/// Invoking `trigger` is expected to eventually refresh whatever `state`
/// was read from; the polling code never looks inside `state`.
#[derive(Debug, Clone)]
pub struct FetchPair<T> {
    pub state: T,
    pub trigger: Trigger,
}

impl<T> FetchPair<T> {
    pub fn new(state: T, trigger: Trigger) -> Self {
        Self { state, trigger }
    }

    pub fn into_parts(self) -> (T, Trigger) {
        (self.state, self.trigger)
    }
}
