//! # Polling primitives
//!
//! Two layers:
//!
//! - [`IntervalRunner`] runs a callback on a fixed [`Cadence`], always the
//!   most recently supplied one, with at most one timer armed at a time.
//! - [`Poller`] decorates a [`FetchPair`] with a cadence and hands the pair
//!   back untouched.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use nodedesk_core::poll::{Cadence, FetchPair, Poller, Trigger};
//!
//! # async fn example() -> Result<(), nodedesk_core::poll::PollError> {
//! let pair = FetchPair::new(0u64, Trigger::new(|| println!("refetch")));
//! let (mut poller, pair) = Poller::activate(pair, Cadence::every(Duration::from_secs(60)))?;
//!
//! // Later, on the next render, with a fresh pair:
//! let pair = poller.poll(FetchPair::new(pair.state + 1, pair.trigger), Cadence::Disabled)?;
//! # let _ = pair;
//! # Ok(())
//! # }
//! ```
//!
//! A panicking callback is caught and logged; the timer stays armed.

pub mod adapter;
pub mod errors;
pub mod interval;
pub mod slot;
pub mod types;

pub use adapter::Poller;
pub use errors::PollError;
pub use interval::IntervalRunner;
pub use slot::CallbackSlot;
pub use types::{Cadence, FetchPair, MAX_PERIOD, TickerConfig, Trigger};
