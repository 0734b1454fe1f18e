use crate::errors::DeskError;

/// Failures of the polling machinery itself.
///
/// Failures raised by the polled callback are never reported here; see
/// [`super::slot::CallbackSlot::fire`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollError {
    #[error("Polling requires a running tokio runtime")]
    NoRuntime,

    #[error("Poll cadence must be greater than zero")]
    ZeroPeriod,

    #[error("Poll cadence of {secs}s exceeds the maximum of {max_secs}s")]
    PeriodTooLong { secs: u64, max_secs: u64 },
}

impl DeskError for PollError {
    fn error_code(&self) -> &'static str {
        match self {
            PollError::NoRuntime => "POLL_NO_RUNTIME",
            PollError::ZeroPeriod => "POLL_ZERO_PERIOD",
            PollError::PeriodTooLong { .. } => "POLL_PERIOD_TOO_LONG",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            PollError::ZeroPeriod | PollError::PeriodTooLong { .. }
        )
    }
}
