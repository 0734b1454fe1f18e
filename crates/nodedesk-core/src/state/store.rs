use super::events::Event;
use super::types::Command;

/// Trait for dispatching settings commands.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received.
/// - **Events**: On success, dispatch returns the events describing what
///   changed. Each command currently produces exactly one event.
/// - **Notifications**: Implementations notify the user only after the
///   underlying action succeeded.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_trait_is_implementable() {
        struct TestStore;
        impl Store for TestStore {
            type Error = String;
            fn dispatch(&mut self, _cmd: Command) -> Result<Vec<Event>, String> {
                Ok(vec![Event::FlipsCleared { count: 0 }])
            }
        }
        let mut store = TestStore;
        let result = store.dispatch(Command::ClearFlips);
        assert_eq!(result.unwrap().len(), 1);
    }

    #[test]
    fn test_store_impl_can_return_error() {
        struct FailingStore;
        impl Store for FailingStore {
            type Error = String;
            fn dispatch(&mut self, _cmd: Command) -> Result<Vec<Event>, String> {
                Err("not implemented".to_string())
            }
        }
        let mut store = FailingStore;
        assert!(store.dispatch(Command::ClearInvites).is_err());
    }
}
