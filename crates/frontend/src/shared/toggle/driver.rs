use async_trait::async_trait;
use contracts::domain::ResourceId;

use super::ToggleRequest;
use crate::shared::api_utils::GatewayError;

/// Backend side of a toggle.
#[async_trait(?Send)]
pub trait ToggleGateway {
    /// Persist `value` for `id`. Returns the value the backend holds afterwards.
    async fn set_state(&self, id: &str, value: bool) -> Result<bool, GatewayError>;
}

/// Send `first`, then whatever `settle` asks for next, one write at a time.
///
/// `settle` feeds each outcome back into the [`super::ToggleBook`]. Stops at the
/// first failure and returns it so the caller can notify the user.
pub async fn drive<G, S>(
    gateway: &G,
    first: ToggleRequest,
    mut settle: S,
) -> Result<(), GatewayError>
where
    G: ToggleGateway + ?Sized,
    S: FnMut(&ResourceId, Result<bool, String>) -> Option<ToggleRequest>,
{
    let mut next = Some(first);
    while let Some(request) = next {
        match gateway.set_state(&request.id, request.value).await {
            Ok(value) => {
                next = settle(&request.id, Ok(value));
            }
            Err(e) => {
                log::warn!("toggle '{}' -> {} failed: {}", request.id, request.value, e);
                settle(&request.id, Err(e.to_string()));
                return Err(e);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toggle::{ToggleBook, ToggleState};
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records calls and answers from a script; `None` in the script means "echo".
    struct FakeGateway {
        calls: RefCell<Vec<(String, bool)>>,
        script: RefCell<VecDeque<Option<Result<bool, GatewayError>>>>,
    }

    impl FakeGateway {
        fn echo() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                script: RefCell::new(VecDeque::new()),
            }
        }

        fn scripted(answers: Vec<Option<Result<bool, GatewayError>>>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                script: RefCell::new(answers.into()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ToggleGateway for FakeGateway {
        async fn set_state(&self, id: &str, value: bool) -> Result<bool, GatewayError> {
            self.calls.borrow_mut().push((id.to_string(), value));
            match self.script.borrow_mut().pop_front().flatten() {
                Some(answer) => answer,
                None => Ok(value),
            }
        }
    }

    fn run(
        book: &RefCell<ToggleBook>,
        gateway: &FakeGateway,
        first: ToggleRequest,
    ) -> Result<(), GatewayError> {
        block_on(drive(gateway, first, |id, result| {
            book.borrow_mut().settle(id, result)
        }))
    }

    #[test]
    fn test_double_click_is_serialized() {
        let book = RefCell::new(ToggleBook::new());
        book.borrow_mut().seed("l1", false);

        let first = book.borrow_mut().toggle("l1").unwrap().request.unwrap();
        // second click lands before the first write resolves
        assert!(book.borrow_mut().toggle("l1").unwrap().request.is_none());

        let gateway = FakeGateway::echo();
        assert!(run(&book, &gateway, first).is_ok());

        assert_eq!(
            *gateway.calls.borrow(),
            vec![("l1".to_string(), true), ("l1".to_string(), false)]
        );
        assert_eq!(book.borrow().state("l1"), Some(ToggleState::Confirmed(false)));
    }

    #[test]
    fn test_server_error_rolls_back() {
        let book = RefCell::new(ToggleBook::new());
        book.borrow_mut().seed("l1", false);
        let first = book.borrow_mut().toggle("l1").unwrap().request.unwrap();
        assert_eq!(book.borrow().visible("l1"), Some(true));

        let gateway = FakeGateway::scripted(vec![Some(Err(GatewayError::from_status(500, "")))]);
        let err = run(&book, &gateway, first).unwrap_err();

        assert_eq!(err.to_string(), "Request failed with status 500");
        assert_eq!(book.borrow().visible("l1"), Some(false));
        assert!(matches!(
            book.borrow().state("l1"),
            Some(ToggleState::Failed { old: false, .. })
        ));
        assert_eq!(gateway.calls.borrow().len(), 1);
    }

    #[test]
    fn test_error_on_queued_write_stops() {
        let book = RefCell::new(ToggleBook::new());
        book.borrow_mut().seed("b1", true);
        let first = book.borrow_mut().toggle("b1").unwrap().request.unwrap();
        book.borrow_mut().toggle("b1").unwrap();

        let gateway =
            FakeGateway::scripted(vec![None, Some(Err(GatewayError::Timeout(10_000)))]);
        assert_eq!(run(&book, &gateway, first), Err(GatewayError::Timeout(10_000)));

        // first write (false) was confirmed, the second one failed
        assert_eq!(book.borrow().visible("b1"), Some(false));
        assert_eq!(gateway.calls.borrow().len(), 2);
    }
}
