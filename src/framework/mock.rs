//! Utilities for testing clients and sessions in isolation.
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are
//! served from a scripted queue of expectations instead of a live actor.
//! Tests enqueue expectations, run the code under test, then call
//! [`MockClient::verify`] to assert every expectation was consumed.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One scripted request/response pair.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "Get",
            Expectation::Create { .. } => "Create",
            Expectation::List { .. } => "List",
            Expectation::Action { .. } => "Action",
        }
    }
}

/// A mock client with expectation tracking.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Restaurant>::new();
/// mock.expect_get().return_ok(Some(restaurant));
///
/// let client = mock.client();
/// // exercise code under test ...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: crate::framework::client::ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with an empty expectation queue. Spawns a background
    /// task that answers each incoming request from the queue, panicking on
    /// any mismatch.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let scripted = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = scripted.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let got = match request {
                            ResourceRequest::Create { .. } => "Create",
                            ResourceRequest::Get { .. } => "Get",
                            ResourceRequest::List { .. } => "List",
                            ResourceRequest::Update { .. } => "Update",
                            ResourceRequest::Delete { .. } => "Delete",
                            ResourceRequest::Action { .. } => "Action",
                        };
                        match expectation {
                            Some(e) => panic!("mock expected {} request, got {}", e.kind(), got),
                            None => panic!("unexpected {} request, no expectation queued", got),
                        }
                    }
                }
            }
        });

        Self {
            client: crate::framework::client::ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client handle for the code under test.
    pub fn client(&self) -> crate::framework::client::ResourceClient<T> {
        self.client.clone()
    }

    /// Queues a `get` expectation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder {
            mock: self,
            wrap: |response| Expectation::Get { response },
        }
    }

    /// Queues a `create` expectation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T::Id> {
        ExpectationBuilder {
            mock: self,
            wrap: |response| Expectation::Create { response },
        }
    }

    /// Queues a `list` expectation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<'_, T, Vec<T>> {
        ExpectationBuilder {
            mock: self,
            wrap: |response| Expectation::List { response },
        }
    }

    /// Queues an `action` expectation.
    pub fn expect_action(&mut self) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder {
            mock: self,
            wrap: |response| Expectation::Action { response },
        }
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("not all expectations were met, {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that attaches the scripted response to a queued expectation.
pub struct ExpectationBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<'a, T: ActorEntity, R> ExpectationBuilder<'a, T, R> {
    /// The scripted request resolves with `value`.
    pub fn return_ok(self, value: R) {
        self.mock
            .expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Ok(value)));
    }

    /// The scripted request is rejected with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.mock
            .expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Err(error)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Menu, Restaurant};

    #[tokio::test]
    async fn scripted_get_and_create() {
        let mut mock = MockClient::<Restaurant>::new();
        mock.expect_get().return_ok(Some(Restaurant::new(
            "cheese-curd-city",
            "Cheese Curd City",
            Menu::default(),
        )));
        mock.expect_get().return_ok(None);

        let client = mock.client();

        let found = client.get("cheese-curd-city".to_string()).await.unwrap();
        assert_eq!(found.unwrap().name, "Cheese Curd City");

        let missing = client.get("no-such-place".to_string()).await.unwrap();
        assert!(missing.is_none());

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "not all expectations")]
    async fn verify_fails_on_unconsumed_expectations() {
        let mut mock = MockClient::<Restaurant>::new();
        mock.expect_get().return_ok(None);
        mock.verify();
    }
}
