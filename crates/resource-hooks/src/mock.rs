//! # Mock Remotes & Testing Guide
//!
//! [`MockRemote<T>`] hands out a real [`RemoteClient<T>`] whose requests are answered from
//! a queue of scripted expectations instead of a [`RemoteActor`](crate::RemoteActor). It
//! also records every request payload, so a test can assert *what* a hook sent, not only
//! what it did with the answer.
//!
//! ## When to use Mocks vs a Real Remote
//!
//! | Feature | MockRemote | RemoteActor |
//! |---------|------------|-------------|
//! | **Determinism** | Scripted answers | Fixture document + latency |
//! | **Error Injection** | `return_err` on any call | `fail_next` for one request |
//! | **Request capture** | Yes (`take_calls`) | No |
//! | **Use Case** | Unit-testing a feature hook | End-to-end flows |
//!
//! ## Example
//!
//! ```rust
//! use resource_hooks::mock::{Call, MockRemote};
//! use resource_hooks::{AdapterError, RemoteEntity};
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Flag { on: bool }
//!
//! impl RemoteEntity for Flag {
//!     type Patch = bool;
//!     type ItemId = Infallible;
//!     type Action = Infallible;
//!     type Error = Infallible;
//!     fn apply_patch(&mut self, on: bool) -> Result<(), Infallible> { self.on = on; Ok(()) }
//!     fn remove_item(&mut self, id: &Infallible) -> Result<(), Infallible> { match *id {} }
//!     fn handle_action(&mut self, action: Infallible) -> Result<(), Infallible> { match action {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockRemote::<Flag>::new();
//!     mock.expect_get().return_err(AdapterError::Remote("offline".into()));
//!     mock.expect_update().return_ok(Flag { on: true });
//!
//!     let client = mock.client();
//!     assert!(client.get().await.is_err());
//!     assert_eq!(client.update(true).await.unwrap(), Flag { on: true });
//!
//!     let calls = mock.take_calls();
//!     assert!(matches!(calls[1], Call::Update(true)));
//!     mock.verify();
//! }
//! ```
//!
//! For races, use [`create_mock_client`] with the `expect_*` helpers and answer the
//! captured responders in whatever order the test needs.

use crate::client::RemoteClient;
use crate::entity::RemoteEntity;
use crate::error::AdapterError;
use crate::message::{RemoteRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: RemoteEntity> {
    Get(Result<T, AdapterError>),
    Update(Result<T, AdapterError>),
    Remove(Result<(), AdapterError>),
    Action(Result<T, AdapterError>),
}

/// A request received by a [`MockRemote`], with its payload.
pub enum Call<T: RemoteEntity> {
    Get,
    Update(T::Patch),
    Remove(T::ItemId),
    Action(T::Action),
}

struct Shared<T: RemoteEntity> {
    expectations: VecDeque<Expectation<T>>,
    calls: Vec<Call<T>>,
    mismatches: Vec<String>,
}

/// A scripted remote with expectation tracking.
pub struct MockRemote<T: RemoteEntity> {
    client: RemoteClient<T>,
    shared: Arc<Mutex<Shared<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RemoteEntity> Default for MockRemote<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RemoteEntity> MockRemote<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RemoteRequest<T>>(100);
        let shared = Arc::new(Mutex::new(Shared {
            expectations: VecDeque::new(),
            calls: Vec::new(),
            mismatches: Vec::new(),
        }));
        let task_shared = shared.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut shared = task_shared.lock().unwrap();
                match request {
                    RemoteRequest::FailNext { respond_to, .. } => {
                        let _ = respond_to.send(Ok(()));
                    }
                    RemoteRequest::Get { respond_to } => {
                        shared.calls.push(Call::Get);
                        let next = shared.expectations.pop_front();
                        let answer = match next {
                            Some(Expectation::Get(response)) => response,
                            other => Err(shared.mismatch("get", other.is_some())),
                        };
                        let _ = respond_to.send(answer);
                    }
                    RemoteRequest::Update { patch, respond_to } => {
                        shared.calls.push(Call::Update(patch));
                        let next = shared.expectations.pop_front();
                        let answer = match next {
                            Some(Expectation::Update(response)) => response,
                            other => Err(shared.mismatch("update", other.is_some())),
                        };
                        let _ = respond_to.send(answer);
                    }
                    RemoteRequest::Remove { id, respond_to } => {
                        shared.calls.push(Call::Remove(id));
                        let next = shared.expectations.pop_front();
                        let answer = match next {
                            Some(Expectation::Remove(response)) => response,
                            other => Err(shared.mismatch("remove", other.is_some())),
                        };
                        let _ = respond_to.send(answer);
                    }
                    RemoteRequest::Action { action, respond_to } => {
                        shared.calls.push(Call::Action(action));
                        let next = shared.expectations.pop_front();
                        let answer = match next {
                            Some(Expectation::Action(response)) => response,
                            other => Err(shared.mismatch("action", other.is_some())),
                        };
                        let _ = respond_to.send(answer);
                    }
                }
            }
        });

        Self {
            client: RemoteClient::new(sender),
            shared,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RemoteClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.shared.clone(), Expectation::Get)
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.shared.clone(), Expectation::Update)
    }

    pub fn expect_remove(&mut self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.shared.clone(), Expectation::Remove)
    }

    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.shared.clone(), Expectation::Action)
    }

    /// Drains the requests received so far, oldest first.
    pub fn take_calls(&self) -> Vec<Call<T>> {
        std::mem::take(&mut self.shared.lock().unwrap().calls)
    }

    /// Number of requests received so far that have not been taken.
    pub fn call_count(&self) -> usize {
        self.shared.lock().unwrap().calls.len()
    }

    /// Panics if an expectation is left over or a request did not match the script.
    pub fn verify(&self) {
        let shared = self.shared.lock().unwrap();
        if !shared.mismatches.is_empty() {
            panic!("Unexpected requests: {}", shared.mismatches.join(", "));
        }
        if !shared.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                shared.expectations.len()
            );
        }
    }
}

impl<T: RemoteEntity> Shared<T> {
    fn mismatch(&mut self, op: &str, had_expectation: bool) -> AdapterError {
        let detail = if had_expectation {
            format!("{op} (script expected another request)")
        } else {
            format!("{op} (script exhausted)")
        };
        self.mismatches.push(detail.clone());
        AdapterError::Remote(format!("unexpected request: {detail}"))
    }
}

/// Builder for one scripted answer. `R` is the success type of the request.
pub struct ExpectationBuilder<T: RemoteEntity, R> {
    shared: Arc<Mutex<Shared<T>>>,
    wrap: fn(Result<R, AdapterError>) -> Expectation<T>,
}

impl<T: RemoteEntity, R> ExpectationBuilder<T, R> {
    fn new(shared: Arc<Mutex<Shared<T>>>, wrap: fn(Result<R, AdapterError>) -> Expectation<T>) -> Self {
        Self { shared, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: AdapterError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, AdapterError>) {
        let expectation = (self.wrap)(response);
        self.shared.lock().unwrap().expectations.push_back(expectation);
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the backend: it pulls requests with the `expect_*` helpers below and
/// answers through the returned responders, in any order.
pub fn create_mock_client<T: RemoteEntity>(
    buffer_size: usize,
) -> (RemoteClient<T>, mpsc::Receiver<RemoteRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RemoteClient::new(sender), receiver)
}

/// Next message must be a Get request.
pub async fn expect_get<T: RemoteEntity>(
    receiver: &mut mpsc::Receiver<RemoteRequest<T>>,
) -> Option<Response<T>> {
    match receiver.recv().await {
        Some(RemoteRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be an Update request.
pub async fn expect_update<T: RemoteEntity>(
    receiver: &mut mpsc::Receiver<RemoteRequest<T>>,
) -> Option<(T::Patch, Response<T>)> {
    match receiver.recv().await {
        Some(RemoteRequest::Update { patch, respond_to }) => Some((patch, respond_to)),
        _ => None,
    }
}

/// Next message must be a Remove request.
pub async fn expect_remove<T: RemoteEntity>(
    receiver: &mut mpsc::Receiver<RemoteRequest<T>>,
) -> Option<(T::ItemId, Response<()>)> {
    match receiver.recv().await {
        Some(RemoteRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be an Action request.
pub async fn expect_action<T: RemoteEntity>(
    receiver: &mut mpsc::Receiver<RemoteRequest<T>>,
) -> Option<(T::Action, Response<T>)> {
    match receiver.recv().await {
        Some(RemoteRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        text: String,
    }

    impl RemoteEntity for Note {
        type Patch = String;
        type ItemId = u32;
        type Action = Infallible;
        type Error = Infallible;

        fn apply_patch(&mut self, text: String) -> Result<(), Infallible> {
            self.text = text;
            Ok(())
        }

        fn remove_item(&mut self, _id: &u32) -> Result<(), Infallible> {
            Ok(())
        }

        fn handle_action(&mut self, action: Infallible) -> Result<(), Infallible> {
            match action {}
        }
    }

    #[tokio::test]
    async fn test_manual_client_round_trip() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let update_task = tokio::spawn(async move { client.update("hello".to_string()).await });

        let (patch, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(patch, "hello");
        responder
            .send(Ok(Note {
                text: "hello".to_string(),
            }))
            .unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result.unwrap().text, "hello");
    }

    #[tokio::test]
    async fn test_mock_records_calls_and_verifies() {
        let mut mock = MockRemote::<Note>::new();
        mock.expect_get().return_ok(Note {
            text: "draft".to_string(),
        });
        mock.expect_remove().return_err(AdapterError::Remote("offline".into()));

        let client = mock.client();
        assert_eq!(client.get().await.unwrap().text, "draft");
        assert_eq!(
            client.remove(7).await,
            Err(AdapterError::Remote("offline".into()))
        );

        let calls = mock.take_calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], Call::Get));
        assert!(matches!(calls[1], Call::Remove(7)));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected requests")]
    async fn test_unscripted_request_fails_verify() {
        let mock = MockRemote::<Note>::new();
        let result = mock.client().get().await;
        assert!(result.is_err());
        mock.verify();
    }
}
