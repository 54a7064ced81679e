//! # Async-Resource Hook
//!
//! [`ResourceHook`] is the per-screen unit that owns one remote-backed value. It keeps
//! the observable [`ResourceState`] (`data`, `is_loading`, `is_busy`, `error`), runs the
//! initial fetch exactly once when mounted, and exposes `refetch` plus generic mutation
//! entry points that feature hooks wrap into named actions.
//!
//! ## State machine
//!
//! ```text
//! Idle(no data) --mount--> Loading --ok--> Loaded(data)
//!                                  --err-> Failed(previous data?, error)
//! Loaded | Failed --refetch--> Loading (previous data kept until the attempt settles)
//! ```
//!
//! A failed fetch or mutation never clears data that was already loaded; it only records
//! the fixed, human-readable message configured for that action. The underlying error is
//! logged and otherwise dropped.
//!
//! ## Flags
//!
//! `is_loading` and `is_busy` are set when a call starts and cleared by a scope guard, so
//! they are reset on every path out of the call, including the future being dropped.
//!
//! ## Overlapping calls
//!
//! Calls are neither queued nor de-duplicated. With [`StalePolicy::LastSettledWins`] the
//! response that settles last overwrites the others. [`StalePolicy::LatestIssuedWins`]
//! tags every call with a monotonically increasing token and discards responses from
//! calls that were superseded by a newer call of the same kind. Fetches and mutations
//! are fenced separately, so a write issued during a load never discards the load.

use crate::adapter::ReadAdapter;
use crate::error::AdapterError;
use crate::scope::{MountScope, MountToken};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Observable state of one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    /// `None` until the first successful fetch.
    pub data: Option<T>,
    pub is_loading: bool,
    /// Set while a mutation is in flight (`is_saving` / `is_toggling` in feature hooks).
    pub is_busy: bool,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_busy: false,
            error: None,
        }
    }
}

/// How a hook treats responses that settle out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Every settled response is applied; the last one to settle wins.
    #[default]
    LastSettledWins,
    /// Only the most recently issued fetch and the most recently issued mutation may
    /// touch the state.
    LatestIssuedWins,
}

/// What happened to the hook's state as a result of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was written to the state.
    Applied,
    /// A precondition failed; no remote call was issued.
    Skipped,
    /// The remote call failed; the error message was recorded.
    Failed,
    /// The call settled after its scope was unmounted or after being superseded.
    Discarded,
}

#[derive(Debug, Clone, Copy)]
enum Flag {
    Loading,
    Busy,
}

struct HookInner<T> {
    name: &'static str,
    reader: Box<dyn ReadAdapter<T>>,
    fetch_error: String,
    policy: StalePolicy,
    state: watch::Sender<ResourceState<T>>,
    issued: AtomicU64,
    latest_fetch: AtomicU64,
    latest_mutation: AtomicU64,
    mount: MountToken,
}

/// Builder for [`ResourceHook`].
pub struct ResourceHookBuilder<T> {
    name: &'static str,
    reader: Box<dyn ReadAdapter<T>>,
    fetch_error: Option<String>,
    policy: StalePolicy,
}

impl<T> ResourceHookBuilder<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Message recorded when a fetch fails. Defaults to `"Failed to load {name}"`.
    pub fn fetch_error(mut self, message: impl Into<String>) -> Self {
        self.fetch_error = Some(message.into());
        self
    }

    pub fn policy(mut self, policy: StalePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Creates the hook inside `scope` and starts the initial fetch in the background.
    ///
    /// `is_loading` is already `true` when this returns. Must be called from within a
    /// Tokio runtime.
    pub fn mount(self, scope: &MountScope) -> ResourceHook<T> {
        let (state, _) = watch::channel(ResourceState::default());
        let hook = ResourceHook {
            inner: Arc::new(HookInner {
                name: self.name,
                fetch_error: self
                    .fetch_error
                    .unwrap_or_else(|| format!("Failed to load {}", self.name)),
                reader: self.reader,
                policy: self.policy,
                state,
                issued: AtomicU64::new(0),
                latest_fetch: AtomicU64::new(0),
                latest_mutation: AtomicU64::new(0),
                mount: scope.token(),
            }),
        };
        debug!(resource = hook.inner.name, scope = scope.name(), "Mounted");

        let token = hook.begin(Flag::Loading);
        let initial = hook.clone();
        tokio::spawn(async move {
            initial.complete_fetch(token).await;
        });
        hook
    }
}

/// A remote-backed resource owned by one screen.
pub struct ResourceHook<T> {
    inner: Arc<HookInner<T>>,
}

impl<T> Clone for ResourceHook<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> ResourceHook<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Starts building a hook named `name` that loads through `reader`.
    pub fn builder(name: &'static str, reader: impl ReadAdapter<T> + 'static) -> ResourceHookBuilder<T> {
        ResourceHookBuilder {
            name,
            reader: Box::new(reader),
            fetch_error: None,
            policy: StalePolicy::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ResourceState<T> {
        self.inner.state.borrow().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.inner.state.borrow().data.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResourceState<T>> {
        self.inner.state.subscribe()
    }

    /// Waits until neither a fetch nor a mutation is in flight and returns that state.
    ///
    /// Never resolves for a hook whose scope was unmounted mid-call.
    pub async fn settled(&self) -> ResourceState<T> {
        let mut rx = self.subscribe();
        let state = match rx.wait_for(|s| !s.is_loading && !s.is_busy).await {
            Ok(state) => state.clone(),
            Err(_) => self.snapshot(),
        };
        state
    }

    /// Fetches the resource again. Previously loaded data stays visible until this settles.
    pub async fn refetch(&self) -> Outcome {
        let token = self.begin(Flag::Loading);
        self.complete_fetch(token).await
    }

    /// Runs a write whose response is the whole resource and replaces the local value.
    pub async fn mutate<F>(&self, action: &'static str, failure: &str, call: F) -> Outcome
    where
        F: Future<Output = Result<T, AdapterError>>,
    {
        self.run_mutation(action, failure, call, |slot, value: &T| {
            *slot = Some(value.clone())
        })
        .await
        .0
    }

    /// Runs a write and, on success, patches the loaded value locally with `apply`.
    ///
    /// Returns [`Outcome::Skipped`] without polling `call` if no value has been loaded yet.
    pub async fn mutate_in_place<R, F, A>(
        &self,
        action: &'static str,
        failure: &str,
        call: F,
        apply: A,
    ) -> Outcome
    where
        F: Future<Output = Result<R, AdapterError>>,
        A: FnOnce(&mut T, &R),
    {
        if self.inner.state.borrow().data.is_none() {
            debug!(resource = self.inner.name, action, "Nothing loaded, mutation skipped");
            return Outcome::Skipped;
        }
        self.run_mutation(action, failure, call, |slot, value| {
            if let Some(data) = slot.as_mut() {
                apply(data, value);
            }
        })
        .await
        .0
    }

    /// Like [`ResourceHook::mutate`], but also hands the failure back to the caller after
    /// recording it.
    pub async fn mutate_or_raise<F>(
        &self,
        action: &'static str,
        failure: &str,
        call: F,
    ) -> Result<T, AdapterError>
    where
        F: Future<Output = Result<T, AdapterError>>,
    {
        self.run_mutation(action, failure, call, |slot, value: &T| {
            *slot = Some(value.clone())
        })
        .await
        .1
    }

    fn begin(&self, flag: Flag) -> u64 {
        let token = self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
        match flag {
            Flag::Loading => self.inner.latest_fetch.store(token, Ordering::SeqCst),
            Flag::Busy => self.inner.latest_mutation.store(token, Ordering::SeqCst),
        }
        self.inner.state.send_modify(|s| match flag {
            Flag::Loading => s.is_loading = true,
            Flag::Busy => s.is_busy = true,
        });
        token
    }

    fn finish(&self, flag: Flag, token: u64) {
        if !self.inner.mount.is_mounted() {
            return;
        }
        if self.inner.policy == StalePolicy::LatestIssuedWins && self.latest(flag) != token {
            return;
        }
        self.inner.state.send_modify(|s| match flag {
            Flag::Loading => s.is_loading = false,
            Flag::Busy => s.is_busy = false,
        });
    }

    /// Whether a call of kind `flag` holding `token` may still write to the state.
    fn accepts(&self, flag: Flag, token: u64, action: &'static str) -> bool {
        let resource = self.inner.name;
        if !self.inner.mount.is_mounted() {
            debug!(resource, action, "Settled after unmount, discarded");
            return false;
        }
        if self.inner.policy == StalePolicy::LatestIssuedWins && self.latest(flag) != token {
            debug!(resource, action, token, "Superseded, discarded");
            return false;
        }
        true
    }

    fn latest(&self, flag: Flag) -> u64 {
        match flag {
            Flag::Loading => self.inner.latest_fetch.load(Ordering::SeqCst),
            Flag::Busy => self.inner.latest_mutation.load(Ordering::SeqCst),
        }
    }

    async fn complete_fetch(&self, token: u64) -> Outcome {
        let _loading = scopeguard::guard(token, |token| self.finish(Flag::Loading, token));
        let resource = self.inner.name;

        let result = self.inner.reader.get().await;
        if !self.accepts(Flag::Loading, token, "fetch") {
            return Outcome::Discarded;
        }

        match result {
            Ok(value) => {
                self.inner.state.send_modify(|s| {
                    s.data = Some(value);
                    s.error = None;
                });
                info!(resource, "Loaded");
                Outcome::Applied
            }
            Err(e) => {
                warn!(resource, error = %e, "Fetch failed");
                let message = self.inner.fetch_error.clone();
                self.inner.state.send_modify(|s| s.error = Some(message));
                Outcome::Failed
            }
        }
    }

    async fn run_mutation<R, F, A>(
        &self,
        action: &'static str,
        failure: &str,
        call: F,
        apply: A,
    ) -> (Outcome, Result<R, AdapterError>)
    where
        F: Future<Output = Result<R, AdapterError>>,
        A: FnOnce(&mut Option<T>, &R),
    {
        let token = self.begin(Flag::Busy);
        let _busy = scopeguard::guard(token, |token| self.finish(Flag::Busy, token));
        let resource = self.inner.name;

        let result = call.await;
        if !self.accepts(Flag::Busy, token, action) {
            return (Outcome::Discarded, result);
        }

        let outcome = match &result {
            Ok(value) => {
                self.inner.state.send_modify(|s| {
                    apply(&mut s.data, value);
                    s.error = None;
                });
                info!(resource, action, "Mutation applied");
                Outcome::Applied
            }
            Err(e) => {
                warn!(resource, action, error = %e, "Mutation failed");
                let message = failure.to_string();
                self.inner.state.send_modify(|s| s.error = Some(message));
                Outcome::Failed
            }
        };
        (outcome, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Answers reads from a script, one entry per call.
    struct Scripted(Mutex<VecDeque<Result<u32, AdapterError>>>);

    impl Scripted {
        fn new(script: Vec<Result<u32, AdapterError>>) -> Self {
            Self(Mutex::new(script.into()))
        }
    }

    #[async_trait]
    impl ReadAdapter<u32> for Scripted {
        async fn get(&self) -> Result<u32, AdapterError> {
            self.0
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AdapterError::Remote("script exhausted".into())))
        }
    }

    #[tokio::test]
    async fn test_mount_sets_loading_before_returning() {
        let scope = MountScope::new("test");
        let hook = ResourceHook::builder("counter", Scripted::new(vec![Ok(1)])).mount(&scope);
        assert!(hook.snapshot().is_loading);

        let state = hook.settled().await;
        assert!(!state.is_loading);
        assert_eq!(state.data, Some(1));
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_previous_data() {
        let scope = MountScope::new("test");
        let script = vec![Ok(5), Err(AdapterError::Remote("offline".into()))];
        let hook = ResourceHook::builder("counter", Scripted::new(script))
            .fetch_error("Failed to load counter")
            .mount(&scope);
        hook.settled().await;

        assert_eq!(hook.refetch().await, Outcome::Failed);
        let state = hook.snapshot();
        assert_eq!(state.data, Some(5));
        assert_eq!(state.error.as_deref(), Some("Failed to load counter"));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_default_fetch_error_uses_name() {
        let scope = MountScope::new("test");
        let hook = ResourceHook::builder(
            "counter",
            Scripted::new(vec![Err(AdapterError::ActorClosed)]),
        )
        .mount(&scope);

        let state = hook.settled().await;
        assert_eq!(state.data, None);
        assert_eq!(state.error.as_deref(), Some("Failed to load counter"));
    }

    #[tokio::test]
    async fn test_mutate_replaces_value_and_clears_busy() {
        let scope = MountScope::new("test");
        let hook = ResourceHook::builder("counter", Scripted::new(vec![Ok(1)])).mount(&scope);
        hook.settled().await;

        let outcome = hook.mutate("set", "Failed to save", async { Ok(9) }).await;
        assert_eq!(outcome, Outcome::Applied);
        let state = hook.snapshot();
        assert_eq!(state.data, Some(9));
        assert!(!state.is_busy);
    }

    #[tokio::test]
    async fn test_mutate_failure_records_message_only() {
        let scope = MountScope::new("test");
        let hook = ResourceHook::builder("counter", Scripted::new(vec![Ok(1)])).mount(&scope);
        hook.settled().await;

        let outcome = hook
            .mutate("set", "Failed to save", async {
                Err(AdapterError::Rejected("nope".into()))
            })
            .await;
        assert_eq!(outcome, Outcome::Failed);
        let state = hook.snapshot();
        assert_eq!(state.data, Some(1));
        assert_eq!(state.error.as_deref(), Some("Failed to save"));
        assert!(!state.is_busy);
    }

    #[tokio::test]
    async fn test_mutate_or_raise_returns_error_after_recording() {
        let scope = MountScope::new("test");
        let hook = ResourceHook::builder("counter", Scripted::new(vec![Ok(1)])).mount(&scope);
        hook.settled().await;

        let result = hook
            .mutate_or_raise("set", "Failed to save", async {
                Err(AdapterError::Remote("boom".into()))
            })
            .await;
        assert_eq!(result, Err(AdapterError::Remote("boom".into())));
        assert_eq!(hook.snapshot().error.as_deref(), Some("Failed to save"));
    }

    #[tokio::test]
    async fn test_busy_cleared_when_call_is_dropped() {
        let scope = MountScope::new("test");
        let hook = ResourceHook::builder("counter", Scripted::new(vec![Ok(1)])).mount(&scope);
        hook.settled().await;

        let pending = hook.mutate("set", "Failed to save", std::future::pending());
        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(10), pending).await;
        assert!(timed_out.is_err());
        assert!(!hook.snapshot().is_busy);
    }

    #[tokio::test]
    async fn test_mutate_in_place_without_data_is_skipped() {
        let scope = MountScope::new("test");
        let hook = ResourceHook::builder(
            "counter",
            Scripted::new(vec![Err(AdapterError::ActorClosed)]),
        )
        .mount(&scope);
        hook.settled().await;

        let polled = std::sync::atomic::AtomicBool::new(false);
        let call = async {
            polled.store(true, Ordering::SeqCst);
            Ok::<u32, AdapterError>(1)
        };
        let outcome = hook
            .mutate_in_place("bump", "Failed to bump", call, |value, by| *value += by)
            .await;

        assert_eq!(outcome, Outcome::Skipped);
        assert!(!polled.load(Ordering::SeqCst));
        let state = hook.snapshot();
        assert!(!state.is_busy);
        assert_eq!(state.error.as_deref(), Some("Failed to load counter"));
    }
}
