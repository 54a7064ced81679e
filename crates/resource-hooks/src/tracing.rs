//! # Observability & Tracing
//!
//! Structured logging for hooks, remotes and stores.
//!
//! ## What Gets Traced
//!
//! - **Remote lifecycle**: startup, shutdown, latency
//! - **Remote operations**: Get, Update, Remove, Action, rejected writes
//! - **Hook activity**: mount, load, mutation applied, failures with the underlying error
//! - **Discards**: completions that arrive after unmount or after being superseded
//!
//! Hooks never surface adapter errors to the view; the `warn!` lines emitted here are the
//! only place the original error detail survives.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Loads, writes, failures
//! RUST_LOG=debug cargo run     # Plus every request payload and discard
//! RUST_LOG=resource_hooks=debug,nutri_app=info cargo run
//! ```
//!
//! With `RUST_LOG=info` a profile screen mount looks like:
//!
//! ```text
//! INFO Remote started latency_ms=300
//! INFO Loaded resource="profile"
//! INFO Written
//! INFO Mutation applied resource="profile" action="update_profile"
//! ```

/// Initializes the global subscriber from `RUST_LOG`.
///
/// Uses the compact format without module targets; the structured `resource` and
/// `action` fields carry the context instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
