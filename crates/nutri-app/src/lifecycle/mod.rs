//! # System Lifecycle & Orchestration
//!
//! [`AppSystem`] starts every mock backend and the persist actor, hydrates the app-wide
//! stores, and hands out clients, stores and freshly mounted hooks.
//!
//! ## Shutdown
//!
//! 1. **Flush** - pending store writes are applied
//! 2. **Drop clients and stores** - closes the sender side of every channel
//! 3. **Await** - each actor sees its channel close and exits
//!
//! Hooks hold client clones, so drop every hook (and the scope it was mounted in) before
//! calling [`AppSystem::shutdown`].
//!
//! Tracing is initialised by [`resource_hooks::tracing::setup_tracing`].

pub mod app_system;

pub use app_system::*;
