//! # Mount Scopes
//!
//! A hook's remote calls cannot be aborted, so a call may settle after the screen that
//! started it is gone. Every hook is created inside a [`MountScope`]; when the scope is
//! unmounted (explicitly or by drop) a `watch` flag flips and late completions leave the
//! hook's state alone.

use tokio::sync::watch;
use tracing::debug;

/// Lifetime of one mounted screen.
pub struct MountScope {
    name: &'static str,
    unmounted: watch::Sender<bool>,
}

impl MountScope {
    pub fn new(name: &'static str) -> Self {
        let (unmounted, _) = watch::channel(false);
        Self { name, unmounted }
    }

    /// A token observed by hooks created in this scope.
    pub fn token(&self) -> MountToken {
        MountToken {
            rx: self.unmounted.subscribe(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tears the scope down. Equivalent to dropping it.
    pub fn unmount(self) {}
}

impl Drop for MountScope {
    fn drop(&mut self) {
        debug!(scope = self.name, "Unmounted");
        self.unmounted.send_replace(true);
    }
}

/// Read side of a [`MountScope`].
#[derive(Clone, Debug)]
pub struct MountToken {
    rx: watch::Receiver<bool>,
}

impl MountToken {
    pub fn is_mounted(&self) -> bool {
        !*self.rx.borrow()
    }

    /// Resolves once the owning scope has been unmounted.
    pub async fn unmounted(&mut self) {
        // An error means the sender is gone, which only happens after the final send.
        let _ = self.rx.wait_for(|gone| *gone).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_drop_flips_token() {
        let scope = MountScope::new("profile");
        let token = scope.token();
        assert!(token.is_mounted());

        drop(scope);
        assert!(!token.is_mounted());
    }

    #[tokio::test]
    async fn test_unmounted_resolves_after_unmount() {
        let scope = MountScope::new("saved");
        let mut token = scope.token();

        let waiter = tokio::spawn(async move {
            token.unmounted().await;
            token.is_mounted()
        });

        scope.unmount();
        assert!(!waiter.await.unwrap());
    }
}
