//! Scoped listener handles.
//!
//! Document-level listeners (keydown, visibility, backdrop pointer) are
//! registered by the host when a session opens; each registration hands back
//! a `Subscription` whose drop detaches the listener. The session holds them
//! in a `SubscriptionSet` and clears it on close, so repeated open/close
//! cycles cannot leak handlers.

/// Handle to one registered listener. Dropping it runs the detach callback
/// exactly once.
pub struct Subscription {
    on_release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(on_release: impl FnOnce() + 'static) -> Self {
        Self {
            on_release: Some(Box::new(on_release)),
        }
    }

    /// Detach eagerly instead of waiting for drop.
    pub fn release(mut self) {
        if let Some(f) = self.on_release.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.on_release.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("released", &self.on_release.is_none())
            .finish()
    }
}

/// All listener handles belonging to one session.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release every handle. Called once at session close.
    pub fn clear(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.release();
        }
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod subscription_tests;
