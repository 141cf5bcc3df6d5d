//! After-render subscriptions.
//!
//! The render loop owns a [`FrameEvents`] and dispatches each frame to the
//! subscriptions that are still active. Revoking a subscription takes effect
//! from the next dispatch onward.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameSubscription(u64);

#[derive(Debug, Default)]
pub struct FrameEvents {
    next_id: u64,
    active: Vec<FrameSubscription>,
}

impl FrameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> FrameSubscription {
        let subscription = FrameSubscription(self.next_id);
        self.next_id += 1;
        self.active.push(subscription);
        subscription
    }

    /// Returns `false` when the subscription was already revoked.
    pub fn unsubscribe(&mut self, subscription: FrameSubscription) -> bool {
        let before = self.active.len();
        self.active.retain(|active| *active != subscription);
        self.active.len() != before
    }

    pub fn is_active(&self, subscription: FrameSubscription) -> bool {
        self.active.contains(&subscription)
    }

    /// Snapshot of the subscriptions to notify for the current frame.
    pub fn dispatch(&self) -> Vec<FrameSubscription> {
        self.active.clone()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriptions_are_unique_and_revocable() {
        let mut events = FrameEvents::new();
        let first = events.subscribe();
        let second = events.subscribe();

        assert_ne!(first, second);
        assert_eq!(events.dispatch(), vec![first, second]);

        assert!(events.unsubscribe(first));
        assert!(!events.unsubscribe(first));
        assert!(!events.is_active(first));
        assert!(events.is_active(second));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn revoked_ids_are_never_reissued() {
        let mut events = FrameEvents::new();
        let first = events.subscribe();
        events.unsubscribe(first);
        let next = events.subscribe();

        assert_ne!(first, next);
        assert!(!events.is_active(first));
    }
}
