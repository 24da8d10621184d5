//! Frame clock
//!
//! Models the host's display refresh callback (display link / vsync). The
//! host drives [`FrameClock::tick`] once per frame with a monotonic timestamp
//! in seconds; the clock forwards it to every live, unpaused subscriber.
//!
//! Subscribers are held weakly: the clock never keeps a component alive. A
//! subscription whose owner has been dropped is unregistered during the next
//! tick instead of being invoked.

use std::sync::{Mutex, Weak};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Unique identifier for a clock subscription
    pub struct SubscriptionId;
}

/// Receiver of per-frame callbacks
pub trait FrameTick: Send {
    /// Called once per frame with a monotonic timestamp in seconds.
    fn on_frame(&mut self, timestamp: f64);
}

struct Subscription {
    target: Weak<Mutex<dyn FrameTick>>,
    paused: bool,
}

/// The frame clock that dispatches host refresh ticks to subscribers
pub struct FrameClock {
    subscriptions: SlotMap<SubscriptionId, Subscription>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            subscriptions: SlotMap::with_key(),
        }
    }

    /// Register a subscriber. New subscriptions start paused; the owner
    /// decides when ticks should flow.
    pub fn subscribe(&mut self, target: Weak<Mutex<dyn FrameTick>>) -> SubscriptionId {
        self.subscriptions.insert(Subscription {
            target,
            paused: true,
        })
    }

    /// Remove a subscription. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(id).is_some()
    }

    /// Pause or resume tick delivery for one subscription.
    pub fn set_paused(&mut self, id: SubscriptionId, paused: bool) {
        if let Some(sub) = self.subscriptions.get_mut(id) {
            sub.paused = paused;
        }
    }

    pub fn is_paused(&self, id: SubscriptionId) -> Option<bool> {
        self.subscriptions.get(id).map(|sub| sub.paused)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Dispatch one frame to all live, unpaused subscribers.
    ///
    /// `timestamp` is monotonic seconds from the host refresh source.
    pub fn tick(&mut self, timestamp: f64) {
        let mut dead: SmallVec<[SubscriptionId; 4]> = SmallVec::new();

        for (id, sub) in self.subscriptions.iter() {
            match sub.target.upgrade() {
                Some(target) => {
                    if !sub.paused {
                        target.lock().unwrap().on_frame(timestamp);
                    }
                }
                None => dead.push(id),
            }
        }

        for id in dead {
            self.subscriptions.remove(id);
            tracing::trace!("frame clock dropped dead subscription {:?}", id);
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
