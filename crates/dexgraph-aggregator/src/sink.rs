//! Hand-off point to the state/display collaborator.
//!
//! The detail path publishes a completed [`CreatureProfile`] and keeps no
//! reference to it afterwards. Nothing is published for a failed or
//! cancelled aggregation.

use dexgraph_types::CreatureProfile;
use tokio::sync::watch;

/// Receives completed profiles.
pub trait ProfileSink {
    /// Take ownership of a completed profile.
    fn publish(&self, profile: CreatureProfile);
}

/// A sink holding the most recently published profile.
///
/// Display code can [`subscribe`](ProfileSlot::subscribe) and be notified on
/// every publish.
#[derive(Debug)]
pub struct ProfileSlot {
    sender: watch::Sender<Option<CreatureProfile>>,
}

impl ProfileSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(None);
        Self { sender }
    }

    /// A clone of the current profile, if any has been published.
    pub fn current(&self) -> Option<CreatureProfile> {
        self.sender.borrow().clone()
    }

    /// Watch the slot for new profiles.
    pub fn subscribe(&self) -> watch::Receiver<Option<CreatureProfile>> {
        self.sender.subscribe()
    }
}

impl Default for ProfileSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileSink for ProfileSlot {
    fn publish(&self, profile: CreatureProfile) {
        self.sender.send_replace(Some(profile));
    }
}
