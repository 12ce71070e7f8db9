//! Popup open/close state and the outside pointer-down watcher.
//!
//! The watcher owns at most one subscription to a global pointer-down channel.
//! The subscription is an RAII handle: dropping it unsubscribes.

use std::fmt;

/// Whether the calendar popup is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopupState {
    #[default]
    Closed,
    Open,
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        matches!(self, PopupState::Open)
    }

    /// Text field click: flip between open and closed.
    pub fn toggled(self) -> Self {
        match self {
            PopupState::Closed => PopupState::Open,
            PopupState::Open => PopupState::Closed,
        }
    }

    /// State after a global pointer-down. Only an outside press closes an
    /// open popup; everything else leaves the state unchanged.
    pub fn after_pointer_down(self, inside: bool) -> Self {
        match (self, inside) {
            (PopupState::Open, false) => PopupState::Closed,
            (state, _) => state,
        }
    }
}

/// A process-wide source of pointer-down notifications.
///
/// `Subscription` is the guard returned by [`subscribe`](Self::subscribe);
/// dropping it must remove the handler from the channel.
pub trait PointerDownChannel {
    /// What a notification carries, typically the event or its target.
    type Event;
    type Subscription;

    fn subscribe(&self, handler: Box<dyn FnMut(&Self::Event)>) -> Self::Subscription;
}

/// Holds the single pointer-down subscription of one mounted widget.
pub struct OutsideClickWatcher<C: PointerDownChannel> {
    subscription: Option<C::Subscription>,
}

impl<C: PointerDownChannel> OutsideClickWatcher<C> {
    pub fn new() -> Self {
        Self { subscription: None }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribe to `channel`. `contains` answers whether the event happened
    /// inside the widget root; `on_outside` runs for every other event.
    ///
    /// Returns `false` without subscribing again if already mounted.
    pub fn mount<F, G>(&mut self, channel: &C, contains: F, mut on_outside: G) -> bool
    where
        C::Event: 'static,
        F: Fn(&C::Event) -> bool + 'static,
        G: FnMut() + 'static,
    {
        if self.subscription.is_some() {
            log::warn!("Outside click watcher already mounted, keeping existing subscription");
            return false;
        }

        let handler = move |event: &C::Event| {
            if !contains(event) {
                on_outside();
            }
        };
        self.subscription = Some(channel.subscribe(Box::new(handler)));
        log::debug!("👆 Outside click watcher subscribed");
        true
    }

    /// Release the subscription. Returns `false` if nothing was mounted.
    pub fn unmount(&mut self) -> bool {
        match self.subscription.take() {
            Some(subscription) => {
                drop(subscription);
                log::debug!("🧹 Outside click watcher unsubscribed");
                true
            }
            None => false,
        }
    }
}

impl<C: PointerDownChannel> Default for OutsideClickWatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PointerDownChannel> fmt::Debug for OutsideClickWatcher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutsideClickWatcher")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
