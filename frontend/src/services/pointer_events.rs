use gloo::events::EventListener;
use shared::PointerDownChannel;
use web_sys::{Event, EventTarget};

/// `mousedown` notifications from the whole document.
///
/// Each subscription is a gloo [`EventListener`], which removes itself from
/// the document when dropped.
pub struct DocumentPointerDown {
    target: EventTarget,
}

impl DocumentPointerDown {
    /// `None` outside a browser (no window or document).
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self {
            target: document.into(),
        })
    }
}

impl PointerDownChannel for DocumentPointerDown {
    type Event = Event;
    type Subscription = EventListener;

    fn subscribe(&self, mut handler: Box<dyn FnMut(&Event)>) -> EventListener {
        EventListener::new(&self.target, "mousedown", move |event| handler(event))
    }
}
