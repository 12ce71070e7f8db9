use shared::OutsideClickWatcher;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};
use yew::prelude::*;

use crate::services::pointer_events::DocumentPointerDown;

/// Hook that calls `on_outside` for every document `mousedown` whose target
/// is not inside the element behind `root`.
///
/// The document listener is installed once when the component mounts and
/// removed when it unmounts; re-renders do not touch it.
#[hook]
pub fn use_outside_click(root: NodeRef, on_outside: Callback<()>) {
    use_effect_with((), move |_| {
        let mut watcher = OutsideClickWatcher::<DocumentPointerDown>::new();

        match DocumentPointerDown::new() {
            Some(channel) => {
                watcher.mount(
                    &channel,
                    move |event: &Event| is_inside(&root, event),
                    move || on_outside.emit(()),
                );
            }
            None => log::warn!("No document available, outside clicks will not close the picker"),
        }

        move || {
            watcher.unmount();
        }
    });
}

/// Whether the event target lies within `root`. An unrendered root counts as
/// inside so nothing reacts to it.
fn is_inside(root: &NodeRef, event: &Event) -> bool {
    let Some(root) = root.cast::<Node>() else {
        return true;
    };

    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
    root.contains(target.as_ref())
}
