//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports
//! the result as a source index plus an optional destination index.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Result of a finished drag gesture
///
/// `destination` is `None` when the drag was released outside every
/// list entry, which callers treat as a cancelled drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragOutcome {
    pub source: usize,
    pub destination: Option<usize>,
}

impl DragOutcome {
    /// True when the gesture would leave the list unchanged
    pub fn is_noop(&self) -> bool {
        match self.destination {
            Some(dest) => dest == self.source,
            None => true,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Index of the entry being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Index of the entry under the pointer
    pub drop_target_read: ReadSignal<Option<usize>>,
    pub drop_target_write: WriteSignal<Option<usize>>,
    /// Pending index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Whether the pointer moved far enough from the mousedown point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Build the outcome for a mouseup, if a drag was actually in progress
pub fn resolve_drop(dragging: Option<usize>, drop_target: Option<usize>) -> Option<DragOutcome> {
    dragging.map(|source| DragOutcome {
        source,
        destination: drop_target,
    })
}

/// Live position of the entry identified by `key` within `keys()`
///
/// Lets a list keep its rows keyed by identity while drag handlers still
/// see the current index after a reorder. Yields `usize::MAX` once the key
/// is gone.
pub fn entry_index<K>(keys: impl Fn() -> Vec<K> + Send + Sync + 'static, key: K) -> Signal<usize>
where
    K: PartialEq + Send + Sync + 'static,
{
    Signal::derive(move || keys().iter().position(|k| *k == key).unwrap_or(usize::MAX))
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for a draggable entry at `index`
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: Signal<usize>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore presses on form controls so they keep working inside cards
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(index.get_untracked()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove on the document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
                // Hovering the origin entry means "drop in place"
                dnd.drop_target_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a list entry (becomes the destination)
pub fn make_on_entry_mouseenter(dnd: DndSignals, index: Signal<usize>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(index.get_untracked()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drag_end` only runs for real drags; plain clicks fall through to
/// the element's own click handler.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drag_end: F)
where
    F: Fn(DragOutcome) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let outcome = resolve_drop(
            dnd.dragging_read.get_untracked(),
            dnd.drop_target_read.get_untracked(),
        );

        end_drag(&dnd);
        if let Some(outcome) = outcome {
            log::debug!("drag ended: {:?}", outcome);
            on_drag_end(outcome);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
