//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop between ordered containers for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! A completed gesture is reported once as a [`DragEnd`], carrying the slot the
//! draggable started in and the slot it was released over (or `None` when it
//! was released outside every registered container).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A position inside a named container (container id, index)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropSlot {
    pub container: String,
    pub index: usize,
}

impl DropSlot {
    pub fn new(container: impl Into<String>, index: usize) -> Self {
        Self {
            container: container.into(),
            index,
        }
    }
}

/// Result of one completed drag gesture
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEnd {
    pub draggable_id: u32,
    pub source: DropSlot,
    /// None when released outside any container
    pub destination: Option<DropSlot>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub source_read: ReadSignal<Option<DropSlot>>,
    pub source_write: WriteSignal<Option<DropSlot>>,
    pub drop_target_read: ReadSignal<Option<DropSlot>>,
    pub drop_target_write: WriteSignal<Option<DropSlot>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending draggable id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether the pointer moved far enough from the mousedown point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Build the gesture result, or None if no drag was actually in progress
pub fn resolve_drag_end(
    dragging_id: Option<u32>,
    source: Option<DropSlot>,
    target: Option<DropSlot>,
) -> Option<DragEnd> {
    match (dragging_id, source) {
        (Some(draggable_id), Some(source)) => Some(DragEnd {
            draggable_id,
            source,
            destination: target,
        }),
        _ => None,
    }
}

/// What a document mouseup means
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MouseUp {
    /// No drag was active: a plain click, or a press that never passed the threshold
    Click,
    /// A drag finished
    Drop(DragEnd),
}

impl MouseUp {
    /// Whether the click event following this mouseup must be ignored
    pub fn suppresses_click(&self) -> bool {
        matches!(self, MouseUp::Drop(_))
    }
}

pub fn classify_mouseup(
    dragging_id: Option<u32>,
    source: Option<DropSlot>,
    target: Option<DropSlot>,
) -> MouseUp {
    match resolve_drag_end(dragging_id, source, target) {
        Some(end) => MouseUp::Drop(end),
        None => MouseUp::Click,
    }
}

/// Promote a pending press to a drag once the pointer passes the threshold.
///
/// Returns the draggable id and the initial drop target, which is the source
/// slot itself: the pointer is still over the card it picked up.
pub fn try_start_drag(
    pending_id: Option<u32>,
    source: Option<&DropSlot>,
    start: (i32, i32),
    now: (i32, i32),
) -> Option<(u32, DropSlot)> {
    let id = pending_id?;
    let source = source?;
    exceeds_threshold(start, now).then(|| (id, source.clone()))
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (source_read, source_write) = signal(None::<DropSlot>);
    let (drop_target_read, drop_target_write) = signal(None::<DropSlot>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        source_read,
        source_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Forget a press that never became a drag
pub fn clear_pending(dnd: &DndSignals) {
    dnd.pending_id_write.set(None);
    dnd.source_write.set(None);
}

/// End drag operation; flags the following click for suppression
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.source_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable elements
/// Records pending drag with its source slot and start position
pub fn make_on_mousedown(dnd: DndSignals, draggable_id: u32, source: DropSlot) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is a control inside the draggable
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(draggable_id));
            dnd.source_write.set(Some(source.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        let started = dnd.source_read.with_untracked(|source| {
            try_start_drag(
                dnd.pending_id_read.get_untracked(),
                source.as_ref(),
                start,
                (ev.client_x(), ev.client_y()),
            )
        });
        if let Some((id, target)) = started {
            dnd.dragging_id_write.set(Some(id));
            dnd.drop_target_write.set(Some(target));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a draggable sitting at `slot` (drop before it)
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: DropSlot) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(slot.clone()));
        }
    }
}

/// Create mousemove handler for a container's empty area.
///
/// Targets the end of the container unless a slot inside this container is
/// already the target (moves over children bubble up here).
pub fn make_on_container_mousemove<E>(dnd: DndSignals, container: String, end_index: E) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    E: Fn() -> usize + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_none() {
            return;
        }
        let inside = dnd
            .drop_target_read
            .with_untracked(|t| matches!(t, Some(slot) if slot.container == container));
        if !inside {
            dnd.drop_target_write.set(Some(DropSlot::new(container.clone(), end_index())));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drag_end` fires once per completed drag, including drags released
/// outside every container. Plain clicks never reach it.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drag_end: F)
where
    F: Fn(DragEnd) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let outcome = classify_mouseup(
            dnd.dragging_id_read.get_untracked(),
            dnd.source_read.get_untracked(),
            dnd.drop_target_read.get_untracked(),
        );

        match outcome {
            // Let the click reach its element
            MouseUp::Click => clear_pending(&dnd),
            MouseUp::Drop(result) => {
                end_drag(&dnd);
                on_drag_end(result);
            }
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
