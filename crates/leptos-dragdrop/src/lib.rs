//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag-and-drop of keyed items onto keyed drop zones.
//! A movement threshold separates a click from a drag, so buttons inside a
//! draggable card keep working.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether a pointer moved far enough from its press point to start a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    (now.0 - start.0).abs() > DRAG_THRESHOLD_PX || (now.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// DnD state signals.
///
/// `I` identifies a draggable item, `Z` a drop zone.
pub struct DndSignals<I: Send + Sync + 'static, Z: Send + Sync + 'static> {
    /// Item currently being dragged
    pub dragging: RwSignal<Option<I>>,
    /// Zone under the pointer while dragging
    pub over_zone: RwSignal<Option<Z>>,
    /// Set briefly after a drop so the trailing click can be ignored
    pub drag_just_ended: RwSignal<bool>,
    /// Pressed but not yet moved past the threshold
    pub pending: RwSignal<Option<I>>,
    /// Press position for movement detection
    pub start: RwSignal<(i32, i32)>,
}

impl<I: Send + Sync + 'static, Z: Send + Sync + 'static> Clone for DndSignals<I, Z> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Send + Sync + 'static, Z: Send + Sync + 'static> Copy for DndSignals<I, Z> {}

pub fn create_dnd_signals<I, Z>() -> DndSignals<I, Z>
where
    I: Clone + PartialEq + Send + Sync + 'static,
    Z: Clone + PartialEq + Send + Sync + 'static,
{
    DndSignals {
        dragging: RwSignal::new(None),
        over_zone: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

impl<I, Z> DndSignals<I, Z>
where
    I: Clone + PartialEq + Send + Sync + 'static,
    Z: Clone + PartialEq + Send + Sync + 'static,
{
    /// Reactive: is `item` the one being dragged
    pub fn is_dragging(&self, item: &I) -> bool {
        self.dragging.with(|d| d.as_ref() == Some(item))
    }

    /// Reactive: is a drag hovering `zone`
    pub fn is_over(&self, zone: &Z) -> bool {
        self.dragging.with(Option::is_some) && self.over_zone.with(|z| z.as_ref() == Some(zone))
    }
}

/// What a mouse release means for the current gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release<I, Z> {
    /// No drag was under way: a plain click, leave the click to its target
    Click,
    /// A drag ended outside any zone
    Cancel,
    /// A drag ended over a zone
    Drop(I, Z),
}

/// Classify a release from the drag state at mouseup
pub fn classify_release<I, Z>(dragging: Option<I>, over_zone: Option<Z>) -> Release<I, Z> {
    match (dragging, over_zone) {
        (None, _) => Release::Click,
        (Some(item), Some(zone)) => Release::Drop(item, zone),
        (Some(_), None) => Release::Cancel,
    }
}

/// End drag operation
pub fn end_drag<I, Z>(dnd: &DndSignals<I, Z>)
where
    I: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    dnd.dragging.set(None);
    dnd.over_zone.set(None);
    dnd.pending.set(None);
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Mousedown handler for a draggable item: records a pending drag
pub fn make_on_mousedown<I, Z>(dnd: DndSignals<I, Z>, item: I) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    I: Clone + Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Controls inside the card handle their own clicks
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending.set(Some(item.clone()));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter handler for a drop zone
pub fn make_on_zone_mouseenter<I, Z>(dnd: DndSignals<I, Z>, zone: Z) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    I: Send + Sync + 'static,
    Z: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.with_untracked(Option::is_some) {
            dnd.over_zone.set(Some(zone.clone()));
        }
    }
}

/// Mouseleave handler for a drop zone
pub fn make_on_mouseleave<I, Z>(dnd: DndSignals<I, Z>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    I: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.with_untracked(Option::is_some) {
            dnd.over_zone.set(None);
        }
    }
}

/// Document-level mousemove: promotes a pending press to a drag
fn bind_global_mousemove<I, Z>(dnd: DndSignals<I, Z>)
where
    I: Clone + Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending.get_untracked();
        if pending.is_some() && dnd.dragging.with_untracked(Option::is_none) {
            let start = dnd.start.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind document-level mouseup for drop detection (and mousemove for drag start).
///
/// `on_drop` fires only when a real drag ends over a zone.
pub fn bind_global_mouseup<I, Z, F>(dnd: DndSignals<I, Z>, on_drop: F)
where
    I: Clone + Send + Sync + 'static,
    Z: Clone + Send + Sync + 'static,
    F: Fn(I, Z) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let release = classify_release(dnd.dragging.get_untracked(), dnd.over_zone.get_untracked());
        match release {
            // Only a real drag suppresses the click that follows
            Release::Click => dnd.pending.set(None),
            Release::Cancel => end_drag(&dnd),
            Release::Drop(item, zone) => {
                end_drag(&dnd);
                on_drop(item, zone);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (10, 10)));
        assert!(!exceeds_threshold((10, 10), (15, 5)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_release_without_drag_is_click() {
        // a press on a card button never sets `dragging`
        assert_eq!(classify_release::<u32, &str>(None, None), Release::Click);
        assert_eq!(classify_release::<u32, &str>(None, Some("Done")), Release::Click);
    }

    #[test]
    fn test_release_after_drag() {
        assert_eq!(classify_release(Some(7u32), Some("Done")), Release::Drop(7, "Done"));
        assert_eq!(classify_release::<u32, &str>(Some(7), None), Release::Cancel);
    }
}
