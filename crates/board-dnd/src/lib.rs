//! Board DragDrop Utilities
//!
//! Drag state for kanban-style boards built on native HTML5 drag events.
//! Cards carry string ids; columns are typed keys supplied by the caller.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::DragEvent;

/// DnD state signals shared by every card and column of one board
pub struct DndSignals<C: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<String>>,
    pub dragging_write: WriteSignal<Option<String>>,
    pub over_column_read: ReadSignal<Option<C>>,
    pub over_column_write: WriteSignal<Option<C>>,
    /// Briefly true after a drop so click handlers can ignore the tail event
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
}

impl<C: Send + Sync + 'static> Clone for DndSignals<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Send + Sync + 'static> Copy for DndSignals<C> {}

/// Settle window after a drop during which clicks are suppressed
const DRAG_SETTLE_MS: u32 = 100;

pub fn create_dnd_signals<C: Send + Sync + 'static>() -> DndSignals<C> {
    let (dragging_read, dragging_write) = signal(None::<String>);
    let (over_column_read, over_column_write) = signal(None::<C>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    DndSignals {
        dragging_read,
        dragging_write,
        over_column_read,
        over_column_write,
        drag_just_ended_read,
        drag_just_ended_write,
    }
}

/// End drag operation
pub fn end_drag<C: Send + Sync + 'static>(dnd: &DndSignals<C>) {
    dnd.dragging_write.set(None);
    dnd.over_column_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(DRAG_SETTLE_MS, move || clear.set(false)).forget();
}

/// dragstart handler for a card
pub fn make_on_drag_start<C: Send + Sync + 'static>(
    dnd: DndSignals<C>,
    card_id: String,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
        }
        dnd.dragging_write.set(Some(card_id.clone()));
    }
}

/// dragend handler for a card; fires whether or not a drop landed
pub fn make_on_drag_end<C: Send + Sync + 'static>(
    dnd: DndSignals<C>,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
    }
}

/// dragover handler for a column; preventing default makes it a drop target
pub fn make_on_column_drag_over<C: Copy + Send + Sync + 'static>(
    dnd: DndSignals<C>,
    column: C,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        dnd.over_column_write.set(Some(column));
    }
}

pub fn make_on_column_drag_leave<C: Send + Sync + 'static>(
    dnd: DndSignals<C>,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.over_column_write.set(None);
    }
}

/// drop handler for a column; invokes the callback with (card id, column)
pub fn make_on_column_drop<C, F>(
    dnd: DndSignals<C>,
    column: C,
    on_drop: F,
) -> impl Fn(DragEvent) + Clone + 'static
where
    C: Copy + Send + Sync + 'static,
    F: Fn(String, C) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let dragged = dnd.dragging_read.get_untracked();
        end_drag(&dnd);
        if let Some(card_id) = dragged {
            on_drop(card_id, column);
        }
    }
}
