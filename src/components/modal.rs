//! Modal Component
//!
//! Overlay dialog. While open it suppresses page scroll and closes on
//! Escape; both side effects are undone on close and on unmount.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    // Page scroll off while the dialog is up
    Effect::new(move |_| {
        let overflow = if open.get() { "hidden" } else { "" };
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", overflow);
        }
    });
    on_cleanup(|| {
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", "");
        }
    });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if open.get_untracked() && ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
                <div class="modal">
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button class="modal-close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
