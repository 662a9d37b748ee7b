//! Textarea Component

use leptos::prelude::*;

#[component]
pub fn Textarea(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label.clone()}</label>
            <textarea
                class="field-textarea"
                rows=rows.unwrap_or(2)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
