//! Input Component
//!
//! Labeled text input bound to a caller-owned signal.

use leptos::prelude::*;

#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    /// Defaults to "text"
    #[prop(into, optional)] input_type: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] disabled: bool,
    #[prop(into, optional)] helper_text: String,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <div class="field">
            <label class="field-label">
                {label.clone()}
                {required.then(|| view! { <span class="field-required">"*"</span> })}
            </label>
            <input
                type=input_type
                class="field-input"
                placeholder=placeholder
                required=required
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {(!helper_text.is_empty())
                .then(|| view! { <p class="field-helper">{helper_text.clone()}</p> })}
        </div>
    }
}
