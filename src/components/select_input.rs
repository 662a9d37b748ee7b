//! Select Component
//!
//! Labeled select bound to string option values; callers map their enums
//! through `as_str`/`parse`.

use leptos::prelude::*;

#[component]
pub fn Select(
    #[prop(into)] label: String,
    /// (value, label) pairs in display order
    options: Vec<(String, String)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label.clone()}</label>
            <select
                class="field-select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let this = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == this
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
