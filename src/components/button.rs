//! Button Component
//!
//! Shared button with variants and a loading state that disables the
//! triggering control for the duration of a mutation.

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// "button" unless the caller makes it a submit control
    #[prop(into, optional)] button_type: String,
    #[prop(optional)] is_loading: Option<ReadSignal<bool>>,
    #[prop(optional)] disabled: Option<ReadSignal<bool>>,
    #[prop(optional)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let loading = move || is_loading.map(|s| s.get()).unwrap_or(false);
    let is_disabled = move || loading() || disabled.map(|s| s.get()).unwrap_or(false);
    let button_type = if button_type.is_empty() {
        "button".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type
            class=move || format!("btn {}", variant.class())
            disabled=is_disabled
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            <Show when=loading>
                <span class="btn-spinner"></span>
            </Show>
            {children()}
        </button>
    }
}
