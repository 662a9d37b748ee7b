//! Badge Component
//!
//! Small colored label; the color class comes from the caller so enum
//! mappings stay in one place (`format.rs`).

use leptos::prelude::*;

#[component]
pub fn Badge(#[prop(into)] color: String, children: Children) -> impl IntoView {
    view! { <span class=format!("badge {}", color)>{children()}</span> }
}
