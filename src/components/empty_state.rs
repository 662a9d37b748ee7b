//! Empty State Component
//!
//! Placeholder shown when a list view has nothing to render, with an
//! optional call-to-action slot.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    /// Call-to-action area, usually the same button as the toolbar's
    children: Children,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state-title">{title}</p>
            <p class="empty-state-description">{description}</p>
            <div class="empty-state-action">{children()}</div>
        </div>
    }
}
