//! Card Component

use leptos::prelude::*;

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="card">{children()}</div> }
}

#[component]
pub fn CardHeader(
    #[prop(into)] title: String,
    #[prop(into, optional)] description: String,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <h3 class="card-title">{title}</h3>
            {(!description.is_empty())
                .then(|| view! { <p class="card-description">{description.clone()}</p> })}
        </div>
    }
}
