//! Header Component
//!
//! Top bar with search box and the profile dropdown. The dropdown closes on
//! any press outside of it.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

use crate::components::{Avatar, AvatarSize};
use crate::context::use_auth;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (dropdown_open, set_dropdown_open) = signal(false);
    let dropdown_ref = NodeRef::<leptos::html::Div>::new();

    let outside = window_event_listener(ev::mousedown, move |ev| {
        if !dropdown_open.get_untracked() {
            return;
        }
        let inside = dropdown_ref
            .get_untracked()
            .zip(ev.target())
            .and_then(|(node, target)| {
                let target: web_sys::Node = target.dyn_into().ok()?;
                Some(node.contains(Some(&target)))
            })
            .unwrap_or(false);
        if !inside {
            set_dropdown_open.set(false);
        }
    });
    on_cleanup(move || outside.remove());

    let user_name = move || auth.user().map(|u| u.name).unwrap_or_default();
    let user_email = move || auth.user().map(|u| u.email).unwrap_or_default();
    let user_picture = move || auth.user().and_then(|u| u.picture);

    view! {
        <header class="header">
            <div class="header-search">
                <input
                    type="text"
                    class="header-search-input"
                    placeholder="Search contacts, deals, tasks..."
                />
            </div>

            <div class="header-actions">
                <button class="header-bell">
                    <span class="header-bell-dot"></span>
                </button>

                <div class="profile-dropdown" node_ref=dropdown_ref>
                    <button
                        class="profile-trigger"
                        on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                    >
                        {move || view! {
                            <Avatar src=user_picture() name=user_name() size=AvatarSize::Small />
                        }}
                        <div class="profile-identity">
                            <p class="profile-name">{user_name}</p>
                            <p class="profile-email">{user_email}</p>
                        </div>
                        <span class=move || {
                            if dropdown_open.get() { "chevron open" } else { "chevron" }
                        }>
                            "▾"
                        </span>
                    </button>

                    <Show when=move || dropdown_open.get()>
                        <div class="profile-menu">
                            <div class="profile-menu-header">
                                <p class="profile-name">{user_name}</p>
                                <p class="profile-email">{user_email}</p>
                            </div>
                            <div class="profile-menu-links">
                                <button
                                    class="profile-menu-link"
                                    on:click={
                                        let navigate = navigate.clone();
                                        move |_| {
                                            set_dropdown_open.set(false);
                                            navigate("/settings", NavigateOptions::default());
                                        }
                                    }
                                >
                                    "Settings"
                                </button>
                            </div>
                            <div class="profile-menu-footer">
                                <button
                                    class="profile-signout"
                                    on:click=move |_| {
                                        set_dropdown_open.set(false);
                                        auth.logout();
                                    }
                                >
                                    "Sign out"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
