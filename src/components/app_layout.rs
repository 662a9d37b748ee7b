//! App Layout Component
//!
//! Auth gate wrapping all shell routes: spinner while the session check is
//! in flight, redirect to the landing page when unauthenticated.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::components::{Header, Sidebar};
use crate::context::use_auth;

#[component]
pub fn AppLayout() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || !auth.is_loading()
            fallback=|| {
                view! {
                    <div class="screen-center">
                        <div class="spinner"></div>
                        <p class="loading-text">"Loading..."</p>
                    </div>
                }
            }
        >
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <Redirect path="/" /> }
            >
                <div class="app-shell">
                    <Sidebar />
                    <Header />
                    <main class="app-main">
                        <div class="page">
                            <Outlet />
                        </div>
                    </main>
                </div>
            </Show>
        </Show>
    }
}
