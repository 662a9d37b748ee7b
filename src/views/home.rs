//! Home View
//!
//! Public landing page. Sign-in is an external OAuth redirect; an already
//! authenticated visitor goes straight to the dashboard.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::api::GOOGLE_LOGIN_URL;
use crate::context::use_auth;

#[component]
pub fn HomeView() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || !auth.is_loading()
            fallback=|| {
                view! {
                    <div class="screen-center">
                        <div class="spinner"></div>
                    </div>
                }
            }
        >
            <Show
                when=move || !auth.is_authenticated()
                fallback=|| view! { <Redirect path="/dashboard" /> }
            >
                <div class="landing">
                    <header class="landing-header">
                        <div class="landing-brand">
                            <div class="logo-mark"></div>
                            <span class="logo-text">"CRM Pro"</span>
                        </div>
                        <a class="btn btn-primary" href=GOOGLE_LOGIN_URL>
                            "Sign in with Google"
                        </a>
                    </header>

                    <main class="landing-hero">
                        <span class="landing-eyebrow">"Professional Dashboard Solution"</span>
                        <h1 class="landing-title">"Manage Your Business Analytics"</h1>
                        <p class="landing-lead">
                            "Streamline your sales process, track deals, manage contacts, and "
                            "boost productivity with our elegant dashboard."
                        </p>
                        <a class="btn btn-primary btn-lg" href=GOOGLE_LOGIN_URL>
                            "Get Started with Google"
                        </a>

                        <div class="landing-features">
                            <div class="feature-card">
                                <h3 class="feature-title">"Contact Management"</h3>
                                <p class="feature-text">
                                    "Organize and track all your contacts in one place. Never "
                                    "lose touch with important leads."
                                </p>
                            </div>
                            <div class="feature-card">
                                <h3 class="feature-title">"Deal Pipeline"</h3>
                                <p class="feature-text">
                                    "Visualize your sales pipeline and track deals from lead to "
                                    "close with ease."
                                </p>
                            </div>
                            <div class="feature-card">
                                <h3 class="feature-title">"Secure & Private"</h3>
                                <p class="feature-text">
                                    "Your data is protected with enterprise-grade security and "
                                    "HTTP-only authentication."
                                </p>
                            </div>
                        </div>
                    </main>

                    <footer class="landing-footer">
                        <p>"© 2024 CRM Pro. All rights reserved."</p>
                    </footer>
                </div>
            </Show>
        </Show>
    }
}
