//! Sidebar Component
//!
//! Fixed navigation rail for the authenticated shell.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const MAIN_MENU: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/contacts", "Contacts"),
    ("/deals", "Deals"),
    ("/tasks", "Tasks"),
    ("/analytics", "Analytics"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="sidebar-logo">
                <div class="logo-mark"></div>
                <span class="logo-text">"CRM Pro"</span>
            </div>

            <nav class="sidebar-nav">
                <p class="sidebar-section-label">"Menu"</p>
                <ul class="sidebar-menu">
                    {MAIN_MENU
                        .iter()
                        .map(|&(href, name)| {
                            let is_active = move || location.pathname.get() == href;
                            view! {
                                <li>
                                    <A
                                        href=href
                                        attr:class=move || {
                                            if is_active() { "nav-link active" } else { "nav-link" }
                                        }
                                    >
                                        {name}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>

            <div class="sidebar-spacer"></div>

            <div class="sidebar-help">
                <h4 class="sidebar-help-title">"Need Help?"</h4>
                <p class="sidebar-help-text">"Check our docs for guides."</p>
                <a
                    class="sidebar-help-link"
                    href="https://github.com/crm-pro/crm-pro#readme"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View Docs"
                </a>
            </div>
        </aside>
    }
}
