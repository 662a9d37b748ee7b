//! Application Root
//!
//! Session provider plus router wiring: the public landing page at "/" and
//! the authenticated shell around the resource views.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::AppLayout;
use crate::context::AuthContext;
use crate::views::{
    AnalyticsView, ContactsView, DashboardView, DealsView, HomeView, SettingsView, TasksView,
};

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::provide();
    auth.init();

    view! {
        <Router>
            <Routes fallback=|| {
                view! {
                    <div class="view-failed">
                        <p>"Page not found"</p>
                    </div>
                }
            }>
                <Route path=path!("/") view=HomeView />
                <ParentRoute path=path!("") view=AppLayout>
                    <Route path=path!("dashboard") view=DashboardView />
                    <Route path=path!("contacts") view=ContactsView />
                    <Route path=path!("deals") view=DealsView />
                    <Route path=path!("tasks") view=TasksView />
                    <Route path=path!("analytics") view=AnalyticsView />
                    <Route path=path!("settings") view=SettingsView />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
