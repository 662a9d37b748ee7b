//! Settings View
//!
//! Account preference tabs. Profile data is read-only, synced from the
//! OAuth provider; saving is simulated client-side since the backend has no
//! preferences endpoint.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Avatar, AvatarSize, Button, Card, CardHeader, Input};
use crate::context::use_auth;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Profile,
    Notifications,
    Security,
    Appearance,
}

const TABS: &[(SettingsTab, &str)] = &[
    (SettingsTab::Profile, "Profile"),
    (SettingsTab::Notifications, "Notifications"),
    (SettingsTab::Security, "Security"),
    (SettingsTab::Appearance, "Appearance"),
];

#[component]
pub fn SettingsView() -> impl IntoView {
    let auth = use_auth();
    let (active_tab, set_active_tab) = signal(SettingsTab::Profile);
    let (is_saving, set_is_saving) = signal(false);
    let company = RwSignal::new(String::new());
    let job_title = RwSignal::new(String::new());

    let save = move |_| {
        set_is_saving.set(true);
        spawn_local(async move {
            TimeoutFuture::new(1_000).await;
            set_is_saving.set(false);
        });
    };

    let user_name = move || auth.user().map(|u| u.name).unwrap_or_default();
    let user_email = move || auth.user().map(|u| u.email).unwrap_or_default();
    let user_picture = move || auth.user().and_then(|u| u.picture);

    view! {
        <div class="view settings-view">
            <div class="view-header">
                <h1 class="view-title">"Settings"</h1>
                <p class="view-subtitle">"Manage your account preferences"</p>
            </div>

            <div class="settings-layout">
                <Card>
                    <nav class="settings-tabs">
                        {TABS
                            .iter()
                            .map(|&(tab, label)| {
                                view! {
                                    <button
                                        class=move || {
                                            if active_tab.get() == tab {
                                                "settings-tab active"
                                            } else {
                                                "settings-tab"
                                            }
                                        }
                                        on:click=move |_| set_active_tab.set(tab)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Card>

                <div class="settings-content">
                    {move || match active_tab.get() {
                        SettingsTab::Profile => view! {
                            <Card>
                                <CardHeader
                                    title="Profile Information"
                                    description="Update your personal information"
                                />
                                <div class="profile-summary">
                                    {move || view! {
                                        <Avatar
                                            src=user_picture()
                                            name=user_name()
                                            size=AvatarSize::XLarge
                                        />
                                    }}
                                    <div>
                                        <h3 class="profile-summary-name">{user_name}</h3>
                                        <p class="profile-summary-email">{user_email}</p>
                                        <p class="profile-summary-note">
                                            "Profile picture synced from Google"
                                        </p>
                                    </div>
                                </div>
                                <div class="form-grid">
                                    <Input
                                        label="Full Name"
                                        value=Signal::derive(user_name)
                                        on_input=Callback::new(|_: String| {})
                                        disabled=true
                                        helper_text="Synced from Google account"
                                    />
                                    <Input
                                        label="Email"
                                        input_type="email"
                                        value=Signal::derive(user_email)
                                        on_input=Callback::new(|_: String| {})
                                        disabled=true
                                        helper_text="Synced from Google account"
                                    />
                                </div>
                                <Input
                                    label="Company"
                                    placeholder="Your company name"
                                    value=Signal::derive(move || company.get())
                                    on_input=Callback::new(move |v| company.set(v))
                                />
                                <Input
                                    label="Job Title"
                                    placeholder="Your job title"
                                    value=Signal::derive(move || job_title.get())
                                    on_input=Callback::new(move |v| job_title.set(v))
                                />
                                <div class="form-footer">
                                    <Button on_press=Callback::new(save) is_loading=is_saving>
                                        "Save Changes"
                                    </Button>
                                </div>
                            </Card>
                        }
                        .into_any(),
                        SettingsTab::Notifications => view! {
                            <Card>
                                <CardHeader
                                    title="Notifications"
                                    description="Choose what you want to hear about"
                                />
                                <div class="pref-list">
                                    <label class="pref-row">
                                        <input type="checkbox" checked=true />
                                        "Email me when a deal changes stage"
                                    </label>
                                    <label class="pref-row">
                                        <input type="checkbox" checked=true />
                                        "Email me about overdue tasks"
                                    </label>
                                    <label class="pref-row">
                                        <input type="checkbox" />
                                        "Weekly pipeline summary"
                                    </label>
                                </div>
                                <div class="form-footer">
                                    <Button on_press=Callback::new(save) is_loading=is_saving>
                                        "Save Changes"
                                    </Button>
                                </div>
                            </Card>
                        }
                        .into_any(),
                        SettingsTab::Security => view! {
                            <Card>
                                <CardHeader
                                    title="Security"
                                    description="Session and sign-in settings"
                                />
                                <p class="settings-note">
                                    "Sign-in is handled by your Google account. Signing out ends "
                                    "the current browser session only."
                                </p>
                                <div class="form-footer">
                                    <Button on_press=Callback::new(move |_| auth.logout())>
                                        "Sign out"
                                    </Button>
                                </div>
                            </Card>
                        }
                        .into_any(),
                        SettingsTab::Appearance => view! {
                            <Card>
                                <CardHeader
                                    title="Appearance"
                                    description="Theme preferences"
                                />
                                <div class="pref-list">
                                    <label class="pref-row">
                                        <input type="radio" name="theme" checked=true />
                                        "Light"
                                    </label>
                                    <label class="pref-row">
                                        <input type="radio" name="theme" />
                                        "Dark"
                                    </label>
                                    <label class="pref-row">
                                        <input type="radio" name="theme" />
                                        "System"
                                    </label>
                                </div>
                            </Card>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
