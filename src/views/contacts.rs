//! Contacts View
//!
//! Filterable contact table with a shared create/edit form and a read-only
//! detail modal. Filtering is delegated entirely to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ContactFilter};
use crate::components::{
    Avatar, AvatarSize, Badge, Button, ButtonVariant, Card, DeleteConfirmButton, EmptyState,
    Input, Modal, Select, Textarea,
};
use crate::format::{format_date, status_color};
use crate::models::{non_empty, Contact, ContactPayload, ContactStatus};
use crate::seq::FetchSeq;

const SOURCE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select source"),
    ("website", "Website"),
    ("referral", "Referral"),
    ("linkedin", "LinkedIn"),
    ("cold_outreach", "Cold Outreach"),
    ("conference", "Conference"),
    ("webinar", "Webinar"),
    ("partner", "Partner"),
];

/// Draft object backing the create/edit form
#[derive(Clone, Debug, Default, PartialEq)]
struct ContactDraft {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    company: String,
    job_title: String,
    city: String,
    country: String,
    status: ContactStatus,
    source: String,
    notes: String,
}

impl ContactDraft {
    fn from_contact(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone().unwrap_or_default(),
            phone: contact.phone.clone().unwrap_or_default(),
            company: contact.company.clone().unwrap_or_default(),
            job_title: contact.job_title.clone().unwrap_or_default(),
            city: contact.city.clone().unwrap_or_default(),
            country: contact.country.clone().unwrap_or_default(),
            status: contact.status,
            source: contact.source.clone().unwrap_or_default(),
            notes: contact.notes.clone().unwrap_or_default(),
        }
    }

    /// Required fields must be present before anything is sent
    fn is_valid(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }

    fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: non_empty(&self.email),
            phone: non_empty(&self.phone),
            company: non_empty(&self.company),
            job_title: non_empty(&self.job_title),
            address: None,
            city: non_empty(&self.city),
            country: non_empty(&self.country),
            status: Some(self.status),
            source: non_empty(&self.source),
            notes: non_empty(&self.notes),
        }
    }
}

#[component]
pub fn ContactsView() -> impl IntoView {
    let (contacts, set_contacts) = signal(Vec::<Contact>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (search_query, set_search_query) = signal(String::new());
    let (status_filter, set_status_filter) = signal(None::<ContactStatus>);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (form_open, set_form_open) = signal(false);
    let (editing, set_editing) = signal(None::<Contact>);
    let (viewing, set_viewing) = signal(None::<Contact>);
    let (is_submitting, set_is_submitting) = signal(false);
    let draft = RwSignal::new(ContactDraft::default());
    let seq = FetchSeq::new();

    // Exactly one fetch per filter change; late responses are dropped
    Effect::new({
        let seq = seq.clone();
        move |_| {
            let _ = reload_trigger.get();
            let filter = ContactFilter {
                status: status_filter.get(),
                search: non_empty(&search_query.get()),
            };
            let token = seq.begin();
            let seq = seq.clone();
            spawn_local(async move {
                match api::list_contacts(&filter).await {
                    Ok(loaded) => {
                        if seq.is_current(token) {
                            set_contacts.set(loaded);
                            set_is_loading.set(false);
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[CONTACTS] load failed: {}", err).into(),
                        );
                        if seq.is_current(token) {
                            set_is_loading.set(false);
                        }
                    }
                }
            });
        }
    });

    let reload = move || set_reload_trigger.update(|n| *n += 1);

    let open_create = move |_| {
        draft.set(ContactDraft::default());
        set_editing.set(None);
        set_form_open.set(true);
    };

    let open_edit = move |contact: Contact| {
        draft.set(ContactDraft::from_contact(&contact));
        set_editing.set(Some(contact));
        set_viewing.set(None);
        set_form_open.set(true);
    };

    let close_form = move || {
        set_form_open.set(false);
        set_editing.set(None);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        if !current.is_valid() {
            return;
        }
        let payload = current.to_payload();
        let editing_id = editing.get().map(|c| c.id);
        set_is_submitting.set(true);
        spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update_contact(id, &payload).await,
                None => api::create_contact(&payload).await,
            };
            match result {
                Ok(_) => {
                    set_form_open.set(false);
                    set_editing.set(None);
                    reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CONTACTS] save failed: {}", err).into());
                }
            }
            set_is_submitting.set(false);
        });
    };

    let delete_contact = move |id: String| {
        spawn_local(async move {
            match api::delete_contact(&id).await {
                Ok(()) => reload(),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[CONTACTS] delete failed: {}", err).into(),
                    );
                }
            }
        });
    };

    // Draft field plumbing for the form components
    let field = move |get: fn(&ContactDraft) -> String| Signal::derive(move || draft.with(get));
    let set_field = move |set: fn(&mut ContactDraft, String)| {
        Callback::new(move |value: String| draft.update(|d| set(d, value)))
    };

    let form_title = Signal::derive(move || {
        if editing.with(|e| e.is_some()) {
            "Edit Contact".to_string()
        } else {
            "New Contact".to_string()
        }
    });

    view! {
        <div class="view contacts-view">
            <div class="view-toolbar">
                <div class="view-toolbar-left">
                    <span class="view-count">
                        {move || format!("{} contacts", contacts.get().len())}
                    </span>
                </div>
                <div class="view-toolbar-right">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search..."
                        prop:value=move || search_query.get()
                        on:input=move |ev| set_search_query.set(event_target_value(&ev))
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            set_status_filter.set(ContactStatus::parse(&event_target_value(&ev)))
                        }
                    >
                        <option value="">"All Statuses"</option>
                        {ContactStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                    <Button on_press=Callback::new(open_create)>"Add Contact"</Button>
                </div>
            </div>

            {move || {
                if is_loading.get() {
                    return view! {
                        <div class="view-loading">
                            <div class="spinner"></div>
                        </div>
                    }
                    .into_any();
                }
                if contacts.with(|list| list.is_empty()) {
                    return view! {
                        <Card>
                            <EmptyState
                                title="No contacts yet"
                                description="Get started by adding your first contact"
                            >
                                <Button on_press=Callback::new(open_create)>"Add Contact"</Button>
                            </EmptyState>
                        </Card>
                    }
                    .into_any();
                }
                view! {
                    <div class="table-card">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Company"</th>
                                    <th>"Email"</th>
                                    <th>"Phone"</th>
                                    <th>"Status"</th>
                                    <th>"Added"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || contacts.get()
                                    key=|contact| contact.id.clone()
                                    children=move |contact| {
                                        let row = contact.clone();
                                        let edit_target = contact.clone();
                                        let delete_id = contact.id.clone();
                                        view! {
                                            <tr
                                                class="data-row"
                                                on:click=move |_| set_viewing.set(Some(row.clone()))
                                            >
                                                <td>
                                                    <div class="cell-person">
                                                        <Avatar
                                                            name=contact.full_name()
                                                            size=AvatarSize::Small
                                                        />
                                                        <div>
                                                            <p class="cell-name">{contact.full_name()}</p>
                                                            <p class="cell-sub">
                                                                {contact.job_title.clone().unwrap_or_default()}
                                                            </p>
                                                        </div>
                                                    </div>
                                                </td>
                                                <td>{contact.company.clone().unwrap_or_default()}</td>
                                                <td>{contact.email.clone().unwrap_or_default()}</td>
                                                <td>{contact.phone.clone().unwrap_or_default()}</td>
                                                <td>
                                                    <Badge color=status_color(contact.status)>
                                                        {contact.status.label()}
                                                    </Badge>
                                                </td>
                                                <td>{format_date(&contact.created_at)}</td>
                                                <td on:click=move |ev| ev.stop_propagation()>
                                                    <div class="row-actions">
                                                        <button
                                                            class="row-edit-btn"
                                                            on:click=move |_| open_edit(edit_target.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <DeleteConfirmButton
                                                            button_class="row-delete-btn"
                                                            on_confirm=Callback::new(move |_| {
                                                                delete_contact(delete_id.clone())
                                                            })
                                                        />
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}

            // Create/edit form
            <Modal
                open=form_open
                on_close=Callback::new(move |_| close_form())
                title=form_title
            >
                {move || {
                    let status_options: Vec<(String, String)> = ContactStatus::ALL
                        .iter()
                        .map(|s| (s.as_str().to_string(), s.label().to_string()))
                        .collect();
                    let source_options: Vec<(String, String)> = SOURCE_OPTIONS
                        .iter()
                        .map(|&(value, label)| (value.to_string(), label.to_string()))
                        .collect();
                    view! {
                        <form class="modal-form" on:submit=submit>
                            <div class="form-grid">
                                <Input
                                    label="First Name"
                                    required=true
                                    value=field(|d| d.first_name.clone())
                                    on_input=set_field(|d, v| d.first_name = v)
                                />
                                <Input
                                    label="Last Name"
                                    required=true
                                    value=field(|d| d.last_name.clone())
                                    on_input=set_field(|d, v| d.last_name = v)
                                />
                            </div>
                            <div class="form-grid">
                                <Input
                                    label="Email"
                                    input_type="email"
                                    value=field(|d| d.email.clone())
                                    on_input=set_field(|d, v| d.email = v)
                                />
                                <Input
                                    label="Phone"
                                    value=field(|d| d.phone.clone())
                                    on_input=set_field(|d, v| d.phone = v)
                                />
                            </div>
                            <div class="form-grid">
                                <Input
                                    label="Company"
                                    value=field(|d| d.company.clone())
                                    on_input=set_field(|d, v| d.company = v)
                                />
                                <Input
                                    label="Job Title"
                                    value=field(|d| d.job_title.clone())
                                    on_input=set_field(|d, v| d.job_title = v)
                                />
                            </div>
                            <div class="form-grid">
                                <Input
                                    label="City"
                                    value=field(|d| d.city.clone())
                                    on_input=set_field(|d, v| d.city = v)
                                />
                                <Input
                                    label="Country"
                                    value=field(|d| d.country.clone())
                                    on_input=set_field(|d, v| d.country = v)
                                />
                            </div>
                            <div class="form-grid">
                                <Select
                                    label="Status"
                                    options=status_options.clone()
                                    value=field(|d| d.status.as_str().to_string())
                                    on_change=Callback::new(move |value: String| {
                                        if let Some(status) = ContactStatus::parse(&value) {
                                            draft.update(|d| d.status = status);
                                        }
                                    })
                                />
                                <Select
                                    label="Source"
                                    options=source_options.clone()
                                    value=field(|d| d.source.clone())
                                    on_change=set_field(|d, v| d.source = v)
                                />
                            </div>
                            <Textarea
                                label="Notes"
                                value=field(|d| d.notes.clone())
                                on_input=set_field(|d, v| d.notes = v)
                            />
                            <div class="form-footer">
                                <Button
                                    variant=ButtonVariant::Secondary
                                    on_press=Callback::new(move |_| close_form())
                                >
                                    "Cancel"
                                </Button>
                                <Button button_type="submit" is_loading=is_submitting>
                                    {move || {
                                        if editing.with(|e| e.is_some()) { "Update" } else { "Create" }
                                    }}
                                </Button>
                            </div>
                        </form>
                    }
                }}
            </Modal>

            // Read-only detail modal
            <ContactDetailModal viewing=viewing set_viewing=set_viewing on_edit=Callback::new(open_edit) />
        </div>
    }
}

/// Detail modal split out so the main view stays readable
#[component]
fn ContactDetailModal(
    viewing: ReadSignal<Option<Contact>>,
    set_viewing: WriteSignal<Option<Contact>>,
    on_edit: Callback<Contact>,
) -> impl IntoView {
    let open = Signal::derive(move || viewing.with(|v| v.is_some()));

    view! {
        <Modal
            open=open
            on_close=Callback::new(move |_| set_viewing.set(None))
            title=Signal::derive(|| "Contact Details".to_string())
        >
            {move || {
                viewing
                    .get()
                    .map(|contact| {
                        let edit_target = contact.clone();
                        view! {
                            <div class="detail-body">
                                <div class="detail-person">
                                    <Avatar name=contact.full_name() />
                                    <div>
                                        <p class="detail-name">{contact.full_name()}</p>
                                        <p class="detail-sub">
                                            {contact.job_title.clone().unwrap_or_default()}
                                        </p>
                                    </div>
                                    <Badge color=status_color(contact.status)>
                                        {contact.status.label()}
                                    </Badge>
                                </div>
                                <dl class="detail-grid">
                                    <dt>"Email"</dt>
                                    <dd>{contact.email.clone().unwrap_or_else(|| "—".into())}</dd>
                                    <dt>"Phone"</dt>
                                    <dd>{contact.phone.clone().unwrap_or_else(|| "—".into())}</dd>
                                    <dt>"Company"</dt>
                                    <dd>{contact.company.clone().unwrap_or_else(|| "—".into())}</dd>
                                    <dt>"Location"</dt>
                                    <dd>
                                        {match (contact.city.clone(), contact.country.clone()) {
                                            (Some(city), Some(country)) => format!("{}, {}", city, country),
                                            (Some(city), None) => city,
                                            (None, Some(country)) => country,
                                            (None, None) => "—".to_string(),
                                        }}
                                    </dd>
                                    <dt>"Source"</dt>
                                    <dd>{contact.source.clone().unwrap_or_else(|| "—".into())}</dd>
                                    <dt>"Added"</dt>
                                    <dd>{format_date(&contact.created_at)}</dd>
                                </dl>
                                <div class="detail-notes">
                                    {contact.notes.clone().unwrap_or_else(|| "No notes".into())}
                                </div>
                                <div class="form-footer">
                                    <Button
                                        variant=ButtonVariant::Secondary
                                        on_press=Callback::new(move |_| set_viewing.set(None))
                                    >
                                        "Close"
                                    </Button>
                                    <Button on_press=Callback::new(move |_| {
                                        on_edit.run(edit_target.clone())
                                    })>
                                        "Edit"
                                    </Button>
                                </div>
                            </div>
                        }
                    })
            }}
        </Modal>
    }
}
