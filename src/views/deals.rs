//! Deals View
//!
//! Pipeline board (default) and list rendering of the same fetched list.
//! Board columns are derived by grouping on `stage`; dragging a card to a
//! different column issues a stage-only update followed by a full reload.

use board_dnd::{
    create_dnd_signals, make_on_column_drag_leave, make_on_column_drag_over, make_on_column_drop,
    make_on_drag_end, make_on_drag_start,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ContactFilter, DealFilter};
use crate::components::{
    Badge, Button, ButtonVariant, Card, DeleteConfirmButton, EmptyState, Input, Modal, Select,
    Textarea,
};
use crate::format::{format_currency, format_date, stage_color};
use crate::models::{non_empty, Contact, Deal, DealPayload, DealStage};
use crate::pipeline::{deals_in_stage, stage_value, total_value};
use crate::seq::FetchSeq;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Pipeline,
    List,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ModalMode {
    View,
    Edit,
}

/// Draft object backing the create/edit form. Numeric fields stay strings
/// while being edited and are parsed at submit time.
#[derive(Clone, Debug, PartialEq)]
struct DealDraft {
    title: String,
    value: String,
    currency: String,
    stage: DealStage,
    probability: String,
    expected_close_date: String,
    notes: String,
    contact_id: String,
}

impl Default for DealDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            value: "0".to_string(),
            currency: "USD".to_string(),
            stage: DealStage::Lead,
            probability: "10".to_string(),
            expected_close_date: String::new(),
            notes: String::new(),
            contact_id: String::new(),
        }
    }
}

impl DealDraft {
    fn from_deal(deal: &Deal) -> Self {
        Self {
            title: deal.title.clone(),
            value: format!("{}", deal.value),
            currency: deal.currency.clone(),
            stage: deal.stage,
            probability: deal.probability.to_string(),
            expected_close_date: deal
                .expected_close_date
                .as_deref()
                .map(crate::format::date_input_value)
                .unwrap_or_default(),
            notes: deal.notes.clone().unwrap_or_default(),
            contact_id: deal.contact_id.clone().unwrap_or_default(),
        }
    }

    fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    fn to_payload(&self) -> DealPayload {
        DealPayload {
            title: Some(self.title.trim().to_string()),
            value: Some(self.value.parse().unwrap_or(0.0)),
            currency: Some(self.currency.clone()),
            stage: Some(self.stage),
            probability: Some(self.probability.parse().unwrap_or(0)),
            expected_close_date: non_empty(&self.expected_close_date),
            notes: non_empty(&self.notes),
            contact_id: non_empty(&self.contact_id),
        }
    }
}

fn contact_name(contacts: &[Contact], contact_id: Option<&str>) -> Option<String> {
    let id = contact_id?;
    contacts.iter().find(|c| c.id == id).map(Contact::full_name)
}

#[component]
pub fn DealsView() -> impl IntoView {
    let (deals, set_deals) = signal(Vec::<Deal>::new());
    let (contacts, set_contacts) = signal(Vec::<Contact>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (search_query, set_search_query) = signal(String::new());
    let (stage_filter, set_stage_filter) = signal(None::<DealStage>);
    let (view_mode, set_view_mode) = signal(ViewMode::Pipeline);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (modal_open, set_modal_open) = signal(false);
    let (modal_mode, set_modal_mode) = signal(ModalMode::View);
    let (editing, set_editing) = signal(None::<Deal>);
    let (is_submitting, set_is_submitting) = signal(false);
    let draft = RwSignal::new(DealDraft::default());
    let seq = FetchSeq::new();
    let dnd = create_dnd_signals::<DealStage>();

    Effect::new({
        let seq = seq.clone();
        move |_| {
            let _ = reload_trigger.get();
            let filter = DealFilter {
                stage: stage_filter.get(),
                search: non_empty(&search_query.get()),
            };
            let token = seq.begin();
            let seq = seq.clone();
            spawn_local(async move {
                let deals_result = api::list_deals(&filter).await;
                let contacts_result = api::list_contacts(&ContactFilter::default()).await;
                if !seq.is_current(token) {
                    return;
                }
                match deals_result {
                    Ok(loaded) => set_deals.set(loaded),
                    Err(err) => {
                        web_sys::console::error_1(&format!("[DEALS] load failed: {}", err).into());
                    }
                }
                if let Ok(loaded) = contacts_result {
                    set_contacts.set(loaded);
                }
                set_is_loading.set(false);
            });
        }
    });

    let reload = move || set_reload_trigger.update(|n| *n += 1);

    let open_create = move |_| {
        draft.set(DealDraft::default());
        set_editing.set(None);
        set_modal_mode.set(ModalMode::Edit);
        set_modal_open.set(true);
    };

    let open_view = move |deal: Deal| {
        draft.set(DealDraft::from_deal(&deal));
        set_editing.set(Some(deal));
        set_modal_mode.set(ModalMode::View);
        set_modal_open.set(true);
    };

    let open_edit = move |deal: Deal| {
        draft.set(DealDraft::from_deal(&deal));
        set_editing.set(Some(deal));
        set_modal_mode.set(ModalMode::Edit);
        set_modal_open.set(true);
    };

    let close_modal = move || {
        set_modal_open.set(false);
        set_editing.set(None);
        set_modal_mode.set(ModalMode::View);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        if !current.is_valid() {
            return;
        }
        let payload = current.to_payload();
        let editing_id = editing.get().map(|d| d.id);
        set_is_submitting.set(true);
        spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update_deal(id, &payload).await,
                None => api::create_deal(&payload).await,
            };
            match result {
                Ok(_) => {
                    set_modal_open.set(false);
                    set_editing.set(None);
                    reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[DEALS] save failed: {}", err).into());
                }
            }
            set_is_submitting.set(false);
        });
    };

    let delete_deal = move |id: String| {
        spawn_local(async move {
            match api::delete_deal(&id).await {
                Ok(()) => reload(),
                Err(err) => {
                    web_sys::console::error_1(&format!("[DEALS] delete failed: {}", err).into());
                }
            }
        });
    };

    // A drop on another column sends exactly the new stage
    let move_stage = move |deal_id: String, target: DealStage| {
        let current_stage = deals.with_untracked(|list| {
            list.iter().find(|d| d.id == deal_id).map(|d| d.stage)
        });
        if current_stage == Some(target) {
            return;
        }
        spawn_local(async move {
            match api::update_deal(&deal_id, &DealPayload::stage_only(target)).await {
                Ok(_) => reload(),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[DEALS] stage update failed: {}", err).into(),
                    );
                }
            }
        });
    };

    let field = move |get: fn(&DealDraft) -> String| Signal::derive(move || draft.with(get));
    let set_field = move |set: fn(&mut DealDraft, String)| {
        Callback::new(move |value: String| draft.update(|d| set(d, value)))
    };

    let modal_title = Signal::derive(move || match (modal_mode.get(), editing.with(|e| e.is_some())) {
        (ModalMode::Edit, true) => "Edit Deal".to_string(),
        (ModalMode::Edit, false) => "New Deal".to_string(),
        (ModalMode::View, _) => "Deal Details".to_string(),
    });

    let contact_options = Memo::new(move |_| {
        let mut options = vec![(String::new(), "None".to_string())];
        contacts.with(|list| {
            options.extend(list.iter().map(|c| (c.id.clone(), c.full_name())));
        });
        options
    });

    view! {
        <div class="view deals-view">
            <div class="view-toolbar">
                <div class="view-toolbar-left">
                    <div class="mode-toggle">
                        <button
                            class=move || {
                                if view_mode.get() == ViewMode::Pipeline {
                                    "mode-btn active"
                                } else {
                                    "mode-btn"
                                }
                            }
                            on:click=move |_| set_view_mode.set(ViewMode::Pipeline)
                        >
                            "Pipeline"
                        </button>
                        <button
                            class=move || {
                                if view_mode.get() == ViewMode::List {
                                    "mode-btn active"
                                } else {
                                    "mode-btn"
                                }
                            }
                            on:click=move |_| set_view_mode.set(ViewMode::List)
                        >
                            "List"
                        </button>
                    </div>
                    <span class="view-count">
                        {move || format!("{} deals", deals.get().len())}
                    </span>
                    <span class="view-total">
                        {move || deals.with(|list| format_currency(total_value(list)))}
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
                    <Show when=move || view_mode.get() == ViewMode::List>
                        <select
                            class="filter-select"
                            on:change=move |ev| {
                                set_stage_filter.set(DealStage::parse(&event_target_value(&ev)))
                            }
                        >
                            <option value="">"Stage"</option>
                            {DealStage::PIPELINE
                                .iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </Show>
                    <Button on_press=Callback::new(open_create)>"Add Deal"</Button>
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
                match view_mode.get() {
                    ViewMode::Pipeline => view! {
                        <div class="board-scroll">
                            <div class="board">
                                {DealStage::PIPELINE
                                    .iter()
                                    .map(|&stage| {
                                        let is_drop_target = move || {
                                            dnd.over_column_read.get() == Some(stage)
                                        };
                                        view! {
                                            <div
                                                class="board-column"
                                                on:dragover=make_on_column_drag_over(dnd, stage)
                                                on:dragleave=make_on_column_drag_leave(dnd)
                                                on:drop=make_on_column_drop(dnd, stage, move_stage)
                                            >
                                                <div class=format!(
                                                    "column-header column-{}",
                                                    stage.as_str()
                                                )>
                                                    <div class="column-title-row">
                                                        <span class="column-title">{stage.label()}</span>
                                                        <span class="column-count">
                                                            {move || {
                                                                deals.with(|list| {
                                                                    deals_in_stage(list, stage).len()
                                                                })
                                                            }}
                                                        </span>
                                                    </div>
                                                    <p class="column-value">
                                                        {move || {
                                                            deals.with(|list| {
                                                                format_currency(stage_value(list, stage))
                                                            })
                                                        }}
                                                    </p>
                                                </div>
                                                <div class=move || {
                                                    if is_drop_target() {
                                                        "column-cards drop-target"
                                                    } else {
                                                        "column-cards"
                                                    }
                                                }>
                                                    <For
                                                        each=move || {
                                                            deals.with(|list| deals_in_stage(list, stage))
                                                        }
                                                        key=|deal| deal.id.clone()
                                                        children=move |deal| {
                                                            let view_target = deal.clone();
                                                            let edit_target = deal.clone();
                                                            let delete_id = deal.id.clone();
                                                            let card_contact_id = deal.contact_id.clone();
                                                            let dragging_id = deal.id.clone();
                                                            let card_id = deal.id.clone();
                                                            view! {
                                                                <div
                                                                    class=move || {
                                                                        let dragged = dnd
                                                                            .dragging_read
                                                                            .with(|d| {
                                                                                d.as_deref() == Some(card_id.as_str())
                                                                            });
                                                                        if dragged {
                                                                            "deal-card dragging"
                                                                        } else {
                                                                            "deal-card"
                                                                        }
                                                                    }
                                                                    draggable="true"
                                                                    on:dragstart=make_on_drag_start(
                                                                        dnd,
                                                                        dragging_id,
                                                                    )
                                                                    on:dragend=make_on_drag_end(dnd)
                                                                    on:click=move |_| {
                                                                        if !dnd.drag_just_ended_read.get_untracked() {
                                                                            open_view(view_target.clone());
                                                                        }
                                                                    }
                                                                >
                                                                    <p class="deal-card-title">
                                                                        {deal.title.clone()}
                                                                    </p>
                                                                    <p class="deal-card-value">
                                                                        {format_currency(deal.value)}
                                                                    </p>
                                                                    <div class="deal-card-meta">
                                                                        {move || {
                                                                            contacts
                                                                                .with(|list| {
                                                                                    contact_name(
                                                                                        list,
                                                                                        card_contact_id.as_deref(),
                                                                                    )
                                                                                })
                                                                                .map(|name| {
                                                                                    view! {
                                                                                        <span class="deal-card-contact">
                                                                                            {name}
                                                                                        </span>
                                                                                    }
                                                                                })
                                                                        }}
                                                                        {deal.expected_close_date.as_ref().map(|date| {
                                                                            view! {
                                                                                <span class="deal-card-date">
                                                                                    {format_date(date)}
                                                                                </span>
                                                                            }
                                                                        })}
                                                                    </div>
                                                                    <div class="deal-card-footer">
                                                                        <span class="deal-card-probability">
                                                                            {format!("{}%", deal.probability)}
                                                                        </span>
                                                                        <div
                                                                            class="row-actions"
                                                                            on:click=move |ev| ev.stop_propagation()
                                                                        >
                                                                            <button
                                                                                class="row-edit-btn"
                                                                                on:click=move |_| {
                                                                                    open_edit(edit_target.clone())
                                                                                }
                                                                            >
                                                                                "Edit"
                                                                            </button>
                                                                            <DeleteConfirmButton
                                                                                button_class="row-delete-btn"
                                                                                on_confirm=Callback::new(move |_| {
                                                                                    delete_deal(delete_id.clone())
                                                                                })
                                                                            />
                                                                        </div>
                                                                    </div>
                                                                </div>
                                                            }
                                                        }
                                                    />
                                                    <Show when=move || {
                                                        deals.with(|list| {
                                                            list.iter().all(|d| d.stage != stage)
                                                        })
                                                    }>
                                                        <div class=move || {
                                                            if is_drop_target() {
                                                                "column-empty drop-target"
                                                            } else {
                                                                "column-empty"
                                                            }
                                                        }>
                                                            {move || {
                                                                if is_drop_target() { "Drop here" } else { "Empty" }
                                                            }}
                                                        </div>
                                                    </Show>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                    .into_any(),
                    ViewMode::List => {
                        if deals.with(|list| list.is_empty()) {
                            return view! {
                                <Card>
                                    <EmptyState
                                        title="No deals yet"
                                        description="Add your first deal"
                                    >
                                        <Button on_press=Callback::new(open_create)>"Add Deal"</Button>
                                    </EmptyState>
                                </Card>
                            }
                            .into_any();
                        }
                        view! {
                            <div class="list-card">
                                <For
                                    each=move || deals.get()
                                    key=|deal| deal.id.clone()
                                    children=move |deal| {
                                        let view_target = deal.clone();
                                        let edit_target = deal.clone();
                                        let delete_id = deal.id.clone();
                                        let row_contact_id = deal.contact_id.clone();
                                        view! {
                                            <div
                                                class="list-row"
                                                on:click=move |_| open_view(view_target.clone())
                                            >
                                                <div class="list-row-main">
                                                    <div class="list-row-title">
                                                        <span class="deal-title">{deal.title.clone()}</span>
                                                        <Badge color=stage_color(deal.stage)>
                                                            {deal.stage.label()}
                                                        </Badge>
                                                    </div>
                                                    <div class="list-row-meta">
                                                        <span class="deal-value">
                                                            {format_currency(deal.value)}
                                                        </span>
                                                        <span class="deal-probability">
                                                            {format!("{}%", deal.probability)}
                                                        </span>
                                                        {move || {
                                                            contacts
                                                                .with(|list| {
                                                                    contact_name(list, row_contact_id.as_deref())
                                                                })
                                                                .map(|name| {
                                                                    view! {
                                                                        <span class="deal-contact">{name}</span>
                                                                    }
                                                                })
                                                        }}
                                                        {deal.expected_close_date.as_ref().map(|date| {
                                                            view! {
                                                                <span class="deal-date">{format_date(date)}</span>
                                                            }
                                                        })}
                                                    </div>
                                                </div>
                                                <div
                                                    class="row-actions"
                                                    on:click=move |ev| ev.stop_propagation()
                                                >
                                                    <button
                                                        class="row-edit-btn"
                                                        on:click=move |_| open_edit(edit_target.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <DeleteConfirmButton
                                                        button_class="row-delete-btn"
                                                        on_confirm=Callback::new(move |_| {
                                                            delete_deal(delete_id.clone())
                                                        })
                                                    />
                                                </div>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                        .into_any()
                    }
                }
            }}

            <Modal open=modal_open on_close=Callback::new(move |_| close_modal()) title=modal_title>
                {move || {
                    match modal_mode.get() {
                        ModalMode::View => {
                            editing
                                .get()
                                .map(|deal| {
                                    view! {
                                        <div class="detail-body">
                                            <dl class="detail-grid">
                                                <dt>"Title"</dt>
                                                <dd>{deal.title.clone()}</dd>
                                                <dt>"Value"</dt>
                                                <dd>{format_currency(deal.value)}</dd>
                                                <dt>"Stage"</dt>
                                                <dd>
                                                    <Badge color=stage_color(deal.stage)>
                                                        {deal.stage.label()}
                                                    </Badge>
                                                </dd>
                                                <dt>"Probability"</dt>
                                                <dd>{format!("{}%", deal.probability)}</dd>
                                                <dt>"Expected Close Date"</dt>
                                                <dd>
                                                    {deal
                                                        .expected_close_date
                                                        .as_deref()
                                                        .map(format_date)
                                                        .unwrap_or_else(|| "Not set".to_string())}
                                                </dd>
                                                <dt>"Contact"</dt>
                                                <dd>
                                                    {contacts
                                                        .with(|list| {
                                                            contact_name(list, deal.contact_id.as_deref())
                                                        })
                                                        .unwrap_or_else(|| "None".to_string())}
                                                </dd>
                                            </dl>
                                            <div class="detail-notes">
                                                {deal.notes.clone().unwrap_or_else(|| "No notes".into())}
                                            </div>
                                            <div class="form-footer">
                                                <Button
                                                    variant=ButtonVariant::Secondary
                                                    on_press=Callback::new(move |_| close_modal())
                                                >
                                                    "Close"
                                                </Button>
                                                <Button on_press=Callback::new(move |_| {
                                                    set_modal_mode.set(ModalMode::Edit)
                                                })>
                                                    "Edit"
                                                </Button>
                                            </div>
                                        </div>
                                    }
                                    .into_any()
                                })
                                .unwrap_or_else(|| ().into_any())
                        }
                        ModalMode::Edit => {
                            let stage_options: Vec<(String, String)> = DealStage::PIPELINE
                                .iter()
                                .map(|s| (s.as_str().to_string(), s.label().to_string()))
                                .collect();
                            view! {
                            <form class="modal-form" on:submit=submit>
                                <Input
                                    label="Title"
                                    required=true
                                    value=field(|d| d.title.clone())
                                    on_input=set_field(|d, v| d.title = v)
                                />
                                <div class="form-grid">
                                    <Input
                                        label="Value"
                                        input_type="number"
                                        value=field(|d| d.value.clone())
                                        on_input=set_field(|d, v| d.value = v)
                                    />
                                    <Select
                                        label="Stage"
                                        options=stage_options.clone()
                                        value=field(|d| d.stage.as_str().to_string())
                                        on_change=Callback::new(move |value: String| {
                                            if let Some(stage) = DealStage::parse(&value) {
                                                draft.update(|d| d.stage = stage);
                                            }
                                        })
                                    />
                                </div>
                                <div class="form-grid">
                                    <Input
                                        label="Probability %"
                                        input_type="number"
                                        value=field(|d| d.probability.clone())
                                        on_input=set_field(|d, v| d.probability = v)
                                    />
                                    <Input
                                        label="Close Date"
                                        input_type="date"
                                        value=field(|d| d.expected_close_date.clone())
                                        on_input=set_field(|d, v| d.expected_close_date = v)
                                    />
                                </div>
                                <Select
                                    label="Contact"
                                    options=contact_options.get()
                                    value=field(|d| d.contact_id.clone())
                                    on_change=set_field(|d, v| d.contact_id = v)
                                />
                                <Textarea
                                    label="Notes"
                                    value=field(|d| d.notes.clone())
                                    on_input=set_field(|d, v| d.notes = v)
                                />
                                <div class="form-footer">
                                    <Button
                                        variant=ButtonVariant::Secondary
                                        on_press=Callback::new(move |_| close_modal())
                                    >
                                        "Cancel"
                                    </Button>
                                    <Button button_type="submit" is_loading=is_submitting>
                                        {move || {
                                            if editing.with(|e| e.is_some()) {
                                                "Update"
                                            } else {
                                                "Create"
                                            }
                                        }}
                                    </Button>
                                </div>
                            </form>
                            }
                            .into_any()
                        }
                    }
                }}
            </Modal>
        </div>
    }
}
