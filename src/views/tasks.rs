//! Tasks View
//!
//! Task list split into a priority-sorted pending section and a capped
//! completed preview. The completion checkbox flips exactly `is_completed`
//! and leaves every other field alone.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ContactFilter, TaskFilter};
use crate::components::{
    Badge, Button, ButtonVariant, Card, DeleteConfirmButton, EmptyState, Input, Modal, Select,
    Textarea,
};
use crate::format::{format_date, is_overdue, priority_color};
use crate::models::{
    non_empty, Contact, Task, TaskPayload, TaskPriority, TaskStatus, TaskType,
};
use crate::seq::FetchSeq;

/// Draft object backing the create/edit form
#[derive(Clone, Debug, Default, PartialEq)]
struct TaskDraft {
    title: String,
    description: String,
    task_type: TaskType,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: String,
    contact_id: String,
}

impl TaskDraft {
    fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            task_type: task.task_type,
            priority: task.priority,
            status: task.status,
            due_date: task
                .due_date
                .as_deref()
                .map(crate::format::date_input_value)
                .unwrap_or_default(),
            contact_id: task.contact_id.clone().unwrap_or_default(),
        }
    }

    fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    fn to_payload(&self) -> TaskPayload {
        TaskPayload {
            title: Some(self.title.trim().to_string()),
            description: non_empty(&self.description),
            task_type: Some(self.task_type),
            priority: Some(self.priority),
            status: Some(self.status),
            due_date: non_empty(&self.due_date),
            contact_id: non_empty(&self.contact_id),
            is_completed: None,
        }
    }
}

fn contact_name(contacts: &[Contact], contact_id: Option<&str>) -> Option<String> {
    let id = contact_id?;
    contacts.iter().find(|c| c.id == id).map(Contact::full_name)
}

#[component]
pub fn TasksView() -> impl IntoView {
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (contacts, set_contacts) = signal(Vec::<Contact>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (search_query, set_search_query) = signal(String::new());
    let (status_filter, set_status_filter) = signal(None::<TaskStatus>);
    let (priority_filter, set_priority_filter) = signal(None::<TaskPriority>);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (form_open, set_form_open) = signal(false);
    let (editing, set_editing) = signal(None::<Task>);
    let (is_submitting, set_is_submitting) = signal(false);
    let draft = RwSignal::new(TaskDraft::default());
    let seq = FetchSeq::new();

    Effect::new({
        let seq = seq.clone();
        move |_| {
            let _ = reload_trigger.get();
            let filter = TaskFilter {
                status: status_filter.get(),
                priority: priority_filter.get(),
                search: non_empty(&search_query.get()),
            };
            let token = seq.begin();
            let seq = seq.clone();
            spawn_local(async move {
                let tasks_result = api::list_tasks(&filter).await;
                let contacts_result = api::list_contacts(&ContactFilter::default()).await;
                if !seq.is_current(token) {
                    return;
                }
                match tasks_result {
                    Ok(loaded) => set_tasks.set(loaded),
                    Err(err) => {
                        web_sys::console::error_1(&format!("[TASKS] load failed: {}", err).into());
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
        draft.set(TaskDraft::default());
        set_editing.set(None);
        set_form_open.set(true);
    };

    let open_edit = move |task: Task| {
        draft.set(TaskDraft::from_task(&task));
        set_editing.set(Some(task));
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
        let editing_id = editing.get().map(|t| t.id);
        set_is_submitting.set(true);
        spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update_task(id, &payload).await,
                None => api::create_task(&payload).await,
            };
            match result {
                Ok(_) => {
                    set_form_open.set(false);
                    set_editing.set(None);
                    reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[TASKS] save failed: {}", err).into());
                }
            }
            set_is_submitting.set(false);
        });
    };

    let toggle_complete = move |task: &Task| {
        let id = task.id.clone();
        let payload = TaskPayload::completion(!task.is_completed);
        spawn_local(async move {
            match api::update_task(&id, &payload).await {
                Ok(_) => reload(),
                Err(err) => {
                    web_sys::console::error_1(&format!("[TASKS] toggle failed: {}", err).into());
                }
            }
        });
    };

    let delete_task = move |id: String| {
        spawn_local(async move {
            match api::delete_task(&id).await {
                Ok(()) => reload(),
                Err(err) => {
                    web_sys::console::error_1(&format!("[TASKS] delete failed: {}", err).into());
                }
            }
        });
    };

    let pending_tasks = Memo::new(move |_| {
        let mut pending: Vec<Task> = tasks.with(|list| {
            list.iter().filter(|t| !t.is_completed).cloned().collect()
        });
        pending.sort_by_key(|t| t.priority.rank());
        pending
    });
    let completed_tasks = Memo::new(move |_| {
        tasks.with(|list| {
            list.iter()
                .filter(|t| t.is_completed)
                .cloned()
                .collect::<Vec<Task>>()
        })
    });

    let field = move |get: fn(&TaskDraft) -> String| Signal::derive(move || draft.with(get));
    let set_field = move |set: fn(&mut TaskDraft, String)| {
        Callback::new(move |value: String| draft.update(|d| set(d, value)))
    };

    let form_title = Signal::derive(move || {
        if editing.with(|e| e.is_some()) {
            "Edit Task".to_string()
        } else {
            "New Task".to_string()
        }
    });

    let contact_options = Memo::new(move |_| {
        let mut options = vec![(String::new(), "None".to_string())];
        contacts.with(|list| {
            options.extend(list.iter().map(|c| (c.id.clone(), c.full_name())));
        });
        options
    });

    view! {
        <div class="view tasks-view">
            <div class="view-toolbar">
                <div class="view-toolbar-left">
                    <span class="view-count">
                        {move || format!("{} pending", pending_tasks.get().len())}
                    </span>
                    <span class="view-count-sub">
                        {move || format!("{} done", completed_tasks.get().len())}
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
                            set_status_filter.set(TaskStatus::parse(&event_target_value(&ev)))
                        }
                    >
                        <option value="">"Status"</option>
                        {TaskStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            set_priority_filter.set(TaskPriority::parse(&event_target_value(&ev)))
                        }
                    >
                        <option value="">"Priority"</option>
                        {TaskPriority::ALL
                            .iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                    <Button on_press=Callback::new(open_create)>"Add Task"</Button>
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
                if tasks.with(|list| list.is_empty()) {
                    return view! {
                        <Card>
                            <EmptyState
                                title="No tasks yet"
                                description="Get started by adding your first task"
                            >
                                <Button on_press=Callback::new(open_create)>"Add Task"</Button>
                            </EmptyState>
                        </Card>
                    }
                    .into_any();
                }
                view! {
                    <div class="list-card">
                        <For
                            each=move || pending_tasks.get()
                            key=|task| task.id.clone()
                            children=move |task| {
                                let toggle_target = task.clone();
                                let edit_target = task.clone();
                                let delete_id = task.id.clone();
                                let row_contact_id = task.contact_id.clone();
                                let overdue =
                                    is_overdue(task.due_date.as_deref(), task.is_completed);
                                view! {
                                    <div class="list-row">
                                        <button
                                            class="task-checkbox"
                                            on:click=move |_| toggle_complete(&toggle_target)
                                        ></button>
                                        <div class="list-row-main">
                                            <div class="list-row-title">
                                                <span class="task-title">{task.title.clone()}</span>
                                                <Badge color=priority_color(task.priority)>
                                                    {task.priority.label()}
                                                </Badge>
                                            </div>
                                            <div class="list-row-meta">
                                                <span class="task-type">{task.task_type.label()}</span>
                                                {task.due_date.as_ref().map(|due| {
                                                    let text = format_date(due);
                                                    view! {
                                                        <span class={if overdue {
                                                            "task-due overdue"
                                                        } else {
                                                            "task-due"
                                                        }}>
                                                            {text}
                                                            {overdue.then_some(" !")}
                                                        </span>
                                                    }
                                                })}
                                                {move || {
                                                    contacts
                                                        .with(|list| {
                                                            contact_name(list, row_contact_id.as_deref())
                                                        })
                                                        .map(|name| {
                                                            view! { <span class="task-contact">{name}</span> }
                                                        })
                                                }}
                                            </div>
                                        </div>
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
                                                    delete_task(delete_id.clone())
                                                })
                                            />
                                        </div>
                                    </div>
                                }
                            }
                        />

                        <Show when=move || !completed_tasks.get().is_empty()>
                            <div class="list-section-label">
                                {move || format!("Completed ({})", completed_tasks.get().len())}
                            </div>
                            <For
                                each=move || {
                                    completed_tasks.get().into_iter().take(5).collect::<Vec<_>>()
                                }
                                key=|task| task.id.clone()
                                children=move |task| {
                                    let toggle_target = task.clone();
                                    let delete_id = task.id.clone();
                                    view! {
                                        <div class="list-row completed">
                                            <button
                                                class="task-checkbox checked"
                                                on:click=move |_| toggle_complete(&toggle_target)
                                            >
                                                "✓"
                                            </button>
                                            <div class="list-row-main">
                                                <span class="task-title done">{task.title.clone()}</span>
                                                {task.completed_at.as_ref().map(|at| {
                                                    view! {
                                                        <span class="task-completed-at">
                                                            {format_date(at)}
                                                        </span>
                                                    }
                                                })}
                                            </div>
                                            <DeleteConfirmButton
                                                button_class="row-delete-btn"
                                                on_confirm=Callback::new(move |_| {
                                                    delete_task(delete_id.clone())
                                                })
                                            />
                                        </div>
                                    }
                                }
                            />
                            <Show when=move || (completed_tasks.get().len() > 5)>
                                <div class="list-overflow">
                                    {move || {
                                        format!("+{} more completed", completed_tasks.get().len() - 5)
                                    }}
                                </div>
                            </Show>
                        </Show>
                    </div>
                }
                .into_any()
            }}

            <Modal open=form_open on_close=Callback::new(move |_| close_form()) title=form_title>
                {move || {
                    let type_options: Vec<(String, String)> = TaskType::ALL
                        .iter()
                        .map(|t| (t.as_str().to_string(), t.label().to_string()))
                        .collect();
                    let priority_options: Vec<(String, String)> = TaskPriority::ALL
                        .iter()
                        .map(|p| (p.as_str().to_string(), p.label().to_string()))
                        .collect();
                    let status_options: Vec<(String, String)> = TaskStatus::ALL
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
                            <Textarea
                                label="Description"
                                value=field(|d| d.description.clone())
                                on_input=set_field(|d, v| d.description = v)
                            />
                            <div class="form-grid">
                                <Select
                                    label="Type"
                                    options=type_options.clone()
                                    value=field(|d| d.task_type.as_str().to_string())
                                    on_change=Callback::new(move |value: String| {
                                        if let Some(task_type) = TaskType::parse(&value) {
                                            draft.update(|d| d.task_type = task_type);
                                        }
                                    })
                                />
                                <Select
                                    label="Priority"
                                    options=priority_options.clone()
                                    value=field(|d| d.priority.as_str().to_string())
                                    on_change=Callback::new(move |value: String| {
                                        if let Some(priority) = TaskPriority::parse(&value) {
                                            draft.update(|d| d.priority = priority);
                                        }
                                    })
                                />
                            </div>
                            <div class="form-grid">
                                <Select
                                    label="Status"
                                    options=status_options.clone()
                                    value=field(|d| d.status.as_str().to_string())
                                    on_change=Callback::new(move |value: String| {
                                        if let Some(status) = TaskStatus::parse(&value) {
                                            draft.update(|d| d.status = status);
                                        }
                                    })
                                />
                                <Input
                                    label="Due Date"
                                    input_type="date"
                                    value=field(|d| d.due_date.clone())
                                    on_input=set_field(|d, v| d.due_date = v)
                                />
                            </div>
                            <Select
                                label="Contact"
                                options=contact_options.get()
                                value=field(|d| d.contact_id.clone())
                                on_change=set_field(|d, v| d.contact_id = v)
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
        </div>
    }
}
