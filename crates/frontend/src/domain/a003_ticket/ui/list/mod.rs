use chrono::{DateTime, Utc};
use contracts::domain::a003_ticket::{TabCounts, Ticket, TicketFilters, TicketStatusUpdate};
use contracts::enums::date_range::DateRange;
use contracts::enums::ticket_status::TicketStatus;
use contracts::enums::ticket_type::TicketType;
use contracts::shared::list_query::ListQuery;
use contracts::shared::lookup::LookupTables;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_ticket::api::{fetch_tickets, update_ticket_status};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{list_page_memo, SearchInput};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;

fn format_created(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn status_badge(status: &str) -> &'static str {
    TicketStatus::from_code(status)
        .map(|s| s.badge_class())
        .unwrap_or("badge badge--muted")
}

/// Ticket being edited inline.
#[derive(Debug, Clone, PartialEq)]
struct StatusDraft {
    ticket_id: String,
    status: String,
    admin_notes: String,
}

#[component]
#[allow(non_snake_case)]
pub fn TicketList() -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let auth = use_auth();

    let tickets = RwSignal::new(Vec::<Ticket>::new());
    let tab = RwSignal::new(TicketType::General);
    let filters = RwSignal::new(TicketFilters::default());
    let query = RwSignal::new(ListQuery::new(config.list.default_page_size));
    let draft = RwSignal::new(None::<StatusDraft>);
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let is_filter_expanded = RwSignal::new(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_tickets().await {
                Ok(rows) => tickets.set(rows),
                Err(e) => {
                    tickets.set(Vec::new());
                    notifications.report(&e);
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let counts = Memo::new(move |_| tickets.with(|t| TabCounts::of(t)));
    let visible = Memo::new(move |_| {
        let now = Utc::now();
        let tab = tab.get();
        tickets.with(|t| filters.with(|f| f.apply(t, tab, now)))
    });
    let page = list_page_memo(visible, query, LookupTables::new);

    let on_sort = Callback::new(move |field: String| query.update(|q| q.toggle_sort(&field)));
    let update_filters = move |change: &dyn Fn(&mut TicketFilters)| {
        filters.update(|f| change(f));
        query.update(|q| q.set_page(1));
    };
    let switch_tab = move |next: TicketType| {
        tab.set(next);
        draft.set(None);
        query.update(|q| q.set_page(1));
    };

    let active_filters = Signal::derive(move || {
        filters.with(|f| f.active_count()) + query.with(|q| usize::from(!q.trimmed_search().is_empty()))
    });
    let reset_filters = Callback::new(move |_| {
        filters.update(|f| f.reset());
        query.update(|q| q.set_search(""));
    });

    let save_draft = move || {
        let Some(current) = draft.get_untracked() else {
            return;
        };
        let Some(status) = TicketStatus::from_code(&current.status) else {
            notifications.warning("Select a status first.");
            return;
        };
        let updated_by = auth
            .with_untracked(|s| s.user_info.as_ref().map(|u| u.id.clone()))
            .unwrap_or_default();
        let update = TicketStatusUpdate {
            status,
            admin_notes: current.admin_notes.trim().to_string(),
            updated_by,
        };
        set_saving.set(true);
        spawn_local(async move {
            match update_ticket_status(&current.ticket_id, &update).await {
                Ok(()) => {
                    tickets.update(|rows| {
                        if let Some(t) = rows.iter_mut().find(|t| t.id == current.ticket_id) {
                            t.status = update.status.code().to_string();
                            t.admin_notes = Some(update.admin_notes.clone());
                        }
                    });
                    draft.set(None);
                    notifications.success(format!("Ticket marked {}", update.status.display_name()));
                }
                Err(e) => notifications.report(&e),
            }
            set_saving.set(false);
        });
    };

    let page_size_options = config.list.page_size_options.clone();

    view! {
        <PageFrame page_id="a003_ticket--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Support Tickets"
                subtitle=Signal::derive(move || format!("{} shown", page.with(|p| p.total_count)))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__tabs">
                {TicketType::all().into_iter().map(|t| view! {
                    <button
                        class=move || if tab.get() == t { "page__tab page__tab--active" } else { "page__tab" }
                        on:click=move |_| switch_tab(t)
                    >
                        {t.tab_label()}
                        <span class="badge badge--neutral">{move || counts.with(|c| c.get(t))}</span>
                    </button>
                }).collect_view()}
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters
                    on_reset=reset_filters
                    pagination_controls=move || {
                        let page_size_options = page_size_options.clone();
                        view! {
                            <PaginationControls
                                current_page=Signal::derive(move || page.with(|p| p.page))
                                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                                total_count=Signal::derive(move || page.with(|p| p.total_count))
                                page_size=Signal::derive(move || query.with(|q| q.page_size))
                                on_page_change=Callback::new(move |p| query.update(|q| q.set_page(p)))
                                on_page_size_change=Callback::new(move |s| query.update(|q| q.set_page_size(s)))
                                page_size_options=page_size_options
                            />
                        }
                    }
                    filter_content=move || view! {
                        <div class="filter-panel__fields">
                            <SearchInput
                                value=Signal::derive(move || query.with(|q| q.search_text.clone()))
                                on_change=Callback::new(move |text: String| query.update(|q| q.set_search(text)))
                                placeholder="Search tickets..."
                            />
                            <select
                                class="form__select"
                                prop:value=move || filters.with(|f| f.status.map(|s| s.code()).unwrap_or_default())
                                on:change=move |ev| {
                                    let code = event_target_value(&ev);
                                    update_filters(&|f| f.set_status_code(&code));
                                }
                            >
                                <option value="">"All statuses"</option>
                                {TicketStatus::all().into_iter().map(|s| view! {
                                    <option value=s.code()>{s.display_name()}</option>
                                }).collect_view()}
                            </select>
                            <select
                                class="form__select"
                                prop:value=move || filters.with(|f| match f.assigned {
                                    Some(true) => "true",
                                    Some(false) => "false",
                                    None => "",
                                })
                                on:change=move |ev| {
                                    let code = event_target_value(&ev);
                                    update_filters(&|f| f.set_assigned_code(&code));
                                }
                            >
                                <option value="">"Assigned or not"</option>
                                <option value="true">"Assigned"</option>
                                <option value="false">"Unassigned"</option>
                            </select>
                            <select
                                class="form__select"
                                prop:value=move || filters.with(|f| f.date_range.map(|d| d.code()).unwrap_or_default())
                                on:change=move |ev| {
                                    let code = event_target_value(&ev);
                                    update_filters(&|f| f.set_date_range_code(&code));
                                }
                            >
                                <option value="">"Any time"</option>
                                {DateRange::all().into_iter().map(|d| view! {
                                    <option value=d.code()>{d.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    }
                    filter_tags=move || {
                        let f = filters.get();
                        view! {
                            {f.status.map(|s| view! {
                                <FilterTag
                                    label=format!("Status: {}", s.display_name())
                                    on_remove=Callback::new(move |_| update_filters(&|f| f.status = None))
                                />
                            })}
                            {f.assigned.map(|a| view! {
                                <FilterTag
                                    label=if a { "Assigned" } else { "Unassigned" }
                                    on_remove=Callback::new(move |_| update_filters(&|f| f.assigned = None))
                                />
                            })}
                            {f.date_range.map(|d| view! {
                                <FilterTag
                                    label=d.display_name()
                                    on_remove=Callback::new(move |_| update_filters(&|f| f.date_range = None))
                                />
                            })}
                        }
                    }
                />

                {move || draft.get().map(|current| view! {
                    <div class="card status-editor">
                        <h3>{format!("Update ticket {}", current.ticket_id)}</h3>
                        <div class="form__grid">
                            <div class="form__group">
                                <label for="ticket_status">"Status *"</label>
                                <select
                                    id="ticket_status"
                                    class="form__select"
                                    prop:value=current.status.clone()
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| if let Some(d) = d { d.status = value });
                                    }
                                >
                                    {TicketStatus::all().into_iter().map(|s| view! {
                                        <option value=s.code()>{s.display_name()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label for="ticket_notes">"Admin Notes"</label>
                                <textarea
                                    id="ticket_notes"
                                    class="form__textarea"
                                    rows="3"
                                    prop:value=current.admin_notes.clone()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| if let Some(d) = d { d.admin_notes = value });
                                    }
                                />
                            </div>
                        </div>
                        <div class="details-actions">
                            <button
                                class="button button--primary"
                                disabled=move || saving.get()
                                on:click=move |_| save_draft()
                            >
                                {icon("save")}
                                {move || if saving.get() { " Saving..." } else { " Save" }}
                            </button>
                            <button class="button button--secondary" on:click=move |_| draft.set(None)>
                                {icon("x")}
                                " Cancel"
                            </button>
                        </div>
                    </div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Ticket" sort_field="ticket" query=query on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Subject" sort_field="subject" query=query on_sort=on_sort min_width=240.0 />
                                <TableHeaderCell min_width=140.0>
                                    {move || if tab.get() == TicketType::Order { "Order" } else { "Raised by" }}
                                </TableHeaderCell>
                                <SortableHeaderCell label="Status" sort_field="status" query=query on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell min_width=110.0>"Assigned"</TableHeaderCell>
                                <SortableHeaderCell label="Created" sort_field="created" query=query on_sort=on_sort min_width=160.0 />
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.with(|p| p.page_rows.clone())
                                key=|row| (row.id.clone(), row.status.clone())
                                children=move |row: Ticket| {
                                    let reference = if row.ticket_type == TicketType::Order {
                                        row.order_id.clone()
                                    } else {
                                        row.user_ref.clone()
                                    };
                                    let for_edit = StatusDraft {
                                        ticket_id: row.id.clone(),
                                        status: row.status.clone(),
                                        admin_notes: row.admin_notes.clone().unwrap_or_default(),
                                    };
                                    let number = row.display_number().to_string();
                                    let subject = row.subject.clone().unwrap_or_else(|| "-".to_string());
                                    let status_class = status_badge(&row.status);
                                    let status_text = row.status.clone();
                                    let assigned = if row.is_assigned() {
                                        row.assigned_to.clone().unwrap_or_else(|| "Yes".to_string())
                                    } else {
                                        "Unassigned".to_string()
                                    };
                                    let created = format_created(row.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{number}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{subject}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{reference.unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class=status_class>{status_text}</span>
                                            </TableCell>
                                            <TableCell>
                                                {assigned}
                                            </TableCell>
                                            <TableCell>{created}</TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--icon"
                                                    title="Update status"
                                                    on:click=move |_| draft.set(Some(for_edit.clone()))
                                                >
                                                    {icon("edit")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!loading.get() && page.with(|p| p.page_rows.is_empty())).then(|| view! {
                        <div class="table__empty">"No tickets found"</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_created_column_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_created(Some(at)), "05 Mar 2024, 14:07");
        assert_eq!(format_created(None), "-");
    }

    #[test]
    fn test_unknown_status_gets_muted_badge() {
        assert_eq!(status_badge("In Progress"), "badge badge--warning");
        assert_eq!(status_badge("Escalated"), "badge badge--muted");
    }
}
