mod tables;

use contracts::domain::a004_employee::Employee;
use contracts::domain::a005_dealer::Dealer;
use contracts::shared::error::DashboardError;
use contracts::shared::list_processor::{ListPage, ListRow};
use contracts::shared::list_query::ListQuery;
use contracts::shared::lookup::LookupTables;
use contracts::system::users::{
    available_regions, available_roles, AppUser, DirectoryEntry, UserFilters, UserKind, ALL,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use thaw::*;

use crate::domain::a004_employee::api::fetch_employees;
use crate::domain::a005_dealer::api::fetch_dealers;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{list_page_memo, SearchInput};
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::api::fetch_app_users;
use tables::{AppUserTable, DealerTable, EmployeeTable};

/// Rows of one tab after the role/status/region filters, then searched,
/// sorted and paged. Stays empty while another tab is active.
fn directory_page<T>(
    rows: RwSignal<Vec<T>>,
    filters: RwSignal<UserFilters>,
    query: RwSignal<ListQuery>,
) -> Memo<ListPage<T>>
where
    T: DirectoryEntry + ListRow + PartialEq + Send + Sync + 'static,
{
    let filtered = Memo::new(move |_| {
        filters.with(|f| {
            if f.kind == T::KIND {
                rows.with(|r| f.apply(r))
            } else {
                Vec::new()
            }
        })
    });
    list_page_memo(filtered, query, LookupTables::new)
}

/// Fetches into `rows`, tracking the number of requests in flight.
fn load_into<T, F>(
    rows: RwSignal<Vec<T>>,
    in_flight: RwSignal<usize>,
    notifications: NotificationService,
    fetch: fn() -> F,
) where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, DashboardError>> + 'static,
{
    in_flight.update(|n| *n += 1);
    spawn_local(async move {
        match fetch().await {
            Ok(data) => rows.set(data),
            Err(e) => {
                rows.set(Vec::new());
                notifications.report(&e);
            }
        }
        in_flight.update(|n| *n = n.saturating_sub(1));
    });
}

#[component]
#[allow(non_snake_case)]
pub fn UsersListPage() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let config = use_config();
    let notifications = use_notifications();

    let employees = RwSignal::new(Vec::<Employee>::new());
    let dealers = RwSignal::new(Vec::<Dealer>::new());
    let users = RwSignal::new(Vec::<AppUser>::new());
    let in_flight = RwSignal::new(0usize);
    let loading = Signal::derive(move || in_flight.get() > 0);

    let filters = RwSignal::new(UserFilters::new(UserKind::Employee));
    let query = RwSignal::new(ListQuery::new(config.list.default_page_size));
    let is_filter_expanded = RwSignal::new(false);
    let kind = Memo::new(move |_| filters.with(|f| f.kind));

    let load = move || {
        load_into(employees, in_flight, notifications, fetch_employees);
        load_into(dealers, in_flight, notifications, fetch_dealers);
        load_into(users, in_flight, notifications, fetch_app_users);
    };
    load();

    let employee_page = directory_page(employees, filters, query);
    let dealer_page = directory_page(dealers, filters, query);
    let user_page = directory_page(users, filters, query);

    let roles = Memo::new(move |_| match kind.get() {
        UserKind::Employee => employees.with(|r| available_roles(r)),
        UserKind::Dealer => dealers.with(|r| available_roles(r)),
        UserKind::Users => users.with(|r| available_roles(r)),
    });
    let regions = Memo::new(move |_| employees.with(|r| available_regions(r)));

    let (current_page, total_pages, total_count) = (
        Signal::derive(move || match kind.get() {
            UserKind::Employee => employee_page.with(|p| p.page),
            UserKind::Dealer => dealer_page.with(|p| p.page),
            UserKind::Users => user_page.with(|p| p.page),
        }),
        Signal::derive(move || match kind.get() {
            UserKind::Employee => employee_page.with(|p| p.total_pages),
            UserKind::Dealer => dealer_page.with(|p| p.total_pages),
            UserKind::Users => user_page.with(|p| p.total_pages),
        }),
        Signal::derive(move || match kind.get() {
            UserKind::Employee => employee_page.with(|p| p.total_count),
            UserKind::Dealer => dealer_page.with(|p| p.total_count),
            UserKind::Users => user_page.with(|p| p.total_count),
        }),
    );

    let switch_kind = move |next: UserKind| {
        filters.set(UserFilters::new(next));
        query.update(|q| {
            q.set_search("");
            q.clear_sort();
        });
    };
    let set_filter = move |change: &dyn Fn(&mut UserFilters)| {
        filters.update(|f| change(f));
        query.update(|q| q.set_page(1));
    };
    let on_search = Callback::new(move |text: String| {
        filters.update(|f| f.search = text.clone());
        query.update(|q| q.set_search(text));
    });
    let on_sort = Callback::new(move |field: String| query.update(|q| q.toggle_sort(&field)));
    let active_filters = Signal::derive(move || filters.with(|f| f.applied_count()));
    let reset_filters = Callback::new(move |_| {
        filters.update(|f| f.reset());
        query.update(|q| q.set_search(""));
    });

    let page_size_options = config.list.page_size_options.clone();

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="User Management"
                subtitle=Signal::derive(move || format!("{} shown", total_count.get()))
            >
                {move || match kind.get() {
                    UserKind::Employee => Some(("a004_employee_new", "Add Employee")),
                    UserKind::Dealer => Some(("a005_dealer_new", "Add Dealer")),
                    UserKind::Users => None,
                }
                .map(|(key, label)| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab(key, tab_label_for_key(key))
                    >
                        {icon("user-plus")}
                        {format!(" {label}")}
                    </Button>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__tabs">
                {UserKind::all().into_iter().map(|k| view! {
                    <button
                        class=move || if kind.get() == k { "page__tab page__tab--active" } else { "page__tab" }
                        on:click=move |_| switch_kind(k)
                    >
                        {k.display_name()}
                        <span class="badge badge--neutral">
                            {move || match k {
                                UserKind::Employee => employees.with(Vec::len),
                                UserKind::Dealer => dealers.with(Vec::len),
                                UserKind::Users => users.with(Vec::len),
                            }}
                        </span>
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
                                current_page=current_page
                                total_pages=total_pages
                                total_count=total_count
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
                                value=Signal::derive(move || filters.with(|f| f.search.clone()))
                                on_change=on_search
                                placeholder="Search by name, email, phone..."
                            />
                            {move || (kind.get() != UserKind::Users).then(|| view! {
                                <select
                                    class="form__select"
                                    prop:value=move || filters.with(|f| f.role.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_filter(&|f| f.role = value.clone());
                                    }
                                >
                                    <option value=ALL>"All roles"</option>
                                    {move || roles.get().into_iter().map(|r| view! {
                                        <option value=r.clone()>{r.clone()}</option>
                                    }).collect_view()}
                                </select>
                            })}
                            <select
                                class="form__select"
                                prop:value=move || filters.with(|f| f.status.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_filter(&|f| f.status = value.clone());
                                }
                            >
                                <option value=ALL>"All statuses"</option>
                                {move || kind.get().statuses().iter().map(|s| view! {
                                    <option value=*s>{*s}</option>
                                }).collect_view()}
                            </select>
                            {move || (kind.get() == UserKind::Employee).then(|| view! {
                                <select
                                    class="form__select"
                                    prop:value=move || filters.with(|f| f.region.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_filter(&|f| f.region = value.clone());
                                    }
                                >
                                    <option value=ALL>"All regions"</option>
                                    {move || regions.get().into_iter().map(|r| view! {
                                        <option value=r.clone()>{r.clone()}</option>
                                    }).collect_view()}
                                </select>
                            })}
                        </div>
                    }
                    filter_tags=move || {
                        let f = filters.get();
                        view! {
                            {(f.kind != UserKind::Users && f.role != ALL).then(|| view! {
                                <FilterTag
                                    label=format!("Role: {}", f.role)
                                    on_remove=Callback::new(move |_| set_filter(&|f| f.role = ALL.to_string()))
                                />
                            })}
                            {(f.status != ALL).then(|| view! {
                                <FilterTag
                                    label=format!("Status: {}", f.status)
                                    on_remove=Callback::new(move |_| set_filter(&|f| f.status = ALL.to_string()))
                                />
                            })}
                            {(f.region != ALL).then(|| view! {
                                <FilterTag
                                    label=format!("Region: {}", f.region)
                                    on_remove=Callback::new(move |_| set_filter(&|f| f.region = ALL.to_string()))
                                />
                            })}
                        }
                    }
                />

                {move || match kind.get() {
                    UserKind::Employee => view! {
                        <EmployeeTable page=employee_page query=query on_sort=on_sort loading=loading />
                    }
                    .into_any(),
                    UserKind::Dealer => view! {
                        <DealerTable page=dealer_page query=query on_sort=on_sort loading=loading />
                    }
                    .into_any(),
                    UserKind::Users => view! {
                        <AppUserTable page=user_page query=query on_sort=on_sort loading=loading />
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
