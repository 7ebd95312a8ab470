use contracts::domain::a001_category::{Category, VEHICLE_TYPE_LOOKUP};
use contracts::shared::list_query::ListQuery;
use contracts::shared::lookup::{LookupTable, LookupTables};
use contracts::shared::select_option::SelectOption;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a006_vehicle_catalog::api::fetch_types;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{list_page_memo, SearchInput};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;

fn status_badge_class(category: &Category) -> &'static str {
    if category.is_created() {
        "badge badge--success"
    } else {
        "badge badge--muted"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();

    let categories = RwSignal::new(Vec::<Category>::new());
    let vehicle_types = RwSignal::new(Vec::<SelectOption>::new());
    let query = RwSignal::new(ListQuery::new(config.list.default_page_size));
    let (loading, set_loading) = signal(false);
    let is_filter_expanded = RwSignal::new(false);

    // Categories and vehicle types load independently; either may fail alone.
    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_categories().await {
                Ok(rows) => categories.set(rows),
                Err(e) => {
                    categories.set(Vec::new());
                    notifications.report(&e);
                }
            }
            set_loading.set(false);
        });
        spawn_local(async move {
            match fetch_types().await {
                Ok(options) => vehicle_types.set(options),
                Err(e) => {
                    vehicle_types.set(Vec::new());
                    notifications.report(&e);
                }
            }
        });
    };
    load();

    let page = list_page_memo(categories, query, move || {
        vehicle_types.with(|types| {
            LookupTables::new().with(
                VEHICLE_TYPE_LOOKUP,
                LookupTable::from_options("Vehicle Type", types),
            )
        })
    });

    let on_sort = Callback::new(move |field: String| query.update(|q| q.toggle_sort(&field)));
    let active_filters = Signal::derive(move || {
        query.with(|q| usize::from(!q.trimmed_search().is_empty()))
    });
    let page_size_options = config.list.page_size_options.clone();

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Categories"
                subtitle=Signal::derive(move || format!("{} total", page.with(|p| p.total_count)))
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

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters
                    on_reset=Callback::new(move |_| query.update(|q| q.set_search("")))
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
                        <SearchInput
                            value=Signal::derive(move || query.with(|q| q.search_text.clone()))
                            on_change=Callback::new(move |text: String| query.update(|q| q.set_search(text)))
                            placeholder="Search by name, code or status..."
                        />
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_field="name" query=query on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Code" sort_field="code" query=query on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Vehicle Type" sort_field="vehicleType" query=query on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Status" sort_field="status" query=query on_sort=on_sort min_width=100.0 />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.with(|p| p.page_rows.clone())
                                key=|row| row.id.clone()
                                children=move |row: Category| {
                                    let type_key = row.vehicle_type_key().map(str::to_string);
                                    // Vehicle types may arrive after the rows.
                                    let vehicle_type = move || vehicle_types.with(|types| {
                                        LookupTable::from_options("Vehicle Type", types)
                                            .resolve(type_key.as_deref())
                                    });
                                    let badge = status_badge_class(&row);
                                    let name = row.display_name().to_string();
                                    let code = row.display_code().to_string();
                                    let status_text = row.display_status().to_string();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{code}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle_type}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=badge>{status_text}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!loading.get() && page.with(|p| p.page_rows.is_empty())).then(|| view! {
                        <div class="table__empty">"No categories found"</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
