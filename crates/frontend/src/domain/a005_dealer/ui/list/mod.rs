use contracts::domain::a005_dealer::Dealer;
use contracts::shared::list_query::ListQuery;
use contracts::shared::lookup::LookupTables;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_dealer::api::fetch_dealers;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{list_page_memo, SearchInput};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;

fn margin_label(margin: Option<f64>) -> String {
    margin.map(|m| format!("{m:.1}%")).unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn DealerList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let config = use_config();
    let notifications = use_notifications();

    let dealers = RwSignal::new(Vec::<Dealer>::new());
    let query = RwSignal::new(ListQuery::new(config.list.default_page_size));
    let (loading, set_loading) = signal(false);
    let is_filter_expanded = RwSignal::new(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_dealers().await {
                Ok(rows) => dealers.set(rows),
                Err(e) => {
                    dealers.set(Vec::new());
                    notifications.report(&e);
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let page = list_page_memo(dealers, query, LookupTables::new);

    let on_sort = Callback::new(move |field: String| query.update(|q| q.toggle_sort(&field)));
    let active_filters =
        Signal::derive(move || query.with(|q| usize::from(!q.trimmed_search().is_empty())));
    let page_size_options = config.list.page_size_options.clone();

    view! {
        <PageFrame page_id="a005_dealer--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Dealers"
                subtitle=Signal::derive(move || format!("{} total", page.with(|p| p.total_count)))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| tabs_store.open_tab("a005_dealer_new", tab_label_for_key("a005_dealer_new"))
                >
                    {icon("plus")}
                    " Add Dealer"
                </Button>
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
                            placeholder="Search by name, GSTIN, contact, city..."
                        />
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=100.0>"Dealer ID"</TableHeaderCell>
                                <SortableHeaderCell label="Legal Name" sort_field="legalName" query=query on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Trade Name" sort_field="tradeName" query=query on_sort=on_sort min_width=160.0 />
                                <TableHeaderCell min_width=150.0>"GSTIN"</TableHeaderCell>
                                <SortableHeaderCell label="City" sort_field="city" query=query on_sort=on_sort min_width=120.0 />
                                <TableHeaderCell min_width=140.0>"Contact"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Margin"</TableHeaderCell>
                                <SortableHeaderCell label="Status" sort_field="status" query=query on_sort=on_sort min_width=90.0 />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.with(|p| p.page_rows.clone())
                                key=|row| row.id.clone()
                                children=move |row: Dealer| {
                                    let status = row.status_label();
                                    let status_class = if status == "active" { "badge badge--success" } else { "badge badge--muted" };
                                    let contact = row
                                        .contact_person
                                        .as_ref()
                                        .map(|c| c.name.clone())
                                        .filter(|n| !n.is_empty())
                                        .unwrap_or_else(|| "-".to_string());
                                    let dealer_id = row.dealer_id.clone().unwrap_or_else(|| "-".to_string());
                                    let name = row.display_name().to_string();
                                    let trade_name = row.trade_name.clone().unwrap_or_else(|| "-".to_string());
                                    let gstin = row.gstin.clone().unwrap_or_else(|| "-".to_string());
                                    let city = row.city().unwrap_or("-").to_string();
                                    let margin = margin_label(row.default_margin);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{dealer_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{trade_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{gstin}</TableCell>
                                            <TableCell>{city}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{contact}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">{margin}</TableCell>
                                            <TableCell>
                                                <span class=status_class>{status}</span>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!loading.get() && page.with(|p| p.page_rows.is_empty())).then(|| view! {
                        <div class="table__empty">"No dealers found"</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_label() {
        assert_eq!(margin_label(Some(15.0)), "15.0%");
        assert_eq!(margin_label(Some(7.5)), "7.5%");
        assert_eq!(margin_label(None), "-");
    }
}
