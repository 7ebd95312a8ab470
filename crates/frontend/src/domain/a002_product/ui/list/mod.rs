use contracts::domain::a002_product::{Product, CATEGORY_LOOKUP};
use contracts::shared::list_query::ListQuery;
use contracts::shared::lookup::{LookupTable, LookupTables};
use contracts::shared::select_option::SelectOption;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::api::category_options;
use crate::domain::a002_product::api::fetch_products;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_count, format_money, SortableHeaderCell};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{list_page_memo, SearchInput};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;

fn category_lookups(categories: &[SelectOption]) -> LookupTables {
    LookupTables::new().with(CATEGORY_LOOKUP, LookupTable::from_options("Category", categories))
}

fn live_status_class(status: Option<&str>) -> &'static str {
    match status {
        Some("Approved") | Some("Live") => "badge badge--success",
        Some("Rejected") => "badge badge--error",
        Some(_) => "badge badge--warning",
        None => "badge badge--muted",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let config = use_config();
    let notifications = use_notifications();

    let products = RwSignal::new(Vec::<Product>::new());
    let categories = RwSignal::new(Vec::<SelectOption>::new());
    let query = RwSignal::new(ListQuery::new(config.list.default_page_size));
    let (loading, set_loading) = signal(false);
    let is_filter_expanded = RwSignal::new(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_products().await {
                Ok(rows) => products.set(rows),
                Err(e) => {
                    products.set(Vec::new());
                    notifications.report(&e);
                }
            }
            set_loading.set(false);
        });
        spawn_local(async move {
            match category_options().await {
                Ok(options) => categories.set(options),
                Err(e) => {
                    categories.set(Vec::new());
                    notifications.report(&e);
                }
            }
        });
    };
    load();

    let page = list_page_memo(products, query, move || categories.with(|c| category_lookups(c)));

    let on_sort = Callback::new(move |field: String| query.update(|q| q.toggle_sort(&field)));
    let active_filters =
        Signal::derive(move || query.with(|q| usize::from(!q.trimmed_search().is_empty())));
    let page_size_options = config.list.page_size_options.clone();

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Products"
                subtitle=Signal::derive(move || format!("{} total", page.with(|p| p.total_count)))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| tabs_store.open_tab("a002_product_new", tab_label_for_key("a002_product_new"))
                >
                    {icon("plus")}
                    " Add Product"
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
                            placeholder="Search by name, SKU, part name, brand..."
                        />
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="SKU" sort_field="sku" query=query on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Product" sort_field="name" query=query on_sort=on_sort min_width=220.0 />
                                <TableHeaderCell min_width=120.0>"Brand"</TableHeaderCell>
                                <SortableHeaderCell label="Category" sort_field="category" query=query on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Price" sort_field="price" query=query on_sort=on_sort min_width=110.0 align="right" />
                                <SortableHeaderCell label="MRP" sort_field="mrp" query=query on_sort=on_sort min_width=110.0 align="right" />
                                <SortableHeaderCell label="Stock" sort_field="stock" query=query on_sort=on_sort min_width=80.0 align="right" />
                                <SortableHeaderCell label="Status" sort_field="status" query=query on_sort=on_sort min_width=100.0 />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.with(|p| p.page_rows.clone())
                                key=|row| row.id.clone()
                                children=move |row: Product| {
                                    let for_category = row.clone();
                                    let category = move || {
                                        categories.with(|c| for_category.category_label(&category_lookups(c)))
                                    };
                                    let status = row.live_status.clone();
                                    let status_class = live_status_class(status.as_deref());
                                    let sku = row.sku_code.clone().unwrap_or_else(|| "-".to_string());
                                    let name = row.display_name().to_string();
                                    let brand = row.brand_name().unwrap_or("-").to_string();
                                    let price = format_money(row.selling_price);
                                    let mrp = format_money(row.mrp_with_gst);
                                    let stock = format_count(row.no_of_stock);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{sku}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{brand}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{category}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                {price}
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                {mrp}
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                {stock}
                                            </TableCell>
                                            <TableCell>
                                                <span class=status_class>{status.unwrap_or_else(|| "Pending".to_string())}</span>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!loading.get() && page.with(|p| p.page_rows.is_empty())).then(|| view! {
                        <div class="table__empty">"No products found"</div>
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
    fn test_live_status_badges() {
        assert_eq!(live_status_class(Some("Approved")), "badge badge--success");
        assert_eq!(live_status_class(Some("Rejected")), "badge badge--error");
        assert_eq!(live_status_class(Some("Pending")), "badge badge--warning");
        assert_eq!(live_status_class(None), "badge badge--muted");
    }

    #[test]
    fn test_category_lookup_fallbacks() {
        let lookups = category_lookups(&[SelectOption::new("c1", "Brakes")]);
        assert_eq!(lookups.resolve(CATEGORY_LOOKUP, Some("c1")), "Brakes");
        assert_eq!(lookups.resolve(CATEGORY_LOOKUP, Some("c9")), "Unknown Category");
        assert_eq!(lookups.resolve(CATEGORY_LOOKUP, None), "No Category");
    }
}
