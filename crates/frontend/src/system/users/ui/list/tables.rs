use contracts::domain::a004_employee::Employee;
use contracts::domain::a005_dealer::Dealer;
use contracts::shared::list_processor::ListPage;
use contracts::shared::list_query::ListQuery;
use contracts::system::users::AppUser;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::SortableHeaderCell;

pub(super) fn status_class(status: &str) -> &'static str {
    if status.eq_ignore_ascii_case("active") {
        "badge badge--success"
    } else {
        "badge badge--muted"
    }
}

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

fn empty_row(loading: Signal<bool>, is_empty: impl Fn() -> bool + Send + Sync + 'static) -> impl IntoView {
    move || (!loading.get() && is_empty()).then(|| view! { <div class="table__empty">"No records found"</div> })
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeTable(
    page: Memo<ListPage<Employee>>,
    query: RwSignal<ListQuery>,
    on_sort: Callback<String>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 900px;">
                <TableHeader>
                    <TableRow>
                        <SortableHeaderCell label="Name" sort_field="name" query=query on_sort=on_sort min_width=180.0 />
                        <SortableHeaderCell label="Employee ID" sort_field="employeeId" query=query on_sort=on_sort min_width=110.0 />
                        <SortableHeaderCell label="Email" sort_field="email" query=query on_sort=on_sort min_width=200.0 />
                        <TableHeaderCell min_width=120.0>"Phone"</TableHeaderCell>
                        <SortableHeaderCell label="Role" sort_field="role" query=query on_sort=on_sort min_width=140.0 />
                        <TableHeaderCell min_width=140.0>"Regions"</TableHeaderCell>
                        <SortableHeaderCell label="Status" sort_field="status" query=query on_sort=on_sort min_width=90.0 />
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || page.with(|p| p.page_rows.clone())
                        key=|row| row.id.clone()
                        children=move |row: Employee| {
                            let status = row.status_label().to_string();
                            let name = or_dash(row.full_name.as_deref());
                            let employee_id = or_dash(row.employee_id.as_deref());
                            let email = or_dash(row.email.as_deref());
                            let phone = or_dash(row.phone());
                            let role = or_dash(row.role_name());
                            let regions = or_dash(Some(&row.assigned_regions.join(", ")));
                            let badge = status_class(&status);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{employee_id}</TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{email}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{phone}</TableCell>
                                    <TableCell>{role}</TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{regions}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <span class=badge>{status.clone()}</span>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            {empty_row(loading, move || page.with(|p| p.page_rows.is_empty()))}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DealerTable(
    page: Memo<ListPage<Dealer>>,
    query: RwSignal<ListQuery>,
    on_sort: Callback<String>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 900px;">
                <TableHeader>
                    <TableRow>
                        <SortableHeaderCell label="Legal Name" sort_field="legalName" query=query on_sort=on_sort min_width=200.0 />
                        <SortableHeaderCell label="Trade Name" sort_field="tradeName" query=query on_sort=on_sort min_width=160.0 />
                        <TableHeaderCell min_width=160.0>"Contact"</TableHeaderCell>
                        <SortableHeaderCell label="City" sort_field="city" query=query on_sort=on_sort min_width=120.0 />
                        <TableHeaderCell min_width=90.0>"Role"</TableHeaderCell>
                        <SortableHeaderCell label="Status" sort_field="status" query=query on_sort=on_sort min_width=90.0 />
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || page.with(|p| p.page_rows.clone())
                        key=|row| row.id.clone()
                        children=move |row: Dealer| {
                            let contact = or_dash(row.contact_person.as_ref().map(|c| c.name.as_str()));
                            let status = row.status_label();
                            let name = row.display_name().to_string();
                            let trade_name = or_dash(row.trade_name.as_deref());
                            let city = or_dash(row.city());
                            let role = or_dash(row.role.as_deref());
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{trade_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{contact}</TableCell>
                                    <TableCell>{city}</TableCell>
                                    <TableCell>{role}</TableCell>
                                    <TableCell>
                                        <span class=status_class(status)>{status}</span>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            {empty_row(loading, move || page.with(|p| p.page_rows.is_empty()))}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AppUserTable(
    page: Memo<ListPage<AppUser>>,
    query: RwSignal<ListQuery>,
    on_sort: Callback<String>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 800px;">
                <TableHeader>
                    <TableRow>
                        <SortableHeaderCell label="Username" sort_field="username" query=query on_sort=on_sort min_width=160.0 />
                        <SortableHeaderCell label="Email" sort_field="email" query=query on_sort=on_sort min_width=220.0 />
                        <TableHeaderCell min_width=130.0>"Phone"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Role"</TableHeaderCell>
                        <SortableHeaderCell label="Status" sort_field="status" query=query on_sort=on_sort min_width=140.0 />
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || page.with(|p| p.page_rows.clone())
                        key=|row| row.id.clone()
                        children=move |row: AppUser| {
                            let status = row.status_label();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{or_dash(row.username.as_deref())}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{or_dash(row.email.as_deref())}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{or_dash(row.phone_number.as_deref())}</TableCell>
                                    <TableCell>{or_dash(row.role.as_deref())}</TableCell>
                                    <TableCell>
                                        <span class=status_class(status)>{status}</span>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            {empty_row(loading, move || page.with(|p| p.page_rows.is_empty()))}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badges_ignore_case() {
        assert_eq!(status_class("Active"), "badge badge--success");
        assert_eq!(status_class("active"), "badge badge--success");
        assert_eq!(status_class("Inactive (Deleted)"), "badge badge--muted");
    }

    #[test]
    fn test_blank_cells_show_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("North, South")), "North, South");
    }
}
