//! Tab content registry: the single place that maps a tab key to its view
//! and to the roles allowed to open it.

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_ticket::ui::list::TicketList;
use crate::domain::a004_employee::ui::details::EmployeeDetails;
use crate::domain::a005_dealer::ui::details::DealerDetails;
use crate::domain::a005_dealer::ui::list::DealerList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::guard::RequireRole;
use crate::system::users::ui::list::UsersListPage;
use contracts::system::auth::AccessPolicy;
use leptos::logging::log;
use leptos::prelude::*;

/// Roles allowed to open the tab `key`.
pub fn policy_for_key(key: &str) -> AccessPolicy {
    match key {
        "a001_category" | "a002_product" | "a002_product_new" => AccessPolicy::PRODUCT_EDITORS,
        "a003_ticket" => AccessPolicy::TICKET_AGENTS,
        "a005_dealer" | "a005_dealer_new" | "a004_employee_new" | "sys_users" => {
            AccessPolicy::USER_ADMINS
        }
        _ => AccessPolicy::STAFF,
    }
}

/// Renders the content of the tab `key`, wrapped in its role guard.
///
/// The page itself is only built when the guard lets it through, so a denied
/// user never triggers its fetches.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    if !is_registered(key) {
        log!("unknown tab key: {}", key);
        return view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any();
    }
    let policy = policy_for_key(key);
    let key = key.to_string();

    view! { <RequireRole policy=policy>{tab_view(&key, tabs_store)}</RequireRole> }.into_any()
}

const TAB_KEYS: &[&str] = &[
    "a001_category",
    "a002_product",
    "a002_product_new",
    "a003_ticket",
    "a004_employee_new",
    "a005_dealer",
    "a005_dealer_new",
    "sys_users",
];

pub fn is_registered(key: &str) -> bool {
    TAB_KEYS.contains(&key)
}

/// `tabs_store` lets add-forms open the matching list after a successful submit.
fn tab_view(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "a001_category" => view! { <CategoryList /> }.into_any(),

        "a002_product" => view! { <ProductList /> }.into_any(),
        "a002_product_new" => view! {
            <ProductDetails on_created=Callback::new(move |_| {
                tabs_store.open_tab("a002_product", super::tab_label_for_key("a002_product"));
            }) />
        }
        .into_any(),

        "a003_ticket" => view! { <TicketList /> }.into_any(),

        "a004_employee_new" => view! {
            <EmployeeDetails on_created=Callback::new(move |_| {
                tabs_store.open_tab("sys_users", super::tab_label_for_key("sys_users"));
            }) />
        }
        .into_any(),

        "a005_dealer" => view! { <DealerList /> }.into_any(),
        "a005_dealer_new" => view! {
            <DealerDetails on_created=Callback::new(move |_| {
                tabs_store.open_tab("a005_dealer", super::tab_label_for_key("a005_dealer"));
            }) />
        }
        .into_any(),

        "sys_users" => view! { <UsersListPage /> }.into_any(),

        _ => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    #[test]
    fn test_policies_per_tab() {
        assert!(policy_for_key("a002_product_new").allows_role(Role::InventoryStaff));
        assert!(!policy_for_key("a002_product_new").allows_role(Role::FulfillmentStaff));
        assert!(policy_for_key("a003_ticket").allows_role(Role::FulfillmentStaff));
        assert!(!policy_for_key("sys_users").allows_role(Role::InventoryStaff));
        assert!(!policy_for_key("a005_dealer").allows_role(Role::Dealer));
    }

    #[test]
    fn test_every_registered_tab_has_a_label() {
        for key in TAB_KEYS {
            assert_ne!(super::super::tab_label_for_key(key), "Untitled", "{key}");
        }
        assert!(!is_registered("a024_bi_indicator"));
    }
}
