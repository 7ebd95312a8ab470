//! Sidebar with collapsible menu groups. Items the signed-in role may not
//! open are hidden; the pages re-check access when they mount.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{policy_for_key, tab_label_for_key};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "package",
            items: vec![
                ("a001_category", tab_label_for_key("a001_category"), "layers"),
                ("a002_product", tab_label_for_key("a002_product"), "package"),
                ("a002_product_new", tab_label_for_key("a002_product_new"), "plus"),
            ],
        },
        MenuGroup {
            id: "dealers",
            label: "Dealers",
            icon: "store",
            items: vec![
                ("a005_dealer", tab_label_for_key("a005_dealer"), "store"),
                ("a005_dealer_new", tab_label_for_key("a005_dealer_new"), "plus"),
            ],
        },
        MenuGroup {
            id: "support",
            label: "Support",
            icon: "message-square",
            items: vec![("a003_ticket", tab_label_for_key("a003_ticket"), "message-square")],
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![
                ("sys_users", tab_label_for_key("sys_users"), "users"),
                ("a004_employee_new", tab_label_for_key("a004_employee_new"), "user-plus"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth_state = use_auth();

    let expanded_groups = RwSignal::new(vec!["catalog".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {move || {
                let user = auth_state.with(|s| s.user_info.clone());
                get_menu_groups().into_iter().filter_map(|group| {
                    let items: Vec<_> = group
                        .items
                        .into_iter()
                        .filter(|(id, _, _)| policy_for_key(id).allows(user.as_ref()))
                        .collect();
                    if items.is_empty() {
                        return None;
                    }

                    let group_id = group.id.to_string();
                    let gid_click = group_id.clone();
                    let gid_exp = group_id.clone();
                    let gid_show = group_id;
                    let items_stored = StoredValue::new(items);

                    Some(view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = gid_click.clone();
                                    expanded_groups.update(move |groups| {
                                        if let Some(pos) = groups.iter().position(|x| x == &gid) {
                                            groups.remove(pos);
                                        } else {
                                            groups.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.get().contains(&gid_show)>
                                <div class="app-sidebar__children">
                                    {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    ctx.active.get().as_deref() == Some(id)
                                                }
                                                style:padding-left="10px"
                                                on:click=move |_| ctx.open_tab(id, label)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    })
                }).collect_view()
            }}
        </div>
    }
}
