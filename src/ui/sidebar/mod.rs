//! Collapsible navigation sidebar

use crate::layout::{LayoutView, NavItemView};
use dioxus::prelude::*;

#[component]
pub fn Sidebar(view: LayoutView, on_toggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "{view.sidebar_class}",

            // Brand and collapse button
            div {
                class: "flex items-center justify-between mb-8",
                div {
                    class: "font-bold text-2xl text-blue-600 dark:text-blue-400 tracking-wider",
                    "{view.brand}"
                }
                button {
                    class: "p-2 rounded-md focus:outline-none",
                    onclick: move |evt| on_toggle.call(evt),
                    span { class: view.menu_icon_class, "☰" }
                }
            }

            nav {
                class: "space-y-6",
                for item in view.nav_items {
                    NavItem { key: "{item.badge}", item }
                }
            }
        }
    }
}

#[component]
fn NavItem(item: NavItemView) -> Element {
    rsx! {
        div {
            class: "{item.row_class}",
            span { class: item.badge_class, "{item.badge}" }
            {item.label.map(|label| rsx! { span { class: "ml-3", "{label}" } })}
        }
    }
}
