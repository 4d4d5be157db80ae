//! Page header: breadcrumb, version badge, and theme switch

use dioxus::prelude::*;

#[component]
pub fn Header(knob_class: String, on_toggle_theme: EventHandler<MouseEvent>) -> Element {
    rsx! {
        header {
            class: "flex justify-between items-center mb-6",
            div {
                class: "text-sm text-gray-500 dark:text-gray-400",
                "Web Tech > Documentation > Installation"
            }
            div {
                class: "flex items-center space-x-4",
                div {
                    class: "bg-red-600 text-white text-xs font-semibold px-3 py-1 rounded-full",
                    "Version 1.0"
                }
                ThemeToggle { knob_class, onclick: on_toggle_theme }
            }
        }
    }
}

#[component]
fn ThemeToggle(knob_class: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "relative w-12 h-6 bg-gray-200 dark:bg-gray-700 rounded-full flex items-center transition-colors duration-300",
            aria_label: "Toggle dark mode",
            onclick: move |evt| onclick.call(evt),
            span { class: "{knob_class}" }
        }
    }
}
