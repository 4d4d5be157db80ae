use crate::app::AppState;
use crate::layout::LayoutState;
use crate::ui::content::GettingStarted;
use crate::ui::header::Header;
use crate::ui::sidebar::Sidebar;
use dioxus::prelude::*;

/// The documentation page: sidebar, header, and content
#[component]
pub fn DocumentationLayout() -> Element {
    let app_state = use_context::<AppState>();
    let mut layout = use_signal(LayoutState::default);

    // Rehydrate the theme once, after the first render
    {
        let store = app_state.store.clone();
        use_effect(move || {
            layout.write().restore(store.as_ref());
        });
    }

    let view = layout.read().view();
    let store = app_state.store.clone();

    rsx! {
        div {
            class: view.root_class,
            div {
                class: "flex min-h-screen bg-gray-100 dark:bg-gray-900 transition-all duration-300",

                Sidebar {
                    view: view.clone(),
                    on_toggle: move |_| layout.write().toggle_sidebar(),
                }

                // Main content
                div {
                    class: "flex-grow p-8 transition duration-300 ease-in-out",
                    Header {
                        knob_class: view.knob_class.clone(),
                        on_toggle_theme: move |_| layout.write().toggle_dark_mode(store.as_ref()),
                    }
                    GettingStarted {}
                }
            }
        }
    }
}
