//! Static page content

use dioxus::prelude::*;

const INTRO: &str = "Web Tech BD is a dynamic startup software company dedicated to \
providing innovative and customized digital solutions for a wide range of clients. \
With expertise in modern technologies, Web Tech BD develops high-quality, scalable, \
and efficient software products tailored to meet the unique needs of businesses. \
The company focuses on delivering exceptional value, fostering innovation, and \
maintaining high standards in software development, making it a trusted partner \
for enterprises seeking technology-driven growth and transformation.";

#[component]
pub fn GettingStarted() -> Element {
    rsx! {
        section {
            h2 {
                class: "text-3xl font-semibold mb-4 text-gray-900 dark:text-gray-100",
                "Setup"
            }
            div {
                class: "bg-white dark:bg-gray-800 shadow-lg p-6 rounded-lg transition duration-300 ease-in-out",
                h3 {
                    class: "text-xl font-medium mb-4 text-gray-900 dark:text-gray-100",
                    "Getting Started"
                }
                p { class: "text-gray-700 dark:text-gray-300 mb-4", "{INTRO}" }
            }
        }
    }
}
