use dioxus::prelude::*;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    value_class: &'static str,
    description: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "kpi-card",
            h3 { class: "kpi-title", "{title}" }
            p { class: "{value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-description", "{desc}" }
            }
        }
    }
}
