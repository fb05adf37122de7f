use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{APP_NAME, APP_TAGLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "page",
            header {
                class: "panel app-header",
                div { class: "app-title-row",
                    span { class: "app-icon", "🧮" }
                    div {
                        h1 { class: "app-title", "{APP_NAME}" }
                        p { class: "app-tagline", "{APP_TAGLINE}" }
                    }
                }
                nav { class: "app-nav",
                    NavButton {
                        active: matches!(current_route, Route::Estimator {}),
                        onclick: move |_| { nav.push(Route::Estimator {}); },
                        label: "Estimator",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Settings {}),
                        onclick: move |_| { nav.push(Route::Settings {}); },
                        label: "⚙️ Settings",
                    }
                }
            }
            main { class: "page-body",
                {children}
            }
            footer { class: "app-footer",
                "UPDC Model - Predictive Cost Estimation for Raw Land & Construction"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
