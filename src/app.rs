use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{EstimatorPage, SettingsPage},
        shell::Shell,
    },
    util::{assets, persistence::AppSettings},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Estimator {},
    #[route("/settings")]
    Settings {},
}

/// Root component. Settings loaded at launch arrive as root context.
#[component]
pub fn App() -> Element {
    let settings = try_use_context::<AppSettings>().unwrap_or_default();
    let state = use_signal(move || AppState::new(settings));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Estimator() -> Element {
    rsx! { Shell { EstimatorPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
